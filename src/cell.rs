use std::fmt;

/// State of a single grid position.
#[derive(Debug, Default, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Cell {
    Alive,

    #[default]
    Dead,
}

impl Cell {
    pub const fn is_alive(self) -> bool {
        matches!(self, Cell::Alive)
    }

    /// `1` for a live cell, `0` otherwise. This is how cells are printed and summed.
    pub const fn as_digit(self) -> u8 {
        match self {
            Cell::Alive => 1,
            Cell::Dead => 0,
        }
    }

    /// Map a pattern character to a cell, if it denotes one.
    ///
    /// Accepts the usual plaintext conventions: `1 O o # *` are alive and `0 . _` are dead.
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            '1' | 'O' | 'o' | '#' | '*' => Some(Cell::Alive),
            '0' | '.' | '_' => Some(Cell::Dead),
            _ => None,
        }
    }
}

impl From<bool> for Cell {
    fn from(alive: bool) -> Self {
        if alive { Cell::Alive } else { Cell::Dead }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_digit())
    }
}

#[cfg(test)]
mod tests {
    use super::Cell;

    #[test]
    fn default_cell_is_dead() {
        assert_eq!(Cell::default(), Cell::Dead);
    }

    #[test]
    fn pattern_characters() {
        for c in ['1', 'O', 'o', '#', '*'] {
            assert_eq!(Cell::from_char(c), Some(Cell::Alive), "{c:?}");
        }

        for c in ['0', '.', '_'] {
            assert_eq!(Cell::from_char(c), Some(Cell::Dead), "{c:?}");
        }

        assert_eq!(Cell::from_char('x'), None);
    }

    #[test]
    fn prints_as_digit() {
        assert_eq!(Cell::Alive.to_string(), "1");
        assert_eq!(Cell::Dead.to_string(), "0");
    }
}
