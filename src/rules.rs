use crate::cell::Cell;

/// The outcome of applying the B3/S23 rule to a single cell.
///
/// ```notrust
/// alive, n < 2      -> Underpopulation (dies)
/// alive, n in 2..=3 -> Survival        (lives)
/// alive, n > 3      -> Overpopulation  (dies)
/// dead,  n == 3     -> Reproduction    (born)
/// dead,  otherwise  -> Dormant         (stays dead)
/// ```
///
/// See: https://conwaylife.com/wiki/Conway%27s_Game_of_Life
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Transition {
    Underpopulation,
    Survival,
    Overpopulation,
    Reproduction,
    Dormant,
}

impl Transition {
    /// Classify a cell given its current state and its number of live neighbors.
    pub const fn of(cell: Cell, live_neighbors: u8) -> Self {
        match (cell, live_neighbors) {
            (Cell::Alive, 0..=1) => Transition::Underpopulation,
            (Cell::Alive, 2..=3) => Transition::Survival,
            (Cell::Alive, _) => Transition::Overpopulation,
            (Cell::Dead, 3) => Transition::Reproduction,
            (Cell::Dead, _) => Transition::Dormant,
        }
    }

    /// State of the cell in the next generation.
    pub const fn result(self) -> Cell {
        match self {
            Transition::Survival | Transition::Reproduction => Cell::Alive,
            Transition::Underpopulation | Transition::Overpopulation | Transition::Dormant => {
                Cell::Dead
            }
        }
    }
}

/// Next state of `cell` with `live_neighbors` live cells around it.
pub const fn transition(cell: Cell, live_neighbors: u8) -> Cell {
    Transition::of(cell, live_neighbors).result()
}
