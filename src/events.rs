/// What the user asked for at the end of a generation.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Decision {
    /// Compute another generation
    Continue,

    /// Exit the simulation
    Quit,
}

impl Decision {
    /// Interpret the character the user typed at the prompt. Only `q`/`Q` quits.
    pub fn from_char(c: char) -> Self {
        match c {
            'q' | 'Q' => Decision::Quit,
            _ => Decision::Continue,
        }
    }
}
