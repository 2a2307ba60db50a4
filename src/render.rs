use crate::grid::Grid;

pub const PROMPT: &str = "Type q to quit [any other to continue]: ";

pub const STILL_LIFE: &str = "Still life - No more generational changes";

/// A generation with its header, e.g.
///
/// ```notrust
/// Generation 2
/// 0 1 0
/// 0 1 0
/// ```
pub fn generation(number: u64, grid: &Grid) -> String {
    format!("Generation {number}\n{grid}")
}

/// The live neighbor count of every cell of `grid`, one row per line.
pub fn neighbor_counts(grid: &Grid) -> String {
    let mut s = String::from("Count of neighbors");

    for row in grid.neighbor_counts() {
        s.push('\n');

        for (i, n) in row.iter().enumerate() {
            if i > 0 {
                s.push(' ');
            }

            s.push_str(&n.to_string());
        }
    }

    s
}
