pub mod cell;
pub mod events;
pub mod grid;
pub mod io;
pub mod render;
pub mod rules;
pub mod simulation;

pub use cell::Cell;
pub use grid::Grid;
pub use grid::GridError;
pub use simulation::Simulation;
pub use simulation::Termination;
