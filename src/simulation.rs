use std::io;

use tracing::debug;
use tracing::info;

use crate::events::Decision;
use crate::grid::Grid;

/// Asked once per generation whether the simulation should go on.
pub trait Prompt {
    fn decide(&mut self) -> io::Result<Decision>;
}

impl<F> Prompt for F
where
    F: FnMut() -> io::Result<Decision>,
{
    fn decide(&mut self) -> io::Result<Decision> {
        self()
    }
}

/// Receives every generation as the simulation produces it.
pub trait Observer {
    /// Called with the grid the next generation is about to be computed from.
    fn stepping(&mut self, _current: &Grid) -> io::Result<()> {
        Ok(())
    }

    fn generation(&mut self, number: u64, grid: &Grid) -> io::Result<()>;

    /// The last computed generation was identical to the one before it.
    fn still_life(&mut self) -> io::Result<()>;
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Termination {
    /// Advancing no longer changes the board
    Stable,

    /// The prompt asked to quit
    UserQuit,
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Step {
    Continue,
    Done(Termination),
}

/// Drives a [`Grid`] from generation to generation until it settles into a still life or the user
/// quits. Oscillators and spaceships never settle, so only the prompt can stop them.
pub struct Simulation {
    current: Grid,

    /// Number of `current`. The seeded grid is generation `1`.
    generation: u64,
}

impl Simulation {
    pub fn new(grid: Grid) -> Self {
        Self {
            current: grid,
            generation: 1,
        }
    }

    pub fn current(&self) -> &Grid {
        &self.current
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Show the initial generation.
    pub fn start<O>(&self, observer: &mut O) -> io::Result<()>
    where
        O: Observer + ?Sized,
    {
        observer.generation(self.generation, &self.current)
    }

    /// Compute and show the next generation, then ask whether to go on.
    ///
    /// Quitting is checked before stability, so a user who quits on a still life never sees the
    /// still life message. `current` is only replaced when the board actually changed.
    pub fn step<P, O>(&mut self, prompt: &mut P, observer: &mut O) -> io::Result<Step>
    where
        P: Prompt + ?Sized,
        O: Observer + ?Sized,
    {
        observer.stepping(&self.current)?;

        let next = self.current.next_generation();
        let number = self.generation + 1;

        debug!(
            generation = number,
            population = next.population(),
            "computed generation"
        );

        observer.generation(number, &next)?;

        if prompt.decide()? == Decision::Quit {
            return Ok(self.finish(Termination::UserQuit));
        }

        if self.current.same_generation(&next) {
            observer.still_life()?;
            return Ok(self.finish(Termination::Stable));
        }

        self.current = next;
        self.generation = number;

        Ok(Step::Continue)
    }

    /// Show the initial generation and step until the simulation terminates.
    pub fn run<P, O>(&mut self, prompt: &mut P, observer: &mut O) -> io::Result<Termination>
    where
        P: Prompt + ?Sized,
        O: Observer + ?Sized,
    {
        self.start(observer)?;

        loop {
            if let Step::Done(termination) = self.step(prompt, observer)? {
                return Ok(termination);
            }
        }
    }

    fn finish(&self, termination: Termination) -> Step {
        info!(
            ?termination,
            generation = self.generation,
            "simulation finished"
        );

        Step::Done(termination)
    }
}
