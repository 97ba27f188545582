use crate::command::{Command, Script};
use algospace_catalog::Exercise;
use algospace_worlds::{World, WorldError, WorldKind};

/// Errors from applying a command script to a world.
#[derive(Debug, thiserror::Error)]
pub enum RunError {
    #[error("command {command:?} does not apply to a {kind:?} world")]
    CommandKindMismatch { command: Command, kind: WorldKind },
    #[error(transparent)]
    World(#[from] WorldError),
}

/// Outcome of running a script against a single world variant.
#[derive(Debug, Clone)]
pub struct WorldRun {
    /// The final world state (a private clone; the catalog's copy is
    /// untouched).
    pub world: World,
    pub steps_applied: usize,
    /// Moves blocked by a wall or the grid boundary.
    pub bumps: usize,
    pub solved: bool,
}

/// Outcome of running a script against an exercise's variant tiers.
#[derive(Debug, Clone)]
pub struct ExerciseRun {
    pub exercise_id: String,
    /// One entry per executed variant, in declaration order.
    pub runs: Vec<WorldRun>,
    /// Variants skipped after an earlier tier failed.
    pub skipped: usize,
    pub passed: bool,
}

/// Applies recorded command scripts to worlds.
pub struct Runner;

impl Runner {
    /// Run a script against a clone of `world`, applying commands in order.
    ///
    /// Index errors and kind mismatches abort the run; blocked grid moves do
    /// not (they are ordinary world behavior and are counted as bumps).
    pub fn run_world(world: &World, script: &Script) -> Result<WorldRun, RunError> {
        let mut world = world.clone();
        world.reset();
        let mut bumps = 0;
        let mut steps_applied = 0;

        for &command in script.commands() {
            match (&mut world, command) {
                (World::Sequence(w), Command::Swap { i, j }) => w.swap(i, j)?,
                (World::Sequence(w), Command::Set { index, value }) => w.set(index, value)?,
                (World::Sequence(w), Command::Compare { i, j }) => {
                    w.compare(i, j)?;
                }
                (World::GridAgent(w), Command::StepForward { agent }) => {
                    if !w.step_agent(agent)? {
                        bumps += 1;
                    }
                }
                (World::GridAgent(w), Command::TurnLeft { agent }) => {
                    w.turn_left(agent)?;
                }
                (World::GridAgent(w), Command::TurnRight { agent }) => {
                    w.turn_right(agent)?;
                }
                (world, command) => {
                    return Err(RunError::CommandKindMismatch {
                        command,
                        kind: world.kind(),
                    });
                }
            }
            steps_applied += 1;
        }

        let solved = match &world {
            // A sequence world that sorts ascending but lost elements along
            // the way is not solved.
            World::Sequence(w) => w.is_solved() && w.is_permutation(),
            World::GridAgent(_) => world.is_solved(),
        };

        Ok(WorldRun {
            world,
            steps_applied,
            bumps,
            solved,
        })
    }

    /// Run a script against every variant of an exercise, in declaration
    /// order, skipping the remaining (larger) tiers once one fails.
    pub fn run_exercise(exercise: &Exercise, script: &Script) -> Result<ExerciseRun, RunError> {
        let mut runs = Vec::new();
        let mut passed = true;

        for world in exercise.worlds() {
            let run = Self::run_world(world, script)?;
            tracing::debug!(
                exercise = exercise.id(),
                variant = world.label(),
                solved = run.solved,
                "variant run finished"
            );
            let solved = run.solved;
            runs.push(run);
            if !solved {
                passed = false;
                break;
            }
        }

        Ok(ExerciseRun {
            exercise_id: exercise.id().to_string(),
            skipped: exercise.variant_count() - runs.len(),
            runs,
            passed,
        })
    }
}
