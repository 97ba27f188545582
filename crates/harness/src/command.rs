use serde::{Deserialize, Serialize};

/// A single operation the execution engine performs against a world.
///
/// This is the complete mutation vocabulary: anything learner code does to
/// a world compiles down to a sequence of these, which is what makes runs
/// steppable and replayable in the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    /// Exchange two sequence elements.
    Swap { i: usize, j: usize },
    /// Overwrite a sequence element.
    Set { index: usize, value: u32 },
    /// Compare two sequence elements (counted, not logged).
    Compare { i: usize, j: usize },
    /// Advance an agent one cell along its heading; bumps are not errors.
    StepForward { agent: usize },
    /// Rotate an agent 90 degrees counterclockwise.
    TurnLeft { agent: usize },
    /// Rotate an agent 90 degrees clockwise.
    TurnRight { agent: usize },
}

impl Command {
    /// True for commands that address a sequence world.
    pub fn is_sequence(self) -> bool {
        matches!(
            self,
            Self::Swap { .. } | Self::Set { .. } | Self::Compare { .. }
        )
    }

    /// True for commands that address a grid-agent world.
    pub fn is_grid(self) -> bool {
        !self.is_sequence()
    }
}

/// An ordered command sequence, as recorded from one execution of learner
/// code. Serializable so runs can be stored and replayed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Script {
    commands: Vec<Command>,
}

impl Script {
    pub fn new(commands: Vec<Command>) -> Self {
        Self { commands }
    }

    pub fn push(&mut self, command: Command) {
        self.commands.push(command);
    }

    pub fn commands(&self) -> &[Command] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

impl FromIterator<Command> for Script {
    fn from_iter<T: IntoIterator<Item = Command>>(iter: T) -> Self {
        Self {
            commands: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_kind_partition() {
        let seq = [
            Command::Swap { i: 0, j: 1 },
            Command::Set { index: 0, value: 1 },
            Command::Compare { i: 0, j: 1 },
        ];
        let grid = [
            Command::StepForward { agent: 0 },
            Command::TurnLeft { agent: 0 },
            Command::TurnRight { agent: 0 },
        ];
        assert!(seq.iter().all(|c| c.is_sequence() && !c.is_grid()));
        assert!(grid.iter().all(|c| c.is_grid() && !c.is_sequence()));
    }

    #[test]
    fn script_preserves_order() {
        let script: Script = [
            Command::TurnLeft { agent: 0 },
            Command::StepForward { agent: 0 },
        ]
        .into_iter()
        .collect();
        assert_eq!(script.len(), 2);
        assert_eq!(script.commands()[0], Command::TurnLeft { agent: 0 });
    }
}
