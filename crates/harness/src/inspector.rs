use algospace_worlds::World;
use serde::Serialize;

/// Read-only world queries for the rendering layer, logs and the CLI.
pub struct WorldInspector;

impl WorldInspector {
    /// Produce a one-line summary of a world variant's current state.
    pub fn summary(world: &World) -> WorldSummary {
        match world {
            World::Sequence(w) => WorldSummary::Sequence {
                label: w.label().to_string(),
                size: w.len(),
                solved: w.is_solved(),
                swaps: w.counters().swaps,
                comparisons: w.counters().comparisons,
            },
            World::GridAgent(w) => WorldSummary::GridAgent {
                label: w.label().to_string(),
                width: w.width(),
                height: w.height(),
                walls: w.wall_count(),
                agents: w.agent_count(),
                solved: w.is_solved(),
            },
        }
    }
}

/// Summary of one world variant, per kind.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum WorldSummary {
    Sequence {
        label: String,
        size: usize,
        solved: bool,
        swaps: u64,
        comparisons: u64,
    },
    GridAgent {
        label: String,
        width: usize,
        height: usize,
        walls: usize,
        agents: usize,
        solved: bool,
    },
}

impl std::fmt::Display for WorldSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sequence {
                label,
                size,
                solved,
                swaps,
                comparisons,
            } => write!(
                f,
                "Sequence \"{label}\": size={size} solved={solved} swaps={swaps} comparisons={comparisons}"
            ),
            Self::GridAgent {
                label,
                width,
                height,
                walls,
                agents,
                solved,
            } => write!(
                f,
                "Grid \"{label}\": {width}x{height} walls={walls} agents={agents} solved={solved}"
            ),
        }
    }
}
