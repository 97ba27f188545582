use crate::world::WorldError;
use algospace_common::{Color, Direction, Edge, GridPos, WorldId};
use serde::{Deserialize, Serialize};

/// Wall flags for one cell, one bit per edge.
///
/// Walls are stored on both sides of a boundary: a Top wall on (x, y) is
/// mirrored as a Bottom wall on (x, y-1) whenever that cell exists, so a
/// cell's own flags fully answer "can I leave this cell through that edge".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellWalls(u8);

impl CellWalls {
    fn bit(edge: Edge) -> u8 {
        match edge {
            Edge::Top => 0b0001,
            Edge::Bottom => 0b0010,
            Edge::Left => 0b0100,
            Edge::Right => 0b1000,
        }
    }

    pub fn has(self, edge: Edge) -> bool {
        self.0 & Self::bit(edge) != 0
    }

    /// Set the wall bit. Returns true when the bit actually changed.
    fn set(&mut self, edge: Edge) -> bool {
        let bit = Self::bit(edge);
        let changed = self.0 & bit == 0;
        self.0 |= bit;
        changed
    }
}

/// A directional, positioned entity learner code can move and turn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Agent {
    pub name: String,
    pub pos: GridPos,
    pub direction: Direction,
    pub body_color: Color,
    pub mark_color: Color,
}

/// An event record produced by every mutation to a grid world.
///
/// Blocked moves are logged too, so a replay reproduces wall bumps exactly
/// as the learner's run produced them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GridEvent {
    WallAdded { pos: GridPos, edge: Edge },
    AgentAdded { index: usize, agent: Agent },
    AgentMoved { index: usize, from: GridPos, to: GridPos },
    AgentBumped { index: usize, pos: GridPos, direction: Direction },
    AgentTurned { index: usize, old: Direction, new: Direction },
    GoalSet { pos: GridPos },
}

/// A fixed-size grid world with per-cell wall segments and directional
/// agents, used by the navigation exercise family.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GridAgentWorld {
    id: WorldId,
    label: String,
    width: usize,
    height: usize,
    /// Row-major, `width * height` entries.
    cells: Vec<CellWalls>,
    agents: Vec<Agent>,
    /// Agents as they were placed, kept for `reset()`. Walls never change
    /// at run time, so they need no pristine copy.
    initial_agents: Vec<Agent>,
    goal: Option<GridPos>,
    /// Append-only log of all mutations.
    #[serde(skip)]
    event_log: Vec<GridEvent>,
}

impl GridAgentWorld {
    /// Create an empty grid: no walls, no agents, no goal.
    pub fn new(
        label: impl Into<String>,
        width: usize,
        height: usize,
    ) -> Result<Self, WorldError> {
        if width == 0 || height == 0 {
            return Err(WorldError::InvalidDimension { width, height });
        }
        Ok(Self {
            id: WorldId::new(),
            label: label.into(),
            width,
            height,
            cells: vec![CellWalls::default(); width * height],
            agents: Vec::new(),
            initial_agents: Vec::new(),
            goal: None,
            event_log: Vec::new(),
        })
    }

    pub fn id(&self) -> WorldId {
        self.id
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height
    }

    fn cell_index(&self, x: i32, y: i32) -> Result<usize, WorldError> {
        if !self.in_bounds(x, y) {
            return Err(WorldError::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        Ok(y as usize * self.width + x as usize)
    }

    /// Read-only access to the event log.
    pub fn events(&self) -> &[GridEvent] {
        &self.event_log
    }

    /// Drain and return the event log. Used by the replay renderer.
    pub fn drain_events(&mut self) -> Vec<GridEvent> {
        std::mem::take(&mut self.event_log)
    }

    /// Add a wall on the given edge of cell (x, y), mirroring it onto the
    /// adjacent cell when that cell exists.
    ///
    /// Idempotent: re-adding an existing wall is a no-op and logs nothing.
    /// Returns true when the wall set actually changed.
    pub fn add_wall(&mut self, x: i32, y: i32, edge: Edge) -> Result<bool, WorldError> {
        let idx = self.cell_index(x, y)?;
        let changed = self.cells[idx].set(edge);
        let (nx, ny) = edge.neighbor(x, y);
        if self.in_bounds(nx, ny) {
            let nidx = ny as usize * self.width + nx as usize;
            self.cells[nidx].set(edge.opposite());
        }
        if changed {
            self.event_log.push(GridEvent::WallAdded {
                pos: GridPos::new(x, y),
                edge,
            });
        }
        Ok(changed)
    }

    /// True when cell (x, y) has a wall on the given edge. Out-of-grid
    /// queries report no wall; the boundary itself is enforced by `in_bounds`
    /// during movement.
    pub fn has_wall(&self, x: i32, y: i32, edge: Edge) -> bool {
        self.cell_index(x, y)
            .map(|idx| self.cells[idx].has(edge))
            .unwrap_or(false)
    }

    /// Number of physical walls, counting each boundary segment once even
    /// though it is stored on both adjacent cells.
    pub fn wall_count(&self) -> usize {
        let mut count = 0;
        for y in 0..self.height as i32 {
            for x in 0..self.width as i32 {
                // Top and Left bits cover every segment except the grid's
                // own bottom and right borders.
                if self.has_wall(x, y, Edge::Top) {
                    count += 1;
                }
                if self.has_wall(x, y, Edge::Left) {
                    count += 1;
                }
                if y as usize == self.height - 1 && self.has_wall(x, y, Edge::Bottom) {
                    count += 1;
                }
                if x as usize == self.width - 1 && self.has_wall(x, y, Edge::Right) {
                    count += 1;
                }
            }
        }
        count
    }

    /// Append an agent at (x, y). Multiple agents may share a cell; what
    /// that means is the execution engine's business, not the model's.
    pub fn add_agent(
        &mut self,
        name: impl Into<String>,
        x: i32,
        y: i32,
        direction: Direction,
        body_color: Color,
        mark_color: Color,
    ) -> Result<usize, WorldError> {
        self.cell_index(x, y)?;
        let agent = Agent {
            name: name.into(),
            pos: GridPos::new(x, y),
            direction,
            body_color,
            mark_color,
        };
        let index = self.agents.len();
        self.agents.push(agent.clone());
        self.initial_agents.push(agent.clone());
        self.event_log.push(GridEvent::AgentAdded { index, agent });
        Ok(index)
    }

    pub fn agent(&self, index: usize) -> Option<&Agent> {
        self.agents.get(index)
    }

    /// Agents in placement order.
    pub fn agents(&self) -> &[Agent] {
        &self.agents
    }

    pub fn agent_count(&self) -> usize {
        self.agents.len()
    }

    fn check_agent(&self, index: usize) -> Result<(), WorldError> {
        if index >= self.agents.len() {
            return Err(WorldError::IndexOutOfBounds {
                index,
                len: self.agents.len(),
            });
        }
        Ok(())
    }

    /// Advance an agent one cell along its heading.
    ///
    /// Returns `Ok(false)` when a wall or the grid boundary blocks the move;
    /// the bump is logged so replays reproduce it.
    pub fn step_agent(&mut self, index: usize) -> Result<bool, WorldError> {
        self.check_agent(index)?;
        let (pos, direction) = {
            let a = &self.agents[index];
            (a.pos, a.direction)
        };
        let edge = direction.exit_edge();
        let (dx, dy) = direction.delta();
        let (nx, ny) = (pos.x + dx, pos.y + dy);

        if self.has_wall(pos.x, pos.y, edge) || !self.in_bounds(nx, ny) {
            tracing::debug!(agent = index, ?direction, "move blocked");
            self.event_log.push(GridEvent::AgentBumped {
                index,
                pos,
                direction,
            });
            return Ok(false);
        }

        let to = GridPos::new(nx, ny);
        self.agents[index].pos = to;
        self.event_log.push(GridEvent::AgentMoved {
            index,
            from: pos,
            to,
        });
        Ok(true)
    }

    /// Rotate an agent 90 degrees counterclockwise. Returns the new heading.
    pub fn turn_left(&mut self, index: usize) -> Result<Direction, WorldError> {
        self.turn(index, Direction::turn_left)
    }

    /// Rotate an agent 90 degrees clockwise. Returns the new heading.
    pub fn turn_right(&mut self, index: usize) -> Result<Direction, WorldError> {
        self.turn(index, Direction::turn_right)
    }

    fn turn(
        &mut self,
        index: usize,
        f: fn(Direction) -> Direction,
    ) -> Result<Direction, WorldError> {
        self.check_agent(index)?;
        let old = self.agents[index].direction;
        let new = f(old);
        self.agents[index].direction = new;
        self.event_log.push(GridEvent::AgentTurned { index, old, new });
        Ok(new)
    }

    /// Declare the goal cell. Optional; exercises without a visible goal
    /// are graded by world comparison instead.
    pub fn set_goal(&mut self, x: i32, y: i32) -> Result<(), WorldError> {
        self.cell_index(x, y)?;
        let pos = GridPos::new(x, y);
        self.goal = Some(pos);
        self.event_log.push(GridEvent::GoalSet { pos });
        Ok(())
    }

    pub fn goal(&self) -> Option<GridPos> {
        self.goal
    }

    /// True when a goal is set and some agent stands on it. Without a goal
    /// the world never reports itself solved; grading then uses `matches`.
    pub fn is_solved(&self) -> bool {
        match self.goal {
            Some(goal) => self.agents.iter().any(|a| a.pos == goal),
            None => false,
        }
    }

    /// Structural comparison against another world: same dimensions, same
    /// walls, and agents with the same names, positions and headings. This
    /// is how the harness grades goal-less exercises against an answer world.
    pub fn matches(&self, other: &Self) -> bool {
        self.width == other.width
            && self.height == other.height
            && self.cells == other.cells
            && self.agents.len() == other.agents.len()
            && self
                .agents
                .iter()
                .zip(other.agents.iter())
                .all(|(a, b)| a.name == b.name && a.pos == b.pos && a.direction == b.direction)
    }

    /// Restore agents to their placement poses, clear the event log.
    pub fn reset(&mut self) {
        self.agents = self.initial_agents.clone();
        self.event_log.clear();
    }

    /// Reconstruct a world from its construction parameters and a recorded
    /// event sequence (for replay).
    pub fn replay(
        label: impl Into<String>,
        width: usize,
        height: usize,
        events: &[GridEvent],
    ) -> Result<Self, WorldError> {
        let mut world = Self::new(label, width, height)?;
        for event in events {
            match event {
                GridEvent::WallAdded { pos, edge } => {
                    world.add_wall(pos.x, pos.y, *edge)?;
                }
                GridEvent::AgentAdded { agent, .. } => {
                    world.add_agent(
                        agent.name.clone(),
                        agent.pos.x,
                        agent.pos.y,
                        agent.direction,
                        agent.body_color,
                        agent.mark_color,
                    )?;
                }
                GridEvent::AgentMoved { index, to, .. } => {
                    world.check_agent(*index)?;
                    world.agents[*index].pos = *to;
                }
                GridEvent::AgentBumped { .. } => {}
                GridEvent::AgentTurned { index, new, .. } => {
                    world.check_agent(*index)?;
                    world.agents[*index].direction = *new;
                }
                GridEvent::GoalSet { pos } => {
                    world.set_goal(pos.x, pos.y)?;
                }
            }
        }
        world.drain_events();
        Ok(world)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn world(w: usize, h: usize) -> GridAgentWorld {
        GridAgentWorld::new("test", w, h).unwrap()
    }

    #[test]
    fn zero_dimensions_are_invalid() {
        assert!(matches!(
            GridAgentWorld::new("test", 0, 7),
            Err(WorldError::InvalidDimension { width: 0, height: 7 })
        ));
        assert!(GridAgentWorld::new("test", 7, 0).is_err());
    }

    #[test]
    fn new_grid_is_empty() {
        let w = world(4, 3);
        assert_eq!(w.wall_count(), 0);
        assert_eq!(w.agent_count(), 0);
        assert!(w.goal().is_none());
    }

    #[test]
    fn wall_is_mirrored_on_neighbor() {
        let mut w = world(5, 5);
        assert!(w.add_wall(2, 2, Edge::Top).unwrap());
        assert!(w.has_wall(2, 2, Edge::Top));
        assert!(w.has_wall(2, 1, Edge::Bottom));

        assert!(w.add_wall(2, 2, Edge::Left).unwrap());
        assert!(w.has_wall(1, 2, Edge::Right));
    }

    #[test]
    fn boundary_wall_has_no_mirror_cell() {
        let mut w = world(5, 5);
        w.add_wall(0, 0, Edge::Top).unwrap();
        assert!(w.has_wall(0, 0, Edge::Top));
        assert_eq!(w.wall_count(), 1);
    }

    #[test]
    fn adding_a_wall_twice_is_a_noop() {
        let mut w = world(5, 5);
        assert!(w.add_wall(1, 1, Edge::Right).unwrap());
        assert!(!w.add_wall(1, 1, Edge::Right).unwrap());
        // The mirrored side is the same wall, so re-adding it changes nothing.
        assert!(!w.add_wall(2, 1, Edge::Left).unwrap());
        assert_eq!(w.wall_count(), 1);
        assert_eq!(w.events().len(), 1);
    }

    #[test]
    fn wall_outside_grid_is_rejected() {
        let mut w = world(3, 3);
        assert!(matches!(
            w.add_wall(3, 0, Edge::Top),
            Err(WorldError::OutOfBounds { x: 3, y: 0, .. })
        ));
        assert!(w.add_wall(0, -1, Edge::Left).is_err());
    }

    #[test]
    fn agent_outside_grid_is_rejected() {
        let mut w = world(3, 3);
        let err = w
            .add_agent("a", 3, 1, Direction::North, Color::BLACK, Color::RED)
            .unwrap_err();
        assert!(matches!(err, WorldError::OutOfBounds { x: 3, y: 1, .. }));
    }

    #[test]
    fn agent_is_retrievable_as_placed() {
        let mut w = world(3, 3);
        let idx = w
            .add_agent("Walker", 1, 2, Direction::West, Color::BLACK, Color::RED)
            .unwrap();
        let a = w.agent(idx).unwrap();
        assert_eq!(a.name, "Walker");
        assert_eq!(a.pos, GridPos::new(1, 2));
        assert_eq!(a.direction, Direction::West);
        assert_eq!(a.body_color, Color::BLACK);
        assert_eq!(a.mark_color, Color::RED);
    }

    #[test]
    fn two_agents_may_share_a_cell() {
        let mut w = world(3, 3);
        w.add_agent("a", 1, 1, Direction::North, Color::BLACK, Color::RED)
            .unwrap();
        w.add_agent("b", 1, 1, Direction::South, Color::WHITE, Color::BLUE)
            .unwrap();
        assert_eq!(w.agent_count(), 2);
    }

    #[test]
    fn step_moves_along_heading() {
        let mut w = world(3, 3);
        w.add_agent("a", 0, 0, Direction::East, Color::BLACK, Color::RED)
            .unwrap();
        assert!(w.step_agent(0).unwrap());
        assert_eq!(w.agent(0).unwrap().pos, GridPos::new(1, 0));
    }

    #[test]
    fn step_is_blocked_by_wall_and_boundary() {
        let mut w = world(3, 3);
        w.add_agent("a", 0, 0, Direction::North, Color::BLACK, Color::RED)
            .unwrap();
        // (0,0) facing north: the grid boundary blocks.
        assert!(!w.step_agent(0).unwrap());
        assert_eq!(w.agent(0).unwrap().pos, GridPos::new(0, 0));

        w.turn_right(0).unwrap(); // now East
        w.add_wall(0, 0, Edge::Right).unwrap();
        assert!(!w.step_agent(0).unwrap());
        assert_eq!(w.agent(0).unwrap().pos, GridPos::new(0, 0));
    }

    #[test]
    fn blocked_move_is_logged_as_bump() {
        let mut w = world(2, 2);
        w.add_agent("a", 0, 0, Direction::North, Color::BLACK, Color::RED)
            .unwrap();
        w.step_agent(0).unwrap();
        assert!(matches!(
            w.events().last(),
            Some(GridEvent::AgentBumped { index: 0, .. })
        ));
    }

    #[test]
    fn unknown_agent_index_is_rejected() {
        let mut w = world(2, 2);
        assert!(matches!(
            w.step_agent(0),
            Err(WorldError::IndexOutOfBounds { index: 0, len: 0 })
        ));
        assert!(w.turn_left(3).is_err());
    }

    #[test]
    fn goal_drives_is_solved() {
        let mut w = world(3, 1);
        w.add_agent("a", 0, 0, Direction::East, Color::BLACK, Color::RED)
            .unwrap();
        assert!(!w.is_solved()); // no goal yet
        w.set_goal(2, 0).unwrap();
        assert!(!w.is_solved());
        w.step_agent(0).unwrap();
        w.step_agent(0).unwrap();
        assert!(w.is_solved());
    }

    #[test]
    fn matches_compares_walls_and_agent_poses() {
        let build = || {
            let mut w = world(3, 3);
            w.add_wall(1, 1, Edge::Top).unwrap();
            w.add_agent("a", 0, 0, Direction::East, Color::BLACK, Color::RED)
                .unwrap();
            w
        };
        let a = build();
        let mut b = build();
        assert!(a.matches(&b));

        b.step_agent(0).unwrap();
        assert!(!a.matches(&b));
    }

    #[test]
    fn reset_restores_agent_poses_and_keeps_walls() {
        let mut w = world(3, 3);
        w.add_wall(0, 0, Edge::Right).unwrap();
        w.add_agent("a", 0, 0, Direction::South, Color::BLACK, Color::RED)
            .unwrap();
        w.step_agent(0).unwrap();
        w.turn_left(0).unwrap();

        w.reset();
        let a = w.agent(0).unwrap();
        assert_eq!(a.pos, GridPos::new(0, 0));
        assert_eq!(a.direction, Direction::South);
        assert!(w.has_wall(0, 0, Edge::Right));
        assert!(w.events().is_empty());
    }

    #[test]
    fn replay_equivalence() {
        let mut w = world(4, 4);
        w.add_wall(1, 1, Edge::Top).unwrap();
        w.add_agent("a", 0, 0, Direction::East, Color::BLACK, Color::RED)
            .unwrap();
        w.step_agent(0).unwrap();
        w.turn_right(0).unwrap();
        w.step_agent(0).unwrap();

        let replayed = GridAgentWorld::replay("test", 4, 4, w.events()).unwrap();
        assert!(replayed.matches(&w));
    }

    /// End-to-end scenario from the navigation exercise family: 7x7 grid,
    /// Top walls along row 0 and Left walls along column 0, one agent at the
    /// origin facing North.
    #[test]
    fn bordered_seven_by_seven_grid() {
        let mut w = GridAgentWorld::new("Grid", 7, 7).unwrap();
        for i in 0..7 {
            w.add_wall(i, 0, Edge::Top).unwrap();
            w.add_wall(0, i, Edge::Left).unwrap();
        }
        w.add_agent("Walker", 0, 0, Direction::North, Color::BLACK, Color::RED)
            .unwrap();

        assert_eq!(w.wall_count(), 14);
        assert_eq!(w.agent_count(), 1);
        let a = w.agent(0).unwrap();
        assert_eq!(a.pos, GridPos::new(0, 0));
        assert_eq!(a.direction, Direction::North);
    }
}
