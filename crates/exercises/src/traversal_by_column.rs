use algospace_catalog::{CatalogError, Exercise};
use algospace_common::{Color, Direction, Edge};
use algospace_worlds::GridAgentWorld;

/// Column-by-column grid traversal: a 7x7 grid walled along its top row and
/// left column, with one walker starting in the corner. Graded by comparing
/// the final world against the answer world, so no goal cell is declared.
pub fn define() -> Result<Exercise, CatalogError> {
    let mut world = GridAgentWorld::new("Grid", 7, 7)?;
    for i in 0..7 {
        world.add_wall(i, 0, Edge::Top)?;
        world.add_wall(0, i, Edge::Left)?;
    }
    world.add_agent("Walker", 0, 0, Direction::North, Color::BLACK, Color::RED)?;

    Exercise::builder("TraversalByColumn", "TraversalByColumn")
        .tab_label("ColumnByColumn")
        .world(world)?
        .build()
}
