use algospace_catalog::{CatalogError, Exercise};
use algospace_worlds::SequenceWorld;

/// Shell sort: a small functional tier to check correctness cheaply, then a
/// large tier to check the gap sequence actually pays off.
pub fn define() -> Result<Exercise, CatalogError> {
    Exercise::builder("AlgShellSort", "AlgShellSort")
        .setup([
            SequenceWorld::new("Functional test", 10)?.into(),
            SequenceWorld::new("Performance test (150 elms)", 150)?.into(),
        ])?
        .build()
}
