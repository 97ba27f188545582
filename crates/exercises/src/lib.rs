//! Built-in exercise definitions.
//!
//! Each definition is a pure function from nothing to a fully-built
//! [`Exercise`]; nothing here self-registers into shared state. The loader
//! collects the definitions and fills an explicit [`Catalog`], so exercises
//! can be constructed and tested in isolation and load order carries no
//! hidden dependencies.

pub mod shell_sort;
pub mod traversal_by_column;

use algospace_catalog::{Catalog, CatalogError, Exercise};

/// All built-in exercise definitions, in lesson order.
pub fn builtin() -> Vec<fn() -> Result<Exercise, CatalogError>> {
    vec![shell_sort::define, traversal_by_column::define]
}

/// Load the built-in catalog. Definitions are compiled in, so failures here
/// are bugs; they are logged and skipped like any other malformed exercise.
pub fn load_builtin() -> Catalog {
    let (catalog, failures) = Catalog::load(builtin());
    if !failures.is_empty() {
        tracing::error!(count = failures.len(), "built-in exercises failed to load");
    }
    catalog
}
