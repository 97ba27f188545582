use algospace_worlds::{World, WorldError};
use serde::{Deserialize, Serialize};

/// Errors from exercise binding and catalog registration.
///
/// These indicate programming errors in exercise definitions, not runtime
/// conditions: the loader surfaces them and refuses the offending exercise.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("exercise {id:?}: variant set already registered")]
    AlreadyRegistered { id: String },
    #[error("exercise {id:?}: variant set is empty")]
    EmptyVariantSet { id: String },
    #[error("exercise id {id:?} is already in the catalog")]
    DuplicateId { id: String },
    #[error(transparent)]
    World(#[from] WorldError),
}

/// A named, cataloged teaching unit binding one or more world variants.
///
/// Immutable once built. Multiple variants are graduated test tiers (e.g. a
/// small functional instance, then a large performance instance); their
/// declaration order is preserved exactly.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Exercise {
    id: String,
    display_label: String,
    tab_label: Option<String>,
    worlds: Vec<World>,
}

impl Exercise {
    /// Start building an exercise. Worlds are attached through the builder's
    /// single registration step.
    pub fn builder(id: impl Into<String>, display_label: impl Into<String>) -> ExerciseBuilder {
        ExerciseBuilder::new(id, display_label)
    }

    /// Catalog lookup key.
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn display_label(&self) -> &str {
        &self.display_label
    }

    /// Label for UI-tab rendering: the override if one was set, otherwise
    /// the display label. Never affects catalog lookup.
    pub fn tab_label(&self) -> &str {
        self.tab_label.as_deref().unwrap_or(&self.display_label)
    }

    /// The world variants, in declaration order. A borrowed view: the
    /// harness never receives a mutable alias into the catalog.
    pub fn worlds(&self) -> &[World] {
        &self.worlds
    }

    pub fn variant_count(&self) -> usize {
        self.worlds.len()
    }
}

/// Builder enforcing the binding contract: exactly one registration, at
/// least one variant, immutable result.
#[derive(Debug)]
pub struct ExerciseBuilder {
    id: String,
    display_label: String,
    tab_label: Option<String>,
    worlds: Vec<World>,
    registered: bool,
}

impl ExerciseBuilder {
    pub fn new(id: impl Into<String>, display_label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            display_label: display_label.into(),
            tab_label: None,
            worlds: Vec::new(),
            registered: false,
        }
    }

    /// Override the UI-tab label.
    pub fn tab_label(mut self, label: impl Into<String>) -> Self {
        self.tab_label = Some(label.into());
        self
    }

    /// Register the variant set. This is the single registration call: a
    /// second `setup` on the same builder fails with `AlreadyRegistered`.
    pub fn setup(
        mut self,
        worlds: impl IntoIterator<Item = World>,
    ) -> Result<Self, CatalogError> {
        if self.registered {
            return Err(CatalogError::AlreadyRegistered {
                id: self.id.clone(),
            });
        }
        self.worlds = worlds.into_iter().collect();
        self.registered = true;
        Ok(self)
    }

    /// Register a single world. Convenience for one-variant exercises;
    /// follows the same register-once rule as `setup`.
    pub fn world(self, world: impl Into<World>) -> Result<Self, CatalogError> {
        self.setup([world.into()])
    }

    /// Finish the binding. Fails with `EmptyVariantSet` when no world was
    /// registered.
    pub fn build(self) -> Result<Exercise, CatalogError> {
        if self.worlds.is_empty() {
            return Err(CatalogError::EmptyVariantSet { id: self.id });
        }
        Ok(Exercise {
            id: self.id,
            display_label: self.display_label,
            tab_label: self.tab_label,
            worlds: self.worlds,
        })
    }
}
