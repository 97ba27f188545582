use crate::exercise::{CatalogError, Exercise};
use std::collections::HashMap;

/// The exercise catalog: an explicit registry object the loader fills and
/// the harness reads.
///
/// Exercises are kept in insertion order (lesson order); lookup by id is
/// indexed. The catalog lives for the learning session and is torn down as
/// a whole, never exercise by exercise.
#[derive(Debug, Default)]
pub struct Catalog {
    exercises: Vec<Exercise>,
    by_id: HashMap<String, usize>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an exercise. Fails with `DuplicateId` on an id collision;
    /// the catalog is left unchanged in that case.
    pub fn insert(&mut self, exercise: Exercise) -> Result<(), CatalogError> {
        if self.by_id.contains_key(exercise.id()) {
            return Err(CatalogError::DuplicateId {
                id: exercise.id().to_string(),
            });
        }
        self.by_id
            .insert(exercise.id().to_string(), self.exercises.len());
        self.exercises.push(exercise);
        Ok(())
    }

    pub fn get(&self, id: &str) -> Option<&Exercise> {
        self.by_id.get(id).map(|&i| &self.exercises[i])
    }

    pub fn contains(&self, id: &str) -> bool {
        self.by_id.contains_key(id)
    }

    /// Exercise ids in insertion order.
    pub fn ids(&self) -> Vec<&str> {
        self.exercises.iter().map(Exercise::id).collect()
    }

    /// Exercises in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Exercise> {
        self.exercises.iter()
    }

    pub fn len(&self) -> usize {
        self.exercises.len()
    }

    pub fn is_empty(&self) -> bool {
        self.exercises.is_empty()
    }

    /// Build a catalog from exercise definition functions.
    ///
    /// A failing definition (or a duplicate id) is skipped with a warning
    /// and reported in the returned list; the rest of the catalog loads
    /// intact. Construction stays pure; registration is this explicit step.
    pub fn load<D>(definitions: impl IntoIterator<Item = D>) -> (Self, Vec<(usize, CatalogError)>)
    where
        D: Fn() -> Result<Exercise, CatalogError>,
    {
        let mut catalog = Self::new();
        let mut failures = Vec::new();
        for (index, define) in definitions.into_iter().enumerate() {
            match define().and_then(|ex| catalog.insert(ex)) {
                Ok(()) => {}
                Err(err) => {
                    tracing::warn!(index, %err, "skipping malformed exercise definition");
                    failures.push((index, err));
                }
            }
        }
        (catalog, failures)
    }
}
