use crate::schema::EntityDef;

use indexmap::IndexMap;

/// A named group of exports, the explicit stand-in for one entity module.
///
/// Sources typically mirror source files: one source per module, carrying
/// whatever that module exposes. Only entity exports participate in model
/// initialization; everything else is skipped.
#[derive(Debug, Clone)]
pub struct Source {
    name: String,
    exports: Vec<Export>,
}

/// One export of a [`Source`].
#[derive(Debug, Clone)]
pub enum Export {
    /// An entity definition, eligible for model initialization.
    Entity(EntityDef),
    /// Anything else a module exposes (helpers, constants). Skipped during
    /// collection; this is not an error.
    Opaque(String),
}

impl Source {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            exports: Vec::new(),
        }
    }

    pub fn entity(mut self, def: EntityDef) -> Self {
        self.exports.push(Export::Entity(def));
        self
    }

    pub fn export(mut self, export: Export) -> Self {
        self.exports.push(export);
        self
    }
}

/// The ordered set of entity sources a connection loads.
///
/// Replaces file-glob discovery with explicit registration: the manifest is
/// walked in registration order, and a later entity with an already-seen
/// model name replaces the earlier one.
#[derive(Debug, Clone, Default)]
pub struct Manifest {
    sources: Vec<Source>,
}

impl Manifest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn source(mut self, source: Source) -> Self {
        self.sources.push(source);
        self
    }

    /// Registers a single entity without an enclosing source.
    pub fn entity(mut self, def: EntityDef) -> Self {
        let source = Source::new(def.name.clone()).entity(def);
        self.sources.push(source);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }

    /// Walks all sources and returns the discovered entities keyed by
    /// declared model name, in discovery order.
    pub(crate) fn collect(&self) -> IndexMap<String, EntityDef> {
        let mut entities = IndexMap::new();

        for source in &self.sources {
            tracing::debug!(source = %source.name, "collecting entity source");

            for export in &source.exports {
                match export {
                    Export::Entity(def) => {
                        tracing::debug!(model = %def.name, "found entity");
                        entities.insert(def.name.clone(), def.clone());
                    }
                    Export::Opaque(name) => {
                        tracing::debug!(export = %name, "skipping non-entity export");
                    }
                }
            }
        }

        entities
    }
}
