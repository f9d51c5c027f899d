mod options;
pub use options::ConnectionOptions;

use crate::{model::Model, Result};

use entwine_core::{
    driver::Driver,
    schema::{AssociationLink, EntityDef, ModelSchema},
    Error,
};

use indexmap::IndexMap;
use std::sync::Arc;

/// Shared state between all `Connection` clones.
struct Shared {
    driver: Arc<dyn Driver>,

    /// Entity snapshot the models were initialized from, keyed by declared
    /// model name.
    entities: IndexMap<String, EntityDef>,

    /// Initialized models, keyed by declared model name.
    models: IndexMap<String, Arc<Model>>,
}

/// A handle to one underlying database plus its registry of initialized
/// models. Cloning is cheap and yields a handle to the same state.
#[derive(Clone)]
pub struct Connection {
    shared: Arc<Shared>,
}

impl Connection {
    /// Opens a connection: connects the driver, collects the entity
    /// manifest, initializes every model, then resolves every association.
    ///
    /// Association resolution runs strictly after all models are
    /// initialized; targets are looked up against this connection's model
    /// set, never against the raw declarations.
    pub async fn open(options: ConnectionOptions) -> Result<Self> {
        let (mut driver, prefix, manifest) = options.connect().await?;

        let entities = manifest.collect();
        tracing::debug!(entities = entities.len(), "initializing models");

        let mut models = initialize_models(driver.as_mut(), &entities, prefix.as_deref()).await?;
        resolve_associations(driver.as_mut(), &entities, &mut models).await?;

        Ok(Connection {
            shared: Arc::new(Shared {
                driver: Arc::from(driver),
                entities,
                models: models
                    .into_iter()
                    .map(|(name, model)| (name, Arc::new(model)))
                    .collect(),
            }),
        })
    }

    /// Returns the initialized model registered under `name`, if any.
    pub fn model(&self, name: &str) -> Option<Arc<Model>> {
        self.shared.models.get(name).cloned()
    }

    /// Initialized models, in discovery order.
    pub fn models(&self) -> impl Iterator<Item = &Arc<Model>> {
        self.shared.models.values()
    }

    /// The entity declarations the models were initialized from.
    pub fn entity(&self, name: &str) -> Option<&EntityDef> {
        self.shared.entities.get(name)
    }

    /// The raw underlying driver handle.
    pub fn driver(&self) -> Arc<dyn Driver> {
        self.shared.driver.clone()
    }

    pub async fn close(&self) -> Result<()> {
        self.shared.driver.close().await
    }
}

impl std::fmt::Debug for Connection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Connection")
            .field("driver", &self.shared.driver)
            .field("models", &self.shared.models.keys().collect::<Vec<_>>())
            .finish()
    }
}

/// Initializes every discovered entity, in discovery order.
///
/// Each entity is verified against the driver capability, snapshotted into a
/// [`ModelSchema`], defined on the driver, and registered in the model map
/// under its declared name.
async fn initialize_models(
    driver: &mut dyn Driver,
    entities: &IndexMap<String, EntityDef>,
    table_name_prefix: Option<&str>,
) -> Result<IndexMap<String, Model>> {
    let mut models = IndexMap::new();

    for entity in entities.values() {
        entity.verify(driver.capability())?;

        let schema = ModelSchema::from_entity(entity, table_name_prefix);
        tracing::debug!(model = %schema.name, table = %schema.table, "defining model");
        driver.define_model(&schema).await?;

        models.insert(schema.name.clone(), Model::new(schema));
    }

    Ok(models)
}

/// Resolves every declared association against the initialized model set.
///
/// Must not run before `initialize_models` has processed every entity: a
/// target that has not been initialized yet would be indistinguishable from
/// a target that does not exist.
async fn resolve_associations(
    driver: &mut dyn Driver,
    entities: &IndexMap<String, EntityDef>,
    models: &mut IndexMap<String, Model>,
) -> Result<()> {
    // Models are mutated while the map is also consulted for target lookups,
    // so iterate by index rather than holding references into the map.
    for index in 0..models.len() {
        let source = models
            .get_index(index)
            .map(|(name, _)| name.clone())
            .unwrap();

        let mut links = Vec::new();
        for association in &entities[&source].associations {
            if !models.contains_key(association.target.as_str()) {
                return Err(Error::target_not_found(&association.target));
            }

            let link = AssociationLink {
                kind: association.kind,
                source: source.clone(),
                target: association.target.clone(),
                alias: association.alias().to_string(),
                foreign_key: association.options.foreign_key.clone(),
                through: association.options.through.clone(),
            };

            tracing::debug!(
                source = %link.source,
                target = %link.target,
                kind = %link.kind,
                alias = %link.alias,
                "linking association"
            );
            driver.link_association(&link).await?;
            links.push(link);
        }

        let (_, model) = models.get_index_mut(index).unwrap();
        for link in links {
            model.push_association(link);
        }
    }

    Ok(())
}
