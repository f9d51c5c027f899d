use entwine_core::{
    async_trait, bail,
    driver::{Capability, Driver},
    schema::{AssociationLink, ModelSchema},
    Error, Result,
};

use indexmap::IndexMap;
use std::sync::Mutex;
use url::Url;

/// An in-memory driver that records model definitions and association links
/// instead of talking to a database. Used by tests and demos.
#[derive(Debug)]
pub struct Mem {
    store: Mutex<Store>,
}

#[derive(Debug, Default)]
struct Store {
    models: IndexMap<String, ModelSchema>,
    links: Vec<AssociationLink>,
    closed: bool,
}

impl Mem {
    pub fn new() -> Mem {
        Mem {
            store: Mutex::new(Store::default()),
        }
    }

    pub fn connect(url: &str) -> Result<Mem> {
        let parsed =
            Url::parse(url).map_err(|err| Error::invalid_connection_url(url, err.to_string()))?;

        if parsed.scheme() != "mem" {
            return Err(Error::invalid_connection_url(
                url,
                format!("expected scheme `mem`, got `{}`", parsed.scheme()),
            ));
        }

        Ok(Mem::new())
    }

    /// Model names defined so far, in definition order.
    pub fn defined_models(&self) -> Vec<String> {
        self.store.lock().unwrap().models.keys().cloned().collect()
    }

    /// Association links registered so far, in registration order.
    pub fn links(&self) -> Vec<AssociationLink> {
        self.store.lock().unwrap().links.clone()
    }

    pub fn is_closed(&self) -> bool {
        self.store.lock().unwrap().closed
    }
}

impl Default for Mem {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Driver for Mem {
    fn capability(&self) -> &Capability {
        &Capability::DEFAULT
    }

    async fn define_model(&mut self, model: &ModelSchema) -> Result<()> {
        let store = self.store.get_mut().unwrap();
        if store.closed {
            bail!("mem driver is closed");
        }

        // Redefining a model replaces the earlier definition.
        store.models.insert(model.name.clone(), model.clone());
        Ok(())
    }

    async fn link_association(&mut self, link: &AssociationLink) -> Result<()> {
        let store = self.store.get_mut().unwrap();
        if store.closed {
            bail!("mem driver is closed");
        }
        if !store.models.contains_key(&link.source) {
            bail!("source model `{}` is not defined", link.source);
        }
        if !store.models.contains_key(&link.target) {
            bail!("target model `{}` is not defined", link.target);
        }

        store.links.push(link.clone());
        Ok(())
    }

    async fn close(&self) -> Result<()> {
        self.store.lock().unwrap().closed = true;
        Ok(())
    }
}
