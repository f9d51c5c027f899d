use crate::{driver, manifest::Manifest, schema::EntityDef, Result};

use entwine_core::{driver::Driver, Error};

/// Options for constructing a [`Connection`](super::Connection).
///
/// Either a connection url (dispatched on its scheme) or an injected driver,
/// plus the entity manifest and passthrough options.
#[derive(Debug)]
pub struct ConnectionOptions {
    url: Option<String>,
    driver: Option<Box<dyn Driver>>,
    entities: Manifest,
    table_name_prefix: Option<String>,
}

impl ConnectionOptions {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: Some(url.into()),
            driver: None,
            entities: Manifest::new(),
            table_name_prefix: None,
        }
    }

    /// Builds options around an already-constructed driver instead of a url.
    pub fn with_driver(driver: impl Driver) -> Self {
        Self {
            url: None,
            driver: Some(Box::new(driver)),
            entities: Manifest::new(),
            table_name_prefix: None,
        }
    }

    /// Sets the entity manifest, replacing anything registered so far.
    pub fn entities(mut self, manifest: Manifest) -> Self {
        self.entities = manifest;
        self
    }

    /// Registers one entity on the manifest.
    pub fn entity(mut self, def: EntityDef) -> Self {
        self.entities = std::mem::take(&mut self.entities).entity(def);
        self
    }

    /// Prefixes every derived table name.
    pub fn table_name_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.table_name_prefix = Some(prefix.into());
        self
    }

    /// Consumes the options, connecting the driver if one was not injected.
    pub(crate) async fn connect(self) -> Result<(Box<dyn Driver>, Option<String>, Manifest)> {
        let driver = match (self.driver, self.url) {
            (Some(driver), _) => driver,
            (None, Some(url)) => driver::connect(&url).await?,
            (None, None) => {
                return Err(Error::configuration(
                    "connection options name neither a url nor a driver",
                ))
            }
        };

        Ok((driver, self.table_name_prefix, self.entities))
    }
}
