use crate::{model::Model, Connection, Registry, Result};

use entwine_core::{driver::Driver, schema::EntityDef, Error};

use std::collections::HashMap;
use std::sync::{Arc, OnceLock};

/// A connection choice: by registry name or by direct handle.
#[derive(Debug, Clone)]
pub enum ConnectionRef {
    Named(String),
    Direct(Connection),
}

impl From<&str> for ConnectionRef {
    fn from(name: &str) -> Self {
        ConnectionRef::Named(name.to_string())
    }
}

impl From<String> for ConnectionRef {
    fn from(name: String) -> Self {
        ConnectionRef::Named(name)
    }
}

impl From<Connection> for ConnectionRef {
    fn from(connection: Connection) -> Self {
        ConnectionRef::Direct(connection)
    }
}

impl From<&Connection> for ConnectionRef {
    fn from(connection: &Connection) -> Self {
        ConnectionRef::Direct(connection.clone())
    }
}

/// Connection choices for one user type: an optional class-level choice plus
/// per-attribute overrides.
///
/// Resolution order for an attribute: its own override, else the class-level
/// choice, else the registry's default connection.
#[derive(Debug, Clone, Default)]
pub struct ConnectionScope {
    on_class: Option<ConnectionRef>,
    on_attributes: HashMap<String, ConnectionRef>,
}

impl ConnectionScope {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the class-level choice.
    pub fn for_all(mut self, choice: impl Into<ConnectionRef>) -> Self {
        self.on_class = Some(choice.into());
        self
    }

    /// Overrides the choice for a single attribute.
    pub fn for_attribute(
        mut self,
        attribute: impl Into<String>,
        choice: impl Into<ConnectionRef>,
    ) -> Self {
        self.on_attributes.insert(attribute.into(), choice.into());
        self
    }

    fn is_empty(&self) -> bool {
        self.on_class.is_none() && self.on_attributes.is_empty()
    }

    fn choice(&self, attribute: &str) -> Option<&ConnectionRef> {
        self.on_attributes.get(attribute).or(self.on_class.as_ref())
    }
}

/// Shared resolve-once machinery for both binding flavors.
///
/// The resolved connection is cached on first success and never re-evaluated,
/// even if the registry changes later. Failures are not cached; the next
/// resolve retries.
#[derive(Debug)]
struct Resolver {
    attribute: String,
    scope: ConnectionScope,
    cached: OnceLock<Connection>,
}

impl Resolver {
    fn new(attribute: String, scope: ConnectionScope) -> Self {
        Self {
            attribute,
            scope,
            cached: OnceLock::new(),
        }
    }

    fn connection(&self, registry: &Registry) -> Result<&Connection> {
        if let Some(connection) = self.cached.get() {
            return Ok(connection);
        }

        let connection = self.lookup(registry)?;
        Ok(self.cached.get_or_init(|| connection))
    }

    fn lookup(&self, registry: &Registry) -> Result<Connection> {
        let choice = match self.scope.choice(&self.attribute) {
            Some(choice) => choice,
            None => {
                if !self.scope.is_empty() {
                    tracing::warn!(
                        attribute = %self.attribute,
                        "no connection choice for attribute, using default connection"
                    );
                }
                return default_or_err(registry);
            }
        };

        match choice {
            ConnectionRef::Direct(connection) => Ok(connection.clone()),
            ConnectionRef::Named(name) => match registry.get(name) {
                Some(connection) => Ok(connection.clone()),
                None => {
                    tracing::warn!(
                        attribute = %self.attribute,
                        connection = %name,
                        "connection is not found, using default connection"
                    );
                    default_or_err(registry)
                }
            },
        }
    }
}

fn default_or_err(registry: &Registry) -> Result<Connection> {
    registry
        .default_connection()
        .cloned()
        .ok_or_else(Error::no_default_connection)
}

/// A resolve-once binding yielding the chosen connection's raw driver handle.
#[derive(Debug)]
pub struct ConnectionBinding {
    inner: Resolver,
}

impl ConnectionBinding {
    pub fn new(attribute: impl Into<String>, scope: ConnectionScope) -> Self {
        Self {
            inner: Resolver::new(attribute.into(), scope),
        }
    }

    /// The connection this binding resolves to.
    pub fn connection(&self, registry: &Registry) -> Result<&Connection> {
        self.inner.connection(registry)
    }

    /// The raw underlying driver handle.
    pub fn resolve(&self, registry: &Registry) -> Result<Arc<dyn Driver>> {
        Ok(self.inner.connection(registry)?.driver())
    }
}

/// A resolve-once binding yielding a named initialized model on the chosen
/// connection.
#[derive(Debug)]
pub struct ModelBinding {
    inner: Resolver,
    model_name: String,
}

impl ModelBinding {
    /// Binds to the model an entity definition declares. Taking the entity
    /// rather than a bare string means the binding can only name something
    /// that is an entity.
    pub fn new(attribute: impl Into<String>, entity: &EntityDef, scope: ConnectionScope) -> Self {
        Self::named(attribute, entity.name.clone(), scope)
    }

    /// Binds to a model by declared name.
    pub fn named(
        attribute: impl Into<String>,
        model_name: impl Into<String>,
        scope: ConnectionScope,
    ) -> Self {
        Self {
            inner: Resolver::new(attribute.into(), scope),
            model_name: model_name.into(),
        }
    }

    /// The initialized model on the resolved connection.
    pub fn resolve(&self, registry: &Registry) -> Result<Arc<Model>> {
        let connection = self.inner.connection(registry)?;
        connection
            .model(&self.model_name)
            .ok_or_else(|| Error::target_not_found(&self.model_name))
    }
}
