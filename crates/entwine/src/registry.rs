use crate::{Connection, ConnectionOptions, Result};

use entwine_core::Error;
use indexmap::IndexMap;

/// An explicit, caller-owned set of named connections plus a default slot.
///
/// The default is the first connection successfully opened through the
/// registry. Names are unique; registering a name twice is fatal and the
/// first registration stays in place.
#[derive(Debug, Default)]
pub struct Registry {
    connections: IndexMap<String, Connection>,
    default: Option<Connection>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens a single connection. The connection is not registered under a
    /// name, but becomes the default if no default exists yet.
    pub async fn create_connection(&mut self, options: ConnectionOptions) -> Result<Connection> {
        let connection = Connection::open(options).await?;

        if self.default.is_none() {
            self.default = Some(connection.clone());
        }

        Ok(connection)
    }

    /// Opens several connections concurrently and registers each under its
    /// name.
    ///
    /// All constructions run to completion before any outcome is decided. If
    /// any construction failed, the first failure (in declaration order)
    /// propagates and every connection that did succeed is closed. Name
    /// collisions are likewise reported only after all constructions settle,
    /// closing the freshly built connections; nothing from the batch is
    /// registered in that case.
    pub async fn create_connections(
        &mut self,
        options_set: IndexMap<String, ConnectionOptions>,
    ) -> Result<IndexMap<String, Connection>> {
        let mut tasks = Vec::with_capacity(options_set.len());
        for (name, options) in options_set {
            tasks.push((name, tokio::spawn(Connection::open(options))));
        }

        let mut built: IndexMap<String, Connection> = IndexMap::new();
        let mut first_err: Option<Error> = None;

        for (name, task) in tasks {
            match task.await {
                Ok(Ok(connection)) => {
                    built.insert(name, connection);
                }
                Ok(Err(err)) => {
                    tracing::debug!(connection = %name, error = %err, "connection failed to open");
                    if first_err.is_none() {
                        first_err = Some(err);
                    }
                }
                Err(join_err) => {
                    if first_err.is_none() {
                        first_err = Some(Error::from(anyhow::Error::from(join_err)));
                    }
                }
            }
        }

        if let Some(err) = first_err {
            close_all(&built).await;
            return Err(err);
        }

        for name in built.keys() {
            if self.connections.contains_key(name) {
                let err = Error::duplicate_connection(name);
                close_all(&built).await;
                return Err(err);
            }
        }

        for (name, connection) in &built {
            self.connections.insert(name.clone(), connection.clone());
        }

        if self.default.is_none() {
            self.default = built.values().next().cloned();
        }

        Ok(built)
    }

    /// Registers an already-open connection under a name.
    pub fn register(&mut self, name: impl Into<String>, connection: Connection) -> Result<()> {
        let name = name.into();
        if self.connections.contains_key(&name) {
            return Err(Error::duplicate_connection(name));
        }

        if self.default.is_none() {
            self.default = Some(connection.clone());
        }
        self.connections.insert(name, connection);
        Ok(())
    }

    /// Returns the connection registered under `name`. An unknown name is
    /// not an error; callers handle the absent result.
    pub fn get(&self, name: &str) -> Option<&Connection> {
        self.connections.get(name)
    }

    /// The first connection opened through this registry, if any.
    pub fn default_connection(&self) -> Option<&Connection> {
        self.default.as_ref()
    }

    /// Resolves an optional name: `None` means the default connection.
    pub fn resolve(&self, name: Option<&str>) -> Option<&Connection> {
        match name {
            Some(name) => self.get(name),
            None => self.default_connection(),
        }
    }
}

/// Best-effort close of every connection in a failed batch. Close failures
/// are logged, not propagated; the original error wins.
async fn close_all(connections: &IndexMap<String, Connection>) {
    for (name, connection) in connections {
        if let Err(err) = connection.close().await {
            tracing::warn!(connection = %name, error = %err, "failed to close connection");
        }
    }
}
