pub mod binding;
pub use binding::{ConnectionBinding, ConnectionRef, ConnectionScope, ModelBinding};

pub mod connection;
pub use connection::{Connection, ConnectionOptions};

pub mod driver;

pub mod logging;

pub mod manifest;
pub use manifest::{Export, Manifest, Source};

mod model;
pub use model::Model;

pub mod registry;
pub use registry::Registry;

pub mod schema;
pub use schema::{
    AssociationKind, AssociationOptions, ColumnDef, ColumnType, EntityDef,
};

pub use entwine_core::{bail, err, Error, Result};
