use super::{ColumnDef, EntityDef};

use indexmap::IndexMap;

/// The model-definition payload handed to a driver.
///
/// An immutable snapshot of user intent: the columns are copied from the
/// entity declaration as-is, not re-derived. The binding to the connection is
/// structural (the driver this schema is defined on) and not overridable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelSchema {
    /// Model name, unique within one connection.
    pub name: String,

    /// Resolved table name: the explicit one if declared, otherwise the
    /// model name, with the connection's table name prefix applied.
    pub table: String,

    /// Column snapshot, keyed by attribute name, in declaration order.
    pub columns: IndexMap<String, ColumnDef>,
}

impl ModelSchema {
    pub fn from_entity(entity: &EntityDef, table_name_prefix: Option<&str>) -> Self {
        let base = entity.table_name.as_deref().unwrap_or(&entity.name);
        let table = match table_name_prefix {
            Some(prefix) => format!("{prefix}{base}"),
            None => base.to_string(),
        };

        Self {
            name: entity.name.clone(),
            table,
            columns: entity.columns.clone(),
        }
    }
}
