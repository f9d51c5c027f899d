use crate::schema::{AssociationLink, ColumnDef, ModelSchema};

use indexmap::IndexMap;

/// A connection-bound, initialized model.
///
/// Derived from an [`EntityDef`](crate::EntityDef) during connection
/// construction. The column snapshot and the resolved association list are
/// fixed once the connection is ready; two connections built from the same
/// entity each own an independent `Model`.
#[derive(Debug)]
pub struct Model {
    schema: ModelSchema,
    associations: Vec<AssociationLink>,
}

impl Model {
    pub(crate) fn new(schema: ModelSchema) -> Self {
        Self {
            schema,
            associations: Vec::new(),
        }
    }

    pub(crate) fn push_association(&mut self, link: AssociationLink) {
        self.associations.push(link);
    }

    /// Declared model name; also the key in the connection's model map.
    pub fn name(&self) -> &str {
        &self.schema.name
    }

    /// Resolved table name the driver was given.
    pub fn table(&self) -> &str {
        &self.schema.table
    }

    pub fn columns(&self) -> &IndexMap<String, ColumnDef> {
        &self.schema.columns
    }

    /// Resolved associations, in declaration order.
    pub fn associations(&self) -> &[AssociationLink] {
        &self.associations
    }

    /// Looks up a resolved association by its alias.
    pub fn association(&self, alias: &str) -> Option<&AssociationLink> {
        self.associations.iter().find(|link| link.alias == alias)
    }
}
