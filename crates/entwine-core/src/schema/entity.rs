use super::{Association, AssociationKind, AssociationOptions, ColumnDef};

use indexmap::IndexMap;

/// An entity as declared by the user, before any connection binds it.
///
/// This is pure metadata: a declared model name, an ordered column map and an
/// ordered association list. Initializing it against a connection produces a
/// [`Model`] owned by that connection; two connections initialize independent
/// models from the same `EntityDef`.
///
/// [`Model`]: super::ModelSchema
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityDef {
    /// Declared model name. Models are registered and association targets
    /// resolved under this name.
    pub name: String,

    /// Explicit table name. Unset means the driver derives one from `name`.
    pub table_name: Option<String>,

    /// Declared columns, keyed by attribute name, in declaration order.
    pub columns: IndexMap<String, ColumnDef>,

    /// Declared associations, in declaration order.
    pub associations: Vec<Association>,
}

impl EntityDef {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            table_name: None,
            columns: IndexMap::new(),
            associations: Vec::new(),
        }
    }

    pub fn table_name(mut self, table: impl Into<String>) -> Self {
        self.table_name = Some(table.into());
        self
    }

    /// Declares a column on the given attribute. Declaring the same attribute
    /// twice replaces the earlier definition.
    pub fn column(mut self, attribute: impl Into<String>, def: ColumnDef) -> Self {
        self.columns.insert(attribute.into(), def);
        self
    }

    pub fn has_many(self, attribute: impl Into<String>, target: impl Into<String>) -> Self {
        self.associate(
            attribute,
            AssociationKind::HasMany,
            target,
            AssociationOptions::new(),
        )
    }

    pub fn has_one(self, attribute: impl Into<String>, target: impl Into<String>) -> Self {
        self.associate(
            attribute,
            AssociationKind::HasOne,
            target,
            AssociationOptions::new(),
        )
    }

    pub fn belongs_to(self, attribute: impl Into<String>, target: impl Into<String>) -> Self {
        self.associate(
            attribute,
            AssociationKind::BelongsTo,
            target,
            AssociationOptions::new(),
        )
    }

    pub fn belongs_to_many(self, attribute: impl Into<String>, target: impl Into<String>) -> Self {
        self.associate(
            attribute,
            AssociationKind::BelongsToMany,
            target,
            AssociationOptions::new(),
        )
    }

    /// Appends an association declaration with explicit options. The alias
    /// defaults to the attribute name when the options leave it unset.
    pub fn associate(
        mut self,
        attribute: impl Into<String>,
        kind: AssociationKind,
        target: impl Into<String>,
        options: AssociationOptions,
    ) -> Self {
        self.associations
            .push(Association::new(attribute, kind, target, options));
        self
    }
}
