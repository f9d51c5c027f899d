use std::fmt;

/// The closed set of association kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssociationKind {
    HasMany,
    HasOne,
    BelongsTo,
    BelongsToMany,
}

impl fmt::Display for AssociationKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            AssociationKind::HasMany => "has-many",
            AssociationKind::HasOne => "has-one",
            AssociationKind::BelongsTo => "belongs-to",
            AssociationKind::BelongsToMany => "belongs-to-many",
        })
    }
}

/// Options attached to a single association declaration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssociationOptions {
    /// Alias under which the association is registered. Unset means the
    /// declaring attribute name is used.
    pub alias: Option<String>,
    /// Foreign key column override, passed through to the driver.
    pub foreign_key: Option<String>,
    /// Join table for `BelongsToMany`. Required for that kind, meaningless
    /// for the others.
    pub through: Option<String>,
}

impl AssociationOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }

    pub fn foreign_key(mut self, column: impl Into<String>) -> Self {
        self.foreign_key = Some(column.into());
        self
    }

    pub fn through(mut self, table: impl Into<String>) -> Self {
        self.through = Some(table.into());
        self
    }
}

/// One association declaration on an entity.
///
/// The target is a symbolic reference: the declared model name of the target
/// entity, resolved against the connection's initialized-model set during
/// the link phase. Declarations accumulate in order; order is preserved for
/// deterministic registration but must not affect correctness.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Association {
    /// Attribute the association was declared on.
    pub attribute: String,
    pub kind: AssociationKind,
    /// Declared model name of the target entity.
    pub target: String,
    pub options: AssociationOptions,
}

impl Association {
    pub fn new(
        attribute: impl Into<String>,
        kind: AssociationKind,
        target: impl Into<String>,
        options: AssociationOptions,
    ) -> Self {
        Self {
            attribute: attribute.into(),
            kind,
            target: target.into(),
            options,
        }
    }

    /// The alias the association registers under: the explicit alias if one
    /// was given, otherwise the declaring attribute name.
    pub fn alias(&self) -> &str {
        self.options.alias.as_deref().unwrap_or(&self.attribute)
    }
}

/// A fully resolved association, ready to hand to the driver.
///
/// Source and target name initialized models within one connection; the
/// resolver guarantees both exist before the link is issued.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssociationLink {
    pub kind: AssociationKind,
    pub source: String,
    pub target: String,
    pub alias: String,
    pub foreign_key: Option<String>,
    pub through: Option<String>,
}
