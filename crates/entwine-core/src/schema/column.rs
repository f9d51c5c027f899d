/// Provider-independent column types.
///
/// Drivers map these onto whatever storage types the engine they wrap
/// supports; the metadata layer never generates DDL itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColumnType {
    Integer,
    BigInteger,
    Float,
    Double,
    Boolean,
    Text,
    VarChar(u32),
    DateTime,
    Uuid,
    Json,
    Blob,
}

/// A declared column: type plus constraints.
///
/// Attached to an attribute of an [`EntityDef`](super::EntityDef) and
/// consumed once at model-initialization time. No validation happens at
/// declaration time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnDef {
    pub ty: ColumnType,
    pub nullable: bool,
    pub primary_key: bool,
    pub unique: bool,
    pub auto_increment: bool,
    /// Default value, as a literal the driver passes through.
    pub default: Option<String>,
    /// Explicit storage column name. Unset means the attribute name is used.
    pub column_name: Option<String>,
}

impl ColumnDef {
    pub fn new(ty: ColumnType) -> Self {
        Self {
            ty,
            nullable: true,
            primary_key: false,
            unique: false,
            auto_increment: false,
            default: None,
            column_name: None,
        }
    }

    /// Marks the column as part of the primary key. Primary key columns are
    /// never nullable.
    pub fn primary_key(mut self) -> Self {
        self.primary_key = true;
        self.nullable = false;
        self
    }

    pub fn not_null(mut self) -> Self {
        self.nullable = false;
        self
    }

    pub fn unique(mut self) -> Self {
        self.unique = true;
        self
    }

    pub fn auto_increment(mut self) -> Self {
        self.auto_increment = true;
        self
    }

    pub fn default_value(mut self, literal: impl Into<String>) -> Self {
        self.default = Some(literal.into());
        self
    }

    pub fn column_name(mut self, name: impl Into<String>) -> Self {
        self.column_name = Some(name.into());
        self
    }
}
