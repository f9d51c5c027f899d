/// Describes which declaration features a driver can represent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Capability {
    /// Whether the driver can represent many-to-many associations through a
    /// join table.
    pub belongs_to_many: bool,
}

impl Capability {
    /// Capability of a full-featured relational engine.
    pub const DEFAULT: Capability = Capability {
        belongs_to_many: true,
    };
}
