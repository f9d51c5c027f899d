pub use entwine_core::schema::{
    Association, AssociationKind, AssociationLink, AssociationOptions, ColumnDef, ColumnType,
    EntityDef, ModelSchema,
};
