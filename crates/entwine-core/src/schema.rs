mod association;
pub use association::{Association, AssociationKind, AssociationLink, AssociationOptions};

mod column;
pub use column::{ColumnDef, ColumnType};

mod entity;
pub use entity::EntityDef;

mod model;
pub use model::ModelSchema;

mod verify;
