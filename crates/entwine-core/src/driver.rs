mod capability;
pub use capability::Capability;

use crate::{
    async_trait,
    schema::{AssociationLink, ModelSchema},
};

use std::fmt::Debug;

/// The boundary to the underlying relational-mapping library.
///
/// Everything substantive — schema creation, SQL generation, transactions,
/// pooling — happens behind this trait. The metadata layer only compiles
/// declarations into `define_model` and `link_association` calls, in that
/// order: every model of a connection is defined before the first
/// association on that connection is linked.
#[async_trait]
pub trait Driver: Debug + Send + Sync + 'static {
    /// Describes the driver's capability, which informs declaration
    /// verification.
    fn capability(&self) -> &Capability;

    /// Define a model on the underlying library.
    async fn define_model(&mut self, model: &ModelSchema) -> crate::Result<()>;

    /// Register a resolved association between two previously defined models.
    async fn link_association(&mut self, link: &AssociationLink) -> crate::Result<()>;

    /// Release the underlying handle.
    async fn close(&self) -> crate::Result<()> {
        Ok(())
    }
}
