use super::{AssociationKind, EntityDef};
use crate::{driver::Capability, Error, Result};

use std::collections::HashSet;

impl EntityDef {
    /// Validates the declaration against the target driver.
    ///
    /// Runs at model-initialization time; declaration itself never validates,
    /// so malformed options surface here.
    pub fn verify(&self, capability: &Capability) -> Result<()> {
        if self.name.is_empty() {
            return Err(Error::configuration("entity has an empty model name"));
        }

        let mut aliases = HashSet::new();
        for association in &self.associations {
            if !aliases.insert(association.alias()) {
                return Err(Error::configuration(format!(
                    "entity `{}` declares the association alias `{}` more than once",
                    self.name,
                    association.alias(),
                )));
            }

            if association.kind == AssociationKind::BelongsToMany {
                if association.options.through.is_none() {
                    return Err(Error::configuration(format!(
                        "association `{}` on entity `{}` is belongs-to-many but has no `through` table",
                        association.alias(),
                        self.name,
                    )));
                }

                if !capability.belongs_to_many {
                    return Err(Error::configuration(format!(
                        "association `{}` on entity `{}` requires belongs-to-many, \
                         which the driver does not support",
                        association.alias(),
                        self.name,
                    )));
                }
            }
        }

        Ok(())
    }
}
