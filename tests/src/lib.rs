//! Shared fixtures for the integration tests: a small library schema and a
//! couple of instrumented drivers.

use entwine::{
    manifest::{Export, Manifest, Source},
    schema::{AssociationLink, ModelSchema},
    ColumnDef, ColumnType, ConnectionOptions, EntityDef,
};
use entwine_core::{
    async_trait,
    driver::{Capability, Driver},
    Error, Result,
};

use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};

pub fn author() -> EntityDef {
    EntityDef::new("Author")
        .column(
            "id",
            ColumnDef::new(ColumnType::Integer)
                .primary_key()
                .auto_increment(),
        )
        .column("name", ColumnDef::new(ColumnType::Text).not_null())
        .has_many("books", "Book")
}

pub fn book() -> EntityDef {
    EntityDef::new("Book")
        .column(
            "id",
            ColumnDef::new(ColumnType::Integer)
                .primary_key()
                .auto_increment(),
        )
        .column("title", ColumnDef::new(ColumnType::Text))
        .belongs_to("author", "Author")
}

/// Two sources, one entity each, plus a non-entity export the loader must
/// skip.
pub fn library_manifest() -> Manifest {
    Manifest::new()
        .source(
            Source::new("entities/author")
                .entity(author())
                .export(Export::Opaque("slugify".to_string())),
        )
        .source(Source::new("entities/book").entity(book()))
}

pub fn library_options() -> ConnectionOptions {
    ConnectionOptions::new("mem://library").entities(library_manifest())
}

/// A driver that accepts everything and reports whether it was closed.
#[derive(Debug)]
pub struct TrackingDriver {
    closed: Arc<AtomicBool>,
}

impl TrackingDriver {
    pub fn new() -> (TrackingDriver, Arc<AtomicBool>) {
        let closed = Arc::new(AtomicBool::new(false));
        (
            TrackingDriver {
                closed: closed.clone(),
            },
            closed,
        )
    }
}

#[async_trait]
impl Driver for TrackingDriver {
    fn capability(&self) -> &Capability {
        &Capability::DEFAULT
    }

    async fn define_model(&mut self, _model: &ModelSchema) -> Result<()> {
        Ok(())
    }

    async fn link_association(&mut self, _link: &AssociationLink) -> Result<()> {
        Ok(())
    }

    async fn close(&self) -> Result<()> {
        self.closed.store(true, Ordering::SeqCst);
        Ok(())
    }
}

/// The engine-level error [`FailingDriver`] reports.
#[derive(Debug)]
pub struct EngineFailure(pub String);

impl std::fmt::Display for EngineFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "injected failure: {}", self.0)
    }
}

impl std::error::Error for EngineFailure {}

/// A driver whose model definitions always fail with an engine error.
#[derive(Debug)]
pub struct FailingDriver;

#[async_trait]
impl Driver for FailingDriver {
    fn capability(&self) -> &Capability {
        &Capability::DEFAULT
    }

    async fn define_model(&mut self, model: &ModelSchema) -> Result<()> {
        Err(Error::driver(EngineFailure(format!(
            "defining `{}`",
            model.name
        ))))
    }

    async fn link_association(&mut self, link: &AssociationLink) -> Result<()> {
        Err(Error::driver(EngineFailure(format!(
            "linking `{}`",
            link.alias
        ))))
    }
}
