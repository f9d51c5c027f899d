use tests::*;

use entwine::{AssociationKind, Connection, ConnectionOptions, EntityDef, Manifest};
use pretty_assertions::assert_eq;
use std::sync::Arc;

#[tokio::test]
async fn initialized_models_match_declarations() {
    let connection = Connection::open(library_options()).await.unwrap();

    let author = connection.model("Author").unwrap();
    let attributes: Vec<_> = author.columns().keys().map(String::as_str).collect();
    assert_eq!(attributes, ["id", "name"]);

    let books = author.association("books").unwrap();
    assert_eq!(books.kind, AssociationKind::HasMany);
    assert_eq!(books.target, "Book");

    let book = connection.model("Book").unwrap();
    assert_eq!(book.associations().len(), 1);
    assert_eq!(book.associations()[0].kind, AssociationKind::BelongsTo);
}

#[tokio::test]
async fn unknown_model_is_absent() {
    let connection = Connection::open(library_options()).await.unwrap();
    assert!(connection.model("Publisher").is_none());
}

#[tokio::test]
async fn table_names_are_derived_and_prefixed() {
    let options = ConnectionOptions::new("mem://library")
        .entity(author().table_name("authors"))
        .entity(EntityDef::new("Widget"))
        .entity(book())
        .table_name_prefix("app_");

    let connection = Connection::open(options).await.unwrap();
    assert_eq!(connection.model("Author").unwrap().table(), "app_authors");
    assert_eq!(connection.model("Widget").unwrap().table(), "app_Widget");
}

#[tokio::test]
async fn each_connection_owns_its_models() {
    let first = Connection::open(library_options()).await.unwrap();
    let second = Connection::open(library_options()).await.unwrap();

    let a = first.model("Author").unwrap();
    let b = second.model("Author").unwrap();
    assert!(!Arc::ptr_eq(&a, &b));
    assert_eq!(a.name(), b.name());
}

#[tokio::test]
async fn entity_snapshot_is_retained() {
    let connection = Connection::open(library_options()).await.unwrap();

    let original = connection.entity("Author").unwrap();
    assert_eq!(original.associations.len(), 1);
    assert!(connection.entity("Publisher").is_none());
}

#[tokio::test]
async fn belongs_to_many_without_through_is_a_configuration_error() {
    let options =
        ConnectionOptions::new("mem://library").entity(book().belongs_to_many("tags", "Tag"));

    let err = Connection::open(options).await.unwrap_err();
    assert!(err.is_configuration());
    assert!(err.to_string().contains("`through`"));
}

#[tokio::test]
async fn empty_manifest_yields_no_models() {
    let manifest = Manifest::new();
    assert!(manifest.is_empty());
    assert!(!library_manifest().is_empty());

    let options = ConnectionOptions::new("mem://empty").entities(manifest);

    let connection = Connection::open(options).await.unwrap();
    assert_eq!(connection.models().count(), 0);
}
