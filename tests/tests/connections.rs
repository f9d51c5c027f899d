use tests::*;

use entwine::{ConnectionOptions, EntityDef, Registry};
use indexmap::IndexMap;
use std::sync::atomic::Ordering;

#[tokio::test]
async fn first_connection_becomes_the_default() {
    let mut registry = Registry::new();

    registry.create_connection(library_options()).await.unwrap();
    registry
        .create_connection(ConnectionOptions::new("mem://inventory").entity(EntityDef::new("Widget")))
        .await
        .unwrap();

    let default = registry.resolve(None).unwrap();
    assert!(default.model("Author").is_some());
    assert!(default.model("Widget").is_none());
}

#[tokio::test]
async fn unknown_name_resolves_to_nothing() {
    let mut registry = Registry::new();
    registry.create_connection(library_options()).await.unwrap();

    assert!(registry.get("x").is_none());
    assert!(registry.resolve(Some("x")).is_none());
}

#[tokio::test]
async fn create_connections_registers_each_name() {
    let mut registry = Registry::new();

    let mut set = IndexMap::new();
    set.insert("library".to_string(), library_options());
    set.insert(
        "inventory".to_string(),
        ConnectionOptions::new("mem://inventory").entity(EntityDef::new("Widget")),
    );

    let connections = registry.create_connections(set).await.unwrap();
    assert_eq!(connections.len(), 2);

    assert!(registry.get("library").unwrap().model("Author").is_some());
    assert!(registry.get("inventory").unwrap().model("Widget").is_some());

    // The default comes from the batch since nothing was registered before.
    assert!(registry.resolve(None).unwrap().model("Author").is_some());
}

#[tokio::test]
async fn duplicate_name_is_fatal_and_the_first_registration_survives() {
    let mut registry = Registry::new();

    let mut first = IndexMap::new();
    first.insert("library".to_string(), library_options());
    registry.create_connections(first).await.unwrap();

    let mut second = IndexMap::new();
    second.insert(
        "library".to_string(),
        ConnectionOptions::new("mem://other").entity(EntityDef::new("Widget")),
    );

    let err = registry.create_connections(second).await.unwrap_err();
    assert!(err.is_duplicate_connection());
    assert!(err.to_string().contains("`library`"));

    // The original connection is untouched and still usable.
    let library = registry.get("library").unwrap();
    assert!(library.model("Author").is_some());
    assert!(library.model("Widget").is_none());
}

#[tokio::test]
async fn partial_failure_closes_the_connections_that_succeeded() {
    let mut registry = Registry::new();

    let (tracking, closed) = TrackingDriver::new();

    let mut set = IndexMap::new();
    set.insert(
        "ok".to_string(),
        ConnectionOptions::with_driver(tracking).entity(EntityDef::new("Widget")),
    );
    set.insert(
        "bad".to_string(),
        ConnectionOptions::with_driver(FailingDriver).entity(EntityDef::new("Widget")),
    );

    let err = registry.create_connections(set).await.unwrap_err();
    assert!(err.is_driver());
    assert!(err.to_string().contains("injected failure"));

    // Nothing from the batch was registered, and the connection that did
    // open was closed again.
    assert!(registry.get("ok").is_none());
    assert!(registry.get("bad").is_none());
    assert!(closed.load(Ordering::SeqCst));
}

#[tokio::test]
async fn bad_url_aborts_construction() {
    let mut registry = Registry::new();

    let err = registry
        .create_connection(ConnectionOptions::new("oracle://prod"))
        .await
        .unwrap_err();
    assert!(err.is_invalid_connection_url());
    assert!(registry.default_connection().is_none());
}

#[tokio::test]
async fn register_rejects_a_taken_name() {
    let mut registry = Registry::new();

    let connection = registry.create_connection(library_options()).await.unwrap();
    registry.register("library", connection.clone()).unwrap();

    let err = registry.register("library", connection).unwrap_err();
    assert!(err.is_duplicate_connection());
}
