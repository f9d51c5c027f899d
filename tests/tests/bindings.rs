use tests::*;

use entwine::{
    ConnectionBinding, ConnectionOptions, ConnectionScope, EntityDef, ModelBinding, Registry,
};
use indexmap::IndexMap;
use std::sync::Arc;

async fn two_named_connections(registry: &mut Registry) {
    let mut set = IndexMap::new();
    set.insert("library".to_string(), library_options());
    set.insert(
        "inventory".to_string(),
        ConnectionOptions::new("mem://inventory").entity(EntityDef::new("Widget")),
    );
    registry.create_connections(set).await.unwrap();
}

#[tokio::test]
async fn per_attribute_override_beats_class_level() {
    let mut registry = Registry::new();
    two_named_connections(&mut registry).await;

    let scope = ConnectionScope::new()
        .for_all("library")
        .for_attribute("stock", "inventory");

    let stock = ConnectionBinding::new("stock", scope.clone());
    assert!(stock
        .connection(&registry)
        .unwrap()
        .model("Widget")
        .is_some());

    let catalog = ConnectionBinding::new("catalog", scope);
    assert!(catalog
        .connection(&registry)
        .unwrap()
        .model("Author")
        .is_some());
}

#[tokio::test]
async fn absent_name_falls_back_to_default_and_memoizes() {
    let mut registry = Registry::new();
    two_named_connections(&mut registry).await;

    let scope = ConnectionScope::new().for_attribute("stock", "ghost");
    let binding = ConnectionBinding::new("stock", scope);

    // Falls back to the default connection (the first of the batch) with a
    // warning.
    let resolved = binding.connection(&registry).unwrap();
    assert!(resolved.model("Author").is_some());

    // Registering `ghost` afterwards does not change the cached resolution.
    let ghost = registry
        .create_connection(ConnectionOptions::new("mem://ghost").entity(EntityDef::new("Phantom")))
        .await
        .unwrap();
    registry.register("ghost", ghost).unwrap();

    let resolved = binding.connection(&registry).unwrap();
    assert!(resolved.model("Author").is_some());
    assert!(resolved.model("Phantom").is_none());
}

#[tokio::test]
async fn no_default_connection_is_fatal() {
    let registry = Registry::new();

    let binding = ConnectionBinding::new("stock", ConnectionScope::new());
    let err = binding.connection(&registry).unwrap_err();
    assert!(err.is_no_default_connection());
}

#[tokio::test]
async fn failed_resolution_is_retried() {
    let mut registry = Registry::new();

    let binding = ConnectionBinding::new("stock", ConnectionScope::new());
    assert!(binding.connection(&registry).is_err());

    registry.create_connection(library_options()).await.unwrap();
    assert!(binding.connection(&registry).is_ok());
}

#[tokio::test]
async fn raw_binding_yields_the_driver_handle() {
    let mut registry = Registry::new();
    registry.create_connection(library_options()).await.unwrap();

    let binding = ConnectionBinding::new("db", ConnectionScope::new());
    assert!(binding.resolve(&registry).is_ok());
}

#[tokio::test]
async fn model_binding_yields_the_initialized_model() {
    let mut registry = Registry::new();
    let connection = registry.create_connection(library_options()).await.unwrap();

    let binding = ModelBinding::new("authors", &author(), ConnectionScope::new());
    let model = binding.resolve(&registry).unwrap();

    assert!(Arc::ptr_eq(&model, &connection.model("Author").unwrap()));
}

#[tokio::test]
async fn model_binding_for_an_absent_model_fails() {
    let mut registry = Registry::new();
    registry.create_connection(library_options()).await.unwrap();

    let binding = ModelBinding::named("ghosts", "Ghost", ConnectionScope::new());
    let err = binding.resolve(&registry).unwrap_err();
    assert!(err.is_target_not_found());
}

#[tokio::test]
async fn direct_connection_reference_skips_the_registry() {
    let registry = Registry::new();
    let connection = entwine::Connection::open(library_options()).await.unwrap();

    let scope = ConnectionScope::new().for_all(&connection);
    let binding = ConnectionBinding::new("db", scope);

    // No default connection exists, but the direct reference resolves.
    let resolved = binding.connection(&registry).unwrap();
    assert!(resolved.model("Author").is_some());
}
