use crate::errors::ModelError;
use crate::term::{self, NewTerm, TermPatch};
use anyhow::Result;
use sea_orm::{ActiveModelTrait, EntityTrait, Set};

use super::setup_test_db;

#[tokio::test]
async fn create_assigns_increasing_ids() -> Result<()> {
    let db = setup_test_db().await?;

    let a = term::create(&db, NewTerm::new("HTTP", "Hypertext Transfer Protocol")).await?;
    let b = term::create(&db, NewTerm::new("TCP", "Transmission Control Protocol")).await?;

    assert_eq!(a.id, 1);
    assert!(b.id > a.id);
    assert_eq!(a.term, "HTTP");
    assert_eq!(a.description, "Hypertext Transfer Protocol");
    Ok(())
}

#[tokio::test]
async fn find_by_term_is_exact_match() -> Result<()> {
    let db = setup_test_db().await?;
    term::create(&db, NewTerm::new("Cache", "Fast storage layer")).await?;

    assert!(term::find_by_term(&db, "Cache").await?.is_some());
    assert!(term::find_by_term(&db, "cache").await?.is_none());
    assert!(term::find_by_term(&db, " Cache").await?.is_none());
    Ok(())
}

#[tokio::test]
async fn empty_fields_are_never_persisted() -> Result<()> {
    let db = setup_test_db().await?;

    let err = term::create(&db, NewTerm::new("", "something")).await.unwrap_err();
    assert!(matches!(err, ModelError::Validation(_)));
    let err = term::create(&db, NewTerm::new("API", "")).await.unwrap_err();
    assert!(matches!(err, ModelError::Validation(_)));

    assert!(term::Entity::find().all(&db).await?.is_empty());
    Ok(())
}

#[tokio::test]
async fn unique_index_rejects_duplicate_insert() -> Result<()> {
    let db = setup_test_db().await?;
    let first = term::create(&db, NewTerm::new("DNS", "Domain Name System")).await?;

    // Bypass the helper to prove the store itself enforces uniqueness
    let raw = term::ActiveModel {
        term: Set("DNS".into()),
        description: Set("dup".into()),
        ..Default::default()
    };
    let err: ModelError = raw.insert(&db).await.unwrap_err().into();
    assert!(matches!(err, ModelError::Duplicate(_)), "got {err:?}");

    let stored = term::find_by_term(&db, "DNS").await?.unwrap();
    assert_eq!(stored, first);
    Ok(())
}

#[tokio::test]
async fn patch_with_description_only_keeps_term() -> Result<()> {
    let db = setup_test_db().await?;
    let created = term::create(&db, NewTerm::new("REST", "Old")).await?;

    let patch = TermPatch { term: None, description: Some("Representational State Transfer".into()) };
    let updated = term::update(&db, created.clone(), patch).await?;

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.term, "REST");
    assert_eq!(updated.description, "Representational State Transfer");
    Ok(())
}

#[tokio::test]
async fn empty_patch_is_a_noop() -> Result<()> {
    let db = setup_test_db().await?;
    let created = term::create(&db, NewTerm::new("gRPC", "RPC framework")).await?;

    let updated = term::update(&db, created.clone(), TermPatch::default()).await?;
    assert_eq!(updated, created);
    Ok(())
}

#[tokio::test]
async fn renaming_onto_existing_term_is_duplicate() -> Result<()> {
    let db = setup_test_db().await?;
    term::create(&db, NewTerm::new("UDP", "User Datagram Protocol")).await?;
    let quic = term::create(&db, NewTerm::new("QUIC", "Transport over UDP")).await?;

    let patch = TermPatch { term: Some("UDP".into()), description: None };
    let err = term::update(&db, quic.clone(), patch).await.unwrap_err();
    assert!(matches!(err, ModelError::Duplicate(_)), "got {err:?}");

    let stored = term::Entity::find_by_id(quic.id).one(&db).await?.unwrap();
    assert_eq!(stored.term, "QUIC");
    Ok(())
}

#[tokio::test]
async fn list_pages_in_insertion_order() -> Result<()> {
    let db = setup_test_db().await?;
    for name in ["alpha", "beta", "gamma"] {
        term::create(&db, NewTerm::new(name, format!("{name} description"))).await?;
    }

    let first = term::list(&db, 0, 2).await?;
    assert_eq!(first.iter().map(|t| t.term.as_str()).collect::<Vec<_>>(), ["alpha", "beta"]);

    let rest = term::list(&db, 2, 100).await?;
    assert_eq!(rest.len(), 1);
    assert_eq!(rest[0].term, "gamma");

    assert!(term::list(&db, 3, 100).await?.is_empty());
    Ok(())
}

#[tokio::test]
async fn delete_reports_whether_a_row_went_away() -> Result<()> {
    let db = setup_test_db().await?;
    let t = term::create(&db, NewTerm::new("TLS", "Transport Layer Security")).await?;

    assert!(term::delete(&db, t.id).await?);
    assert!(!term::delete(&db, t.id).await?);
    assert!(term::find_by_term(&db, "TLS").await?.is_none());
    Ok(())
}

#[test]
fn model_serializes_with_public_field_names() {
    let m = term::Model { id: 7, term: "HTTP".into(), description: "Protocol".into() };
    let v = serde_json::to_value(&m).unwrap();
    assert_eq!(v, serde_json::json!({"id": 7, "term": "HTTP", "description": "Protocol"}));
}

#[test]
fn patch_deserializes_missing_and_null_as_unset() {
    let p: TermPatch = serde_json::from_str(r#"{"description": "x"}"#).unwrap();
    assert_eq!(p, TermPatch { term: None, description: Some("x".into()) });

    let p: TermPatch = serde_json::from_str(r#"{"term": null}"#).unwrap();
    assert!(p.is_empty());
}

#[test]
fn patch_validation_rejects_supplied_empty_values() {
    assert!(TermPatch { term: Some(String::new()), description: None }.validate().is_err());
    assert!(TermPatch { term: None, description: Some(String::new()) }.validate().is_err());
    assert!(TermPatch::default().validate().is_ok());
}
