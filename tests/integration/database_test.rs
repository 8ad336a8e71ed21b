//! User Database Integration Tests
//!
//! Covers the SQLite `users` table: upsert-by-linkedin-id semantics and
//! lookup behavior.

use content_remixer::storage::Database;

#[test]
fn test_upsert_inserts_then_updates_in_place() {
    let db = Database::new_in_memory().unwrap();

    db.upsert_user("urn-123", "token-one", 1_700_000_000).unwrap();
    db.upsert_user("urn-123", "token-two", 1_800_000_000).unwrap();

    assert_eq!(db.count_users().unwrap(), 1);
    let user = db.get_user("urn-123").unwrap().unwrap();
    assert_eq!(user.access_token, "token-two");
    assert_eq!(user.expires_at, 1_800_000_000);
}

#[test]
fn test_distinct_linkedin_ids_create_distinct_rows() {
    let db = Database::new_in_memory().unwrap();

    db.upsert_user("urn-a", "token-a", 1).unwrap();
    db.upsert_user("urn-b", "token-b", 2).unwrap();

    assert_eq!(db.count_users().unwrap(), 2);
    assert_eq!(db.get_user("urn-a").unwrap().unwrap().access_token, "token-a");
    assert_eq!(db.get_user("urn-b").unwrap().unwrap().access_token, "token-b");
}

#[test]
fn test_get_unknown_user_returns_none() {
    let db = Database::new_in_memory().unwrap();
    assert!(db.get_user("urn-missing").unwrap().is_none());
}

#[test]
fn test_health_check() {
    let db = Database::new_in_memory().unwrap();
    assert!(db.is_healthy());
}
