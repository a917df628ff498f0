use std::sync::Arc;

use super::*;
use crate::util::storage::MemoryStorage;

fn fresh_store() -> SessionStore {
    SessionStore::new(Arc::new(MemoryStorage::new()))
}

fn summary(login: &str, nickname: &str) -> UserSummary {
    UserSummary {
        login: login.to_owned(),
        nickname: nickname.to_owned(),
        avatar: None,
    }
}

// =============================================================
// Token lifecycle
// =============================================================

#[test]
fn fresh_store_starts_logged_out() {
    let store = fresh_store();
    assert!(!store.is_logged_in());
    assert_eq!(store.token(), None);
    assert_eq!(store.user(), None);
}

#[test]
fn set_token_logs_in() {
    let mut store = fresh_store();
    store.set_token("T");
    assert!(store.is_logged_in());
    assert_eq!(store.token(), Some("T"));
}

#[test]
fn clear_token_logs_out() {
    let mut store = fresh_store();
    store.set_token("T");
    store.clear_token();
    assert!(!store.is_logged_in());
    assert_eq!(store.token(), None);
}

#[test]
fn empty_token_is_treated_as_removal() {
    let mut store = fresh_store();
    store.set_token("T");
    store.set_token("");
    assert!(!store.is_logged_in());
    assert_eq!(store.token(), None);
}

#[test]
fn login_status_tracks_last_non_empty_store() {
    let mut store = fresh_store();
    store.set_token("a");
    store.clear_token();
    store.set_token("b");
    store.set_token("c");
    assert_eq!(store.token(), Some("c"));
    assert!(store.is_logged_in());
}

#[test]
fn complete_login_adopts_access_token() {
    let mut store = fresh_store();
    store.complete_login(&crate::net::types::TokenPair {
        access_token: "T".to_owned(),
        refresh_token: None,
    });
    assert_eq!(store.token(), Some("T"));
    assert!(store.is_logged_in());
}

// =============================================================
// Persistence
// =============================================================

#[test]
fn session_survives_reload_through_storage() {
    let storage = Arc::new(MemoryStorage::new());
    let mut first = SessionStore::new(storage.clone());
    first.set_token("T");
    first.set_user(summary("neo", "Neo"));

    let second = SessionStore::new(storage);
    assert_eq!(second.token(), Some("T"));
    assert_eq!(second.user(), Some(&summary("neo", "Neo")));
}

#[test]
fn clear_token_removes_persisted_record() {
    let storage = Arc::new(MemoryStorage::new());
    let mut first = SessionStore::new(storage.clone());
    first.set_token("T");
    first.clear_token();

    let second = SessionStore::new(storage);
    assert!(!second.is_logged_in());
}

#[test]
fn legacy_raw_token_record_is_discarded() {
    let storage = Arc::new(MemoryStorage::new());
    storage.store("plain-token-string");
    let store = SessionStore::new(storage);
    assert!(!store.is_logged_in());
}

#[test]
fn persisted_record_with_empty_token_is_discarded() {
    let storage = Arc::new(MemoryStorage::new());
    storage.store(r#"{"token":""}"#);
    let store = SessionStore::new(storage);
    assert!(!store.is_logged_in());
}

#[test]
fn persisted_record_restores_display_fields() {
    let storage = Arc::new(MemoryStorage::new());
    storage.store(r#"{"token":"T","login":"neo","nickname":"Neo","avatar":"/a.jpg"}"#);
    let store = SessionStore::new(storage);
    let user = store.user().expect("summary restored");
    assert_eq!(user.login, "neo");
    assert_eq!(user.nickname, "Neo");
    assert_eq!(user.avatar.as_deref(), Some("/a.jpg"));
}

#[test]
fn persisted_record_without_nickname_falls_back_to_login() {
    let storage = Arc::new(MemoryStorage::new());
    storage.store(r#"{"token":"T","login":"neo"}"#);
    let store = SessionStore::new(storage);
    assert_eq!(store.user().map(UserSummary::display_name), Some("neo"));
}

#[test]
fn set_user_is_ignored_when_logged_out() {
    let mut store = fresh_store();
    store.set_user(summary("neo", "Neo"));
    assert_eq!(store.user(), None);
}

// =============================================================
// Logout
// =============================================================

#[test]
fn logout_from_logged_in_state_navigates_once() {
    let mut store = fresh_store();
    store.set_token("T");

    let mut calls = 0;
    store.logout(|target| {
        calls += 1;
        assert_eq!(target, "/");
    });
    assert_eq!(calls, 1);
    assert!(!store.is_logged_in());
}

#[test]
fn logout_from_logged_out_state_still_navigates_once() {
    let mut store = fresh_store();

    let mut calls = 0;
    store.logout(|_| calls += 1);
    assert_eq!(calls, 1);
    assert!(!store.is_logged_in());
}

#[test]
fn logout_navigates_after_state_is_cleared() {
    let storage = Arc::new(MemoryStorage::new());
    let mut store = SessionStore::new(storage.clone());
    store.set_token("T");

    store.logout(|_| {
        assert_eq!(storage.load(), None);
    });
}

// =============================================================
// Region visibility
// =============================================================

#[test]
fn logged_out_visibility_shows_auth_controls_only() {
    let visibility = region_visibility(false);
    assert!(visibility.login_control);
    assert!(visibility.register_control);
    assert!(!visibility.user_menu);
    assert!(!visibility.profile_control);
}

#[test]
fn logged_in_visibility_shows_user_regions_only() {
    let visibility = region_visibility(true);
    assert!(!visibility.login_control);
    assert!(!visibility.register_control);
    assert!(visibility.user_menu);
    assert!(visibility.profile_control);
}

#[test]
fn visibility_is_idempotent_between_mutations() {
    let mut store = fresh_store();
    assert_eq!(store.visibility(), store.visibility());
    store.set_token("T");
    assert_eq!(store.visibility(), store.visibility());
    assert_eq!(store.visibility(), region_visibility(true));
}

#[test]
fn visibility_tracks_login_status_through_transitions() {
    let mut store = fresh_store();
    store.set_token("T");
    assert_eq!(store.visibility(), region_visibility(true));
    store.logout(|_| {});
    assert_eq!(store.visibility(), region_visibility(false));
}
