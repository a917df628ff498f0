//! Session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! One `SessionStore` lives in a context signal and is the single source
//! of truth for "is someone signed in here". Header region visibility,
//! route guards, and the authenticated fetches all derive from it; no
//! other code path decides visibility on its own.
//!
//! DESIGN
//! ======
//! The store is a plain value constructed over an injected storage
//! backend, so every test gets an isolated session. Mutations persist
//! synchronously and run inside the session signal, so subscribers
//! re-render before the next paint — the UI cannot observably diverge
//! from session state between a mutation and its resync.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::net::types::{TokenPair, User};
use crate::util::storage::SessionStorage;

/// Cached display data for the signed-in user.
///
/// Not authoritative: the server copy wins whenever the current-user
/// fetch succeeds. Kept only so the header renders a name and avatar
/// across reloads without waiting on the network.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSummary {
    pub login: String,
    pub nickname: String,
    pub avatar: Option<String>,
}

impl UserSummary {
    /// Cacheable display fields of a freshly fetched user record.
    pub fn from_user(user: &User) -> Self {
        Self {
            login: user.login.clone(),
            nickname: user.nickname.clone(),
            avatar: user.avatar.clone(),
        }
    }

    /// Name to show in the header: nickname, falling back to login.
    pub fn display_name(&self) -> &str {
        if self.nickname.is_empty() { &self.login } else { &self.nickname }
    }
}

/// Canonical persisted shape: one storage slot holding the token plus
/// optional cached display fields. A bare token string (no JSON record)
/// is not a valid session and is discarded on load.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
struct StoredSession {
    token: String,
    #[serde(default)]
    login: Option<String>,
    #[serde(default)]
    nickname: Option<String>,
    #[serde(default)]
    avatar: Option<String>,
}

/// Show/hide decision for the session-dependent header regions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RegionVisibility {
    pub login_control: bool,
    pub register_control: bool,
    pub user_menu: bool,
    pub profile_control: bool,
}

/// Compute region visibility from the authentication status.
///
/// The only rule deciding session-dependent visibility; callers bind
/// their display styles to it instead of branching ad hoc.
pub fn region_visibility(logged_in: bool) -> RegionVisibility {
    RegionVisibility {
        login_control: !logged_in,
        register_control: !logged_in,
        user_menu: logged_in,
        profile_control: logged_in,
    }
}

/// Client-side session: bearer token plus cached user summary, persisted
/// across reloads through the injected storage backend.
///
/// Logged in ⟺ a non-empty token is held. There is no client-side
/// expiry; the session ends only on explicit logout or token removal.
#[derive(Clone)]
pub struct SessionStore {
    storage: Arc<dyn SessionStorage>,
    token: Option<String>,
    user: Option<UserSummary>,
}

impl fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionStore")
            .field("logged_in", &self.is_logged_in())
            .field("user", &self.user)
            .finish()
    }
}

impl SessionStore {
    /// Restore the persisted session, if the backend holds a readable
    /// record with a non-empty token.
    pub fn new(storage: Arc<dyn SessionStorage>) -> Self {
        let record = storage
            .load()
            .and_then(|raw| decode_record(&raw))
            .filter(|record| !record.token.is_empty());
        let (token, user) = match record {
            Some(record) => {
                let user = summary_of(&record);
                (Some(record.token), user)
            }
            None => (None, None),
        };
        Self { storage, token, user }
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn is_logged_in(&self) -> bool {
        self.token.is_some()
    }

    pub fn user(&self) -> Option<&UserSummary> {
        self.user.as_ref()
    }

    /// Current region visibility. Pure read; calling it any number of
    /// times between mutations yields the same decision.
    pub fn visibility(&self) -> RegionVisibility {
        region_visibility(self.is_logged_in())
    }

    /// Store a bearer token durably. No format validation happens here;
    /// an empty token is not a credential and is treated as removal.
    pub fn set_token(&mut self, token: impl Into<String>) {
        let token = token.into();
        if token.is_empty() {
            self.clear_token();
            return;
        }
        self.token = Some(token);
        self.persist();
    }

    /// Remove the persisted session record. The cached summary goes with
    /// it; display data for a signed-out visitor is meaningless.
    pub fn clear_token(&mut self) {
        self.token = None;
        self.user = None;
        self.storage.clear();
    }

    /// Cache display data for the signed-in user. Ignored when logged
    /// out: there is no session record to attach it to.
    pub fn set_user(&mut self, user: UserSummary) {
        if self.token.is_none() {
            return;
        }
        self.user = Some(user);
        self.persist();
    }

    /// Adopt the token pair from a successful login exchange.
    pub fn complete_login(&mut self, tokens: &TokenPair) {
        self.set_token(tokens.access_token.clone());
    }

    /// End the session and leave for the entry page. Unconditional: from
    /// any prior state this ends logged out, and the navigation hook runs
    /// exactly once, after state is already cleared.
    pub fn logout(&mut self, navigate: impl FnOnce(&str)) {
        self.clear_token();
        navigate("/");
    }

    fn persist(&self) {
        let Some(token) = self.token.clone() else {
            self.storage.clear();
            return;
        };
        let record = StoredSession {
            token,
            login: self.user.as_ref().map(|u| u.login.clone()),
            nickname: self.user.as_ref().map(|u| u.nickname.clone()),
            avatar: self.user.as_ref().and_then(|u| u.avatar.clone()),
        };
        match serde_json::to_string(&record) {
            Ok(raw) => self.storage.store(&raw),
            Err(err) => log::error!("failed to encode session record: {err}"),
        }
    }
}

fn decode_record(raw: &str) -> Option<StoredSession> {
    match serde_json::from_str(raw) {
        Ok(record) => Some(record),
        Err(err) => {
            log::warn!("discarding unreadable session record: {err}");
            None
        }
    }
}

fn summary_of(record: &StoredSession) -> Option<UserSummary> {
    let login = record.login.clone()?;
    Some(UserSummary {
        nickname: record.nickname.clone().unwrap_or_else(|| login.clone()),
        login,
        avatar: record.avatar.clone(),
    })
}
