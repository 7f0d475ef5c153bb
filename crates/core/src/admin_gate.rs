//! Browser-side admin gate.
//!
//! Models the password screen in front of the `/admin/*` pages: a flag and
//! a login timestamp kept in client storage, re-checked on every protected
//! page mount and expired after [`SESSION_TTL_HOURS`]. Anyone with access to
//! the storage can forge the flag, so this is a UX convenience only. The
//! server enforces admin access with signed tokens independently.

use std::collections::HashMap;

use chrono::Duration;

use crate::error::CoreError;
use crate::types::Timestamp;

/// Storage key holding `"true"` while logged in.
pub const AUTH_FLAG_KEY: &str = "adminAuth";
/// Storage key holding the login time in Unix epoch milliseconds.
pub const AUTH_TIME_KEY: &str = "adminAuthTime";
/// Lifetime of an admin login.
pub const SESSION_TTL_HOURS: i64 = 24;

/// Message shown on a failed login.
const WRONG_PASSWORD: &str = "Yanlış şifre";

/// Key/value storage the gate persists into (`localStorage` in the browser).
pub trait SessionStorage {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: String);
    fn remove(&mut self, key: &str);
}

/// In-process [`SessionStorage`].
#[derive(Debug, Default, Clone)]
pub struct MemoryStorage {
    entries: HashMap<String, String>,
}

impl SessionStorage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: String) {
        self.entries.insert(key.to_string(), value);
    }

    fn remove(&mut self, key: &str) {
        self.entries.remove(key);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateState {
    Unauthenticated,
    Authenticated,
}

pub struct AdminGate<S: SessionStorage> {
    storage: S,
    password: String,
}

impl<S: SessionStorage> AdminGate<S> {
    pub fn new(storage: S, password: impl Into<String>) -> Self {
        Self {
            storage,
            password: password.into(),
        }
    }

    /// Compare `candidate` with the configured password and, on a match,
    /// record the login at `now`.
    pub fn login(&mut self, candidate: &str, now: Timestamp) -> Result<GateState, CoreError> {
        if candidate != self.password {
            return Err(CoreError::Unauthorized(WRONG_PASSWORD.into()));
        }
        self.storage.set(AUTH_FLAG_KEY, "true".to_string());
        self.storage
            .set(AUTH_TIME_KEY, now.timestamp_millis().to_string());
        Ok(GateState::Authenticated)
    }

    /// Evaluate the stored session at `now`. An expired session is cleared.
    ///
    /// A set flag with no timestamp counts as authenticated.
    pub fn check(&mut self, now: Timestamp) -> GateState {
        if self.storage.get(AUTH_FLAG_KEY).as_deref() != Some("true") {
            return GateState::Unauthenticated;
        }

        if let Some(raw) = self.storage.get(AUTH_TIME_KEY) {
            // An unparsable timestamp is treated like a missing one.
            if let Ok(login_ms) = raw.parse::<i64>() {
                let elapsed = Duration::milliseconds(now.timestamp_millis() - login_ms);
                if elapsed > Duration::hours(SESSION_TTL_HOURS) {
                    self.clear();
                    return GateState::Unauthenticated;
                }
            }
        }

        GateState::Authenticated
    }

    pub fn logout(&mut self) -> GateState {
        self.clear();
        GateState::Unauthenticated
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    fn clear(&mut self) {
        self.storage.remove(AUTH_FLAG_KEY);
        self.storage.remove(AUTH_TIME_KEY);
    }
}
