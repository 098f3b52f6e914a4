//! Sign-up status per visitor session.
//!
//! Handlers receive a [`SignupRegistry`] through application state instead of
//! reading a global flag. A session starts as not signed up and can only move
//! to signed up.

use std::collections::HashSet;
use std::sync::{PoisonError, RwLock};

/// Longest accepted session id, in bytes.
pub const MAX_SESSION_ID_LEN: usize = 128;
pub const DEFAULT_SESSION_CAPACITY: usize = 100_000;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("session id must be 1 to {MAX_SESSION_ID_LEN} characters of [A-Za-z0-9_-]")]
    InvalidId,
    #[error("sign-up registry is full ({0} sessions)")]
    CapacityReached(usize),
}

pub fn validate_session_id(session: &str) -> Result<(), SessionError> {
    let valid = !session.is_empty()
        && session.len() <= MAX_SESSION_ID_LEN
        && session.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_');
    if valid { Ok(()) } else { Err(SessionError::InvalidId) }
}

pub trait SignupRegistry: Send + Sync {
    fn is_signed_up(&self, session: &str) -> bool;

    /// Records the sign-up. Returns `Ok(true)` only on the first transition.
    fn mark_signed_up(&self, session: &str) -> Result<bool, SessionError>;

    /// The discount popup is offered until the visitor signs up.
    fn should_show_auth_popup(&self, session: &str) -> bool { !self.is_signed_up(session) }
}

/// In-process registry. Entries are never evicted, since that would undo a
/// sign-up; once `capacity` sessions are recorded new ones are refused.
#[derive(Debug)]
pub struct MemorySignups {
    signed_up: RwLock<HashSet<String>>,
    capacity: usize,
}

impl Default for MemorySignups {
    fn default() -> Self { Self::with_capacity(DEFAULT_SESSION_CAPACITY) }
}

impl MemorySignups {
    pub fn new() -> Self { Self::default() }
    pub fn with_capacity(capacity: usize) -> Self { Self { signed_up: RwLock::default(), capacity } }
}

impl SignupRegistry for MemorySignups {
    fn is_signed_up(&self, session: &str) -> bool {
        self.signed_up.read().unwrap_or_else(PoisonError::into_inner).contains(session)
    }

    fn mark_signed_up(&self, session: &str) -> Result<bool, SessionError> {
        validate_session_id(session)?;
        let mut signed_up = self.signed_up.write().unwrap_or_else(PoisonError::into_inner);
        if signed_up.contains(session) { return Ok(false); }
        if signed_up.len() >= self.capacity { return Err(SessionError::CapacityReached(self.capacity)); }
        Ok(signed_up.insert(session.to_string()))
    }
}
