//! Session management for web interface
//!
//! Provides in-memory session storage mapping session tokens to the signed-in
//! username and the pending flash message. Sessions idle for longer than the
//! store's timeout are dropped.

use std::{
    collections::HashMap,
    sync::Arc,
    time::{Duration, Instant},
};

use tokio::sync::RwLock;
use uuid::Uuid;

/// Session token (UUID stored in cookie)
pub type SessionToken = String;

/// How long a session may go unused before it is dropped
pub const DEFAULT_IDLE_TIMEOUT: Duration = Duration::from_secs(30 * 60);

/// Per-browser state held between requests.
#[derive(Debug, Clone, Default)]
pub struct Session {
    /// Username of the signed-in user, if any
    pub username: Option<String>,
    /// One-shot message shown on the next rendered page
    pub flash: Option<String>,
}

#[derive(Debug)]
struct Entry {
    session: Session,
    last_seen: Instant,
}

impl Entry {
    fn is_idle(&self, timeout: Duration) -> bool {
        self.last_seen.elapsed() >= timeout
    }
}

/// In-memory session store
///
/// Maps session tokens (UUIDs) to [`Session`] values.
/// Sessions are ephemeral and lost on server restart.
#[derive(Clone)]
pub struct SessionStore {
    sessions: Arc<RwLock<HashMap<SessionToken, Entry>>>,
    idle_timeout: Duration,
}

impl SessionStore {
    /// Create a new empty session store using [`DEFAULT_IDLE_TIMEOUT`]
    pub fn new() -> Self {
        Self::with_idle_timeout(DEFAULT_IDLE_TIMEOUT)
    }

    /// Create a new empty session store that drops sessions unused for `idle_timeout`
    pub fn with_idle_timeout(idle_timeout: Duration) -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
            idle_timeout,
        }
    }

    /// How long a session may go unused before it is dropped
    pub fn idle_timeout(&self) -> Duration {
        self.idle_timeout
    }

    /// Create a new, empty session, pruning idle ones first
    ///
    /// # Returns
    /// The session token (UUID) to be stored in a cookie
    pub async fn create_session(&self) -> SessionToken {
        let token = Uuid::new_v4().to_string();
        let mut sessions = self.sessions.write().await;
        sessions.retain(|_, entry| !entry.is_idle(self.idle_timeout));
        sessions.insert(
            token.clone(),
            Entry {
                session: Session::default(),
                last_seen: Instant::now(),
            },
        );
        token
    }

    /// Mark `token` as just used.
    ///
    /// Returns false when the token is unknown or its session has gone idle,
    /// in which case the session is removed.
    pub async fn touch(&self, token: &str) -> bool {
        let mut sessions = self.sessions.write().await;
        match sessions.get_mut(token) {
            Some(entry) if !entry.is_idle(self.idle_timeout) => {
                entry.last_seen = Instant::now();
                true
            }
            Some(_) => {
                sessions.remove(token);
                false
            }
            None => false,
        }
    }

    /// Get the signed-in username for a session
    pub async fn username(&self, token: &str) -> Option<String> {
        let sessions = self.sessions.read().await;
        sessions.get(token).and_then(|e| e.session.username.clone())
    }

    /// Record `username` as signed in on this session
    pub async fn sign_in(&self, token: &str, username: impl Into<String>) {
        if let Some(entry) = self.sessions.write().await.get_mut(token) {
            entry.session.username = Some(username.into());
        }
    }

    /// Forget the signed-in user, keeping the session for its flash message
    pub async fn sign_out(&self, token: &str) {
        if let Some(entry) = self.sessions.write().await.get_mut(token) {
            entry.session.username = None;
        }
    }

    /// Set the message shown on the next rendered page
    pub async fn set_flash(&self, token: &str, message: impl Into<String>) {
        if let Some(entry) = self.sessions.write().await.get_mut(token) {
            entry.session.flash = Some(message.into());
        }
    }

    /// Read the session for rendering a page: the username, and the flash which is consumed.
    pub async fn take_page_state(&self, token: &str) -> Session {
        let mut sessions = self.sessions.write().await;
        match sessions.get_mut(token) {
            Some(entry) => Session {
                username: entry.session.username.clone(),
                flash: entry.session.flash.take(),
            },
            None => Session::default(),
        }
    }

    /// Destroy a session
    ///
    /// # Arguments
    /// * `token` - The session token to destroy
    pub async fn destroy_session(&self, token: &str) {
        let mut sessions = self.sessions.write().await;
        sessions.remove(token);
    }

    /// Drop every idle session, returning how many were removed
    pub async fn prune_idle(&self) -> usize {
        let mut sessions = self.sessions.write().await;
        let before = sessions.len();
        sessions.retain(|_, entry| !entry.is_idle(self.idle_timeout));
        before - sessions.len()
    }

    /// Get the number of live sessions
    pub async fn session_count(&self) -> usize {
        let sessions = self.sessions.read().await;
        sessions.len()
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}
