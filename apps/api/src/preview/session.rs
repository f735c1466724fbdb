//! Caller-side cancellation for an editing session.
//!
//! The service never aborts in-flight work. A session remembers the newest
//! fingerprint it asked for and drops any response that arrives for an older
//! one.

use std::collections::{HashMap, VecDeque};
use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::debug;

use crate::models::resume::Resume;
use crate::models::template::Template;
use crate::preview::fingerprint::Fingerprint;
use crate::preview::service::{PreviewError, PreviewHandle, PreviewOutcome};

/// Sessions tracked at once; the oldest is forgotten first.
pub const MAX_SESSIONS: usize = 1024;

pub struct PreviewSession {
    handle: PreviewHandle,
    latest: Mutex<Option<Fingerprint>>,
}

impl PreviewSession {
    pub fn new(handle: PreviewHandle) -> Self {
        Self {
            handle,
            latest: Mutex::new(None),
        }
    }

    /// Requests a preview. `Ok(None)` means a newer request superseded this
    /// one before its response arrived.
    pub async fn request(
        &self,
        resume: Resume,
        template: Template,
    ) -> Result<Option<PreviewOutcome>, PreviewError> {
        let fingerprint = Fingerprint::of(&resume, &template)?;
        *self.latest.lock().await = Some(fingerprint.clone());

        let result = self.handle.render(resume, template).await;

        if self.latest.lock().await.as_ref() != Some(&fingerprint) {
            return Ok(None);
        }
        result.map(Some)
    }
}

#[derive(Default)]
struct SessionTable {
    sessions: HashMap<String, Arc<PreviewSession>>,
    order: VecDeque<String>,
}

/// Sessions keyed by the caller-chosen id.
pub struct PreviewSessions {
    handle: PreviewHandle,
    capacity: usize,
    table: Mutex<SessionTable>,
}

impl PreviewSessions {
    pub fn new(handle: PreviewHandle) -> Self {
        Self::with_capacity(handle, MAX_SESSIONS)
    }

    pub fn with_capacity(handle: PreviewHandle, capacity: usize) -> Self {
        Self {
            handle,
            capacity: capacity.max(1),
            table: Mutex::new(SessionTable::default()),
        }
    }

    /// Returns the session for `id`, opening it on first use.
    pub async fn session(&self, id: &str) -> Arc<PreviewSession> {
        let mut table = self.table.lock().await;
        if let Some(session) = table.sessions.get(id) {
            return session.clone();
        }

        while table.order.len() >= self.capacity {
            let Some(oldest) = table.order.pop_front() else {
                break;
            };
            table.sessions.remove(&oldest);
            debug!(session = %oldest, "Forgot preview session");
        }

        let session = Arc::new(PreviewSession::new(self.handle.clone()));
        table.sessions.insert(id.to_string(), session.clone());
        table.order.push_back(id.to_string());
        session
    }
}
