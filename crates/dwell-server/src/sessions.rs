//! In-memory wizard sessions.
//!
//! Each open wizard is a [`WizardSession`] keyed by a random id carried in
//! the URL. Sessions are evicted when closed, when idle past the TTL, or when
//! the store is full and a newer one needs the slot.

use std::{
    collections::HashMap,
    sync::Arc,
    time::{Duration, Instant},
};

use dwell_core::{Liveness, Wizard, WizardKind};
use dwell_geo::DetectedLocation;
use tokio::sync::{Mutex, RwLock};
use uuid::Uuid;

pub type SharedSession = Arc<Mutex<WizardSession>>;

#[derive(Debug)]
pub struct WizardSession {
    pub wizard: Wizard,
    /// Position and place name from the last successful detection.
    pub detected: Option<DetectedLocation>,
    /// One-shot message shown on the next render.
    pub notice: Option<String>,
    liveness: Liveness,
    last_seen: Instant,
}

impl WizardSession {
    fn new(kind: WizardKind) -> Self {
        Self {
            wizard: Wizard::new(kind),
            detected: None,
            notice: None,
            liveness: Liveness::new(),
            last_seen: Instant::now(),
        }
    }

    /// Token handed to background work started on behalf of this session.
    #[must_use]
    pub fn liveness(&self) -> Liveness {
        self.liveness.clone()
    }

    pub fn touch(&mut self) {
        self.last_seen = Instant::now();
    }

    /// Remove the pending notice, if any.
    pub fn take_notice(&mut self) -> Option<String> {
        self.notice.take()
    }

    /// Cancel in-flight work and return the wizard to its initial state.
    ///
    /// A fresh token replaces the cancelled one so the session stays usable.
    pub fn reset(&mut self) {
        self.liveness.cancel();
        self.liveness = Liveness::new();
        self.wizard.reset();
        self.detected = None;
        self.notice = None;
    }

    fn idle_for(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.last_seen)
    }
}

#[derive(Clone)]
pub struct SessionStore {
    inner: Arc<RwLock<HashMap<Uuid, SharedSession>>>,
    max_sessions: usize,
    ttl: Duration,
}

impl SessionStore {
    #[must_use]
    pub fn new(max_sessions: usize, ttl: Duration) -> Self {
        Self {
            inner: Arc::new(RwLock::new(HashMap::new())),
            max_sessions: max_sessions.max(1),
            ttl,
        }
    }

    /// Open a new wizard session, evicting the least recently used one when
    /// the store is at capacity.
    pub async fn create(&self, kind: WizardKind) -> (Uuid, SharedSession) {
        let id = Uuid::new_v4();
        let session = Arc::new(Mutex::new(WizardSession::new(kind)));

        let mut map = self.inner.write().await;
        while map.len() >= self.max_sessions {
            let Some(oldest) = oldest_idle(&map) else {
                break;
            };
            if let Some(evicted) = map.remove(&oldest) {
                cancel_if_unlocked(&evicted);
                tracing::info!(session_id = %oldest, "session store full; evicted oldest session");
            }
        }
        map.insert(id, Arc::clone(&session));
        drop(map);

        tracing::info!(session_id = %id, wizard = %kind, "wizard session created");
        (id, session)
    }

    /// Look up a session of the given wizard kind.
    ///
    /// A session opened for the other wizard is treated as unknown.
    pub async fn get(&self, id: Uuid, kind: WizardKind) -> Option<SharedSession> {
        let session = self.inner.read().await.get(&id).cloned()?;
        let matches = session.lock().await.wizard.kind() == kind;
        matches.then_some(session)
    }

    /// Drop a session and cancel its in-flight work.
    pub async fn remove(&self, id: Uuid) -> Option<SharedSession> {
        let removed = self.inner.write().await.remove(&id)?;
        removed.lock().await.liveness.cancel();
        tracing::debug!(session_id = %id, "wizard session removed");
        Some(removed)
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.inner.read().await.is_empty()
    }

    /// Evict sessions idle longer than the TTL. Returns how many were dropped.
    ///
    /// Sessions whose lock is currently held are in active use and are kept.
    pub async fn evict_idle(&self) -> usize {
        let now = Instant::now();
        let mut map = self.inner.write().await;
        let expired: Vec<Uuid> = map
            .iter()
            .filter(|(_, session)| {
                session
                    .try_lock()
                    .is_ok_and(|guard| guard.idle_for(now) > self.ttl)
            })
            .map(|(id, _)| *id)
            .collect();

        for id in &expired {
            if let Some(session) = map.remove(id) {
                cancel_if_unlocked(&session);
                tracing::info!(session_id = %id, "evicted idle wizard session");
            }
        }
        expired.len()
    }
}

fn oldest_idle(map: &HashMap<Uuid, SharedSession>) -> Option<Uuid> {
    let now = Instant::now();
    map.iter()
        .filter_map(|(id, session)| {
            session
                .try_lock()
                .ok()
                .map(|guard| (*id, guard.idle_for(now)))
        })
        .max_by_key(|(_, idle)| *idle)
        .map(|(id, _)| id)
}

fn cancel_if_unlocked(session: &SharedSession) {
    if let Ok(guard) = session.try_lock() {
        guard.liveness.cancel();
    }
}
