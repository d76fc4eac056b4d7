use std::collections::HashMap;

use crate::model::session::{Session, SessionId};

/// Where sessions live between turns. Callers own isolation between users;
/// the engine assumes exclusive access to the session it is handed.
pub trait SessionStore: Send {
    /// Unknown ids read as a fresh session.
    fn get(&self, id: &SessionId) -> Session;
    fn set(&mut self, id: SessionId, session: Session);
    fn remove(&mut self, id: &SessionId);

    fn start(&mut self, id: SessionId) {
        self.set(id, Session::default());
    }
}

#[derive(Debug, Default)]
pub struct InMemorySessionStore {
    sessions: HashMap<SessionId, Session>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}

impl SessionStore for InMemorySessionStore {
    fn get(&self, id: &SessionId) -> Session {
        self.sessions.get(id).cloned().unwrap_or_default()
    }

    fn set(&mut self, id: SessionId, session: Session) {
        self.sessions.insert(id, session);
    }

    fn remove(&mut self, id: &SessionId) {
        self.sessions.remove(id);
    }
}
