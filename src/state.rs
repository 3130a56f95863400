use crate::analysis::AnalysisOrchestrator;
use crate::auth::MemoryCredentials;
use crate::client::HttpMoodService;
use crate::errors::MoodError;
use crate::history::HistoryStore;
use crate::models::{AnalysisResult, HistoryEntry, PhotoRef, UserProfile};
use chrono::{Datelike, Local};
use rand::Rng;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Identifies one outstanding classification request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnalysisTicket(u64);

/// Everything the client knows for the lifetime of one session.
#[derive(Debug, Clone)]
pub struct SessionState {
    session_id: String,
    pub profile: UserProfile,
    pub current_photo: Option<PhotoRef>,
    pub current_analysis: Option<AnalysisResult>,
    pub(crate) history: Vec<HistoryEntry>,
    next_sequence: u64,
    next_ticket: u64,
    in_flight: Option<AnalysisTicket>,
}

impl SessionState {
    pub fn new(session_id: impl Into<String>) -> Self {
        Self {
            session_id: session_id.into(),
            profile: UserProfile::default(),
            current_photo: None,
            current_analysis: None,
            history: Vec::new(),
            next_sequence: 0,
            next_ticket: 0,
            in_flight: None,
        }
    }

    /// A session id of the form `MW-<year>-<NNN>`.
    pub fn generate_id() -> String {
        let year = Local::now().year();
        let suffix: u16 = rand::thread_rng().gen_range(0..999);
        format!("MW-{year}-{suffix:03}")
    }

    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    pub fn set_profile(&mut self, profile: UserProfile) {
        self.profile = profile;
    }

    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    pub fn history_store(&mut self) -> HistoryStore<'_> {
        HistoryStore::new(self)
    }

    /// Allocates the next entry identifier. Sequence numbers are never reused,
    /// so ids stay unique after deletions.
    pub(crate) fn next_entry_id(&mut self) -> (u64, String) {
        let sequence = self.next_sequence;
        self.next_sequence += 1;
        (sequence, format!("{}-{sequence}", self.session_id))
    }

    pub fn analysis_in_flight(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn begin_analysis(&mut self) -> Result<AnalysisTicket, MoodError> {
        if self.in_flight.is_some() {
            return Err(MoodError::AnalysisInFlight);
        }
        let ticket = AnalysisTicket(self.next_ticket);
        self.next_ticket += 1;
        self.in_flight = Some(ticket);
        Ok(ticket)
    }

    /// Releases the in-flight slot. A stale ticket leaves the slot untouched.
    pub fn finish_analysis(&mut self, ticket: AnalysisTicket) -> bool {
        if self.in_flight == Some(ticket) {
            self.in_flight = None;
            true
        } else {
            false
        }
    }
}

pub type SharedSession = Arc<Mutex<SessionState>>;

#[derive(Clone)]
pub struct AppState {
    pub session: SharedSession,
    pub credentials: MemoryCredentials,
    pub service: HttpMoodService,
    pub orchestrator: Arc<AnalysisOrchestrator<HttpMoodService, MemoryCredentials>>,
}

impl AppState {
    pub fn new(
        session: SessionState,
        service: HttpMoodService,
        orchestrator: AnalysisOrchestrator<HttpMoodService, MemoryCredentials>,
        credentials: MemoryCredentials,
    ) -> Self {
        Self {
            session: Arc::new(Mutex::new(session)),
            credentials,
            service,
            orchestrator: Arc::new(orchestrator),
        }
    }
}
