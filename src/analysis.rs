use crate::auth::CredentialStore;
use crate::client::Classifier;
use crate::errors::MoodError;
use crate::models::{
    AnalysisResult, Confidence, Emotion, EntryOrigin, HistoryEntry, ImageUpload,
};
use crate::render::{HistoryRow, RenderHooks, ResultView};
use crate::state::SessionState;
use rand::Rng;
use std::str::FromStr;
use tokio::sync::Mutex;
use tracing::{info, warn};

/// How to fill in confidence, which the classification service never reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConfidencePolicy {
    #[default]
    Unavailable,
    /// Random estimate in [70, 100), labelled as such. Demo use only.
    Placeholder,
}

impl ConfidencePolicy {
    fn confidence(self) -> Confidence {
        match self {
            Self::Unavailable => Confidence::Unavailable,
            Self::Placeholder => Confidence::Estimated {
                percent: rand::thread_rng().gen_range(70..100),
            },
        }
    }
}

impl FromStr for ConfidencePolicy {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "unavailable" => Ok(Self::Unavailable),
            "placeholder" => Ok(Self::Placeholder),
            other => Err(format!(
                "unknown confidence policy {other:?}, expected 'unavailable' or 'placeholder'"
            )),
        }
    }
}

/// Runs one upload-and-classify round trip against a session.
pub struct AnalysisOrchestrator<C, A> {
    classifier: C,
    credentials: A,
    confidence: ConfidencePolicy,
}

impl<C: Classifier, A: CredentialStore> AnalysisOrchestrator<C, A> {
    pub fn new(classifier: C, credentials: A, confidence: ConfidencePolicy) -> Self {
        Self {
            classifier,
            credentials,
            confidence,
        }
    }

    /// The session lock is released while the classifier is awaited; a second
    /// call in that window fails with [`MoodError::AnalysisInFlight`].
    pub async fn analyze<H: RenderHooks + Send>(
        &self,
        session: &Mutex<SessionState>,
        upload: ImageUpload,
        hooks: &mut H,
    ) -> Result<AnalysisResult, MoodError> {
        if !upload.is_image() {
            return Err(MoodError::InvalidFileType(upload.content_type));
        }
        let token = self
            .credentials
            .access_token()
            .ok_or(MoodError::Unauthenticated)?;

        let ticket = {
            let mut state = session.lock().await;
            let ticket = state.begin_analysis()?;
            state.current_photo = Some(upload.photo_ref());
            ticket
        };

        info!(
            file = %upload.file_name,
            bytes = upload.data.len(),
            "sending image for classification"
        );
        let outcome = self.classifier.classify(&token, &upload).await;

        let mut state = session.lock().await;
        state.finish_analysis(ticket);
        let response = match outcome {
            Ok(response) => response,
            Err(err) => {
                warn!("classification failed: {err}");
                return Err(err);
            }
        };

        let (sequence, id) = state.next_entry_id();
        let analysis = AnalysisResult {
            id,
            emotion: Emotion::parse(&response.mood),
            confidence: self.confidence.confidence(),
            timestamp: response.timestamp,
        };
        info!(emotion = %analysis.emotion, "image classified");

        state.current_analysis = Some(analysis.clone());
        let record = HistoryEntry {
            id: analysis.id.clone(),
            sequence,
            origin: EntryOrigin::Analysis,
            emotion: analysis.emotion.clone(),
            confidence: analysis.confidence,
            timestamp: analysis.timestamp.clone(),
            photo: state.current_photo.clone(),
            profile: Some(state.profile.clone()),
            filename: Some(response.filename.unwrap_or(upload.file_name)),
            recommendation: response.recommendation,
        };
        state.history.insert(0, record);

        let view = ResultView::from_session(&state);
        let rows = HistoryRow::from_entries(state.history());
        drop(state);

        if let Some(view) = &view {
            hooks.render_result(view);
        }
        hooks.render_history(&rows);

        Ok(analysis)
    }
}
