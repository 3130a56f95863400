use crate::errors::Notification;
use crate::render::{HistoryRow, ResultView};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct UserProfile {
    pub first_name: String,
    pub last_name: String,
    pub age: String,
    pub gender: String,
    pub stress_level: String,
    pub sleep_quality: String,
    pub mental_health_history: String,
    pub primary_concern: String,
}

/// The enumerated profile fields that carry codes rather than free text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileField {
    StressLevel,
    SleepQuality,
    MentalHealthHistory,
    PrimaryConcern,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Emotion {
    Happy,
    Sad,
    Neutral,
    Excited,
    Tired,
    Anxious,
    Relaxed,
    Frustrated,
    Other(String),
}

impl Emotion {
    pub const KNOWN: [Emotion; 8] = [
        Emotion::Happy,
        Emotion::Sad,
        Emotion::Neutral,
        Emotion::Excited,
        Emotion::Tired,
        Emotion::Anxious,
        Emotion::Relaxed,
        Emotion::Frustrated,
    ];

    /// Case-insensitive; the classification service reports lowercase labels.
    pub fn parse(label: &str) -> Self {
        let trimmed = label.trim();
        match trimmed.to_ascii_lowercase().as_str() {
            "happy" => Self::Happy,
            "sad" => Self::Sad,
            "neutral" => Self::Neutral,
            "excited" => Self::Excited,
            "tired" => Self::Tired,
            "anxious" => Self::Anxious,
            "relaxed" => Self::Relaxed,
            "frustrated" => Self::Frustrated,
            _ => Self::Other(trimmed.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Happy => "Happy",
            Self::Sad => "Sad",
            Self::Neutral => "Neutral",
            Self::Excited => "Excited",
            Self::Tired => "Tired",
            Self::Anxious => "Anxious",
            Self::Relaxed => "Relaxed",
            Self::Frustrated => "Frustrated",
            Self::Other(label) => label,
        }
    }
}

impl fmt::Display for Emotion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for Emotion {
    fn from(label: String) -> Self {
        Self::parse(&label)
    }
}

impl From<Emotion> for String {
    fn from(emotion: Emotion) -> Self {
        emotion.as_str().to_string()
    }
}

/// The classification service does not report a score, so confidence is
/// either absent or an explicitly labelled estimate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum Confidence {
    Unavailable,
    Estimated { percent: u8 },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Id of the history entry that records this analysis.
    pub id: String,
    pub emotion: Emotion,
    pub confidence: Confidence,
    pub timestamp: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhotoRef {
    pub file_name: String,
    pub content_type: String,
    pub size: usize,
}

/// An image as received from the user, before it is sent for classification.
#[derive(Debug, Clone)]
pub struct ImageUpload {
    pub file_name: String,
    pub content_type: String,
    pub data: Vec<u8>,
}

impl ImageUpload {
    pub fn is_image(&self) -> bool {
        self.content_type
            .trim()
            .to_ascii_lowercase()
            .starts_with("image/")
    }

    pub fn photo_ref(&self) -> PhotoRef {
        PhotoRef {
            file_name: self.file_name.clone(),
            content_type: self.content_type.clone(),
            size: self.data.len(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryOrigin {
    /// Recorded automatically when a classification succeeds.
    Analysis,
    /// Explicitly saved by the user.
    Saved,
    /// Loaded from the server-side history.
    Remote,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    pub id: String,
    pub sequence: u64,
    pub origin: EntryOrigin,
    pub emotion: Emotion,
    pub confidence: Confidence,
    pub timestamp: String,
    pub photo: Option<PhotoRef>,
    pub profile: Option<UserProfile>,
    pub filename: Option<String>,
    pub recommendation: Option<String>,
}

impl HistoryEntry {
    pub fn analysis(&self) -> AnalysisResult {
        AnalysisResult {
            id: self.id.clone(),
            emotion: self.emotion.clone(),
            confidence: self.confidence,
            timestamp: self.timestamp.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Recommendation {
    pub title: &'static str,
    pub description: &'static str,
}

/// Body returned by the classification service's upload endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifyResponse {
    pub mood: String,
    pub timestamp: String,
    #[serde(default)]
    pub filename: Option<String>,
    #[serde(default)]
    pub recommendation: Option<String>,
}

/// One element of the server-recorded history list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemoteHistoryEntry {
    pub timestamp: String,
    pub mood: String,
    #[serde(default)]
    pub filename: Option<String>,
    #[serde(default)]
    pub recommendation: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct TokenRequest {
    pub access_token: String,
    #[serde(default = "default_token_type")]
    pub token_type: String,
}

fn default_token_type() -> String {
    "bearer".to_string()
}

#[derive(Debug, Deserialize, Default)]
pub struct DeleteQuery {
    #[serde(default)]
    pub confirm: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSnapshot {
    pub session_id: String,
    pub profile: UserProfile,
    pub result: Option<ResultView>,
    pub history: Vec<HistoryRow>,
    pub analysis_in_flight: bool,
}

#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub result: Option<ResultView>,
    pub history: Vec<HistoryRow>,
}

#[derive(Debug, Serialize)]
pub struct HistoryResponse {
    pub notification: Notification,
    pub history: Vec<HistoryRow>,
}
