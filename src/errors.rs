use axum::{http::StatusCode, Json};
use serde::Serialize;
use thiserror::Error;

/// Everything that can go wrong while driving a mood session.
///
/// None of these are fatal: the user can always retry the action that
/// produced them.
#[derive(Debug, Error)]
pub enum MoodError {
    #[error("no access token present")]
    Unauthenticated,

    #[error("classification failed: {0}")]
    ClassificationError(String),

    #[error("history fetch failed: {0}")]
    HistoryFetchError(String),

    #[error("no current analysis to save")]
    NoCurrentAnalysis,

    #[error("history index {index} out of range (length {len})")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("unsupported file type: {0:?}")]
    InvalidFileType(String),

    #[error("an analysis is already in progress")]
    AnalysisInFlight,
}

impl MoodError {
    /// Stable machine-readable name used in JSON error bodies.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Unauthenticated => "unauthenticated",
            Self::ClassificationError(_) => "classification_error",
            Self::HistoryFetchError(_) => "history_fetch_error",
            Self::NoCurrentAnalysis => "no_current_analysis",
            Self::IndexOutOfRange { .. } => "index_out_of_range",
            Self::InvalidFileType(_) => "invalid_file_type",
            Self::AnalysisInFlight => "analysis_in_flight",
        }
    }

    /// The transient message shown to the user.
    pub fn notification(&self) -> Notification {
        let message = match self {
            Self::Unauthenticated => "Please login to analyze images",
            Self::ClassificationError(_) => "Failed to analyze image. Please try again.",
            Self::HistoryFetchError(_) => "Failed to load history. Please try again.",
            Self::NoCurrentAnalysis => "No analysis to save",
            Self::IndexOutOfRange { .. } => "That history entry no longer exists",
            Self::InvalidFileType(_) => "Please upload a valid image file.",
            Self::AnalysisInFlight => "An analysis is already running. Please wait.",
        };
        Notification::error(message)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationLevel {
    Success,
    Info,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    pub level: NotificationLevel,
    pub message: String,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Success,
            message: message.into(),
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Info,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Error,
            message: message.into(),
        }
    }
}

#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub kind: &'static str,
    pub notification: Notification,
}

#[derive(Debug, Serialize)]
struct ErrorBody<'a> {
    kind: &'a str,
    #[serde(flatten)]
    notification: &'a Notification,
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            kind: "bad_request",
            notification: Notification::error(message),
        }
    }
}

impl From<MoodError> for AppError {
    fn from(err: MoodError) -> Self {
        let status = match err {
            MoodError::Unauthenticated => StatusCode::UNAUTHORIZED,
            MoodError::ClassificationError(_) | MoodError::HistoryFetchError(_) => {
                StatusCode::BAD_GATEWAY
            }
            MoodError::NoCurrentAnalysis | MoodError::AnalysisInFlight => StatusCode::CONFLICT,
            MoodError::IndexOutOfRange { .. } => StatusCode::NOT_FOUND,
            MoodError::InvalidFileType(_) => StatusCode::UNSUPPORTED_MEDIA_TYPE,
        };
        Self {
            status,
            kind: err.kind(),
            notification: err.notification(),
        }
    }
}

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let body = ErrorBody {
            kind: self.kind,
            notification: &self.notification,
        };
        (self.status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_error_surfaces_as_an_error_notification() {
        let errors = [
            MoodError::Unauthenticated,
            MoodError::ClassificationError("502".into()),
            MoodError::HistoryFetchError("timeout".into()),
            MoodError::NoCurrentAnalysis,
            MoodError::IndexOutOfRange { index: 3, len: 1 },
            MoodError::InvalidFileType("text/plain".into()),
            MoodError::AnalysisInFlight,
        ];
        for err in errors {
            let note = err.notification();
            assert_eq!(note.level, NotificationLevel::Error);
            assert!(!note.message.is_empty());
        }
    }

    #[test]
    fn app_error_status_follows_error_kind() {
        let err = AppError::from(MoodError::Unauthenticated);
        assert_eq!(err.status, StatusCode::UNAUTHORIZED);
        assert_eq!(err.kind, "unauthenticated");

        let err = AppError::from(MoodError::InvalidFileType("text/plain".into()));
        assert_eq!(err.status, StatusCode::UNSUPPORTED_MEDIA_TYPE);
    }
}
