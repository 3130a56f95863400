use crate::display::{confidence_label, display_value, emotion_icon, full_name, or_not_provided};
use crate::models::{
    AnalysisResult, HistoryEntry, PhotoRef, ProfileField, Recommendation, UserProfile,
};
use crate::recommend::{recommend, summary_line};
use crate::state::SessionState;
use serde::Serialize;

/// Receives structured data after the session changes. Markup is the
/// implementor's business.
pub trait RenderHooks {
    fn render_result(&mut self, view: &ResultView);
    fn render_history(&mut self, rows: &[HistoryRow]);
}

/// Collects whatever was rendered, for callers that answer with data.
#[derive(Debug, Default)]
pub struct CapturedView {
    pub result: Option<ResultView>,
    pub history: Option<Vec<HistoryRow>>,
}

impl RenderHooks for CapturedView {
    fn render_result(&mut self, view: &ResultView) {
        self.result = Some(view.clone());
    }

    fn render_history(&mut self, rows: &[HistoryRow]) {
        self.history = Some(rows.to_vec());
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileSummary {
    pub name: String,
    pub age: String,
    pub gender: String,
    pub stress_level: String,
    pub sleep_quality: String,
    pub primary_concern: String,
    pub mental_health_history: String,
}

impl ProfileSummary {
    pub fn from_profile(profile: &UserProfile) -> Self {
        Self {
            name: full_name(profile),
            age: or_not_provided(&profile.age),
            gender: or_not_provided(&profile.gender),
            stress_level: display_value(ProfileField::StressLevel, &profile.stress_level),
            sleep_quality: display_value(ProfileField::SleepQuality, &profile.sleep_quality),
            primary_concern: display_value(ProfileField::PrimaryConcern, &profile.primary_concern),
            mental_health_history: display_value(
                ProfileField::MentalHealthHistory,
                &profile.mental_health_history,
            ),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultView {
    pub analysis: AnalysisResult,
    pub analysis_id: String,
    pub icon: &'static str,
    pub headline: String,
    pub confidence_label: String,
    pub photo: Option<PhotoRef>,
    pub profile: ProfileSummary,
    pub recommendations: Vec<Recommendation>,
}

impl ResultView {
    /// Detail view of the session's current analysis, if there is one.
    pub fn from_session(session: &SessionState) -> Option<Self> {
        let analysis = session.current_analysis.as_ref()?;
        Some(Self {
            analysis_id: analysis.id.clone(),
            icon: emotion_icon(&analysis.emotion),
            headline: format!(
                "We detected that you're feeling {}",
                analysis.emotion.as_str().to_lowercase()
            ),
            confidence_label: confidence_label(analysis.confidence),
            photo: session.current_photo.clone(),
            profile: ProfileSummary::from_profile(&session.profile),
            recommendations: recommend(&analysis.emotion, &session.profile),
            analysis: analysis.clone(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryRow {
    pub index: usize,
    pub id: String,
    pub timestamp: String,
    pub emotion: String,
    pub icon: &'static str,
    pub confidence_label: String,
    pub file_name: String,
    pub recommendation: String,
}

impl HistoryRow {
    pub fn from_entries(entries: &[HistoryEntry]) -> Vec<Self> {
        entries
            .iter()
            .enumerate()
            .map(|(index, entry)| Self {
                index,
                id: entry.id.clone(),
                timestamp: entry.timestamp.clone(),
                emotion: entry.emotion.to_string(),
                icon: emotion_icon(&entry.emotion),
                confidence_label: confidence_label(entry.confidence),
                file_name: entry
                    .filename
                    .clone()
                    .unwrap_or_else(|| or_not_provided("")),
                recommendation: entry
                    .recommendation
                    .clone()
                    .unwrap_or_else(|| summary_line(&entry.emotion).to_string()),
            })
            .collect()
    }
}
