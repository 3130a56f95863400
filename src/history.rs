use crate::errors::MoodError;
use crate::models::{Confidence, Emotion, EntryOrigin, HistoryEntry, RemoteHistoryEntry};
use crate::render::HistoryRow;
use crate::state::SessionState;
use chrono::Local;
use tracing::debug;

/// The user's answer to "delete this entry?".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirmation {
    Confirmed,
    Declined,
}

/// History operations over a session. The sequence is kept newest first.
pub struct HistoryStore<'a> {
    session: &'a mut SessionState,
}

impl<'a> HistoryStore<'a> {
    pub fn new(session: &'a mut SessionState) -> Self {
        Self { session }
    }

    /// Snapshots the current analysis together with the profile and photo.
    pub fn save(&mut self) -> Result<&HistoryEntry, MoodError> {
        let analysis = self
            .session
            .current_analysis
            .clone()
            .ok_or(MoodError::NoCurrentAnalysis)?;

        let (sequence, id) = self.session.next_entry_id();
        let entry = HistoryEntry {
            id,
            sequence,
            origin: EntryOrigin::Saved,
            emotion: analysis.emotion,
            confidence: analysis.confidence,
            timestamp: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            photo: self.session.current_photo.clone(),
            profile: Some(self.session.profile.clone()),
            filename: self.session.current_photo.as_ref().map(|p| p.file_name.clone()),
            recommendation: None,
        };
        debug!(id = %entry.id, "saved analysis to history");
        self.session.history.insert(0, entry);
        Ok(&self.session.history[0])
    }

    /// Returns the entry and makes it the current context for the detail view.
    pub fn view(&mut self, index: usize) -> Result<&HistoryEntry, MoodError> {
        let len = self.session.history.len();
        let entry = self
            .session
            .history
            .get(index)
            .ok_or(MoodError::IndexOutOfRange { index, len })?;

        self.session.current_analysis = Some(entry.analysis());
        self.session.current_photo = entry.photo.clone();
        if let Some(profile) = &entry.profile {
            self.session.profile = profile.clone();
        }
        Ok(&self.session.history[index])
    }

    /// Removes one entry; later entries shift down by one.
    pub fn delete(
        &mut self,
        index: usize,
        confirmation: Confirmation,
    ) -> Result<Option<HistoryEntry>, MoodError> {
        let len = self.session.history.len();
        if index >= len {
            return Err(MoodError::IndexOutOfRange { index, len });
        }
        if confirmation == Confirmation::Declined {
            return Ok(None);
        }
        let removed = self.session.history.remove(index);
        debug!(id = %removed.id, "deleted history entry");
        Ok(Some(removed))
    }

    /// Merges a server-recorded history list.
    ///
    /// Entries from an earlier load are replaced; locally recorded entries stay
    /// in front. The server lists its logs newest first, and that order is kept.
    pub fn load_remote(&mut self, entries: Vec<RemoteHistoryEntry>) -> usize {
        self.session
            .history
            .retain(|entry| entry.origin != EntryOrigin::Remote);

        let count = entries.len();
        for remote in entries {
            let (sequence, id) = self.session.next_entry_id();
            self.session.history.push(HistoryEntry {
                id,
                sequence,
                origin: EntryOrigin::Remote,
                emotion: Emotion::parse(&remote.mood),
                confidence: Confidence::Unavailable,
                timestamp: remote.timestamp,
                photo: None,
                profile: None,
                filename: remote.filename,
                recommendation: remote.recommendation,
            });
        }
        count
    }

    pub fn rows(&self) -> Vec<HistoryRow> {
        HistoryRow::from_entries(&self.session.history)
    }

    pub fn len(&self) -> usize {
        self.session.history.len()
    }

    pub fn is_empty(&self) -> bool {
        self.session.history.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AnalysisResult, PhotoRef, UserProfile};

    fn analysed_session() -> SessionState {
        let mut session = SessionState::new("MW-2026-001");
        session.current_analysis = Some(AnalysisResult {
            id: "MW-2026-001-0".into(),
            emotion: Emotion::Sad,
            confidence: Confidence::Unavailable,
            timestamp: "T1".into(),
        });
        session.current_photo = Some(PhotoRef {
            file_name: "me.png".into(),
            content_type: "image/png".into(),
            size: 10,
        });
        session.profile.first_name = "Ada".into();
        session
    }

    fn remote(mood: &str, timestamp: &str) -> RemoteHistoryEntry {
        RemoteHistoryEntry {
            timestamp: timestamp.into(),
            mood: mood.into(),
            filename: Some(format!("{mood}.jpg")),
            recommendation: Some("rest".into()),
        }
    }

    #[test]
    fn save_without_analysis_leaves_history_untouched() {
        let mut session = SessionState::new("s");
        let mut store = session.history_store();
        assert!(matches!(store.save(), Err(MoodError::NoCurrentAnalysis)));
        assert!(store.is_empty());
    }

    #[test]
    fn save_prepends_snapshot() {
        let mut session = analysed_session();
        session.history_store().save().unwrap();
        session.current_analysis.as_mut().unwrap().emotion = Emotion::Happy;
        session.profile.first_name = "Grace".into();
        session.history_store().save().unwrap();

        let history = session.history();
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].emotion, Emotion::Happy);
        assert_eq!(history[1].emotion, Emotion::Sad);
        assert_eq!(history[1].profile.as_ref().unwrap().first_name, "Ada");
        assert_eq!(history[1].filename.as_deref(), Some("me.png"));
    }

    #[test]
    fn view_promotes_entry_to_current() {
        let mut session = analysed_session();
        session.history_store().save().unwrap();
        session.current_analysis = None;
        session.current_photo = None;
        session.profile = UserProfile::default();

        let saved_id = session.history_store().view(0).unwrap().id.clone();
        let current = session.current_analysis.as_ref().unwrap();
        assert_eq!(current.emotion, Emotion::Sad);
        assert_eq!(current.id, saved_id);
        assert_eq!(session.current_photo.as_ref().unwrap().file_name, "me.png");
        assert_eq!(session.profile.first_name, "Ada");
    }

    #[test]
    fn view_out_of_range_does_not_mutate() {
        let mut session = analysed_session();
        session.history_store().save().unwrap();
        let before = session.clone();

        let err = session.history_store().view(1).unwrap_err();
        assert!(matches!(err, MoodError::IndexOutOfRange { index: 1, len: 1 }));
        assert_eq!(session.current_analysis, before.current_analysis);
        assert_eq!(session.profile, before.profile);
        assert_eq!(session.history(), before.history());
    }

    #[test]
    fn view_of_remote_entry_keeps_current_profile() {
        let mut session = analysed_session();
        session.history_store().load_remote(vec![remote("happy", "T9")]);
        session.history_store().view(0).unwrap();
        assert_eq!(session.profile.first_name, "Ada");
        assert_eq!(session.current_analysis.as_ref().unwrap().emotion, Emotion::Happy);
        assert!(session.current_photo.is_none());
    }

    #[test]
    fn delete_shifts_later_entries_down() {
        let mut session = analysed_session();
        for _ in 0..3 {
            session.history_store().save().unwrap();
        }
        let ids: Vec<String> = session.history().iter().map(|e| e.id.clone()).collect();

        let removed = session
            .history_store()
            .delete(1, Confirmation::Confirmed)
            .unwrap()
            .unwrap();
        assert_eq!(removed.id, ids[1]);
        let remaining: Vec<&str> = session.history().iter().map(|e| e.id.as_str()).collect();
        assert_eq!(remaining, [ids[0].as_str(), ids[2].as_str()]);
    }

    #[test]
    fn deleting_twice_on_single_entry_fails_second_time() {
        let mut session = analysed_session();
        session.history_store().save().unwrap();
        let mut store = session.history_store();
        assert!(store.delete(0, Confirmation::Confirmed).unwrap().is_some());
        assert!(matches!(
            store.delete(0, Confirmation::Confirmed),
            Err(MoodError::IndexOutOfRange { index: 0, len: 0 })
        ));
    }

    #[test]
    fn declined_delete_keeps_entry() {
        let mut session = analysed_session();
        session.history_store().save().unwrap();
        let mut store = session.history_store();
        assert!(store.delete(0, Confirmation::Declined).unwrap().is_none());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn ids_stay_unique_after_deletion() {
        let mut session = analysed_session();
        session.history_store().save().unwrap();
        session.history_store().save().unwrap();
        session
            .history_store()
            .delete(0, Confirmation::Confirmed)
            .unwrap();
        session.history_store().save().unwrap();

        let ids: Vec<&str> = session.history().iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, ["MW-2026-001-2", "MW-2026-001-0"]);
    }

    #[test]
    fn load_remote_replaces_earlier_remote_entries_and_keeps_local_in_front() {
        let mut session = analysed_session();
        session
            .history_store()
            .load_remote(vec![remote("sad", "T2"), remote("happy", "T1")]);
        session.history_store().save().unwrap();
        let loaded = session
            .history_store()
            .load_remote(vec![remote("neutral", "T4"), remote("angry", "T3")]);
        assert_eq!(loaded, 2);

        let history = session.history();
        assert_eq!(history.len(), 3);
        assert_eq!(history[0].origin, EntryOrigin::Saved);
        assert_eq!(history[1].emotion, Emotion::Neutral);
        assert_eq!(history[2].emotion, Emotion::Other("angry".into()));
        assert_eq!(history[2].confidence, Confidence::Unavailable);
    }
}
