use crate::models::{Confidence, Emotion, ProfileField, UserProfile};

pub const NOT_PROVIDED: &str = "Not provided";

/// Human-readable label for a profile code. Unknown codes are shown as-is.
pub fn display_value(field: ProfileField, code: &str) -> String {
    if code.is_empty() {
        return NOT_PROVIDED.to_string();
    }

    let label = match field {
        ProfileField::StressLevel => match code {
            "none" => Some("No stress"),
            "mild" => Some("Mild stress"),
            "moderate" => Some("Moderate stress"),
            "high" => Some("High stress"),
            "severe" => Some("Severe stress"),
            _ => None,
        },
        ProfileField::SleepQuality => match code {
            "excellent" => Some("Excellent (8+ hours)"),
            "good" => Some("Good (6-8 hours)"),
            "fair" => Some("Fair (4-6 hours)"),
            "poor" => Some("Poor (2-4 hours)"),
            "very-poor" => Some("Very poor (< 2 hours)"),
            _ => None,
        },
        ProfileField::PrimaryConcern => match code {
            "anxiety" => Some("Anxiety"),
            "depression" => Some("Depression"),
            "stress" => Some("Stress Management"),
            "sleep" => Some("Sleep Issues"),
            "relationships" => Some("Relationship Issues"),
            "work" => Some("Work-related Stress"),
            "trauma" => Some("Trauma/PTSD"),
            "other" => Some("Other"),
            "prefer-not-to-say" => Some("Prefer not to say"),
            _ => None,
        },
        ProfileField::MentalHealthHistory => match code {
            "none" => Some("No previous support"),
            "therapy" => Some("Therapy/Counseling"),
            "medication" => Some("Medication"),
            "both" => Some("Both therapy and medication"),
            "other" => Some("Other support methods"),
            "prefer-not-to-say" => Some("Prefer not to say"),
            _ => None,
        },
    };

    label.unwrap_or(code).to_string()
}

pub fn emotion_icon(emotion: &Emotion) -> &'static str {
    match emotion {
        Emotion::Happy => "😊",
        Emotion::Sad => "😢",
        Emotion::Neutral => "😐",
        Emotion::Excited => "😃",
        Emotion::Tired => "😴",
        Emotion::Anxious => "😰",
        Emotion::Relaxed => "😌",
        Emotion::Frustrated => "😤",
        Emotion::Other(_) => "😐",
    }
}

pub fn confidence_label(confidence: Confidence) -> String {
    match confidence {
        Confidence::Unavailable => "Confidence unavailable".to_string(),
        Confidence::Estimated { percent } => format!("{percent}% confidence (estimated)"),
    }
}

pub fn full_name(profile: &UserProfile) -> String {
    let name = format!("{} {}", profile.first_name.trim(), profile.last_name.trim());
    or_not_provided(name.trim())
}

pub fn or_not_provided(value: &str) -> String {
    if value.trim().is_empty() {
        NOT_PROVIDED.to_string()
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_codes_map_to_labels() {
        assert_eq!(display_value(ProfileField::StressLevel, "severe"), "Severe stress");
        assert_eq!(
            display_value(ProfileField::SleepQuality, "very-poor"),
            "Very poor (< 2 hours)"
        );
        assert_eq!(display_value(ProfileField::PrimaryConcern, "trauma"), "Trauma/PTSD");
        assert_eq!(
            display_value(ProfileField::MentalHealthHistory, "both"),
            "Both therapy and medication"
        );
    }

    #[test]
    fn empty_codes_are_not_provided_and_unknown_codes_pass_through() {
        assert_eq!(display_value(ProfileField::StressLevel, ""), NOT_PROVIDED);
        assert_eq!(display_value(ProfileField::StressLevel, "extreme"), "extreme");
    }

    #[test]
    fn unknown_emotions_get_the_neutral_icon() {
        assert_eq!(emotion_icon(&Emotion::Sad), "😢");
        assert_eq!(emotion_icon(&Emotion::Other("angry".into())), "😐");
    }

    #[test]
    fn full_name_requires_at_least_one_part() {
        let mut profile = UserProfile::default();
        assert_eq!(full_name(&profile), NOT_PROVIDED);
        profile.last_name = "Lovelace".into();
        assert_eq!(full_name(&profile), "Lovelace");
        profile.first_name = "Ada".into();
        assert_eq!(full_name(&profile), "Ada Lovelace");
    }

    #[test]
    fn confidence_label_marks_estimates() {
        assert_eq!(confidence_label(Confidence::Unavailable), "Confidence unavailable");
        assert_eq!(
            confidence_label(Confidence::Estimated { percent: 87 }),
            "87% confidence (estimated)"
        );
    }
}
