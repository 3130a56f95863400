use crate::models::{Emotion, Recommendation, UserProfile};

const fn card(title: &'static str, description: &'static str) -> Recommendation {
    Recommendation { title, description }
}

const HAPPY: &[Recommendation] = &[
    card(
        "Maintain Your Positive Energy",
        "Share your positive energy with others and document what made you happy today.",
    ),
    card(
        "Plan Future Activities",
        "Use this positive state to plan activities that will maintain this mood.",
    ),
];

const SAD: &[Recommendation] = &[
    card(
        "Connect with Others",
        "Talk to someone you trust about your feelings. Social connection can help improve mood.",
    ),
    card(
        "Nature Therapy",
        "Take a relaxing walk in nature. Research shows it can help reduce negative thoughts.",
    ),
    card(
        "Mindful Breathing",
        "Practice deep breathing exercises to help calm your mind and body.",
    ),
];

const NEUTRAL: &[Recommendation] = &[
    card(
        "Try Something New",
        "This is a good time to try a new hobby or activity that interests you.",
    ),
    card(
        "Set Small Goals",
        "Set a small achievable goal for today to create a sense of accomplishment.",
    ),
];

const EXCITED: &[Recommendation] = &[
    card(
        "Channel Your Energy",
        "Direct your excitement into productive tasks or creative projects.",
    ),
    card(
        "Document Your Ideas",
        "Write down your ideas and plans while you're feeling inspired.",
    ),
];

const TIRED: &[Recommendation] = &[
    card(
        "Rest Strategically",
        "Take short breaks between tasks and consider a power nap if possible.",
    ),
    card(
        "Improve Sleep Habits",
        "Ensure you get enough quality sleep tonight by establishing a relaxing bedtime routine.",
    ),
];

const ANXIOUS: &[Recommendation] = &[
    card(
        "Grounding Techniques",
        "Try the 5-4-3-2-1 technique: acknowledge 5 things you see, 4 things you can touch, 3 things you hear, 2 things you smell, and 1 thing you taste.",
    ),
    card(
        "Limit Stimulants",
        "Reduce or avoid caffeine and other stimulants that can increase anxiety.",
    ),
];

const RELAXED: &[Recommendation] = &[
    card(
        "Mindfulness Practice",
        "Use this relaxed state to practice mindfulness or meditation to enhance the feeling.",
    ),
    card(
        "Creative Activities",
        "This is an ideal state for creative activities like writing, drawing, or music.",
    ),
];

const FRUSTRATED: &[Recommendation] = &[
    card(
        "Take a Break",
        "Step away from the frustrating situation for a few minutes to reset your perspective.",
    ),
    card(
        "Physical Release",
        "Physical activity can help release tension - try a quick walk or stretching.",
    ),
];

const FALLBACK: &[Recommendation] = &[
    card(
        "Self-Care Activities",
        "Practice self-care activities that you enjoy and that help you feel balanced.",
    ),
    card(
        "Maintain Routine",
        "Stick to a regular routine to provide structure and stability.",
    ),
];

const STRESS_MANAGEMENT: Recommendation = card(
    "Stress Management",
    "Consider stress-reduction techniques like progressive muscle relaxation or guided imagery.",
);

const SLEEP_IMPROVEMENT: Recommendation = card(
    "Sleep Improvement",
    "Improve sleep by maintaining a regular sleep schedule, creating a restful environment, and avoiding screens before bed.",
);

const ANXIETY_MANAGEMENT: Recommendation = card(
    "Anxiety Management",
    "Practice regular breathing exercises and consider keeping an anxiety journal to identify triggers.",
);

const MOOD_ENHANCEMENT: Recommendation = card(
    "Mood Enhancement",
    "Try to engage in activities you used to enjoy, even if you don't feel like it at first. Small steps can help improve mood.",
);

pub fn base_recommendations(emotion: &Emotion) -> &'static [Recommendation] {
    match emotion {
        Emotion::Happy => HAPPY,
        Emotion::Sad => SAD,
        Emotion::Neutral => NEUTRAL,
        Emotion::Excited => EXCITED,
        Emotion::Tired => TIRED,
        Emotion::Anxious => ANXIOUS,
        Emotion::Relaxed => RELAXED,
        Emotion::Frustrated => FRUSTRATED,
        Emotion::Other(_) => FALLBACK,
    }
}

/// Base cards for the emotion, followed by profile-driven cards.
///
/// The profile checks are independent: a stressed, sleepless user with an
/// anxiety concern gets all three extra cards, in the order below.
pub fn recommend(emotion: &Emotion, profile: &UserProfile) -> Vec<Recommendation> {
    let mut cards = base_recommendations(emotion).to_vec();

    if matches!(profile.stress_level.as_str(), "high" | "severe") {
        cards.push(STRESS_MANAGEMENT);
    }
    if matches!(profile.sleep_quality.as_str(), "poor" | "very-poor") {
        cards.push(SLEEP_IMPROVEMENT);
    }
    match profile.primary_concern.as_str() {
        "anxiety" => cards.push(ANXIETY_MANAGEMENT),
        "depression" => cards.push(MOOD_ENHANCEMENT),
        _ => {}
    }

    cards
}

/// One-line advice the history service attaches to each recorded mood.
pub fn summary_line(emotion: &Emotion) -> &'static str {
    match emotion.as_str().to_ascii_lowercase().as_str() {
        "happy" => "Keep doing what you love! Consider journaling about what made you happy today.",
        "sad" => {
            "Take some time for self-care. A short walk, talking to a friend, or listening to uplifting music might help."
        }
        "excited" => {
            "Channel your energy into a creative project or something you've been meaning to start!"
        }
        "angry" => {
            "Try deep breathing exercises or writing down your thoughts to process your emotions."
        }
        "neutral" => {
            "This might be a good time to try something new or explore a different routine."
        }
        _ => "Take a moment to check in with yourself and practice mindfulness.",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn titles(cards: &[Recommendation]) -> Vec<&'static str> {
        cards.iter().map(|card| card.title).collect()
    }

    #[test]
    fn every_known_emotion_starts_with_its_base_table() {
        let profile = UserProfile::default();
        for emotion in Emotion::KNOWN {
            let cards = recommend(&emotion, &profile);
            let base = base_recommendations(&emotion);
            assert!((2..=3).contains(&base.len()), "{emotion}");
            assert_eq!(&cards[..base.len()], base);
        }
    }

    #[test]
    fn sad_lists_connect_then_nature_then_breathing() {
        let cards = recommend(&Emotion::Sad, &UserProfile::default());
        assert_eq!(
            titles(&cards),
            ["Connect with Others", "Nature Therapy", "Mindful Breathing"]
        );
    }

    #[test]
    fn severe_stress_adds_a_single_card_to_happy() {
        let profile = UserProfile {
            stress_level: "severe".into(),
            ..UserProfile::default()
        };
        let cards = recommend(&Emotion::Happy, &profile);
        assert_eq!(cards.len(), 3);
        assert_eq!(cards[2].title, "Stress Management");
    }

    #[test]
    fn unknown_emotion_uses_fallback_and_still_gets_profile_cards() {
        let cards = recommend(&Emotion::Other("angry".into()), &UserProfile::default());
        assert_eq!(titles(&cards), ["Self-Care Activities", "Maintain Routine"]);

        let profile = UserProfile {
            sleep_quality: "very-poor".into(),
            primary_concern: "depression".into(),
            ..UserProfile::default()
        };
        let cards = recommend(&Emotion::Other("angry".into()), &profile);
        assert_eq!(
            titles(&cards),
            [
                "Self-Care Activities",
                "Maintain Routine",
                "Sleep Improvement",
                "Mood Enhancement"
            ]
        );
    }

    #[test]
    fn profile_cards_follow_fixed_order() {
        let profile = UserProfile {
            stress_level: "high".into(),
            sleep_quality: "poor".into(),
            primary_concern: "anxiety".into(),
            ..UserProfile::default()
        };
        let cards = recommend(&Emotion::Tired, &profile);
        assert_eq!(
            titles(&cards[2..]),
            ["Stress Management", "Sleep Improvement", "Anxiety Management"]
        );
    }

    #[test]
    fn recommend_is_deterministic() {
        let profile = UserProfile {
            stress_level: "high".into(),
            primary_concern: "anxiety".into(),
            ..UserProfile::default()
        };
        for emotion in Emotion::KNOWN {
            assert_eq!(recommend(&emotion, &profile), recommend(&emotion, &profile));
        }
    }

    #[test]
    fn moderate_stress_and_fair_sleep_add_nothing() {
        let profile = UserProfile {
            stress_level: "moderate".into(),
            sleep_quality: "fair".into(),
            primary_concern: "work".into(),
            ..UserProfile::default()
        };
        assert_eq!(recommend(&Emotion::Neutral, &profile).len(), 2);
    }

    #[test]
    fn summary_line_falls_back_for_unlisted_moods() {
        assert!(summary_line(&Emotion::Sad).starts_with("Take some time"));
        assert!(summary_line(&Emotion::Other("angry".into())).starts_with("Try deep breathing"));
        assert!(summary_line(&Emotion::Tired).starts_with("Take a moment"));
    }
}
