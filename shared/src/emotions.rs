//! Emotion words offered when the system asks the user to name a feeling.

/// A selectable emotion: stable English key plus the label shown to the user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Emotion {
    pub key: &'static str,
    pub label: &'static str,
}

const fn emotion(key: &'static str, label: &'static str) -> Emotion {
    Emotion { key, label }
}

/// Plutchik's eight basic emotions followed by the eight dyads, in picker order.
/// Keys are the names the labelling backend expects.
pub const EMOTIONS: [Emotion; 16] = [
    emotion("Joy", "기쁨"),
    emotion("Trust", "신뢰"),
    emotion("Surprise", "놀람"),
    emotion("Anticipation", "기대"),
    emotion("Fear", "두려움"),
    emotion("Sadness", "슬픔"),
    emotion("Disgust", "불쾌함"),
    emotion("Anger", "화남"),
    emotion("Optimism", "낙관"),
    emotion("Love", "사랑"),
    emotion("Submission", "굴복감"),
    emotion("Awe", "경외감"),
    emotion("Disapproval", "못마땅함"),
    emotion("Remorse", "후회"),
    emotion("Contempt", "경멸"),
    emotion("Aggressiveness", "공격성"),
];
