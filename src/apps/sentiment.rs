const POSITIVE_WORDS: [&str; 10] = [
    "love", "great", "awesome", "excellent", "good", "happy", "wonderful", "amazing", "fantastic",
    "best",
];

const NEGATIVE_WORDS: [&str; 10] = [
    "hate", "bad", "terrible", "awful", "worst", "horrible", "poor", "sad", "disappointing", "ugly",
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SentimentResult {
    pub sentiment: Sentiment,
    /// Percentage in `[0, 100]`; 50 is neutral.
    pub score: f64,
    pub positive_hits: usize,
    pub negative_hits: usize,
}

/// Keyword-counting sentiment scorer. Each keyword counts at most once and
/// matches anywhere in the text, including inside longer words.
#[derive(Clone, Debug)]
pub struct SentimentAnalyzer {
    positive: Vec<String>,
    negative: Vec<String>,
}

impl SentimentAnalyzer {
    pub fn new() -> Self {
        Self::with_keywords(&POSITIVE_WORDS, &NEGATIVE_WORDS)
    }

    pub fn with_keywords(positive: &[&str], negative: &[&str]) -> Self {
        Self {
            positive: positive.iter().map(|w| w.to_lowercase()).collect(),
            negative: negative.iter().map(|w| w.to_lowercase()).collect(),
        }
    }

    pub fn analyze(&self, text: &str) -> SentimentResult {
        let text = text.to_lowercase();
        let hits = |words: &[String]| words.iter().filter(|w| text.contains(w.as_str())).count();
        let positive_hits = hits(&self.positive);
        let negative_hits = hits(&self.negative);

        let total = (positive_hits + negative_hits) as f64;
        let (sentiment, score) = if positive_hits > negative_hits {
            (Sentiment::Positive, 50.0 + positive_hits as f64 / total * 50.0)
        } else if negative_hits > positive_hits {
            (Sentiment::Negative, 50.0 - negative_hits as f64 / total * 50.0)
        } else {
            (Sentiment::Neutral, 50.0)
        };

        SentimentResult { sentiment, score, positive_hits, negative_hits }
    }
}

impl Default for SentimentAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}
