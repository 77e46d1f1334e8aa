use std::fmt;

use serde::{Deserialize, Serialize};

use crate::lexicon::Lexicons;

/// Coarse sentiment label derived from the sign of the score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sentiment {
    Positive,
    Neutral,
    Negative,
}

impl Sentiment {
    pub fn from_score(score: i64) -> Self {
        match score {
            s if s > 0 => Sentiment::Positive,
            s if s < 0 => Sentiment::Negative,
            _ => Sentiment::Neutral,
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Sentiment::Positive => "Positive",
            Sentiment::Neutral => "Neutral",
            Sentiment::Negative => "Negative",
        };
        f.write_str(label)
    }
}

/// Label plus signed score (positive hits minus negative hits).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SentimentScore {
    pub label: Sentiment,
    pub score: i64,
}

///Counts positive and negative lexicon hits over already filtered tokens.
///Both lists are checked for every token, so a word listed in both counts on both sides.
///The score is not normalized by text length.
/// # Example
/// ```
/// use text_insight::lexicon::Lexicons;
/// use text_insight::sentiment::{Sentiment, score_sentiment};
/// let tokens = vec!["bad".to_string(), "bad".to_string(), "good".to_string()];
/// let scored = score_sentiment(&tokens, Lexicons::english());
/// assert_eq!(scored.score, -1);
/// assert_eq!(scored.label, Sentiment::Negative);
/// ```
pub fn score_sentiment(tokens: &[String], lexicons: &Lexicons) -> SentimentScore {
    let mut positive: i64 = 0;
    let mut negative: i64 = 0;
    for token in tokens {
        if lexicons.positive.contains(token) {
            positive += 1;
        }
        if lexicons.negative.contains(token) {
            negative += 1;
        }
    }
    let score = positive - negative;
    SentimentScore {
        label: Sentiment::from_score(score),
        score,
    }
}
