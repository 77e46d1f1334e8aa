//! Word lists used by the pipeline.
//!
//! The built-in English data is compiled into the binary and turned into
//! hash sets the first time [`Lexicons::english`] is called. After that the
//! sets are never mutated, so a single `&'static Lexicons` can be shared by
//! any number of concurrent analyses.

use std::collections::HashSet;
use std::sync::LazyLock;

/// English stopwords (pronouns, articles, auxiliaries, contraction stubs).
const ENGLISH_STOPWORDS: &[&str] = &[
    "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "your", "yours",
    "yourself", "yourselves", "he", "him", "his", "himself", "she", "her", "hers", "herself",
    "it", "its", "itself", "they", "them", "their", "theirs", "themselves", "what", "which",
    "who", "whom", "this", "that", "these", "those", "am", "is", "are", "was", "were", "be",
    "been", "being", "have", "has", "had", "having", "do", "does", "did", "doing", "a", "an",
    "the", "and", "but", "if", "or", "because", "as", "until", "while", "of", "at", "by", "for",
    "with", "about", "against", "between", "into", "through", "during", "before", "after",
    "above", "below", "to", "from", "up", "down", "in", "out", "on", "off", "over", "under",
    "again", "further", "then", "once", "here", "there", "when", "where", "why", "how", "all",
    "each", "few", "more", "most", "other", "some", "such", "no", "nor", "not", "only", "own",
    "same", "so", "than", "too", "very", "s", "t", "can", "will", "just", "don", "should", "now",
    "d", "ll", "m", "o", "re", "ve", "y", "ain", "aren", "couldn", "didn", "doesn", "hadn",
    "hasn", "haven", "isn", "ma", "mightn", "mustn", "needn", "shan", "shouldn", "wasn",
    "weren", "won", "wouldn",
];

const ENGLISH_POSITIVE: &[&str] = &[
    "good", "great", "excellent", "amazing", "wonderful", "fantastic", "awesome", "love",
    "happy", "joy", "beautiful", "best", "brilliant", "perfect", "lovely", "nice", "positive",
    "success", "successful", "win", "winner", "winning", "like", "enjoy", "enjoyed",
    "pleasant", "pleased", "delighted", "glad", "impressive", "incredible", "outstanding",
    "superb", "terrific", "marvelous", "magnificent", "exceptional", "favorable", "fortunate",
    "grateful", "thankful", "blessed", "cheerful", "content", "excited", "enthusiastic",
    "hopeful", "optimistic", "proud", "satisfied", "thrilled", "admire", "appreciate",
    "celebrate", "cherish", "comfortable", "confident", "creative", "elegant", "fabulous",
    "friendly", "generous", "gentle", "graceful", "honest", "innovative", "inspiring", "kind",
    "peaceful", "powerful", "reliable", "remarkable",
];

const ENGLISH_NEGATIVE: &[&str] = &[
    "bad", "terrible", "awful", "horrible", "poor", "worst", "hate", "sad", "angry", "ugly",
    "fail", "failure", "failed", "wrong", "negative", "problem", "disappointed",
    "disappointing", "frustrating", "frustrated", "annoying", "annoyed", "upset", "unhappy",
    "unfortunate", "painful", "pain", "hurt", "boring", "dull", "difficult", "hard",
    "impossible", "disaster", "disastrous", "tragic", "tragedy", "miserable", "depressed",
    "depressing", "hopeless", "helpless", "worthless", "useless", "broken", "damage",
    "damaged", "destroy", "destroyed", "evil", "fear", "fearful", "frightening", "guilty",
    "harmful", "harsh", "hostile", "ignorant", "inferior", "jealous", "lazy", "lonely", "mad",
    "mean", "nasty", "nervous", "offensive", "pessimistic", "regret", "reject", "rejected",
    "rude", "scary", "selfish", "sick", "sorry", "stressed", "stupid", "tired", "troubled",
    "unfair", "violent", "weak",
];

static ENGLISH: LazyLock<Lexicons> = LazyLock::new(|| Lexicons {
    stopwords: Lexicon::from_words(ENGLISH_STOPWORDS.iter().copied()),
    positive: Lexicon::from_words(ENGLISH_POSITIVE.iter().copied()),
    negative: Lexicon::from_words(ENGLISH_NEGATIVE.iter().copied()),
});

/// A set of lowercase words used for membership tests.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Lexicon {
    words: HashSet<String>,
}

impl Lexicon {
    /// Build a lexicon from any list of words. Entries are trimmed and
    /// lowercased; blank entries are ignored.
    /// # Example
    /// ```
    /// use text_insight::lexicon::Lexicon;
    /// let lexicon = Lexicon::from_words(["Alpha", " beta ", ""]);
    /// assert_eq!(lexicon.len(), 2);
    /// assert!(lexicon.contains("alpha"));
    /// assert!(lexicon.contains("beta"));
    /// ```
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut lexicon = Lexicon::default();
        lexicon.extend(words);
        lexicon
    }

    /// Add words to the lexicon, normalized the same way as [`Lexicon::from_words`].
    pub fn extend<I, S>(&mut self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for word in words {
            let word = word.as_ref().trim();
            if !word.is_empty() {
                self.words.insert(word.to_lowercase());
            }
        }
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// The three word lists one analysis runs against.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Lexicons {
    pub stopwords: Lexicon,
    pub positive: Lexicon,
    pub negative: Lexicon,
}

impl Lexicons {
    /// Built-in English stopword and sentiment lists, initialized once per process.
    pub fn english() -> &'static Lexicons {
        &ENGLISH
    }

    /// Returns a copy of `self` whose stopword list also contains `words`.
    /// # Example
    /// ```
    /// use text_insight::lexicon::Lexicons;
    /// let lexicons = Lexicons::english().with_extra_stopwords(["Truly"]);
    /// assert!(lexicons.stopwords.contains("truly"));
    /// assert!(!Lexicons::english().stopwords.contains("truly"));
    /// ```
    pub fn with_extra_stopwords<I, S>(&self, words: I) -> Lexicons
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut lexicons = self.clone();
        lexicons.stopwords.extend(words);
        lexicons
    }
}
