#![forbid(unsafe_code)]
//! # text_insight
//!
//! Instant lexical analysis of English text.
//!
//! [`analyze_text`] runs a fixed pipeline over one string:
//!
//! 1. [`clean_text`]: lowercase, strip punctuation and digits, collapse whitespace
//! 2. [`tokenize`]: split into words
//! 3. [`remove_stopwords`]: drop function words and single letters
//! 4. [`count_words`]: count occurrences, remembering first-seen order
//! 5. [`rank_words`] / [`top_keywords`]: sort by frequency, keep the top 10
//! 6. [`sentiment::score_sentiment`]: positive minus negative lexicon hits
//!
//! Every stage is a pure function. Any input, including the empty string,
//! produces a valid [`AnalysisResult`].
//!
//! ```
//! use text_insight::{Sentiment, analyze_text};
//! let result = analyze_text("This is a great and wonderful day, truly amazing");
//! assert_eq!(result.sentiment, Sentiment::Positive);
//! assert_eq!(result.sentiment_score, 3);
//! assert_eq!(result.cleaned_text, "great wonderful day truly amazing");
//! ```
//!
//! The batch helpers ([`analyze_path`], [`analyze_stdin`]) and the [`report`]
//! module back the `text_insight` command-line tool.

use std::borrow::Cow;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use log::{debug, info};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

mod error;
pub mod input;
pub mod lexicon;
pub mod report;
pub mod sentiment;

pub use error::{Error, Result};
pub use input::collect_files;
pub use lexicon::{Lexicon, Lexicons};
pub use report::{ExportFormat, csv_safe_cell, render_report, render_summary};
pub use sentiment::{Sentiment, SentimentScore};

/// Number of entries reported in [`AnalysisResult::top_keywords`].
pub const TOP_KEYWORDS: usize = 10;

/// Source name used for text read from standard input.
pub const STDIN_SOURCE: &str = "<stdin>";

/// Source name used when several files are analyzed as one text.
pub const COMBINED_SOURCE: &str = "<combined>";

/// A distinct word and how often it occurs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordCount {
    pub word: String,
    pub count: usize,
}

/// Word counts that remember the order in which words were first seen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyMap {
    entries: Vec<WordCount>,
    index: HashMap<String, usize>,
}

impl FrequencyMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one more occurrence of `word`.
    pub fn add(&mut self, word: &str) {
        match self.index.get(word) {
            Some(&i) => self.entries[i].count += 1,
            None => {
                self.index.insert(word.to_owned(), self.entries.len());
                self.entries.push(WordCount {
                    word: word.to_owned(),
                    count: 1,
                });
            }
        }
    }

    pub fn get(&self, word: &str) -> Option<usize> {
        self.index.get(word).map(|&i| self.entries[i].count)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = &WordCount> {
        self.entries.iter()
    }

    pub fn into_entries(self) -> Vec<WordCount> {
        self.entries
    }
}

/// Everything one analysis produces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    /// Filtered words joined with single spaces.
    pub cleaned_text: String,
    pub total_word_count: usize,
    pub unique_word_count: usize,
    /// Sorted by count, descending; equal counts keep first-seen order.
    pub word_frequency: Vec<WordCount>,
    pub top_keywords: Vec<String>,
    pub sentiment: Sentiment,
    pub sentiment_score: i64,
}

///Normalizes raw text: lowercases, removes everything that is neither an ASCII word character nor whitespace,
///drops digits and collapses whitespace runs into single spaces.
/// # Example
/// ```
/// use text_insight::clean_text;
/// assert_eq!(clean_text("  Hello,\tWORLD!! 42 times\n"), "hello world times");
/// assert_eq!(clean_text("don't"), "dont");
/// assert_eq!(clean_text("?!... 123"), "");
/// ```
pub fn clean_text(text: &str) -> String {
    let stripped: String = text
        .to_lowercase()
        .chars()
        // ASCII word class minus digits
        .filter(|c| c.is_ascii_alphabetic() || *c == '_' || is_space(*c))
        .collect();
    tokenize(&stripped).join(" ")
}

///Whitespace in the sense of the ECMAScript `\s` class: Unicode whitespace plus
///the byte order mark (U+FEFF), minus NEL (U+0085).
pub fn is_space(c: char) -> bool {
    (c.is_whitespace() && c != '\u{85}') || c == '\u{feff}'
}

///Splits text at whitespace into words, keeping order and duplicates.
/// # Example
/// ```
/// use text_insight::tokenize;
/// assert_eq!(tokenize(" cat  cat dog "), vec!["cat", "cat", "dog"]);
/// assert!(tokenize("").is_empty());
/// ```
pub fn tokenize(text: &str) -> Vec<String> {
    text.split(is_space)
        .filter(|word| !word.is_empty())
        .map(String::from)
        .collect()
}

///Removes stopwords and single-character words. Order is preserved.
/// # Example
/// ```
/// use text_insight::{Lexicons, remove_stopwords, tokenize};
/// let tokens = tokenize("the cat x sat on a mat");
/// let words = remove_stopwords(tokens, &Lexicons::english().stopwords);
/// assert_eq!(words, vec!["cat", "sat", "mat"]);
/// ```
pub fn remove_stopwords(tokens: Vec<String>, stopwords: &Lexicon) -> Vec<String> {
    tokens
        .into_iter()
        .filter(|word| word.chars().count() > 1 && !stopwords.contains(word))
        .collect()
}

///Counts the occurrences of each word.
/// # Example
/// ```
/// use text_insight::count_words;
/// let words = vec!["two".to_string(), "one".to_string(), "two".to_string()];
/// let counted = count_words(&words);
/// assert_eq!(counted.get("two"), Some(2));
/// assert_eq!(counted.get("one"), Some(1));
/// assert_eq!(counted.len(), 2);
/// ```
pub fn count_words(words: &[String]) -> FrequencyMap {
    let mut frequency = FrequencyMap::new();
    for word in words {
        frequency.add(word);
    }
    frequency
}

///Sorts word counts by frequency, descending. The sort is stable, so words with
///equal counts stay in the order they were first seen.
/// # Example
/// ```
/// use text_insight::{count_words, rank_words, tokenize};
/// let ranked = rank_words(count_words(&tokenize("one two three three two three")));
/// let order: Vec<&str> = ranked.iter().map(|w| w.word.as_str()).collect();
/// assert_eq!(order, vec!["three", "two", "one"]);
/// ```
pub fn rank_words(frequency: FrequencyMap) -> Vec<WordCount> {
    let mut ranked = frequency.into_entries();
    ranked.sort_by(|a, b| b.count.cmp(&a.count));
    ranked
}

///Returns the first `n` words of a ranked list.
pub fn top_keywords(ranked: &[WordCount], n: usize) -> Vec<String> {
    ranked.iter().take(n).map(|w| w.word.clone()).collect()
}

///Analyzes text with the built-in English lexicons.
/// # Example
/// ```
/// use text_insight::{Sentiment, analyze_text};
/// let result = analyze_text("bad bad good");
/// assert_eq!(result.word_frequency[0].word, "bad");
/// assert_eq!(result.word_frequency[0].count, 2);
/// assert_eq!(result.sentiment_score, -1);
/// assert_eq!(result.sentiment, Sentiment::Negative);
/// ```
pub fn analyze_text(text: &str) -> AnalysisResult {
    analyze_text_with(text, Lexicons::english())
}

///Analyzes text against caller-provided lexicons.
pub fn analyze_text_with(text: &str, lexicons: &Lexicons) -> AnalysisResult {
    let cleaned = clean_text(text);
    let tokens = tokenize(&cleaned);
    let token_count = tokens.len();
    let words = remove_stopwords(tokens, &lexicons.stopwords);
    debug!(
        "cleaned {} chars into {} tokens, {} kept after stopword filter",
        text.len(),
        token_count,
        words.len()
    );

    let frequency = count_words(&words);
    let unique_word_count = frequency.len();
    let word_frequency = rank_words(frequency);
    let top_keywords = top_keywords(&word_frequency, TOP_KEYWORDS);
    let sentiment = sentiment::score_sentiment(&words, lexicons);

    AnalysisResult {
        cleaned_text: words.join(" "),
        total_word_count: words.len(),
        unique_word_count,
        word_frequency,
        top_keywords,
        sentiment: sentiment.label,
        sentiment_score: sentiment.score,
    }
}

/// Options shared by the batch entry points and the CLI.
#[derive(Debug, Clone)]
pub struct AnalysisOptions {
    pub export_format: ExportFormat,
    /// Analyze all files as one text instead of one result per file.
    pub combine: bool,
    /// Rows of the frequency table shown in text summaries; 0 shows all.
    pub top: usize,
    /// Extra stopword file (one word per line) added to the English list.
    pub stopwords: Option<PathBuf>,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self {
            export_format: ExportFormat::Txt,
            combine: false,
            top: 20,
            stopwords: None,
        }
    }
}

/// Result for one analyzed source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceReport {
    pub source: String,
    pub result: AnalysisResult,
}

/// Results of a batch run plus the files that could not be read.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchReport {
    pub reports: Vec<SourceReport>,
    /// `(path, reason)` for every unreadable file.
    pub failed_files: Vec<(String, String)>,
}

fn load_lexicons(options: &AnalysisOptions) -> Result<Cow<'static, Lexicons>> {
    match &options.stopwords {
        Some(path) => {
            let extra = input::read_stopword_file(path)?;
            info!(
                "loaded {} extra stopwords from {}",
                extra.len(),
                path.display()
            );
            Ok(Cow::Owned(Lexicons::english().with_extra_stopwords(extra)))
        }
        None => Ok(Cow::Borrowed(Lexicons::english())),
    }
}

///Analyzes a file or every `.txt` file below a directory.
///
///Unreadable files are listed in [`BatchReport::failed_files`] and skipped. In per-file
///mode the files are analyzed in parallel; reports keep the sorted file order.
pub fn analyze_path(path: &Path, options: &AnalysisOptions) -> Result<BatchReport> {
    let files = collect_files(path);
    if files.is_empty() {
        return Err(Error::NoInput(path.display().to_string()));
    }
    let lexicons = load_lexicons(options)?;

    let (texts, failed_files) = input::read_all(files);
    if texts.is_empty() {
        return Err(Error::NoInput(path.display().to_string()));
    }

    let reports = if options.combine {
        let combined = texts
            .iter()
            .map(|(_, text)| text.as_str())
            .collect::<Vec<&str>>()
            .join("\n");
        info!("analyzing {} files combined", texts.len());
        vec![SourceReport {
            source: COMBINED_SOURCE.to_string(),
            result: analyze_text_with(&combined, &lexicons),
        }]
    } else {
        info!("analyzing {} files", texts.len());
        texts
            .par_iter()
            .map(|(name, text)| SourceReport {
                source: name.clone(),
                result: analyze_text_with(text, &lexicons),
            })
            .collect()
    };

    Ok(BatchReport {
        reports,
        failed_files,
    })
}

///Analyzes text read from standard input. Blank text is rejected with [`Error::EmptyInput`].
pub fn analyze_stdin(text: &str, options: &AnalysisOptions) -> Result<BatchReport> {
    if text.chars().all(is_space) {
        return Err(Error::EmptyInput);
    }
    let lexicons = load_lexicons(options)?;
    Ok(BatchReport {
        reports: vec![SourceReport {
            source: STDIN_SOURCE.to_string(),
            result: analyze_text_with(text, &lexicons),
        }],
        failed_files: Vec::new(),
    })
}

///Prints unreadable files to stderr.
pub fn print_failed_files(failed: &[(String, String)]) {
    eprintln!("Warning: {} file(s) could not be analyzed:", failed.len());
    for (file, reason) in failed {
        eprintln!("  {}: {}", file, reason);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(list: &[&str]) -> Vec<String> {
        list.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_clean() {
        assert_eq!(clean_text("Cat cat CAT 2 dogs"), "cat cat cat dogs");
        assert_eq!(clean_text("line one\n\n\tline two"), "line one line two");
        assert_eq!(clean_text("snake_case stays"), "snake_case stays");
        assert_eq!(clean_text("abc123def"), "abcdef");
        assert_eq!(clean_text("café naïve"), "caf nave");
        assert_eq!(clean_text(""), "");
        assert_eq!(clean_text(" \n\t "), "");
    }

    #[test]
    fn space_class_includes_bom_but_not_nel() {
        assert_eq!(clean_text("good\u{feff}day"), "good day");
        assert_eq!(clean_text("good\u{85}day"), "goodday");
        assert_eq!(clean_text("a\u{a0}b\u{2003}cc"), "a b cc");
        assert_eq!(tokenize("one\u{feff}two\u{85}three"), words(&["one", "two\u{85}three"]));
        assert!(is_space('\u{3000}'));
        assert!(!is_space('\u{85}'));
    }

    #[test]
    fn test_count() {
        let counted = count_words(&words(&["one", "two", "two", "three", "three", "three"]));
        assert_eq!(counted.get("one"), Some(1));
        assert_eq!(counted.get("two"), Some(2));
        assert_eq!(counted.get("three"), Some(3));
        assert_eq!(counted.get("four"), None);
        let order: Vec<&str> = counted.iter().map(|w| w.word.as_str()).collect();
        assert_eq!(order, vec!["one", "two", "three"]);
    }

    #[test]
    fn rank_ties_keep_first_seen_order() {
        let ranked = rank_words(count_words(&words(&[
            "zeta", "alpha", "mid", "mid", "zeta", "alpha", "last",
        ])));
        let order: Vec<(&str, usize)> = ranked.iter().map(|w| (w.word.as_str(), w.count)).collect();
        assert_eq!(
            order,
            vec![("zeta", 2), ("alpha", 2), ("mid", 2), ("last", 1)]
        );
    }

    #[test]
    fn top_keywords_caps_at_n() {
        let text: Vec<String> = (b'a'..=b'z')
            .map(|c| format!("w{}", c as char))
            .collect();
        let ranked = rank_words(count_words(&text));
        assert_eq!(top_keywords(&ranked, TOP_KEYWORDS).len(), 10);
        assert_eq!(top_keywords(&ranked[..3], TOP_KEYWORDS).len(), 3);
    }

    #[test]
    fn stopword_filter_drops_single_letters() {
        let filtered = remove_stopwords(words(&["x", "q", "ok", "the"]), &Lexicons::english().stopwords);
        assert_eq!(filtered, words(&["ok"]));
    }

    #[test]
    fn empty_input_is_degenerate_result() {
        let r = analyze_text("");
        assert_eq!(r.cleaned_text, "");
        assert_eq!(r.total_word_count, 0);
        assert_eq!(r.unique_word_count, 0);
        assert!(r.word_frequency.is_empty());
        assert!(r.top_keywords.is_empty());
        assert_eq!(r.sentiment, Sentiment::Neutral);
        assert_eq!(r.sentiment_score, 0);
    }

    #[test]
    fn custom_lexicons_are_used() {
        let lexicons = Lexicons::english().with_extra_stopwords(["great"]);
        let r = analyze_text_with("great great day", &lexicons);
        assert_eq!(r.cleaned_text, "day");
        assert_eq!(r.sentiment, Sentiment::Neutral);
    }

    #[test]
    fn stdin_rejects_blank_text() {
        let opts = AnalysisOptions::default();
        assert!(matches!(analyze_stdin("  \n\t", &opts), Err(Error::EmptyInput)));
        // punctuation is not blank; it yields a degenerate result instead
        let report = analyze_stdin("?!", &opts).unwrap();
        assert_eq!(report.reports[0].source, STDIN_SOURCE);
        assert_eq!(report.reports[0].result.total_word_count, 0);
    }
}
