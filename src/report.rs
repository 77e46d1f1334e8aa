//! Rendering and export of analysis results.
//!
//! Text summaries mirror the sections of an interactive result view: counts,
//! cleaned text, keyword list, a bar chart of the top words and the full
//! frequency table. JSON, CSV and TSV are meant for other tools.

use clap::ValueEnum;
use csv::WriterBuilder;

use crate::error::Result;
use crate::{AnalysisOptions, AnalysisResult, BatchReport, TOP_KEYWORDS};

/// Width of the longest bar in the frequency chart.
const CHART_WIDTH: usize = 40;
/// Longer chart labels are cut to this many characters plus `...`.
const CHART_LABEL_CHARS: usize = 8;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    #[default]
    Txt,
    Json,
    Csv,
    Tsv,
}

///Renders all reports of a batch in the requested format.
pub fn render_report(batch: &BatchReport, options: &AnalysisOptions) -> Result<String> {
    match options.export_format {
        ExportFormat::Txt => Ok(batch
            .reports
            .iter()
            .map(|r| render_summary(&r.source, &r.result, options.top))
            .collect::<Vec<String>>()
            .join("\n")),
        ExportFormat::Json => render_json(batch),
        ExportFormat::Csv => render_delimited(batch, b','),
        ExportFormat::Tsv => render_delimited(batch, b'\t'),
    }
}

fn render_json(batch: &BatchReport) -> Result<String> {
    let json = match batch.reports.as_slice() {
        [single] => serde_json::to_string_pretty(&single.result)?,
        many => serde_json::to_string_pretty(many)?,
    };
    Ok(json)
}

fn render_delimited(batch: &BatchReport, delimiter: u8) -> Result<String> {
    let mut buf: Vec<u8> = Vec::new();
    {
        let mut wtr = WriterBuilder::new()
            .delimiter(delimiter)
            .from_writer(&mut buf);
        wtr.write_record(["source", "rank", "word", "count"])?;
        for report in &batch.reports {
            let source = csv_safe_cell(report.source.clone());
            for (i, entry) in report.result.word_frequency.iter().enumerate() {
                wtr.write_record([
                    source.clone(),
                    (i + 1).to_string(),
                    csv_safe_cell(entry.word.clone()),
                    entry.count.to_string(),
                ])?;
            }
        }
        wtr.flush().map_err(csv::Error::from)?;
    }
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

///Neutralizes spreadsheet formulas: cells starting with `=`, `+`, `-`, `@`, tab or
///carriage return get a leading single quote. Cells already starting with a quote
///are returned unchanged.
/// # Example
/// ```
/// use text_insight::csv_safe_cell;
/// assert_eq!(csv_safe_cell("=SUM(A1)".to_string()), "'=SUM(A1)");
/// assert_eq!(csv_safe_cell("'=SUM(A1)".to_string()), "'=SUM(A1)");
/// assert_eq!(csv_safe_cell("plain".to_string()), "plain");
/// ```
pub fn csv_safe_cell(cell: String) -> String {
    match cell.chars().next() {
        Some('=' | '+' | '-' | '@' | '\t' | '\r') => format!("'{}", cell),
        _ => cell,
    }
}

///Human-readable summary of one result. `top` limits the frequency table; 0 shows every word.
pub fn render_summary(source: &str, result: &AnalysisResult, top: usize) -> String {
    let mut out = format!("=== {} ===\n", source);
    out.push_str(&format!("Total words:   {}\n", result.total_word_count));
    out.push_str(&format!("Unique words:  {}\n", result.unique_word_count));
    out.push_str(&format!("Top keywords:  {}\n", result.top_keywords.len()));
    out.push_str(&format!(
        "Sentiment:     {} (score {})\n",
        result.sentiment, result.sentiment_score
    ));

    out.push_str("\nCleaned text:\n");
    if result.cleaned_text.is_empty() {
        out.push_str("  No meaningful words found after cleaning.\n");
    } else {
        out.push_str(&format!("  {}\n", result.cleaned_text));
    }

    out.push_str(&format!("\nTop {} keywords:\n", TOP_KEYWORDS));
    if result.top_keywords.is_empty() {
        out.push_str("  No keywords found.\n");
    }
    for (i, keyword) in result.top_keywords.iter().enumerate() {
        out.push_str(&format!("  {}. {}\n", i + 1, keyword));
    }

    if !result.word_frequency.is_empty() {
        out.push_str("\nWord frequency chart:\n");
        out.push_str(&render_chart(result));
    }

    let total = result.word_frequency.len();
    let shown = if top == 0 { total } else { top.min(total) };
    out.push_str(&format!(
        "\nWord frequency table ({} of {}):\n",
        shown, total
    ));
    if total == 0 {
        out.push_str("  No words to display.\n");
        return out;
    }
    let rows = &result.word_frequency[..shown];
    let width = rows
        .iter()
        .map(|w| w.word.chars().count())
        .max()
        .unwrap_or(0)
        .max("Word".len());
    out.push_str(&format!(
        "  {:>4}  {:<width$}  {:>5}\n",
        "Rank", "Word", "Count"
    ));
    for (i, entry) in rows.iter().enumerate() {
        out.push_str(&format!(
            "  {:>4}  {:<width$}  {:>5}\n",
            i + 1,
            entry.word,
            entry.count
        ));
    }
    out
}

fn render_chart(result: &AnalysisResult) -> String {
    let entries = &result.word_frequency[..result.word_frequency.len().min(TOP_KEYWORDS)];
    let max = entries.iter().map(|w| w.count).max().unwrap_or(1).max(1);
    entries
        .iter()
        .map(|entry| {
            let bar = (entry.count * CHART_WIDTH / max).max(1);
            format!(
                "  {:<11} | {} {}\n",
                chart_label(&entry.word),
                "#".repeat(bar),
                entry.count
            )
        })
        .collect()
}

fn chart_label(word: &str) -> String {
    if word.chars().count() > CHART_LABEL_CHARS {
        let cut: String = word.chars().take(CHART_LABEL_CHARS).collect();
        format!("{}...", cut)
    } else {
        word.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{SourceReport, analyze_text};

    fn batch(texts: &[(&str, &str)]) -> BatchReport {
        BatchReport {
            reports: texts
                .iter()
                .map(|(source, text)| SourceReport {
                    source: source.to_string(),
                    result: analyze_text(text),
                })
                .collect(),
            failed_files: Vec::new(),
        }
    }

    fn opts(format: ExportFormat) -> AnalysisOptions {
        AnalysisOptions {
            export_format: format,
            ..AnalysisOptions::default()
        }
    }

    #[test]
    fn labels_are_truncated() {
        assert_eq!(chart_label("extraordinary"), "extraord...");
        assert_eq!(chart_label("eightch8"), "eightch8");
    }

    #[test]
    fn chart_scales_to_most_frequent() {
        let result = analyze_text("apple apple apple apple pear");
        let chart = render_chart(&result);
        let mut lines = chart.lines();
        assert!(lines.next().unwrap().contains(&format!("{} 4", "#".repeat(40))));
        assert!(lines.next().unwrap().contains(&format!("| {} 1", "#".repeat(10))));
    }

    #[test]
    fn summary_sections_in_order() {
        let out = render_summary("sample", &analyze_text("bad bad good"), 20);
        let i_counts = out.find("Total words:   3").expect("counts");
        let i_sent = out.find("Sentiment:     Negative (score -1)").expect("sentiment");
        let i_clean = out.find("Cleaned text:\n  bad bad good").expect("cleaned");
        let i_kw = out.find("  1. bad\n  2. good").expect("keywords");
        let i_chart = out.find("Word frequency chart:").expect("chart");
        let i_table = out.find("Word frequency table (2 of 2):").expect("table");
        assert!(i_counts < i_sent && i_sent < i_clean && i_clean < i_kw);
        assert!(i_kw < i_chart && i_chart < i_table);
    }

    #[test]
    fn summary_for_empty_result() {
        let out = render_summary("empty", &analyze_text("the a an is"), 20);
        assert!(out.contains("No meaningful words found after cleaning."));
        assert!(out.contains("No keywords found."));
        assert!(out.contains("No words to display."));
        assert!(!out.contains("Word frequency chart:"));
    }

    #[test]
    fn table_respects_top_limit() {
        let out = render_summary("t", &analyze_text("alpha beta gamma delta"), 2);
        assert!(out.contains("Word frequency table (2 of 4):"));
        let all = render_summary("t", &analyze_text("alpha beta gamma delta"), 0);
        assert!(all.contains("Word frequency table (4 of 4):"));
    }

    #[test]
    fn table_rows_are_aligned() {
        let out = render_summary("t", &analyze_text("kiwi banana kiwi"), 0);
        assert!(out.contains("\n  Rank  Word    Count\n"));
        assert!(out.contains("\n     1  kiwi        2\n"));
        assert!(out.ends_with("\n     2  banana      1\n"));
    }

    #[test]
    fn json_single_is_plain_result() {
        let out = render_report(&batch(&[("a", "good day")]), &opts(ExportFormat::Json)).unwrap();
        let v: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(v["sentiment"], "Positive");
        assert_eq!(v["sentimentScore"], 1);
        assert_eq!(v["wordFrequency"][0]["word"], "good");
    }

    #[test]
    fn json_many_is_array_with_sources() {
        let out = render_report(
            &batch(&[("a", "good day"), ("b", "bad day")]),
            &opts(ExportFormat::Json),
        )
        .unwrap();
        let v: serde_json::Value = serde_json::from_str(&out).unwrap();
        let arr = v.as_array().unwrap();
        assert_eq!(arr.len(), 2);
        assert_eq!(arr[1]["source"], "b");
        assert_eq!(arr[1]["result"]["sentiment"], "Negative");
    }

    #[test]
    fn delimited_rows() {
        let csv = render_report(&batch(&[("=evil", "cat cat dog")]), &opts(ExportFormat::Csv)).unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines[0], "source,rank,word,count");
        assert_eq!(lines[1], "'=evil,1,cat,2");
        assert_eq!(lines[2], "'=evil,2,dog,1");

        let tsv = render_report(&batch(&[("s", "cat cat dog")]), &opts(ExportFormat::Tsv)).unwrap();
        assert_eq!(tsv.lines().nth(1), Some("s\t1\tcat\t2"));
    }
}
