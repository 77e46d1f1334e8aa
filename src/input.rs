use std::fs;
use std::io::Read;
use std::path::Path;

use log::warn;
use walkdir::WalkDir;

use crate::STDIN_SOURCE;
use crate::error::{Error, Result};

///Collects analyzable files. A file path is returned as is; a directory is walked
///recursively for `.txt` files, following symbolic links. Paths are sorted; a missing
///path yields nothing.
pub fn collect_files(path: &Path) -> Vec<String> {
    if path.is_file() {
        return vec![path.to_string_lossy().into_owned()];
    }
    if !path.is_dir() {
        return Vec::new();
    }

    let mut files: Vec<String> = WalkDir::new(path)
        .follow_links(true)
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(e) if e.file_type().is_file() && is_txt(e.path()) => {
                Some(e.path().to_string_lossy().into_owned())
            }
            Ok(_) => None,
            // a dangling link to a .txt is kept so that reading it reports the failure
            Err(err) => match err.path() {
                Some(p) if is_txt(p) && err.loop_ancestor().is_none() => {
                    Some(p.to_string_lossy().into_owned())
                }
                _ => {
                    warn!("skipping unreadable entry: {}", err);
                    None
                }
            },
        })
        .collect();
    files.sort();
    files
}

fn is_txt(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case("txt"))
        .unwrap_or(false)
}

///Reads a text file. Invalid UTF-8 sequences are replaced rather than rejected;
///the cleaner strips the replacement characters anyway.
pub fn read_text(path: &Path) -> Result<String> {
    let bytes = fs::read(path).map_err(|e| Error::io(path, e))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

///Reads every file in `files`. Returns the `(path, text)` pairs that could be read and
///the `(path, reason)` pairs that could not, both in input order.
pub fn read_all(files: Vec<String>) -> (Vec<(String, String)>, Vec<(String, String)>) {
    let mut texts = Vec::with_capacity(files.len());
    let mut failed = Vec::new();
    for file in files {
        match read_text(Path::new(&file)) {
            Ok(text) => texts.push((file, text)),
            Err(e) => {
                warn!("skipping {}: {}", file, e);
                failed.push((file, e.to_string()));
            }
        }
    }
    (texts, failed)
}

pub fn read_stdin() -> Result<String> {
    let mut text = String::new();
    std::io::stdin()
        .read_to_string(&mut text)
        .map_err(|e| Error::io(STDIN_SOURCE, e))?;
    Ok(text)
}

///Loads a stopword list: one word per line, blank lines and `#` comments ignored.
pub fn read_stopword_file(path: &Path) -> Result<Vec<String>> {
    let content = read_text(path)?;
    Ok(parse_stopwords(&content))
}

fn parse_stopwords(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_lowercase)
        .collect()
}
