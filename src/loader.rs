//! Dictionary sources.
//!
//! Two line-oriented formats are supported: a plain word list with one word
//! per line, and a frequency list with `word frequency` per line. Lines that
//! cannot be used (blank, not UTF-8, too long, bad frequency) are skipped.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use crate::error::Result;
use crate::trie::{MAX_WORD_LEN, fold_case};

/// Trim and case fold a raw line. Returns `None` for lines that are not a
/// usable dictionary word.
pub fn normalize_word(raw: &str) -> Option<String> {
    let word = raw.trim();
    if word.is_empty() || word.chars().count() > MAX_WORD_LEN {
        return None;
    }
    Some(fold_case(word))
}

/// Iterate over the UTF-8 lines of a reader, skipping lines that are not
/// valid UTF-8 instead of failing.
fn utf8_lines<R: BufRead>(mut reader: R) -> impl Iterator<Item = io::Result<(usize, String)>> {
    let mut line_num = 0;
    let mut buf = Vec::new();
    std::iter::from_fn(move || {
        loop {
            buf.clear();
            match reader.read_until(b'\n', &mut buf) {
                Ok(0) => return None,
                Ok(_) => {
                    line_num += 1;
                    match String::from_utf8(std::mem::take(&mut buf)) {
                        Ok(line) => return Some(Ok((line_num, line))),
                        Err(_) => log::debug!("Skipping line {line_num}: not valid UTF-8"),
                    }
                }
                Err(e) => return Some(Err(e)),
            }
        }
    })
}

/// Read a word list with one word per line.
pub fn load_words<R: BufRead>(reader: R) -> Result<Vec<String>> {
    let mut words = Vec::new();
    let mut skipped = 0usize;

    for line in utf8_lines(reader) {
        let (line_num, line) = line?;
        match normalize_word(&line) {
            Some(word) => words.push(word),
            None => {
                log::debug!("Skipping line {line_num}: empty or longer than {MAX_WORD_LEN} characters");
                skipped += 1;
            }
        }
    }

    log::info!("Read {} words ({} lines skipped)", words.len(), skipped);
    Ok(words)
}

/// Read a word list from a file.
pub fn load_words_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let file = File::open(path)?;
    load_words(BufReader::new(file))
}

/// Read a frequency list with `word frequency` per line.
pub fn load_frequencies<R: BufRead>(reader: R) -> Result<Vec<(String, u32)>> {
    let mut entries = Vec::new();

    for line in utf8_lines(reader) {
        let (line_num, line) = line?;
        let mut parts = line.split_whitespace();

        let entry = match (parts.next(), parts.next()) {
            (Some(word), Some(frequency)) => frequency
                .parse::<u32>()
                .ok()
                .and_then(|frequency| normalize_word(word).map(|word| (word, frequency))),
            _ => None,
        };

        match entry {
            Some(entry) => entries.push(entry),
            None => log::debug!("Skipping line {line_num}: expected 'word frequency'"),
        }
    }

    log::info!("Read {} frequency entries", entries.len());
    Ok(entries)
}

/// Read a frequency list from a file.
pub fn load_frequency_file<P: AsRef<Path>>(path: P) -> Result<Vec<(String, u32)>> {
    let file = File::open(path)?;
    load_frequencies(BufReader::new(file))
}
