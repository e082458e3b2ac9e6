use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Shortest and longest phrase (in words) collapsed by `remove_repeated_phrases`.
pub const MIN_PHRASE_WORDS: usize = 3;
pub const MAX_PHRASE_WORDS: usize = 10;

static CUE_NUMBER: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d+$").unwrap());
static MARKUP: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]*>|&\w+;").unwrap());
static ANNOTATION: Lazy<Regex> = Lazy::new(|| Regex::new(r"\[.*?\]|\(.*?\)").unwrap());

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transcript {
    pub video_id: String,
    pub transcript: String,
}

/// Turn a WebVTT subtitle file into plain running text.
pub fn clean_subtitles(vtt: &str) -> String {
    let mut lines = vtt.lines().peekable();

    // Header block: "WEBVTT" plus metadata up to the first blank line.
    if lines
        .peek()
        .is_some_and(|first| first.trim_start_matches('\u{feff}').starts_with("WEBVTT"))
    {
        for line in lines.by_ref() {
            if line.trim().is_empty() {
                break;
            }
        }
    }

    let mut kept = Vec::new();
    for line in lines {
        let trimmed = line.trim();
        if CUE_NUMBER.is_match(trimmed) || line.contains("-->") {
            continue;
        }
        let text = MARKUP.replace_all(line, "");
        let text = ANNOTATION.replace_all(&text, "");
        let text = text.trim();
        if !text.is_empty() {
            kept.push(text.to_string());
        }
    }

    remove_repeated_phrases(&kept.join(" "), MIN_PHRASE_WORDS, MAX_PHRASE_WORDS)
}

/// Collapse immediately repeated phrases of `min_words..=max_words` words.
///
/// Auto-generated captions repeat each rolling line, so the same phrase shows
/// up back to back. Longer phrases are tried first.
pub fn remove_repeated_phrases(text: &str, min_words: usize, max_words: usize) -> String {
    let words: Vec<&str> = text.split_whitespace().collect();
    let mut result: Vec<&str> = Vec::with_capacity(words.len());
    let mut i = 0;

    while i < words.len() {
        let mut collapsed = false;
        for n in (min_words.max(1)..=max_words).rev() {
            if i + 2 * n > words.len() {
                continue;
            }
            let phrase = &words[i..i + n];
            if phrase != &words[i + n..i + 2 * n] {
                continue;
            }

            let mut repeats = 2;
            while i + repeats * n <= words.len()
                && &words[i + (repeats - 1) * n..i + repeats * n] == phrase
            {
                repeats += 1;
            }
            result.extend_from_slice(phrase);
            i += (repeats - 1) * n;
            collapsed = true;
            break;
        }

        if !collapsed {
            result.push(words[i]);
            i += 1;
        }
    }

    result.join(" ")
}
