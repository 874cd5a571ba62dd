use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::transliteration::{romanize_or_original, Transliterator};

// @module: Poem records

// @struct: One poem in the output corpus
// Field order here is the key order in the JSON output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PoemRecord {
    // @field: Sequential id, starting at 1
    pub id: u64,

    // @field: Filename without its extension
    pub title: String,

    // @field: Roman-script title (extended variant)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub romanized_title: Option<String>,

    // @field: Empty placeholder filled in by hand later (extended variant)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub translated_title: Option<String>,

    // @field: Poem lines, trailing whitespace removed
    pub lines: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub romanized_lines: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub translated_lines: Option<Vec<String>>,

    // @field: Always empty when generated
    #[serde(default)]
    pub tags: BTreeSet<String>,
}

impl PoemRecord {
    /// Record with only id, title, lines and tags
    pub fn basic(id: u64, title: String, lines: Vec<String>) -> Self {
        Self {
            id,
            title,
            romanized_title: None,
            translated_title: None,
            lines,
            romanized_lines: None,
            translated_lines: None,
            tags: BTreeSet::new(),
        }
    }

    /// Record with romanized fields and empty translation placeholders.
    ///
    /// Every line gets exactly one romanized and one translated entry, so the
    /// three line lists always have the same length.
    pub fn romanized(
        id: u64,
        title: String,
        lines: Vec<String>,
        transliterator: &mut dyn Transliterator,
    ) -> Self {
        let romanized_title = romanize_or_original(transliterator, &title);
        let romanized_lines: Vec<String> = lines
            .iter()
            .map(|line| romanize_or_original(transliterator, line))
            .collect();
        let translated_lines = vec![String::new(); lines.len()];

        let record = Self {
            romanized_title: Some(romanized_title),
            translated_title: Some(String::new()),
            romanized_lines: Some(romanized_lines),
            translated_lines: Some(translated_lines),
            ..Self::basic(id, title, lines)
        };
        debug_assert!(record.is_aligned());
        record
    }

    /// Whether the romanized and translated line lists match `lines` in length
    pub fn is_aligned(&self) -> bool {
        let len = self.lines.len();
        self.romanized_lines.as_ref().is_none_or(|l| l.len() == len)
            && self.translated_lines.as_ref().is_none_or(|l| l.len() == len)
    }
}

/// Title of a poem: the filename with its final extension removed.
///
/// Leading dots never start an extension, so `.hidden` and `..txt` keep
/// their whole name while `a.b.txt` becomes `a.b`.
pub fn title_from_filename(filename: &str) -> String {
    let start = leading_dots(filename);
    match filename[start..].rfind('.') {
        Some(dot) => filename[..start + dot].to_string(),
        None => filename.to_string(),
    }
}

// @returns: Byte length of the run of dots at the start of `name`
fn leading_dots(name: &str) -> usize {
    name.len() - name.trim_start_matches('.').len()
}
