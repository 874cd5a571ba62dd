/*!
 * Romanization of Devanagari text.
 *
 * The `Transliterator` trait is the seam between record assembly and the
 * script converter. Callers never see a converter failure: they go through
 * `romanize_or_original`, which hands back the source text when conversion
 * is not possible.
 */

use log::debug;
use vidyut_lipi::{Lipika, Scheme};

use crate::errors::TransliterationError;

/// A script converter that reports failure instead of panicking
pub trait Transliterator {
    /// Convert `text` into Roman script
    fn transliterate(&mut self, text: &str) -> Result<String, TransliterationError>;
}

/// Devanagari to ITRANS converter backed by vidyut-lipi
pub struct ItransTransliterator {
    lipika: Lipika,
}

impl ItransTransliterator {
    pub fn new() -> Self {
        Self {
            lipika: Lipika::new(),
        }
    }
}

impl Default for ItransTransliterator {
    fn default() -> Self {
        Self::new()
    }
}

impl Transliterator for ItransTransliterator {
    fn transliterate(&mut self, text: &str) -> Result<String, TransliterationError> {
        let output = self.lipika.transliterate(text, Scheme::Devanagari, Scheme::Itrans);

        // Anything still in the Devanagari block was not covered by the scheme
        if output.chars().any(is_devanagari) {
            return Err(TransliterationError::Unmapped { text: output });
        }

        Ok(output)
    }
}

// @checks: Character is in the Devanagari or Devanagari Extended block
fn is_devanagari(c: char) -> bool {
    matches!(c, '\u{0900}'..='\u{097F}' | '\u{A8E0}'..='\u{A8FF}')
}

/// Romanize `text`, falling back to the text itself when conversion fails.
///
/// Empty and whitespace-only input is returned as-is without reaching the
/// converter, so blank poem lines stay blank.
pub fn romanize_or_original(transliterator: &mut dyn Transliterator, text: &str) -> String {
    if text.trim().is_empty() {
        return text.to_string();
    }

    transliterator.transliterate(text).unwrap_or_else(|e| {
        debug!("Keeping original text for {:?}: {}", text, e);
        text.to_string()
    })
}
