use serde::{Deserialize, Serialize};

use crate::classify::{Aesthetic, Niche, Tone};

/// One generated influencer character. Built once per request, never mutated.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Persona {
    pub name: String,
    pub handle: String,
    pub bio: String,
    /// Caller's niche text, verbatim.
    pub niche: String,
    pub tone_of_voice: String,
    pub style: String,
    pub aesthetic_words: Vec<String>,
    pub colour_palette: Vec<String>,
    pub styling_notes: String,
    pub aesthetic: Aesthetic,
    pub tone: Tone,
}

impl Persona {
    /// Bucket used for every niche-keyed table lookup.
    pub fn niche_bucket(&self) -> Niche {
        Niche::detect(&self.niche)
    }

    pub fn primary_colour(&self) -> &str {
        self.colour_palette.first().map(String::as_str).unwrap_or("")
    }

    pub fn primary_aesthetic_word(&self) -> &str {
        self.aesthetic_words.first().map(String::as_str).unwrap_or("")
    }

    /// Handle without the leading `@`, for file names and URLs.
    pub fn handle_slug(&self) -> &str {
        self.handle.trim_start_matches('@')
    }
}
