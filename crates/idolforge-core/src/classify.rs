use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

/// Visual aesthetic bucket derived from the caller's vibe and traits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Aesthetic {
    Soft,
    Edgy,
    Luxury,
    Natural,
    Vibrant,
}

/// Voice bucket derived from the caller's vibe and traits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tone {
    Playful,
    Professional,
    Sassy,
    Inspiring,
    Mysterious,
}

/// Content category bucket. The caller's niche text is free-form; this is
/// what the niche-keyed tables are indexed by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Niche {
    Fitness,
    Fashion,
    Beauty,
    Lifestyle,
    Food,
    Travel,
}

/// One entry of an ordered keyword rule list: the bucket wins if any keyword
/// occurs as a substring of the lower-cased input.
#[derive(Debug, Clone, Copy)]
pub struct Rule<B> {
    pub bucket: B,
    pub keywords: &'static [&'static str],
}

impl<B: Copy> Rule<B> {
    pub fn matches(&self, text: &str) -> bool {
        self.keywords.iter().any(|k| text.contains(k))
    }
}

/// Evaluated top to bottom; order is significant.
pub const AESTHETIC_RULES: &[Rule<Aesthetic>] = &[
    Rule {
        bucket: Aesthetic::Soft,
        keywords: &["soft", "gentle", "pastel", "dreamy", "cute"],
    },
    Rule {
        bucket: Aesthetic::Edgy,
        keywords: &["edgy", "dark", "bold", "rebel", "grunge"],
    },
    Rule {
        bucket: Aesthetic::Luxury,
        keywords: &["luxury", "elegant", "glam", "rich", "chic"],
    },
    Rule {
        bucket: Aesthetic::Natural,
        keywords: &["natural", "organic", "earth", "minimal", "raw"],
    },
    Rule {
        bucket: Aesthetic::Vibrant,
        keywords: &["vibrant", "color", "bright", "fun", "energetic"],
    },
];

pub const DEFAULT_AESTHETIC: Aesthetic = Aesthetic::Natural;

/// Evaluated top to bottom; order is significant.
pub const TONE_RULES: &[Rule<Tone>] = &[
    Rule {
        bucket: Tone::Playful,
        keywords: &["fun", "playful", "silly", "cute"],
    },
    Rule {
        bucket: Tone::Professional,
        keywords: &["professional", "expert", "authority", "business"],
    },
    Rule {
        bucket: Tone::Sassy,
        keywords: &["sassy", "bold", "confident", "fierce"],
    },
    Rule {
        bucket: Tone::Inspiring,
        keywords: &["inspiring", "motivat", "empower", "uplift"],
    },
    Rule {
        bucket: Tone::Mysterious,
        keywords: &["mysterious", "dark", "enigma", "artistic"],
    },
];

pub const DEFAULT_TONE: Tone = Tone::Playful;

/// Return the bucket of the first matching rule, or `fallback`.
pub fn first_match<B: Copy>(rules: &[Rule<B>], text: &str, fallback: B) -> B {
    rules
        .iter()
        .find(|rule| rule.matches(text))
        .map(|rule| rule.bucket)
        .unwrap_or(fallback)
}

fn descriptor_text(vibe: &str, traits: &str) -> String {
    format!("{vibe} {traits}").to_lowercase()
}

pub fn classify_aesthetic(vibe: &str, traits: &str) -> Aesthetic {
    first_match(
        AESTHETIC_RULES,
        &descriptor_text(vibe, traits),
        DEFAULT_AESTHETIC,
    )
}

pub fn classify_tone(vibe: &str, traits: &str) -> Tone {
    first_match(TONE_RULES, &descriptor_text(vibe, traits), DEFAULT_TONE)
}

/// Classify free-text descriptors into an aesthetic and a tone bucket.
///
/// Never fails: input that matches no rule lands in the default bucket.
pub fn classify(vibe: &str, traits: &str) -> (Aesthetic, Tone) {
    let aesthetic = classify_aesthetic(vibe, traits);
    let tone = classify_tone(vibe, traits);
    debug!(vibe, traits, %aesthetic, %tone, "classified descriptors");
    (aesthetic, tone)
}

impl Aesthetic {
    pub const ALL: [Aesthetic; 5] = [
        Aesthetic::Soft,
        Aesthetic::Edgy,
        Aesthetic::Luxury,
        Aesthetic::Natural,
        Aesthetic::Vibrant,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Aesthetic::Soft => "soft",
            Aesthetic::Edgy => "edgy",
            Aesthetic::Luxury => "luxury",
            Aesthetic::Natural => "natural",
            Aesthetic::Vibrant => "vibrant",
        }
    }
}

impl Tone {
    pub const ALL: [Tone; 5] = [
        Tone::Playful,
        Tone::Professional,
        Tone::Sassy,
        Tone::Inspiring,
        Tone::Mysterious,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Tone::Playful => "playful",
            Tone::Professional => "professional",
            Tone::Sassy => "sassy",
            Tone::Inspiring => "inspiring",
            Tone::Mysterious => "mysterious",
        }
    }
}

impl Niche {
    /// Match order for [`Niche::detect`].
    pub const ALL: [Niche; 6] = [
        Niche::Fitness,
        Niche::Fashion,
        Niche::Beauty,
        Niche::Lifestyle,
        Niche::Food,
        Niche::Travel,
    ];

    pub const DEFAULT: Niche = Niche::Lifestyle;

    pub fn as_str(&self) -> &'static str {
        match self {
            Niche::Fitness => "fitness",
            Niche::Fashion => "fashion",
            Niche::Beauty => "beauty",
            Niche::Lifestyle => "lifestyle",
            Niche::Food => "food",
            Niche::Travel => "travel",
        }
    }

    /// Case-insensitive substring match of the caller's niche text against
    /// the fixed vocabulary; first match wins, `lifestyle` otherwise.
    ///
    /// Every niche-keyed table goes through this one function.
    pub fn detect(niche: &str) -> Niche {
        let lowered = niche.to_lowercase();
        Self::ALL
            .into_iter()
            .find(|n| lowered.contains(n.as_str()))
            .unwrap_or(Self::DEFAULT)
    }
}

macro_rules! display_as_str {
    ($($ty:ty),*) => {
        $(impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        })*
    };
}

display_as_str!(Aesthetic, Tone, Niche);
