//! Lenient request body for `POST /api/generate`. Browser forms send flags
//! and counts as strings and platforms as a comma-separated list.

use idolforge_core::generate::{DEFAULT_GENRE_MOOD, DEFAULT_PLATFORMS, DEFAULT_POST_COUNT};
use idolforge_core::GenerateRequest;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum Platforms {
    List(Vec<String>),
    Csv(String),
}

impl Platforms {
    fn into_vec(self) -> Vec<String> {
        match self {
            Self::List(list) => list,
            Self::Csv(csv) => csv.split(',').map(|p| p.trim().to_string()).collect(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum Flag {
    Bool(bool),
    Text(String),
}

impl Flag {
    /// Opt-in flags: only `true` or `"true"` turn them on.
    fn opted_in(flag: Option<&Flag>) -> bool {
        match flag {
            Some(Flag::Bool(b)) => *b,
            Some(Flag::Text(s)) => s == "true",
            None => false,
        }
    }

    /// Opt-out flags: on unless literally `false`.
    fn not_opted_out(flag: Option<&Flag>) -> bool {
        !matches!(flag, Some(Flag::Bool(false)))
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum Count {
    Number(f64),
    Text(String),
}

impl Count {
    /// Non-positive or unparsable counts fall back to the default. Oversized
    /// counts saturate and are rejected by `GenerateRequest::validate`.
    fn resolve(count: Option<&Count>) -> usize {
        let parsed = match count {
            Some(Count::Number(n)) => Some(n.trunc()),
            Some(Count::Text(s)) => leading_integer(s),
            None => None,
        };
        match parsed {
            Some(n) if n >= 1.0 => n as usize,
            _ => DEFAULT_POST_COUNT,
        }
    }
}

/// Integer prefix of `s`, so `"3 posts"` reads as 3.
fn leading_integer(s: &str) -> Option<f64> {
    let s = s.trim_start();
    let sign_len = usize::from(s.starts_with(['-', '+']));
    let digits = s[sign_len..].chars().take_while(char::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }
    s[..sign_len + digits].parse::<f64>().ok()
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GenerateBody {
    pub vibe: Option<String>,
    pub niche: Option<String>,
    pub traits: Option<String>,
    pub platforms: Option<Platforms>,
    pub image_description: Option<String>,
    pub include_music: Option<Flag>,
    pub include_mythos: Option<Flag>,
    pub include_images: Option<Flag>,
    pub genre_mood: Option<String>,
    pub post_count: Option<Count>,
}

impl From<GenerateBody> for GenerateRequest {
    fn from(body: GenerateBody) -> Self {
        let non_empty = |s: Option<String>| s.filter(|v| !v.is_empty());
        GenerateRequest {
            include_music: Flag::opted_in(body.include_music.as_ref()),
            include_mythos: Flag::not_opted_out(body.include_mythos.as_ref()),
            include_images: Flag::not_opted_out(body.include_images.as_ref()),
            post_count: Count::resolve(body.post_count.as_ref()),
            vibe: body.vibe.unwrap_or_default(),
            niche: body.niche.unwrap_or_default(),
            traits: body.traits.unwrap_or_default(),
            platforms: body.platforms.map(Platforms::into_vec).unwrap_or_else(|| {
                DEFAULT_PLATFORMS.iter().map(|p| p.to_string()).collect()
            }),
            image_description: non_empty(body.image_description),
            genre_mood: non_empty(body.genre_mood).unwrap_or_else(|| DEFAULT_GENRE_MOOD.to_string()),
        }
    }
}
