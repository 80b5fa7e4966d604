use serde::{Deserialize, Serialize};

/// One platform-tailored content unit.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Post {
    /// Caller's platform identifier, verbatim.
    pub platform: String,
    pub concept: String,
    pub visual_idea: String,
    pub alt_text: String,
    pub hook: String,
    pub caption: String,
    pub hashtags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub music_suggestion: Option<String>,
}

/// Post shape selected from a platform identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    X,
    TikTok,
    Instagram,
    OnlyFans,
}

impl Platform {
    /// Case-insensitive. Anything unrecognized gets the Instagram shape
    /// rather than an error.
    pub fn from_name(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "x" | "twitter" => Platform::X,
            "tiktok" => Platform::TikTok,
            "onlyfans" => Platform::OnlyFans,
            _ => Platform::Instagram,
        }
    }

    /// Character cap on captions, if the platform has one.
    pub fn caption_limit(&self) -> Option<usize> {
        match self {
            Platform::X => Some(280),
            _ => None,
        }
    }
}
