use serde::{Deserialize, Serialize};

/// Image URLs for a persona, as returned by the image collaborator or its
/// placeholder responder.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ImageSet {
    pub profile_image: Option<String>,
    pub cover_image: Option<String>,
    /// `None` entries are individual generations that failed.
    #[serde(default)]
    pub sample_posts: Vec<Option<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    /// Set on placeholder results: how to enable real generation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ImageSet {
    pub fn is_placeholder(&self) -> bool {
        self.note.is_some()
    }

    /// Sample post URLs that actually resolved.
    pub fn available_samples(&self) -> impl Iterator<Item = &str> {
        self.sample_posts.iter().filter_map(|s| s.as_deref())
    }
}
