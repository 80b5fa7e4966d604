use serde::{Deserialize, Serialize};

/// Template-only song bundle. See `idolforge_collab::music` for the path
/// that writes full lyrics and calls an audio service.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Song {
    pub title: String,
    pub concept: String,
    pub hook_lyrics: String,
    pub verse_lyrics: String,
}
