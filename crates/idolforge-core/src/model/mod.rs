pub mod images;
pub mod mythos;
pub mod persona;
pub mod post;
pub mod song;

pub use images::ImageSet;
pub use mythos::{Journey, Mythos, SignatureElements};
pub use persona::Persona;
pub use post::{Platform, Post};
pub use song::Song;

use serde::{Deserialize, Serialize};

/// Everything produced for one generation request.
///
/// `images` is filled by the image collaborator (or its placeholder) and is
/// opaque to the core.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GenerationResult {
    pub persona: Persona,
    pub posts: Vec<Post>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mythos: Option<Mythos>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub images: Option<ImageSet>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub music: Option<Song>,
}
