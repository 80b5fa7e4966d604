//! Third-party collaborators (images, voice, music audio, chat assistant)
//! and the async [`Forge`] orchestrator built on top of `idolforge-core`.
//!
//! Every collaborator is gated on its API key in [`ForgeConfig`]. When a key
//! is missing or a call fails, callers get a flagged placeholder instead of an
//! error wherever a placeholder makes sense.

pub mod assistant;
pub mod autonomous;
pub mod error;
pub mod forge;
mod http;
pub mod image;
pub mod music;
pub mod voice;

pub use assistant::{AgentSession, ChatAssistant, Engagement};
pub use autonomous::{AutonomousInfluencer, AutonomousOptions, Autopilot, CycleReport};
pub use error::CollabError;
pub use forge::Forge;
pub use image::{placeholder_images, ImageGenerator, PlaceholderImages, ReplicateImages};
pub use music::{ComposedSong, SunoMusic};
pub use voice::{ElevenLabsVoice, VoiceClip};

pub use idolforge_core::ForgeConfig;
