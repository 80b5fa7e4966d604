//! Persona, post, mythos and lyric generation for synthetic influencers.
//!
//! Everything in this crate is synchronous and free of I/O. Random picks go
//! through a caller-supplied [`rand::Rng`] so tests can pin them;
//! [`create_influencer`] uses the thread-local generator.
//!
//! # Example
//! ```
//! use idolforge_core::{create_influencer, GenerateRequest};
//!
//! let request = GenerateRequest::new("soft dreamy pastel", "beauty")
//!     .with_platforms(["instagram"])
//!     .with_post_count(2);
//! let result = create_influencer(&request).unwrap();
//! assert_eq!(result.persona.style, "soft with playful energy");
//! assert_eq!(result.posts.len(), 2);
//! ```

pub mod classify;
pub mod config;
pub mod error;
pub mod generate;
pub mod model;
pub mod tables;

pub use classify::{classify, Aesthetic, Niche, Tone};
pub use config::{Availability, ForgeConfig};
pub use error::CoreError;
pub use generate::{
    build_persona, create_influencer, generate, generate_mythos, generate_posts, generate_song,
    write_lyrics, GenerateRequest, PersonaInput,
};
pub use model::{
    GenerationResult, ImageSet, Journey, Mythos, Persona, Platform, Post, SignatureElements, Song,
};
