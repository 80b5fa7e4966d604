//! Persona imagery: a profile shot, a cover banner and two sample posts.

use std::time::Duration;

use async_trait::async_trait;
use idolforge_core::{ForgeConfig, ImageSet, Niche, Persona};
use reqwest::Client;
use serde_json::{json, Value};
use tracing::{info, warn};

use crate::error::CollabError;
use crate::http;

const SERVICE: &str = "replicate";
const ENV_VAR: &str = "REPLICATE_API_TOKEN";
pub const REPLICATE_API_URL: &str = "https://api.replicate.com";
pub const FLUX_MODEL: &str = "black-forest-labs/flux-schnell";

const PLACEHOLDER_NOTE: &str = "Mock images - set REPLICATE_API_TOKEN for real generation";

/// Source of persona images.
#[async_trait]
pub trait ImageGenerator: Send + Sync {
    async fn generate(&self, persona: &Persona) -> Result<ImageSet, CollabError>;

    /// `false` means [`generate`](Self::generate) would only produce placeholders.
    fn is_configured(&self) -> bool;
}

/// flux-schnell through Replicate's HTTP predictions API.
#[derive(Debug, Clone)]
pub struct ReplicateImages {
    client: Client,
    token: Option<String>,
    base_url: String,
    timeout: Duration,
}

impl ReplicateImages {
    pub fn new(config: &ForgeConfig) -> Self {
        Self {
            client: Client::new(),
            token: config.replicate_api_token.clone(),
            base_url: REPLICATE_API_URL.to_string(),
            timeout: config.collab_timeout,
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Render one prompt and return the first output URL.
    pub async fn render(&self, prompt: &str, aspect_ratio: &str) -> Result<String, CollabError> {
        let token = http::require_key(self.token.as_deref(), SERVICE, ENV_VAR)?;
        let request = self
            .client
            .post(format!("{}/v1/models/{FLUX_MODEL}/predictions", self.base_url))
            .bearer_auth(token)
            .header("Prefer", "wait")
            .json(&json!({
                "input": {
                    "prompt": prompt,
                    "aspect_ratio": aspect_ratio,
                    "output_format": "webp",
                    "output_quality": 90,
                }
            }));

        let body: Value = http::send(SERVICE, request, self.timeout)
            .await?
            .json()
            .await
            .map_err(|e| http::classify(SERVICE, self.timeout, e))?;

        first_output_url(&body).ok_or_else(|| CollabError::Response {
            service: SERVICE,
            detail: body
                .get("error")
                .and_then(Value::as_str)
                .unwrap_or("prediction returned no output")
                .to_string(),
        })
    }

    /// Individual failures become `None` rather than failing the set.
    async fn render_or_none(&self, prompt: String, aspect_ratio: &str) -> Option<String> {
        match self.render(&prompt, aspect_ratio).await {
            Ok(url) => Some(url),
            Err(e) => {
                warn!(aspect_ratio, error = %e, "image render failed");
                None
            }
        }
    }
}

#[async_trait]
impl ImageGenerator for ReplicateImages {
    async fn generate(&self, persona: &Persona) -> Result<ImageSet, CollabError> {
        http::require_key(self.token.as_deref(), SERVICE, ENV_VAR)?;
        info!(name = %persona.name, "generating persona images");

        // All four renders share one deadline in `Forge`, so none may wait on another.
        let (profile_image, cover_image, first, second) = futures::join!(
            self.render_or_none(profile_prompt(persona), "1:1"),
            self.render_or_none(cover_prompt(persona), "16:9"),
            self.render_or_none(post_prompt(persona, 0), "4:5"),
            self.render_or_none(post_prompt(persona, 1), "9:16"),
        );

        Ok(ImageSet {
            profile_image,
            cover_image,
            sample_posts: vec![first, second],
            model: Some(FLUX_MODEL.to_string()),
            note: None,
            error: None,
        })
    }

    fn is_configured(&self) -> bool {
        self.token.is_some()
    }
}

/// Flux returns either a list of URLs or a single URL.
fn first_output_url(body: &Value) -> Option<String> {
    match body.get("output")? {
        Value::Array(items) => items.first()?.as_str().map(str::to_string),
        Value::String(url) => Some(url.clone()),
        _ => None,
    }
}

pub fn profile_prompt(persona: &Persona) -> String {
    format!(
        "Professional portrait photograph of a {} influencer, {} aesthetic, {}, \
         high quality, professional photography, centered composition, \
         clean background, perfect lighting, magazine quality",
        persona.niche,
        persona.aesthetic_words[..3.min(persona.aesthetic_words.len())].join(", "),
        persona.styling_notes
    )
}

pub fn cover_prompt(persona: &Persona) -> String {
    format!(
        "Cinematic banner image for {} influencer, {} aesthetic, color palette: {}, \
         wide composition, dramatic lighting, professional photography, \
         lifestyle photography, aspirational, high-end",
        persona.niche,
        persona.aesthetic_words.join(", "),
        persona.colour_palette[..3.min(persona.colour_palette.len())].join(", ")
    )
}

pub fn post_prompt(persona: &Persona, index: usize) -> String {
    let scenes = post_scenes(persona.niche_bucket());
    format!(
        "{}, {} aesthetic, {}, professional photography, instagram-worthy, \
         high quality, natural lighting",
        scenes[index % scenes.len()],
        persona.aesthetic_words[..2.min(persona.aesthetic_words.len())].join(", "),
        persona.styling_notes
    )
}

fn post_scenes(niche: Niche) -> [&'static str; 2] {
    match niche {
        Niche::Beauty => ["makeup tutorial setup", "skincare products arranged aesthetically"],
        Niche::Fitness => ["workout in modern gym", "healthy meal prep layout"],
        Niche::Fashion => [
            "outfit of the day in urban setting",
            "fashion accessories flat lay",
        ],
        Niche::Lifestyle => ["morning routine scene", "aesthetic workspace setup"],
        Niche::Food => ["beautifully plated dish", "cooking process overhead shot"],
        Niche::Travel => ["scenic destination view", "travel essentials flat lay"],
    }
}

/// Deterministic stand-in images, flagged with a note on how to get real ones.
pub fn placeholder_images(persona: &Persona) -> ImageSet {
    ImageSet {
        profile_image: Some(format!(
            "https://via.placeholder.com/400x400/9d4edd/ffffff?text={}",
            persona.name.replacen(' ', "+", 1)
        )),
        cover_image: Some(format!(
            "https://via.placeholder.com/1200x400/1a1a1a/9d4edd?text={}+Cover",
            persona.niche
        )),
        sample_posts: vec![
            Some("https://via.placeholder.com/400x500/1a1a1a/9d4edd?text=Post+1".to_string()),
            Some("https://via.placeholder.com/400x711/1a1a1a/9d4edd?text=Post+2".to_string()),
        ],
        model: None,
        note: Some(PLACEHOLDER_NOTE.to_string()),
        error: None,
    }
}

/// [`ImageGenerator`] that never touches the network.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlaceholderImages;

#[async_trait]
impl ImageGenerator for PlaceholderImages {
    async fn generate(&self, persona: &Persona) -> Result<ImageSet, CollabError> {
        Ok(placeholder_images(persona))
    }

    fn is_configured(&self) -> bool {
        false
    }
}
