pub mod lyrics;
pub mod music;
pub mod mythos;
pub mod persona;
pub mod posts;

pub use lyrics::write_lyrics;
pub use music::generate_song;
pub use mythos::generate_mythos;
pub use persona::{build_persona, PersonaInput};
pub use posts::generate_posts;

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::CoreError;
use crate::model::GenerationResult;

pub const DEFAULT_PLATFORMS: [&str; 3] = ["instagram", "tiktok", "x"];
pub const DEFAULT_GENRE_MOOD: &str = "pop upbeat";
pub const DEFAULT_POST_COUNT: usize = 5;
/// Upper bound on posts per request.
pub const MAX_POST_COUNT: usize = 100;

/// Input to a generation call. Field names match the HTTP body.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRequest {
    #[serde(default)]
    pub vibe: String,
    #[serde(default)]
    pub niche: String,
    #[serde(default)]
    pub traits: String,
    #[serde(default = "default_platforms")]
    pub platforms: Vec<String>,
    #[serde(default)]
    pub image_description: Option<String>,
    #[serde(default)]
    pub include_music: bool,
    #[serde(default = "default_true")]
    pub include_mythos: bool,
    #[serde(default = "default_true")]
    pub include_images: bool,
    #[serde(default = "default_genre_mood")]
    pub genre_mood: String,
    #[serde(default = "default_post_count")]
    pub post_count: usize,
}

fn default_platforms() -> Vec<String> {
    DEFAULT_PLATFORMS.iter().map(|p| p.to_string()).collect()
}

fn default_true() -> bool {
    true
}

fn default_genre_mood() -> String {
    DEFAULT_GENRE_MOOD.to_string()
}

fn default_post_count() -> usize {
    DEFAULT_POST_COUNT
}

impl GenerateRequest {
    pub fn new(vibe: impl Into<String>, niche: impl Into<String>) -> Self {
        Self {
            vibe: vibe.into(),
            niche: niche.into(),
            traits: String::new(),
            platforms: default_platforms(),
            image_description: None,
            include_music: false,
            include_mythos: true,
            include_images: true,
            genre_mood: default_genre_mood(),
            post_count: DEFAULT_POST_COUNT,
        }
    }

    pub fn with_traits(mut self, traits: impl Into<String>) -> Self {
        self.traits = traits.into();
        self
    }

    pub fn with_platforms<I, S>(mut self, platforms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.platforms = platforms.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_image_description(mut self, description: impl Into<String>) -> Self {
        self.image_description = Some(description.into());
        self
    }

    pub fn with_music(mut self, genre_mood: impl Into<String>) -> Self {
        self.include_music = true;
        self.genre_mood = genre_mood.into();
        self
    }

    pub fn with_mythos(mut self, include: bool) -> Self {
        self.include_mythos = include;
        self
    }

    pub fn with_images(mut self, include: bool) -> Self {
        self.include_images = include;
        self
    }

    pub fn with_post_count(mut self, count: usize) -> Self {
        self.post_count = count;
        self
    }

    /// Both `vibe` and `niche` must be present and non-blank, and
    /// `post_count` may not exceed [`MAX_POST_COUNT`].
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.vibe.trim().is_empty() || self.niche.trim().is_empty() {
            return Err(CoreError::MissingFields(
                "vibe and niche are required".to_string(),
            ));
        }
        if self.post_count > MAX_POST_COUNT {
            return Err(CoreError::InvalidRequest(format!(
                "postCount must be at most {MAX_POST_COUNT}, got {}",
                self.post_count
            )));
        }
        Ok(())
    }

    pub fn persona_input(&self) -> PersonaInput<'_> {
        PersonaInput {
            vibe: &self.vibe,
            niche: &self.niche,
            traits: &self.traits,
            image_description: self.image_description.as_deref(),
        }
    }
}

/// Run the synchronous pipeline: persona, posts, then optional mythos and
/// song. `images` is always left empty here; the async orchestrator in
/// `idolforge-collab` fills it.
pub fn generate<R: Rng + ?Sized>(
    request: &GenerateRequest,
    rng: &mut R,
) -> Result<GenerationResult, CoreError> {
    request.validate()?;

    let persona = build_persona(&request.persona_input(), rng);
    let posts = generate_posts(&persona, request.platforms.as_slice(), request.post_count, rng);
    let mythos = request
        .include_mythos
        .then(|| generate_mythos(&persona, rng));
    let music = request
        .include_music
        .then(|| generate_song(&persona, &request.genre_mood, rng));

    info!(
        name = %persona.name,
        niche = %persona.niche,
        posts = posts.len(),
        mythos = mythos.is_some(),
        music = music.is_some(),
        "generated influencer"
    );

    Ok(GenerationResult {
        persona,
        posts,
        mythos,
        images: None,
        music,
    })
}

/// [`generate`] with the thread-local random source.
pub fn create_influencer(request: &GenerateRequest) -> Result<GenerationResult, CoreError> {
    generate(request, &mut rand::thread_rng())
}

pub(crate) fn pick<R: Rng + ?Sized>(rng: &mut R, items: &[&'static str]) -> &'static str {
    items.choose(rng).copied().unwrap_or_default()
}

/// Replace each `{key}` in `template` with its value in a single pass;
/// substituted text is never rescanned. Unknown keys are left as is.
pub(crate) fn fill(template: &str, vars: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let hit = after.find('}').and_then(|close| {
            let key = &after[..close];
            vars.iter()
                .find(|(k, _)| *k == key)
                .map(|(_, value)| (close, *value))
        });
        match hit {
            Some((close, value)) => {
                out.push_str(value);
                rest = &after[close + 1..];
            }
            None => {
                out.push('{');
                rest = after;
            }
        }
    }
    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::Niche;
    use crate::tables;
    use rand::rngs::mock::StepRng;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_request_defaults_from_minimal_json() {
        let req: GenerateRequest =
            serde_json::from_str(r#"{"vibe":"soft","niche":"beauty"}"#).unwrap();
        assert_eq!(req.platforms, vec!["instagram", "tiktok", "x"]);
        assert_eq!(req.traits, "");
        assert!(!req.include_music);
        assert!(req.include_mythos);
        assert!(req.include_images);
        assert_eq!(req.genre_mood, "pop upbeat");
        assert_eq!(req.post_count, 5);
        assert_eq!(req, GenerateRequest::new("soft", "beauty"));
    }

    #[test]
    fn test_missing_niche_is_validation_error() {
        let req = GenerateRequest::new("soft", "");
        let err = generate(&req, &mut StepRng::new(0, 0)).unwrap_err();
        assert!(err.is_validation());
        assert_eq!(
            err.to_string(),
            "Missing required fields: vibe and niche are required"
        );
    }

    #[test]
    fn test_oversized_post_count_is_rejected() {
        let req = GenerateRequest::new("soft", "beauty").with_post_count(usize::MAX);
        let err = generate(&req, &mut StepRng::new(0, 0)).unwrap_err();
        assert!(err.is_validation());
        assert!(err.to_string().starts_with("Invalid request: postCount must be at most 100"));

        let req = GenerateRequest::new("soft", "beauty").with_post_count(MAX_POST_COUNT);
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_blank_vibe_is_validation_error() {
        let req = GenerateRequest::new("   ", "beauty");
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_end_to_end_beauty_scenario() {
        let req = GenerateRequest::new("soft dreamy pastel", "beauty")
            .with_platforms(["instagram"])
            .with_post_count(2)
            .with_mythos(true)
            .with_images(false);
        let result = create_influencer(&req).unwrap();

        assert_eq!(result.persona.style, "soft with playful energy");
        assert_eq!(result.posts.len(), 2);
        assert!(result.posts.iter().all(|p| p.platform == "instagram"));

        let mythos = result.mythos.expect("mythos requested");
        let pool: Vec<String> = tables::mythos::taglines(Niche::Beauty)
            .iter()
            .map(|t| fill(t, &[("name", &result.persona.name)]))
            .collect();
        assert!(pool.contains(&mythos.tagline), "{}", mythos.tagline);
        assert!(result.images.is_none());
        assert!(result.music.is_none());
    }

    #[test]
    fn test_optional_sections_follow_flags() {
        let req = GenerateRequest::new("bold", "fitness")
            .with_mythos(false)
            .with_music("hip-hop energetic");
        let result = generate(&req, &mut StepRng::new(0, 0)).unwrap();
        assert!(result.mythos.is_none());
        assert_eq!(
            result.music.map(|s| s.title),
            Some("Stronger Every Day".to_string())
        );
    }

    #[test]
    fn test_same_seed_same_output() {
        let req = GenerateRequest::new("luxury glam", "fashion").with_music("pop");
        let a = generate(&req, &mut StdRng::seed_from_u64(42)).unwrap();
        let b = generate(&req, &mut StdRng::seed_from_u64(42)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_result_omits_absent_sections() {
        let req = GenerateRequest::new("soft", "beauty").with_mythos(false);
        let result = generate(&req, &mut StepRng::new(0, 0)).unwrap();
        let json = serde_json::to_value(&result).unwrap();
        assert!(json.get("mythos").is_none());
        assert!(json.get("images").is_none());
        assert!(json.get("music").is_none());
        assert!(json["persona"]["colour_palette"].is_array());
    }

    #[test]
    fn test_fill_replaces_every_occurrence() {
        assert_eq!(
            fill("{name} & {name} do {niche}", &[("name", "Ada"), ("niche", "food")]),
            "Ada & Ada do food"
        );
    }

    #[test]
    fn test_fill_does_not_rescan_substituted_text() {
        assert_eq!(
            fill("{niche} | {vibe}", &[("niche", "{vibe} lovers"), ("vibe", "soft")]),
            "{vibe} lovers | soft"
        );
        assert_eq!(fill("{{name} {other}", &[("name", "Ada")]), "{Ada {other}");
    }
}
