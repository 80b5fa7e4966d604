use std::path::PathBuf;
use std::time::Duration;

use serde::Serialize;

use crate::error::CoreError;

pub const DEFAULT_SUNO_API_URL: &str = "https://api.suno.ai/v1";
pub const DEFAULT_OPENAI_MODEL: &str = "gpt-4o-mini";
pub const DEFAULT_OUTPUT_DIR: &str = "./output";
pub const DEFAULT_COLLAB_TIMEOUT_SECS: u64 = 60;
pub const DEFAULT_PORT: u16 = 3000;

/// Process-wide settings, read once at startup and handed to every
/// collaborator. API keys that are unset or blank are `None`.
#[derive(Debug, Clone, PartialEq)]
pub struct ForgeConfig {
    pub replicate_api_token: Option<String>,
    pub elevenlabs_api_key: Option<String>,
    pub suno_api_key: Option<String>,
    pub suno_api_url: String,
    pub openai_api_key: Option<String>,
    pub openai_model: String,
    pub output_dir: PathBuf,
    pub collab_timeout: Duration,
    pub port: u16,
}

impl Default for ForgeConfig {
    fn default() -> Self {
        Self {
            replicate_api_token: None,
            elevenlabs_api_key: None,
            suno_api_key: None,
            suno_api_url: DEFAULT_SUNO_API_URL.to_string(),
            openai_api_key: None,
            openai_model: DEFAULT_OPENAI_MODEL.to_string(),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            collab_timeout: Duration::from_secs(DEFAULT_COLLAB_TIMEOUT_SECS),
            port: DEFAULT_PORT,
        }
    }
}

impl ForgeConfig {
    /// Read settings from the process environment.
    pub fn from_env() -> Result<Self, CoreError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read settings through `lookup`, which maps a variable name to its value.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, CoreError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();

        Ok(Self {
            replicate_api_token: get("REPLICATE_API_TOKEN"),
            elevenlabs_api_key: get("ELEVENLABS_API_KEY"),
            suno_api_key: get("SUNO_API_KEY"),
            suno_api_url: get("SUNO_API_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or(defaults.suno_api_url),
            openai_api_key: get("OPENAI_API_KEY"),
            openai_model: get("OPENAI_MODEL").unwrap_or(defaults.openai_model),
            output_dir: get("IDOLFORGE_OUTPUT_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.output_dir),
            collab_timeout: match get("IDOLFORGE_COLLAB_TIMEOUT_SECS") {
                Some(raw) => Duration::from_secs(parse_var("IDOLFORGE_COLLAB_TIMEOUT_SECS", &raw)?),
                None => defaults.collab_timeout,
            },
            port: match get("PORT") {
                Some(raw) => parse_var("PORT", &raw)?,
                None => defaults.port,
            },
        })
    }

    pub fn availability(&self) -> Availability {
        Availability {
            images: self.replicate_api_token.is_some(),
            voice: self.elevenlabs_api_key.is_some(),
            music: self.suno_api_key.is_some(),
            assistant: self.openai_api_key.is_some(),
        }
    }

    /// Directory a collaborator writes its files under, e.g. `voice` or `music`.
    pub fn output_subdir(&self, kind: &str) -> PathBuf {
        self.output_dir.join(kind)
    }
}

fn parse_var<T: std::str::FromStr>(key: &str, raw: &str) -> Result<T, CoreError> {
    raw.trim()
        .parse()
        .map_err(|_| CoreError::Config(format!("{key} has an invalid value: {raw:?}")))
}

/// Which collaborators have credentials configured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Availability {
    pub images: bool,
    pub voice: bool,
    pub music: bool,
    pub assistant: bool,
}

impl Availability {
    pub fn any(&self) -> bool {
        self.images || self.voice || self.music || self.assistant
    }
}
