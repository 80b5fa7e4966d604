//! ElevenLabs text-to-speech for persona intros and post narration.

use std::path::{Path, PathBuf};
use std::time::Duration;

use idolforge_core::{ForgeConfig, Mythos, Persona, Post, Tone};
use reqwest::Client;
use serde::Serialize;
use serde_json::json;
use tracing::info;

use crate::error::CollabError;
use crate::http;

const SERVICE: &str = "elevenlabs";
const ENV_VAR: &str = "ELEVENLABS_API_KEY";
pub const ELEVENLABS_API_URL: &str = "https://api.elevenlabs.io";
pub const VOICE_MODEL: &str = "eleven_multilingual_v2";

/// Rough speaking rate used for duration estimates.
const CHARS_PER_SECOND: usize = 15;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct VoiceSettings {
    pub stability: f32,
    pub similarity_boost: f32,
    pub style: f32,
    pub use_speaker_boost: bool,
}

impl VoiceSettings {
    const fn new(stability: f32, similarity_boost: f32, style: f32) -> Self {
        Self {
            stability,
            similarity_boost,
            style,
            use_speaker_boost: true,
        }
    }

    pub fn for_tone(tone: Tone) -> Self {
        match tone {
            Tone::Playful => Self::new(0.4, 0.8, 0.7),
            Tone::Professional => Self::new(0.75, 0.7, 0.4),
            Tone::Mysterious => Self::new(0.6, 0.5, 0.6),
            // confident
            Tone::Sassy => Self::new(0.7, 0.8, 0.6),
            // warm
            Tone::Inspiring => Self::new(0.6, 0.7, 0.5),
        }
    }
}

/// Pick a stock voice from name-length parity and aesthetic words.
pub fn select_voice(persona: &Persona) -> &'static str {
    let feminine = persona.name.chars().count() % 2 == 0;
    let words = persona.aesthetic_words.join(" ").to_lowercase();

    let kind = if words.contains("energetic") || words.contains("vibrant") {
        "energetic"
    } else if words.contains("warm") || words.contains("gentle") {
        "warm"
    } else {
        "confident"
    };

    match (feminine, kind) {
        (true, "warm") => "21m00Tcm4TlvDq8ikWAM",
        (true, "energetic") => "AZnzlk1XvdvUeBnXmlld",
        (true, _) => "EXAVITQu4vr4xnSDxMaL",
        (false, "warm") => "VR6AewLTigWG4xSOukaG",
        (false, "energetic") => "pNInz6obpgDQGcFmaJgB",
        (false, _) => "TxGEqnHWrfWFTfGW9XjX",
    }
}

/// A synthesized clip. `audio` holds the MP3 bytes and is not serialized.
#[derive(Debug, Clone, Serialize)]
pub struct VoiceClip {
    pub voice_id: String,
    pub settings: VoiceSettings,
    pub text: String,
    pub duration_secs: u64,
    pub format: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
    #[serde(skip)]
    pub audio: Vec<u8>,
}

pub fn estimate_duration_secs(text: &str) -> u64 {
    text.chars().count().div_ceil(CHARS_PER_SECOND) as u64
}

#[derive(Debug, Clone)]
pub struct ElevenLabsVoice {
    client: Client,
    api_key: Option<String>,
    base_url: String,
    output_dir: PathBuf,
    timeout: Duration,
}

impl ElevenLabsVoice {
    pub fn new(config: &ForgeConfig) -> Self {
        Self {
            client: Client::new(),
            api_key: config.elevenlabs_api_key.clone(),
            base_url: ELEVENLABS_API_URL.to_string(),
            output_dir: config.output_subdir("voice"),
            timeout: config.collab_timeout,
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    /// Synthesize `text` in the persona's voice, saving to `path` if given.
    pub async fn speak(
        &self,
        persona: &Persona,
        text: &str,
        path: Option<&Path>,
    ) -> Result<VoiceClip, CollabError> {
        let key = http::require_key(self.api_key.as_deref(), SERVICE, ENV_VAR)?;
        let voice_id = select_voice(persona);
        let settings = VoiceSettings::for_tone(persona.tone);

        info!(name = %persona.name, voice_id, chars = text.len(), "synthesizing voice");

        let request = self
            .client
            .post(format!("{}/v1/text-to-speech/{voice_id}", self.base_url))
            .header("xi-api-key", key)
            .header("accept", "audio/mpeg")
            .json(&json!({
                "text": text,
                "model_id": VOICE_MODEL,
                "voice_settings": settings,
            }));

        let audio = http::send(SERVICE, request, self.timeout)
            .await?
            .bytes()
            .await
            .map_err(|e| http::classify(SERVICE, self.timeout, e))?
            .to_vec();

        if let Some(path) = path {
            http::save(path, &audio).await?;
            info!(path = %path.display(), "voice saved");
        }

        Ok(VoiceClip {
            voice_id: voice_id.to_string(),
            settings,
            text: text.to_string(),
            duration_secs: estimate_duration_secs(text),
            format: "mp3",
            path: path.map(Path::to_path_buf),
            audio,
        })
    }

    /// Spoken introduction built from the persona's mythos.
    pub async fn intro(&self, persona: &Persona, mythos: &Mythos) -> Result<VoiceClip, CollabError> {
        let text = intro_text(persona, mythos);
        let path = self
            .output_dir
            .join(format!("{}_intro.mp3", persona.handle_slug()));
        self.speak(persona, &text, Some(&path)).await
    }

    /// Narrate a post: its caption, else its hook, else its concept.
    pub async fn narrate_post(&self, persona: &Persona, post: &Post) -> Result<VoiceClip, CollabError> {
        let text = [&post.caption, &post.hook, &post.concept]
            .into_iter()
            .find(|s| !s.is_empty())
            .map(String::as_str)
            .unwrap_or_default();
        self.narrate(persona, text).await
    }

    /// Narrate free text into the per-post output directory.
    pub async fn narrate(&self, persona: &Persona, text: &str) -> Result<VoiceClip, CollabError> {
        let path = self.output_dir.join("posts").join(format!(
            "{}_{}.mp3",
            persona.handle_slug(),
            chrono::Utc::now().timestamp_millis()
        ));
        self.speak(persona, text, Some(&path)).await
    }
}

pub fn intro_text(persona: &Persona, mythos: &Mythos) -> String {
    format!(
        "Hi, I'm {}. {}\n{}",
        persona.name, mythos.tagline, mythos.core_philosophy
    )
}
