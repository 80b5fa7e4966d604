//! Full-length songs through a Suno-compatible API, with a mock fallback.

use std::path::PathBuf;
use std::time::Duration;

use idolforge_core::{write_lyrics, ForgeConfig, Persona};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::{info, warn};

use crate::error::CollabError;
use crate::http;

const SERVICE: &str = "suno";
const ENV_VAR: &str = "SUNO_API_KEY";

/// Song rendering waits for audio, so it gets a longer budget than other calls.
pub const COMPOSE_TIMEOUT: Duration = Duration::from_secs(120);
pub const MOCK_DURATION_SECS: u64 = 180;
pub const DEFAULT_INSTRUMENTAL_SECS: u64 = 120;
const MOCK_NOTE: &str = "Set SUNO_API_KEY to generate real audio";

/// A composed song, real or mock.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ComposedSong {
    pub id: String,
    pub title: String,
    pub genre: String,
    pub lyrics: String,
    pub audio_url: Option<String>,
    pub duration_secs: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
    #[serde(default)]
    pub mock: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl ComposedSong {
    pub fn mock(persona: &Persona, lyrics: &str, genre: &str) -> Self {
        Self {
            id: format!("mock-{}", uuid::Uuid::new_v4()),
            title: format!("{}'s Anthem", persona.name),
            genre: genre.to_string(),
            lyrics: lyrics.to_string(),
            audio_url: None,
            duration_secs: Some(MOCK_DURATION_SECS),
            path: None,
            mock: true,
            note: Some(MOCK_NOTE.to_string()),
        }
    }
}

#[derive(Debug, Deserialize)]
struct SongResponse {
    id: String,
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    audio_url: Option<String>,
    #[serde(default)]
    duration: Option<f64>,
}

/// Style line sent alongside lyrics.
pub fn style_prompt(persona: &Persona, genre: &str) -> String {
    format!("{genre} with {} energy", persona.tone_of_voice)
}

#[derive(Debug, Clone)]
pub struct SunoMusic {
    client: Client,
    api_key: Option<String>,
    base_url: String,
    output_dir: PathBuf,
}

impl SunoMusic {
    pub fn new(config: &ForgeConfig) -> Self {
        Self {
            client: Client::new(),
            api_key: config.suno_api_key.clone(),
            base_url: config.suno_api_url.clone(),
            output_dir: config.output_subdir("music"),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    /// Compose a song from `lyrics`. Never fails: an unconfigured service or
    /// a failed call yields a mock song.
    pub async fn compose(&self, persona: &Persona, lyrics: &str, genre: &str) -> ComposedSong {
        match self.try_compose(persona, lyrics, genre).await {
            Ok(song) => song,
            Err(e) => {
                if e.is_not_configured() {
                    info!("{e}; using mock song");
                } else {
                    warn!(error = %e, "song generation failed; using mock song");
                }
                ComposedSong::mock(persona, lyrics, genre)
            }
        }
    }

    /// Write lyrics for `theme`, then [`compose`](Self::compose) them.
    pub async fn compose_auto(&self, persona: &Persona, theme: &str, genre: &str) -> ComposedSong {
        let lyrics = write_lyrics(persona, theme);
        self.compose(persona, &lyrics, genre).await
    }

    /// Compose without the mock fallback. Audio is downloaded and saved when
    /// the service returns a URL.
    pub async fn try_compose(
        &self,
        persona: &Persona,
        lyrics: &str,
        genre: &str,
    ) -> Result<ComposedSong, CollabError> {
        let key = http::require_key(self.api_key.as_deref(), SERVICE, ENV_VAR)?;
        info!(name = %persona.name, genre, "composing song");

        let request = self
            .client
            .post(format!("{}/songs", self.base_url))
            .bearer_auth(key)
            .json(&json!({
                "lyrics": lyrics,
                "prompt": style_prompt(persona, genre),
                "genre": genre,
                "make_instrumental": false,
                "wait_audio": true,
            }));

        let song: SongResponse = http::send(SERVICE, request, COMPOSE_TIMEOUT)
            .await?
            .json()
            .await
            .map_err(|e| http::classify(SERVICE, COMPOSE_TIMEOUT, e))?;

        let path = match &song.audio_url {
            Some(url) => Some(self.download(persona, &song.id, url).await?),
            None => None,
        };

        Ok(ComposedSong {
            title: song
                .title
                .unwrap_or_else(|| format!("{}'s Anthem", persona.name)),
            genre: genre.to_string(),
            lyrics: lyrics.to_string(),
            audio_url: song.audio_url,
            duration_secs: song.duration.map(|d| d.round() as u64),
            path,
            mock: false,
            note: None,
            id: song.id,
        })
    }

    async fn download(&self, persona: &Persona, id: &str, url: &str) -> Result<PathBuf, CollabError> {
        let bytes = http::send(SERVICE, self.client.get(url), COMPOSE_TIMEOUT)
            .await?
            .bytes()
            .await
            .map_err(|e| http::classify(SERVICE, COMPOSE_TIMEOUT, e))?;

        let path = self
            .output_dir
            .join(format!("{}_{id}.mp3", persona.handle_slug()));
        http::save(&path, &bytes).await?;
        info!(path = %path.display(), "song saved");
        Ok(path)
    }

    /// Instrumental track with no lyrics. Returns the service's raw reply.
    pub async fn instrumental(
        &self,
        persona: &Persona,
        mood: &str,
        duration_secs: u64,
    ) -> Result<Value, CollabError> {
        let key = http::require_key(self.api_key.as_deref(), SERVICE, ENV_VAR)?;
        let request = self
            .client
            .post(format!("{}/songs", self.base_url))
            .bearer_auth(key)
            .json(&json!({
                "prompt": format!("Instrumental {}, {duration_secs} seconds", style_prompt(persona, mood)),
                "make_instrumental": true,
                "duration": duration_secs,
                "wait_audio": true,
            }));

        http::send(SERVICE, request, COMPOSE_TIMEOUT)
            .await?
            .json()
            .await
            .map_err(|e| http::classify(SERVICE, COMPOSE_TIMEOUT, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use idolforge_core::{build_persona, PersonaInput};
    use rand::rngs::mock::StepRng;
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn persona() -> Persona {
        build_persona(&PersonaInput::new("fun", "fitness"), &mut StepRng::new(0, 0))
    }

    fn configured(server: &MockServer, output: &std::path::Path) -> SunoMusic {
        let config = ForgeConfig {
            suno_api_key: Some("suno_test".into()),
            output_dir: output.to_path_buf(),
            ..ForgeConfig::default()
        };
        SunoMusic::new(&config).with_base_url(server.uri())
    }

    #[tokio::test]
    async fn test_unconfigured_compose_is_mock() {
        let music = SunoMusic::new(&ForgeConfig::default());
        let song = music.compose_auto(&persona(), "rise up", "electronic pop").await;

        assert!(song.mock);
        assert_eq!(song.title, "Luna Rose's Anthem");
        assert_eq!(song.duration_secs, Some(180));
        assert_eq!(song.note.as_deref(), Some("Set SUNO_API_KEY to generate real audio"));
        assert!(song.lyrics.contains("rise up running through my veins"));
        assert!(song.id.starts_with("mock-"));
    }

    #[tokio::test]
    async fn test_compose_downloads_audio() {
        let server = MockServer::start().await;
        let dir = tempfile::tempdir().unwrap();

        Mock::given(method("POST"))
            .and(path("/songs"))
            .and(header("authorization", "Bearer suno_test"))
            .and(body_partial_json(json!({
                "genre": "pop",
                "make_instrumental": false,
                "wait_audio": true,
                "prompt": "pop with fun, casual, uses emojis, conversational energy",
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": "song-1",
                "title": "Rise",
                "audio_url": format!("{}/audio/song-1.mp3", server.uri()),
                "duration": 181.6,
            })))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/audio/song-1.mp3"))
            .respond_with(ResponseTemplate::new(200).set_body_bytes(b"mp3".to_vec()))
            .mount(&server)
            .await;

        let song = configured(&server, dir.path())
            .try_compose(&persona(), "la la", "pop")
            .await
            .unwrap();

        assert!(!song.mock);
        assert_eq!(song.title, "Rise");
        assert_eq!(song.duration_secs, Some(182));
        let expected = dir.path().join("music").join("lunarose_song-1.mp3");
        assert_eq!(song.path.as_deref(), Some(expected.as_path()));
        assert_eq!(std::fs::read(expected).unwrap(), b"mp3");
    }

    #[tokio::test]
    async fn test_failed_call_falls_back_to_mock() {
        let server = MockServer::start().await;
        let dir = tempfile::tempdir().unwrap();
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(401))
            .mount(&server)
            .await;

        let song = configured(&server, dir.path())
            .compose(&persona(), "la la", "pop")
            .await;
        assert!(song.mock);
        assert_eq!(song.lyrics, "la la");
    }

    #[tokio::test]
    async fn test_instrumental_requires_key() {
        let music = SunoMusic::new(&ForgeConfig::default());
        let err = music
            .instrumental(&persona(), "chill", DEFAULT_INSTRUMENTAL_SECS)
            .await
            .unwrap_err();
        assert!(err.is_not_configured());
    }

    #[tokio::test]
    async fn test_instrumental_passes_duration() {
        let server = MockServer::start().await;
        let dir = tempfile::tempdir().unwrap();
        Mock::given(method("POST"))
            .and(body_partial_json(json!({"make_instrumental": true, "duration": 90})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "inst-1"})))
            .mount(&server)
            .await;

        let reply = configured(&server, dir.path())
            .instrumental(&persona(), "chill", 90)
            .await
            .unwrap();
        assert_eq!(reply["id"], "inst-1");
    }
}
