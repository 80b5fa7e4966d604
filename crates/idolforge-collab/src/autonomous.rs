//! Long-running influencer: an assistant session plus whichever media
//! collaborators are available, driven in content cycles.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use idolforge_core::{ForgeConfig, ImageSet, Mythos, Persona};
use rand::seq::SliceRandom;
use serde::Serialize;
use tracing::{info, warn};

use crate::assistant::{AgentSession, ChatAssistant};
use crate::image::{ImageGenerator, ReplicateImages};
use crate::music::{ComposedSong, SunoMusic};
use crate::voice::{ElevenLabsVoice, VoiceClip};

pub const DEFAULT_CYCLE_PAUSE: Duration = Duration::from_secs(2);
const CYCLE_PROMPT: &str = "engaging social media";

/// Which capabilities to set up. All on by default.
#[derive(Debug, Clone)]
pub struct AutonomousOptions {
    pub include_agent: bool,
    pub include_images: bool,
    pub include_voice: bool,
    pub include_music: bool,
    pub genre_mood: String,
}

impl Default for AutonomousOptions {
    fn default() -> Self {
        Self {
            include_agent: true,
            include_images: true,
            include_voice: true,
            include_music: true,
            genre_mood: "electronic pop".to_string(),
        }
    }
}

/// A capability that was requested: either set up, or why not.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Capability<T> {
    Active(T),
    Unavailable { reason: String },
}

impl<T> Capability<T> {
    pub fn active(&self) -> Option<&T> {
        match self {
            Self::Active(value) => Some(value),
            Self::Unavailable { .. } => None,
        }
    }

    fn label(&self) -> &'static str {
        match self {
            Self::Active(_) => "active",
            Self::Unavailable { .. } => "unavailable",
        }
    }
}

/// `None` means the capability was not requested.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Capabilities {
    pub agent: Option<Capability<AgentSession>>,
    pub images: Option<Capability<ImageSet>>,
    pub voice: Option<Capability<VoiceClip>>,
    pub music: Option<Capability<ComposedSong>>,
}

#[derive(Debug, Clone, Serialize)]
pub struct AutonomousInfluencer {
    pub persona: Persona,
    pub mythos: Mythos,
    pub capabilities: Capabilities,
}

impl AutonomousInfluencer {
    pub fn status(&self) -> InfluencerStatus {
        let label = |c: Option<&'static str>| c.unwrap_or("unavailable");
        let caps = &self.capabilities;
        InfluencerStatus {
            name: self.persona.name.clone(),
            handle: self.persona.handle.clone(),
            agent: label(caps.agent.as_ref().map(Capability::label)),
            voice: label(caps.voice.as_ref().map(Capability::label)),
            music: label(caps.music.as_ref().map(Capability::label)),
            images: label(caps.images.as_ref().map(Capability::label)),
            session_id: caps
                .agent
                .as_ref()
                .and_then(Capability::active)
                .map(|s| s.id.clone()),
        }
    }

    fn session_mut(&mut self) -> Option<&mut AgentSession> {
        match self.capabilities.agent.as_mut()? {
            Capability::Active(session) => Some(session),
            Capability::Unavailable { .. } => None,
        }
    }

    fn sample_images(&self) -> Vec<&str> {
        self.capabilities
            .images
            .as_ref()
            .and_then(Capability::active)
            .map(|set| set.available_samples().collect())
            .unwrap_or_default()
    }

    fn has_voice(&self) -> bool {
        matches!(self.capabilities.voice, Some(Capability::Active(_)))
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct InfluencerStatus {
    pub name: String,
    pub handle: String,
    pub agent: &'static str,
    pub voice: &'static str,
    pub music: &'static str,
    pub images: &'static str,
    pub session_id: Option<String>,
}

/// One piece of content produced in a cycle.
#[derive(Debug, Clone, Serialize)]
pub struct AutonomousContent {
    pub timestamp: DateTime<Utc>,
    pub persona: String,
    pub text: Option<String>,
    pub voice_path: Option<PathBuf>,
    pub suggested_image: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Cycle {
    pub cycle: usize,
    pub content: AutonomousContent,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CycleReport {
    pub influencer: String,
    pub total_cycles: usize,
    pub cycles: Vec<Cycle>,
    pub content_generated: usize,
    pub voice_generated: usize,
    pub agent_active: bool,
}

/// Drives an [`AutonomousInfluencer`] with the configured collaborators.
pub struct Autopilot {
    assistant: ChatAssistant,
    images: Arc<dyn ImageGenerator>,
    voice: ElevenLabsVoice,
    music: SunoMusic,
    cycle_pause: Duration,
}

impl Autopilot {
    pub fn new(config: &ForgeConfig) -> Self {
        Self {
            assistant: ChatAssistant::new(config),
            images: Arc::new(ReplicateImages::new(config)),
            voice: ElevenLabsVoice::new(config),
            music: SunoMusic::new(config),
            cycle_pause: DEFAULT_CYCLE_PAUSE,
        }
    }

    pub fn with_parts(
        assistant: ChatAssistant,
        images: Arc<dyn ImageGenerator>,
        voice: ElevenLabsVoice,
        music: SunoMusic,
    ) -> Self {
        Self {
            assistant,
            images,
            voice,
            music,
            cycle_pause: DEFAULT_CYCLE_PAUSE,
        }
    }

    pub fn with_cycle_pause(mut self, pause: Duration) -> Self {
        self.cycle_pause = pause;
        self
    }

    /// Set up every requested capability. Failures are recorded as
    /// `Unavailable` and never abort the others.
    pub async fn create_autonomous_influencer(
        &self,
        persona: Persona,
        mythos: Mythos,
        options: &AutonomousOptions,
    ) -> AutonomousInfluencer {
        info!(name = %persona.name, "creating autonomous influencer");
        let mut capabilities = Capabilities::default();

        if options.include_agent {
            capabilities.agent = Some(match self.assistant.create_session(&persona, &mythos) {
                Ok(mut session) => {
                    let greeting = format!(
                        "Hello! I am {}. Let's start creating amazing content together.",
                        persona.name
                    );
                    if let Err(e) = self.assistant.chat(&mut session, &greeting).await {
                        warn!(error = %e, "assistant greeting failed");
                    }
                    Capability::Active(session)
                }
                Err(e) => unavailable("agent", e),
            });
        }

        if options.include_images {
            capabilities.images = Some(match self.images.generate(&persona).await {
                Ok(set) if set.profile_image.is_some() => Capability::Active(set),
                Ok(set) => Capability::Unavailable {
                    reason: set
                        .note
                        .or(set.error)
                        .unwrap_or_else(|| "no profile image produced".to_string()),
                },
                Err(e) => unavailable("images", e),
            });
        }

        if options.include_voice {
            capabilities.voice = Some(match self.voice.intro(&persona, &mythos).await {
                Ok(clip) => Capability::Active(clip),
                Err(e) => unavailable("voice", e),
            });
        }

        if options.include_music {
            let theme = if mythos.tagline.is_empty() {
                format!("{} anthem", persona.niche)
            } else {
                mythos.tagline.clone()
            };
            let song = self
                .music
                .compose_auto(&persona, &theme, &options.genre_mood)
                .await;
            capabilities.music = Some(Capability::Active(song));
        }

        AutonomousInfluencer {
            persona,
            mythos,
            capabilities,
        }
    }

    /// Ask the agent for a post, narrate it if voice is available, and
    /// suggest one of the sample images.
    pub async fn generate_autonomous_content(
        &self,
        influencer: &mut AutonomousInfluencer,
        prompt: &str,
    ) -> AutonomousContent {
        let message = format!(
            "Generate a {prompt} post that aligns with my personality and brand. Provide: concept, caption, and call-to-action."
        );

        let text = match influencer.session_mut() {
            Some(session) => match self.assistant.chat(session, &message).await {
                Ok(reply) => Some(reply),
                Err(e) => {
                    warn!(error = %e, "agent content generation failed");
                    None
                }
            },
            None => None,
        };

        let mut voice_path = None;
        if let (Some(text), true) = (&text, influencer.has_voice()) {
            match self.voice.narrate(&influencer.persona, text).await {
                Ok(clip) => voice_path = clip.path,
                Err(e) => warn!(error = %e, "narration failed"),
            }
        }

        let suggested_image = influencer
            .sample_images()
            .choose(&mut rand::thread_rng())
            .map(|url| url.to_string());

        AutonomousContent {
            timestamp: Utc::now(),
            persona: influencer.persona.name.clone(),
            text,
            voice_path,
            suggested_image,
        }
    }

    /// Run `count` content cycles, pausing between them.
    pub async fn run_cycles(&self, influencer: &mut AutonomousInfluencer, count: usize) -> CycleReport {
        let mut cycles = Vec::with_capacity(count);
        for index in 0..count {
            info!(cycle = index + 1, total = count, "running content cycle");
            let content = self.generate_autonomous_content(influencer, CYCLE_PROMPT).await;
            cycles.push(Cycle {
                cycle: index + 1,
                content,
                timestamp: Utc::now(),
            });
            if index + 1 < count {
                tokio::time::sleep(self.cycle_pause).await;
            }
        }

        CycleReport {
            influencer: influencer.persona.name.clone(),
            total_cycles: count,
            content_generated: cycles.len(),
            voice_generated: cycles.iter().filter(|c| c.content.voice_path.is_some()).count(),
            agent_active: matches!(influencer.capabilities.agent, Some(Capability::Active(_))),
            cycles,
        }
    }
}

fn unavailable<T>(what: &str, err: crate::error::CollabError) -> Capability<T> {
    if err.is_not_configured() {
        info!(capability = what, "{err}");
    } else {
        warn!(capability = what, error = %err, "capability unavailable");
    }
    Capability::Unavailable {
        reason: err.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image::PlaceholderImages;
    use idolforge_core::{build_persona, generate_mythos, PersonaInput};
    use rand::rngs::mock::StepRng;
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn persona_and_mythos() -> (Persona, Mythos) {
        let persona = build_persona(&PersonaInput::new("vibrant", "travel"), &mut StepRng::new(0, 0));
        let mythos = generate_mythos(&persona, &mut StepRng::new(0, 0));
        (persona, mythos)
    }

    #[tokio::test]
    async fn test_nothing_configured_reports_unavailable() {
        let autopilot = Autopilot::new(&ForgeConfig::default()).with_cycle_pause(Duration::ZERO);
        let (persona, mythos) = persona_and_mythos();
        let mut influencer = autopilot
            .create_autonomous_influencer(persona, mythos, &AutonomousOptions::default())
            .await;

        let status = influencer.status();
        assert_eq!(status.agent, "unavailable");
        assert_eq!(status.voice, "unavailable");
        assert_eq!(status.images, "unavailable");
        // music always falls back to a mock song
        assert_eq!(status.music, "active");
        assert!(status.session_id.is_none());

        let report = autopilot.run_cycles(&mut influencer, 2).await;
        assert_eq!(report.total_cycles, 2);
        assert_eq!(report.content_generated, 2);
        assert_eq!(report.voice_generated, 0);
        assert!(!report.agent_active);
        assert!(report.cycles.iter().all(|c| c.content.text.is_none()));
    }

    #[tokio::test]
    async fn test_skipped_capabilities_are_absent() {
        let autopilot = Autopilot::new(&ForgeConfig::default());
        let (persona, mythos) = persona_and_mythos();
        let options = AutonomousOptions {
            include_agent: false,
            include_images: false,
            include_voice: false,
            include_music: false,
            ..AutonomousOptions::default()
        };
        let influencer = autopilot
            .create_autonomous_influencer(persona, mythos, &options)
            .await;
        let json = serde_json::to_value(&influencer.capabilities).unwrap();
        assert!(json["agent"].is_null());
        assert!(json["music"].is_null());
    }

    #[tokio::test]
    async fn test_cycle_with_agent_and_placeholder_images() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "choices": [{"message": {"content": "Sunset at the hidden cove"}}]
            })))
            .mount(&server)
            .await;

        let config = ForgeConfig {
            openai_api_key: Some("sk-test".into()),
            ..ForgeConfig::default()
        };
        let autopilot = Autopilot::with_parts(
            ChatAssistant::new(&config).with_base_url(server.uri()),
            Arc::new(PlaceholderImages),
            ElevenLabsVoice::new(&config),
            SunoMusic::new(&config),
        )
        .with_cycle_pause(Duration::ZERO);

        let (persona, mythos) = persona_and_mythos();
        let options = AutonomousOptions {
            include_music: false,
            ..AutonomousOptions::default()
        };
        let mut influencer = autopilot
            .create_autonomous_influencer(persona, mythos, &options)
            .await;
        assert_eq!(influencer.status().agent, "active");
        assert_eq!(influencer.status().images, "active");

        let content = autopilot
            .generate_autonomous_content(&mut influencer, "travel tip")
            .await;
        assert_eq!(content.text.as_deref(), Some("Sunset at the hidden cove"));
        assert!(content
            .suggested_image
            .is_some_and(|url| url.starts_with("https://via.placeholder.com/")));
        assert!(content.voice_path.is_none());

        let session = influencer.capabilities.agent.as_ref().and_then(Capability::active).unwrap();
        // greeting + one content request, each with a reply
        assert_eq!(session.messages.len(), 4);
    }
}
