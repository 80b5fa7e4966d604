//! In-character chat assistant over OpenAI chat completions.
//!
//! The conversation lives in a local [`AgentSession`]; every call sends the
//! persona instructions plus the full history.

use std::time::Duration;

use chrono::{DateTime, Utc};
use idolforge_core::{ForgeConfig, Mythos, Persona};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::info;

use crate::error::CollabError;
use crate::http;

const SERVICE: &str = "openai";
const ENV_VAR: &str = "OPENAI_API_KEY";
pub const OPENAI_API_URL: &str = "https://api.openai.com/v1";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    fn new(role: &str, content: impl Into<String>) -> Self {
        Self {
            role: role.to_string(),
            content: content.into(),
        }
    }
}

/// One persona's running conversation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentSession {
    pub id: String,
    pub name: String,
    pub handle: String,
    pub instructions: String,
    pub messages: Vec<ChatMessage>,
    pub created_at: DateTime<Utc>,
}

impl AgentSession {
    pub fn new(persona: &Persona, mythos: &Mythos) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            name: persona.name.clone(),
            handle: persona.handle.clone(),
            instructions: persona_instructions(persona, mythos),
            messages: Vec::new(),
            created_at: Utc::now(),
        }
    }

    fn request_messages(&self) -> Vec<ChatMessage> {
        std::iter::once(ChatMessage::new("system", self.instructions.as_str()))
            .chain(self.messages.iter().cloned())
            .collect()
    }
}

/// Something a follower did that deserves a reply.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Engagement {
    /// e.g. "commented", "sent a DM".
    pub kind: String,
    pub content: String,
    pub follower_name: Option<String>,
}

/// System prompt that keeps the model in character.
pub fn persona_instructions(persona: &Persona, mythos: &Mythos) -> String {
    let aesthetic = persona.aesthetic_words.join(", ");
    format!(
        "You are {name} ({handle}), an AI influencer with a unique personality and perspective.

CORE IDENTITY:
- Bio: {bio}
- Niche: {niche}
- Tone: {tone}
- Aesthetic: {aesthetic}

YOUR STORY (Mythos):
- Tagline: \"{tagline}\"
- Origin: {origin}
- Philosophy: {philosophy}
- Manifesto: {manifesto}

PERSONALITY TRAITS:
{styling}

CONTENT STYLE:
- Use colors: {palette}
- Maintain aesthetic: {aesthetic}
- Always stay in character
- Be authentic to your philosophy
- Engage meaningfully with followers

CAPABILITIES:
1. Generate content ideas that align with your niche and personality
2. Write captions, hooks, and posts for social media
3. Respond to comments and DMs in your unique voice
4. Analyze content performance and suggest improvements
5. Plan content strategy based on audience engagement
6. Maintain consistency across all platforms

REMEMBER: You are not an AI assistant - you ARE {name}. Think, speak, and create as this influencer would.",
        name = persona.name,
        handle = persona.handle,
        bio = persona.bio,
        niche = persona.niche,
        tone = persona.tone_of_voice,
        tagline = mythos.tagline,
        origin = mythos.origin_story,
        philosophy = mythos.core_philosophy,
        manifesto = mythos.manifesto,
        styling = persona.styling_notes,
        palette = persona.colour_palette.join(", "),
    )
}

#[derive(Debug, Clone)]
pub struct ChatAssistant {
    client: Client,
    api_key: Option<String>,
    base_url: String,
    model: String,
    timeout: Duration,
}

impl ChatAssistant {
    pub fn new(config: &ForgeConfig) -> Self {
        Self {
            client: Client::new(),
            api_key: config.openai_api_key.clone(),
            base_url: OPENAI_API_URL.to_string(),
            model: config.openai_model.clone(),
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

    /// Start a session for `persona`. Fails fast when no key is configured so
    /// callers can report the assistant as unavailable.
    pub fn create_session(&self, persona: &Persona, mythos: &Mythos) -> Result<AgentSession, CollabError> {
        http::require_key(self.api_key.as_deref(), SERVICE, ENV_VAR)?;
        let session = AgentSession::new(persona, mythos);
        info!(session = %session.id, name = %session.name, "assistant session created");
        Ok(session)
    }

    /// Send `message` and return the reply. Both are appended to the session
    /// only when the call succeeds.
    pub async fn chat(&self, session: &mut AgentSession, message: &str) -> Result<String, CollabError> {
        let key = http::require_key(self.api_key.as_deref(), SERVICE, ENV_VAR)?;

        let mut messages = session.request_messages();
        messages.push(ChatMessage::new("user", message));

        let request = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(key)
            .json(&json!({
                "model": self.model,
                "messages": messages,
            }));

        let body: Value = http::send(SERVICE, request, self.timeout)
            .await?
            .json()
            .await
            .map_err(|e| http::classify(SERVICE, self.timeout, e))?;

        let reply = body["choices"][0]["message"]["content"]
            .as_str()
            .ok_or_else(|| CollabError::Response {
                service: SERVICE,
                detail: "no message content in completion".to_string(),
            })?
            .to_string();

        session.messages.push(ChatMessage::new("user", message));
        session.messages.push(ChatMessage::new("assistant", reply.as_str()));
        Ok(reply)
    }

    pub async fn generate_content(&self, session: &mut AgentSession, prompt: &str) -> Result<String, CollabError> {
        let message = format!(
            "Generate social media content based on this request: {prompt}

Provide:
1. A compelling concept
2. An engaging caption/hook
3. 5-10 relevant hashtags
4. A call-to-action

Stay true to your personality, aesthetic, and philosophy."
        );
        self.chat(session, &message).await
    }

    pub async fn analyze_performance(
        &self,
        session: &mut AgentSession,
        performance: &Value,
    ) -> Result<String, CollabError> {
        let data = serde_json::to_string_pretty(performance).unwrap_or_else(|_| performance.to_string());
        let message = format!(
            "Analyze this content performance data and suggest improvements:

{data}

Provide:
1. What worked well
2. What didn't work
3. Specific recommendations for future content
4. Adjustments to content strategy

Stay true to your brand while optimizing for engagement."
        );
        self.chat(session, &message).await
    }

    pub async fn plan_strategy(&self, session: &mut AgentSession, duration: &str) -> Result<String, CollabError> {
        let message = format!(
            "Create a {duration} content strategy that:

1. Aligns with your niche and philosophy
2. Maximizes engagement potential
3. Maintains aesthetic consistency
4. Balances different content types
5. Optimizes posting times

Provide a detailed content calendar with specific post ideas."
        );
        self.chat(session, &message).await
    }

    pub async fn respond_to_engagement(
        &self,
        session: &mut AgentSession,
        engagement: &Engagement,
    ) -> Result<String, CollabError> {
        let addressee = match &engagement.follower_name {
            Some(name) => format!("you would to {name}"),
            None => "yourself".to_string(),
        };
        let message = format!(
            "A follower {}: \"{}\"

Generate an authentic response that:
1. Stays in character
2. Builds relationship with the follower
3. Encourages further engagement
4. Reflects your personality and values

Respond as {addressee}.",
            engagement.kind, engagement.content
        );
        self.chat(session, &message).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use idolforge_core::{build_persona, generate_mythos, PersonaInput};
    use rand::rngs::mock::StepRng;
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn persona_and_mythos() -> (Persona, Mythos) {
        let persona = build_persona(&PersonaInput::new("luxury", "fashion"), &mut StepRng::new(0, 0));
        let mythos = generate_mythos(&persona, &mut StepRng::new(0, 0));
        (persona, mythos)
    }

    fn configured(server: &MockServer) -> ChatAssistant {
        let config = ForgeConfig {
            openai_api_key: Some("sk-test".into()),
            ..ForgeConfig::default()
        };
        ChatAssistant::new(&config).with_base_url(server.uri())
    }

    fn completion(content: &str) -> ResponseTemplate {
        ResponseTemplate::new(200).set_body_json(json!({
            "choices": [{"message": {"role": "assistant", "content": content}}]
        }))
    }

    #[test]
    fn test_instructions_embed_persona_and_mythos() {
        let (persona, mythos) = persona_and_mythos();
        let text = persona_instructions(&persona, &mythos);
        assert!(text.starts_with("You are Luna Rose (@lunarose)"));
        assert!(text.contains("- Tagline: \"Luna Rose: Style is a language\""));
        assert!(text.contains("- Use colors: #C9A063, #000000, #FFFFFF, #8B7355, #DAA520"));
        assert!(text.ends_with("you ARE Luna Rose. Think, speak, and create as this influencer would."));
    }

    #[test]
    fn test_session_requires_key() {
        let (persona, mythos) = persona_and_mythos();
        let assistant = ChatAssistant::new(&ForgeConfig::default());
        assert!(assistant.create_session(&persona, &mythos).unwrap_err().is_not_configured());
    }

    #[tokio::test]
    async fn test_chat_sends_history_and_records_reply() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .and(header("authorization", "Bearer sk-test"))
            .and(body_partial_json(json!({"model": "gpt-4o-mini"})))
            .respond_with(completion("hey besties"))
            .mount(&server)
            .await;

        let (persona, mythos) = persona_and_mythos();
        let assistant = configured(&server);
        let mut session = assistant.create_session(&persona, &mythos).unwrap();

        let reply = assistant.chat(&mut session, "hello").await.unwrap();
        assert_eq!(reply, "hey besties");
        assert_eq!(session.messages.len(), 2);
        assert_eq!(session.messages[1].role, "assistant");

        assistant.chat(&mut session, "again").await.unwrap();
        let requests = server.received_requests().await.unwrap();
        let last: Value = serde_json::from_slice(&requests[1].body).unwrap();
        // system + two prior turns + new user message
        assert_eq!(last["messages"].as_array().unwrap().len(), 4);
        assert_eq!(last["messages"][0]["role"], "system");
    }

    #[tokio::test]
    async fn test_failed_chat_leaves_session_untouched() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(429).set_body_string("rate limited"))
            .mount(&server)
            .await;

        let (persona, mythos) = persona_and_mythos();
        let assistant = configured(&server);
        let mut session = assistant.create_session(&persona, &mythos).unwrap();

        let err = assistant.chat(&mut session, "hello").await.unwrap_err();
        assert!(err.to_string().contains("rate limited"));
        assert!(session.messages.is_empty());
    }

    #[tokio::test]
    async fn test_engagement_prompt_names_follower() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(completion("thank you!"))
            .mount(&server)
            .await;

        let (persona, mythos) = persona_and_mythos();
        let assistant = configured(&server);
        let mut session = assistant.create_session(&persona, &mythos).unwrap();
        let engagement = Engagement {
            kind: "commented".into(),
            content: "love this look".into(),
            follower_name: Some("Sam".into()),
        };

        assistant
            .respond_to_engagement(&mut session, &engagement)
            .await
            .unwrap();
        let prompt = &session.messages[0].content;
        assert!(prompt.starts_with("A follower commented: \"love this look\""));
        assert!(prompt.ends_with("Respond as you would to Sam."));
    }
}
