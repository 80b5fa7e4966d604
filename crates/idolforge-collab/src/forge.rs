use std::sync::Arc;

use idolforge_core::{
    create_influencer, Availability, CoreError, ForgeConfig, GenerateRequest, GenerationResult,
    ImageSet, Persona,
};
use tracing::{debug, info, warn};

use crate::image::{placeholder_images, ImageGenerator, ReplicateImages};

/// Async generation pipeline: the core generators plus the image
/// collaborator, with placeholder fallback.
pub struct Forge {
    config: ForgeConfig,
    images: Arc<dyn ImageGenerator>,
}

impl Forge {
    pub fn new(config: ForgeConfig) -> Self {
        let images = Arc::new(ReplicateImages::new(&config));
        Self { config, images }
    }

    pub fn with_images(mut self, images: Arc<dyn ImageGenerator>) -> Self {
        self.images = images;
        self
    }

    pub fn availability(&self) -> Availability {
        self.config.availability()
    }

    /// Generate a full result for `request`.
    ///
    /// Only validation errors escape; image failures are folded into a
    /// placeholder set that carries the error message.
    pub async fn create_influencer(
        &self,
        request: &GenerateRequest,
    ) -> Result<GenerationResult, CoreError> {
        let mut result = create_influencer(request)?;

        if request.include_images {
            result.images = Some(self.images_for(&result.persona).await);
        }

        info!(
            name = %result.persona.name,
            images = result.images.is_some(),
            "influencer ready"
        );
        Ok(result)
    }

    async fn images_for(&self, persona: &Persona) -> ImageSet {
        if !self.images.is_configured() {
            debug!("image generator not configured; using placeholders");
            return placeholder_images(persona);
        }

        let timeout = self.config.collab_timeout;
        match tokio::time::timeout(timeout, self.images.generate(persona)).await {
            Ok(Ok(set)) if set.profile_image.is_some() => set,
            Ok(Ok(set)) => {
                warn!("image generation produced no profile image; using placeholders");
                ImageSet {
                    error: set.error.or(Some("no profile image produced".to_string())),
                    ..placeholder_images(persona)
                }
            }
            Ok(Err(e)) if e.is_not_configured() => placeholder_images(persona),
            Ok(Err(e)) => {
                warn!(error = %e, "image generation failed; using placeholders");
                ImageSet {
                    error: Some(e.to_string()),
                    ..placeholder_images(persona)
                }
            }
            Err(_) => {
                warn!(secs = timeout.as_secs(), "image generation timed out; using placeholders");
                ImageSet {
                    error: Some(format!("image generation timed out after {}s", timeout.as_secs())),
                    ..placeholder_images(persona)
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CollabError;
    use crate::image::PlaceholderImages;
    use async_trait::async_trait;
    use serde_json::json;
    use std::time::Duration;
    use wiremock::matchers::method;
    use wiremock::{Mock, MockServer, ResponseTemplate};

    struct Failing;

    #[async_trait]
    impl ImageGenerator for Failing {
        async fn generate(&self, _persona: &Persona) -> Result<ImageSet, CollabError> {
            Err(CollabError::Status {
                service: "replicate",
                status: 500,
                body: "down".into(),
            })
        }

        fn is_configured(&self) -> bool {
            true
        }
    }

    struct Slow;

    #[async_trait]
    impl ImageGenerator for Slow {
        async fn generate(&self, persona: &Persona) -> Result<ImageSet, CollabError> {
            tokio::time::sleep(Duration::from_secs(30)).await;
            Ok(placeholder_images(persona))
        }

        fn is_configured(&self) -> bool {
            true
        }
    }

    struct Unconfigured;

    #[async_trait]
    impl ImageGenerator for Unconfigured {
        async fn generate(&self, _persona: &Persona) -> Result<ImageSet, CollabError> {
            Err(CollabError::Response {
                service: "test",
                detail: "should not be called".into(),
            })
        }

        fn is_configured(&self) -> bool {
            false
        }
    }

    fn request() -> GenerateRequest {
        GenerateRequest::new("soft dreamy pastel", "beauty").with_platforms(["instagram"])
    }

    #[tokio::test]
    async fn test_unconfigured_images_fall_back_to_placeholders() {
        let forge = Forge::new(ForgeConfig::default());
        let result = forge.create_influencer(&request()).await.unwrap();
        let images = result.images.unwrap();
        assert!(images.is_placeholder());
        assert!(images.error.is_none());
        assert!(result.mythos.is_some());
    }

    #[tokio::test]
    async fn test_failure_is_reported_on_placeholder() {
        let forge = Forge::new(ForgeConfig::default()).with_images(Arc::new(Failing));
        let images = forge.create_influencer(&request()).await.unwrap().images.unwrap();
        assert!(images.is_placeholder());
        assert!(images.error.unwrap().contains("down"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_slow_images_time_out() {
        let config = ForgeConfig {
            collab_timeout: Duration::from_secs(1),
            ..ForgeConfig::default()
        };
        let forge = Forge::new(config).with_images(Arc::new(Slow));
        let images = forge.create_influencer(&request()).await.unwrap().images.unwrap();
        assert_eq!(images.error.as_deref(), Some("image generation timed out after 1s"));
    }

    #[tokio::test]
    async fn test_unconfigured_generator_is_not_called() {
        let forge = Forge::new(ForgeConfig::default()).with_images(Arc::new(Unconfigured));
        let images = forge.create_influencer(&request()).await.unwrap().images.unwrap();
        assert!(images.is_placeholder());
        assert!(images.error.is_none());
    }

    #[tokio::test]
    async fn test_slow_renders_share_the_deadline() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"output": ["https://img.example/one.webp"]}))
                    .set_delay(Duration::from_millis(900)),
            )
            .expect(4)
            .mount(&server)
            .await;

        let config = ForgeConfig {
            replicate_api_token: Some("r8_test".into()),
            collab_timeout: Duration::from_secs(2),
            ..ForgeConfig::default()
        };
        let images = ReplicateImages::new(&config).with_base_url(server.uri());
        let forge = Forge::new(config).with_images(Arc::new(images));

        let images = forge.create_influencer(&request()).await.unwrap().images.unwrap();
        assert!(images.error.is_none(), "{:?}", images.error);
        assert_eq!(images.profile_image.as_deref(), Some("https://img.example/one.webp"));
        assert_eq!(images.available_samples().count(), 2);
    }

    #[tokio::test]
    async fn test_images_skipped_when_not_requested() {
        let forge = Forge::new(ForgeConfig::default()).with_images(Arc::new(PlaceholderImages));
        let result = forge
            .create_influencer(&request().with_images(false))
            .await
            .unwrap();
        assert!(result.images.is_none());
    }

    #[tokio::test]
    async fn test_validation_error_escapes() {
        let forge = Forge::new(ForgeConfig::default());
        let err = forge
            .create_influencer(&GenerateRequest::new("", "beauty"))
            .await
            .unwrap_err();
        assert!(err.is_validation());
    }
}
