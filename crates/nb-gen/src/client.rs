use crate::config::GeminiConfig;
use crate::credential::Credential;
use crate::error::GenerationError;
use crate::request::{GeneratedImage, GenerationRequest};
use crate::wire::GenerateContentResponse;
use async_trait::async_trait;

/// Anything that can turn a prompt (plus reference images) into an image.
///
/// One call, one external request: implementations must not retry.
#[async_trait]
pub trait ImageGenerator: Send + Sync {
    async fn generate(
        &self,
        credential: &Credential,
        request: &GenerationRequest,
    ) -> Result<GeneratedImage, GenerationError>;
}

/// [`ImageGenerator`] backed by the Gemini `generateContent` REST endpoint.
#[derive(Debug, Clone)]
pub struct GeminiClient {
    http: reqwest::Client,
    config: GeminiConfig,
}

impl GeminiClient {
    pub fn new(config: GeminiConfig) -> Result<Self, GenerationError> {
        let http = reqwest::Client::builder().timeout(config.timeout()).build()?;
        Ok(Self { http, config })
    }

    pub fn config(&self) -> &GeminiConfig {
        &self.config
    }
}

#[async_trait]
impl ImageGenerator for GeminiClient {
    async fn generate(
        &self,
        credential: &Credential,
        request: &GenerationRequest,
    ) -> Result<GeneratedImage, GenerationError> {
        let url = self.config.endpoint();
        log::debug!(
            "generate: {} source image(s), prompt '{}'",
            request.sources.len(),
            request.prompt.chars().take(50).collect::<String>()
        );

        let response = self
            .http
            .post(&url)
            .header("x-goog-api-key", credential.expose())
            .json(&request.to_wire())
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GenerationError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let bytes = response.bytes().await?;
        let body: GenerateContentResponse = serde_json::from_slice(&bytes)?;
        let image = body.first_inline_image().ok_or(GenerationError::NoImage)?;

        log::debug!(
            "generate: received {} ({} base64 chars)",
            image.mime_type,
            image.data.len()
        );
        Ok(GeneratedImage { image })
    }
}
