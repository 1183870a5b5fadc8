mod client;
pub(crate) mod types;

use anyhow::{anyhow, Result};

use client::OpenAiClient;

/// OpenAI chat agent. Holds credentials and model configuration; a fresh
/// `reqwest` client is built per call via [`OpenAi::client`].
#[derive(Clone)]
pub struct OpenAi {
    api_key: String,
    model: String,
    temperature: f32,
    max_tokens: u32,
    base_url: Option<String>,
}

impl OpenAi {
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: model.into(),
            temperature: 0.7,
            max_tokens: 2000,
            base_url: None,
        }
    }

    pub fn from_env(model: impl Into<String>) -> Result<Self> {
        let api_key = std::env::var("OPENAI_API_KEY")
            .map_err(|_| anyhow!("OPENAI_API_KEY environment variable not set"))?;
        Ok(Self::new(api_key, model))
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn client(&self) -> OpenAiClient {
        let client = OpenAiClient::new(&self.api_key);
        if let Some(ref url) = self.base_url {
            client.with_base_url(url)
        } else {
            client
        }
    }

    /// Simple chat completion: system prompt + user prompt, text back.
    pub async fn chat_completion(
        &self,
        system: impl Into<String>,
        user: impl Into<String>,
    ) -> Result<String> {
        let request = types::ChatRequest {
            model: self.model.clone(),
            messages: vec![
                types::WireMessage::system(system),
                types::WireMessage::user(user),
            ],
            temperature: Some(self.temperature),
            max_tokens: Some(self.max_tokens),
        };

        let response = self.client().chat(&request).await?;

        response
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .ok_or_else(|| anyhow!("No response from OpenAI"))
    }
}
