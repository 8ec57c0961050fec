use std::sync::Arc;

use debrief_extract::ExtractionClient;
use debrief_store::TranscriptStore;

use crate::env::Env;
use crate::error::ApiError;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<TranscriptStore>,
    extractor: Option<ExtractorConfig>,
    client: reqwest::Client,
}

#[derive(Clone)]
struct ExtractorConfig {
    base_url: String,
    api_key: Option<String>,
}

impl AppState {
    pub fn from_env(env: &Env) -> Self {
        let extractor = env.extractor_url.as_ref().map(|url| ExtractorConfig {
            base_url: url.trim_end_matches('/').to_string(),
            api_key: env.extractor_api_key.clone(),
        });

        Self {
            store: Arc::new(TranscriptStore::new(&env.data_dir)),
            extractor,
            client: reqwest::Client::new(),
        }
    }

    /// Extraction client, or a clear configuration error when the
    /// collaborator URL was never provided.
    pub fn extractor(&self) -> Result<ExtractionClient<ReqwestHttpClient>, ApiError> {
        let config = self.extractor.as_ref().ok_or_else(|| {
            ApiError::Internal(
                "extractor is not configured; set EXTRACTOR_URL in the environment".to_string(),
            )
        })?;

        Ok(ExtractionClient::new(ReqwestHttpClient {
            client: self.client.clone(),
            base_url: config.base_url.clone(),
            api_key: config.api_key.clone(),
        }))
    }
}

/// `debrief_http::HttpClient` backed by reqwest, rooted at the collaborator
/// base URL with optional bearer auth.
pub struct ReqwestHttpClient {
    client: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
}

impl ReqwestHttpClient {
    fn authorized(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.api_key {
            Some(key) => builder.bearer_auth(key),
            None => builder,
        }
    }
}

impl debrief_http::HttpClient for ReqwestHttpClient {
    async fn get(&self, path: &str) -> Result<Vec<u8>, debrief_http::Error> {
        let request = self.authorized(self.client.get(format!("{}{}", self.base_url, path)));
        let response = request.send().await?;
        let bytes = response.error_for_status()?.bytes().await?;
        Ok(bytes.to_vec())
    }

    async fn post(
        &self,
        path: &str,
        body: Vec<u8>,
        content_type: &str,
    ) -> Result<Vec<u8>, debrief_http::Error> {
        let request = self
            .authorized(self.client.post(format!("{}{}", self.base_url, path)))
            .header(reqwest::header::CONTENT_TYPE, content_type.to_string())
            .body(body);
        let response = request.send().await?;
        let bytes = response.error_for_status()?.bytes().await?;
        Ok(bytes.to_vec())
    }
}
