use std::sync::OnceLock;

use serde::Deserialize;

fn default_port() -> u16 {
    4400
}

fn default_data_dir() -> String {
    "data/transcriptions".to_string()
}

fn default_media_dir() -> String {
    "public/media".to_string()
}

fn default_fallback_media_id() -> String {
    "test-media".to_string()
}

#[derive(Deserialize)]
pub struct Env {
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_data_dir")]
    pub data_dir: String,
    #[serde(default = "default_media_dir")]
    pub media_dir: String,
    #[serde(default = "default_fallback_media_id")]
    pub fallback_media_id: String,
    /// Base URL of the fact-extraction collaborator. Generation requests
    /// fail with a configuration error when unset.
    #[serde(default)]
    pub extractor_url: Option<String>,
    #[serde(default)]
    pub extractor_api_key: Option<String>,
    #[serde(default)]
    pub sentry_dsn: Option<String>,
}

static ENV: OnceLock<Env> = OnceLock::new();

pub fn env() -> &'static Env {
    ENV.get_or_init(|| {
        let _ = dotenvy::dotenv();
        envy::from_env().expect("Failed to load environment")
    })
}
