use std::sync::Arc;

use crate::core::config::SiteConfig;
use crate::features::antibot::BotCheck;
use crate::features::waitlist::{FormBackend, HttpFormBackend};

#[derive(Clone)]
pub struct AppState {
    pub http_client: reqwest::Client,
    pub config: SiteConfig,
    pub bot_check: BotCheck,
    /// Outbound seam for waitlist submissions; swapped for a stub in tests.
    pub form_backend: Arc<dyn FormBackend>,
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("form_endpoint", &self.config.form_endpoint.as_str())
            .field("min_dwell_ms", &self.config.min_dwell_ms)
            .finish()
    }
}

impl AppState {
    pub fn new(http_client: reqwest::Client) -> Self {
        let config = SiteConfig::from_env();
        Self::with_config(http_client, config)
    }

    pub fn with_config(http_client: reqwest::Client, config: SiteConfig) -> Self {
        let bot_check = BotCheck::new(config.min_dwell_ms);
        let form_backend: Arc<dyn FormBackend> = Arc::new(HttpFormBackend::new(
            http_client.clone(),
            config.form_endpoint.clone(),
        ));
        Self {
            http_client,
            config,
            bot_check,
            form_backend,
        }
    }

    pub fn with_form_backend(mut self, backend: Arc<dyn FormBackend>) -> Self {
        self.form_backend = backend;
        self
    }
}
