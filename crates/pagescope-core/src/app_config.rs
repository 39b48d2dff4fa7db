use std::path::PathBuf;

#[derive(Clone)]
pub struct AppConfig {
    pub access_token: String,
    pub graph_base_url: String,
    pub graph_version: String,
    pub request_timeout_secs: u64,
    pub user_agent: String,
    pub post_limit: u32,
    pub max_retries: u32,
    pub retry_backoff_base_ms: u64,
    pub output_path: PathBuf,
    pub log_level: String,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("access_token", &"[redacted]")
            .field("graph_base_url", &self.graph_base_url)
            .field("graph_version", &self.graph_version)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("user_agent", &self.user_agent)
            .field("post_limit", &self.post_limit)
            .field("max_retries", &self.max_retries)
            .field("retry_backoff_base_ms", &self.retry_backoff_base_ms)
            .field("output_path", &self.output_path)
            .field("log_level", &self.log_level)
            .finish()
    }
}
