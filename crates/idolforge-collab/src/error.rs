use thiserror::Error;

#[derive(Error, Debug)]
pub enum CollabError {
    #[error("{service} is not configured: set {env_var}")]
    NotConfigured {
        service: &'static str,
        env_var: &'static str,
    },

    #[error("{service} request failed: {source}")]
    Http {
        service: &'static str,
        #[source]
        source: reqwest::Error,
    },

    #[error("{service} returned status {status}: {body}")]
    Status {
        service: &'static str,
        status: u16,
        body: String,
    },

    #[error("{service} timed out after {secs}s")]
    Timeout { service: &'static str, secs: u64 },

    #[error("Unexpected response from {service}: {detail}")]
    Response {
        service: &'static str,
        detail: String,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl CollabError {
    pub fn is_not_configured(&self) -> bool {
        matches!(self, Self::NotConfigured { .. })
    }
}
