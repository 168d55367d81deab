/// Default FFmpeg server address shown before the user edits it.
pub const DEFAULT_FFMPEG_URL: &str = "http://your-ffmpeg-server:port";

/// Default n8n instance address shown before the user edits it.
pub const DEFAULT_N8N_URL: &str = "http://your-n8n-server:5678";

/// The two user-editable endpoints substituted into the prompt.
///
/// Values are free-form: no URL validation or escaping is applied, and empty
/// strings are accepted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndpointConfig {
    ffmpeg_url: String,
    n8n_url: String,
}

impl EndpointConfig {
    pub fn new(ffmpeg_url: impl Into<String>, n8n_url: impl Into<String>) -> Self {
        Self { ffmpeg_url: ffmpeg_url.into(), n8n_url: n8n_url.into() }
    }

    pub fn ffmpeg_url(&self) -> &str {
        &self.ffmpeg_url
    }

    pub fn n8n_url(&self) -> &str {
        &self.n8n_url
    }

    /// Replace the FFmpeg server endpoint.
    pub fn set_ffmpeg_url(&mut self, value: impl Into<String>) {
        self.ffmpeg_url = value.into();
    }

    /// Replace the n8n instance endpoint.
    pub fn set_n8n_url(&mut self, value: impl Into<String>) {
        self.n8n_url = value.into();
    }
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self::new(DEFAULT_FFMPEG_URL, DEFAULT_N8N_URL)
    }
}
