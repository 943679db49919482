/// Container and codec pair every recording is tagged with.
///
/// Recordings use a single supported combination, WebM with VP9 video.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodecDescriptor {
    /// Full MIME type including the codecs parameter.
    pub mime_type: String,

    /// File extension for saved recordings, without the leading dot.
    pub extension: String,
}

impl CodecDescriptor {
    pub const WEBM_VP9_MIME: &'static str = "video/webm; codecs=vp9";
    pub const WEBM_EXTENSION: &'static str = "webm";

    pub fn webm_vp9() -> Self {
        Self {
            mime_type: Self::WEBM_VP9_MIME.to_string(),
            extension: Self::WEBM_EXTENSION.to_string(),
        }
    }

    /// Container type without parameters (`video/webm`).
    pub fn container(&self) -> &str {
        self.mime_type
            .split(';')
            .next()
            .map(str::trim)
            .unwrap_or_default()
    }

    /// Codecs listed in the `codecs=` parameter, if any.
    pub fn codecs(&self) -> Vec<&str> {
        self.mime_type
            .split(';')
            .skip(1)
            .filter_map(|param| param.trim().strip_prefix("codecs="))
            .flat_map(|list| list.trim_matches('"').split(','))
            .map(str::trim)
            .filter(|codec| !codec.is_empty())
            .collect()
    }

    pub fn validate(&self) -> Result<(), String> {
        if !self.container().starts_with("video/") {
            return Err(format!("not a video container: {}", self.mime_type));
        }
        if self.extension.is_empty() || self.extension.starts_with('.') {
            return Err(format!("invalid file extension: {:?}", self.extension));
        }
        Ok(())
    }
}

impl Default for CodecDescriptor {
    fn default() -> Self {
        Self::webm_vp9()
    }
}
