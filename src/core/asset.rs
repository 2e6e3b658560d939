use serde::{Deserialize, Serialize};

/// A post's media record as handed over by the content store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MediaAsset {
    pub uri: String,
    pub thumbnail_uri: Option<String>,
    pub duration_hint_millis: Option<u64>,
}

impl MediaAsset {
    pub fn new(uri: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            thumbnail_uri: None,
            duration_hint_millis: None,
        }
    }

    pub fn with_thumbnail(mut self, thumbnail_uri: impl Into<String>) -> Self {
        self.thumbnail_uri = Some(thumbnail_uri.into());
        self
    }

    pub fn with_duration_hint(mut self, duration_millis: u64) -> Self {
        self.duration_hint_millis = Some(duration_millis);
        self
    }

    pub fn has_poster(&self) -> bool {
        self.thumbnail_uri.is_some()
    }
}
