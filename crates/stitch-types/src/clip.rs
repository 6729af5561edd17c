use serde::{Deserialize, Serialize};

/// A media clip managed by the backend, as listed by `GET /api/clips`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Clip {
    pub id: String,
    #[serde(default)]
    pub name: String,
    /// Display-formatted, e.g. "0:12" or "Unknown"
    #[serde(default)]
    pub duration: String,
    /// URI or empty
    #[serde(default)]
    pub thumbnail: String,
    /// MIME-like identifier, e.g. "video/mp4"
    #[serde(rename = "type", default)]
    pub kind: String,
}

impl Clip {
    pub fn is_image(&self) -> bool {
        self.kind.contains("image")
    }

    pub fn has_thumbnail(&self) -> bool {
        !self.thumbnail.is_empty()
    }

    /// Short upper-case label: "video/mp4" → "MP4".
    pub fn kind_label(&self) -> String {
        self.kind
            .rsplit('/')
            .next()
            .unwrap_or_default()
            .to_uppercase()
    }
}

/// A clip as handed to the shell: the wire fields plus the display helpers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClipView {
    #[serde(flatten)]
    pub clip: Clip,
    pub kind_label: String,
    pub is_image: bool,
    pub has_thumbnail: bool,
}

impl From<&Clip> for ClipView {
    fn from(clip: &Clip) -> Self {
        Self {
            kind_label: clip.kind_label(),
            is_image: clip.is_image(),
            has_thumbnail: clip.has_thumbnail(),
            clip: clip.clone(),
        }
    }
}
