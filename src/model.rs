use serde::{Deserialize, Serialize};

/// A single edited video shown in a category grid.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct VideoEntry {
    pub title: String,
    /// Static image path, e.g. `/ytTaklu.png`
    pub thumbnail: String,
    /// Externally hosted video (YouTube, Instagram, Drive, LinkedIn, ...)
    pub link: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl VideoEntry {
    pub fn new(title: &str, thumbnail: &str, link: &str) -> Self {
        Self {
            title: title.to_string(),
            thumbnail: thumbnail.to_string(),
            link: link.to_string(),
            description: None,
        }
    }

    pub fn with_description(mut self, description: &str) -> Self {
        self.description = Some(description.to_string());
        self
    }
}

/// A named gallery of videos. `videos` is kept in display order.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: String,
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub videos: Vec<VideoEntry>,
    /// The creator's full collection on an external platform
    pub external_link: String,
    #[serde(default)]
    pub gradient: String,
    #[serde(default)]
    pub accent_color: String,
}

impl Category {
    pub fn video_count(&self) -> usize {
        self.videos.len()
    }

    /// Videos paired with the 1-based number shown on each card
    pub fn numbered_videos(&self) -> impl Iterator<Item = (usize, &VideoEntry)> {
        self.videos.iter().enumerate().map(|(i, v)| (i + 1, v))
    }
}
