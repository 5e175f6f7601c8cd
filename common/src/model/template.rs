use serde::{Deserialize, Serialize};

/// A base image from the imgflip catalog with a fixed number of caption slots.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemeTemplate {
    pub id: String,
    pub name: String,
    /// Public URL of the blank template image.
    pub url: String,
    pub box_count: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    /// Popularity counter reported by the catalog.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub captions: Option<u64>,
}

impl MemeTemplate {
    pub fn new(id: impl Into<String>, name: impl Into<String>, url: impl Into<String>, box_count: u32) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            url: url.into(),
            box_count,
            width: None,
            height: None,
            captions: None,
        }
    }

    /// Placeholder label shown for caption box `index` (zero based).
    pub fn placeholder(index: usize) -> String {
        format!("TEXT #{}", index + 1)
    }

    /// One placeholder label per caption box, in order.
    pub fn placeholders(&self) -> Vec<String> {
        (0..self.box_count as usize).map(Self::placeholder).collect()
    }
}
