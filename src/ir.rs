use serde::{Deserialize, Serialize};

use crate::config::LayoutConfig;

/// Box edges in container units. Used for container padding, tag margins
/// and the tag's inner text padding.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Insets {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

impl Insets {
    pub const fn new(top: f32, right: f32, bottom: f32, left: f32) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    pub const fn uniform(value: f32) -> Self {
        Self::new(value, value, value, value)
    }

    pub const fn symmetric(horizontal: f32, vertical: f32) -> Self {
        Self::new(vertical, horizontal, vertical, horizontal)
    }

    pub fn horizontal(&self) -> f32 {
        self.left + self.right
    }

    pub fn vertical(&self) -> f32 {
        self.top + self.bottom
    }

    /// Negative and non-finite edges collapse to zero.
    pub fn clamped(self) -> Self {
        Self::new(
            non_negative(self.top),
            non_negative(self.right),
            non_negative(self.bottom),
            non_negative(self.left),
        )
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width: non_negative(width),
            height: non_negative(height),
        }
    }
}

pub(crate) fn non_negative(value: f32) -> f32 {
    if value.is_finite() { value.max(0.0) } else { 0.0 }
}

/// One label of the cloud. `size` stays zero until the tag has been measured.
#[derive(Debug, Clone, PartialEq)]
pub struct Tag {
    pub label: Option<String>,
    pub size: Size,
    pub margin: Insets,
}

impl Tag {
    pub fn new(label: Option<String>, margin: Insets) -> Self {
        Self {
            label,
            size: Size::default(),
            margin: margin.clamped(),
        }
    }

    pub fn measured(label: Option<String>, size: Size, margin: Insets) -> Self {
        Self {
            label,
            size,
            margin: margin.clamped(),
        }
    }

    pub fn text(&self) -> &str {
        self.label.as_deref().unwrap_or("")
    }

    /// Horizontal footprint including both margins.
    pub fn outer_width(&self) -> f32 {
        self.margin.left + self.size.width + self.margin.right
    }

    /// Vertical footprint including both margins.
    pub fn outer_height(&self) -> f32 {
        self.margin.top + self.size.height + self.margin.bottom
    }
}

/// Cuts a label down to `max_chars` characters. No ellipsis is appended.
pub fn truncate_label(label: &str, max_chars: usize) -> String {
    match label.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => label[..byte_idx].to_string(),
        None => label.to_string(),
    }
}

/// Ordered tag container. The tag list is only ever replaced as a whole.
#[derive(Debug, Clone)]
pub struct TagCloud {
    config: LayoutConfig,
    tags: Vec<Tag>,
}

impl TagCloud {
    pub fn new(config: LayoutConfig) -> Self {
        Self {
            config,
            tags: Vec::new(),
        }
    }

    pub fn with_labels<I, S>(config: LayoutConfig, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut cloud = Self::new(config);
        cloud.set_labels(Some(labels.into_iter().map(|s| Some(s.into())).collect()));
        cloud
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    pub fn tags(&self) -> &[Tag] {
        &self.tags
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    /// Replaces every tag. `None` clears the cloud instead of failing.
    pub fn set_labels(&mut self, labels: Option<Vec<Option<String>>>) {
        let Some(labels) = labels else {
            tracing::debug!("null label list, clearing {} tags", self.tags.len());
            self.tags.clear();
            return;
        };
        let max = self.config.max_label_length;
        let margin = self.config.tag_margin;
        let next: Vec<Tag> = labels
            .into_iter()
            .map(|label| Tag::new(label.map(|text| truncate_label(&text, max)), margin))
            .collect();
        self.tags = next;
    }
}
