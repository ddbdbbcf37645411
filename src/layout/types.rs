use crate::config::ColorMode;

/// A run of consecutive tags sharing one row. `start..end` indexes the tag list
/// and `top..bottom()` is the vertical slot measurement reserved for it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RowSpan {
    pub index: usize,
    pub start: usize,
    pub end: usize,
    pub top: f32,
    /// Tallest outer height (margins included) in the row.
    pub height: f32,
}

impl RowSpan {
    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Measurement {
    pub required_height: f32,
    pub rows: Vec<RowSpan>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlacedTag {
    pub index: usize,
    pub label: Option<String>,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub row: usize,
    pub palette_index: usize,
    pub color: String,
}

impl PlacedTag {
    pub fn text(&self) -> &str {
        self.label.as_deref().unwrap_or("")
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TagLayout {
    pub width: f32,
    pub height: f32,
    pub color_mode: ColorMode,
    pub rows: Vec<RowSpan>,
    pub tags: Vec<PlacedTag>,
}
