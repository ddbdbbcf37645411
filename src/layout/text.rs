use crate::config::LayoutConfig;
use crate::ir::{Insets, Size};
use crate::text_metrics;
use crate::theme::Theme;

use super::measure::{MeasureConstraints, Measurable};

/// Measures labels as a single line of text inside the tag's inner padding.
#[derive(Debug, Clone)]
pub struct TextMeasurer {
    pub font_family: String,
    pub font_size: f32,
    pub line_height: f32,
    pub padding: Insets,
    pub fast_metrics: bool,
}

impl TextMeasurer {
    pub fn new(theme: &Theme, config: &LayoutConfig) -> Self {
        Self {
            font_family: theme.font_family.clone(),
            font_size: theme.font_size,
            line_height: config.label_line_height,
            padding: config.tag_padding.clamped(),
            fast_metrics: config.fast_text_metrics,
        }
    }

    pub fn text_width(&self, text: &str) -> f32 {
        text_width(text, self.font_size, &self.font_family, self.fast_metrics)
    }
}

impl Measurable for TextMeasurer {
    fn measure(&self, label: Option<&str>, _constraints: &MeasureConstraints) -> Size {
        let text_width = self.text_width(label.unwrap_or(""));
        Size::new(
            text_width + self.padding.horizontal(),
            self.font_size * self.line_height + self.padding.vertical(),
        )
    }
}

pub(super) fn text_width(text: &str, font_size: f32, font_family: &str, fast_metrics: bool) -> f32 {
    if fast_metrics {
        return fallback_text_width(text, font_size);
    }
    text_metrics::measure_text_width(text, font_size, font_family)
        .unwrap_or_else(|| fallback_text_width(text, font_size))
}

fn fallback_text_width(text: &str, font_size: f32) -> f32 {
    text.chars().map(char_width_factor).sum::<f32>() * font_size
}

pub(super) fn char_width_factor(ch: char) -> f32 {
    if is_wide(ch) {
        return 1.0;
    }
    match ch {
        ' ' => 0.306,
        '\\' | '.' | ',' | ':' | ';' | '|' | '!' | '(' | ')' | '[' | ']' | '{' | '}' => 0.321,
        'I' | 'i' | 'j' | 'l' => 0.25,
        'f' | 't' | 'r' => 0.34,
        'M' | 'W' | 'm' | 'w' => 0.86,
        'A'..='Z' => 0.66,
        'a'..='z' => 0.56,
        '1' => 0.396,
        '0'..='9' => 0.6,
        '@' | '#' | '%' | '&' => 0.946,
        '\n' | '\r' => 0.0,
        _ => 0.568,
    }
}

/// East Asian wide glyphs render at a full em.
fn is_wide(ch: char) -> bool {
    matches!(ch as u32,
        0x1100..=0x115F
        | 0x2E80..=0x303E
        | 0x3041..=0x33FF
        | 0x3400..=0x4DBF
        | 0x4E00..=0x9FFF
        | 0xA000..=0xA4CF
        | 0xAC00..=0xD7A3
        | 0xF900..=0xFAFF
        | 0xFE30..=0xFE4F
        | 0xFF00..=0xFF60
        | 0xFFE0..=0xFFE6
        | 0x1F300..=0x1F64F
        | 0x20000..=0x2FFFD)
}
