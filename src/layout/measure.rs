use crate::config::LayoutConfig;
use crate::ir::{Insets, Size, Tag, non_negative};

use super::types::{Measurement, RowSpan};
use super::wrap::RowBreaker;

/// Constraints handed to a [`Measurable`] for one tag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeasureConstraints {
    /// Container width minus container padding and the tag's horizontal
    /// margins, floored at zero. Measurers may exceed it.
    pub available_width: f32,
    pub margin: Insets,
}

/// Turns a label into its intrinsic box size.
pub trait Measurable {
    fn measure(&self, label: Option<&str>, constraints: &MeasureConstraints) -> Size;
}

impl<F> Measurable for F
where
    F: Fn(Option<&str>, &MeasureConstraints) -> Size,
{
    fn measure(&self, label: Option<&str>, constraints: &MeasureConstraints) -> Size {
        self(label, constraints)
    }
}

/// Asks `measurer` for every tag's intrinsic size, once per tag, in order.
pub fn measure_tags<M: Measurable + ?Sized>(
    tags: &[Tag],
    measurer: &M,
    config: &LayoutConfig,
    container_width: f32,
) -> Vec<Tag> {
    let inner_width = non_negative(container_width) - config.container_padding.horizontal();
    tags.iter()
        .map(|tag| {
            let constraints = MeasureConstraints {
                available_width: (inner_width - tag.margin.horizontal()).max(0.0),
                margin: tag.margin,
            };
            let size = measurer.measure(tag.label.as_deref(), &constraints);
            Tag::measured(tag.label.clone(), Size::new(size.width, size.height), tag.margin)
        })
        .collect()
}

/// Groups measured tags into rows and returns the height the container needs.
pub fn measure_pass(tags: &[Tag], config: &LayoutConfig, container_width: f32) -> Measurement {
    let padding = config.container_padding;
    let mut row_top = padding.top;
    let mut rows = Vec::new();

    for (index, range) in RowBreaker::new(tags, non_negative(container_width), &padding).enumerate() {
        let height = tags[range.clone()]
            .iter()
            .map(Tag::outer_height)
            .fold(0.0f32, f32::max);
        rows.push(RowSpan {
            index,
            start: range.start,
            end: range.end,
            top: row_top,
            height,
        });
        row_top += height;
    }

    let required_height = row_top + padding.bottom;
    tracing::debug!(
        tags = tags.len(),
        rows = rows.len(),
        required_height,
        "measured tag cloud"
    );

    Measurement {
        required_height,
        rows,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn config() -> LayoutConfig {
        LayoutConfig {
            container_padding: Insets::new(5.0, 10.0, 7.0, 10.0),
            tag_margin: Insets::uniform(2.0),
            ..LayoutConfig::default()
        }
    }

    fn sized(widths: &[f32], height: f32, margin: Insets) -> Vec<Tag> {
        widths
            .iter()
            .map(|w| Tag::measured(None, Size::new(*w, height), margin))
            .collect()
    }

    #[test]
    fn empty_list_needs_only_padding() {
        let m = measure_pass(&[], &config(), 200.0);
        assert_eq!(m.required_height, 12.0);
        assert!(m.rows.is_empty());
    }

    #[test]
    fn sums_row_heights_with_margins() {
        // right edge 190; each tag spans 2 + 60 + 2
        let tags = sized(&[60.0, 60.0, 60.0, 60.0], 20.0, Insets::uniform(2.0));
        let m = measure_pass(&tags, &config(), 200.0);
        assert_eq!(m.rows.len(), 2);
        assert_eq!((m.rows[0].start, m.rows[0].end), (0, 2));
        assert_eq!(m.rows[0].height, 24.0);
        assert_eq!(m.rows[1].top, 29.0);
        assert_eq!(m.required_height, 5.0 + 24.0 + 24.0 + 7.0);
    }

    #[test]
    fn row_height_is_the_tallest_tag() {
        let mut tags = sized(&[10.0, 10.0], 10.0, Insets::default());
        tags[1].size.height = 30.0;
        let m = measure_pass(&tags, &LayoutConfig::default(), 400.0);
        assert_eq!(m.rows.len(), 1);
        assert_eq!(m.rows[0].height, 30.0);
    }

    #[test]
    fn measurer_called_once_per_tag_with_inner_width() {
        let calls = Cell::new(0);
        let measurer = |label: Option<&str>, c: &MeasureConstraints| {
            calls.set(calls.get() + 1);
            assert_eq!(c.available_width, 200.0 - 20.0 - 4.0);
            Size::new(label.map_or(0.0, |l| l.len() as f32), 10.0)
        };
        let tags = vec![
            Tag::new(Some("abc".to_string()), Insets::uniform(2.0)),
            Tag::new(None, Insets::uniform(2.0)),
        ];
        let measured = measure_tags(&tags, &measurer, &config(), 200.0);
        assert_eq!(calls.get(), 2);
        assert_eq!(measured[0].size, Size::new(3.0, 10.0));
        assert_eq!(measured[1].size, Size::new(0.0, 10.0));
    }

    #[test]
    fn negative_width_is_treated_as_zero() {
        let tags = sized(&[10.0, 10.0], 10.0, Insets::default());
        let m = measure_pass(&tags, &LayoutConfig::default(), -50.0);
        assert_eq!(m.rows.len(), 2);
    }
}
