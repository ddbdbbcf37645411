mod color;
mod measure;
mod place;
mod text;
pub(crate) mod types;
mod wrap;

pub use color::{palette_slot, resolve_color};
pub use measure::{MeasureConstraints, Measurable, measure_pass, measure_tags};
pub use place::place_pass;
pub use text::TextMeasurer;
pub use types::*;
pub use wrap::starts_new_row;

use crate::ir::{TagCloud, non_negative};
use crate::theme::Theme;

/// Measures, wraps, places and colors every tag of `cloud` inside a container
/// `container_width` wide.
pub fn compute_layout<M: Measurable + ?Sized>(
    cloud: &TagCloud,
    measurer: &M,
    container_width: f32,
) -> TagLayout {
    let config = cloud.config();
    let width = non_negative(container_width);
    let tags = measure_tags(cloud.tags(), measurer, config, width);
    let measurement = measure_pass(&tags, config, width);
    let placed = place_pass(&tags, config, width);

    TagLayout {
        width,
        height: measurement.required_height,
        color_mode: config.color_mode,
        rows: measurement.rows,
        tags: placed,
    }
}

/// [`compute_layout`] with label text measured in the theme's font.
pub fn compute_text_layout(cloud: &TagCloud, theme: &Theme, container_width: f32) -> TagLayout {
    let measurer = TextMeasurer::new(theme, cloud.config());
    compute_layout(cloud, &measurer, container_width)
}
