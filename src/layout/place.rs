use crate::config::LayoutConfig;
use crate::ir::{Tag, non_negative};

use super::color::resolve_color;
use super::types::PlacedTag;
use super::wrap::RowBreaker;

/// Positions measured tags row by row and colors them.
///
/// Returns one entry per tag in input order. Row boundaries come from the same
/// [`RowBreaker`] that [`measure_pass`](super::measure_pass) walks.
///
/// Every tag of a row shares the row's top. The next row starts below the
/// tallest tag of the current row plus the top margin of its own first tag.
pub fn place_pass(tags: &[Tag], config: &LayoutConfig, container_width: f32) -> Vec<PlacedTag> {
    let padding = config.container_padding;
    let mut placed = Vec::with_capacity(tags.len());
    let mut cursor_y = padding.top;
    let mut row_height = 0.0f32;

    for (row, range) in RowBreaker::new(tags, non_negative(container_width), &padding).enumerate() {
        if row > 0 {
            cursor_y += row_height + tags[range.start].margin.top;
        }
        let mut cursor_x = padding.left;
        row_height = 0.0;
        for index in range {
            let tag = &tags[index];
            cursor_x += tag.margin.left;
            let (palette_index, color) =
                resolve_color(&config.palette, config.color_mode, row, index);
            placed.push(PlacedTag {
                index,
                label: tag.label.clone(),
                x: cursor_x,
                y: cursor_y,
                width: tag.size.width,
                height: tag.size.height,
                row,
                palette_index,
                color: color.to_string(),
            });
            cursor_x += tag.size.width + tag.margin.right;
            row_height = row_height.max(tag.size.height);
        }
    }

    placed
}
