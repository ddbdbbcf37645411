use std::ops::Range;

use crate::ir::{Insets, Tag};

/// The wrap rule shared by measurement and placement.
///
/// `cursor_x` is the right edge of the previous tag in the row including its
/// right margin. A tag opens a new row only when the row already holds a tag
/// and the tag's left margin plus width would cross `right_edge`. An empty row
/// always accepts its first tag, however wide.
pub fn starts_new_row(row_len: usize, cursor_x: f32, tag: &Tag, right_edge: f32) -> bool {
    row_len > 0 && cursor_x + tag.margin.left + tag.size.width > right_edge
}

/// Splits a tag slice into rows using [`starts_new_row`]. Every pass that
/// needs row boundaries walks one of these, so they cannot disagree.
pub(crate) struct RowBreaker<'a> {
    tags: &'a [Tag],
    left: f32,
    right_edge: f32,
    next: usize,
}

impl<'a> RowBreaker<'a> {
    pub(crate) fn new(tags: &'a [Tag], container_width: f32, padding: &Insets) -> Self {
        Self {
            tags,
            left: padding.left,
            right_edge: container_width - padding.right,
            next: 0,
        }
    }
}

impl Iterator for RowBreaker<'_> {
    type Item = Range<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        let start = self.next;
        if start >= self.tags.len() {
            return None;
        }
        let mut cursor_x = self.left;
        let mut end = start;
        while let Some(tag) = self.tags.get(end) {
            if starts_new_row(end - start, cursor_x, tag, self.right_edge) {
                break;
            }
            cursor_x += tag.outer_width();
            end += 1;
        }
        self.next = end;
        Some(start..end)
    }
}
