use crate::config::{ColorMode, Palette};

/// Palette slot for the tag at sequence position `index` on row `row`.
/// Not reduced modulo the palette length.
pub fn palette_slot(mode: ColorMode, row: usize, index: usize) -> usize {
    match mode {
        ColorMode::ByRow => row,
        ColorMode::ByItem => index,
    }
}

/// Resolves the palette index and color for one tag.
pub fn resolve_color(palette: &Palette, mode: ColorMode, row: usize, index: usize) -> (usize, &str) {
    let slot = palette_slot(mode, row, index) % palette.len();
    (slot, palette.color(slot))
}
