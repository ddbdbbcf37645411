use crate::config::LayoutConfig;
use crate::layout::{PlacedTag, TagLayout};
use crate::theme::Theme;
use anyhow::Result;
use std::path::Path;

pub fn render_svg(layout: &TagLayout, theme: &Theme, config: &LayoutConfig) -> String {
    let mut svg = String::new();
    let width = layout.width.max(1.0);
    let height = layout.height.max(1.0);

    svg.push_str(&format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{width}\" height=\"{height}\" viewBox=\"0 0 {width} {height}\">",
    ));
    svg.push_str(&format!(
        "<rect width=\"100%\" height=\"100%\" fill=\"{}\"/>",
        escape_xml(&theme.background)
    ));

    for tag in &layout.tags {
        svg.push_str(&tag_svg(tag, theme, config));
    }

    svg.push_str("</svg>");
    svg
}

fn tag_svg(tag: &PlacedTag, theme: &Theme, config: &LayoutConfig) -> String {
    let radius = config.corner_radius.min(tag.width / 2.0).min(tag.height / 2.0).max(0.0);
    let mut out = format!(
        "<g class=\"tag\" data-index=\"{}\" data-row=\"{}\"><rect x=\"{:.2}\" y=\"{:.2}\" width=\"{:.2}\" height=\"{:.2}\" rx=\"{radius:.2}\" ry=\"{radius:.2}\" fill=\"{}\"/>",
        tag.index,
        tag.row,
        tag.x,
        tag.y,
        tag.width,
        tag.height,
        escape_xml(&tag.color),
    );
    let text = tag.text();
    if !text.is_empty() {
        let center_x = tag.x + tag.width / 2.0;
        let center_y = tag.y + tag.height / 2.0;
        out.push_str(&format!(
            "<text x=\"{center_x:.2}\" y=\"{center_y:.2}\" text-anchor=\"middle\" dominant-baseline=\"central\" font-family=\"{}\" font-size=\"{}\" fill=\"{}\">{}</text>",
            escape_xml(&theme.font_family),
            theme.font_size,
            escape_xml(&theme.text_color),
            escape_xml(text)
        ));
    }
    out.push_str("</g>");
    out
}

pub fn write_output_svg(svg: &str, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            std::fs::write(path, svg)?;
        }
        None => {
            print!("{}", svg);
        }
    }
    Ok(())
}

#[cfg(feature = "png")]
pub fn write_output_png(svg: &str, output: &Path, theme: &Theme) -> Result<()> {
    let mut opt = usvg::Options::default();
    opt.font_family = theme
        .font_family
        .split(',')
        .next()
        .map(|family| family.trim().trim_matches('"').to_string())
        .unwrap_or_else(|| "sans-serif".to_string());
    opt.fontdb_mut().load_system_fonts();

    let tree = usvg::Tree::from_str(svg, &opt)?;
    let size = tree.size().to_int_size();
    let mut pixmap = resvg::tiny_skia::Pixmap::new(size.width(), size.height())
        .ok_or_else(|| anyhow::anyhow!("Failed to allocate pixmap"))?;

    let mut pixmap_mut = pixmap.as_mut();
    resvg::render(&tree, resvg::tiny_skia::Transform::default(), &mut pixmap_mut);
    pixmap.save_png(output)?;
    Ok(())
}

fn escape_xml(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
