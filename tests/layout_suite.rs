use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use tag_cloud_renderer::config::parse_config;
use tag_cloud_renderer::{
    ColorMode, LayoutConfig, RenderOptions, TagCloud, TagLayout, Theme, compute_text_layout,
    parse_labels, render_svg, render_with_options,
};

fn fixtures_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

fn fast_config() -> LayoutConfig {
    LayoutConfig {
        fast_text_metrics: true,
        ..LayoutConfig::default()
    }
}

fn layout_fixture(rel: &str, config: LayoutConfig, width: f32) -> TagLayout {
    let input = std::fs::read_to_string(fixtures_root().join(rel)).expect("fixture read failed");
    let parsed = parse_labels(&input).expect("parse failed");
    let mut cloud = TagCloud::new(config);
    cloud.set_labels(parsed.labels);
    compute_text_layout(&cloud, &Theme::light(), width)
}

fn assert_valid_svg(svg: &str, fixture: &str) {
    assert!(svg.contains("<svg"), "{fixture}: missing <svg tag");
    assert!(svg.contains("</svg>"), "{fixture}: missing </svg tag");
}

#[test]
fn render_all_fixtures() {
    // Keep this list explicit so new fixtures must be added intentionally.
    let candidates = ["basic.txt", "long_labels.txt", "labels.json", "empty.txt"];

    for rel in candidates {
        let path = fixtures_root().join(rel);
        assert!(path.exists(), "fixture missing: {}", rel);
        let layout = layout_fixture(rel, fast_config(), 360.0);
        let svg = render_svg(&layout, &Theme::light(), &fast_config());
        assert_valid_svg(&svg, rel);
        assert_eq!(svg.matches("class=\"tag\"").count(), layout.tags.len(), "{rel}");
    }
}

#[test]
fn basic_fixture_wraps_and_colors_rows() {
    let layout = layout_fixture("basic.txt", fast_config(), 240.0);
    assert_eq!(layout.tags.len(), 11);
    assert!(layout.rows.len() > 1, "expected several rows");

    let palette = LayoutConfig::default().palette;
    for tag in &layout.tags {
        assert_eq!(tag.color, palette.color(tag.row));
    }
    let distinct_tops: BTreeSet<u32> = layout.tags.iter().map(|t| t.y.to_bits()).collect();
    assert_eq!(distinct_tops.len(), layout.rows.len());
}

#[test]
fn long_labels_are_truncated_and_blank_lines_kept() {
    let layout = layout_fixture("long_labels.txt", fast_config(), 360.0);
    let labels: Vec<&str> = layout.tags.iter().map(|t| t.text()).collect();
    assert_eq!(
        labels,
        [
            "a label that is",
            "short",
            "",
            "the next line i",
            "WWWWWWWWWWWWWWW",
        ]
    );
}

#[test]
fn empty_fixture_is_padding_only() {
    let config = fast_config();
    let vertical = config.container_padding.vertical();
    let layout = layout_fixture("empty.txt", config, 360.0);
    assert!(layout.tags.is_empty());
    assert_eq!(layout.height, vertical);
}

#[test]
fn json_fixture_keeps_null_entries() {
    let layout = layout_fixture(
        "labels.json",
        fast_config().with_color_mode(ColorMode::ByItem),
        360.0,
    );
    assert_eq!(layout.tags.len(), 7);
    assert_eq!(layout.tags[2].label, None);
    assert_eq!(layout.tags[3].label.as_deref(), Some(""));
    let slots: Vec<usize> = layout.tags.iter().map(|t| t.palette_index).collect();
    assert_eq!(slots, [0, 1, 2, 3, 0, 1, 2]);
}

#[test]
fn config_fixture_drives_render_options() {
    let raw = std::fs::read_to_string(fixtures_root().join("config.json5")).unwrap();
    let config = parse_config(&raw).unwrap();
    assert_eq!(config.layout.color_mode, ColorMode::ByItem);
    assert_eq!(config.render.width, 320.0);

    let labels = std::fs::read_to_string(fixtures_root().join("basic.txt")).unwrap();
    let svg = render_with_options(&labels, RenderOptions::from(config)).unwrap();
    assert!(svg.contains("width=\"320\""));
    assert!(svg.contains("颜值担当"));
}

#[test]
fn palette_deserialization_validates_colors() {
    let mut options = RenderOptions::default();
    options.layout.palette = serde_json::from_str("[\"#000\"]").unwrap();
    assert!(render_with_options("a", options.clone()).is_ok());

    let empty: Result<tag_cloud_renderer::Palette, _> = serde_json::from_str("[]");
    assert!(empty.is_err());
}

#[test]
fn relayout_on_resize_is_stable() {
    let input = std::fs::read_to_string(fixtures_root().join("basic.txt")).unwrap();
    let mut cloud = TagCloud::new(fast_config());
    cloud.set_labels(parse_labels(&input).unwrap().labels);
    let theme = Theme::light();

    let narrow = compute_text_layout(&cloud, &theme, 160.0);
    let wide = compute_text_layout(&cloud, &theme, 640.0);
    let narrow_again = compute_text_layout(&cloud, &theme, 160.0);
    assert_eq!(narrow, narrow_again);
    assert!(narrow.rows.len() >= wide.rows.len());
    assert!(narrow.height >= wide.height);
}
