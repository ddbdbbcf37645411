#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod error;
pub mod ir;
pub mod layout;
pub mod layout_dump;
pub mod parser;
pub mod render;
pub mod text_metrics;
pub mod theme;

#[cfg(feature = "cli")]
pub use cli::run;
pub use config::{ColorMode, Config, LayoutConfig, Palette, load_config};
pub use error::{ConfigError, ParseError};
pub use ir::{Insets, Size, Tag, TagCloud};
pub use layout::{
    MeasureConstraints, Measurable, Measurement, PlacedTag, TagLayout, TextMeasurer,
    compute_layout, compute_text_layout,
};
pub use parser::parse_labels;
pub use render::render_svg;
pub use theme::Theme;

/// Everything `render_with_options` needs besides the label text.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    pub theme: Theme,
    pub layout: LayoutConfig,
    pub width: f32,
}

impl RenderOptions {
    pub fn light() -> Self {
        Config::default().into()
    }

    pub fn dark() -> Self {
        Self {
            theme: Theme::dark(),
            ..Self::light()
        }
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self::light()
    }
}

impl From<Config> for RenderOptions {
    fn from(config: Config) -> Self {
        Self {
            theme: config.theme,
            layout: config.layout,
            width: config.render.width,
        }
    }
}

/// Parses `input`, lays the labels out and returns the SVG document.
pub fn render_with_options(input: &str, options: RenderOptions) -> anyhow::Result<String> {
    options.layout.validate()?;
    let parsed = parse_labels(input)?;
    let mut cloud = TagCloud::new(options.layout.clone());
    cloud.set_labels(parsed.labels);
    let layout = compute_text_layout(&cloud, &options.theme, options.width);
    Ok(render_svg(&layout, &options.theme, &options.layout))
}
