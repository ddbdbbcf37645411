use crate::error::ConfigError;
use crate::ir::Insets;
use crate::theme::Theme;
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::Path;

const DEFAULT_PALETTE: [&str; 4] = ["#ff85ad", "#71c5ff", "#ffb073", "#9a8cff"];

pub const DEFAULT_MAX_LABEL_LENGTH: usize = 15;

/// Ordered, non-empty list of fill colors, indexed cyclically.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct Palette(Vec<String>);

impl Palette {
    pub fn new<I, S>(colors: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let colors: Vec<String> = colors.into_iter().map(Into::into).collect();
        if colors.is_empty() {
            return Err(ConfigError::EmptyPalette);
        }
        if let Some(index) = colors.iter().position(|c| c.trim().is_empty()) {
            return Err(ConfigError::BlankColor { index });
        }
        Ok(Self(colors))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn colors(&self) -> &[String] {
        &self.0
    }

    /// Cyclic lookup: `index mod len`.
    pub fn color(&self, index: usize) -> &str {
        &self.0[index % self.0.len()]
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self(DEFAULT_PALETTE.iter().map(|c| c.to_string()).collect())
    }
}

impl TryFrom<Vec<String>> for Palette {
    type Error = ConfigError;

    fn try_from(colors: Vec<String>) -> Result<Self, Self::Error> {
        Self::new(colors)
    }
}

impl From<Palette> for Vec<String> {
    fn from(palette: Palette) -> Self {
        palette.0
    }
}

/// How a placed tag picks its palette entry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", from = "ColorModeValue")]
pub enum ColorMode {
    /// Every tag of a row shares the row's color.
    #[default]
    ByRow,
    /// Colors cycle per tag in sequence order.
    ByItem,
}

impl ColorMode {
    /// Lenient parse. Unknown names fall back to `ByRow`.
    pub fn parse(value: &str) -> Self {
        match Self::from_token(value) {
            Some(mode) => mode,
            None => {
                tracing::warn!(value, "unknown color mode, falling back to by-row");
                Self::ByRow
            }
        }
    }

    pub fn from_token(value: &str) -> Option<Self> {
        let normalized = value.trim().to_ascii_lowercase().replace(['_', ' '], "-");
        match normalized.as_str() {
            "by-row" | "row" | "byrow" | "1" => Some(Self::ByRow),
            "by-item" | "item" | "byitem" | "2" => Some(Self::ByItem),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ByRow => "by-row",
            Self::ByItem => "by-item",
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ColorModeValue {
    Code(i64),
    Name(String),
}

impl From<ColorModeValue> for ColorMode {
    fn from(value: ColorModeValue) -> Self {
        match value {
            ColorModeValue::Code(2) => Self::ByItem,
            ColorModeValue::Code(1) => Self::ByRow,
            ColorModeValue::Code(code) => {
                tracing::warn!(code, "unknown color mode code, falling back to by-row");
                Self::ByRow
            }
            ColorModeValue::Name(name) => Self::parse(&name),
        }
    }
}

/// Immutable inputs shared by the measurement and placement passes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutConfig {
    pub palette: Palette,
    pub color_mode: ColorMode,
    pub max_label_length: usize,
    pub container_padding: Insets,
    pub tag_margin: Insets,
    pub tag_padding: Insets,
    pub corner_radius: f32,
    pub label_line_height: f32,
    pub fast_text_metrics: bool,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            palette: Palette::default(),
            color_mode: ColorMode::ByRow,
            max_label_length: DEFAULT_MAX_LABEL_LENGTH,
            container_padding: Insets::uniform(8.0),
            tag_margin: Insets::uniform(4.0),
            tag_padding: Insets::symmetric(12.0, 6.0),
            corner_radius: 6.0,
            label_line_height: 1.5,
            fast_text_metrics: false,
        }
    }
}

impl LayoutConfig {
    pub fn with_palette<I, S>(mut self, colors: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.palette = Palette::new(colors)?;
        Ok(self)
    }

    pub fn with_color_mode(mut self, mode: ColorMode) -> Self {
        self.color_mode = mode;
        self
    }

    /// Re-checks invariants on a config that may have been mutated field by field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        Palette::new(self.palette.colors().iter().cloned()).map(|_| ())
    }
}

#[derive(Debug, Clone)]
pub struct RenderConfig {
    pub width: f32,
    pub background: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 360.0,
            background: "#FFFFFF".to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub theme: Theme,
    pub layout: LayoutConfig,
    pub render: RenderConfig,
}

impl Default for Config {
    fn default() -> Self {
        let theme = Theme::light();
        let render = RenderConfig {
            background: theme.background.clone(),
            ..Default::default()
        };
        Self {
            theme,
            layout: LayoutConfig::default(),
            render,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum InsetsValue {
    Uniform(f32),
    Edges {
        top: Option<f32>,
        right: Option<f32>,
        bottom: Option<f32>,
        left: Option<f32>,
    },
}

impl InsetsValue {
    fn apply(self, base: Insets) -> Insets {
        match self {
            Self::Uniform(value) => Insets::uniform(value).clamped(),
            Self::Edges {
                top,
                right,
                bottom,
                left,
            } => Insets::new(
                top.unwrap_or(base.top),
                right.unwrap_or(base.right),
                bottom.unwrap_or(base.bottom),
                left.unwrap_or(base.left),
            )
            .clamped(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ThemeVariables {
    font_family: Option<String>,
    font_size: Option<f32>,
    text_color: Option<String>,
    background: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ConfigFile {
    theme: Option<String>,
    theme_variables: Option<ThemeVariables>,
    palette: Option<Vec<String>>,
    color_mode: Option<ColorMode>,
    max_label_length: Option<usize>,
    container_padding: Option<InsetsValue>,
    tag_margin: Option<InsetsValue>,
    tag_padding: Option<InsetsValue>,
    corner_radius: Option<f32>,
    label_line_height: Option<f32>,
    fast_text_metrics: Option<bool>,
    width: Option<f32>,
}

pub fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    let Some(path) = path else {
        return Ok(Config::default());
    };
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config file {}", path.display()))?;
    parse_config(&contents).with_context(|| format!("invalid config file {}", path.display()))
}

/// Parses a JSON5 config document on top of the defaults.
pub fn parse_config(contents: &str) -> anyhow::Result<Config> {
    let parsed: ConfigFile = json5::from_str(contents)?;
    let mut config = Config::default();

    if let Some(theme_name) = parsed.theme.as_deref() {
        match Theme::by_name(theme_name) {
            Some(theme) => config.theme = theme,
            None => tracing::warn!(theme = theme_name, "unknown theme, keeping default"),
        }
    }

    if let Some(vars) = parsed.theme_variables {
        if let Some(v) = vars.font_family {
            config.theme.font_family = v;
        }
        if let Some(v) = vars.font_size {
            config.theme.font_size = v;
        }
        if let Some(v) = vars.text_color {
            config.theme.text_color = v;
        }
        if let Some(v) = vars.background {
            config.theme.background = v;
        }
    }

    let layout = &mut config.layout;
    if let Some(colors) = parsed.palette {
        layout.palette = Palette::new(colors)?;
    }
    if let Some(v) = parsed.color_mode {
        layout.color_mode = v;
    }
    if let Some(v) = parsed.max_label_length {
        layout.max_label_length = v;
    }
    if let Some(v) = parsed.container_padding {
        layout.container_padding = v.apply(layout.container_padding);
    }
    if let Some(v) = parsed.tag_margin {
        layout.tag_margin = v.apply(layout.tag_margin);
    }
    if let Some(v) = parsed.tag_padding {
        layout.tag_padding = v.apply(layout.tag_padding);
    }
    if let Some(v) = parsed.corner_radius {
        layout.corner_radius = v.max(0.0);
    }
    if let Some(v) = parsed.label_line_height {
        layout.label_line_height = v;
    }
    if let Some(v) = parsed.fast_text_metrics {
        layout.fast_text_metrics = v;
    }
    if let Some(v) = parsed.width {
        config.render.width = v;
    }

    config.render.background = config.theme.background.clone();

    Ok(config)
}
