use crate::config::{ColorMode, load_config};
use crate::ir::TagCloud;
use crate::layout::compute_text_layout;
use crate::layout_dump::{LayoutDump, write_layout_dump};
use crate::parser::parse_labels;
use crate::render::{render_svg, write_output_svg};
use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "tagr", version, about = "Lay out labels as a wrapping, colored tag cloud")]
pub struct Args {
    /// Label file (one label per line, or a JSON array) or '-' for stdin
    #[arg(short = 'i', long = "input")]
    pub input: Option<PathBuf>,

    /// Output file. Defaults to stdout for SVG and JSON.
    #[arg(short = 'o', long = "output")]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short = 'e', long = "outputFormat", value_enum, default_value = "svg")]
    pub output_format: OutputFormat,

    /// Config file (JSON5)
    #[arg(short = 'c', long = "configFile")]
    pub config: Option<PathBuf>,

    /// Container width; overrides the config file
    #[arg(short = 'w', long = "width")]
    pub width: Option<f32>,

    /// Coloring mode: by-row or by-item
    #[arg(long = "colorMode")]
    pub color_mode: Option<String>,

    /// Log layout details to stderr
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Svg,
    Png,
    Json,
}

pub fn run() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let mut config = load_config(args.config.as_deref())?;
    if let Some(width) = args.width {
        config.render.width = width;
    }
    if let Some(mode) = args.color_mode.as_deref() {
        config.layout.color_mode = ColorMode::parse(mode);
    }
    config.layout.validate()?;

    let input = read_input(args.input.as_deref())?;
    let parsed = parse_labels(&input).context("failed to parse labels")?;

    let mut cloud = TagCloud::new(config.layout.clone());
    cloud.set_labels(parsed.labels);
    let layout = compute_text_layout(&cloud, &config.theme, config.render.width);
    tracing::info!(
        tags = layout.tags.len(),
        rows = layout.rows.len(),
        width = layout.width,
        height = layout.height,
        "laid out tag cloud"
    );

    match args.output_format {
        OutputFormat::Svg => {
            let svg = render_svg(&layout, &config.theme, &config.layout);
            write_output_svg(&svg, args.output.as_deref())?;
        }
        OutputFormat::Png => {
            let output = ensure_output(&args.output, "png")?;
            let svg = render_svg(&layout, &config.theme, &config.layout);
            write_png(&svg, &output, &config.theme)?;
        }
        OutputFormat::Json => match args.output.as_deref() {
            Some(path) => write_layout_dump(path, &layout)?,
            None => println!("{}", LayoutDump::from_layout(&layout).to_json()?),
        },
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let filter = if verbose { "debug" } else { "info" };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()))
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}

#[cfg(feature = "png")]
fn write_png(svg: &str, output: &Path, theme: &crate::theme::Theme) -> Result<()> {
    crate::render::write_output_png(svg, output, theme)
}

#[cfg(not(feature = "png"))]
fn write_png(_svg: &str, _output: &Path, _theme: &crate::theme::Theme) -> Result<()> {
    Err(anyhow::anyhow!("PNG output requires the `png` feature"))
}

fn read_input(path: Option<&Path>) -> Result<String> {
    if let Some(path) = path
        && path != Path::new("-")
    {
        return std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()));
    }

    let mut buf = String::new();
    io::stdin().read_to_string(&mut buf)?;
    Ok(buf)
}

fn ensure_output(output: &Option<PathBuf>, ext: &str) -> Result<PathBuf> {
    if let Some(path) = output {
        return Ok(path.clone());
    }
    Err(anyhow::anyhow!("Output path required for {} output", ext))
}
