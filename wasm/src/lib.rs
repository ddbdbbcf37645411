use serde::Deserialize;
use tag_cloud_renderer::{ColorMode, Palette, RenderOptions, render_with_options};
use wasm_bindgen::prelude::*;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TagRenderOptions {
    theme: Option<String>,
    font_family: Option<String>,
    font_size: Option<f32>,
    width: Option<f32>,
    palette: Option<Vec<String>>,
    color_mode: Option<String>,
    max_label_length: Option<usize>,
}

fn build_render_options(options: TagRenderOptions) -> Result<RenderOptions, String> {
    let mut render_options = if options.theme.as_deref() == Some("dark") {
        RenderOptions::dark()
    } else {
        RenderOptions::light()
    };
    // No system fonts inside the browser sandbox.
    render_options.layout.fast_text_metrics = true;

    if let Some(font_family) = options.font_family {
        render_options.theme.font_family = font_family;
    }
    if let Some(font_size) = options.font_size {
        render_options.theme.font_size = font_size;
    }
    if let Some(width) = options.width {
        render_options.width = width;
    }
    if let Some(colors) = options.palette {
        render_options.layout.palette = Palette::new(colors).map_err(|error| error.to_string())?;
    }
    if let Some(mode) = options.color_mode {
        render_options.layout.color_mode = ColorMode::parse(&mode);
    }
    if let Some(max) = options.max_label_length {
        render_options.layout.max_label_length = max;
    }

    Ok(render_options)
}

#[wasm_bindgen]
pub fn render_tags_svg(labels: &str, options_json: Option<String>) -> Result<String, JsValue> {
    let options = if let Some(raw_options) = options_json {
        serde_json::from_str::<TagRenderOptions>(&raw_options)
            .map_err(|error| JsValue::from_str(&error.to_string()))?
    } else {
        TagRenderOptions::default()
    };

    let render_options = build_render_options(options).map_err(|error| JsValue::from_str(&error))?;
    render_with_options(labels, render_options).map_err(|error| JsValue::from_str(&error.to_string()))
}
