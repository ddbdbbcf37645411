use crate::layout::TagLayout;
use serde::Serialize;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

#[derive(Debug, Serialize)]
pub struct LayoutDump {
    pub width: f32,
    pub height: f32,
    pub color_mode: String,
    pub rows: Vec<RowDump>,
    pub tags: Vec<TagDump>,
}

#[derive(Debug, Serialize)]
pub struct RowDump {
    pub index: usize,
    pub start: usize,
    pub end: usize,
    pub top: f32,
    pub height: f32,
}

#[derive(Debug, Serialize)]
pub struct TagDump {
    pub index: usize,
    pub label: Option<String>,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub row: usize,
    pub color: String,
}

impl LayoutDump {
    pub fn from_layout(layout: &TagLayout) -> Self {
        let rows = layout
            .rows
            .iter()
            .map(|row| RowDump {
                index: row.index,
                start: row.start,
                end: row.end,
                top: row.top,
                height: row.height,
            })
            .collect();

        let tags = layout
            .tags
            .iter()
            .map(|tag| TagDump {
                index: tag.index,
                label: tag.label.clone(),
                x: tag.x,
                y: tag.y,
                width: tag.width,
                height: tag.height,
                row: tag.row,
                color: tag.color.clone(),
            })
            .collect();

        LayoutDump {
            width: layout.width,
            height: layout.height,
            color_mode: layout.color_mode.as_str().to_string(),
            rows,
            tags,
        }
    }

    pub fn to_json(&self) -> anyhow::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

pub fn write_layout_dump(path: &Path, layout: &TagLayout) -> anyhow::Result<()> {
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    let dump = LayoutDump::from_layout(layout);
    serde_json::to_writer_pretty(writer, &dump)?;
    Ok(())
}
