use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Theme {
    pub font_family: String,
    pub font_size: f32,
    pub text_color: String,
    pub background: String,
}

impl Theme {
    pub fn light() -> Self {
        Self {
            font_family: "\"PingFang SC\", \"Noto Sans CJK SC\", Roboto, sans-serif".to_string(),
            font_size: 14.0,
            text_color: "#FFFFFF".to_string(),
            background: "#FFFFFF".to_string(),
        }
    }

    pub fn dark() -> Self {
        Self {
            font_family: "Inter, Segoe UI, system-ui, -apple-system, sans-serif".to_string(),
            font_size: 14.0,
            text_color: "#1C2430".to_string(),
            background: "#1E1F24".to_string(),
        }
    }

    pub fn by_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "default" | "light" | "base" => Some(Self::light()),
            "dark" => Some(Self::dark()),
            _ => None,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::light()
    }
}
