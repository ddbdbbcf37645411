use fontdb::{Database, Family, Query, Stretch, Style, Weight};
use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::sync::Mutex;
use ttf_parser::{Face, GlyphId};

static GLYPH_METRICS: Lazy<Mutex<GlyphMetrics>> = Lazy::new(|| Mutex::new(GlyphMetrics::new()));

/// Width of `text` in the first installed face matching `font_family`.
/// `None` when no face could be resolved.
pub fn measure_text_width(text: &str, font_size: f32, font_family: &str) -> Option<f32> {
    if text.is_empty() || font_size <= 0.0 {
        return Some(0.0);
    }
    let mut guard = GLYPH_METRICS.lock().ok()?;
    guard.measure(text, font_size, font_family)
}

struct GlyphMetrics {
    db: Database,
    system_fonts_loaded: bool,
    faces: HashMap<String, Option<LoadedFace>>,
}

impl GlyphMetrics {
    fn new() -> Self {
        Self {
            db: Database::new(),
            system_fonts_loaded: false,
            faces: HashMap::new(),
        }
    }

    fn measure(&mut self, text: &str, font_size: f32, font_family: &str) -> Option<f32> {
        let key = family_key(font_family);
        if !self.faces.contains_key(&key) {
            let face = self.load_face(font_family);
            if face.is_none() {
                tracing::debug!(family = %key, "no installed face, using fallback metrics");
            }
            self.faces.insert(key.clone(), face);
        }
        let face = self.faces.get_mut(&key)?.as_mut()?;
        Some(face.advance_width(text, font_size))
    }

    fn load_face(&mut self, font_family: &str) -> Option<LoadedFace> {
        let names: Vec<String> = font_family
            .split(',')
            .map(|part| part.trim().trim_matches('"').trim_matches('\'').to_string())
            .filter(|name| !name.is_empty())
            .collect();
        let mut families: Vec<Family<'_>> = names
            .iter()
            .map(|name| match name.to_ascii_lowercase().as_str() {
                "serif" => Family::Serif,
                "monospace" | "ui-monospace" => Family::Monospace,
                "cursive" => Family::Cursive,
                "fantasy" => Family::Fantasy,
                "sans-serif" | "system-ui" | "-apple-system" | "ui-sans-serif" => Family::SansSerif,
                _ => Family::Name(name.as_str()),
            })
            .collect();
        if families.is_empty() {
            families.push(Family::SansSerif);
        }

        if !self.system_fonts_loaded {
            self.db.load_system_fonts();
            self.system_fonts_loaded = true;
        }

        let query = Query {
            families: &families,
            weight: Weight::NORMAL,
            stretch: Stretch::Normal,
            style: Style::Normal,
        };
        let id = self.db.query(&query)?;
        self.db
            .with_face_data(id, |data, index| LoadedFace::parse(data.to_vec(), index))
            .flatten()
    }
}

/// Advance widths in font units, cached per glyph.
struct LoadedFace {
    units_per_em: u16,
    advances: HashMap<char, Option<u16>>,
    data: Vec<u8>,
    index: u32,
}

impl LoadedFace {
    fn parse(data: Vec<u8>, index: u32) -> Option<Self> {
        let face = Face::parse(&data, index).ok()?;
        let units_per_em = face.units_per_em().max(1);
        Some(Self {
            units_per_em,
            advances: HashMap::new(),
            data,
            index,
        })
    }

    fn advance_width(&mut self, text: &str, font_size: f32) -> f32 {
        let scale = font_size / self.units_per_em as f32;
        let fallback = font_size * 0.56;
        let missing: Vec<char> = text
            .chars()
            .filter(|ch| !self.advances.contains_key(ch))
            .collect();
        if !missing.is_empty()
            && let Ok(face) = Face::parse(&self.data, self.index)
        {
            for ch in missing {
                let advance = face
                    .glyph_index(ch)
                    .and_then(|glyph: GlyphId| face.glyph_hor_advance(glyph));
                self.advances.insert(ch, advance);
            }
        }

        text.chars()
            .filter(|ch| *ch != '\n')
            .map(|ch| match self.advances.get(&ch).copied().flatten() {
                Some(advance) if advance > 0 => advance as f32 * scale,
                _ => fallback,
            })
            .sum::<f32>()
            .max(0.0)
    }
}

fn family_key(font_family: &str) -> String {
    let trimmed = font_family.trim();
    if trimmed.is_empty() {
        "sans-serif".to_string()
    } else {
        trimmed.to_string()
    }
}
