use egui::Color32;

fn with_alpha(color: Color32, alpha: u8) -> Color32 {
    Color32::from_rgba_unmultiplied(color.r(), color.g(), color.b(), alpha)
}

/// Parse a `#RRGGBB` string.
pub(crate) fn parse_color(hex: &str) -> Option<Color32> {
    let hex = hex.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }

    let r = u8::from_str_radix(hex.get(0..2)?, 16).ok()?;
    let g = u8::from_str_radix(hex.get(2..4)?, 16).ok()?;
    let b = u8::from_str_radix(hex.get(4..6)?, 16).ok()?;

    Some(Color32::from_rgb(r, g, b))
}

/// Fill used behind an entry block: the entry color at low opacity.
pub(crate) fn entry_fill(color: Color32) -> Color32 {
    with_alpha(color, 0x20)
}

#[derive(Clone, Copy)]
pub(crate) struct GridPalette {
    pub grid_bg: Color32,
    pub ruler_bg: Color32,
    pub ruler_text: Color32,
    pub hour_line: Color32,
    pub slot_line: Color32,
    pub entry_text: Color32,
    pub entry_subtext: Color32,
    pub preview_fill: Color32,
    pub preview_accent: Color32,
    pub fallback_entry: Color32,
}

impl GridPalette {
    pub fn from_visuals(visuals: &egui::Visuals) -> Self {
        let accent = Color32::from_rgb(59, 130, 246);
        if visuals.dark_mode {
            Self {
                grid_bg: Color32::from_rgb(30, 30, 34),
                ruler_bg: Color32::from_rgb(38, 38, 44),
                ruler_text: Color32::from_rgb(150, 150, 160),
                hour_line: Color32::from_rgb(70, 70, 78),
                slot_line: with_alpha(Color32::from_rgb(70, 70, 78), 150),
                entry_text: Color32::from_rgb(235, 235, 240),
                entry_subtext: Color32::from_rgb(180, 180, 190),
                preview_fill: with_alpha(accent, 80),
                preview_accent: accent,
                fallback_entry: Color32::from_rgb(100, 150, 200),
            }
        } else {
            Self {
                grid_bg: Color32::WHITE,
                ruler_bg: Color32::from_rgb(249, 250, 251),
                ruler_text: Color32::from_rgb(107, 114, 128),
                hour_line: Color32::from_rgb(229, 231, 235),
                slot_line: with_alpha(Color32::from_rgb(229, 231, 235), 170),
                entry_text: Color32::from_rgb(31, 41, 55),
                entry_subtext: Color32::from_rgb(75, 85, 99),
                preview_fill: with_alpha(accent, 77),
                preview_accent: accent,
                fallback_entry: Color32::from_rgb(100, 150, 200),
            }
        }
    }
}
