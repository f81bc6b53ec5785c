// Theme support for the TUI
//
// Every bundled palette is true color (RGB) so its text contrast can be
// checked against WCAG 2 thresholds. Themes switch at runtime (F3).

use ratatui::style::Color;
use ratatui::widgets::BorderType;

/// Bundled theme names, in F3 cycle order
pub const THEME_NAMES: [&str; 3] = ["dark", "light", "high-contrast"];

/// WCAG AA minimum for body text
pub const MIN_TEXT_CONTRAST: f64 = 4.5;

/// Color palette for the TUI
#[derive(Debug, Clone)]
pub struct Theme {
    pub name: String,

    // Base
    pub background: Color,
    pub foreground: Color,
    /// Secondary text (descriptions, hints)
    pub muted: Color,
    pub border: Color,
    pub border_type: BorderType,

    // Interaction
    /// Focus ring / focused border
    pub focus: Color,
    pub selection: Color,
    pub selection_fg: Color,
    /// Dimmed page behind the dialog
    pub backdrop: Color,

    // Feedback
    pub error: Color,
    pub success: Color,
    pub title: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    /// Load theme by name; unknown names fall back to dark
    pub fn by_name(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "light" => Self::light(),
            "high-contrast" | "highcontrast" | "hc" => Self::high_contrast(),
            "dark" => Self::dark(),
            other => {
                tracing::warn!("Unknown theme {:?}, using dark", other);
                Self::dark()
            }
        }
    }

    /// Contrast of body text against the background
    pub fn text_contrast(&self) -> Option<f64> {
        contrast_ratio(self.foreground, self.background)
    }

    /// Name of the theme after `current` in the cycle
    pub fn next_name(current: &str) -> &'static str {
        let idx = THEME_NAMES
            .iter()
            .position(|&n| n == current)
            .unwrap_or(THEME_NAMES.len() - 1);
        THEME_NAMES[(idx + 1) % THEME_NAMES.len()]
    }

    pub fn dark() -> Self {
        Self {
            name: "dark".to_string(),
            background: Color::Rgb(0x1e, 0x1e, 0x2e),
            foreground: Color::Rgb(0xe6, 0xe6, 0xf0),
            muted: Color::Rgb(0xa6, 0xad, 0xc8),
            border: Color::Rgb(0x6c, 0x70, 0x86),
            border_type: BorderType::Rounded,
            focus: Color::Rgb(0xf9, 0xe2, 0xaf),
            selection: Color::Rgb(0x45, 0x47, 0x5a),
            selection_fg: Color::Rgb(0xff, 0xff, 0xff),
            backdrop: Color::Rgb(0x11, 0x11, 0x1b),
            error: Color::Rgb(0xf3, 0x8b, 0xa8),
            success: Color::Rgb(0xa6, 0xe3, 0xa1),
            title: Color::Rgb(0x89, 0xdc, 0xeb),
        }
    }

    pub fn light() -> Self {
        Self {
            name: "light".to_string(),
            background: Color::Rgb(0xff, 0xff, 0xff),
            foreground: Color::Rgb(0x1f, 0x23, 0x28),
            muted: Color::Rgb(0x57, 0x60, 0x6a),
            border: Color::Rgb(0x8c, 0x95, 0x9f),
            border_type: BorderType::Rounded,
            focus: Color::Rgb(0x05, 0x50, 0xae),
            selection: Color::Rgb(0x05, 0x50, 0xae),
            selection_fg: Color::Rgb(0xff, 0xff, 0xff),
            backdrop: Color::Rgb(0xd0, 0xd7, 0xde),
            error: Color::Rgb(0xb3, 0x26, 0x1e),
            success: Color::Rgb(0x1a, 0x7f, 0x37),
            title: Color::Rgb(0x05, 0x50, 0xae),
        }
    }

    /// Maximum contrast; thick borders so focus is visible without color
    pub fn high_contrast() -> Self {
        Self {
            name: "high-contrast".to_string(),
            background: Color::Rgb(0x00, 0x00, 0x00),
            foreground: Color::Rgb(0xff, 0xff, 0xff),
            muted: Color::Rgb(0xd0, 0xd0, 0xd0),
            border: Color::Rgb(0xff, 0xff, 0xff),
            border_type: BorderType::Thick,
            focus: Color::Rgb(0xff, 0xff, 0x00),
            selection: Color::Rgb(0xff, 0xff, 0x00),
            selection_fg: Color::Rgb(0x00, 0x00, 0x00),
            backdrop: Color::Rgb(0x00, 0x00, 0x00),
            error: Color::Rgb(0xff, 0x6b, 0x6b),
            success: Color::Rgb(0x7c, 0xff, 0x7c),
            title: Color::Rgb(0x00, 0xff, 0xff),
        }
    }
}

/// WCAG 2 relative luminance of an RGB color; None for palette colors
pub fn relative_luminance(color: Color) -> Option<f64> {
    let Color::Rgb(r, g, b) = color else {
        return None;
    };
    let channel = |c: u8| {
        let c = f64::from(c) / 255.0;
        if c <= 0.039_28 {
            c / 12.92
        } else {
            ((c + 0.055) / 1.055).powf(2.4)
        }
    };
    Some(0.2126 * channel(r) + 0.7152 * channel(g) + 0.0722 * channel(b))
}

/// WCAG 2 contrast ratio between two RGB colors (1.0 ..= 21.0)
pub fn contrast_ratio(a: Color, b: Color) -> Option<f64> {
    let la = relative_luminance(a)?;
    let lb = relative_luminance(b)?;
    let (lighter, darker) = if la >= lb { (la, lb) } else { (lb, la) };
    Some((lighter + 0.05) / (darker + 0.05))
}
