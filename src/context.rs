//! Application state read while contextualizing phrases.

use serde::{
    Deserialize,
    Serialize,
};

/// Color representation used by the pen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PenColorModel {
    #[default]
    Hsv,
    Hsl,
}

/// External settings the translator consults before lookup.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TranslationContext {
    pub pen_color_model: PenColorModel,
}

impl TranslationContext {
    #[must_use]
    pub const fn new(pen_color_model: PenColorModel) -> Self {
        Self { pen_color_model }
    }
}
