//! Numeric edit-box state shared by range widgets
//!
//! Holds the text the host's line-edit control displays and a validity
//! flag the host renders as an error tint. Parsing and range checks live
//! with the owning widget.

/// Edit-box text and validity state
#[derive(Clone, Debug)]
pub struct EditBoxData {
    text: String,
    valid: bool,
    max_width: f32,
}

impl EditBoxData {
    pub fn new(initial: f64, max_width: f32) -> Self {
        Self {
            text: precise_text(initial),
            valid: true,
            max_width,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// Whether the last committed input was accepted
    pub fn is_valid(&self) -> bool {
        self.valid
    }

    pub fn mark_valid(&mut self) {
        self.valid = true;
    }

    pub fn mark_invalid(&mut self) {
        self.valid = false;
    }

    /// Maximum control width in pixels, for host layout
    pub fn max_width(&self) -> f32 {
        self.max_width
    }
}

/// Parse committed edit-box text as a finite float
pub fn parse_input(text: &str) -> Option<f64> {
    text.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Short rendering used while the position control drives the text,
/// truncated to four characters ("7.5", "0.12", "-0.3")
pub fn short_text(value: f64) -> String {
    let mut s = format!("{value}");
    s.truncate(4);
    s
}

/// Two-decimal rendering used for the initial display
pub fn precise_text(value: f64) -> String {
    format!("{value:.2}")
}
