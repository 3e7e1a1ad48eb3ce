use gpui::SharedString;
use tracing::warn;

pub const TITLE_ENV: &str = "CONTACT_FORM_TITLE";
pub const WIDTH_ENV: &str = "CONTACT_FORM_WIDTH";
pub const HEIGHT_ENV: &str = "CONTACT_FORM_HEIGHT";

/// Window settings for the contact form binary.
#[derive(Clone, Debug, PartialEq)]
pub struct ContactFormConfig {
    pub title: SharedString,
    pub width: f32,
    pub height: f32,
}

impl Default for ContactFormConfig {
    fn default() -> Self {
        Self {
            title: "Contact Form".into(),
            width: 480.0,
            height: 640.0,
        }
    }
}

impl ContactFormConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Starts from the defaults and applies every override `lookup` yields.
    /// Unparsable sizes are logged and ignored.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        if let Some(title) = lookup(TITLE_ENV).filter(|title| !title.trim().is_empty()) {
            config.title = title.into();
        }
        if let Some(width) = parse_dimension(WIDTH_ENV, lookup(WIDTH_ENV)) {
            config.width = width;
        }
        if let Some(height) = parse_dimension(HEIGHT_ENV, lookup(HEIGHT_ENV)) {
            config.height = height;
        }
        config
    }
}

fn parse_dimension(key: &str, raw: Option<String>) -> Option<f32> {
    let raw = raw?;
    match raw.trim().parse::<f32>() {
        Ok(value) if value.is_finite() && value > 0.0 => Some(value),
        _ => {
            warn!(key, value = %raw, "ignoring invalid window dimension");
            None
        }
    }
}
