use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::clock::HandStyle;
use crate::hand::HandSprite;
use crate::theme_rules;

const FALLBACK_FONT: &str = "sans-serif";

/// Theme baked in at build time from `theme/clock.toml`.
#[derive(Clone, Copy, Debug)]
pub struct BuiltinTheme {
    pub name: &'static str,
    pub background_image: Option<&'static str>,
    pub primary_color: &'static str,
    pub text_color: &'static str,
    pub font_family: &'static str,
    pub hour_hand_image: Option<&'static str>,
    pub minute_hand_image: Option<&'static str>,
    pub hand_image_angle_adjustment: f64,
}

include!(concat!(env!("OUT_DIR"), "/builtin_theme.rs"));

#[derive(Debug, thiserror::Error)]
pub enum ThemeError {
    #[error("malformed host message: {0}")]
    Message(#[source] serde_json::Error),
    #[error("theme override rejected: {0}")]
    Override(#[source] serde_json::Error),
    #[error("invalid theme: {0}")]
    Invalid(String),
    #[error("message from untrusted origin '{origin}'")]
    UntrustedOrigin { origin: String },
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ClockTheme {
    pub name: String,
    pub background_image: Option<String>,
    pub primary_color: String,
    pub text_color: String,
    pub font_family: String,
    pub hour_hand_image: Option<String>,
    pub minute_hand_image: Option<String>,
    pub hand_image_angle_adjustment: f64,
}

impl Default for ClockTheme {
    fn default() -> Self {
        Self::from(&BUILTIN_THEME)
    }
}

impl From<&BuiltinTheme> for ClockTheme {
    fn from(builtin: &BuiltinTheme) -> Self {
        Self {
            name: builtin.name.to_string(),
            background_image: builtin.background_image.map(str::to_string),
            primary_color: builtin.primary_color.to_string(),
            text_color: builtin.text_color.to_string(),
            font_family: builtin.font_family.to_string(),
            hour_hand_image: builtin.hour_hand_image.map(str::to_string),
            minute_hand_image: builtin.minute_hand_image.map(str::to_string),
            hand_image_angle_adjustment: builtin.hand_image_angle_adjustment,
        }
    }
}

impl ClockTheme {
    /// Applies a partial camelCase object on top of this theme. The result
    /// must pass [`ClockTheme::validate`].
    pub fn merged(&self, overrides: &Map<String, Value>) -> Result<Self, ThemeError> {
        let mut value = serde_json::to_value(self).map_err(ThemeError::Override)?;
        if let Value::Object(fields) = &mut value {
            for (key, field) in overrides {
                fields.insert(key.clone(), field.clone());
            }
        }
        let next: Self = serde_json::from_value(value).map_err(ThemeError::Override)?;
        next.validate()?;
        Ok(next)
    }

    /// Same rules `build.rs` applies to `theme/clock.toml`: a non-empty name,
    /// colors and a font that cannot break out of an inline style
    /// declaration, and image sources that are neither `data:` URLs nor able
    /// to close a `url(...)`.
    pub fn validate(&self) -> Result<(), ThemeError> {
        let images = [
            ("background_image", self.background_image.as_deref()),
            ("hour_hand_image", self.hour_hand_image.as_deref()),
            ("minute_hand_image", self.minute_hand_image.as_deref()),
        ];
        theme_rules::check_name(&self.name)
            .and_then(|()| theme_rules::check_color("primary_color", &self.primary_color))
            .and_then(|()| theme_rules::check_color("text_color", &self.text_color))
            .and_then(|()| theme_rules::check_font(&self.font_family))
            .and_then(|()| {
                images.iter().try_for_each(|(field, src)| {
                    src.map_or(Ok(()), |src| theme_rules::check_image(field, src))
                })
            })
            .map_err(ThemeError::Invalid)?;
        if !self.hand_image_angle_adjustment.is_finite() {
            return Err(ThemeError::Invalid(
                "hand_image_angle_adjustment must be finite".to_string(),
            ));
        }
        Ok(())
    }

    pub fn hand_style(&self) -> HandStyle {
        HandStyle {
            hour: HandSprite::from_href(self.hour_hand_image.as_deref()),
            minute: HandSprite::from_href(self.minute_hand_image.as_deref()),
            image_adjustment: self.hand_image_angle_adjustment,
        }
    }

    pub fn background_image(&self) -> Option<&str> {
        self.background_image
            .as_deref()
            .map(str::trim)
            .filter(|src| !src.is_empty())
    }

    /// Stylesheet to link when the font is given as a URL.
    pub fn font_stylesheet(&self) -> Option<&str> {
        let font = self.font_family.trim();
        is_http_url(font).then_some(font)
    }

    /// CSS family name: the `family=` parameter of a stylesheet URL, or the
    /// configured value itself when it is a plain name.
    pub fn font_family_name(&self) -> String {
        font_family_name(&self.font_family)
    }
}

/// Unlike a strict `family=` lookup, a plain family name such as `Georgia`
/// is returned unchanged and `+` in the URL parameter is decoded to a space.
pub fn font_family_name(raw: &str) -> String {
    let raw = raw.trim();
    if raw.is_empty() {
        return FALLBACK_FONT.to_string();
    }
    if !is_http_url(raw) {
        return raw.to_string();
    }
    let Some(start) = raw.find("family=") else {
        return FALLBACK_FONT.to_string();
    };
    let rest = &raw[start + "family=".len()..];
    let family = rest.split('&').next().unwrap_or_default().replace('+', " ");
    if family.trim().is_empty() {
        FALLBACK_FONT.to_string()
    } else {
        family
    }
}

fn is_http_url(value: &str) -> bool {
    value.starts_with("http://") || value.starts_with("https://")
}

/// Message a hosting page posts to push configuration changes.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum HostMessage {
    Theme { theme: Map<String, Value> },
}

impl HostMessage {
    pub fn parse(raw: &str) -> Result<Self, ThemeError> {
        serde_json::from_str(raw).map_err(ThemeError::Message)
    }
}
