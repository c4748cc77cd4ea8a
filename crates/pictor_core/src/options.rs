//! Generation options exposed to tool callers.

use serde::{Deserialize, Serialize};

/// Visual style of the generated image.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    strum::AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ImageStyle {
    /// Digital illustration
    #[default]
    Illustration,
    /// Photorealistic rendering
    Photo,
    /// Rendered 3D scene
    #[serde(rename = "3d")]
    #[strum(serialize = "3d")]
    ThreeD,
    /// Flat vector graphic
    Flat,
    /// Minimalist design
    Minimal,
}

impl ImageStyle {
    /// Natural-language descriptor prepended to the prompt.
    pub fn descriptor(&self) -> &'static str {
        match self {
            ImageStyle::Illustration => "A polished digital illustration",
            ImageStyle::Photo => "A photorealistic, high-detail photograph",
            ImageStyle::ThreeD => "A clean 3D render with soft studio lighting",
            ImageStyle::Flat => "A flat vector graphic with bold shapes",
            ImageStyle::Minimal => "A minimalist design with generous negative space",
        }
    }
}

/// Background treatment requested for the image.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    strum::AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum BackgroundMode {
    /// Plain solid background
    #[default]
    Solid,
    /// Transparent background
    Transparent,
    /// Soft gradient background
    Gradient,
}

impl BackgroundMode {
    /// Phrase appended to the prompt.
    pub fn phrase(&self) -> &'static str {
        match self {
            BackgroundMode::Solid => "solid background",
            BackgroundMode::Transparent => "transparent background",
            BackgroundMode::Gradient => "soft gradient background",
        }
    }
}

/// Encoding of the persisted image file.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    strum::AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum OutputFormat {
    /// PNG image
    #[default]
    Png,
    /// WebP image
    Webp,
}

impl OutputFormat {
    /// File extension without the leading dot.
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Png => "png",
            OutputFormat::Webp => "webp",
        }
    }

    /// MIME type reported to tool callers.
    pub fn mime_type(&self) -> &'static str {
        match self {
            OutputFormat::Png => "image/png",
            OutputFormat::Webp => "image/webp",
        }
    }
}
