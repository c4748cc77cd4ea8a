//! Pixel dimensions.

use pictor_error::ValidationError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::str::FromStr;

/// Target pixel size of a generated image.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, derive_getters::Getters, derive_more::Display,
)]
#[display("{}x{}", width, height)]
pub struct ImageSize {
    /// Width in pixels
    width: u32,
    /// Height in pixels
    height: u32,
}

impl ImageSize {
    /// Create a size from explicit dimensions.
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// The larger of the two dimensions.
    pub fn max_dimension(&self) -> u32 {
        self.width.max(self.height)
    }
}

impl FromStr for ImageSize {
    type Err = ValidationError;

    /// Parses `"WxH"`, e.g. `"1024x1536"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (w, h) = s
            .trim()
            .split_once(['x', 'X'])
            .ok_or_else(|| ValidationError::new(format!("size '{}' must look like WxH", s)))?;
        let width = w
            .parse::<u32>()
            .map_err(|_| ValidationError::new(format!("invalid width in size '{}'", s)))?;
        let height = h
            .parse::<u32>()
            .map_err(|_| ValidationError::new(format!("invalid height in size '{}'", s)))?;
        if width == 0 || height == 0 {
            return Err(ValidationError::new(format!(
                "size '{}' must have non-zero dimensions",
                s
            )));
        }
        Ok(Self { width, height })
    }
}

impl Serialize for ImageSize {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ImageSize {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(|e: ValidationError| serde::de::Error::custom(e.message))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_size() {
        let size: ImageSize = "1536x1024".parse().unwrap();
        assert_eq!(*size.width(), 1536);
        assert_eq!(*size.height(), 1024);
        assert_eq!(size.to_string(), "1536x1024");
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!("1024".parse::<ImageSize>().is_err());
        assert!("axb".parse::<ImageSize>().is_err());
        assert!("0x512".parse::<ImageSize>().is_err());
    }
}
