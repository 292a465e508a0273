use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ImageSize {
    Small,
    #[default]
    Normal,
    Large,
    Png,
    ArtCrop,
    BorderCrop,
}

impl ImageSize {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            ImageSize::Small => "small",
            ImageSize::Normal => "normal",
            ImageSize::Large => "large",
            ImageSize::Png => "png",
            ImageSize::ArtCrop => "art_crop",
            ImageSize::BorderCrop => "border_crop",
        }
    }
}

impl Display for ImageSize {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Unknown image size '{0}'")]
pub struct UnknownImageSize(String);

impl FromStr for ImageSize {
    type Err = UnknownImageSize;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "small" => Ok(ImageSize::Small),
            "normal" => Ok(ImageSize::Normal),
            "large" => Ok(ImageSize::Large),
            "png" => Ok(ImageSize::Png),
            "art_crop" => Ok(ImageSize::ArtCrop),
            "border_crop" => Ok(ImageSize::BorderCrop),
            other => Err(UnknownImageSize(other.to_string())),
        }
    }
}

/// Image URIs keyed by size name, exactly as the card service sends them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct ImageUris(HashMap<String, String>);

impl ImageUris {
    #[must_use]
    pub fn get(&self, size: ImageSize) -> Option<&str> {
        self.0.get(size.as_str()).map(String::as_str)
    }

    /// The entry for `size`, falling back to the normal size.
    #[must_use]
    pub fn select(&self, size: ImageSize) -> Option<&str> {
        self.get(size).or_else(|| self.get(ImageSize::Normal))
    }
}

impl<const N: usize> From<[(ImageSize, &str); N]> for ImageUris {
    fn from(entries: [(ImageSize, &str); N]) -> Self {
        Self(
            entries
                .into_iter()
                .map(|(size, uri)| (size.as_str().to_string(), uri.to_string()))
                .collect(),
        )
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Face {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub mana_cost: Option<String>,
    #[serde(default)]
    pub type_line: Option<String>,
    #[serde(default)]
    pub oracle_text: Option<String>,
    #[serde(default)]
    pub image_uris: Option<ImageUris>,
}

impl Face {
    #[must_use]
    pub fn image_url(&self, size: ImageSize) -> Option<&str> {
        self.image_uris.as_ref()?.select(size)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Card {
    pub name: String,
    #[serde(default)]
    pub mana_cost: Option<String>,
    #[serde(default)]
    pub type_line: Option<String>,
    #[serde(default)]
    pub oracle_text: Option<String>,
    #[serde(default)]
    pub scryfall_uri: Option<String>,
    #[serde(default)]
    pub image_uris: Option<ImageUris>,
    #[serde(default)]
    pub card_faces: Option<Vec<Face>>,
}

impl Card {
    #[must_use]
    pub fn faces(&self) -> &[Face] {
        self.card_faces.as_deref().unwrap_or_default()
    }

    #[must_use]
    pub fn is_multi_faced(&self) -> bool {
        self.faces().len() > 1
    }
}
