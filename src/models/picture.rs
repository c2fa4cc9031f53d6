use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PictureType {
    Scene,
    Poster,
    Other(String),
}

impl PictureType {
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Scene => "scene",
            Self::Poster => "poster",
            Self::Other(s) => s,
        }
    }
}

impl From<String> for PictureType {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "scene" => Self::Scene,
            "poster" => Self::Poster,
            _ => Self::Other(raw),
        }
    }
}

impl From<PictureType> for String {
    fn from(kind: PictureType) -> Self {
        match kind {
            PictureType::Other(s) => s,
            known => known.as_str().to_string(),
        }
    }
}

/// Placement role of a picture on the site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rank {
    /// Hero image.
    Main,
    /// Decorative rotation along the page edge.
    Secondary,
    /// Placeholder for themes with no scene of their own.
    NoPic,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Picture {
    #[serde(rename = "type")]
    pub kind: PictureType,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rank: Option<Rank>,

    /// Image location relative to the public directory.
    #[serde(default, alias = "file", alias = "url", skip_serializing_if = "Option::is_none")]
    pub src: Option<String>,

    /// Title of the film this picture is taken from.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub film: Option<String>,

    #[serde(default, rename = "themeIds")]
    pub theme_ids: Vec<String>,

    #[serde(default)]
    pub stars: Vec<String>,

    /// Market or release the poster was printed for, e.g. "Italian".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub origin: Option<String>,

    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl Picture {
    #[must_use]
    pub fn is_scene(&self) -> bool {
        self.kind == PictureType::Scene
    }

    #[must_use]
    pub fn is_poster(&self) -> bool {
        self.kind == PictureType::Poster
    }

    #[must_use]
    pub fn has_rank(&self, rank: Rank) -> bool {
        self.rank == Some(rank)
    }

    #[must_use]
    pub fn illustrates(&self, theme_id: &str) -> bool {
        self.theme_ids.iter().any(|id| id == theme_id)
    }

    /// Film title, or `None` when the picture is not tied to a film.
    #[must_use]
    pub fn film_title(&self) -> Option<&str> {
        self.film.as_deref().filter(|t| !t.is_empty())
    }
}
