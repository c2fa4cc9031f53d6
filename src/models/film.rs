use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::fmt;

/// Release year as it appears in the data files.
///
/// Curated records store a number, but submitted records (and a few older
/// entries) carry free text such as `"1944"` or `"c. 1950"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Year {
    Number(i64),
    Text(String),
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl Default for Year {
    fn default() -> Self {
        Self::Text(String::new())
    }
}

impl From<&str> for Year {
    fn from(raw: &str) -> Self {
        let trimmed = raw.trim();
        trimmed
            .parse::<i64>()
            .map_or_else(|_| Self::Text(trimmed.to_string()), Self::Number)
    }
}

/// Named contributor roles, in the order credits are listed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreditRole {
    Directors,
    Producers,
    Writers,
    Stars,
    Distributors,
}

impl CreditRole {
    pub const ALL: [Self; 5] = [
        Self::Directors,
        Self::Producers,
        Self::Writers,
        Self::Stars,
        Self::Distributors,
    ];

    #[must_use]
    pub const fn field_name(self) -> &'static str {
        match self {
            Self::Directors => "directors",
            Self::Producers => "producers",
            Self::Writers => "writers",
            Self::Stars => "stars",
            Self::Distributors => "distributors",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Map<String, Value>")]
pub struct Film {
    pub title: String,

    /// URL slug, unique across the collection. Empty when the record has none.
    pub path: String,

    pub year: Year,

    pub themeids: Vec<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub directors: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub producers: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub writers: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub stars: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub distributors: Option<Vec<String>>,

    /// Any other attributes carried by the record (synopsis, runtime, ...).
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,

    /// Attribute names in the order the record listed them. Empty for films
    /// built in code.
    #[serde(skip)]
    pub key_order: Vec<String>,
}

/// Shape of a film record on disk. Only `title` is required.
#[derive(Deserialize)]
struct FilmRecord {
    title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    path: String,
    #[serde(default, deserialize_with = "null_as_default")]
    year: Year,
    #[serde(default, deserialize_with = "null_as_default")]
    themeids: Vec<String>,
    #[serde(default)]
    directors: Option<Vec<String>>,
    #[serde(default)]
    producers: Option<Vec<String>>,
    #[serde(default)]
    writers: Option<Vec<String>>,
    #[serde(default)]
    stars: Option<Vec<String>>,
    #[serde(default)]
    distributors: Option<Vec<String>>,
    #[serde(flatten)]
    extra: BTreeMap<String, Value>,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl TryFrom<Map<String, Value>> for Film {
    type Error = serde_json::Error;

    fn try_from(record: Map<String, Value>) -> Result<Self, Self::Error> {
        let key_order = record.keys().cloned().collect();
        let fields: FilmRecord = serde_json::from_value(Value::Object(record))?;

        Ok(Self {
            title: fields.title,
            path: fields.path,
            year: fields.year,
            themeids: fields.themeids,
            directors: fields.directors,
            producers: fields.producers,
            writers: fields.writers,
            stars: fields.stars,
            distributors: fields.distributors,
            extra: fields.extra,
            key_order,
        })
    }
}

impl Film {
    /// Declared attributes in record order. Extra attributes follow these.
    pub const FIELDS: [&'static str; 9] = [
        "title",
        "path",
        "year",
        "themeids",
        "directors",
        "producers",
        "writers",
        "stars",
        "distributors",
    ];

    #[must_use]
    pub fn credit(&self, role: CreditRole) -> Option<&[String]> {
        let list = match role {
            CreditRole::Directors => &self.directors,
            CreditRole::Producers => &self.producers,
            CreditRole::Writers => &self.writers,
            CreditRole::Stars => &self.stars,
            CreditRole::Distributors => &self.distributors,
        };
        list.as_deref()
    }

    #[must_use]
    pub fn has_theme(&self, theme_id: &str) -> bool {
        self.themeids.iter().any(|id| id == theme_id)
    }

    /// Names of the attributes present on this record, in record order.
    /// Films built in code list their declared attributes first.
    #[must_use]
    pub fn field_names(&self) -> Vec<&str> {
        if !self.key_order.is_empty() {
            return self.key_order.iter().map(String::as_str).collect();
        }

        Self::FIELDS
            .iter()
            .copied()
            .filter(|name| self.column(name).is_some())
            .chain(self.extra.keys().map(String::as_str))
            .collect()
    }

    /// Display value of a single attribute. Lists are joined with `", "`.
    #[must_use]
    pub fn column(&self, key: &str) -> Option<String> {
        match key {
            "title" => Some(self.title.clone()),
            "path" => Some(self.path.clone()),
            "year" => Some(self.year.to_string()),
            "themeids" => Some(self.themeids.join(", ")),
            "directors" => self.directors.as_ref().map(|v| v.join(", ")),
            "producers" => self.producers.as_ref().map(|v| v.join(", ")),
            "writers" => self.writers.as_ref().map(|v| v.join(", ")),
            "stars" => self.stars.as_ref().map(|v| v.join(", ")),
            "distributors" => self.distributors.as_ref().map(|v| v.join(", ")),
            other => self.extra.get(other).map(display_value),
        }
    }
}

fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Array(items) => items
            .iter()
            .map(display_value)
            .collect::<Vec<_>>()
            .join(", "),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}
