use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Theme {
    pub id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Titles of the films carrying this theme, in film-collection order.
    /// Empty until the theme-films join has run.
    #[serde(default)]
    pub films: Vec<String>,

    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl Theme {
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .or_else(|| self.extra.get("label").and_then(Value::as_str))
            .unwrap_or(&self.id)
    }

    #[must_use]
    pub fn includes_film(&self, title: &str) -> bool {
        self.films.iter().any(|t| t == title)
    }
}
