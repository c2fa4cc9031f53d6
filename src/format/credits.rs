use serde::Serialize;

use super::capitalize;
use crate::models::{CreditRole, Film};

/// Emphasis classes for the highlighted cell of a credits row.
pub const EMPHASIS: &str = "bg-dark text-light";

/// One line of the credits table. Rows alternate which cell carries
/// [`EMPHASIS`], starting with the label cell on row 0.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreditRow {
    pub label: String,
    pub value: String,
    pub label_class: &'static str,
    pub value_class: &'static str,
}

impl CreditRow {
    /// `[label, value, label_class, value_class]`
    #[must_use]
    pub fn cells(&self) -> [&str; 4] {
        [&self.label, &self.value, self.label_class, self.value_class]
    }
}

#[must_use]
pub fn credits(film: &Film) -> Vec<CreditRow> {
    CreditRole::ALL
        .iter()
        .filter_map(|role| film.credit(*role).map(|names| (*role, names)))
        .enumerate()
        .map(|(i, (role, names))| {
            let (label_class, value_class) = if i % 2 == 0 {
                (EMPHASIS, "")
            } else {
                ("", EMPHASIS)
            };
            CreditRow {
                label: credit_label(role, names.len()),
                value: names.join(", "),
                label_class,
                value_class,
            }
        })
        .collect()
}

fn credit_label(role: CreditRole, count: usize) -> String {
    let mut label = capitalize(role.field_name());
    if count == 1 {
        label.pop();
    }
    label.push(':');
    label
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn film(value: serde_json::Value) -> Film {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_singular_and_plural_labels() {
        let rows = credits(&film(json!({
            "title": "The Big Combo",
            "path": "the-big-combo",
            "year": 1955,
            "directors": ["Joseph H. Lewis"],
            "stars": ["Cornel Wilde", "Richard Conte"]
        })));

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].label, "Director:");
        assert_eq!(rows[0].value, "Joseph H. Lewis");
        assert_eq!(rows[1].label, "Stars:");
        assert_eq!(rows[1].value, "Cornel Wilde, Richard Conte");
    }

    #[test]
    fn test_fixed_role_order_and_zebra_classes() {
        let rows = credits(&film(json!({
            "title": "Kiss Me Deadly",
            "path": "kiss-me-deadly",
            "distributors": ["United Artists"],
            "writers": ["A. I. Bezzerides"],
            "directors": ["Robert Aldrich", "uncredited"]
        })));

        let labels: Vec<&str> = rows.iter().map(|r| r.label.as_str()).collect();
        assert_eq!(labels, vec!["Directors:", "Writer:", "Distributor:"]);

        assert_eq!(rows[0].cells()[2..], [EMPHASIS, ""]);
        assert_eq!(rows[1].cells()[2..], ["", EMPHASIS]);
        assert_eq!(rows[2].cells()[2..], [EMPHASIS, ""]);
    }

    #[test]
    fn test_present_but_empty_list_keeps_plural_label() {
        let rows = credits(&film(json!({
            "title": "Nightmare Alley",
            "path": "nightmare-alley",
            "producers": []
        })));

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].cells()[..2], ["Producers:", ""]);
    }

    #[test]
    fn test_no_credits() {
        let rows = credits(&film(json!({"title": "Untitled", "path": "untitled"})));
        assert!(rows.is_empty());
    }
}
