use serde::Serialize;

use super::capitalize;
use crate::models::Film;

/// How row values are ordered relative to the requested columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColumnOrder {
    /// Values line up with the header, one per requested column. Absent
    /// attributes give an empty cell.
    #[default]
    Requested,
    /// Values follow the attribute order of each record, keeping only the
    /// requested attributes. Headers still follow the requested order, so a
    /// record whose attributes are ordered differently yields shifted cells.
    Record,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilmTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

#[must_use]
pub fn film_table(columns: &[&str], films: &[Film], order: ColumnOrder) -> FilmTable {
    let headers = columns.iter().map(|c| capitalize(c)).collect();

    let rows = films
        .iter()
        .map(|film| -> Vec<String> {
            match order {
                ColumnOrder::Requested => columns
                    .iter()
                    .map(|c| film.column(c).unwrap_or_default())
                    .collect(),
                ColumnOrder::Record => film
                    .field_names()
                    .into_iter()
                    .filter(|name| columns.contains(name))
                    .filter_map(|name| film.column(name))
                    .collect(),
            }
        })
        .collect();

    FilmTable { headers, rows }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const COLUMNS: [&str; 4] = ["title", "year", "directors", "distributors"];

    fn films() -> Vec<Film> {
        serde_json::from_value(json!([
            {
                "title": "The Hitch-Hiker",
                "path": "the-hitch-hiker",
                "year": 1953,
                "directors": ["Ida Lupino"],
                "distributors": ["RKO Radio Pictures"],
                "stars": ["Edmond O'Brien", "Frank Lovejoy"]
            },
            {
                "title": "Railroaded!",
                "path": "railroaded",
                "year": 1947,
                "directors": ["Anthony Mann"]
            }
        ]))
        .unwrap()
    }

    #[test]
    fn test_headers_are_capitalized() {
        let table = film_table(&COLUMNS, &films(), ColumnOrder::Requested);
        assert_eq!(table.headers, vec!["Title", "Year", "Directors", "Distributors"]);
    }

    #[test]
    fn test_requested_order_joins_lists_and_pads_absent() {
        let table = film_table(&COLUMNS, &films(), ColumnOrder::Requested);
        assert_eq!(
            table.rows,
            vec![
                vec!["The Hitch-Hiker", "1953", "Ida Lupino", "RKO Radio Pictures"],
                vec!["Railroaded!", "1947", "Anthony Mann", ""],
            ]
        );
    }

    #[test]
    fn test_requested_order_follows_column_list() {
        let table = film_table(&["year", "title"], &films()[1..], ColumnOrder::Requested);
        assert_eq!(table.rows, vec![vec!["1947", "Railroaded!"]]);
    }

    #[test]
    fn test_requested_order_keeps_cells_under_their_header() {
        let films: Vec<Film> = serde_json::from_value(json!([
            {"title": "T", "year": 1950, "distributors": ["RKO"]}
        ]))
        .unwrap();

        let table = film_table(&COLUMNS, &films, ColumnOrder::Requested);
        assert_eq!(table.rows, vec![vec!["T", "1950", "", "RKO"]]);
        assert_eq!(table.rows[0].len(), table.headers.len());
    }

    #[test]
    fn test_record_order_follows_record_keys() {
        let films: Vec<Film> =
            serde_json::from_value(json!([{"year": 1950, "title": "T", "path": "t"}])).unwrap();

        let table = film_table(&["title", "year"], &films, ColumnOrder::Record);
        assert_eq!(table.headers, vec!["Title", "Year"]);
        assert_eq!(table.rows, vec![vec!["1950", "T"]]);
    }

    #[test]
    fn test_record_order_ignores_column_list_order() {
        let table = film_table(&["year", "title"], &films()[1..], ColumnOrder::Record);
        assert_eq!(table.headers, vec!["Year", "Title"]);
        assert_eq!(table.rows, vec![vec!["Railroaded!", "1947"]]);
    }
}
