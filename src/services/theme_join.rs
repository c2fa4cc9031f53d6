//! Offline join of films onto themes.
//!
//! Run once before serving: reads the film and theme collections, attaches
//! to each theme the titles of the films tagged with it, and writes the
//! augmented themes to the file the site reads at request time.

use anyhow::{Context, Result};
use std::path::Path;
use tracing::info;

use crate::data::read_json;
use crate::models::{Film, Theme};

/// Attach to each theme the titles of films whose `themeids` include its
/// id, in film-collection order. Existing `films` lists are replaced.
#[must_use]
pub fn join_theme_films(films: &[Film], themes: Vec<Theme>) -> Vec<Theme> {
    themes
        .into_iter()
        .map(|mut theme| {
            theme.films = films
                .iter()
                .filter(|film| film.has_theme(&theme.id))
                .map(|film| film.title.clone())
                .collect();
            theme
        })
        .collect()
}

pub fn encode_themes(themes: &[Theme]) -> serde_json::Result<String> {
    serde_json::to_string(themes)
}

/// Read both collections, join, and write the result. Returns the number of
/// themes written.
pub async fn write_theme_films(films_path: &Path, themes_path: &Path, out_path: &Path) -> Result<usize> {
    let films: Vec<Film> = read_json(films_path).await?;
    let themes: Vec<Theme> = read_json(themes_path).await?;

    let joined = join_theme_films(&films, themes);
    let encoded = encode_themes(&joined).context("Failed to encode joined themes")?;

    tokio::fs::write(out_path, encoded)
        .await
        .with_context(|| format!("Failed to write {}", out_path.display()))?;

    info!(
        themes = joined.len(),
        films = films.len(),
        path = %out_path.display(),
        "Theme films written"
    );

    Ok(joined.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn fixtures() -> (Vec<Film>, Vec<Theme>) {
        let films = serde_json::from_value(json!([
            {"title": "A", "themeids": ["t1"]},
            {"title": "B", "themeids": ["t1", "t2"]}
        ]))
        .unwrap();
        let themes = serde_json::from_value(json!([{"id": "t1"}, {"id": "t2"}])).unwrap();
        (films, themes)
    }

    #[test]
    fn test_join_attaches_titles_in_film_order() {
        let (films, themes) = fixtures();
        let joined = join_theme_films(&films, themes);

        assert_eq!(joined[0].films, vec!["A", "B"]);
        assert_eq!(joined[1].films, vec!["B"]);
    }

    #[test]
    fn test_theme_without_films_gets_empty_list() {
        let (films, _) = fixtures();
        let themes = serde_json::from_value(json!([{"id": "t3", "name": "Amnesia"}])).unwrap();

        let joined = join_theme_films(&films, themes);
        let encoded = encode_themes(&joined).unwrap();
        assert_eq!(encoded, r#"[{"id":"t3","name":"Amnesia","films":[]}]"#);
    }

    #[test]
    fn test_join_replaces_stale_membership() {
        let (films, _) = fixtures();
        let themes =
            serde_json::from_value(json!([{"id": "t2", "films": ["Gone"]}])).unwrap();

        let joined = join_theme_films(&films, themes);
        assert_eq!(joined[0].films, vec!["B"]);
    }

    #[tokio::test]
    async fn test_rerun_is_byte_identical() {
        let dir = tempfile::tempdir().unwrap();
        let films = dir.path().join("filmdata.json");
        let themes = dir.path().join("themesdata.json");
        let out = dir.path().join("themedata.json");

        std::fs::write(
            &films,
            r#"[{"title":"A","themeids":["t1"]},{"title":"B","themeids":["t1","t2"]}]"#,
        )
        .unwrap();
        std::fs::write(&themes, r#"[{"id":"t1","blurb":"x"},{"id":"t2"}]"#).unwrap();

        assert_eq!(write_theme_films(&films, &themes, &out).await.unwrap(), 2);
        let first = std::fs::read(&out).unwrap();

        write_theme_films(&films, &themes, &out).await.unwrap();
        let second = std::fs::read(&out).unwrap();

        assert_eq!(first, second);

        let written: Vec<Theme> = serde_json::from_slice(&first).unwrap();
        assert_eq!(written[0].films, vec!["A", "B"]);
        assert_eq!(written[0].extra["blurb"], "x");
    }
}
