//! Cross-file reference report.
//!
//! The site never enforces references between files; a dangling one only
//! shows up as a failed page. This report lists them ahead of time.

use std::collections::HashSet;
use std::fmt;

use crate::models::{Film, Picture, Theme};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DanglingRef {
    /// A film tagged with a theme id that no theme has.
    FilmTheme { film: String, theme_id: String },
    /// A picture pointing at a film title that no film has.
    PictureFilm { index: usize, film: String },
    /// A joined theme listing a film title that no film has.
    ThemeFilm { theme_id: String, film: String },
}

impl fmt::Display for DanglingRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FilmTheme { film, theme_id } => {
                write!(f, "film '{film}' references unknown theme '{theme_id}'")
            }
            Self::PictureFilm { index, film } => {
                write!(f, "picture #{index} references unknown film '{film}'")
            }
            Self::ThemeFilm { theme_id, film } => {
                write!(f, "theme '{theme_id}' lists unknown film '{film}'")
            }
        }
    }
}

#[must_use]
pub fn dangling_refs(
    films: &[Film],
    pictures: &[Picture],
    themes: &[Theme],
    theme_films: &[Theme],
) -> Vec<DanglingRef> {
    let titles: &HashSet<&str> = &films.iter().map(|f| f.title.as_str()).collect();
    let theme_ids: &HashSet<&str> = &themes.iter().map(|t| t.id.as_str()).collect();

    let film_themes = films.iter().flat_map(|film| {
        film.themeids
            .iter()
            .filter(move |id| !theme_ids.contains(id.as_str()))
            .map(move |id| DanglingRef::FilmTheme {
                film: film.title.clone(),
                theme_id: id.clone(),
            })
    });

    let picture_films = pictures.iter().enumerate().filter_map(|(index, pic)| {
        pic.film_title()
            .filter(|title| !titles.contains(title))
            .map(|title| DanglingRef::PictureFilm {
                index,
                film: title.to_string(),
            })
    });

    let joined_films = theme_films.iter().flat_map(|theme| {
        theme
            .films
            .iter()
            .filter(move |title| !titles.contains(title.as_str()))
            .map(move |title| DanglingRef::ThemeFilm {
                theme_id: theme.id.clone(),
                film: title.clone(),
            })
    });

    film_themes.chain(picture_films).chain(joined_films).collect()
}
