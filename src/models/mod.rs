pub mod film;
pub mod picture;
pub mod theme;

pub use film::{CreditRole, Film, Year};
pub use picture::{Picture, PictureType, Rank};
pub use theme::Theme;

use thiserror::Error;

/// A key that does not resolve to a record in the loaded collections.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    #[error("no film titled '{0}'")]
    FilmTitle(String),

    #[error("no film at path '{0}'")]
    FilmPath(String),

    #[error("no theme with id '{0}'")]
    Theme(String),
}

/// First film with the given title.
pub fn find_film_by_title<'a>(films: &'a [Film], title: &str) -> Result<&'a Film, LookupError> {
    films
        .iter()
        .find(|f| f.title == title)
        .ok_or_else(|| LookupError::FilmTitle(title.to_string()))
}

pub fn find_film_by_path<'a>(films: &'a [Film], path: &str) -> Result<&'a Film, LookupError> {
    films
        .iter()
        .find(|f| f.path == path)
        .ok_or_else(|| LookupError::FilmPath(path.to_string()))
}

pub fn find_theme<'a>(themes: &'a [Theme], id: &str) -> Result<&'a Theme, LookupError> {
    themes
        .iter()
        .find(|t| t.id == id)
        .ok_or_else(|| LookupError::Theme(id.to_string()))
}
