use crate::models::{Film, LookupError, Picture, find_film_by_title};

pub const NO_BREAK_SPACE: char = '\u{a0}';

/// Hover text for a picture: `"Title (Year)"` with non-breaking spaces, or
/// the picture type when the picture is not tied to a film.
pub fn tooltip(picture: &Picture, films: &[Film]) -> Result<String, LookupError> {
    let Some(title) = picture.film_title() else {
        return Ok(picture.kind.as_str().to_string());
    };

    let film = find_film_by_title(films, title)?;
    Ok(no_wrap(&format!("{} ({})", film.title, film.year)))
}

#[must_use]
pub fn no_wrap(text: &str) -> String {
    text.replace(' ', &NO_BREAK_SPACE.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn films() -> Vec<Film> {
        serde_json::from_value(json!([
            {"title": "Film Noir", "path": "film-noir", "year": 1947},
            {"title": "Film Noir", "path": "film-noir-remake", "year": 1999}
        ]))
        .unwrap()
    }

    #[test]
    fn test_tooltip_uses_non_breaking_spaces() {
        let pic: Picture =
            serde_json::from_value(json!({"type": "scene", "film": "Film Noir"})).unwrap();

        let tip = tooltip(&pic, &films()).unwrap();
        assert_eq!(tip, "Film\u{a0}Noir\u{a0}(1947)");
        assert!(!tip.contains(' '));
    }

    #[test]
    fn test_tooltip_without_film_is_type() {
        let pic: Picture = serde_json::from_value(json!({"type": "placeholder"})).unwrap();
        assert_eq!(tooltip(&pic, &[]).unwrap(), "placeholder");
    }

    #[test]
    fn test_tooltip_for_unknown_film_is_lookup_error() {
        let pic: Picture =
            serde_json::from_value(json!({"type": "scene", "film": "Nightfall"})).unwrap();
        assert_eq!(
            tooltip(&pic, &films()),
            Err(LookupError::FilmTitle("Nightfall".to_string()))
        );
    }
}
