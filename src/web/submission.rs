use serde::Deserialize;
use std::collections::BTreeMap;

use crate::models::{Film, Year};

/// Fields of the add-film form. List fields are comma separated.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct FilmSubmission {
    pub title: String,
    pub path: String,
    pub year: String,
    pub themeids: String,
    pub directors: String,
    pub producers: String,
    pub writers: String,
    pub stars: String,
    pub distributors: String,
}

impl FilmSubmission {
    #[must_use]
    pub fn into_film(self) -> Film {
        let title = self.title.trim().to_string();
        let path = match self.path.trim() {
            "" => slugify(&title),
            given => given.to_string(),
        };

        Film {
            path,
            year: Year::from(self.year.as_str()),
            themeids: split_list(&self.themeids),
            directors: non_empty(split_list(&self.directors)),
            producers: non_empty(split_list(&self.producers)),
            writers: non_empty(split_list(&self.writers)),
            stars: non_empty(split_list(&self.stars)),
            distributors: non_empty(split_list(&self.distributors)),
            extra: BTreeMap::new(),
            key_order: Vec::new(),
            title,
        }
    }
}

fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(ToString::to_string)
        .collect()
}

fn non_empty(list: Vec<String>) -> Option<Vec<String>> {
    (!list.is_empty()).then_some(list)
}

/// "The Asphalt Jungle" -> "the-asphalt-jungle"
#[must_use]
pub fn slugify(title: &str) -> String {
    title
        .split(|c: char| !c.is_alphanumeric())
        .filter(|part| !part.is_empty())
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("-")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_into_film() {
        let film = FilmSubmission {
            title: " The Asphalt Jungle ".to_string(),
            year: "1950".to_string(),
            directors: "John Huston".to_string(),
            stars: "Sterling Hayden, Louis Calhern,  ".to_string(),
            themeids: "heist,".to_string(),
            ..FilmSubmission::default()
        }
        .into_film();

        assert_eq!(film.title, "The Asphalt Jungle");
        assert_eq!(film.path, "the-asphalt-jungle");
        assert_eq!(film.year, Year::Number(1950));
        assert_eq!(film.themeids, vec!["heist"]);
        assert_eq!(film.directors, Some(vec!["John Huston".to_string()]));
        assert_eq!(
            film.stars,
            Some(vec!["Sterling Hayden".to_string(), "Louis Calhern".to_string()])
        );
        assert!(film.producers.is_none());
    }

    #[test]
    fn test_explicit_path_is_kept() {
        let film = FilmSubmission {
            title: "D.O.A.".to_string(),
            path: "doa".to_string(),
            ..FilmSubmission::default()
        }
        .into_film();
        assert_eq!(film.path, "doa");
    }

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("D.O.A."), "d-o-a");
        assert_eq!(slugify("Kiss Me Deadly"), "kiss-me-deadly");
        assert_eq!(slugify("Railroaded!"), "railroaded");
    }
}
