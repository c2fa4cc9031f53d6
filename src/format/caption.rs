use crate::models::{Picture, PictureType};

/// "A, B and C in Film". With no stars the caption is the bare title.
#[must_use]
pub fn scene_caption(stars: &[String], film: &str) -> String {
    match stars {
        [] => film.to_string(),
        [only] => format!("{only} in {film}"),
        [first, second] => format!("{first} and {second} in {film}"),
        [body @ .., last] => format!("{} and {last} in {film}", body.join(", ")),
    }
}

/// "Origin poster for Film", or the bare title when the origin is unknown.
#[must_use]
pub fn poster_caption(origin: Option<&str>, film: &str) -> String {
    match origin.filter(|o| !o.is_empty()) {
        Some(origin) => format!("{origin} poster for {film}"),
        None => film.to_string(),
    }
}

/// Caption chosen by picture type.
#[must_use]
pub fn caption(picture: &Picture) -> String {
    let film = picture.film_title().unwrap_or_default();
    match picture.kind {
        PictureType::Poster => poster_caption(picture.origin.as_deref(), film),
        PictureType::Scene | PictureType::Other(_) => scene_caption(&picture.stars, film),
    }
}
