use axum::{
    Form,
    extract::{Path, State},
    response::Html,
};
use std::sync::Arc;
use tracing::info;

use super::submission::FilmSubmission;
use super::{AppState, PageError, views};

pub async fn home(State(state): State<Arc<AppState>>) -> Result<Html<String>, PageError> {
    let films = state.store.films().await?;
    let pictures = state.store.pictures().await?;

    let view = state.with_rng(|rng| views::home(&state.config.site, films, &pictures, rng))?;
    Ok(Html(state.templates.render("home.html", &view)?))
}

pub async fn themes(State(state): State<Arc<AppState>>) -> Result<Html<String>, PageError> {
    let films = state.store.films().await?;
    let pictures = state.store.pictures().await?;
    let themes = state.store.theme_films().await?;

    let view = state.with_rng(|rng| {
        views::themes_page(&state.config.site, &films, &pictures, themes, rng)
    })?;
    Ok(Html(state.templates.render("themes.html", &view)?))
}

pub async fn film(
    State(state): State<Arc<AppState>>,
    Path(path): Path<String>,
) -> Result<Html<String>, PageError> {
    let films = state.store.films().await?;
    let pictures = state.store.pictures().await?;
    let themes = state.store.theme_films().await?;

    let view = state.with_rng(|rng| {
        views::film_page(&state.config.site, &path, &films, &pictures, themes, rng)
    })?;
    Ok(Html(state.templates.render("filmpage.html", &view)?))
}

pub async fn theme(
    State(state): State<Arc<AppState>>,
    Path(theme_id): Path<String>,
) -> Result<Html<String>, PageError> {
    let films = state.store.films().await?;
    let pictures = state.store.pictures().await?;
    let themes = state.store.theme_films().await?;

    let view = state.with_rng(|rng| {
        views::theme_page(&state.config.site, &theme_id, &films, &pictures, &themes, rng)
    })?;
    Ok(Html(state.templates.render("themepage.html", &view)?))
}

pub async fn add_film(State(state): State<Arc<AppState>>) -> Result<Html<String>, PageError> {
    let pictures = state.store.pictures().await?;

    let view = state.with_rng(|rng| views::add_film_page(&state.config.site, &pictures, rng))?;
    Ok(Html(state.templates.render("addfilm.html", &view)?))
}

/// Accepts a film suggestion. The record is built and logged, then dropped;
/// the data files are never written by the site.
pub async fn submit_film(
    State(state): State<Arc<AppState>>,
    Form(submission): Form<FilmSubmission>,
) -> Result<&'static str, PageError> {
    let mut films = state.store.films().await?;
    let film = submission.into_film();

    info!(
        title = %film.title,
        path = %film.path,
        year = %film.year,
        "Film submission received, not persisted"
    );

    films.push(film);
    info!(total = films.len(), "Collection size with submission");

    Ok("Request received.")
}
