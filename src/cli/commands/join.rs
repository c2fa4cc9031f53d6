//! Theme-films join command handler

use std::path::PathBuf;

use crate::config::Config;
use crate::data::{DataFile, DataStore};
use crate::services::write_theme_films;

pub async fn cmd_join_themes(
    config: &Config,
    films: Option<PathBuf>,
    themes: Option<PathBuf>,
    out: Option<PathBuf>,
) -> anyhow::Result<()> {
    let store = DataStore::new(&config.data);
    let films = films.unwrap_or_else(|| store.path(DataFile::Films));
    let themes = themes.unwrap_or_else(|| store.path(DataFile::Themes));
    let out = out.unwrap_or_else(|| store.path(DataFile::ThemeFilms));

    let count = write_theme_films(&films, &themes, &out).await?;

    println!("✓ Wrote {} themes to {}", count, out.display());
    Ok(())
}
