//! Data check command handler

use crate::config::Config;
use crate::data::{DataFile, DataStore};
use crate::services::dangling_refs;

pub async fn cmd_check(config: &Config) -> anyhow::Result<()> {
    let store = DataStore::new(&config.data);

    // Parse everything untyped first so a malformed file is reported by name.
    let raw = store.load_raw(&DataFile::ALL).await?;
    for (file, value) in DataFile::ALL.iter().zip(&raw) {
        let count = value.as_array().map_or(0, Vec::len);
        println!("{:<40} {} records", store.path(*file).display(), count);
    }

    let films = store.films().await?;
    let pictures = store.pictures().await?;
    let themes = store.themes().await?;
    let theme_films = store.theme_films().await?;

    let refs = dangling_refs(&films, &pictures, &themes, &theme_films);
    println!("{:-<60}", "");

    if refs.is_empty() {
        println!("✓ All references resolve");
    } else {
        println!("{} dangling references:", refs.len());
        for r in &refs {
            println!("  • {}", r);
        }
    }

    Ok(())
}
