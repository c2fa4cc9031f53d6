//! View models handed to the templates.
//!
//! Each builder takes the collections a page needs plus a random source and
//! returns a plain serializable value; the handlers only load and render.

use rand::Rng;
use serde::Serialize;

use super::PageError;
use crate::config::SiteConfig;
use crate::format::{
    self, ColumnOrder, CreditRow, FilmTable, Placed, film_table, pick, pick_many, place,
};
use crate::models::{Film, Picture, Rank, Theme, find_film_by_path, find_theme};

/// Columns of the film table on a theme page.
pub const THEME_TABLE_COLUMNS: [&str; 4] = ["title", "year", "directors", "distributors"];

/// A picture with its derived display text.
#[derive(Debug, Clone, Serialize)]
pub struct PictureView {
    #[serde(flatten)]
    pub picture: Picture,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    pub tooltip: String,
}

impl PictureView {
    pub fn captioned(picture: &Picture, films: &[Film]) -> Result<Self, PageError> {
        Ok(Self {
            caption: Some(format::caption(picture)),
            ..Self::uncaptioned(picture, films)?
        })
    }

    pub fn uncaptioned(picture: &Picture, films: &[Film]) -> Result<Self, PageError> {
        Ok(Self {
            tooltip: format::tooltip(picture, films)?,
            picture: picture.clone(),
            caption: None,
        })
    }
}

#[derive(Debug, Serialize)]
pub struct HomeView {
    pub page_title: String,
    pub films: Vec<Film>,
    pub main_pic: PictureView,
    pub sec_pics: Vec<Picture>,
}

#[derive(Debug, Serialize)]
pub struct FilmView {
    pub page_title: String,
    pub film: Film,
    pub themes: Vec<Placed<ThemeCard>>,
    pub credits: Vec<CreditRow>,
    pub main_pic: Option<PictureView>,
    pub sec_pics: Vec<Picture>,
}

#[derive(Debug, Serialize)]
pub struct ThemeCard {
    #[serde(flatten)]
    pub theme: Theme,
    pub display_name: String,
    pub pic: Option<PictureView>,
}

impl ThemeCard {
    pub fn new(theme: Theme, pic: Option<PictureView>) -> Self {
        Self {
            display_name: theme.display_name().to_string(),
            theme,
            pic,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ThemesView {
    pub page_title: String,
    pub themes: Vec<Placed<ThemeCard>>,
    pub sec_pics: Vec<Picture>,
}

#[derive(Debug, Serialize)]
pub struct ThemeView {
    pub page_title: String,
    pub theme: Theme,
    pub main_pic: Option<PictureView>,
    pub table: FilmTable,
    pub films: Vec<Film>,
    pub sec_pics: Vec<Picture>,
}

#[derive(Debug, Serialize)]
pub struct AddFilmView {
    pub page_title: String,
    pub sec_pics: Vec<Picture>,
}

/// Decorative pictures for the page edge, picked with replacement.
pub fn secondary_pictures<R: Rng + ?Sized>(
    pictures: &[Picture],
    count: usize,
    rng: &mut R,
) -> Result<Vec<Picture>, PageError> {
    let pool: Vec<&Picture> = pictures
        .iter()
        .filter(|p| p.has_rank(Rank::Secondary))
        .collect();

    let picked = pick_many(&pool, count, rng).map_err(PageError::no_pictures("secondary"))?;
    Ok(picked.into_iter().map(|p| (*p).clone()).collect())
}

/// A random scene illustrating the theme, or the placeholder picture when
/// the theme has none.
pub fn theme_picture<'a, R: Rng + ?Sized>(
    theme_id: &str,
    pictures: &'a [Picture],
    rng: &mut R,
) -> Option<&'a Picture> {
    let scenes: Vec<&Picture> = pictures
        .iter()
        .filter(|p| p.is_scene() && p.illustrates(theme_id))
        .collect();

    match pick(&scenes, rng) {
        Ok(scene) => Some(*scene),
        Err(_) => pictures.iter().find(|p| p.has_rank(Rank::NoPic)),
    }
}

pub fn home<R: Rng + ?Sized>(
    site: &SiteConfig,
    films: Vec<Film>,
    pictures: &[Picture],
    rng: &mut R,
) -> Result<HomeView, PageError> {
    let main_pool: Vec<&Picture> = pictures
        .iter()
        .filter(|p| p.has_rank(Rank::Main) && p.is_scene())
        .collect();
    let main = pick(&main_pool, rng).map_err(PageError::no_pictures("main"))?;
    let main_pic = PictureView::captioned(main, &films)?;

    Ok(HomeView {
        page_title: site.home_title.clone(),
        sec_pics: secondary_pictures(pictures, site.secondary_picture_count, rng)?,
        main_pic,
        films,
    })
}

pub fn film_page<R: Rng + ?Sized>(
    site: &SiteConfig,
    path: &str,
    films: &[Film],
    pictures: &[Picture],
    themes: Vec<Theme>,
    rng: &mut R,
) -> Result<FilmView, PageError> {
    let film = find_film_by_path(films, path).map_err(PageError::not_found)?;

    let film_themes: Vec<ThemeCard> = themes
        .into_iter()
        .filter(|t| t.includes_film(&film.title))
        .map(|t| ThemeCard::new(t, None))
        .collect();

    let main_pic = pictures
        .iter()
        .find(|p| p.is_poster() && p.film_title() == Some(film.title.as_str()))
        .map(|poster| PictureView::captioned(poster, films))
        .transpose()?;

    Ok(FilmView {
        page_title: film.title.clone(),
        themes: place(film_themes),
        credits: format::credits(film),
        main_pic,
        sec_pics: secondary_pictures(pictures, site.secondary_picture_count, rng)?,
        film: film.clone(),
    })
}

pub fn themes_page<R: Rng + ?Sized>(
    site: &SiteConfig,
    films: &[Film],
    pictures: &[Picture],
    themes: Vec<Theme>,
    rng: &mut R,
) -> Result<ThemesView, PageError> {
    let mut cards = Vec::with_capacity(themes.len());
    for theme in themes {
        let pic = theme_picture(&theme.id, pictures, rng)
            .map(|p| PictureView::uncaptioned(p, films))
            .transpose()?;
        cards.push(ThemeCard::new(theme, pic));
    }

    Ok(ThemesView {
        page_title: "Themes".to_string(),
        themes: place(cards),
        sec_pics: secondary_pictures(pictures, site.secondary_picture_count, rng)?,
    })
}

pub fn theme_page<R: Rng + ?Sized>(
    site: &SiteConfig,
    theme_id: &str,
    films: &[Film],
    pictures: &[Picture],
    themes: &[Theme],
    rng: &mut R,
) -> Result<ThemeView, PageError> {
    let theme = find_theme(themes, theme_id).map_err(PageError::not_found)?;

    let main_pic = theme_picture(&theme.id, pictures, rng)
        .map(|p| PictureView::captioned(p, films))
        .transpose()?;

    let theme_films: Vec<Film> = films
        .iter()
        .filter(|f| theme.includes_film(&f.title))
        .cloned()
        .collect();

    Ok(ThemeView {
        page_title: theme.display_name().to_string(),
        table: film_table(&THEME_TABLE_COLUMNS, &theme_films, ColumnOrder::Requested),
        theme: theme.clone(),
        main_pic,
        films: theme_films,
        sec_pics: secondary_pictures(pictures, site.secondary_picture_count, rng)?,
    })
}

pub fn add_film_page<R: Rng + ?Sized>(
    site: &SiteConfig,
    pictures: &[Picture],
    rng: &mut R,
) -> Result<AddFilmView, PageError> {
    Ok(AddFilmView {
        page_title: "Add Film".to_string(),
        sec_pics: secondary_pictures(pictures, site.secondary_picture_count, rng)?,
    })
}
