use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use thiserror::Error;

use crate::data::DataError;
use crate::format::EmptyPool;
use crate::models::LookupError;

#[derive(Debug, Error)]
pub enum PageError {
    /// The route key (film path, theme id) matches nothing.
    #[error("{0}")]
    NotFound(LookupError),

    #[error(transparent)]
    Data(#[from] DataError),

    /// A reference inside the data files that does not resolve.
    #[error("broken reference: {0}")]
    BrokenReference(#[from] LookupError),

    #[error("no {0} pictures to choose from")]
    NoPictures(&'static str),

    #[error("template rendering failed: {0}")]
    Render(#[from] minijinja::Error),
}

impl PageError {
    pub const fn not_found(err: LookupError) -> Self {
        Self::NotFound(err)
    }

    pub fn no_pictures(pool: &'static str) -> impl FnOnce(EmptyPool) -> Self {
        move |_| Self::NoPictures(pool)
    }

    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match &self {
            Self::NotFound(err) => {
                tracing::warn!("Page not found: {}", err);
                err.to_string()
            }
            Self::Data(err) => {
                tracing::error!(path = %err.path().display(), "Data error: {}", err);
                "The film data could not be loaded".to_string()
            }
            Self::BrokenReference(err) => {
                tracing::error!("Broken data reference: {}", err);
                "The film data is inconsistent".to_string()
            }
            Self::NoPictures(pool) => {
                tracing::error!(pool, "No pictures available");
                "The film data is incomplete".to_string()
            }
            Self::Render(err) => {
                tracing::error!("Template error: {:#}", err);
                "The page could not be rendered".to_string()
            }
        };

        (status, Html(error_page(status, &message))).into_response()
    }
}

fn error_page(status: StatusCode, message: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>{code}</title>
    <link rel="stylesheet" href="/assets/site.css">
</head>
<body>
    <main class="error">
        <h1>{code}</h1>
        <p>{message}</p>
        <a href="/">Back to the database</a>
    </main>
</body>
</html>"#,
        code = status,
        message = html_escape::encode_text(message),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        let missing = PageError::not_found(LookupError::FilmPath("nope".to_string()));
        assert_eq!(missing.status(), StatusCode::NOT_FOUND);

        let broken: PageError = LookupError::FilmTitle("Lara".to_string()).into();
        assert_eq!(broken.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let empty = PageError::no_pictures("main")(EmptyPool);
        assert_eq!(empty.to_string(), "no main pictures to choose from");
        assert_eq!(empty.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_error_page_escapes_message() {
        let page = error_page(StatusCode::NOT_FOUND, "no film at path '<script>'");
        assert!(page.contains("&lt;script&gt;"));
        assert!(page.contains("404 Not Found"));
    }
}
