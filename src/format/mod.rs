//! Derived display data computed from the loaded records.
//!
//! Nothing here touches the filesystem; every function takes the records it
//! needs and returns new values for the page views.

pub mod caption;
pub mod credits;
pub mod layout;
pub mod random;
pub mod table;
pub mod tooltip;

pub use caption::{caption, poster_caption, scene_caption};
pub use credits::{CreditRow, credits};
pub use layout::{Placed, place, placement};
pub use random::{EmptyPool, pick, pick_many};
pub use table::{ColumnOrder, FilmTable, film_table};
pub use tooltip::tooltip;

/// Uppercase the first character, leaving the rest untouched.
#[must_use]
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}
