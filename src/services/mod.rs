pub mod integrity;
pub use integrity::{DanglingRef, dangling_refs};

pub mod theme_join;
pub use theme_join::{join_theme_films, write_theme_films};
