pub mod invoke;
pub mod movie;

pub use invoke::{invoke_handler, movie_by_id_handler, movie_search_handler, movies_handler};
