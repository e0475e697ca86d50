pub mod memory;
pub mod movie;
pub mod postgres;
pub mod store;

pub use memory::MemoryMovieStore;
pub use postgres::PgMovieStore;
pub use store::MovieStore;
