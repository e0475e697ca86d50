pub mod api;
pub mod movie;
pub mod rating;
pub mod user;

pub use api::{ApiRequest, ApiResponse};
pub use movie::{Movie, MovieWithRatings, NewMovie};
pub use rating::UserMovieRating;
pub use user::User;
