pub mod badge;
pub mod stars;

pub use badge::badge;
pub use stars::{stars_text, StarRating};
