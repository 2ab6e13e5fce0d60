pub mod actors;
pub mod index;
pub mod movies;
