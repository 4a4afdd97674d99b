pub mod movies;

pub use movies::movies_handler;
