pub mod grammar;
pub mod videos;
