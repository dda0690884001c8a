pub mod entity;
pub mod schemas;

pub use entity::{Author, Post, PostView};
