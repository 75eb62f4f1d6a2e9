//! Blogs Entity Module

pub mod blog_post;

pub use blog_post::{BlogPost, BlogPostRecord};
