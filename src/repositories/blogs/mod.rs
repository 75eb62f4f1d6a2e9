//! 블로그 데이터 액세스 계층

pub mod blog_post_repo;

pub use blog_post_repo::{BlogPostRepository, DEFAULT_RECENT_COUNT, sort_posts};
