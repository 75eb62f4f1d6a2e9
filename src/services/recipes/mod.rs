//! 레시피 서비스 모듈
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::recipes::RecipeService;
//!
//! let service = RecipeService::new(recipe_repo, category_repo, user_repo);
//! for recipe in service.get_highest_rated(DEFAULT_LIST_LIMIT) {
//!     println!("{} ({}★)", recipe.name(), recipe.stars());
//! }
//! ```

pub mod recipe_service;

pub use recipe_service::{DEFAULT_LIST_LIMIT, RecipeDetail, RecipeService};
