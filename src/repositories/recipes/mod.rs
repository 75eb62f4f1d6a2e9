//! 레시피 데이터 액세스 계층

pub mod recipe_repo;

pub use recipe_repo::{RecipeRepository, sort_recipes};
