//! Recipes Entity Module

pub mod recipe;

pub use recipe::{Ingredient, IngredientSection, Nutrition, Recipe, RecipeRecord};
