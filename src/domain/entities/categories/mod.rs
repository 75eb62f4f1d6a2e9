//! Categories Entity Module

pub mod category;

pub use category::{Category, CategoryRecord};
