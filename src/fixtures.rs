//! 테스트 전용 엔티티 생성 헬퍼

use std::sync::Arc;
use crate::domain::entities::{
    blogs::{BlogPost, BlogPostRecord},
    categories::{Category, CategoryRecord},
    recipes::{Nutrition, Recipe, RecipeRecord},
    users::{Role, RoleRecord, User, UserRecord},
};
use crate::storage::{KeyValueStore, MemoryStore};

pub const PREFIX: &str = "RECIPE4F_";
pub const PASSWORD: &str = "abc12345";
pub const BCRYPT_COST: u32 = 4;

pub fn store() -> Arc<dyn KeyValueStore> {
    Arc::new(MemoryStore::new())
}

pub fn user(id: &str, email: &str, full_name: &str) -> User {
    User::new(UserRecord {
        id: id.to_string(),
        email: email.to_string(),
        full_name: full_name.to_string(),
        password: bcrypt::hash(PASSWORD, BCRYPT_COST).unwrap(),
        avatar: "https://ui-avatars.com/api/?name=Test".to_string(),
        role_id: "r2".to_string(),
        favorite_recipes: Vec::new(),
    })
    .unwrap()
}

pub fn role(id: &str, code: &str, name: &str) -> Role {
    Role::new(RoleRecord {
        id: id.to_string(),
        code: code.to_string(),
        name: name.to_string(),
        description: format!("{} role used in tests", name),
    })
    .unwrap()
}

pub fn category(id: &str, name: &str) -> Category {
    Category::new(CategoryRecord {
        id: id.to_string(),
        code: format!("CATE_{}", id.to_uppercase()),
        name: name.to_string(),
        description: format!("All about {} dishes", name.to_lowercase()),
    })
    .unwrap()
}

pub struct RecipeSpec<'a> {
    pub name: &'a str,
    pub category_id: &'a str,
    pub author_id: &'a str,
    pub stars: i64,
    pub prep_time: i64,
    pub cook_time: i64,
}

impl Default for RecipeSpec<'_> {
    fn default() -> Self {
        Self {
            name: "",
            category_id: "c1",
            author_id: "u1",
            stars: 3,
            prep_time: 10,
            cook_time: 20,
        }
    }
}

pub fn recipe_with(id: &str, spec: RecipeSpec<'_>) -> Recipe {
    let name = if spec.name.is_empty() {
        format!("Recipe {}", id)
    } else {
        spec.name.to_string()
    };
    Recipe::new(RecipeRecord {
        id: id.to_string(),
        code: format!("REC_{}", id.to_uppercase()),
        description: format!("{} is a tasty home recipe", name),
        name,
        image: format!("https://cdn.example.com/{}.jpg", id),
        prep_time: spec.prep_time,
        cook_time: spec.cook_time,
        total_time: 0,
        category_id: spec.category_id.to_string(),
        author_id: spec.author_id.to_string(),
        nutrition: Nutrition::default(),
        ingredients: Vec::new(),
        directions: "Mix, cook and serve warm.".to_string(),
        stars: spec.stars,
    })
    .unwrap()
}

pub fn recipe(id: &str, category_id: &str, stars: i64) -> Recipe {
    recipe_with(
        id,
        RecipeSpec {
            category_id,
            stars,
            ..RecipeSpec::default()
        },
    )
}

pub fn post(id: &str, title: &str, author_id: &str, published_at: &str, tags: &[&str]) -> BlogPost {
    BlogPost::new(BlogPostRecord {
        id: id.to_string(),
        title: title.to_string(),
        excerpt: format!("{} - a short excerpt that is long enough to pass the rules.", title),
        content: "Plenty of words about cooking at home. ".repeat(10),
        image: format!("https://cdn.example.com/{}.png", id),
        author_id: author_id.to_string(),
        published_at: published_at.to_string(),
        tags: tags.iter().map(|t| t.to_string()).collect(),
    })
    .unwrap()
}
