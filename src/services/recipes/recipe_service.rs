//! # 레시피 서비스 구현
//!
//! 목록/상세/조건 검색을 리포지토리에 위임하고,
//! 상세 화면에 필요한 카테고리와 작성자 정보를 함께 조회합니다.

use std::sync::Arc;
use log::debug;
use crate::domain::dto::criteria::{RecipeCriteria, RecipeSort};
use crate::domain::dto::page::Page;
use crate::domain::dto::users::UserResponse;
use crate::domain::entities::Entity;
use crate::domain::entities::categories::Category;
use crate::domain::entities::recipes::Recipe;
use crate::repositories::categories::CategoryRepository;
use crate::repositories::recipes::{RecipeRepository, sort_recipes};
use crate::repositories::users::UserRepository;

/// 목록 조회 기본 개수
pub const DEFAULT_LIST_LIMIT: usize = 6;

/// 레시피 상세 정보
///
/// 카테고리나 작성자가 삭제된 경우 해당 필드는 `None` 입니다.
#[derive(Debug, Clone)]
pub struct RecipeDetail {
    pub recipe: Recipe,
    pub category: Option<Category>,
    pub author: Option<UserResponse>,
}

pub struct RecipeService {
    recipe_repo: Arc<RecipeRepository>,
    category_repo: Arc<CategoryRepository>,
    user_repo: Arc<UserRepository>,
}

impl RecipeService {
    pub fn new(
        recipe_repo: Arc<RecipeRepository>,
        category_repo: Arc<CategoryRepository>,
        user_repo: Arc<UserRepository>,
    ) -> Self {
        Self {
            recipe_repo,
            category_repo,
            user_repo,
        }
    }

    /// 저장 순서대로 앞에서 `limit` 개
    pub fn get_list(&self, limit: usize) -> Vec<Recipe> {
        self.recipe_repo.find_all().into_iter().take(limit).collect()
    }

    /// 별점이 높은 순으로 `limit` 개
    pub fn get_highest_rated(&self, limit: usize) -> Vec<Recipe> {
        let mut recipes = self.recipe_repo.find_all();
        sort_recipes(&mut recipes, RecipeSort::StarsDesc);
        recipes.truncate(limit);
        recipes
    }

    pub fn get_all(&self) -> Vec<Recipe> {
        self.recipe_repo.find_all()
    }

    pub fn get_by_id(&self, id: &str) -> Option<Recipe> {
        self.recipe_repo.find_by_id(id)
    }

    pub fn get_by_code(&self, code: &str) -> Option<Recipe> {
        self.recipe_repo.find_by_code(code)
    }

    /// 카테고리 코드로 레시피 목록을 조회합니다. 없는 코드면 빈 목록입니다.
    pub fn get_by_category_code(&self, code: &str) -> Vec<Recipe> {
        self.category_repo
            .find_by_code(code)
            .map(|category| self.recipe_repo.find_by_category(category.id()))
            .unwrap_or_default()
    }

    pub fn get_with_criteria(&self, criteria: &RecipeCriteria) -> Page<Recipe> {
        let page = self.recipe_repo.find_with_criteria(criteria);
        debug!("Recipe criteria matched {} (sort {})", page.total, criteria.sort);
        page
    }

    /// 코드로 레시피와 연관 카테고리/작성자를 조회합니다.
    pub fn get_detail(&self, code: &str) -> Option<RecipeDetail> {
        let recipe = self.recipe_repo.find_by_code(code)?;
        let category = self.category_repo.find_by_id(recipe.category_id());
        let author = self.user_repo.find_by_id(recipe.author_id()).map(UserResponse::from);

        Some(RecipeDetail {
            recipe,
            category,
            author,
        })
    }

    /// 카테고리별 레시피 수 (카테고리 이름순)
    pub fn count_by_category(&self) -> Vec<(Category, usize)> {
        let recipes = self.recipe_repo.find_all();
        self.category_repo
            .find_all_sorted()
            .into_iter()
            .map(|category| {
                let count = recipes.iter().filter(|r| r.category_id() == category.id()).count();
                (category, count)
            })
            .collect()
    }
}
