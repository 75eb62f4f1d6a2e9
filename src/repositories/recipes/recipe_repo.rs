//! # 레시피 리포지토리 구현
//!
//! 레시피 컬렉션의 타입별 조회와 조건 검색을 제공합니다.
//!
//! ## 조건 검색 처리 순서
//!
//! ```text
//! find_all() ──► 별점 범위 ──► 조리 시간 ──► 준비 시간 ──► 카테고리(OR) ──► 작성자(OR) ──► 텍스트
//!                                                                                          │
//!                                     Page { items, total } ◄── skip/limit ◄── 정렬 ◄──────┘
//! ```
//!
//! 필터 종류끼리는 AND, 한 필터 안의 여러 값은 OR 입니다.
//! `total` 은 페이지로 자르기 전에 계산합니다.

use std::cmp::Ordering;
use crate::domain::dto::criteria::{RECIPE_DEFAULT_LIMIT, RecipeCriteria, RecipeSort};
use crate::domain::dto::page::Page;
use crate::domain::entities::recipes::Recipe;
use crate::repositories::base::CollectionRepository;
use crate::utils::string_utils::contains_ignore_case;

/// 별점 범위 필터의 기본 상한
const MAX_STARS: f64 = 5.0;

pub type RecipeRepository = CollectionRepository<Recipe>;

impl CollectionRepository<Recipe> {
    pub fn find_by_code(&self, code: &str) -> Option<Recipe> {
        self.find_all().into_iter().find(|recipe| recipe.code() == code)
    }

    pub fn find_by_category(&self, category_id: &str) -> Vec<Recipe> {
        self.filter(|recipe| recipe.category_id() == category_id)
    }

    pub fn find_by_author(&self, author_id: &str) -> Vec<Recipe> {
        self.filter(|recipe| recipe.author_id() == author_id)
    }

    /// 준비 시간이 `minutes` 이하인 레시피
    pub fn find_quick(&self, minutes: u32) -> Vec<Recipe> {
        self.filter(|recipe| recipe.prep_time() <= minutes)
    }

    /// 준비 + 조리 시간이 `minutes` 이하인 레시피
    pub fn find_by_total_time(&self, minutes: u32) -> Vec<Recipe> {
        self.filter(|recipe| recipe.total_time() <= minutes)
    }

    pub fn find_by_name(&self, term: &str) -> Vec<Recipe> {
        self.filter(|recipe| contains_ignore_case(recipe.name(), term))
    }

    pub fn find_by_description(&self, term: &str) -> Vec<Recipe> {
        self.filter(|recipe| contains_ignore_case(recipe.description(), term))
    }

    pub fn count_by_category(&self, category_id: &str) -> usize {
        self.find_by_category(category_id).len()
    }

    pub fn count_by_author(&self, author_id: &str) -> usize {
        self.find_by_author(author_id).len()
    }

    /// 이름순으로 정렬된 전체 목록
    pub fn find_all_sorted(&self) -> Vec<Recipe> {
        let mut recipes = self.find_all();
        sort_recipes(&mut recipes, RecipeSort::NameAsc);
        recipes
    }

    /// 조건 검색
    ///
    /// 정렬은 필터링 후, 페이지 자르기 전에 적용하므로 페이지 간 순서가 유지됩니다.
    ///
    /// # 예제
    ///
    /// ```rust,ignore
    /// let criteria = RecipeCriteria {
    ///     categories: vec!["c1".into(), "c2".into()],
    ///     stars: Some(NumberRange::new(Some(4.0), None)),
    ///     limit: Some(2),
    ///     ..Default::default()
    /// };
    /// let page = repo.find_with_criteria(&criteria);
    /// println!("{} of {}", page.items.len(), page.total);
    /// ```
    pub fn find_with_criteria(&self, criteria: &RecipeCriteria) -> Page<Recipe> {
        let mut recipes = self.find_all();

        if let Some(range) = criteria.stars {
            recipes.retain(|r| range.contains(f64::from(r.stars()), MAX_STARS));
        }
        if let Some(range) = criteria.cook_time {
            recipes.retain(|r| range.contains(f64::from(r.cook_time()), f64::MAX));
        }
        if let Some(range) = criteria.prep_time {
            recipes.retain(|r| range.contains(f64::from(r.prep_time()), f64::MAX));
        }
        if !criteria.categories.is_empty() {
            recipes.retain(|r| criteria.categories.iter().any(|id| id == r.category_id()));
        }
        if !criteria.author_ids.is_empty() {
            recipes.retain(|r| criteria.author_ids.iter().any(|id| id == r.author_id()));
        }
        if let Some(text) = criteria.text.as_deref().map(str::trim).filter(|t| !t.is_empty()) {
            recipes.retain(|r| {
                contains_ignore_case(r.name(), text) || contains_ignore_case(r.description(), text)
            });
        }

        sort_recipes(&mut recipes, criteria.sort);
        Page::paginate(recipes, criteria.skip, criteria.limit, RECIPE_DEFAULT_LIMIT)
    }

    fn filter<P>(&self, predicate: P) -> Vec<Recipe>
    where
        P: Fn(&Recipe) -> bool,
    {
        self.find_all().into_iter().filter(|recipe| predicate(recipe)).collect()
    }
}

/// 정렬 키에 따라 레시피를 정렬합니다. 같은 값끼리는 기존 순서를 유지합니다.
pub fn sort_recipes(recipes: &mut [Recipe], sort: RecipeSort) {
    let by_name = |a: &Recipe, b: &Recipe| -> Ordering {
        a.name().to_lowercase().cmp(&b.name().to_lowercase())
    };

    match sort {
        RecipeSort::NameAsc => recipes.sort_by(by_name),
        RecipeSort::NameDesc => recipes.sort_by(|a, b| by_name(b, a)),
        RecipeSort::StarsAsc => recipes.sort_by_key(|r| r.stars()),
        RecipeSort::StarsDesc => recipes.sort_by(|a, b| b.stars().cmp(&a.stars())),
        RecipeSort::CookTimeAsc => recipes.sort_by_key(|r| r.cook_time()),
        RecipeSort::CookTimeDesc => recipes.sort_by(|a, b| b.cook_time().cmp(&a.cook_time())),
        RecipeSort::PrepTimeAsc => recipes.sort_by_key(|r| r.prep_time()),
        RecipeSort::PrepTimeDesc => recipes.sort_by(|a, b| b.prep_time().cmp(&a.prep_time())),
    }
}
