//! 카테고리 리포지토리

use crate::domain::dto::criteria::{CATEGORY_DEFAULT_LIMIT, CategoryCriteria};
use crate::domain::dto::page::Page;
use crate::domain::entities::Entity;
use crate::domain::entities::categories::Category;
use crate::repositories::base::CollectionRepository;
use crate::utils::string_utils::contains_ignore_case;

pub type CategoryRepository = CollectionRepository<Category>;

impl CollectionRepository<Category> {
    pub fn find_by_code(&self, code: &str) -> Option<Category> {
        self.find_all().into_iter().find(|category| category.code() == code)
    }

    pub fn code_exists(&self, code: &str) -> bool {
        self.find_by_code(code).is_some()
    }

    pub fn find_by_name(&self, term: &str) -> Vec<Category> {
        self.find_all()
            .into_iter()
            .filter(|category| contains_ignore_case(category.name(), term))
            .collect()
    }

    pub fn find_all_sorted(&self) -> Vec<Category> {
        let mut categories = self.find_all();
        sort_by_name(&mut categories);
        categories
    }

    /// ID 목록, 코드 목록, 텍스트(이름/설명) 순으로 좁힌 뒤 이름순으로 페이지를 만듭니다.
    pub fn find_with_criteria(&self, criteria: &CategoryCriteria) -> Page<Category> {
        let mut categories = self.find_all();

        if !criteria.ids.is_empty() {
            categories.retain(|c| criteria.ids.iter().any(|id| id == c.id()));
        }
        if !criteria.codes.is_empty() {
            categories.retain(|c| criteria.codes.iter().any(|code| code == c.code()));
        }
        if let Some(text) = criteria.text.as_deref().map(str::trim).filter(|t| !t.is_empty()) {
            categories.retain(|c| {
                contains_ignore_case(c.name(), text) || contains_ignore_case(c.description(), text)
            });
        }

        sort_by_name(&mut categories);
        Page::paginate(categories, criteria.skip, criteria.limit, CATEGORY_DEFAULT_LIMIT)
    }
}

fn sort_by_name(categories: &mut [Category]) {
    categories.sort_by_key(|c| c.name().to_lowercase());
}
