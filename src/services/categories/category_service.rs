//! 카테고리 서비스

use std::sync::Arc;
use crate::domain::dto::criteria::CategoryCriteria;
use crate::domain::dto::page::Page;
use crate::domain::entities::categories::Category;
use crate::repositories::categories::CategoryRepository;

pub struct CategoryService {
    category_repo: Arc<CategoryRepository>,
}

impl CategoryService {
    pub fn new(category_repo: Arc<CategoryRepository>) -> Self {
        Self { category_repo }
    }

    /// 저장 순서대로 앞에서 `limit` 개
    pub fn get_list(&self, limit: usize) -> Vec<Category> {
        self.category_repo.find_all().into_iter().take(limit).collect()
    }

    pub fn get_all(&self) -> Vec<Category> {
        self.category_repo.find_all()
    }

    pub fn get_all_sorted(&self) -> Vec<Category> {
        self.category_repo.find_all_sorted()
    }

    pub fn get_by_id(&self, id: &str) -> Option<Category> {
        self.category_repo.find_by_id(id)
    }

    pub fn get_by_code(&self, code: &str) -> Option<Category> {
        self.category_repo.find_by_code(code)
    }

    pub fn get_with_criteria(&self, criteria: &CategoryCriteria) -> Page<Category> {
        self.category_repo.find_with_criteria(criteria)
    }
}
