//! # 사용자 리포지토리 구현
//!
//! `RECIPE4F_USERS` 컬렉션에 대한 사용자 조회 메서드입니다.

use crate::domain::entities::users::User;
use crate::repositories::base::CollectionRepository;
use crate::utils::string_utils::{contains_ignore_case, eq_ignore_case};

/// 사용자 데이터 액세스 리포지토리
///
/// ```rust,ignore
/// let repo = UserRepository::new(store, "RECIPE4F_");
/// if repo.email_exists("Ann@Example.com") {
///     // 대소문자 구분 없이 중복 판정
/// }
/// ```
pub type UserRepository = CollectionRepository<User>;

impl CollectionRepository<User> {
    /// 이메일로 사용자를 조회합니다. 대소문자와 앞뒤 공백은 무시합니다.
    pub fn find_by_email(&self, email: &str) -> Option<User> {
        let email = email.trim();
        self.find_all()
            .into_iter()
            .find(|user| eq_ignore_case(user.email(), email))
    }

    pub fn email_exists(&self, email: &str) -> bool {
        self.find_by_email(email).is_some()
    }

    pub fn find_by_role(&self, role_id: &str) -> Vec<User> {
        self.find_all()
            .into_iter()
            .filter(|user| user.role_id() == role_id)
            .collect()
    }

    pub fn count_by_role(&self, role_id: &str) -> usize {
        self.find_by_role(role_id).len()
    }

    /// 이름 부분 일치 검색
    pub fn find_by_name(&self, term: &str) -> Vec<User> {
        self.find_all()
            .into_iter()
            .filter(|user| contains_ignore_case(user.full_name(), term))
            .collect()
    }
}
