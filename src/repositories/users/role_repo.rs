//! 역할 리포지토리

use crate::domain::entities::users::Role;
use crate::repositories::base::CollectionRepository;

pub type RoleRepository = CollectionRepository<Role>;

impl CollectionRepository<Role> {
    pub fn find_by_code(&self, code: &str) -> Option<Role> {
        self.find_all().into_iter().find(|role| role.code() == code)
    }

    pub fn code_exists(&self, code: &str) -> bool {
        self.find_by_code(code).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::Entity;
    use crate::fixtures;

    #[test]
    fn test_find_by_code() {
        let repo = RoleRepository::new(fixtures::store(), fixtures::PREFIX);
        repo.save(&fixtures::role("r1", "ROLE_ADMIN", "Administrator"));

        assert_eq!(repo.find_by_code("ROLE_ADMIN").unwrap().id(), "r1");
        assert!(repo.code_exists("ROLE_ADMIN"));
        assert!(!repo.code_exists("ROLE_admin"));
        assert_eq!(repo.storage_key(), "RECIPE4F_USER_ROLES");
    }
}
