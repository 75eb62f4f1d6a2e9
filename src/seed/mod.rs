//! # 데모 데이터 시드
//!
//! 저장소의 `APP_INITIALIZED` 마커가 현재 시드 버전과 다를 때 모든 컬렉션을 비우고
//! [`data`] 의 데모 데이터를 다시 적재합니다.
//!
//! ```text
//! run(version, force)
//!   ├─ marker == version && !force → skip
//!   ├─ clear: USER_ROLES, USERS, CATEGORIES, RECIPES, BLOG_POSTS
//!   ├─ save_batch × 5 (요약 로그)
//!   └─ marker = version (모든 배치가 성공한 경우)
//! ```

pub mod data;

use std::sync::Arc;
use log::{info, warn};
use crate::config::SeedConfig;
use crate::core::errors::AppResult;
use crate::repositories::{
    BatchSummary, BlogPostRepository, CategoryRepository, RecipeRepository, RoleRepository,
    UserRepository,
};
use crate::storage::KeyValueStore;

/// 시드 실행 결과
#[derive(Debug, Clone, PartialEq)]
pub struct SeedReport {
    pub version: String,
    /// 마커가 이미 같은 버전이어서 아무것도 하지 않은 경우
    pub skipped: bool,
    pub batches: Vec<(&'static str, BatchSummary)>,
}

impl SeedReport {
    pub fn is_complete(&self) -> bool {
        self.batches.iter().all(|(_, summary)| summary.is_complete())
    }

    pub fn total_saved(&self) -> usize {
        self.batches.iter().map(|(_, summary)| summary.success).sum()
    }
}

pub struct DataSeeder {
    store: Arc<dyn KeyValueStore>,
    role_repo: Arc<RoleRepository>,
    user_repo: Arc<UserRepository>,
    category_repo: Arc<CategoryRepository>,
    recipe_repo: Arc<RecipeRepository>,
    blog_repo: Arc<BlogPostRepository>,
    bcrypt_cost: u32,
}

impl DataSeeder {
    pub fn new(
        store: Arc<dyn KeyValueStore>,
        role_repo: Arc<RoleRepository>,
        user_repo: Arc<UserRepository>,
        category_repo: Arc<CategoryRepository>,
        recipe_repo: Arc<RecipeRepository>,
        blog_repo: Arc<BlogPostRepository>,
        bcrypt_cost: u32,
    ) -> Self {
        Self {
            store,
            role_repo,
            user_repo,
            category_repo,
            recipe_repo,
            blog_repo,
            bcrypt_cost,
        }
    }

    /// 저장된 마커 버전
    pub fn installed_version(&self) -> AppResult<Option<String>> {
        self.store.get_item(SeedConfig::INIT_KEY)
    }

    pub fn run(&self, version: &str, force: bool) -> AppResult<SeedReport> {
        if !force && self.installed_version()?.as_deref() == Some(version) {
            info!("Demo data already initialized ({})", version);
            return Ok(SeedReport {
                version: version.to_string(),
                skipped: true,
                batches: Vec::new(),
            });
        }

        info!("Seeding demo data {}{}", version, if force { " (forced)" } else { "" });

        self.role_repo.clear()?;
        self.user_repo.clear()?;
        self.category_repo.clear()?;
        self.recipe_repo.clear()?;
        self.blog_repo.clear()?;

        let batches = vec![
            ("roles", self.role_repo.save_batch(&data::roles()?)),
            ("users", self.user_repo.save_batch(&data::users(self.bcrypt_cost)?)),
            ("categories", self.category_repo.save_batch(&data::categories()?)),
            ("recipes", self.recipe_repo.save_batch(&data::recipes()?)),
            ("blog posts", self.blog_repo.save_batch(&data::blog_posts()?)),
        ];

        for (name, summary) in &batches {
            info!(
                "Seeded {}: {}/{} saved ({}%)",
                name, summary.success, summary.total, summary.percent
            );
        }

        let report = SeedReport {
            version: version.to_string(),
            skipped: false,
            batches,
        };

        if report.is_complete() {
            self.store.set_item(SeedConfig::INIT_KEY, version)?;
        } else {
            warn!("Demo data incomplete, marker not written; the next run will seed again");
        }

        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;

    struct Harness {
        store: Arc<dyn KeyValueStore>,
        users: Arc<UserRepository>,
        recipes: Arc<RecipeRepository>,
        seeder: DataSeeder,
    }

    fn harness() -> Harness {
        let store = fixtures::store();
        let prefix = fixtures::PREFIX;
        let users = Arc::new(UserRepository::new(store.clone(), prefix));
        let recipes = Arc::new(RecipeRepository::new(store.clone(), prefix));
        let seeder = DataSeeder::new(
            store.clone(),
            Arc::new(RoleRepository::new(store.clone(), prefix)),
            users.clone(),
            Arc::new(CategoryRepository::new(store.clone(), prefix)),
            recipes.clone(),
            Arc::new(BlogPostRepository::new(store.clone(), prefix)),
            fixtures::BCRYPT_COST,
        );
        Harness {
            store,
            users,
            recipes,
            seeder,
        }
    }

    #[test]
    fn test_first_run_seeds_everything() {
        let h = harness();

        let report = h.seeder.run("v1", false).unwrap();

        assert!(!report.skipped);
        assert!(report.is_complete());
        assert_eq!(report.total_saved(), 2 + 3 + 5 + 8 + 5);
        assert_eq!(h.store.get_item(SeedConfig::INIT_KEY).unwrap().as_deref(), Some("v1"));
        assert!(h.users.email_exists("leo.park@example.com"));
    }

    #[test]
    fn test_same_version_is_skipped() {
        let h = harness();
        h.seeder.run("v1", false).unwrap();
        h.recipes.delete("r1");

        let report = h.seeder.run("v1", false).unwrap();

        assert!(report.skipped);
        assert_eq!(h.recipes.count(), 7);
    }

    #[test]
    fn test_new_version_or_force_reseeds() {
        let h = harness();
        h.seeder.run("v1", false).unwrap();
        h.users.save(&fixtures::user("extra", "extra@example.com", "Extra User"));
        h.recipes.delete("r1");

        h.seeder.run("v2", false).unwrap();
        assert_eq!(h.users.count(), 3);
        assert_eq!(h.recipes.count(), 8);

        h.recipes.delete("r2");
        let report = h.seeder.run("v2", true).unwrap();
        assert!(!report.skipped);
        assert_eq!(h.recipes.count(), 8);
        assert_eq!(h.seeder.installed_version().unwrap().as_deref(), Some("v2"));
    }
}
