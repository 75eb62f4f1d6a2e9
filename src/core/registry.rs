//! # Service Registry - 싱글톤 컴포넌트 컨테이너
//!
//! 리포지토리와 서비스를 타입별로 하나씩 보관하는 전역 서비스 로케이터입니다.
//! 모든 컴포넌트는 생성자 주입(`Arc<T>`)으로 조립된 뒤 등록되며,
//! 이후에는 [`ServiceLocator::get`] 으로 어디서든 같은 인스턴스를 꺼내 씁니다.
//!
//! ## 초기화 순서
//!
//! ```text
//! initialize_all(store)
//!   ├─ Step 1: Repository (store + key prefix)
//!   │    ├─ RoleRepository, UserRepository
//!   │    └─ CategoryRepository, RecipeRepository, BlogPostRepository
//!   └─ Step 2: Service (repository 주입)
//!        ├─ AuthService → UserService
//!        ├─ RecipeService, CategoryService, BlogService
//!        └─ DataSeeder
//! ```
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::core::registry::ServiceLocator;
//! use crate::services::recipes::RecipeService;
//!
//! ServiceLocator::initialize_all(store)?;
//!
//! let recipes = ServiceLocator::get::<RecipeService>()?;
//! let top = recipes.get_highest_rated(3);
//! ```
//!
//! 테스트에서는 로케이터를 거치지 않고 각 컴포넌트를 `new(..)` 로 직접 생성합니다.

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use log::debug;
use once_cell::sync::Lazy;
use crate::config::{PasswordConfig, StorageConfig};
use crate::core::errors::{AppError, AppResult};
use crate::repositories::{
    BlogPostRepository, CategoryRepository, RecipeRepository, RoleRepository, UserRepository,
};
use crate::seed::DataSeeder;
use crate::services::auth::AuthService;
use crate::services::blogs::BlogService;
use crate::services::categories::CategoryService;
use crate::services::recipes::RecipeService;
use crate::services::users::UserService;
use crate::storage::KeyValueStore;
use crate::utils::display_terminal::{
    print_boxed_title, print_final_summary, print_step_complete, print_step_start, print_sub_task,
};

/// 타입별 싱글톤 인스턴스 저장소
pub struct ServiceLocator {
    /// `TypeId` 당 하나의 인스턴스
    instances: RwLock<HashMap<TypeId, Arc<dyn Any + Send + Sync>>>,
}

impl ServiceLocator {
    fn new() -> Self {
        Self {
            instances: RwLock::new(HashMap::new()),
        }
    }

    /// 인스턴스를 등록합니다. 같은 타입이 이미 있으면 교체됩니다.
    pub fn set<T: 'static + Send + Sync>(instance: Arc<T>) {
        debug!("Registering: {}", short_type_name::<T>());

        let mut instances = LOCATOR.instances.write().unwrap_or_else(|p| p.into_inner());
        instances.insert(TypeId::of::<T>(), instance as Arc<dyn Any + Send + Sync>);
    }

    /// 등록된 인스턴스를 가져옵니다.
    ///
    /// # Errors
    ///
    /// 등록되지 않은 타입이면 `AppError::NotFound`
    pub fn get<T: 'static + Send + Sync>() -> AppResult<Arc<T>> {
        Self::try_get::<T>().ok_or_else(|| {
            AppError::NotFound(format!(
                "Component not registered: {}. Call ServiceLocator::initialize_all first",
                short_type_name::<T>()
            ))
        })
    }

    pub fn try_get<T: 'static + Send + Sync>() -> Option<Arc<T>> {
        let instances = LOCATOR.instances.read().unwrap_or_else(|p| p.into_inner());
        instances
            .get(&TypeId::of::<T>())
            .cloned()
            .and_then(|instance| instance.downcast::<T>().ok())
    }

    pub fn contains<T: 'static + Send + Sync>() -> bool {
        let instances = LOCATOR.instances.read().unwrap_or_else(|p| p.into_inner());
        instances.contains_key(&TypeId::of::<T>())
    }

    /// 등록된 모든 인스턴스를 제거합니다.
    pub fn clear() {
        let mut instances = LOCATOR.instances.write().unwrap_or_else(|p| p.into_inner());
        instances.clear();
    }

    /// 저장소 위에 모든 리포지토리와 서비스를 생성하여 등록합니다.
    ///
    /// 키 접두사와 bcrypt cost 는 [`StorageConfig`] / [`PasswordConfig`] 에서 읽습니다.
    pub fn initialize_all(store: Arc<dyn KeyValueStore>) -> AppResult<()> {
        print_boxed_title("🔄 INITIALIZING SERVICE REGISTRY");

        let prefix = StorageConfig::key_prefix();
        let bcrypt_cost = PasswordConfig::bcrypt_cost();

        // 1단계: 리포지토리
        print_step_start(1, "Creating Repository instances");
        let role_repo = Arc::new(RoleRepository::new(store.clone(), &prefix));
        let user_repo = Arc::new(UserRepository::new(store.clone(), &prefix));
        let category_repo = Arc::new(CategoryRepository::new(store.clone(), &prefix));
        let recipe_repo = Arc::new(RecipeRepository::new(store.clone(), &prefix));
        let blog_repo = Arc::new(BlogPostRepository::new(store.clone(), &prefix));

        let repositories = [
            register(role_repo.clone()),
            register(user_repo.clone()),
            register(category_repo.clone()),
            register(recipe_repo.clone()),
            register(blog_repo.clone()),
        ];
        print_step_complete(1, "Repository instances created", repositories.len());

        // 2단계: 서비스
        print_step_start(2, "Creating Service instances");
        let auth = Arc::new(AuthService::new(user_repo.clone(), store.clone(), bcrypt_cost));
        let services = [
            register(auth.clone()),
            register(Arc::new(UserService::new(user_repo.clone(), recipe_repo.clone(), auth))),
            register(Arc::new(RecipeService::new(
                recipe_repo.clone(),
                category_repo.clone(),
                user_repo.clone(),
            ))),
            register(Arc::new(CategoryService::new(category_repo.clone()))),
            register(Arc::new(BlogService::new(blog_repo.clone(), user_repo.clone()))),
            register(Arc::new(DataSeeder::new(
                store,
                role_repo,
                user_repo,
                category_repo,
                recipe_repo,
                blog_repo,
                bcrypt_cost,
            ))),
        ];
        print_step_complete(2, "Service instances created", services.len());

        print_final_summary(repositories.len(), services.len());
        Ok(())
    }
}

/// 등록 후 진행 상황을 출력하고 타입 이름을 반환합니다.
fn register<T: 'static + Send + Sync>(instance: Arc<T>) -> String {
    let name = short_type_name::<T>();
    ServiceLocator::set(instance);
    print_sub_task(&name, "✓ Registered");
    name
}

/// `recipe_catalog::services::auth::AuthService` → `AuthService`
///
/// 제네릭 타입 별칭은 `CollectionRepository<..Recipe>` 처럼 보이므로
/// 인자 타입 이름을 붙여 `RecipeRepository` 로 표시합니다.
fn short_type_name<T>() -> String {
    let full = std::any::type_name::<T>();
    match full.split_once('<') {
        Some((outer, inner)) if outer.ends_with("CollectionRepository") => {
            let entity = inner.trim_end_matches('>').rsplit("::").next().unwrap_or(inner);
            format!("{}Repository", entity)
        }
        _ => full.rsplit("::").next().unwrap_or(full).to_string(),
    }
}

/// 전역 서비스 로케이터 인스턴스
static LOCATOR: Lazy<ServiceLocator> = Lazy::new(ServiceLocator::new);
