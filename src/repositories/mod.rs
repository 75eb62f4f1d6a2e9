//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! 모든 리포지토리는 [`base::CollectionRepository`] 하나의 제네릭 구현을 공유하고,
//! 엔티티별 조회 메서드만 각 하위 모듈에서 추가합니다.
//! 저장소는 `Arc<dyn KeyValueStore>` 로 주입받습니다.
//!
//! # Features
//!
//! - 손상된 데이터는 빈 컬렉션으로 읽고 로그를 남김
//! - 저장/삭제 실패는 `false` 로 보고 (예외 없음)
//! - 조건 검색 결과는 [`Page`](crate::domain::dto::Page) 로 반환
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::repositories::users::UserRepository;
//!
//! let user_repo = UserRepository::new(store.clone(), "RECIPE4F_");
//! let user = user_repo.find_by_email("user@example.com");
//! ```

pub mod base;
pub mod blogs;
pub mod categories;
pub mod recipes;
pub mod users;

pub use base::{BatchSummary, CollectionRepository};
pub use blogs::BlogPostRepository;
pub use categories::CategoryRepository;
pub use recipes::RecipeRepository;
pub use users::{RoleRepository, UserRepository};
