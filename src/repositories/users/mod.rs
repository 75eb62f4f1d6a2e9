//! 사용자와 역할 데이터 액세스 계층
//!
//! ```rust,ignore
//! use crate::repositories::users::UserRepository;
//!
//! let user_repo = UserRepository::new(store, "RECIPE4F_");
//! let user = user_repo.find_by_email("user@example.com");
//! ```

pub mod role_repo;
pub mod user_repo;

pub use role_repo::RoleRepository;
pub use user_repo::UserRepository;
