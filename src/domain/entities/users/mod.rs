//! Users Entity Module
//!
//! 사용자와 역할 엔티티를 정의합니다.
//! 사용자는 `role_id` 로 역할을 참조하며, 역할이 삭제되어도 사용자는 그대로 남습니다.

pub mod role;
pub mod user;

pub use role::{ADMIN_ROLE_ID, Role, RoleRecord, USER_ROLE_ID};
pub use user::{User, UserRecord};
