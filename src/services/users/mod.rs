//! 사용자 관리 서비스 모듈
//!
//! 가입 이후의 계정 생명주기(프로필 수정, 탈퇴, 즐겨찾기)를 담당합니다.
//! 가입과 로그인은 [`crate::services::auth`] 에 있습니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::users::UserService;
//!
//! let user_service = UserService::new(user_repo, recipe_repo, auth);
//! let favorites = user_service.get_favorites(&user_id);
//! ```

pub mod user_service;

pub use user_service::UserService;
