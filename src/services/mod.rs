//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 서비스는 리포지토리를 `Arc` 로 공유하며, [`crate::core::registry::ServiceLocator`]
//! 를 통해 한 번만 생성되어 앱 전체에서 재사용됩니다.
//!
//! # Features
//!
//! - 회원가입, 로그인, 세션 유지 (`auth`)
//! - 프로필 수정, 탈퇴, 즐겨찾기 (`users`)
//! - 레시피/카테고리/블로그 목록과 상세, 조건 검색
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::core::registry::ServiceLocator;
//! use crate::services::{auth::AuthService, recipes::RecipeService};
//!
//! let auth = ServiceLocator::get::<AuthService>()?;
//! let recipes = ServiceLocator::get::<RecipeService>()?;
//! ```

pub mod auth;
pub mod blogs;
pub mod categories;
pub mod recipes;
pub mod users;
