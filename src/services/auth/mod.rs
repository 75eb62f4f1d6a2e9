//! 인증 및 세션 서비스 모듈
//!
//! 로컬 계정 회원가입/로그인과 프로세스 전역 로그인 세션을 담당합니다.
//!
//! # Security
//!
//! - bcrypt 비밀번호 해싱 (환경별 cost)
//! - `bcrypt::verify` 기반 비교
//! - 존재하지 않는 이메일과 틀린 비밀번호에 같은 응답
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::auth::AuthService;
//!
//! let auth = AuthService::new(user_repo, store, PasswordConfig::bcrypt_cost());
//! let response = auth.signin("ann@example.com", "abc12345");
//! if response.success {
//!     println!("Welcome {}", auth.current_user().unwrap().full_name());
//! }
//! ```

pub mod auth_service;

pub use auth_service::*;
