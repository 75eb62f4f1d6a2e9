//! # Core Framework Module
//!
//! 애플리케이션 전역에서 쓰이는 에러 타입과 컴포넌트 레지스트리입니다.
//!
//! ## 모듈 구성
//!
//! ### [`registry`] - 컴포넌트 컨테이너
//! - **ServiceLocator**: 타입별 싱글톤 저장소 (`once_cell::sync::Lazy` + `RwLock`)
//! - **initialize_all**: 저장소 하나로 리포지토리와 서비스를 생성자 주입으로 조립
//!
//! ### [`errors`] - 통합 에러 처리
//! - **AppError**: `thiserror` 기반 전역 에러 열거형
//! - **AppResult**: `Result<T, AppError>` 별칭
//! - **ErrorContext**: 외부 에러에 문맥 메시지를 붙여 `AppError` 로 변환
//!
//! ## 사용 패턴
//!
//! ```rust,ignore
//! use crate::core::errors::{AppResult, ErrorContext};
//! use crate::core::registry::ServiceLocator;
//! use crate::services::auth::AuthService;
//!
//! fn current_user_name() -> AppResult<Option<String>> {
//!     let auth = ServiceLocator::get::<AuthService>()?;
//!     Ok(auth.current_user().map(|u| u.full_name().to_string()))
//! }
//!
//! let hash = bcrypt::hash(password, cost).context("Failed to hash password")?;
//! ```

pub mod errors;
pub mod registry;

pub use errors::*;
pub use registry::*;
