//! # 사용자 관련 응답 DTO 모듈
//!
//! - [`UserResponse`] - 비밀번호를 제외한 공개 사용자 정보
//! - [`AuthResponse`] - `{success, message, errors?, user?}` 결과 봉투

pub mod user_response;

pub use user_response::{AuthResponse, UserResponse};
