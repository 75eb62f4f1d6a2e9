//! # User Data Transfer Objects Module
//!
//! 사용자 관련 요청/응답 데이터 구조입니다.
//!
//! ```text
//! users/
//! ├── request/
//! │   ├── auth_request.rs      # RegisterRequest, SigninRequest
//! │   └── profile_request.rs   # UpdateProfileRequest
//! └── response/
//!     └── user_response.rs     # UserResponse, AuthResponse
//! ```

pub mod request;
pub mod response;

pub use request::*;
pub use response::*;
