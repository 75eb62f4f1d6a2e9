//! # 사용자 관련 요청 DTO 모듈
//!
//! 회원가입, 로그인, 프로필 수정 폼 입력을 구조화된 Rust 타입으로 변환하고 검증합니다.
//!
//! ## 검증 계층
//!
//! 1. **구문 검증**: JSON 구조와 타입 일치성 (`serde`)
//! 2. **형식 검증**: 이메일, 이름, 비밀번호 규칙 (`validator` + `validation::rules`)
//! 3. **비즈니스 검증**: 이메일 중복, 자격 증명 확인 (서비스 계층)
//!
//! 검증 실패 시 `validator::ValidationErrors` 가 반환되며,
//! 서비스 계층이 이를 필드별 메시지 맵으로 바꿔 `AuthResponse` 에 담습니다.

pub mod auth_request;
pub mod profile_request;

pub use auth_request::{RegisterRequest, SigninRequest};
pub use profile_request::UpdateProfileRequest;
