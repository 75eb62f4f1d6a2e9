//! 인증 요청관련 DTO
//!
//! 회원가입과 로그인 폼 입력을 매핑합니다.
//! 필드 규칙은 엔티티와 같은 `validation::rules` 를 사용합니다.

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};
use crate::validation::rules;

/// 회원가입 요청 구조체
///
/// ```json
/// {
///   "email": "ann@example.com",
///   "fullName": "Ann Lee",
///   "password": "abc12345",
///   "confirmPassword": "abc12345"
/// }
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    #[validate(custom(function = "validate_email"))]
    pub email: String,

    #[validate(custom(function = "validate_full_name"))]
    pub full_name: String,

    #[validate(custom(function = "validate_password"))]
    pub password: String,

    #[validate(must_match(other = "password", message = "Passwords do not match!"))]
    pub confirm_password: String,
}

impl RegisterRequest {
    pub fn new(email: &str, full_name: &str, password: &str, confirm_password: &str) -> Self {
        Self {
            email: email.to_string(),
            full_name: full_name.to_string(),
            password: password.to_string(),
            confirm_password: confirm_password.to_string(),
        }
    }
}

/// 로컬 로그인 요청 구조체
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct SigninRequest {
    #[validate(custom(function = "validate_email"))]
    pub email: String,

    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

impl SigninRequest {
    pub fn new(email: &str, password: &str) -> Self {
        Self {
            email: email.to_string(),
            password: password.to_string(),
        }
    }
}

pub(crate) fn validate_email(email: &str) -> Result<(), ValidationError> {
    rules::email(email).into_validator("invalid_email")
}

pub(crate) fn validate_full_name(full_name: &str) -> Result<(), ValidationError> {
    rules::full_name(full_name).into_validator("invalid_full_name")
}

pub(crate) fn validate_password(password: &str) -> Result<(), ValidationError> {
    rules::password(password).into_validator("weak_password")
}
