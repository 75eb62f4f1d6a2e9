//! 프로필 수정 요청 DTO
//!
//! 부분 수정(patch) 입니다. 값이 없는 필드는 변경하지 않습니다.

use serde::{Deserialize, Serialize};
use validator::Validate;
use crate::utils::string_utils::deserialize_non_blank_string;
use super::auth_request::{validate_full_name, validate_password};

/// 프로필 수정 요청
///
/// - `avatar`: 빈 문자열이면 기본 placeholder 이미지로 교체
/// - `password`: 공백뿐이면 변경하지 않음. 그 외에는 입력 그대로 사용
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileRequest {
    #[serde(default)]
    #[validate(custom(function = "validate_full_name"))]
    pub full_name: Option<String>,

    #[serde(default)]
    pub avatar: Option<String>,

    #[serde(default, deserialize_with = "deserialize_non_blank_string")]
    #[validate(custom(function = "validate_password"))]
    pub password: Option<String>,
}

impl UpdateProfileRequest {
    pub fn full_name(mut self, full_name: &str) -> Self {
        self.full_name = Some(full_name.to_string());
        self
    }

    pub fn avatar(mut self, avatar: &str) -> Self {
        self.avatar = Some(avatar.to_string());
        self
    }

    pub fn password(mut self, password: &str) -> Self {
        self.password = Some(password.to_string());
        self
    }

    /// 변경할 필드가 하나도 없는지
    pub fn is_empty(&self) -> bool {
        self.full_name.is_none() && self.avatar.is_none() && self.password.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_password_means_unchanged() {
        let request: UpdateProfileRequest =
            serde_json::from_str(r#"{"fullName":"Ann Park","password":"   "}"#).unwrap();

        assert_eq!(request.password, None);
        assert_eq!(request.full_name.as_deref(), Some("Ann Park"));
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_password_is_kept_as_typed() {
        let request: UpdateProfileRequest =
            serde_json::from_str(r#"{"password":" new pass 99 "}"#).unwrap();

        assert_eq!(request.password.as_deref(), Some(" new pass 99 "));
    }

    #[test]
    fn test_empty_avatar_is_kept_as_some() {
        let request: UpdateProfileRequest = serde_json::from_str(r#"{"avatar":""}"#).unwrap();
        assert_eq!(request.avatar.as_deref(), Some(""));
    }

    #[test]
    fn test_present_fields_are_validated() {
        let request = UpdateProfileRequest::default().full_name("A1").password("letters");
        let errors = request.validate().unwrap_err();

        assert_eq!(errors.field_errors().len(), 2);
    }

    #[test]
    fn test_empty_patch() {
        assert!(UpdateProfileRequest::default().is_empty());
        assert!(UpdateProfileRequest::default().validate().is_ok());
    }
}
