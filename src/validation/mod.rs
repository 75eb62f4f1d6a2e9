//! # 필드 검증 모듈
//!
//! 엔티티와 요청 DTO 가 공유하는 순수 검증 규칙을 제공합니다.
//! 모든 규칙은 패닉하지 않고 항상 [`ValidationResult`] 를 반환합니다.
//!
//! ## 결과 형식
//!
//! ```text
//! { is_valid: false, errors: { length: None, format: Some("Email format is invalid") } }
//! ```
//!
//! 복합 규칙(`image_url = url AND image`)은 하위 결과를 [`ValidationResult::merge`] 로
//! 합치므로, 실패한 모든 필드의 메시지가 함께 보고됩니다.
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::validation::rules;
//!
//! let result = rules::email("not-an-email");
//! assert!(!result.is_valid());
//! assert!(result.error("format").is_some());
//!
//! // 엔티티 setter 에서는 AppResult 로 변환
//! rules::recipe_code(code).into_result("Recipe code")?;
//! ```

pub mod rules;

use std::borrow::Cow;
use serde::ser::{Serialize, SerializeMap, Serializer};
use validator::ValidationError;
use crate::core::errors::{AppError, AppResult};

/// 검증 결과
///
/// 필드 순서를 보존하며, 통과한 검사는 `None` 메시지로 기록됩니다.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationResult {
    is_valid: bool,
    errors: Vec<(&'static str, Option<String>)>,
}

impl Default for ValidationResult {
    fn default() -> Self {
        Self::new()
    }
}

impl ValidationResult {
    /// 검사 항목이 없는 유효한 결과
    pub fn new() -> Self {
        Self {
            is_valid: true,
            errors: Vec::new(),
        }
    }

    /// 검사 하나를 기록합니다.
    pub fn check(mut self, field: &'static str, passed: bool, message: impl Into<String>) -> Self {
        let message = if passed { None } else { Some(message.into()) };
        self.is_valid &= passed;
        self.errors.push((field, message));
        self
    }

    /// 실패 하나만 담은 결과
    pub fn failure(field: &'static str, message: impl Into<String>) -> Self {
        Self::new().check(field, false, message)
    }

    pub fn is_valid(&self) -> bool {
        self.is_valid
    }

    /// 필드의 에러 메시지. 통과했거나 검사하지 않은 필드는 `None` 입니다.
    pub fn error(&self, field: &str) -> Option<&str> {
        self.errors
            .iter()
            .find(|(name, _)| *name == field)
            .and_then(|(_, message)| message.as_deref())
    }

    /// 모든 검사 항목 (통과 항목 포함)
    pub fn errors(&self) -> &[(&'static str, Option<String>)] {
        &self.errors
    }

    /// 실패한 메시지들을 `", "` 로 연결합니다.
    pub fn messages(&self) -> String {
        self.errors
            .iter()
            .filter_map(|(_, message)| message.as_deref())
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// 두 결과를 합칩니다. 양쪽의 모든 항목이 보존됩니다.
    pub fn merge(mut self, other: ValidationResult) -> Self {
        self.is_valid &= other.is_valid;
        self.errors.extend(other.errors);
        self
    }

    /// 실패한 경우 `AppError::InvalidField` 로 변환합니다.
    ///
    /// # 예제
    ///
    /// ```rust,ignore
    /// rules::rating_stars(9).into_result("Stars")?;
    /// // Err: "Stars: Stars must be an integer between 0 and 5"
    /// ```
    pub fn into_result(self, field: &str) -> AppResult<()> {
        if self.is_valid {
            Ok(())
        } else {
            Err(AppError::invalid_field(field, self.messages()))
        }
    }

    /// `validator` 크레이트의 custom 검증 함수 반환 형식으로 변환합니다.
    pub fn into_validator(self, code: &'static str) -> Result<(), ValidationError> {
        if self.is_valid {
            Ok(())
        } else {
            Err(ValidationError::new(code).with_message(Cow::Owned(self.messages())))
        }
    }
}

impl Serialize for ValidationResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        struct Errors<'a>(&'a [(&'static str, Option<String>)]);

        impl Serialize for Errors<'_> {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                let mut map = serializer.serialize_map(Some(self.0.len()))?;
                for (field, message) in self.0 {
                    map.serialize_entry(field, message)?;
                }
                map.end()
            }
        }

        let mut map = serializer.serialize_map(Some(2))?;
        map.serialize_entry("isValid", &self.is_valid)?;
        map.serialize_entry("errors", &Errors(&self.errors))?;
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_accumulates_failures() {
        let result = ValidationResult::new()
            .check("length", false, "too short")
            .check("format", true, "bad format")
            .check("chars", false, "bad chars");

        assert!(!result.is_valid());
        assert_eq!(result.error("length"), Some("too short"));
        assert_eq!(result.error("format"), None);
        assert_eq!(result.messages(), "too short, bad chars");
    }

    #[test]
    fn test_merge_keeps_both_sides() {
        let left = ValidationResult::failure("url", "Invalid URL format");
        let right = ValidationResult::new().check("image", true, "Invalid image format");
        let merged = left.merge(right);

        assert!(!merged.is_valid());
        assert_eq!(merged.errors().len(), 2);
        assert_eq!(merged.error("url"), Some("Invalid URL format"));
    }

    #[test]
    fn test_into_result_names_field() {
        let err = ValidationResult::failure("format", "Invalid recipe code format")
            .into_result("Recipe code")
            .unwrap_err();

        assert_eq!(err.to_string(), "Recipe code: Invalid recipe code format");
        assert!(ValidationResult::new().into_result("anything").is_ok());
    }

    #[test]
    fn test_serialize_object_shape() {
        let result = ValidationResult::new()
            .check("length", true, "unused")
            .check("format", false, "Email format is invalid");
        let json = serde_json::to_value(&result).unwrap();

        assert_eq!(json["isValid"], false);
        assert!(json["errors"]["length"].is_null());
        assert_eq!(json["errors"]["format"], "Email format is invalid");
    }
}
