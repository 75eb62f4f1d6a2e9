//! # Application Error Handling System
//!
//! 카탈로그 데이터 계층 전반에서 사용하는 통합 에러 타입입니다.
//! 엔티티 검증 실패, 저장소 입출력 실패, 비즈니스 규칙 위반을
//! 하나의 열거형으로 표현하고 `?` 연산자로 전파합니다.
//!
//! ## 에러 처리 원칙
//!
//! | 상황 | 처리 방식 |
//! |------|-----------|
//! | 엔티티 생성/수정 시 규칙 위반 | `InvalidField` 로 즉시 실패 |
//! | 저장된 JSON 손상 | 리포지토리가 로그 후 빈 컬렉션으로 복구 |
//! | 저장 실패 | 리포지토리가 로그 후 `false` 반환 |
//! | 중복 이메일, 잘못된 자격 증명 | 서비스가 `AuthResponse` 로 변환 |
//!
//! ## 사용 패턴
//!
//! ```rust,ignore
//! use crate::core::errors::{AppError, AppResult};
//!
//! fn load(store: &dyn KeyValueStore, key: &str) -> AppResult<Vec<Recipe>> {
//!     let raw = store.get_item(key)?
//!         .ok_or_else(|| AppError::NotFound(format!("{} not found", key)))?;
//!     let records = serde_json::from_str(&raw)?;
//!     Ok(records)
//! }
//! ```

use thiserror::Error;

/// 애플리케이션 전역 에러 타입
///
/// `thiserror` 로 `Error` 와 `Display` 를 구현합니다.
///
/// ## 에러 카테고리
///
/// ### 1. 검증 계층
/// - `ValidationError`: 요청 DTO 수준의 검증 실패
/// - `InvalidField`: 엔티티 필드 규칙 위반 (필드명과 위반 규칙 메시지 포함)
///
/// ### 2. 비즈니스 계층
/// - `NotFound`, `ConflictError`, `AuthenticationError`
///
/// ### 3. 인프라 계층
/// - `StorageError`: 키-값 저장소 읽기/쓰기 실패
/// - `SerializationError`: JSON 직렬화/역직렬화 실패
/// - `InternalError`: 예상하지 못한 오류
#[derive(Error, Debug)]
pub enum AppError {
    /// 입력값 검증 에러
    ///
    /// 회원가입/로그인/프로필 요청처럼 DTO 단위로 검증할 때 사용합니다.
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 엔티티 필드 규칙 위반
    ///
    /// 생성자와 setter 가 같은 규칙으로 실패하며, 실패한 경우 엔티티 상태는 바뀌지 않습니다.
    ///
    /// # 예제
    /// ```rust,ignore
    /// let err = recipe.set_stars(9).unwrap_err();
    /// // "Stars: Stars must be an integer between 0 and 5"
    /// println!("{}", err);
    /// ```
    #[error("{field}: {message}")]
    InvalidField { field: String, message: String },

    /// 리소스 찾을 수 없음 에러
    #[error("Not found: {0}")]
    NotFound(String),

    /// 충돌/중복 에러
    ///
    /// 중복 이메일 등록처럼 저장소 상태와 충돌하는 요청에 사용합니다.
    #[error("Conflict error: {0}")]
    ConflictError(String),

    /// 인증 실패 에러
    #[error("Authentication error: {0}")]
    AuthenticationError(String),

    /// 저장소 에러
    ///
    /// # 발생 시나리오
    /// - 데이터 파일 쓰기 실패
    /// - 임시 파일 rename 실패
    /// - 잠금(poisoned lock) 획득 실패
    #[error("Storage error: {0}")]
    StorageError(String),

    /// 직렬화 에러
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// 내부 에러
    ///
    /// 비밀번호 해싱 실패, 서비스 레지스트리 조회 실패 등에 사용합니다.
    #[error("Internal error: {0}")]
    InternalError(String),
}

impl AppError {
    /// 필드 에러를 생성합니다.
    pub fn invalid_field(field: impl Into<String>, message: impl Into<String>) -> Self {
        AppError::InvalidField {
            field: field.into(),
            message: message.into(),
        }
    }

    /// 에러가 사용자 입력 문제인지 여부
    ///
    /// 서비스 계층은 이 값으로 사용자에게 보여줄 메시지와 시스템 에러를 구분합니다.
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            AppError::ValidationError(_)
                | AppError::InvalidField { .. }
                | AppError::ConflictError(_)
                | AppError::AuthenticationError(_)
                | AppError::NotFound(_)
        )
    }
}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        AppError::SerializationError(e.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(e: std::io::Error) -> Self {
        AppError::StorageError(e.to_string())
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

/// 외부 라이브러리 에러를 AppError로 변환하는 확장 trait
///
/// # 예제
///
/// ```rust,ignore
/// use crate::core::errors::ErrorContext;
///
/// let hash = bcrypt::hash(password, cost).context("Failed to hash password")?;
/// ```
pub trait ErrorContext<T> {
    /// 컨텍스트 정보와 함께 에러를 변환합니다.
    fn context(self, msg: &str) -> AppResult<T>;

    /// 클로저를 사용하여 지연 평가된 컨텍스트를 제공합니다.
    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }

    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", f(), e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_field_display() {
        let error = AppError::invalid_field("Recipe code", "Invalid recipe code format");

        assert_eq!(error.to_string(), "Recipe code: Invalid recipe code format");
        assert!(error.is_user_error());
    }

    #[test]
    fn test_storage_errors_are_not_user_errors() {
        assert!(!AppError::StorageError("disk full".to_string()).is_user_error());
        assert!(!AppError::SerializationError("bad json".to_string()).is_user_error());
        assert!(AppError::ConflictError("dup".to_string()).is_user_error());
    }

    #[test]
    fn test_serde_json_error_conversion() {
        let parsed: Result<Vec<String>, _> = serde_json::from_str("{not json");
        let error: AppError = parsed.unwrap_err().into();

        assert!(matches!(error, AppError::SerializationError(_)));
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let error: AppError = io.into();

        assert!(matches!(error, AppError::StorageError(msg) if msg.contains("denied")));
    }

    #[test]
    fn test_error_context_trait() {
        let result: Result<(), &str> = Err("original error");
        let app_result = result.context("Additional context");

        assert!(app_result.is_err());
        if let Err(AppError::InternalError(msg)) = app_result {
            assert!(msg.contains("Additional context"));
            assert!(msg.contains("original error"));
        } else {
            panic!("Expected InternalError");
        }
    }

    #[test]
    fn test_error_with_context_closure() {
        let result: Result<(), &str> = Err("boom");
        let app_result = result.with_context(|| format!("step {}", 2));

        match app_result {
            Err(AppError::InternalError(msg)) => assert_eq!(msg, "step 2: boom"),
            other => panic!("Expected InternalError, got {:?}", other),
        }
    }
}
