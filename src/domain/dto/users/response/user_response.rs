use std::collections::BTreeMap;
use serde::{Deserialize, Serialize};
use crate::domain::entities::{Entity, users::User};

/// 사용자 응답 DTO
///
/// 비밀번호 해시는 포함하지 않습니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: String,
    pub email: String,
    pub full_name: String,
    pub avatar: String,
    pub role_id: String,
    pub favorite_recipes: Vec<String>,
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id().to_string(),
            email: user.email().to_string(),
            full_name: user.full_name().to_string(),
            avatar: user.avatar().to_string(),
            role_id: user.role_id().to_string(),
            favorite_recipes: user.favorite_recipes().to_vec(),
        }
    }
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self::from(&user)
    }
}

/// 사용자 대상 작업(가입, 로그인, 프로필 수정, 탈퇴)의 결과
///
/// 비즈니스 규칙 위반은 에러가 아니라 `success: false` 와 필드별 메시지로 전달됩니다.
///
/// ```json
/// {
///   "success": false,
///   "message": "Email already exists!",
///   "errors": { "email": "This email is already registered" }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthResponse {
    pub success: bool,
    pub message: String,

    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub errors: BTreeMap<String, String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<UserResponse>,
}

impl AuthResponse {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            errors: BTreeMap::new(),
            user: None,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            ..Self::success(message)
        }
    }

    pub fn with_user(mut self, user: &User) -> Self {
        self.user = Some(UserResponse::from(user));
        self
    }

    pub fn with_error(mut self, field: impl Into<String>, message: impl Into<String>) -> Self {
        self.errors.insert(field.into(), message.into());
        self
    }

    pub fn with_errors(mut self, errors: BTreeMap<String, String>) -> Self {
        self.errors.extend(errors);
        self
    }

    pub fn error(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::users::UserRecord;

    fn user() -> User {
        User::from_record(UserRecord {
            id: "u1".to_string(),
            email: "ann@example.com".to_string(),
            full_name: "Ann Lee".to_string(),
            password: bcrypt::hash("abc12345", 4).unwrap(),
            avatar: "https://cdn.example.com/ann.png".to_string(),
            role_id: "r2".to_string(),
            favorite_recipes: vec![],
        })
        .unwrap()
    }

    #[test]
    fn test_user_response_hides_password() {
        let value = serde_json::to_value(UserResponse::from(&user())).unwrap();

        assert_eq!(value["fullName"], "Ann Lee");
        assert!(value.get("password").is_none());
    }

    #[test]
    fn test_failure_envelope_shape() {
        let response = AuthResponse::failure("Email already exists!")
            .with_error("email", "This email is already registered");
        let value = serde_json::to_value(&response).unwrap();

        assert_eq!(value["success"], false);
        assert_eq!(value["errors"]["email"], "This email is already registered");
        assert!(value.get("user").is_none());
    }

    #[test]
    fn test_success_envelope_omits_empty_errors() {
        let response = AuthResponse::success("Sign in successful!").with_user(&user());
        let value = serde_json::to_value(&response).unwrap();

        assert!(value.get("errors").is_none());
        assert_eq!(value["user"]["id"], "u1");
    }
}
