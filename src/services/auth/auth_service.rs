//! # 인증 서비스 구현
//!
//! 회원가입, 로그인, 로그아웃과 현재 로그인 세션을 관리합니다.
//!
//! ## 세션 모델
//!
//! ```text
//!   AuthService::new()
//!        │  CURRENT_USER_ID 읽기
//!        ▼
//!   ┌──────────────┐   signin()    ┌──────────────┐
//!   │  signed out  │ ────────────► │  signed in   │
//!   │  (None)      │ ◄──────────── │  (Some(User))│
//!   └──────────────┘   signout()   └──────────────┘
//! ```
//!
//! 세션은 프로세스 전역이며, 현재 사용자 ID 만 저장소에 보관합니다.
//! 비밀번호는 bcrypt 해시로만 저장하고 `bcrypt::verify` 로 비교합니다.

use std::collections::BTreeMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};
use log::{error, info, warn};
use validator::{Validate, ValidationErrors};
use crate::config::{AvatarConfig, SessionConfig};
use crate::core::errors::{AppResult, ErrorContext};
use crate::domain::dto::users::{AuthResponse, RegisterRequest, SigninRequest};
use crate::domain::entities::Entity;
use crate::domain::entities::users::{USER_ROLE_ID, User, UserRecord};
use crate::repositories::users::UserRepository;
use crate::storage::KeyValueStore;
use crate::utils::string_utils::to_camel_case;

pub const VALIDATION_FAILED: &str = "Validation failed. Please check your input.";
const INVALID_CREDENTIALS: &str = "Invalid email or password.";

/// 인증 및 세션 서비스
///
/// # 사용 예제
///
/// ```rust,ignore
/// let auth = AuthService::new(user_repo, store, PasswordConfig::bcrypt_cost());
///
/// let response = auth.register(RegisterRequest::new(
///     "ann@example.com", "Ann Lee", "abc12345", "abc12345",
/// ));
/// assert!(response.success);
///
/// let response = auth.signin("ann@example.com", "abc12345");
/// assert!(auth.is_authenticated());
/// ```
pub struct AuthService {
    user_repo: Arc<UserRepository>,
    store: Arc<dyn KeyValueStore>,
    bcrypt_cost: u32,
    current_user: RwLock<Option<User>>,
}

impl AuthService {
    /// 저장된 현재 사용자 ID 로 세션을 복원합니다.
    ///
    /// 사용자를 찾을 수 없는 ID 라면 키를 지우고 로그아웃 상태로 시작합니다.
    pub fn new(user_repo: Arc<UserRepository>, store: Arc<dyn KeyValueStore>, bcrypt_cost: u32) -> Self {
        let service = Self {
            user_repo,
            store,
            bcrypt_cost,
            current_user: RwLock::new(None),
        };
        service.hydrate_session();
        service
    }

    fn hydrate_session(&self) {
        let user_id = match self.store.get_item(SessionConfig::current_user_key()) {
            Ok(Some(id)) => id,
            Ok(None) => return,
            Err(e) => {
                error!("Failed to read current user id: {}", e);
                return;
            }
        };

        match self.user_repo.find_by_id(&user_id) {
            Some(user) => {
                info!("Session restored for {}", user.email());
                *self.session_mut() = Some(user);
            }
            None => {
                warn!("Current user id {} no longer exists, clearing session", user_id);
                self.clear_session_key();
            }
        }
    }

    /// 회원가입
    ///
    /// 1. 요청 필드 검증 (`email`, `fullName`, `password`, `confirmPassword`)
    /// 2. 이메일 중복 확인 (대소문자 무시)
    /// 3. 비밀번호 해싱, 기본 아바타 생성 후 저장
    pub fn register(&self, request: RegisterRequest) -> AuthResponse {
        if let Err(errors) = request.validate() {
            return AuthResponse::failure(VALIDATION_FAILED).with_errors(validation_messages(&errors));
        }

        if self.user_repo.email_exists(&request.email) {
            return AuthResponse::failure("Email already exists!")
                .with_error("email", "This email is already registered");
        }

        let user = match self.create_user(&request) {
            Ok(user) => user,
            Err(e) => {
                error!("Registration error: {}", e);
                return AuthResponse::failure("Registration failed. Please check your input.")
                    .with_error("system", e.to_string());
            }
        };

        if !self.user_repo.save(&user) {
            return AuthResponse::failure("Failed to save user. Please try again.")
                .with_error("system", "Database save failed");
        }

        info!("New user registered: {}", user.email());
        AuthResponse::success("Registration successful! You can now sign in.").with_user(&user)
    }

    fn create_user(&self, request: &RegisterRequest) -> AppResult<User> {
        let password = bcrypt::hash(&request.password, self.bcrypt_cost)
            .context("Failed to hash password")?;

        User::from_record(UserRecord {
            id: uuid::Uuid::new_v4().to_string(),
            email: request.email.trim().to_string(),
            full_name: request.full_name.trim().to_string(),
            password,
            avatar: AvatarConfig::generated_avatar_url(&request.full_name),
            role_id: USER_ROLE_ID.to_string(),
            favorite_recipes: Vec::new(),
        })
    }

    /// 이메일/비밀번호 로그인
    ///
    /// 존재하지 않는 이메일과 틀린 비밀번호는 같은 응답을 반환합니다.
    pub fn signin(&self, email: &str, password: &str) -> AuthResponse {
        let request = SigninRequest::new(email.trim(), password);
        if let Err(errors) = request.validate() {
            return AuthResponse::failure(VALIDATION_FAILED).with_errors(validation_messages(&errors));
        }

        let Some(user) = self.user_repo.find_by_email(&request.email) else {
            return invalid_credentials();
        };

        match user.verify_password(password) {
            Ok(true) => {}
            Ok(false) => return invalid_credentials(),
            Err(e) => {
                error!("Sign in error: {}", e);
                return AuthResponse::failure("Sign in failed. Please try again.")
                    .with_error("system", e.to_string());
            }
        }

        if let Err(e) = self.store.set_item(SessionConfig::current_user_key(), user.id()) {
            error!("Failed to persist session: {}", e);
            return AuthResponse::failure("Sign in failed. Please try again.")
                .with_error("system", e.to_string());
        }

        info!("User signed in: {}", user.email());
        let response = AuthResponse::success("Sign in successful!").with_user(&user);
        *self.session_mut() = Some(user);
        response
    }

    /// 비밀번호 해싱에 사용하는 bcrypt cost
    pub fn bcrypt_cost(&self) -> u32 {
        self.bcrypt_cost
    }

    pub fn signout(&self) {
        *self.session_mut() = None;
        self.clear_session_key();
        info!("User signed out");
    }

    pub fn current_user(&self) -> Option<User> {
        self.session().clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.session().is_some()
    }

    /// 로그인한 사용자가 수정되었을 때 세션 스냅샷을 교체합니다.
    pub fn refresh_session(&self, user: &User) {
        let mut session = self.session_mut();
        if session.as_ref().is_some_and(|current| current.id() == user.id()) {
            *session = Some(user.clone());
        }
    }

    fn clear_session_key(&self) {
        if let Err(e) = self.store.remove_item(SessionConfig::current_user_key()) {
            error!("Failed to clear current user id: {}", e);
        }
    }

    fn session(&self) -> RwLockReadGuard<'_, Option<User>> {
        self.current_user.read().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn session_mut(&self) -> RwLockWriteGuard<'_, Option<User>> {
        self.current_user.write().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

fn invalid_credentials() -> AuthResponse {
    AuthResponse::failure(INVALID_CREDENTIALS).with_error("auth", "Invalid credentials")
}

/// `validator` 에러를 camelCase 필드명과 메시지 맵으로 변환합니다.
///
/// 한 필드에 여러 에러가 있으면 `", "` 로 이어 붙입니다.
pub(crate) fn validation_messages(errors: &ValidationErrors) -> BTreeMap<String, String> {
    errors
        .field_errors()
        .into_iter()
        .map(|(field, field_errors)| {
            let message = field_errors
                .iter()
                .map(|e| {
                    e.message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| e.code.to_string())
                })
                .collect::<Vec<_>>()
                .join(", ");
            (to_camel_case(&field), message)
        })
        .collect()
}
