//! # 사용자 관리 서비스 구현
//!
//! 프로필 수정, 계정 삭제, 즐겨찾기 레시피 관리를 담당합니다.
//!
//! ## 서비스 구성
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │                 UserService                 │
//! │  • update_profile   • delete_account        │
//! │  • toggle_favorite  • get_favorites         │
//! └─────────────────────────────────────────────┘
//!          │                 │              │
//!          ▼                 ▼              ▼
//!   UserRepository   RecipeRepository   AuthService
//!                                      (세션 갱신/로그아웃)
//! ```
//!
//! 계정을 삭제해도 그 사용자가 작성한 레시피/블로그 글은 남습니다.
//! 참조를 따라가는 쪽에서 작성자가 없을 수 있음을 처리합니다.

use std::sync::Arc;
use log::{error, info};
use validator::Validate;
use crate::config::AvatarConfig;
use crate::core::errors::{AppError, AppResult, ErrorContext};
use crate::domain::dto::users::{AuthResponse, UpdateProfileRequest};
use crate::domain::entities::Entity;
use crate::domain::entities::recipes::Recipe;
use crate::domain::entities::users::User;
use crate::repositories::recipes::RecipeRepository;
use crate::repositories::users::UserRepository;
use crate::services::auth::{AuthService, VALIDATION_FAILED, validation_messages};
use crate::utils::string_utils::{non_blank_string, validate_required_string};

/// 사용자 관리 비즈니스 로직 서비스
///
/// ## 에러 처리 전략
///
/// 사용자에게 보여줄 작업(프로필 수정, 탈퇴)은 [`AuthResponse`] 로 결과를 돌려주고,
/// 즐겨찾기처럼 내부 호출이 주가 되는 작업은 `AppResult` 로 전파합니다.
///
/// ## 사용 예제
///
/// ```rust,ignore
/// let user_service = UserService::new(user_repo, recipe_repo, auth.clone());
///
/// let response = user_service.update_profile(
///     &user_id,
///     UpdateProfileRequest::default().full_name("Ann Park").avatar(""),
/// );
/// println!("{}", response.message);
/// ```
pub struct UserService {
    user_repo: Arc<UserRepository>,
    recipe_repo: Arc<RecipeRepository>,
    auth: Arc<AuthService>,
}

impl UserService {
    pub fn new(
        user_repo: Arc<UserRepository>,
        recipe_repo: Arc<RecipeRepository>,
        auth: Arc<AuthService>,
    ) -> Self {
        Self {
            user_repo,
            recipe_repo,
            auth,
        }
    }

    pub fn get_by_id(&self, id: &str) -> Option<User> {
        self.user_repo.find_by_id(id)
    }

    /// 프로필 부분 수정
    ///
    /// | 필드 | 처리 |
    /// |------|------|
    /// | `fullName` | 검증 후 교체 |
    /// | `avatar` | 빈 값이면 placeholder 이미지, 아니면 이미지 URL 검증 후 교체 |
    /// | `password` | 공백뿐이면 무시, 아니면 입력 그대로 검증 후 bcrypt 해시로 교체 |
    ///
    /// 바꿀 필드가 없으면 저장하지 않고 현재 프로필을 그대로 돌려줍니다.
    /// 로그인한 본인을 수정한 경우 세션 스냅샷도 갱신합니다.
    pub fn update_profile(&self, user_id: &str, request: UpdateProfileRequest) -> AuthResponse {
        let request = UpdateProfileRequest {
            password: non_blank_string(request.password),
            ..request
        };
        if let Err(errors) = request.validate() {
            return AuthResponse::failure(VALIDATION_FAILED).with_errors(validation_messages(&errors));
        }

        let Some(mut user) = self.user_repo.find_by_id(user_id) else {
            return AuthResponse::failure("User not found");
        };
        if request.is_empty() {
            return AuthResponse::success("Profile updated successfully").with_user(&user);
        }

        if let Err((field, e)) = self.apply_profile(&mut user, request) {
            let summary = e.to_string();
            return match e {
                AppError::InvalidField { message, .. } => {
                    AuthResponse::failure(summary).with_error(field, message)
                }
                _ => {
                    error!("Update profile error: {}", summary);
                    AuthResponse::failure(summary.clone()).with_error("system", summary)
                }
            };
        }

        if !self.user_repo.save(&user) {
            return AuthResponse::failure("Failed to save user data");
        }

        self.auth.refresh_session(&user);
        info!("User profile updated: {}", user.full_name());
        AuthResponse::success("Profile updated successfully").with_user(&user)
    }

    /// 요청 필드를 순서대로 적용합니다. 실패하면 응답에 쓸 필드명과 에러를 돌려줍니다.
    fn apply_profile(
        &self,
        user: &mut User,
        request: UpdateProfileRequest,
    ) -> Result<(), (&'static str, AppError)> {
        if let Some(full_name) = request.full_name {
            user.set_full_name(&full_name).map_err(|e| ("fullName", e))?;
        }
        if let Some(avatar) = request.avatar {
            let avatar = match avatar.trim() {
                "" => AvatarConfig::placeholder(),
                url => url.to_string(),
            };
            user.set_avatar(&avatar).map_err(|e| ("avatar", e))?;
        }
        if let Some(password) = request.password {
            let hash = self.hash_password(&password).map_err(|e| ("password", e))?;
            user.set_password_hash(&hash).map_err(|e| ("password", e))?;
        }
        Ok(())
    }

    fn hash_password(&self, password: &str) -> AppResult<String> {
        bcrypt::hash(password, self.auth.bcrypt_cost()).context("Failed to hash password")
    }

    /// 계정 삭제
    ///
    /// 삭제한 사용자가 현재 로그인한 사용자라면 로그아웃합니다.
    pub fn delete_account(&self, user_id: &str) -> AuthResponse {
        if !self.user_repo.delete(user_id) {
            return AuthResponse::failure("Failed to delete account");
        }

        let is_current = self
            .auth
            .current_user()
            .is_some_and(|current| current.id() == user_id);
        if is_current {
            self.auth.signout();
        }

        info!("User account deleted: {}", user_id);
        AuthResponse::success("Account deleted successfully")
    }

    /// 즐겨찾기 추가/해제. 반환값은 토글 후 즐겨찾기 여부입니다.
    pub fn toggle_favorite(&self, user_id: &str, recipe_id: &str) -> AppResult<bool> {
        let mut user = self
            .user_repo
            .find_by_id(user_id)
            .ok_or_else(|| AppError::NotFound(format!("User {} not found", user_id)))?;

        let recipe_id = validate_required_string(recipe_id, "Recipe ID")?;
        if !self.recipe_repo.exists(&recipe_id) {
            return Err(AppError::NotFound(format!("Recipe {} not found", recipe_id)));
        }

        let favorite = user.toggle_favorite(&recipe_id)?;
        if !self.user_repo.save(&user) {
            return Err(AppError::StorageError("Failed to save user data".to_string()));
        }

        self.auth.refresh_session(&user);
        Ok(favorite)
    }

    /// 즐겨찾기 레시피 목록. 삭제된 레시피 ID 는 건너뜁니다.
    pub fn get_favorites(&self, user_id: &str) -> Vec<Recipe> {
        let Some(user) = self.user_repo.find_by_id(user_id) else {
            return Vec::new();
        };

        user.favorite_recipes()
            .iter()
            .filter_map(|id| self.recipe_repo.find_by_id(id))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::dto::users::RegisterRequest;
    use crate::fixtures;
    use crate::storage::KeyValueStore;

    struct Setup {
        store: Arc<dyn KeyValueStore>,
        users: Arc<UserRepository>,
        recipes: Arc<RecipeRepository>,
        auth: Arc<AuthService>,
        service: UserService,
    }

    fn setup() -> Setup {
        let store = fixtures::store();
        let users = Arc::new(UserRepository::new(store.clone(), fixtures::PREFIX));
        let recipes = Arc::new(RecipeRepository::new(store.clone(), fixtures::PREFIX));
        let auth = Arc::new(AuthService::new(users.clone(), store.clone(), fixtures::BCRYPT_COST));
        let service = UserService::new(users.clone(), recipes.clone(), auth.clone());
        Setup { store, users, recipes, auth, service }
    }

    fn signed_in_ann(setup: &Setup) -> String {
        setup
            .auth
            .register(RegisterRequest::new("ann@example.com", "Ann Lee", "abc12345", "abc12345"));
        setup.auth.signin("ann@example.com", "abc12345");
        setup.auth.current_user().unwrap().id().to_string()
    }

    #[test]
    fn test_update_profile_patches_fields() {
        let s = setup();
        let id = signed_in_ann(&s);

        let response = s.service.update_profile(
            &id,
            UpdateProfileRequest::default().full_name("Ann Park").avatar(""),
        );

        assert!(response.success);
        assert_eq!(response.message, "Profile updated successfully");
        let stored = s.users.find_by_id(&id).unwrap();
        assert_eq!(stored.full_name(), "Ann Park");
        assert_eq!(stored.avatar(), AvatarConfig::placeholder());
        assert_eq!(s.auth.current_user().unwrap().full_name(), "Ann Park");
    }

    #[test]
    fn test_blank_password_keeps_hash() {
        let s = setup();
        let id = signed_in_ann(&s);
        let before = s.users.find_by_id(&id).unwrap().password_hash().to_string();

        let response = s
            .service
            .update_profile(&id, UpdateProfileRequest::default().password("   "));

        assert!(response.success);
        assert_eq!(s.users.find_by_id(&id).unwrap().password_hash(), before);
    }

    #[test]
    fn test_empty_patch_leaves_user_untouched() {
        let s = setup();
        let id = signed_in_ann(&s);
        let before = s.store.get_item("RECIPE4F_USERS").unwrap();

        let response = s.service.update_profile(&id, UpdateProfileRequest::default());

        assert!(response.success);
        assert_eq!(response.user.unwrap().full_name, "Ann Lee");
        assert_eq!(s.store.get_item("RECIPE4F_USERS").unwrap(), before);

        let missing = s.service.update_profile("ghost", UpdateProfileRequest::default());
        assert_eq!(missing.message, "User not found");
    }

    #[test]
    fn test_password_with_spaces_signs_in_as_typed() {
        let s = setup();
        let id = signed_in_ann(&s);

        let response = s
            .service
            .update_profile(&id, UpdateProfileRequest::default().password(" new pass 99 "));
        assert!(response.success);

        s.auth.signout();
        assert!(s.auth.signin("ann@example.com", " new pass 99 ").success);
        assert!(!s.auth.signin("ann@example.com", "new pass 99").success);
    }

    #[test]
    fn test_password_change_allows_new_signin() {
        let s = setup();
        let id = signed_in_ann(&s);

        let response = s
            .service
            .update_profile(&id, UpdateProfileRequest::default().password("newpass99"));
        assert!(response.success);

        s.auth.signout();
        assert!(!s.auth.signin("ann@example.com", "abc12345").success);
        assert!(s.auth.signin("ann@example.com", "newpass99").success);
    }

    #[test]
    fn test_update_profile_failures() {
        let s = setup();
        let id = signed_in_ann(&s);

        let missing = s
            .service
            .update_profile("ghost", UpdateProfileRequest::default().full_name("Ann Park"));
        assert_eq!(missing.message, "User not found");

        let invalid = s
            .service
            .update_profile(&id, UpdateProfileRequest::default().full_name("A1"));
        assert!(!invalid.success);
        assert!(invalid.error("fullName").is_some());

        let bad_avatar = s
            .service
            .update_profile(&id, UpdateProfileRequest::default().avatar("not a url"));
        assert!(!bad_avatar.success);
        assert!(bad_avatar.error("avatar").is_some());
        assert_eq!(s.users.find_by_id(&id).unwrap().full_name(), "Ann Lee");
    }

    #[test]
    fn test_delete_current_account_signs_out() {
        let s = setup();
        let id = signed_in_ann(&s);

        let response = s.service.delete_account(&id);

        assert!(response.success);
        assert_eq!(response.message, "Account deleted successfully");
        assert!(!s.auth.is_authenticated());
        assert_eq!(s.store.get_item("CURRENT_USER_ID").unwrap(), None);
        assert!(s.users.find_by_id(&id).is_none());
    }

    #[test]
    fn test_delete_other_account_keeps_session() {
        let s = setup();
        signed_in_ann(&s);
        s.users.save(&fixtures::user("u2", "bob@example.com", "Bob Stone"));

        assert!(s.service.delete_account("u2").success);
        assert!(s.auth.is_authenticated());

        let missing = s.service.delete_account("u2");
        assert!(!missing.success);
        assert_eq!(missing.message, "Failed to delete account");
    }

    #[test]
    fn test_favorites_toggle_and_skip_dangling() {
        let s = setup();
        let id = signed_in_ann(&s);
        s.recipes.save(&fixtures::recipe("r1", "c1", 4));
        s.recipes.save(&fixtures::recipe("r2", "c1", 5));

        assert!(s.service.toggle_favorite(&id, "r1").unwrap());
        assert!(s.service.toggle_favorite(&id, "r2").unwrap());
        assert!(matches!(
            s.service.toggle_favorite(&id, "r404"),
            Err(AppError::NotFound(_))
        ));

        s.recipes.delete("r1");
        let favorites = s.service.get_favorites(&id);
        assert_eq!(favorites.len(), 1);
        assert_eq!(favorites[0].id(), "r2");

        assert!(!s.service.toggle_favorite(&id, "r2").unwrap());
        assert!(s.auth.current_user().unwrap().favorite_recipes().iter().all(|r| r != "r2"));
    }
}
