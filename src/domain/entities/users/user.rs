//! User Entity Implementation
//!
//! 카탈로그 사용자 엔티티입니다. 비밀번호는 bcrypt 해시로만 보관합니다.

use serde::{Deserialize, Serialize};
use crate::core::errors::{AppError, AppResult, ErrorContext};
use crate::domain::entities::{Entity, validated_id};
use crate::validation::{ValidationResult, rules};
use super::role::USER_ROLE_ID;

const BCRYPT_HASH_LEN: usize = 60;

fn default_role_id() -> String {
    USER_ROLE_ID.to_string()
}

/// 사용자 저장 레코드
///
/// `password` 필드에는 평문이 아닌 bcrypt 해시가 들어갑니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    pub id: String,
    pub email: String,
    pub full_name: String,
    pub password: String,
    pub avatar: String,
    #[serde(default = "default_role_id")]
    pub role_id: String,
    #[serde(default)]
    pub favorite_recipes: Vec<String>,
}

/// 사용자 엔티티
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    id: String,
    email: String,
    full_name: String,
    password_hash: String,
    avatar: String,
    role_id: String,
    favorite_recipes: Vec<String>,
}

impl User {
    /// 레코드를 검증하여 사용자를 생성합니다.
    ///
    /// # Errors
    ///
    /// 첫 번째로 위반된 필드의 `AppError::InvalidField`
    pub fn new(record: UserRecord) -> AppResult<Self> {
        let mut user = Self {
            id: validated_id(&record.id)?,
            email: String::new(),
            full_name: String::new(),
            password_hash: String::new(),
            avatar: String::new(),
            role_id: String::new(),
            favorite_recipes: Vec::new(),
        };
        user.set_email(&record.email)?;
        user.set_full_name(&record.full_name)?;
        user.set_password_hash(&record.password)?;
        user.set_avatar(&record.avatar)?;
        user.set_role_id(&record.role_id)?;
        user.set_favorite_recipes(record.favorite_recipes)?;
        Ok(user)
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    pub fn password_hash(&self) -> &str {
        &self.password_hash
    }

    pub fn avatar(&self) -> &str {
        &self.avatar
    }

    pub fn role_id(&self) -> &str {
        &self.role_id
    }

    pub fn favorite_recipes(&self) -> &[String] {
        &self.favorite_recipes
    }

    pub fn set_email(&mut self, email: &str) -> AppResult<()> {
        rules::email(email).into_result("Email")?;
        self.email = email.to_string();
        Ok(())
    }

    pub fn set_full_name(&mut self, full_name: &str) -> AppResult<()> {
        rules::full_name(full_name).into_result("Full name")?;
        self.full_name = full_name.trim().to_string();
        Ok(())
    }

    /// bcrypt 해시를 설정합니다. 평문 비밀번호는 거부됩니다.
    pub fn set_password_hash(&mut self, hash: &str) -> AppResult<()> {
        ValidationResult::new()
            .check(
                "hash",
                hash.starts_with("$2") && hash.len() == BCRYPT_HASH_LEN,
                "Password must be stored as a bcrypt hash",
            )
            .into_result("Password")?;
        self.password_hash = hash.to_string();
        Ok(())
    }

    pub fn set_avatar(&mut self, avatar: &str) -> AppResult<()> {
        rules::image_url(avatar).into_result("Avatar URL")?;
        self.avatar = avatar.to_string();
        Ok(())
    }

    pub fn set_role_id(&mut self, role_id: &str) -> AppResult<()> {
        rules::id(role_id).into_result("Role ID")?;
        self.role_id = role_id.trim().to_string();
        Ok(())
    }

    pub fn set_favorite_recipes(&mut self, recipe_ids: Vec<String>) -> AppResult<()> {
        if let Some(bad) = recipe_ids.iter().find(|id| !rules::id(id).is_valid()) {
            return Err(AppError::invalid_field(
                "Favorite recipes",
                format!("Invalid recipe id '{}'", bad),
            ));
        }
        self.favorite_recipes = recipe_ids;
        Ok(())
    }

    pub fn is_favorite(&self, recipe_id: &str) -> bool {
        self.favorite_recipes.iter().any(|id| id == recipe_id)
    }

    /// 즐겨찾기를 토글하고, 토글 후 즐겨찾기 상태인지 반환합니다.
    pub fn toggle_favorite(&mut self, recipe_id: &str) -> AppResult<bool> {
        rules::id(recipe_id).into_result("Recipe ID")?;
        if let Some(pos) = self.favorite_recipes.iter().position(|id| id == recipe_id) {
            self.favorite_recipes.remove(pos);
            Ok(false)
        } else {
            self.favorite_recipes.push(recipe_id.to_string());
            Ok(true)
        }
    }

    /// 평문 비밀번호를 저장된 해시와 비교합니다.
    pub fn verify_password(&self, password: &str) -> AppResult<bool> {
        bcrypt::verify(password, &self.password_hash).context("Failed to verify password")
    }
}

impl Entity for User {
    const COLLECTION: &'static str = "USERS";
    type Record = UserRecord;

    fn id(&self) -> &str {
        &self.id
    }

    fn to_record(&self) -> UserRecord {
        UserRecord {
            id: self.id.clone(),
            email: self.email.clone(),
            full_name: self.full_name.clone(),
            password: self.password_hash.clone(),
            avatar: self.avatar.clone(),
            role_id: self.role_id.clone(),
            favorite_recipes: self.favorite_recipes.clone(),
        }
    }

    fn from_record(record: UserRecord) -> AppResult<Self> {
        User::new(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> UserRecord {
        UserRecord {
            id: "u1".to_string(),
            email: "ann@example.com".to_string(),
            full_name: "Ann Lee".to_string(),
            password: bcrypt::hash("abc12345", 4).unwrap(),
            avatar: "https://cdn.example.com/ann.png".to_string(),
            role_id: "r2".to_string(),
            favorite_recipes: vec!["rc1".to_string()],
        }
    }

    #[test]
    fn test_round_trip() {
        let user = User::new(record()).unwrap();
        let snapshot = user.to_record();
        let restored = User::from_record(snapshot.clone()).unwrap();

        assert_eq!(restored.to_record(), snapshot);
        assert_eq!(restored.full_name(), "Ann Lee");
    }

    #[test]
    fn test_missing_optional_fields_use_defaults() {
        let mut json = serde_json::to_value(record()).unwrap();
        let obj = json.as_object_mut().unwrap();
        obj.remove("roleId");
        obj.remove("favoriteRecipes");

        let parsed: UserRecord = serde_json::from_value(json).unwrap();
        let user = User::from_record(parsed).unwrap();

        assert_eq!(user.role_id(), USER_ROLE_ID);
        assert!(user.favorite_recipes().is_empty());
    }

    #[test]
    fn test_invalid_email_fails_fast() {
        let mut rec = record();
        rec.email = "not-an-email".to_string();

        let err = User::new(rec).unwrap_err();
        assert_eq!(err.to_string(), "Email: Email format is invalid");
    }

    #[test]
    fn test_plaintext_password_rejected() {
        let mut rec = record();
        rec.password = "abc12345".to_string();

        let err = User::new(rec).unwrap_err();
        assert!(matches!(err, AppError::InvalidField { ref field, .. } if field == "Password"));
    }

    #[test]
    fn test_failed_setter_keeps_state() {
        let mut user = User::new(record()).unwrap();

        assert!(user.set_full_name("X").is_err());
        assert_eq!(user.full_name(), "Ann Lee");

        assert!(user.set_avatar("https://example.com/page.html").is_err());
        assert_eq!(user.avatar(), "https://cdn.example.com/ann.png");
    }

    #[test]
    fn test_toggle_favorite() {
        let mut user = User::new(record()).unwrap();

        assert!(!user.toggle_favorite("rc1").unwrap());
        assert!(!user.is_favorite("rc1"));
        assert!(user.toggle_favorite("rc2").unwrap());
        assert_eq!(user.favorite_recipes(), ["rc2".to_string()]);
        assert!(user.toggle_favorite("  ").is_err());
    }

    #[test]
    fn test_snapshot_is_detached() {
        let user = User::new(record()).unwrap();
        let mut snapshot = user.to_record();
        snapshot.favorite_recipes.push("rc9".to_string());

        assert_eq!(user.favorite_recipes().len(), 1);
    }

    #[test]
    fn test_verify_password() {
        let user = User::new(record()).unwrap();

        assert!(user.verify_password("abc12345").unwrap());
        assert!(!user.verify_password("wrong-pass1").unwrap());
    }
}
