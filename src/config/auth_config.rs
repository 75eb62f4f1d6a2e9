//! # Authentication Configuration Module
//!
//! 로그인 세션과 사용자 아바타 관련 설정을 관리합니다.
//!
//! ## 환경 변수
//!
//! ```bash
//! export AVATAR_BASE_URL="https://ui-avatars.com/api/"
//! export AVATAR_PLACEHOLDER_URL="https://via.placeholder.com/150.png"
//! ```

use std::env;

/// 로그인 세션 설정
pub struct SessionConfig;

impl SessionConfig {
    /// 현재 로그인한 사용자 ID 를 저장하는 키
    ///
    /// 컬렉션 키와 달리 접두사가 붙지 않습니다.
    pub const CURRENT_USER_KEY: &'static str = "CURRENT_USER_ID";

    pub fn current_user_key() -> &'static str {
        Self::CURRENT_USER_KEY
    }
}

/// 사용자 아바타 설정
pub struct AvatarConfig;

impl AvatarConfig {
    const DEFAULT_BASE_URL: &'static str = "https://ui-avatars.com/api/";
    const DEFAULT_PLACEHOLDER: &'static str = "https://via.placeholder.com/150.png";

    /// 이니셜 아바타 생성 서비스의 기본 URL
    pub fn base_url() -> String {
        env::var("AVATAR_BASE_URL").unwrap_or_else(|_| Self::DEFAULT_BASE_URL.to_string())
    }

    /// 프로필 수정 시 아바타를 비웠을 때 사용하는 대체 이미지
    pub fn placeholder() -> String {
        env::var("AVATAR_PLACEHOLDER_URL").unwrap_or_else(|_| Self::DEFAULT_PLACEHOLDER.to_string())
    }

    /// 회원가입 시 이름으로 기본 아바타 URL 을 생성합니다.
    ///
    /// # 예제
    ///
    /// ```rust,ignore
    /// let url = AvatarConfig::generated_avatar_url("Ann Lee");
    /// // https://ui-avatars.com/api/?name=Ann%20Lee&background=random&size=256
    /// ```
    pub fn generated_avatar_url(full_name: &str) -> String {
        format!(
            "{}?name={}&background=random&size=256",
            Self::base_url(),
            urlencoding::encode(full_name.trim())
        )
    }
}
