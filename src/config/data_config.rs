//! 데이터 및 저장소 설정 관리 모듈
//!
//! 실행 환경, 비밀번호 해싱 비용, 저장소 경로/키 접두사, 시드 버전을 관리합니다.

use std::env;

/// 애플리케이션 실행 환경
#[derive(Debug, Clone, PartialEq)]
pub enum Environment {
    /// 개발 환경 - 빠른 개발을 위한 설정
    Development,
    /// 테스트 환경 - 자동화된 테스트용 설정
    Test,
    /// 스테이징 환경 - 프로덕션 유사 환경
    Staging,
    /// 프로덕션 환경 - 최고 수준의 보안 및 성능
    Production,
}

impl Environment {
    /// 현재 실행 환경을 감지합니다.
    ///
    /// `ENVIRONMENT` 또는 `NODE_ENV` 환경 변수를 확인하며,
    /// 설정되지 않은 경우 `Production`을 기본값으로 사용합니다.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// let env = Environment::current();
    /// match env {
    ///     Environment::Development => println!("개발 환경"),
    ///     Environment::Production => println!("프로덕션 환경"),
    ///     _ => {}
    /// }
    /// ```
    pub fn current() -> Self {
        let name = env::var("ENVIRONMENT")
            .unwrap_or_else(|_| env::var("NODE_ENV").unwrap_or_else(|_| "production".to_string()));
        Self::from_str(&name)
    }

    /// 문자열에서 Environment를 생성합니다.
    ///
    /// # Arguments
    ///
    /// * `s` - 환경 이름 문자열 (대소문자 무관)
    ///
    /// # Returns
    ///
    /// 해당하는 Environment 값. 알 수 없는 값인 경우 `Production`을 반환합니다.
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Environment::Development,
            "test" | "testing" => Environment::Test,
            "staging" | "stage" => Environment::Staging,
            _ => Environment::Production,
        }
    }
}

/// 패스워드 해싱 설정
pub struct PasswordConfig;

impl PasswordConfig {
    /// 현재 환경에 맞는 bcrypt cost를 반환합니다.
    ///
    /// # Returns
    ///
    /// 4-15 범위의 bcrypt cost 값
    ///
    /// # Environment Defaults
    ///
    /// - Development/Test: 4 (빠른 처리)
    /// - Staging: 10 (중간 보안)
    /// - Production: 12 (고보안)
    pub fn bcrypt_cost() -> u32 {
        if let Ok(cost_str) = env::var("BCRYPT_COST") {
            if let Ok(cost) = cost_str.parse::<u32>() {
                if cost >= 4 && cost <= 15 {
                    return cost;
                }
            }
        }

        Self::bcrypt_cost_for_env(&Environment::current())
    }

    /// 특정 환경에 대한 bcrypt cost를 반환합니다.
    ///
    /// # Arguments
    ///
    /// * `env` - 대상 환경
    ///
    /// # Returns
    ///
    /// 해당 환경에 최적화된 bcrypt cost 값
    pub fn bcrypt_cost_for_env(env: &Environment) -> u32 {
        match env {
            Environment::Development => 4,
            Environment::Test => 4,
            Environment::Staging => 10,
            Environment::Production => 12,
        }
    }
}

/// 키-값 저장소 설정
pub struct StorageConfig;

impl StorageConfig {
    /// 컬렉션 키 접두사 (`RECIPE4F_USERS`, `RECIPE4F_RECIPES` ...)
    pub const DEFAULT_KEY_PREFIX: &'static str = "RECIPE4F_";

    /// 데이터 파일 경로를 반환합니다.
    ///
    /// # Returns
    ///
    /// 데이터 파일 경로. 기본값: "data/catalog.json"
    ///
    /// # Environment Variables
    ///
    /// - `RECIPE_CATALOG_DATA`: 커스텀 데이터 파일 경로
    pub fn data_path() -> String {
        env::var("RECIPE_CATALOG_DATA").unwrap_or_else(|_| "data/catalog.json".to_string())
    }

    /// 컬렉션 키 접두사를 반환합니다.
    ///
    /// # Environment Variables
    ///
    /// - `RECIPE_CATALOG_KEY_PREFIX`: 커스텀 접두사 (빈 값이면 기본값 사용)
    pub fn key_prefix() -> String {
        env::var("RECIPE_CATALOG_KEY_PREFIX")
            .ok()
            .filter(|prefix| !prefix.trim().is_empty())
            .unwrap_or_else(|| Self::DEFAULT_KEY_PREFIX.to_string())
    }
}

/// 데모 데이터 시드 설정
pub struct SeedConfig;

impl SeedConfig {
    /// 시드 완료 여부를 기록하는 마커 키
    pub const INIT_KEY: &'static str = "APP_INITIALIZED";

    /// 기본 시드 데이터 버전
    pub const DEFAULT_VERSION: &'static str = "2026-10-01-catalog-v1";

    /// 현재 시드 데이터 버전을 반환합니다.
    ///
    /// 저장된 마커 값과 다르면 데모 데이터를 다시 적재합니다.
    ///
    /// # Environment Variables
    ///
    /// - `SEED_VERSION`: 버전 문자열 재정의
    pub fn version() -> String {
        env::var("SEED_VERSION").unwrap_or_else(|_| Self::DEFAULT_VERSION.to_string())
    }

    /// 버전이 같아도 강제로 다시 시드할지 여부 (`SEED_FORCE=true|1`)
    pub fn force() -> bool {
        env::var("SEED_FORCE")
            .map(|v| matches!(v.to_lowercase().as_str(), "true" | "1" | "yes"))
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_from_string() {
        assert_eq!(
            Environment::from_str("development"),
            Environment::Development
        );
        assert_eq!(Environment::from_str("test"), Environment::Test);
        assert_eq!(Environment::from_str("production"), Environment::Production);
        assert_eq!(Environment::from_str("unknown"), Environment::Production);
    }

    #[test]
    fn test_bcrypt_cost_for_each_environment() {
        assert_eq!(
            PasswordConfig::bcrypt_cost_for_env(&Environment::Development),
            4
        );
        assert_eq!(PasswordConfig::bcrypt_cost_for_env(&Environment::Test), 4);
        assert_eq!(
            PasswordConfig::bcrypt_cost_for_env(&Environment::Staging),
            10
        );
        assert_eq!(
            PasswordConfig::bcrypt_cost_for_env(&Environment::Production),
            12
        );
    }

    #[test]
    fn test_storage_config_defaults() {
        if env::var("RECIPE_CATALOG_DATA").is_err() {
            assert_eq!(StorageConfig::data_path(), "data/catalog.json");
        }

        if env::var("RECIPE_CATALOG_KEY_PREFIX").is_err() {
            assert_eq!(StorageConfig::key_prefix(), "RECIPE4F_");
        }
    }

    #[test]
    fn test_seed_config_defaults() {
        if env::var("SEED_VERSION").is_err() {
            assert_eq!(SeedConfig::version(), SeedConfig::DEFAULT_VERSION);
        }
        assert_eq!(SeedConfig::INIT_KEY, "APP_INITIALIZED");
    }
}
