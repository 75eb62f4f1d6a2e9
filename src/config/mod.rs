//! # Configuration Module
//!
//! 환경 변수 기반 설정값을 중앙에서 관리하는 모듈입니다.
//! 바이너리는 시작 시 `dotenv` 로 `.env` 파일을 읽은 뒤 이 모듈을 통해 값을 조회합니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 실행 환경, bcrypt cost, 저장소 경로/접두사, 시드 버전
//! - [`auth_config`] - 세션 키, 아바타 URL
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::config::{Environment, PasswordConfig, StorageConfig};
//!
//! let env = Environment::current();
//! let cost = PasswordConfig::bcrypt_cost();
//! let path = StorageConfig::data_path();
//! ```
//!
//! ## 환경 변수
//!
//! ```bash
//! export ENVIRONMENT="development"              # development, test, staging, production
//! export BCRYPT_COST="10"                       # 4-15 범위
//! export RECIPE_CATALOG_DATA="data/catalog.json"
//! export RECIPE_CATALOG_KEY_PREFIX="RECIPE4F_"
//! export SEED_VERSION="2026-10-01-catalog-v1"
//! export SEED_FORCE="false"
//! ```

pub mod data_config;
pub mod auth_config;

pub use data_config::*;
pub use auth_config::*;
