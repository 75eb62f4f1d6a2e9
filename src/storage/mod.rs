//! 키-값 저장소 계층 모듈
//!
//! 모든 컬렉션은 문자열 키 하나에 JSON 문자열로 저장됩니다.
//! 리포지토리와 세션은 구체 타입이 아닌 [`KeyValueStore`] trait 객체에 의존합니다.
//!
//! # 구현체
//!
//! - [`memory::MemoryStore`] - 프로세스 메모리 기반 (테스트, 임시 실행)
//! - [`file::FileStore`] - 단일 JSON 파일 기반 영구 저장
//!
//! # 사용 예제
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use crate::storage::{KeyValueStore, MemoryStore};
//!
//! let store: Arc<dyn KeyValueStore> = Arc::new(MemoryStore::new());
//! store.set_json("RECIPE4F_TAGS", &vec!["vegan", "quick"])?;
//!
//! let tags: Option<Vec<String>> = store.get_json("RECIPE4F_TAGS")?;
//! ```

pub mod file;
pub mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use serde::{Serialize, de::DeserializeOwned};
use crate::core::errors::AppResult;

/// 문자열 키-값 저장소 인터페이스
///
/// 브라우저 `localStorage` 와 같은 의미론을 가집니다. 값은 항상 문자열이며,
/// 존재하지 않는 키는 `Ok(None)` 입니다.
pub trait KeyValueStore: Send + Sync {
    /// 키에 저장된 값을 반환합니다.
    fn get_item(&self, key: &str) -> AppResult<Option<String>>;

    /// 키에 값을 저장합니다. 기존 값은 덮어씁니다.
    fn set_item(&self, key: &str, value: &str) -> AppResult<()>;

    /// 키를 제거합니다. 없는 키를 제거해도 에러가 아닙니다.
    fn remove_item(&self, key: &str) -> AppResult<()>;
}

impl dyn KeyValueStore {
    /// JSON 으로 저장된 값을 역직렬화하여 반환합니다.
    ///
    /// 키가 없으면 `Ok(None)`, JSON 이 손상되었으면 `SerializationError` 입니다.
    pub fn get_json<T: DeserializeOwned>(&self, key: &str) -> AppResult<Option<T>> {
        match self.get_item(key)? {
            Some(json) => Ok(Some(serde_json::from_str(&json)?)),
            None => Ok(None),
        }
    }

    /// 값을 JSON 으로 직렬화하여 저장합니다.
    pub fn set_json<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> AppResult<()> {
        let json = serde_json::to_string(value)?;
        self.set_item(key, &json)
    }
}
