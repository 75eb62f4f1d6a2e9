//! 메모리 기반 키-값 저장소

use std::collections::HashMap;
use std::sync::RwLock;
use crate::core::errors::{AppError, AppResult};
use super::KeyValueStore;

/// 프로세스 메모리에만 존재하는 저장소
///
/// 테스트와 임시 실행에 사용합니다. 프로세스가 종료되면 내용이 사라집니다.
#[derive(Debug, Default)]
pub struct MemoryStore {
    items: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// 저장된 키 개수
    pub fn len(&self) -> usize {
        self.items.read().map(|items| items.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl KeyValueStore for MemoryStore {
    fn get_item(&self, key: &str) -> AppResult<Option<String>> {
        let items = self
            .items
            .read()
            .map_err(|e| AppError::StorageError(format!("Memory store lock poisoned: {}", e)))?;
        Ok(items.get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> AppResult<()> {
        let mut items = self
            .items
            .write()
            .map_err(|e| AppError::StorageError(format!("Memory store lock poisoned: {}", e)))?;
        items.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> AppResult<()> {
        let mut items = self
            .items
            .write()
            .map_err(|e| AppError::StorageError(format!("Memory store lock poisoned: {}", e)))?;
        items.remove(key);
        Ok(())
    }
}
