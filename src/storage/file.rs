//! 파일 기반 키-값 저장소
//!
//! 전체 키-값 맵을 하나의 JSON 객체 파일로 유지합니다.
//! 열 때 한 번 읽어 메모리에 올리고, 변경될 때마다 파일 전체를 다시 씁니다.
//!
//! ```text
//! {
//!   "APP_INITIALIZED": "2026-10-01",
//!   "RECIPE4F_RECIPES": "[{\"id\":\"r1\", ...}]"
//! }
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::RwLock;
use log::{debug, error, warn};
use crate::core::errors::{AppError, AppResult};
use super::KeyValueStore;

/// 단일 JSON 파일에 영속화되는 저장소
///
/// 쓰기는 임시 파일에 기록한 뒤 rename 하므로, 도중에 실패해도
/// 기존 파일은 온전하게 남습니다.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    items: RwLock<BTreeMap<String, String>>,
}

impl FileStore {
    /// 파일 저장소를 엽니다.
    ///
    /// # Arguments
    ///
    /// * `path` - 데이터 파일 경로. 상위 디렉터리가 없으면 생성합니다.
    ///
    /// # Returns
    ///
    /// * `Ok(FileStore)` - 파일이 없거나 손상된 경우 빈 저장소
    /// * `Err(AppError::StorageError)` - 디렉터리 생성 또는 파일 읽기 실패
    pub fn open(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref().to_path_buf();

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let items = if path.exists() {
            let content = fs::read_to_string(&path)?;
            if content.trim().is_empty() {
                BTreeMap::new()
            } else {
                match serde_json::from_str::<BTreeMap<String, String>>(&content) {
                    Ok(items) => items,
                    Err(e) => {
                        error!("Data file {} is corrupt, starting empty: {}", path.display(), e);
                        BTreeMap::new()
                    }
                }
            }
        } else {
            debug!("Data file {} not found, starting empty", path.display());
            BTreeMap::new()
        };

        Ok(Self {
            path,
            items: RwLock::new(items),
        })
    }

    /// 데이터 파일 경로
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self, items: &BTreeMap<String, String>) -> AppResult<()> {
        let json = serde_json::to_string_pretty(items)?;
        let tmp_path = self.path.with_extension("json.tmp");

        fs::write(&tmp_path, json)?;
        if let Err(e) = fs::rename(&tmp_path, &self.path) {
            warn!("Failed to replace {}: {}", self.path.display(), e);
            let _ = fs::remove_file(&tmp_path);
            return Err(e.into());
        }
        Ok(())
    }

    fn lock_error<E: std::fmt::Display>(e: E) -> AppError {
        AppError::StorageError(format!("File store lock poisoned: {}", e))
    }
}

impl KeyValueStore for FileStore {
    fn get_item(&self, key: &str) -> AppResult<Option<String>> {
        let items = self.items.read().map_err(Self::lock_error)?;
        Ok(items.get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> AppResult<()> {
        let mut items = self.items.write().map_err(Self::lock_error)?;
        let previous = items.insert(key.to_string(), value.to_string());

        if let Err(e) = self.persist(&items) {
            // 메모리 상태를 파일과 맞춘다
            match previous {
                Some(old) => items.insert(key.to_string(), old),
                None => items.remove(key),
            };
            return Err(e);
        }
        Ok(())
    }

    fn remove_item(&self, key: &str) -> AppResult<()> {
        let mut items = self.items.write().map_err(Self::lock_error)?;
        let Some(previous) = items.remove(key) else {
            return Ok(());
        };

        if let Err(e) = self.persist(&items) {
            items.insert(key.to_string(), previous);
            return Err(e);
        }
        Ok(())
    }
}
