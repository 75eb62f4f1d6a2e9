//! # 컬렉션 리포지토리 기반 구현
//!
//! 하나의 엔티티 타입을 하나의 저장소 키(`<prefix><COLLECTION>`)에 JSON 배열로 보관합니다.
//! 엔티티별 리포지토리는 이 타입의 별칭이며, 타입 전용 조회 메서드를
//! `impl CollectionRepository<Recipe>` 같은 블록으로 추가합니다.
//!
//! ## 실패 처리
//!
//! | 상황 | 동작 |
//! |------|------|
//! | 저장된 JSON 손상 | 에러 로그 후 빈 컬렉션으로 취급 |
//! | 레코드 하나가 재검증 실패 | 경고 로그 후 해당 레코드만 건너뜀 |
//! | 쓰기 실패 | 에러 로그 후 `false` 반환 |
//! | 삭제 대상 없음 | 경고 로그 후 `false` 반환 |

use std::marker::PhantomData;
use std::sync::Arc;
use log::{error, info, warn};
use serde::Serialize;
use serde_json::Value;
use crate::core::errors::{AppError, AppResult};
use crate::domain::entities::Entity;
use crate::storage::KeyValueStore;

/// 일괄 저장 결과 요약
///
/// 각 항목은 독립적으로 저장되며 실패해도 롤백하지 않습니다.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BatchSummary {
    pub total: usize,
    pub success: usize,
    pub failed: usize,
    /// 성공 비율 (소수점 둘째 자리 반올림). 빈 배치는 100.
    pub percent: f64,
}

impl BatchSummary {
    fn new(total: usize, success: usize) -> Self {
        let percent = if total == 0 {
            100.0
        } else {
            (success as f64 / total as f64 * 10_000.0).round() / 100.0
        };
        Self {
            total,
            success,
            failed: total - success,
            percent,
        }
    }

    pub fn is_complete(&self) -> bool {
        self.failed == 0
    }
}

/// 키-값 저장소 위의 제네릭 컬렉션 리포지토리
pub struct CollectionRepository<E: Entity> {
    store: Arc<dyn KeyValueStore>,
    storage_key: String,
    _entity: PhantomData<fn() -> E>,
}

impl<E: Entity> CollectionRepository<E> {
    /// `prefix` 와 엔티티의 컬렉션 이름을 이어 저장 키를 만듭니다.
    pub fn new(store: Arc<dyn KeyValueStore>, prefix: &str) -> Self {
        Self {
            store,
            storage_key: format!("{}{}", prefix, E::COLLECTION),
            _entity: PhantomData,
        }
    }

    pub fn storage_key(&self) -> &str {
        &self.storage_key
    }

    pub fn collection_name(&self) -> &'static str {
        E::COLLECTION
    }

    fn load(&self) -> AppResult<Vec<Value>> {
        Ok(self.store.get_json::<Vec<Value>>(&self.storage_key)?.unwrap_or_default())
    }

    fn persist(&self, items: &[Value]) -> AppResult<()> {
        self.store.set_json(&self.storage_key, items)
    }

    /// 저장된 레코드를 검증 없이 그대로 반환합니다.
    ///
    /// 읽기 실패나 손상된 데이터는 빈 목록이 됩니다.
    pub fn find_all_raw(&self) -> Vec<Value> {
        self.load().unwrap_or_else(|e| {
            error!("Error reading from {}: {}", E::COLLECTION, e);
            Vec::new()
        })
    }

    pub fn find_raw_by_id(&self, id: &str) -> Option<Value> {
        self.find_all_raw().into_iter().find(|item| record_id(item) == Some(id))
    }

    /// 모든 레코드를 엔티티로 재구성합니다. 재검증에 실패한 레코드는 건너뜁니다.
    pub fn find_all(&self) -> Vec<E> {
        self.find_all_raw()
            .into_iter()
            .filter_map(|raw| self.hydrate(raw))
            .collect()
    }

    pub fn find_by_id(&self, id: &str) -> Option<E> {
        self.find_raw_by_id(id).and_then(|raw| self.hydrate(raw))
    }

    fn hydrate(&self, raw: Value) -> Option<E> {
        let id = record_id(&raw).unwrap_or("?").to_string();
        let decoded = serde_json::from_value::<E::Record>(raw)
            .map_err(AppError::from)
            .and_then(E::from_record);

        match decoded {
            Ok(entity) => Some(entity),
            Err(e) => {
                warn!("Skipping invalid record '{}' in {}: {}", id, E::COLLECTION, e);
                None
            }
        }
    }

    /// ID 기준 upsert. 같은 ID 가 있으면 그 자리를 교체하고, 없으면 끝에 추가합니다.
    ///
    /// 컬렉션 전체를 한 번에 다시 씁니다. 실패는 로그로 남기고 `false` 를 반환합니다.
    pub fn save(&self, entity: &E) -> bool {
        match self.try_save(entity) {
            Ok(()) => {
                info!("Saved to {}", E::COLLECTION);
                true
            }
            Err(e) => {
                error!("Error saving to {}: {}", E::COLLECTION, e);
                false
            }
        }
    }

    fn try_save(&self, entity: &E) -> AppResult<()> {
        let mut items = self.find_all_raw();
        let record = serde_json::to_value(entity.to_record())?;

        match items.iter().position(|item| record_id(item) == Some(entity.id())) {
            Some(index) => items[index] = record,
            None => items.push(record),
        }
        self.persist(&items)
    }

    /// 각 엔티티를 독립적으로 저장하고 결과를 요약합니다.
    pub fn save_batch(&self, entities: &[E]) -> BatchSummary {
        let success = entities.iter().filter(|entity| self.save(entity)).count();
        BatchSummary::new(entities.len(), success)
    }

    /// ID 로 레코드를 삭제합니다. 대상이 없으면 컬렉션을 건드리지 않고 `false` 입니다.
    pub fn delete(&self, id: &str) -> bool {
        let items = self.find_all_raw();
        let before = items.len();
        let remaining: Vec<Value> = items
            .into_iter()
            .filter(|item| record_id(item) != Some(id))
            .collect();

        if remaining.len() == before {
            warn!("Item with id {} not found in {}", id, E::COLLECTION);
            return false;
        }

        match self.persist(&remaining) {
            Ok(()) => {
                info!("Deleted from {}", E::COLLECTION);
                true
            }
            Err(e) => {
                error!("Error deleting from {}: {}", E::COLLECTION, e);
                false
            }
        }
    }

    pub fn exists(&self, id: &str) -> bool {
        self.find_raw_by_id(id).is_some()
    }

    pub fn count(&self) -> usize {
        self.find_all_raw().len()
    }

    /// 컬렉션 키를 저장소에서 제거합니다.
    pub fn clear(&self) -> AppResult<()> {
        self.store.remove_item(&self.storage_key)?;
        info!("Cleared {}", E::COLLECTION);
        Ok(())
    }
}

fn record_id(item: &Value) -> Option<&str> {
    item.get("id").and_then(Value::as_str)
}
