//! # Domain Entities Module
//!
//! 카탈로그 도메인의 핵심 엔티티들을 정의합니다.
//!
//! ## 엔티티 설계 원칙
//!
//! ### 1. 쓰기 시점 검증
//! 모든 필드는 비공개이며 getter 로만 읽습니다. 값 변경은 `set_*` 메서드로만 가능하고,
//! 생성자와 setter 는 같은 규칙을 사용합니다. 실패하면 `AppError::InvalidField` 를 반환하고
//! 엔티티 상태는 그대로 유지됩니다.
//!
//! ### 2. 레코드 스냅샷
//! 저장 형식은 각 엔티티의 `*Record` 구조체(camelCase JSON)입니다.
//! [`Entity::to_record`] 는 소유권을 가진 복사본을 만들기 때문에
//! 스냅샷을 수정해도 엔티티에는 영향이 없습니다.
//!
//! ### 3. 약한 참조
//! 엔티티끼리는 ID 문자열로만 연결됩니다 (`recipe.category_id()`, `post.author_id()`).
//! 삭제는 연쇄되지 않으므로 참조를 따라가는 쪽에서 `Option` 을 처리해야 합니다.
//!
//! ```text
//! entities/
//! ├── users/        ← User, Role
//! ├── recipes/      ← Recipe, Nutrition, IngredientSection
//! ├── categories/   ← Category
//! └── blogs/        ← BlogPost
//! ```
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::domain::entities::{Entity, categories::Category};
//!
//! let category = Category::from_record(record)?;
//! let snapshot = category.to_record();
//! assert_eq!(Category::from_record(snapshot.clone())?.to_record(), snapshot);
//! ```

pub mod blogs;
pub mod categories;
pub mod recipes;
pub mod users;

pub use blogs::BlogPost;
pub use categories::Category;
pub use recipes::Recipe;
pub use users::{Role, User};

use serde::{Serialize, de::DeserializeOwned};
use crate::core::errors::AppResult;
use crate::validation::rules;

/// 저장소에 보관되는 모든 엔티티의 공통 인터페이스
///
/// 직접 인스턴스화할 수 없는 추상 기반 역할을 하며, 각 엔티티는
/// 컬렉션 이름과 레코드 변환을 구현해야 합니다.
pub trait Entity: Sized + Clone {
    /// 저장소 컬렉션 이름 (키 접두사 제외)
    const COLLECTION: &'static str;

    /// 직렬화 가능한 평면 레코드 타입
    type Record: Serialize + DeserializeOwned + Clone + std::fmt::Debug;

    /// 고유 식별자
    fn id(&self) -> &str;

    /// 저장용 스냅샷을 생성합니다.
    fn to_record(&self) -> Self::Record;

    /// 레코드로부터 엔티티를 재구성합니다. 모든 필드를 다시 검증합니다.
    fn from_record(record: Self::Record) -> AppResult<Self>;
}

/// 엔티티 ID 를 검증하고 앞뒤 공백을 제거해 반환합니다.
pub(crate) fn validated_id(id: &str) -> AppResult<String> {
    rules::id(id).into_result("Entity ID")?;
    Ok(id.trim().to_string())
}

/// 문자열 길이를 검증하고 앞뒤 공백을 제거해 반환합니다.
pub(crate) fn validated_text(
    label: &str,
    value: &str,
    min: usize,
    max: Option<usize>,
) -> AppResult<String> {
    rules::string_length(value, min, max).into_result(label)?;
    Ok(value.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::errors::AppError;

    #[test]
    fn test_validated_id_trims() {
        assert_eq!(validated_id("  r1 ").unwrap(), "r1");
        assert!(matches!(validated_id(""), Err(AppError::InvalidField { field, .. }) if field == "Entity ID"));
    }

    #[test]
    fn test_validated_text_bounds() {
        assert_eq!(validated_text("Name", "  Soup ", 3, Some(30)).unwrap(), "Soup");
        let err = validated_text("Name", "ab", 3, Some(30)).unwrap_err();
        assert_eq!(err.to_string(), "Name: String length must be between 3 and 30 characters");
    }
}
