//! # Data Transfer Objects Module
//!
//! 서비스 경계에서 주고받는 데이터 구조를 정의합니다.
//! 엔티티와 달리 DTO 는 외부 입력을 그대로 담으며, 검증은 `validator` 로 수행합니다.
//!
//! ## 모듈 구조
//!
//! ```text
//! dto/
//! ├── criteria.rs   # RecipeCriteria, CategoryCriteria, BlogCriteria, 정렬 키
//! ├── page.rs       # Page<T> { items, total }
//! └── users/        # 가입/로그인/프로필 요청, 사용자 응답
//! ```
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::domain::dto::{RecipeCriteria, Page};
//!
//! let criteria: RecipeCriteria = serde_json::from_str(r#"{"categories":["c2"],"limit":2}"#)?;
//! let page: Page<Recipe> = recipe_service.get_with_criteria(&criteria);
//! println!("{} of {}", page.items.len(), page.total);
//! ```

pub mod criteria;
pub mod page;
pub mod users;

pub use criteria::*;
pub use page::Page;
pub use users::*;
