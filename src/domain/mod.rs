//! # Domain Layer Module
//!
//! 카탈로그 도메인의 엔티티와 DTO 를 담는 계층입니다.
//!
//! ```text
//! Domain Layer (이 모듈)
//! ├── Entities  - 쓰기 시점에 검증되는 값 객체 (User, Recipe, Category, BlogPost, Role)
//! └── DTOs      - 검색 조건, 페이지, 요청/응답
//!      │
//!      ▼
//! Application Layer (Services)
//!      │
//!      ▼
//! Infrastructure Layer (Repositories, Storage)
//! ```
//!
//! 엔티티는 서로를 ID 로만 참조합니다. 참조 무결성은 강제하지 않으므로
//! 관계를 따라가는 코드는 항상 `Option` 을 처리해야 합니다.

pub mod entities;
pub mod dto;

pub use entities::*;
pub use dto::*;
