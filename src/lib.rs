//! 레시피 카탈로그 데이터 계층
//!
//! 키-값 저장소 위에서 동작하는 레시피/카테고리/블로그/사용자 카탈로그입니다.
//! 엔티티는 생성과 수정 시점에 규칙을 검증하고, 리포지토리는 컬렉션 하나를
//! JSON 배열 하나로 저장하며, 서비스는 인증 세션과 화면 단위 조회를 제공합니다.
//!
//! # Features
//!
//! - **검증**: 이메일, 이름, 비밀번호, URL/이미지, 날짜, 코드 패턴, 영양 정보 규칙
//! - **엔티티**: User, Role, Recipe, Category, BlogPost (fail-fast setter)
//! - **리포지토리**: 제네릭 CRUD + 엔티티별 조회, 조건 검색과 페이지네이션
//! - **인증**: bcrypt 해시 기반 회원가입/로그인, 저장소에 유지되는 세션
//! - **시드**: 버전 마커 기반 데모 데이터 적재
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │    Services     │ ← 인증, 프로필, 목록/상세/검색
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← 컬렉션 CRUD, 조건 검색
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Entities     │ ← 검증된 도메인 객체
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ KeyValueStore   │ ← MemoryStore / FileStore
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use recipe_catalog::repositories::UserRepository;
//! use recipe_catalog::services::auth::AuthService;
//! use recipe_catalog::storage::{KeyValueStore, MemoryStore};
//!
//! let store: Arc<dyn KeyValueStore> = Arc::new(MemoryStore::new());
//! let users = Arc::new(UserRepository::new(store.clone(), "RECIPE4F_"));
//! let auth = AuthService::new(users, store, 10);
//!
//! let response = auth.signin("hannah.moore@example.com", "abc123456");
//! println!("{}", response.message);
//! ```

pub mod config;
pub mod core;
pub mod domain;
pub mod repositories;
pub mod seed;
pub mod services;
pub mod storage;
pub mod utils;
pub mod validation;

#[cfg(test)]
mod fixtures;
