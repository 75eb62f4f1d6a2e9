//! 공통 유틸리티 함수 모듈
//! 
//! 애플리케이션 전체에서 사용되는 공통 유틸리티 함수들을 제공합니다.
//!
//! # Modules
//!
//! - [`string_utils`] - 문자열 정리, 대소문자 무시 비교, 느슨한 serde 역직렬화
//! - [`display_terminal`] - 초기화/시드/카탈로그 요약 터미널 출력
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::utils::string_utils::contains_ignore_case;
//! use crate::utils::display_terminal::print_boxed_title;
//!
//! assert!(contains_ignore_case("Caramel Flan", "flan"));
//!
//! print_boxed_title("RECIPE CATALOG");
//! ```

pub mod string_utils;
pub mod display_terminal;
