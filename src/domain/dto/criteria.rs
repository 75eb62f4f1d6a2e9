//! # 조건 검색 DTO
//!
//! 목록 화면에서 넘어오는 필터 조건입니다. 모든 필드는 선택이며,
//! 서로 다른 필터는 AND, 하나의 다중값 필터 안에서는 OR 로 결합됩니다.
//!
//! ```json
//! {
//!   "text": "cake",
//!   "categories": ["c1", "c2"],
//!   "stars": { "min": 4, "max": 5 },
//!   "sort": "stars_desc",
//!   "skip": "6",
//!   "limit": 6
//! }
//! ```
//!
//! `skip`/`limit` 은 숫자 문자열도 허용하며, 해석할 수 없으면 0 / 기본값으로 처리합니다.

use std::fmt;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use crate::utils::string_utils::{
    deserialize_lenient_number, deserialize_lenient_usize, deserialize_optional_string,
};

pub const RECIPE_DEFAULT_LIMIT: usize = 6;
pub const CATEGORY_DEFAULT_LIMIT: usize = 6;
pub const BLOG_DEFAULT_LIMIT: usize = 9;

/// 숫자 범위 필터 (양 끝 포함)
///
/// `min` 이 없으면 0, `max` 가 없으면 호출자가 정한 상한을 사용합니다.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct NumberRange {
    #[serde(default, deserialize_with = "deserialize_lenient_number")]
    pub min: Option<f64>,
    #[serde(default, deserialize_with = "deserialize_lenient_number")]
    pub max: Option<f64>,
}

impl NumberRange {
    pub fn new(min: Option<f64>, max: Option<f64>) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: f64, default_max: f64) -> bool {
        let min = self.min.unwrap_or(0.0);
        let max = self.max.unwrap_or(default_max);
        value >= min && value <= max
    }
}

/// 문자열 키로 주고받는 정렬 옵션 정의
///
/// 알 수 없는 키는 에러 대신 기본 정렬로 해석합니다.
macro_rules! sort_keys {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $key:literal),+ $(,)? } default $default:ident => $default_key:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
        pub enum $name {
            #[default]
            $default,
            $($variant),+
        }

        impl $name {
            pub fn from_key(key: &str) -> Self {
                match key.trim() {
                    $default_key => Self::$default,
                    $($key => Self::$variant,)+
                    _ => Self::$default,
                }
            }

            pub fn as_key(&self) -> &'static str {
                match self {
                    $(Self::$variant => $key,)+
                    Self::$default => $default_key,
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_key())
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_key())
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let key = Option::<String>::deserialize(deserializer)?;
                Ok(key.map(|k| Self::from_key(&k)).unwrap_or_default())
            }
        }
    };
}

sort_keys! {
    /// 레시피 정렬 순서
    RecipeSort {
        NameDesc => "name_desc",
        StarsAsc => "stars_asc",
        StarsDesc => "stars_desc",
        CookTimeAsc => "cookTime_asc",
        CookTimeDesc => "cookTime_desc",
        PrepTimeAsc => "prepTime_asc",
        PrepTimeDesc => "prepTime_desc",
    }
    default NameAsc => "name_asc"
}

sort_keys! {
    /// 블로그 정렬 순서
    BlogSort {
        Oldest => "oldest",
        TitleAsc => "title_asc",
        TitleDesc => "title_desc",
    }
    default Newest => "newest"
}

/// 레시피 검색 조건
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RecipeCriteria {
    /// 이름 또는 설명에 대한 대소문자 무시 부분 일치
    #[serde(deserialize_with = "deserialize_optional_string")]
    pub text: Option<String>,
    /// 카테고리 ID (OR)
    pub categories: Vec<String>,
    /// 작성자 ID (OR)
    pub author_ids: Vec<String>,
    pub stars: Option<NumberRange>,
    pub cook_time: Option<NumberRange>,
    pub prep_time: Option<NumberRange>,
    pub sort: RecipeSort,
    #[serde(deserialize_with = "deserialize_lenient_usize")]
    pub skip: Option<usize>,
    #[serde(deserialize_with = "deserialize_lenient_usize")]
    pub limit: Option<usize>,
}

/// 카테고리 검색 조건
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CategoryCriteria {
    /// 이름 또는 설명에 대한 부분 일치
    #[serde(deserialize_with = "deserialize_optional_string")]
    pub text: Option<String>,
    pub ids: Vec<String>,
    pub codes: Vec<String>,
    #[serde(deserialize_with = "deserialize_lenient_usize")]
    pub skip: Option<usize>,
    #[serde(deserialize_with = "deserialize_lenient_usize")]
    pub limit: Option<usize>,
}

/// 블로그 검색 조건
///
/// `date_from`/`date_to` 는 날짜 문자열이며, 해석할 수 없으면 무시됩니다.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BlogCriteria {
    /// 제목 또는 요약에 대한 부분 일치
    #[serde(deserialize_with = "deserialize_optional_string")]
    pub text: Option<String>,
    /// 태그 (OR, 대소문자 무시)
    pub tags: Vec<String>,
    pub author_ids: Vec<String>,
    #[serde(deserialize_with = "deserialize_optional_string")]
    pub date_from: Option<String>,
    #[serde(deserialize_with = "deserialize_optional_string")]
    pub date_to: Option<String>,
    pub sort: BlogSort,
    #[serde(deserialize_with = "deserialize_lenient_usize")]
    pub skip: Option<usize>,
    #[serde(deserialize_with = "deserialize_lenient_usize")]
    pub limit: Option<usize>,
}
