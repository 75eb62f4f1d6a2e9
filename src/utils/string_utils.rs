//! # 문자열 유틸리티
//!
//! 문자열 처리와 관련된 공통 유틸리티 함수, 그리고 관대한 serde deserializer 들입니다.

use serde::Deserialize;
use serde_json::Value;
use crate::core::errors::AppError;

/// 필수 문자열 필드 검증 및 정리
///
/// 빈 문자열이나 공백만 있는 경우 ValidationError를 반환하고,
/// 유효한 문자열인 경우 앞뒤 공백을 제거한 문자열을 반환합니다.
///
/// # 예제
/// ```rust,ignore
/// use crate::utils::string_utils::validate_required_string;
///
/// assert_eq!(validate_required_string("  c1  ", "Recipe ID").unwrap(), "c1");
/// assert!(validate_required_string("   ", "Recipe ID").is_err());
/// ```
pub fn validate_required_string(value: &str, field_name: &str) -> Result<String, AppError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(AppError::ValidationError(format!("{} is required", field_name)));
    }
    Ok(trimmed.to_string())
}

/// 선택적 문자열 필드 정리
///
/// None 값이거나 빈 문자열/공백만 있는 경우 None을 반환하고,
/// 유효한 문자열인 경우 앞뒤 공백을 제거한 문자열을 Some 옵션으로 반환합니다.
pub fn clean_optional_string(value: Option<String>) -> Option<String> {
    value.and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// 공백뿐인 값을 `None` 으로 바꿉니다. 남는 값은 입력 그대로 유지합니다.
///
/// 비밀번호처럼 앞뒤 공백도 값의 일부인 필드에 사용합니다.
pub fn non_blank_string(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}

/// 대소문자 구분 없는 문자열 비교 (유니코드 소문자 변환 기준)
pub fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}

/// 대소문자 구분 없는 부분 문자열 검색
///
/// 검색어가 비어있으면 항상 `true` 입니다.
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// `snake_case` 필드명을 `camelCase` 로 변환합니다.
///
/// 검증 에러의 필드명을 JSON 필드명과 맞추는 데 사용합니다.
pub fn to_camel_case(value: &str) -> String {
    let mut result = String::with_capacity(value.len());
    let mut upper_next = false;
    for c in value.chars() {
        if c == '_' {
            upper_next = !result.is_empty();
        } else if upper_next {
            result.extend(c.to_uppercase());
            upper_next = false;
        } else {
            result.push(c);
        }
    }
    result
}

/// 선택적 문자열 필드를 위한 serde deserializer
///
/// JSON 역직렬화 시 빈 문자열이나 공백만 있는 문자열을 자동으로 None으로 변환하고,
/// 유효한 문자열인 경우 앞뒤 공백을 제거한 후 Some으로 반환합니다.
///
/// ```rust,ignore
/// #[derive(Deserialize)]
/// struct Patch {
///     #[serde(default, deserialize_with = "deserialize_optional_string")]
///     password: Option<String>,
/// }
///
/// // {"password": "   "} → None
/// ```
pub fn deserialize_optional_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(clean_optional_string(opt))
}

/// 공백뿐이면 `None`, 아니면 입력 그대로 `Some` 으로 읽는 deserializer
pub fn deserialize_non_blank_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(non_blank_string(opt))
}

/// 페이지네이션 인자(`skip`, `limit`)를 위한 관대한 deserializer
///
/// 음이 아닌 숫자와 숫자 문자열(`"12"`)을 받아들이고,
/// 그 외의 값(음수, 문자, 객체, null)은 모두 `None` 으로 처리합니다.
/// 호출자는 `None` 을 0 또는 기본값으로 바꿔 사용합니다.
pub fn deserialize_lenient_usize<'de, D>(deserializer: D) -> Result<Option<usize>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    let parsed = value.and_then(|value| match value {
        Value::Number(n) => n.as_u64().or_else(|| {
            n.as_f64()
                .filter(|f| f.is_finite() && *f >= 0.0)
                .map(|f| f.trunc() as u64)
        }),
        Value::String(s) => s.trim().parse::<u64>().ok(),
        _ => None,
    });
    Ok(parsed.and_then(|n| usize::try_from(n).ok()))
}

/// 숫자만 받아들이는 관대한 deserializer
///
/// 범위 필터의 `min`/`max` 처럼 숫자가 아니면 기본값을 써야 하는 필드에 사용합니다.
pub fn deserialize_lenient_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value
        .and_then(|value| value.as_f64())
        .filter(|f| f.is_finite()))
}
