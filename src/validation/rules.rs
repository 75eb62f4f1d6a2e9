//! 개별 필드 검증 규칙
//!
//! 각 함수는 순수 함수이며 입력이 무엇이든 [`ValidationResult`] 를 반환합니다.
//! 길이 검사는 바이트가 아닌 문자(char) 수 기준입니다.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use url::Url;
use super::ValidationResult;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"));
static FULL_NAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[\p{L}\s'-]+$").expect("valid full name regex"));
static CATEGORY_CODE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^CATE_[A-Z0-9_]+$").expect("valid category code regex"));
static RECIPE_CODE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^REC_[A-Z0-9_]+$").expect("valid recipe code regex"));
static ROLE_CODE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^ROLE_[A-Z_]+$").expect("valid role code regex"));

const IMAGE_EXTENSIONS: [&str; 6] = ["jpg", "jpeg", "png", "gif", "webp", "svg"];

/// 확장자 없이 이미지를 제공하는 알려진 썸네일/CDN 경로 패턴
const IMAGE_URL_PATTERNS: [&str; 3] = ["/th/id/", "ui-avatars.com/api/", "placeholder.com"];

pub const EMAIL_MIN: usize = 5;
pub const EMAIL_MAX: usize = 254;
pub const FULL_NAME_MIN: usize = 3;
pub const FULL_NAME_MAX: usize = 100;
pub const PASSWORD_MIN: usize = 8;
pub const TAG_MAX: usize = 20;
pub const STARS_MAX: i64 = 5;

pub const CALORIES_MAX: f64 = 10_000.0;
pub const MACRO_GRAMS_MAX: f64 = 1_000.0;
pub const CHOLESTEROL_MAX: f64 = 10_000.0;

fn char_len(value: &str) -> usize {
    value.chars().count()
}

/// 이메일 길이(5-254)와 `local@domain.tld` 형식
pub fn email(value: &str) -> ValidationResult {
    let len = char_len(value);
    ValidationResult::new()
        .check(
            "length",
            (EMAIL_MIN..=EMAIL_MAX).contains(&len),
            format!("Email length must be between {} and {} characters", EMAIL_MIN, EMAIL_MAX),
        )
        .check("format", EMAIL_RE.is_match(value), "Email format is invalid")
}

/// 이름: 앞뒤 공백 제거 후 3-100자, 유니코드 문자/공백/아포스트로피/하이픈만 허용
pub fn full_name(value: &str) -> ValidationResult {
    let trimmed = value.trim();
    let len = char_len(trimmed);
    ValidationResult::new()
        .check(
            "length",
            (FULL_NAME_MIN..=FULL_NAME_MAX).contains(&len),
            format!(
                "Full name length must be between {} and {} characters",
                FULL_NAME_MIN, FULL_NAME_MAX
            ),
        )
        .check("chars", FULL_NAME_RE.is_match(trimmed), "Full name contains invalid characters")
}

/// 비밀번호: 8자 이상, 영문자와 숫자를 각각 하나 이상 포함
pub fn password(value: &str) -> ValidationResult {
    ValidationResult::new()
        .check(
            "length",
            char_len(value) >= PASSWORD_MIN,
            format!("Password must be at least {} characters", PASSWORD_MIN),
        )
        .check(
            "letter",
            value.chars().any(|c| c.is_ascii_alphabetic()),
            "Password must contain at least one letter",
        )
        .check(
            "number",
            value.chars().any(|c| c.is_ascii_digit()),
            "Password must contain at least one number",
        )
}

/// 절대 URL 로 파싱 가능한지
pub fn url(value: &str) -> ValidationResult {
    ValidationResult::new().check("url", Url::parse(value).is_ok(), "Invalid URL format")
}

/// 이미지 경로 휴리스틱
///
/// 쿼리와 프래그먼트를 제외한 경로가 이미지 확장자로 끝나거나,
/// 알려진 썸네일 CDN 패턴을 포함하면 통과합니다.
pub fn image(value: &str) -> ValidationResult {
    if value.trim().is_empty() {
        return ValidationResult::failure("image", "Image path is required");
    }
    ValidationResult::new().check("image", looks_like_image(value), "Invalid image format")
}

fn looks_like_image(value: &str) -> bool {
    let path = value
        .split(['?', '#'])
        .next()
        .unwrap_or(value)
        .to_ascii_lowercase();

    let has_extension = path
        .rsplit_once('.')
        .map(|(_, ext)| IMAGE_EXTENSIONS.contains(&ext))
        .unwrap_or(false);

    has_extension || IMAGE_URL_PATTERNS.iter().any(|pattern| value.contains(pattern))
}

/// 이미지 URL: `url` 과 `image` 규칙을 모두 만족해야 하며, 두 결과를 모두 보고합니다.
pub fn image_url(value: &str) -> ValidationResult {
    url(value).merge(image(value))
}

/// 날짜 문자열을 UTC 시각으로 파싱합니다.
///
/// RFC 3339 (`2023-10-05T00:00:00.000Z`), 시간대 없는 ISO 날짜시각,
/// `YYYY-MM-DD` 형식을 허용합니다.
pub fn parse_date(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(naive.and_utc());
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

pub fn date(value: &str) -> ValidationResult {
    ValidationResult::new().check("format", parse_date(value).is_some(), "Invalid date format")
}

pub fn category_code(value: &str) -> ValidationResult {
    ValidationResult::new().check(
        "format",
        CATEGORY_CODE_RE.is_match(value),
        "Invalid category code format",
    )
}

pub fn recipe_code(value: &str) -> ValidationResult {
    ValidationResult::new().check("format", RECIPE_CODE_RE.is_match(value), "Invalid recipe code format")
}

pub fn role_code(value: &str) -> ValidationResult {
    ValidationResult::new().check(
        "format",
        ROLE_CODE_RE.is_match(value),
        "Invalid role code format, must be ROLE_*",
    )
}

/// 식별자: 비어있지 않아야 하며 공백만으로 구성될 수 없음
pub fn id(value: &str) -> ValidationResult {
    if value.is_empty() {
        return ValidationResult::failure("id", "ID is required");
    }
    ValidationResult::new().check("id", !value.trim().is_empty(), "ID must be a non-empty string")
}

/// 앞뒤 공백 제거 후 문자 수가 `min..=max` 범위인지. `max` 가 `None` 이면 상한 없음.
pub fn string_length(value: &str, min: usize, max: Option<usize>) -> ValidationResult {
    let len = char_len(value.trim());
    let within = len >= min && max.is_none_or(|max| len <= max);
    let message = match max {
        Some(max) => format!("String length must be between {} and {} characters", min, max),
        None => format!("String length must be at least {} characters", min),
    };
    ValidationResult::new().check("length", within, message)
}

pub fn positive_integer(value: i64) -> ValidationResult {
    ValidationResult::new().check("value", value > 0, "Must be a positive integer")
}

pub fn non_negative_integer(value: i64) -> ValidationResult {
    ValidationResult::new().check("value", value >= 0, "Must be a non-negative integer")
}

/// 별점: 0-5 정수
pub fn rating_stars(value: i64) -> ValidationResult {
    ValidationResult::new().check(
        "stars",
        (0..=STARS_MAX).contains(&value),
        format!("Stars must be an integer between 0 and {}", STARS_MAX),
    )
}

fn bounded_number(field: &'static str, label: &str, value: Option<f64>, max: f64) -> ValidationResult {
    let ok = value.is_none_or(|v| v.is_finite() && (0.0..=max).contains(&v));
    ValidationResult::new().check(field, ok, format!("{} must be a number between 0 and {}", label, max))
}

/// 영양 정보: 값이 있는 항목만 0 이상 상한 이하인지 검사합니다.
pub fn nutrition(
    calories: Option<f64>,
    protein: Option<f64>,
    fat: Option<f64>,
    carbs: Option<f64>,
    cholesterol: Option<f64>,
) -> ValidationResult {
    bounded_number("calories", "Calories", calories, CALORIES_MAX)
        .merge(bounded_number("protein", "Protein", protein, MACRO_GRAMS_MAX))
        .merge(bounded_number("fat", "Fat", fat, MACRO_GRAMS_MAX))
        .merge(bounded_number("carbs", "Carbs", carbs, MACRO_GRAMS_MAX))
        .merge(bounded_number("cholesterol", "Cholesterol", cholesterol, CHOLESTEROL_MAX))
}

/// 태그 목록: 각 태그는 앞뒤 공백 제거 후 1-20자
pub fn tags<S: AsRef<str>>(values: &[S]) -> ValidationResult {
    let ok = values.iter().all(|tag| {
        let len = char_len(tag.as_ref().trim());
        (1..=TAG_MAX).contains(&len)
    });
    ValidationResult::new().check("length", ok, format!("Each tag must be 1-{} characters", TAG_MAX))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_examples() {
        assert!(email("a@b.co").is_valid());

        let invalid = email("not-an-email");
        assert!(!invalid.is_valid());
        assert_eq!(invalid.error("format"), Some("Email format is invalid"));
        assert_eq!(invalid.error("length"), None);
    }

    #[test]
    fn test_email_length_bounds() {
        // 정확히 5자와 254자는 통과
        assert!(email("a@b.c").is_valid());
        let local = "a".repeat(254 - "@b.co".len());
        assert!(email(&format!("{}@b.co", local)).is_valid());

        let too_long = format!("{}a@b.co", local);
        let result = email(&too_long);
        assert!(!result.is_valid());
        assert!(result.error("length").is_some());

        let too_short = email("a@b.");
        assert!(too_short.error("length").is_some());
        assert!(too_short.error("format").is_some());
    }

    #[test]
    fn test_full_name_rules() {
        assert!(full_name("Ann").is_valid());
        assert!(full_name("  Zoë O'Neil-Smith  ").is_valid());
        assert!(full_name("Nguyễn Văn An").is_valid());
        assert!(full_name(&"a".repeat(100)).is_valid());

        assert!(full_name("Al").error("length").is_some());
        assert!(full_name(&"a".repeat(101)).error("length").is_some());
        assert!(full_name("R2-D2").error("chars").is_some());
    }

    #[test]
    fn test_password_reports_every_failure() {
        let result = password("short");
        assert!(result.error("length").is_some());
        assert!(result.error("number").is_some());
        assert!(result.error("letter").is_none());

        let digits_only = password("12345678");
        assert_eq!(digits_only.messages(), "Password must contain at least one letter");

        assert!(password("abc12345").is_valid());
    }

    #[test]
    fn test_image_heuristic() {
        assert!(image("https://cdn.example.com/pho.JPG").is_valid());
        assert!(image("https://cdn.example.com/pho.webp?v=1747909095640").is_valid());
        assert!(image("https://tse1.mm.bing.net/th/id/OIP.hp-Tsbnv6yy2?rs=1&pid=ImgDetMain").is_valid());
        assert!(image("https://ui-avatars.com/api/?name=Ann&background=random&size=256").is_valid());

        assert_eq!(image("").error("image"), Some("Image path is required"));
        assert_eq!(image("https://example.com/page.html").error("image"), Some("Invalid image format"));
    }

    #[test]
    fn test_image_url_accumulates_errors() {
        let result = image_url("not a url");

        assert!(!result.is_valid());
        assert_eq!(result.error("url"), Some("Invalid URL format"));
        assert_eq!(result.error("image"), Some("Invalid image format"));
        assert_eq!(result.messages(), "Invalid URL format, Invalid image format");

        assert!(image_url("https://example.com/a.png").is_valid());
        let relative = image_url("/images/a.png");
        assert!(relative.error("url").is_some());
        assert!(relative.error("image").is_none());
    }

    #[test]
    fn test_date_formats() {
        assert!(date("2023-10-05T00:00:00.000Z").is_valid());
        assert!(date("2023-10-05T08:30:00+07:00").is_valid());
        assert!(date("2023-10-05").is_valid());
        assert!(date("2023-10-05T08:30:00").is_valid());
        assert!(!date("yesterday").is_valid());
        assert!(!date("2023-13-40").is_valid());
    }

    #[test]
    fn test_code_patterns() {
        assert!(category_code("CATE_VEGAN").is_valid());
        assert!(!category_code("cate_vegan").is_valid());
        assert!(!category_code("CATE_").is_valid());

        assert!(recipe_code("REC_PHO_BO_2").is_valid());
        assert!(!recipe_code("RECIPE_PHO").is_valid());

        assert!(role_code("ROLE_ADMIN").is_valid());
        assert!(!role_code("ROLE_ADMIN2").is_valid());
    }

    #[test]
    fn test_id_rule() {
        assert!(id("u1").is_valid());
        assert_eq!(id("").error("id"), Some("ID is required"));
        assert_eq!(id("   ").error("id"), Some("ID must be a non-empty string"));
    }

    #[test]
    fn test_string_length_boundaries() {
        assert!(string_length("abc", 3, Some(5)).is_valid());
        assert!(string_length("abcde", 3, Some(5)).is_valid());
        assert!(string_length("  abc  ", 3, Some(3)).is_valid());
        assert!(!string_length("ab", 3, Some(5)).is_valid());
        assert!(!string_length("abcdef", 3, Some(5)).is_valid());

        assert!(string_length(&"x".repeat(10_000), 10, None).is_valid());
        assert_eq!(
            string_length("short", 10, None).error("length"),
            Some("String length must be at least 10 characters")
        );
    }

    #[test]
    fn test_integer_rules() {
        assert!(positive_integer(1).is_valid());
        assert!(!positive_integer(0).is_valid());
        assert!(non_negative_integer(0).is_valid());
        assert!(!non_negative_integer(-1).is_valid());

        assert!(rating_stars(0).is_valid());
        assert!(rating_stars(5).is_valid());
        assert!(!rating_stars(6).is_valid());
        assert!(!rating_stars(-1).is_valid());
    }

    #[test]
    fn test_nutrition_bounds() {
        assert!(nutrition(None, None, None, None, None).is_valid());
        assert!(nutrition(Some(450.0), Some(25.5), Some(0.0), Some(1000.0), Some(10000.0)).is_valid());

        let result = nutrition(Some(-1.0), None, Some(1000.5), None, Some(f64::NAN));
        assert!(result.error("calories").is_some());
        assert!(result.error("fat").is_some());
        assert!(result.error("cholesterol").is_some());
        assert!(result.error("protein").is_none());
    }

    #[test]
    fn test_tags_rule() {
        assert!(tags::<&str>(&[]).is_valid());
        assert!(tags(&["Vegan", "Tips"]).is_valid());
        assert!(tags(&["x".repeat(20)]).is_valid());
        assert!(!tags(&["x".repeat(21)]).is_valid());
        assert_eq!(tags(&["ok", "   "]).error("length"), Some("Each tag must be 1-20 characters"));
    }
}
