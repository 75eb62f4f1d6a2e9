//! Blog Post Entity Implementation

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use crate::core::errors::{AppError, AppResult};
use crate::domain::entities::{Entity, validated_id, validated_text};
use crate::utils::string_utils::eq_ignore_case;
use crate::validation::rules;

const WORDS_PER_MINUTE: usize = 200;

fn now_rfc3339() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPostRecord {
    pub id: String,
    pub title: String,
    pub excerpt: String,
    pub content: String,
    pub image: String,
    pub author_id: String,
    /// 없으면 현재 시각
    #[serde(default = "now_rfc3339")]
    pub published_at: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// 블로그 글 엔티티
///
/// `published_at` 은 저장된 문자열 그대로 보존하고,
/// 정렬과 기간 필터용으로 파싱된 UTC 시각을 함께 들고 있습니다.
#[derive(Debug, Clone, PartialEq)]
pub struct BlogPost {
    id: String,
    title: String,
    excerpt: String,
    content: String,
    image: String,
    author_id: String,
    published_at: String,
    published_at_utc: DateTime<Utc>,
    tags: Vec<String>,
}

impl BlogPost {
    pub fn new(record: BlogPostRecord) -> AppResult<Self> {
        let mut post = Self {
            id: validated_id(&record.id)?,
            title: String::new(),
            excerpt: String::new(),
            content: String::new(),
            image: String::new(),
            author_id: String::new(),
            published_at: String::new(),
            published_at_utc: DateTime::<Utc>::default(),
            tags: Vec::new(),
        };
        post.set_title(&record.title)?;
        post.set_excerpt(&record.excerpt)?;
        post.set_content(&record.content)?;
        post.set_image(&record.image)?;
        post.set_author_id(&record.author_id)?;
        post.set_published_at(&record.published_at)?;
        post.set_tags(record.tags)?;
        Ok(post)
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn excerpt(&self) -> &str {
        &self.excerpt
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn image(&self) -> &str {
        &self.image
    }

    pub fn author_id(&self) -> &str {
        &self.author_id
    }

    /// 저장된 원본 날짜 문자열
    pub fn published_at(&self) -> &str {
        &self.published_at
    }

    pub fn published_at_utc(&self) -> DateTime<Utc> {
        self.published_at_utc
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    /// 대소문자 구분 없이 태그 보유 여부
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| eq_ignore_case(t, tag))
    }

    /// 분당 200 단어 기준 예상 읽기 시간. 최소 1분.
    pub fn reading_time_minutes(&self) -> usize {
        let words = self.content.split_whitespace().count();
        words.div_ceil(WORDS_PER_MINUTE).max(1)
    }

    pub fn set_title(&mut self, title: &str) -> AppResult<()> {
        self.title = validated_text("Blog title", title, 10, Some(150))?;
        Ok(())
    }

    pub fn set_excerpt(&mut self, excerpt: &str) -> AppResult<()> {
        self.excerpt = validated_text("Blog excerpt", excerpt, 50, Some(300))?;
        Ok(())
    }

    /// 본문은 마크다운 그대로 보존하므로 공백을 제거하지 않습니다.
    pub fn set_content(&mut self, content: &str) -> AppResult<()> {
        rules::string_length(content, 100, None).into_result("Blog content")?;
        self.content = content.to_string();
        Ok(())
    }

    pub fn set_image(&mut self, image: &str) -> AppResult<()> {
        rules::image_url(image).into_result("Blog image")?;
        self.image = image.to_string();
        Ok(())
    }

    pub fn set_author_id(&mut self, author_id: &str) -> AppResult<()> {
        rules::id(author_id).into_result("Blog author ID")?;
        self.author_id = author_id.trim().to_string();
        Ok(())
    }

    pub fn set_published_at(&mut self, published_at: &str) -> AppResult<()> {
        let parsed = rules::parse_date(published_at)
            .ok_or_else(|| AppError::invalid_field("Blog publishedAt", "Invalid date format"))?;
        self.published_at = published_at.to_string();
        self.published_at_utc = parsed;
        Ok(())
    }

    pub fn set_tags(&mut self, tags: Vec<String>) -> AppResult<()> {
        rules::tags(&tags[..]).into_result("Blog tags")?;
        self.tags = tags.into_iter().map(|tag| tag.trim().to_string()).collect();
        Ok(())
    }
}

impl Entity for BlogPost {
    const COLLECTION: &'static str = "BLOG_POSTS";
    type Record = BlogPostRecord;

    fn id(&self) -> &str {
        &self.id
    }

    fn to_record(&self) -> BlogPostRecord {
        BlogPostRecord {
            id: self.id.clone(),
            title: self.title.clone(),
            excerpt: self.excerpt.clone(),
            content: self.content.clone(),
            image: self.image.clone(),
            author_id: self.author_id.clone(),
            published_at: self.published_at.clone(),
            tags: self.tags.clone(),
        }
    }

    fn from_record(record: BlogPostRecord) -> AppResult<Self> {
        BlogPost::new(record)
    }
}
