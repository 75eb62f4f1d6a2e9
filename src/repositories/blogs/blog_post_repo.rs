//! # 블로그 글 리포지토리 구현
//!
//! 태그, 작성자, 게시일 기준 조회와 조건 검색을 제공합니다.
//! 태그 비교는 대소문자를 구분하지 않습니다.

use std::collections::BTreeSet;
use chrono::{DateTime, Utc};
use log::warn;
use crate::domain::dto::criteria::{BLOG_DEFAULT_LIMIT, BlogCriteria, BlogSort};
use crate::domain::dto::page::Page;
use crate::domain::entities::blogs::BlogPost;
use crate::repositories::base::CollectionRepository;
use crate::utils::string_utils::contains_ignore_case;
use crate::validation::rules;

/// `find_latest` / `find_oldest` 의 기본 개수
pub const DEFAULT_RECENT_COUNT: usize = 10;

pub type BlogPostRepository = CollectionRepository<BlogPost>;

impl CollectionRepository<BlogPost> {
    pub fn find_by_author(&self, author_id: &str) -> Vec<BlogPost> {
        self.filter(|post| post.author_id() == author_id)
    }

    pub fn find_by_tag(&self, tag: &str) -> Vec<BlogPost> {
        self.filter(|post| post.has_tag(tag))
    }

    pub fn find_by_author_and_tag(&self, author_id: &str, tag: &str) -> Vec<BlogPost> {
        self.filter(|post| post.author_id() == author_id && post.has_tag(tag))
    }

    pub fn find_by_title(&self, term: &str) -> Vec<BlogPost> {
        self.filter(|post| contains_ignore_case(post.title(), term))
    }

    pub fn find_by_excerpt(&self, term: &str) -> Vec<BlogPost> {
        self.filter(|post| contains_ignore_case(post.excerpt(), term))
    }

    /// 게시일이 `start..=end` 에 속하는 글
    pub fn find_by_date_range(&self, start: DateTime<Utc>, end: DateTime<Utc>) -> Vec<BlogPost> {
        self.filter(|post| {
            let published = post.published_at_utc();
            published >= start && published <= end
        })
    }

    /// 최신 글 `count` 개
    pub fn find_latest(&self, count: usize) -> Vec<BlogPost> {
        let mut posts = self.find_all();
        sort_posts(&mut posts, BlogSort::Newest);
        posts.truncate(count);
        posts
    }

    pub fn find_oldest(&self, count: usize) -> Vec<BlogPost> {
        let mut posts = self.find_all();
        sort_posts(&mut posts, BlogSort::Oldest);
        posts.truncate(count);
        posts
    }

    /// 제목순 전체 목록
    pub fn find_all_sorted(&self) -> Vec<BlogPost> {
        let mut posts = self.find_all();
        sort_posts(&mut posts, BlogSort::TitleAsc);
        posts
    }

    pub fn count_by_author(&self, author_id: &str) -> usize {
        self.find_by_author(author_id).len()
    }

    /// 사용 중인 모든 태그 (중복 제거, 정렬)
    pub fn find_all_tags(&self) -> Vec<String> {
        self.find_all()
            .iter()
            .flat_map(|post| post.tags().iter().cloned())
            .collect::<BTreeSet<String>>()
            .into_iter()
            .collect()
    }

    pub fn count_by_tag(&self, tag: &str) -> usize {
        self.find_by_tag(tag).len()
    }

    /// 조건 검색
    ///
    /// 태그(OR), 작성자(OR), 텍스트(제목/요약), 게시일 범위를 AND 로 결합합니다.
    /// 해석할 수 없는 날짜 경계는 경고 후 무시합니다.
    pub fn find_with_criteria(&self, criteria: &BlogCriteria) -> Page<BlogPost> {
        let mut posts = self.find_all();

        if !criteria.tags.is_empty() {
            posts.retain(|p| criteria.tags.iter().any(|tag| p.has_tag(tag)));
        }
        if !criteria.author_ids.is_empty() {
            posts.retain(|p| criteria.author_ids.iter().any(|id| id == p.author_id()));
        }
        if let Some(text) = criteria.text.as_deref().map(str::trim).filter(|t| !t.is_empty()) {
            posts.retain(|p| contains_ignore_case(p.title(), text) || contains_ignore_case(p.excerpt(), text));
        }
        if let Some(from) = date_bound("dateFrom", criteria.date_from.as_deref()) {
            posts.retain(|p| p.published_at_utc() >= from);
        }
        if let Some(to) = date_bound("dateTo", criteria.date_to.as_deref()) {
            posts.retain(|p| p.published_at_utc() <= to);
        }

        sort_posts(&mut posts, criteria.sort);
        Page::paginate(posts, criteria.skip, criteria.limit, BLOG_DEFAULT_LIMIT)
    }

    fn filter<P>(&self, predicate: P) -> Vec<BlogPost>
    where
        P: Fn(&BlogPost) -> bool,
    {
        self.find_all().into_iter().filter(|post| predicate(post)).collect()
    }
}

fn date_bound(name: &str, value: Option<&str>) -> Option<DateTime<Utc>> {
    let value = value.map(str::trim).filter(|v| !v.is_empty())?;
    let parsed = rules::parse_date(value);
    if parsed.is_none() {
        warn!("Ignoring unparseable {} '{}'", name, value);
    }
    parsed
}

pub fn sort_posts(posts: &mut [BlogPost], sort: BlogSort) {
    match sort {
        BlogSort::Newest => posts.sort_by(|a, b| b.published_at_utc().cmp(&a.published_at_utc())),
        BlogSort::Oldest => posts.sort_by_key(|p| p.published_at_utc()),
        BlogSort::TitleAsc => posts.sort_by_key(|p| p.title().to_lowercase()),
        BlogSort::TitleDesc => {
            posts.sort_by(|a, b| b.title().to_lowercase().cmp(&a.title().to_lowercase()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::Entity;
    use crate::fixtures;

    fn ids(posts: &[BlogPost]) -> Vec<&str> {
        posts.iter().map(|p| p.id()).collect()
    }

    fn repo() -> BlogPostRepository {
        let repo = BlogPostRepository::new(fixtures::store(), fixtures::PREFIX);
        repo.save_batch(&[
            fixtures::post("b1", "Winter soups for busy weeks", "u1", "2023-01-10T08:00:00.000Z", &["Soup", "winter"]),
            fixtures::post("b2", "Baking bread without a mixer", "u2", "2023-03-05T08:00:00.000Z", &["baking"]),
            fixtures::post("b3", "Quick lunches for the office", "u1", "2023-02-20T08:00:00.000Z", &["quick", "soup"]),
        ]);
        repo
    }

    #[test]
    fn test_tag_lookup_ignores_case() {
        let repo = repo();

        assert_eq!(ids(&repo.find_by_tag("SOUP")), vec!["b1", "b3"]);
        assert_eq!(repo.count_by_tag("baking"), 1);
        assert_eq!(ids(&repo.find_by_author_and_tag("u1", "quick")), vec!["b3"]);
    }

    #[test]
    fn test_tag_lookup_ignores_unicode_case() {
        let repo = repo();
        repo.save(&fixtures::post("b4", "Ẩm thực mùa đông", "u2", "2023-04-01T08:00:00.000Z", &["Ẩm Thực"]));

        assert_eq!(ids(&repo.find_by_tag("ẩm thực")), vec!["b4"]);
        assert_eq!(repo.count_by_tag("ẨM THỰC"), 1);
        assert_eq!(ids(&repo.find_by_author_and_tag("u2", "ẩm thực")), vec!["b4"]);

        let criteria = BlogCriteria {
            tags: vec!["ẩm thực".to_string()],
            ..Default::default()
        };
        assert_eq!(repo.find_with_criteria(&criteria).total, 1);
    }

    #[test]
    fn test_find_all_tags_sorted_unique() {
        assert_eq!(
            repo().find_all_tags(),
            vec!["Soup", "baking", "quick", "soup", "winter"]
        );
    }

    #[test]
    fn test_latest_and_oldest() {
        let repo = repo();

        assert_eq!(ids(&repo.find_latest(2)), vec!["b2", "b3"]);
        assert_eq!(ids(&repo.find_oldest(DEFAULT_RECENT_COUNT)), vec!["b1", "b3", "b2"]);
    }

    #[test]
    fn test_date_range_is_inclusive() {
        let repo = repo();
        let start = rules::parse_date("2023-01-10T08:00:00.000Z").unwrap();
        let end = rules::parse_date("2023-02-20T08:00:00.000Z").unwrap();

        assert_eq!(ids(&repo.find_by_date_range(start, end)), vec!["b1", "b3"]);
    }

    #[test]
    fn test_criteria_combines_filters() {
        let repo = repo();

        let page = repo.find_with_criteria(&BlogCriteria {
            tags: vec!["soup".to_string(), "baking".to_string()],
            author_ids: vec!["u1".to_string()],
            date_from: Some("2023-02-01".to_string()),
            ..Default::default()
        });

        assert_eq!(page.total, 1);
        assert_eq!(ids(&page.items), vec!["b3"]);
    }

    #[test]
    fn test_criteria_default_sort_is_newest() {
        let page = repo().find_with_criteria(&BlogCriteria {
            text: Some("for".to_string()),
            ..Default::default()
        });

        assert_eq!(ids(&page.items), vec!["b3", "b1"]);
    }

    #[test]
    fn test_criteria_ignores_bad_date() {
        let page = repo().find_with_criteria(&BlogCriteria {
            date_to: Some("someday".to_string()),
            sort: BlogSort::TitleAsc,
            ..Default::default()
        });

        assert_eq!(page.total, 3);
        assert_eq!(ids(&page.items), vec!["b2", "b3", "b1"]);
    }

    #[test]
    fn test_title_and_excerpt_search() {
        let repo = repo();

        assert_eq!(ids(&repo.find_by_title("BREAD")), vec!["b2"]);
        assert_eq!(repo.find_by_excerpt("short excerpt").len(), 3);
        assert_eq!(repo.count_by_author("u1"), 2);
        assert_eq!(ids(&repo.find_all_sorted()), vec!["b2", "b3", "b1"]);
    }
}
