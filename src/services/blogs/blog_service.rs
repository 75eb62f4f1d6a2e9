//! # 블로그 서비스 구현
//!
//! 최신 글 목록, 태그/작성자별 조회, 상세 화면(작성자, 읽기 시간, 관련 글)을 제공합니다.

use std::sync::Arc;
use log::debug;
use crate::domain::dto::criteria::{BlogCriteria, BlogSort};
use crate::domain::dto::page::Page;
use crate::domain::dto::users::UserResponse;
use crate::domain::entities::Entity;
use crate::domain::entities::blogs::BlogPost;
use crate::repositories::blogs::{BlogPostRepository, sort_posts};
use crate::repositories::users::UserRepository;

/// 관련 글 기본 개수
pub const DEFAULT_RELATED_LIMIT: usize = 3;

/// 블로그 글 상세 정보
#[derive(Debug, Clone)]
pub struct BlogDetail {
    pub post: BlogPost,
    pub author: Option<UserResponse>,
    pub reading_minutes: usize,
}

pub struct BlogService {
    blog_repo: Arc<BlogPostRepository>,
    user_repo: Arc<UserRepository>,
}

impl BlogService {
    pub fn new(blog_repo: Arc<BlogPostRepository>, user_repo: Arc<UserRepository>) -> Self {
        Self { blog_repo, user_repo }
    }

    /// 최신 글 `limit` 개
    pub fn get_list(&self, limit: usize) -> Vec<BlogPost> {
        self.blog_repo.find_latest(limit)
    }

    pub fn get_all(&self) -> Vec<BlogPost> {
        self.blog_repo.find_all()
    }

    pub fn get_by_id(&self, id: &str) -> Option<BlogPost> {
        self.blog_repo.find_by_id(id)
    }

    pub fn get_by_tag(&self, tag: &str) -> Vec<BlogPost> {
        self.blog_repo.find_by_tag(tag)
    }

    pub fn get_by_author(&self, author_id: &str) -> Vec<BlogPost> {
        self.blog_repo.find_by_author(author_id)
    }

    pub fn get_all_tags(&self) -> Vec<String> {
        self.blog_repo.find_all_tags()
    }

    pub fn get_with_criteria(&self, criteria: &BlogCriteria) -> Page<BlogPost> {
        let page = self.blog_repo.find_with_criteria(criteria);
        debug!("Blog criteria matched {} (sort {})", page.total, criteria.sort);
        page
    }

    /// 태그를 하나 이상 공유하는 다른 글을 최신순으로 `limit` 개 반환합니다.
    pub fn get_related(&self, id: &str, limit: usize) -> Vec<BlogPost> {
        let Some(post) = self.blog_repo.find_by_id(id) else {
            return Vec::new();
        };

        let mut related: Vec<BlogPost> = self
            .blog_repo
            .find_all()
            .into_iter()
            .filter(|other| other.id() != post.id())
            .filter(|other| post.tags().iter().any(|tag| other.has_tag(tag)))
            .collect();

        sort_posts(&mut related, BlogSort::Newest);
        related.truncate(limit);
        related
    }

    pub fn get_detail(&self, id: &str) -> Option<BlogDetail> {
        let post = self.blog_repo.find_by_id(id)?;
        let author = self.user_repo.find_by_id(post.author_id()).map(UserResponse::from);
        let reading_minutes = post.reading_time_minutes();

        Some(BlogDetail {
            post,
            author,
            reading_minutes,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;

    fn service() -> BlogService {
        let store = fixtures::store();
        let posts = Arc::new(BlogPostRepository::new(store.clone(), fixtures::PREFIX));
        let users = Arc::new(UserRepository::new(store, fixtures::PREFIX));

        users.save(&fixtures::user("u1", "ann@example.com", "Ann Lee"));
        posts.save_batch(&[
            fixtures::post("b1", "Winter Soups", "u1", "2023-01-10T00:00:00.000Z", &["soup", "winter"]),
            fixtures::post("b2", "Quick Bread", "u1", "2023-03-02T00:00:00.000Z", &["baking"]),
            fixtures::post("b3", "Soup Stock Basics", "u2", "2023-02-14T00:00:00.000Z", &["Soup"]),
            fixtures::post("b4", "Snowy Day Stews", "u2", "2023-04-01T00:00:00.000Z", &["winter"]),
            fixtures::post("b5", "Old Broths", "u1", "2022-05-01T00:00:00.000Z", &["soup"]),
        ]);

        BlogService::new(posts, users)
    }

    fn ids(posts: &[BlogPost]) -> Vec<&str> {
        posts.iter().map(|p| p.id()).collect()
    }

    #[test]
    fn test_list_is_newest_first() {
        let service = service();

        assert_eq!(ids(&service.get_list(3)), vec!["b4", "b2", "b3"]);
        assert_eq!(service.get_all().len(), 5);
    }

    #[test]
    fn test_related_posts() {
        let service = service();

        assert_eq!(ids(&service.get_related("b1", DEFAULT_RELATED_LIMIT)), vec!["b4", "b3", "b5"]);
        assert_eq!(ids(&service.get_related("b1", 1)), vec!["b4"]);
        assert!(service.get_related("b2", DEFAULT_RELATED_LIMIT).is_empty());
        assert!(service.get_related("missing", DEFAULT_RELATED_LIMIT).is_empty());
    }

    #[test]
    fn test_detail() {
        let service = service();

        let detail = service.get_detail("b1").unwrap();
        assert_eq!(detail.author.unwrap().full_name, "Ann Lee");
        assert_eq!(detail.reading_minutes, 1);

        assert!(service.get_detail("b3").unwrap().author.is_none());
        assert!(service.get_detail("nope").is_none());
    }

    #[test]
    fn test_tag_and_author_lookup() {
        let service = service();

        assert_eq!(service.get_by_tag("SOUP").len(), 3);
        assert_eq!(service.get_by_author("u2").len(), 2);
        assert_eq!(service.get_all_tags(), vec!["Soup", "baking", "soup", "winter"]);
    }

    #[test]
    fn test_criteria_passthrough() {
        let criteria = BlogCriteria {
            tags: vec!["winter".to_string()],
            date_from: Some("2023-02-01".to_string()),
            ..Default::default()
        };

        assert_eq!(ids(&service().get_with_criteria(&criteria).items), vec!["b4"]);
    }
}
