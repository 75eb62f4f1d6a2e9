//! 페이지 단위 조회 결과

use serde::Serialize;

/// 필터링된 결과의 한 페이지
///
/// `total` 은 페이지로 자르기 전의 전체 개수입니다.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: usize,
}

impl<T> Page<T> {
    /// 전체 목록에서 `skip..skip + limit` 구간을 잘라냅니다.
    ///
    /// `skip` 이 없으면 0, `limit` 이 없거나 0 이면 `default_limit` 를 사용합니다.
    pub fn paginate(
        items: Vec<T>,
        skip: Option<usize>,
        limit: Option<usize>,
        default_limit: usize,
    ) -> Self {
        let total = items.len();
        let skip = skip.unwrap_or(0);
        let limit = limit.filter(|l| *l > 0).unwrap_or(default_limit);

        let items = items.into_iter().skip(skip).take(limit).collect();
        Self { items, total }
    }

    /// `limit` 크기 페이지로 나눌 때 필요한 페이지 수
    pub fn page_count(&self, limit: usize) -> usize {
        if limit == 0 {
            return 0;
        }
        self.total.div_ceil(limit)
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn map<U, F>(self, f: F) -> Page<U>
    where
        F: FnMut(T) -> U,
    {
        Page {
            items: self.items.into_iter().map(f).collect(),
            total: self.total,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paginate_counts_before_slicing() {
        let page = Page::paginate((1..=10).collect(), Some(8), Some(4), 6);

        assert_eq!(page.items, vec![9, 10]);
        assert_eq!(page.total, 10);
        assert_eq!(page.page_count(4), 3);
    }

    #[test]
    fn test_zero_or_missing_limit_uses_default() {
        let data: Vec<u32> = (0..20).collect();

        assert_eq!(Page::paginate(data.clone(), None, Some(0), 9).items.len(), 9);
        assert_eq!(Page::paginate(data, None, None, 6).items.len(), 6);
    }

    #[test]
    fn test_skip_past_end_is_empty() {
        let page = Page::paginate(vec!['a', 'b'], Some(5), Some(2), 6);

        assert!(page.is_empty());
        assert_eq!(page.total, 2);
    }

    #[test]
    fn test_consecutive_pages_cover_everything_once() {
        let data: Vec<usize> = (0..23).collect();
        let limit = 5;
        let mut seen = Vec::new();
        let mut skip = 0;

        loop {
            let page = Page::paginate(data.clone(), Some(skip), Some(limit), 6);
            if page.is_empty() {
                break;
            }
            seen.extend(page.items);
            skip += limit;
        }

        assert_eq!(seen, data);
    }
}
