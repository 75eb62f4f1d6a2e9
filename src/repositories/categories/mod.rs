//! 카테고리 데이터 액세스 계층

pub mod category_repo;

pub use category_repo::CategoryRepository;
