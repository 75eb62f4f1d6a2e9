//! 레시피 카탈로그 실행 파일
//!
//! 파일 저장소를 열고 모든 리포지토리/서비스를 초기화한 뒤,
//! 데모 데이터를 시드하고 카탈로그 요약을 출력합니다.

use std::process::ExitCode;
use std::sync::Arc;
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info, warn};
use recipe_catalog::config::{Environment, SeedConfig, StorageConfig};
use recipe_catalog::core::errors::AppResult;
use recipe_catalog::core::registry::ServiceLocator;
use recipe_catalog::repositories::UserRepository;
use recipe_catalog::seed::DataSeeder;
use recipe_catalog::services::auth::AuthService;
use recipe_catalog::services::blogs::BlogService;
use recipe_catalog::services::recipes::{DEFAULT_LIST_LIMIT, RecipeService};
use recipe_catalog::storage::{FileStore, KeyValueStore};
use recipe_catalog::utils::display_terminal::{
    CatalogSummary, print_boxed_title, print_catalog_summary, print_seed_report,
};

/// 요약에 표시할 최신 글 수
const LATEST_POST_COUNT: usize = 3;

fn main() -> ExitCode {
    let profile = load_env_file();
    init_logging();

    info!("🚀 Recipe catalog starting (profile: {}, env: {:?})", profile, Environment::current());

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Recipe catalog failed: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run() -> AppResult<()> {
    let data_path = StorageConfig::data_path();
    let store: Arc<dyn KeyValueStore> = Arc::new(FileStore::open(&data_path)?);
    info!("📂 Using data file {}", data_path);

    ServiceLocator::initialize_all(store)?;

    let seeder = ServiceLocator::get::<DataSeeder>()?;
    let report = seeder.run(&SeedConfig::version(), SeedConfig::force())?;
    print_seed_report(&report);
    if !report.is_complete() {
        warn!("Some demo records could not be saved");
    }

    let auth = ServiceLocator::get::<AuthService>()?;
    match auth.current_user() {
        Some(user) => info!("👤 Signed in as {}", user.email()),
        None => info!("👤 No active session"),
    }

    print_catalog_summary(&collect_summary()?);
    Ok(())
}

/// 등록된 서비스에서 요약 정보를 모읍니다.
fn collect_summary() -> AppResult<CatalogSummary> {
    let users = ServiceLocator::get::<UserRepository>()?;
    let recipes = ServiceLocator::get::<RecipeService>()?;
    let blogs = ServiceLocator::get::<BlogService>()?;

    Ok(CatalogSummary {
        users: users.count(),
        categories: recipes
            .count_by_category()
            .into_iter()
            .map(|(category, count)| (category.name().to_string(), count))
            .collect(),
        top_recipes: recipes
            .get_highest_rated(DEFAULT_LIST_LIMIT)
            .iter()
            .map(|recipe| (recipe.name().to_string(), recipe.stars()))
            .collect(),
        latest_posts: blogs
            .get_list(LATEST_POST_COUNT)
            .iter()
            .map(|post| (post.title().to_string(), post.reading_time_minutes()))
            .collect(),
        tags: blogs.get_all_tags(),
    })
}

/// `PROFILE` 에 맞는 env 파일을 로드하고 프로필 이름을 반환합니다.
///
/// 로거 초기화 전에 호출되므로 결과는 stdout 으로만 알립니다.
fn load_env_file() -> String {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    let loaded = match profile.as_str() {
        "prod" => dotenv::from_filename(".env.prod").is_ok(),
        "dev" => dotenv::from_filename(".env.dev").is_ok(),
        _ => dotenv().is_ok(),
    };
    if !loaded {
        print_boxed_title("⚠️ NO ENV FILE, USING DEFAULTS");
    }

    profile
}

/// 로깅 시스템을 초기화합니다
///
/// # Environment Variables
///
/// * `RUST_LOG` - 로깅 레벨 설정 (기본값: "info")
///
/// ```bash
/// RUST_LOG=recipe_catalog::repositories=debug cargo run
/// ```
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info"));
}
