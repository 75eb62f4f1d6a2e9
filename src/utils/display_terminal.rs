//! 터미널 출력 포맷팅 유틸리티
//! 
//! 레지스트리 초기화, 데모 데이터 시드, 카탈로그 요약을 터미널에 출력합니다.
//! 진단용 로그는 `log` 매크로를 쓰고, 이 모듈은 사람이 읽는 진행 화면만 담당합니다.

use crate::seed::SeedReport;

/// 박스 형태로 둘러싸인 제목을 출력합니다
/// 
/// Unicode 박스 문자를 사용하여 시각적으로 눈에 띄는 제목을 출력합니다.
/// 텍스트는 자동으로 중앙 정렬됩니다.
/// 
/// # Arguments
/// 
/// * `title` - 출력할 제목 문자열
/// 
/// # Examples
/// 
/// ```rust,ignore
/// use crate::utils::display_terminal::print_boxed_title;
/// 
/// print_boxed_title("RECIPE CATALOG");
/// ```
/// 
/// Output:
/// ```text
/// ╔══════════════════════════════════════════════════╗
/// ║                  RECIPE CATALOG                  ║
/// ╚══════════════════════════════════════════════════╝
/// ```
pub fn print_boxed_title(title: &str) {
    // 고정 너비 50칸 사용 (박스 내부 콘텐츠)
    let content_width = 50;
    let border = "═".repeat(content_width);

    println!("╔{}╗", border);
    println!("║{:^49}║", title);  // ^49로 49칸 중앙 정렬
    println!("╚{}╝", border);
}

/// 진행 단계 시작을 표시합니다
/// 
/// 특정 단계가 시작되었음을 화살표 기호와 함께 출력합니다.
/// 
/// # Arguments
/// 
/// * `step` - 단계 번호 (1부터 시작)
/// * `description` - 단계 설명
/// 
/// # Examples
/// 
/// ```rust,ignore
/// use crate::utils::display_terminal::print_step_start;
/// 
/// print_step_start(1, "Creating Repository instances");
/// ```
/// 
/// Output:
/// ```text
/// → Step 1: Creating Repository instances
/// ```
pub fn print_step_start(step: u8, description: &str) {
    println!("→ Step {}: {}", step, description);
}

/// 진행 단계 완료를 표시합니다
/// 
/// 특정 단계가 완료되었음을 체크 표시와 함께 출력하고,
/// 처리된 항목 수를 함께 표시합니다.
/// 
/// # Arguments
/// 
/// * `step` - 완료된 단계 번호
/// * `description` - 단계 설명
/// * `count` - 처리된 항목 수
/// 
/// # Examples
/// 
/// ```rust,ignore
/// use crate::utils::display_terminal::print_step_complete;
/// 
/// print_step_complete(2, "Service instances created", 6);
/// ```
/// 
/// Output:
/// ```text
/// ✓ Step 2: Service instances created (6 items)
/// ```
pub fn print_step_complete(step: u8, description: &str, count: usize) {
    println!("✓ Step {}: {} ({} items)", step, description, count);
}

/// 서브 작업의 상태를 표시합니다
/// 
/// 들여쓰기된 트리 구조로 하위 작업의 진행 상황을 출력합니다.
/// 
/// # Arguments
/// 
/// * `name` - 서브 작업의 이름
/// * `status` - 현재 상태 또는 결과
/// 
/// # Examples
/// 
/// ```rust,ignore
/// use crate::utils::display_terminal::print_sub_task;
/// 
/// print_sub_task("RecipeRepository", "✓ Registered");
/// print_sub_task("recipes", "8/8 saved");
/// ```
/// 
/// Output:
/// ```text
///    ├─ RecipeRepository: ✓ Registered
///    ├─ recipes: 8/8 saved
/// ```
pub fn print_sub_task(name: &str, status: &str) {
    println!("   ├─ {}: {}", name, status);
}

/// 최종 완료 요약을 출력합니다
/// 
/// 서비스 초기화 완료 후 전체 등록된 컴포넌트의 요약 정보를 
/// 시각적으로 강조된 형태로 출력합니다.
/// 
/// # Arguments
/// 
/// * `repos` - 등록된 리포지토리 수
/// * `services` - 등록된 서비스 수
/// 
/// # Examples
/// 
/// ```rust,ignore
/// use crate::utils::display_terminal::print_final_summary;
/// 
/// print_final_summary(3, 5);
/// ```
/// 
/// Output:
/// ```text
/// ╔══════════════════════════════════════════════════╗
/// ║           🎉 SERVICE REGISTRY INITIALIZED        ║
/// ╚══════════════════════════════════════════════════╝
///    📦 Repositories: 3
///    🔧 Services: 5
///    🚀 Total Components: 8
/// ```
pub fn print_final_summary(repos: usize, services: usize) {
    let total = repos + services;
    println!();
    print_boxed_title("🎉 SERVICE REGISTRY INITIALIZED");
    println!("   📦 Repositories: {}", repos);
    println!("   🔧 Services: {}", services);
    println!("   🚀 Total Components: {}", total);
    println!();
}

/// 시드 실행 결과를 출력합니다
///
/// 건너뛴 경우 한 줄만, 적재한 경우 컬렉션별 저장 건수를 출력합니다.
///
/// Output:
/// ```text
/// → Step 3: Seeding demo data 2026-10-01-catalog-v1
///    ├─ roles: 2/2 saved
///    ├─ recipes: 8/8 saved
/// ✓ Step 3: Demo data ready (23 items)
/// ```
pub fn print_seed_report(report: &SeedReport) {
    if report.skipped {
        print_sub_task("Demo data", &format!("already at {}", report.version));
        return;
    }

    print_step_start(3, &format!("Seeding demo data {}", report.version));
    for (name, summary) in &report.batches {
        print_sub_task(name, &format!("{}/{} saved", summary.success, summary.total));
    }
    print_step_complete(3, "Demo data ready", report.total_saved());
}

/// 카탈로그 요약 정보
///
/// 바이너리가 서비스에서 모아 [`print_catalog_summary`] 로 넘깁니다.
#[derive(Debug, Default)]
pub struct CatalogSummary {
    pub users: usize,
    pub categories: Vec<(String, usize)>,
    pub top_recipes: Vec<(String, u8)>,
    pub latest_posts: Vec<(String, usize)>,
    pub tags: Vec<String>,
}

/// 카탈로그 요약을 출력합니다
///
/// Output:
/// ```text
/// ╔══════════════════════════════════════════════════╗
/// ║               📚 CATALOG SUMMARY                 ║
/// ╚══════════════════════════════════════════════════╝
///    👤 Users: 3
///    📂 Categories
///    ├─ Breakfast: 1
///    ⭐ Top rated
///    ├─ Caramel Flan: ★★★★★
///    📝 Latest posts
///    ├─ Roasting a Chicken for Beginners: 1 min read
///    🏷️ Tags: breakfast, dessert, healthy
/// ```
pub fn print_catalog_summary(summary: &CatalogSummary) {
    println!();
    print_boxed_title("📚 CATALOG SUMMARY");
    println!("   👤 Users: {}", summary.users);

    println!("   📂 Categories");
    for (name, count) in &summary.categories {
        print_sub_task(name, &count.to_string());
    }

    println!("   ⭐ Top rated");
    for (name, stars) in &summary.top_recipes {
        print_sub_task(name, &"★".repeat(usize::from(*stars)));
    }

    println!("   📝 Latest posts");
    for (title, minutes) in &summary.latest_posts {
        print_sub_task(title, &format!("{} min read", minutes));
    }

    println!("   🏷️ Tags: {}", summary.tags.join(", "));
    println!();
}
