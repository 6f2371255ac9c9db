//! プロフィール → スキャン → 結果 → ログ の通しテスト
//!
//! ファイルストアを一時ディレクトリに置き、ブラウザと同じキー構成で保存されることを確認する

use foodscan::commands::{self, App};
use foodscan::config::Config;
use foodscan::store::FileStore;
use foodscan_common::{keys, DietaryPreference, HealthGoal, KeyValueStore};
use tempfile::tempdir;

fn app_at(path: &std::path::Path) -> App<FileStore> {
    let config = Config {
        lookup_delay_ms: 0,
        profile_save_delay_ms: 0,
        ..Default::default()
    };
    App::new(config, FileStore::open(path))
}

/// 一連の操作がファイルに残り、別プロセス相当のインスタンスから読める
#[tokio::test]
async fn test_full_flow_with_file_store() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("storage.json");
    let app = app_at(&path);
    let mut out = Vec::new();

    let form = commands::form_from_args(
        "Ada".into(),
        vec!["gluten".into()],
        Some(HealthGoal::WeightLoss),
        Some(DietaryPreference::Vegan),
    );
    commands::profile_set(&app, form, &mut out).await.unwrap();
    commands::scan(&app, "0123456789012", &mut out).await.unwrap();

    // 再オープンして結果表示
    let app = app_at(&path);
    let mut out = Vec::new();
    commands::results(&app, &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("Allergen Warning"));
    assert!(text.contains("allergic to: gluten"));
    assert!(text.contains("Weight Loss"));
    assert!(text.contains("Vegan"));

    let mut out = Vec::new();
    commands::log_save(&app, &mut out).unwrap();
    commands::log_save(&app, &mut out).unwrap();
    assert_eq!(app.store.load_diet_log().unwrap().len(), 2);

    // 保存形式はブラウザと同じ
    let backend = FileStore::open(&path);
    let profile: serde_json::Value =
        serde_json::from_str(&backend.get_item(keys::PROFILE).unwrap().unwrap()).unwrap();
    assert_eq!(profile["name"], "Ada");
    assert_eq!(profile["healthGoal"], "weight-loss");
    assert_eq!(profile["dietaryPreference"], "vegan");
    assert_eq!(
        backend.get_item(keys::BARCODE).unwrap().as_deref(),
        Some("0123456789012")
    );
    let log: serde_json::Value =
        serde_json::from_str(&backend.get_item(keys::DIET_LOG).unwrap().unwrap()).unwrap();
    assert_eq!(log.as_array().map(Vec::len), Some(2));
    assert!(log[0]["scannedAt"].is_string());
}

/// 再保存は上書き（1件のみ）
#[tokio::test]
async fn test_profile_overwrite() {
    let dir = tempdir().expect("Failed to create temp dir");
    let app = app_at(&dir.path().join("storage.json"));
    let mut out = Vec::new();

    let first = commands::form_from_args("Ada".into(), vec!["nuts".into()], None, None);
    commands::profile_set(&app, first, &mut out).await.unwrap();
    let second = commands::form_from_args("Grace".into(), vec![], None, None);
    commands::profile_set(&app, second, &mut out).await.unwrap();

    let profile = app.store.load_profile().unwrap().unwrap();
    assert_eq!(profile.name, "Grace");
    assert!(profile.allergies.is_empty());
}

/// プロフィールなしでも結果は表示でき、警告は出ない
#[test]
fn test_results_without_profile() {
    let dir = tempdir().expect("Failed to create temp dir");
    let app = app_at(&dir.path().join("storage.json"));
    let mut out = Vec::new();
    commands::results(&app, &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("Safe for You"));
    assert!(text.contains("Better Alternatives"));
}
