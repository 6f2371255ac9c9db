//! エラーケーステスト
//!
//! 検証エラー・壊れた保存ファイル・設定ファイルのエラーハンドリングを検証

use foodscan::commands::{self, App};
use foodscan::config::Config;
use foodscan::error::FoodScanError;
use foodscan::store::FileStore;
use foodscan_common::{Error, ValidationError};
use tempfile::tempdir;

/// 名前なしのプロフィールはファイルを作らない
#[tokio::test]
async fn test_empty_name_creates_no_file() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("storage.json");
    let app = App::new(Config { profile_save_delay_ms: 0, ..Default::default() }, FileStore::open(&path));

    let form = commands::form_from_args(String::new(), vec!["soy".into()], None, None);
    let result = commands::profile_set(&app, form, &mut Vec::new()).await;

    assert!(matches!(
        result,
        Err(FoodScanError::Common(Error::Validation(ValidationError::EmptyName)))
    ));
    assert!(!path.exists());
}

/// 壊れた保存ファイルは読み込みエラー
#[test]
fn test_broken_store_file() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("storage.json");
    std::fs::write(&path, "not json").unwrap();
    let app = App::new(Config::default(), FileStore::open(&path));

    let result = commands::log_list(&app, &mut Vec::new());
    assert!(matches!(result, Err(FoodScanError::Common(Error::Storage(_)))));
}

/// FoodScanErrorのDisplay実装確認
#[test]
fn test_error_display() {
    let errors = vec![
        FoodScanError::Config("home directory not found".to_string()),
        FoodScanError::Prompt("not a terminal".to_string()),
        FoodScanError::from(ValidationError::EmptyBarcode),
    ];

    for err in errors {
        let display = format!("{}", err);
        assert!(!display.is_empty(), "Error display should not be empty");
    }

    assert_eq!(
        FoodScanError::from(ValidationError::EmptyName).to_string(),
        "Please enter your name"
    );
}
