//! localStorage バックエンド

use chrono::{DateTime, Utc};
use foodscan_common::{AppStore, Error, KeyValueStore, Result};
use gloo::storage::{LocalStorage, Storage};
use wasm_bindgen::JsValue;

/// ブラウザのlocalStorage
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStore;

fn js_error(e: JsValue) -> Error {
    Error::Storage(format!("{:?}", e))
}

impl KeyValueStore for LocalStore {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        LocalStorage::raw().get_item(key).map_err(js_error)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        LocalStorage::raw().set_item(key, value).map_err(js_error)
    }

    fn remove_item(&self, key: &str) -> Result<()> {
        LocalStorage::raw().remove_item(key).map_err(js_error)
    }
}

/// 画面から使うストア
pub fn app_store() -> AppStore<LocalStore> {
    AppStore::new(LocalStore)
}

/// 現在時刻（JSの時計から取得）
pub fn now() -> DateTime<Utc> {
    DateTime::from_timestamp_millis(js_sys::Date::now() as i64).unwrap_or_default()
}

#[cfg(all(target_arch = "wasm32", test))]
mod wasm_tests {
    use super::*;
    use foodscan_common::{keys, MockCatalog, ProductCatalog};
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn wasm_local_store_roundtrip() {
        let store = LocalStore;
        store.set_item("foodscan-test", "value").expect("set failed");
        assert_eq!(store.get_item("foodscan-test").unwrap().as_deref(), Some("value"));
        store.remove_item("foodscan-test").expect("remove failed");
        assert_eq!(store.get_item("foodscan-test").unwrap(), None);
    }

    #[wasm_bindgen_test]
    fn wasm_diet_log_appends() {
        LocalStore.remove_item(keys::DIET_LOG).unwrap();
        let store = app_store();
        let product = MockCatalog.lookup("");
        store.append_diet_log(&product, now()).unwrap();
        store.append_diet_log(&product, now()).unwrap();
        assert_eq!(store.load_diet_log().unwrap().len(), 2);
        LocalStore.remove_item(keys::DIET_LOG).unwrap();
    }
}
