//! 永続ストア
//!
//! 文字列キー・文字列値のストア（ブラウザのlocalStorage相当）を
//! `KeyValueStore` として抽象化し、その上に型付きの `AppStore` を載せる。
//! 保存値はスキーマで検証し、読めない値は `Error::CorruptRecord` として返す。

use std::cell::RefCell;
use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;

use crate::diet_log::DietLogEntry;
use crate::error::{Error, Result, ValidationError};
use crate::product::Product;
use crate::profile::{Profile, ProfileForm};

/// ストアのキー
pub mod keys {
    pub const PROFILE: &str = "foodScanProfile";
    pub const BARCODE: &str = "scannedBarcode";
    pub const DIET_LOG: &str = "dietLog";
    pub const THEME: &str = "theme";
}

/// キー・値ストア
pub trait KeyValueStore {
    fn get_item(&self, key: &str) -> Result<Option<String>>;

    fn set_item(&self, key: &str, value: &str) -> Result<()>;

    fn remove_item(&self, key: &str) -> Result<()>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for &T {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        (**self).get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        (**self).set_item(key, value)
    }

    fn remove_item(&self, key: &str) -> Result<()> {
        (**self).remove_item(key)
    }
}

/// メモリ上のストア（テスト用）
#[derive(Debug, Default)]
pub struct MemoryStore {
    items: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.borrow().is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        Ok(self.items.borrow().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        self.items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<()> {
        self.items.borrow_mut().remove(key);
        Ok(())
    }
}

/// 型付きアクセサ
#[derive(Debug, Clone, Default)]
pub struct AppStore<S> {
    backend: S,
}

impl<S: KeyValueStore> AppStore<S> {
    pub fn new(backend: S) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &S {
        &self.backend
    }

    fn load_json<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        match self.backend.get_item(key)? {
            Some(raw) => serde_json::from_str(&raw)
                .map(Some)
                .map_err(|source| Error::CorruptRecord {
                    key: key.to_string(),
                    source,
                }),
            None => Ok(None),
        }
    }

    /// 保存済みプロフィール（名前が空白のみの記録は不正として扱う）
    pub fn load_profile(&self) -> Result<Option<Profile>> {
        let profile: Option<Profile> = self.load_json(keys::PROFILE)?;
        match profile {
            Some(p) if p.name.trim().is_empty() => Err(Error::InvalidRecord {
                key: keys::PROFILE.to_string(),
                source: ValidationError::EmptyName,
            }),
            other => Ok(other),
        }
    }

    /// フォームを検証して保存（既存プロフィールは上書き）
    ///
    /// 検証エラー時は何も書き込まない。
    pub fn save_profile(&self, form: &ProfileForm, now: DateTime<Utc>) -> Result<Profile> {
        let profile = form.to_profile(now)?;
        let json = serde_json::to_string(&profile)?;
        self.backend.set_item(keys::PROFILE, &json)?;
        tracing::info!(name = %profile.name, allergies = profile.allergies.len(), "profile saved");
        Ok(profile)
    }

    /// 最後にスキャンしたバーコード（生の文字列で保存）
    pub fn load_barcode(&self) -> Result<Option<String>> {
        Ok(self
            .backend
            .get_item(keys::BARCODE)?
            .filter(|b| !b.is_empty()))
    }

    pub fn save_barcode(&self, barcode: &str) -> Result<()> {
        self.backend.set_item(keys::BARCODE, barcode)?;
        tracing::info!(barcode, "barcode stored");
        Ok(())
    }

    pub fn load_diet_log(&self) -> Result<Vec<DietLogEntry>> {
        Ok(self.load_json(keys::DIET_LOG)?.unwrap_or_default())
    }

    /// 商品をログに1件追記
    pub fn append_diet_log(&self, product: &Product, now: DateTime<Utc>) -> Result<DietLogEntry> {
        let mut log = self.load_diet_log()?;
        let entry = DietLogEntry::next(&log, product, now);
        log.push(entry.clone());
        let json = serde_json::to_string(&log)?;
        self.backend.set_item(keys::DIET_LOG, &json)?;
        tracing::info!(id = entry.id, total = log.len(), "diet log entry appended");
        Ok(entry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{DietaryPreference, HealthGoal};
    use crate::error::ValidationError;
    use crate::product::{MockCatalog, ProductCatalog};
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 5, 20, 12, 0, 0).unwrap()
    }

    fn form(name: &str, allergies: &[&str]) -> ProfileForm {
        ProfileForm {
            name: name.to_string(),
            allergies: allergies.iter().map(|s| s.to_string()).collect(),
            health_goal: Some(HealthGoal::Maintenance),
            dietary_preference: Some(DietaryPreference::Omnivore),
        }
    }

    #[test]
    fn test_empty_name_never_persists() {
        let store = AppStore::new(MemoryStore::new());
        let err = store.save_profile(&form("  ", &["nuts"]), now()).unwrap_err();
        assert!(matches!(err, Error::Validation(ValidationError::EmptyName)));
        assert!(store.backend().is_empty());
        assert!(store.load_profile().unwrap().is_none());
    }

    #[test]
    fn test_save_overwrites_previous_profile() {
        let store = AppStore::new(MemoryStore::new());
        store.save_profile(&form("First", &["nuts"]), now()).unwrap();
        store.save_profile(&form("Second", &["gluten", "soy"]), now()).unwrap();

        let loaded = store.load_profile().unwrap().expect("profile missing");
        assert_eq!(loaded.name, "Second");
        assert_eq!(loaded.allergies, vec!["gluten".to_string(), "soy".to_string()]);
        assert_eq!(loaded.health_goal, Some(HealthGoal::Maintenance));
        assert_eq!(loaded.dietary_preference, Some(DietaryPreference::Omnivore));
        assert_eq!(store.backend().len(), 1);
    }

    #[test]
    fn test_corrupt_profile_reported() {
        let backend = MemoryStore::new();
        backend.set_item(keys::PROFILE, "{\"allergies\": 3}").unwrap();
        let store = AppStore::new(backend);
        let err = store.load_profile().unwrap_err();
        assert!(matches!(err, Error::CorruptRecord { ref key, .. } if key == keys::PROFILE));
    }

    #[test]
    fn test_blank_name_profile_rejected_on_load() {
        let backend = MemoryStore::new();
        backend
            .set_item(
                keys::PROFILE,
                r#"{"name":"   ","allergies":["gluten"],"createdAt":"2025-01-01T00:00:00Z"}"#,
            )
            .unwrap();
        let store = AppStore::new(backend);
        let err = store.load_profile().unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidRecord { ref key, source: ValidationError::EmptyName } if key == keys::PROFILE
        ));
    }

    #[test]
    fn test_barcode_roundtrip_raw() {
        let store = AppStore::new(MemoryStore::new());
        assert_eq!(store.load_barcode().unwrap(), None);
        store.save_barcode("4006381333931").unwrap();
        assert_eq!(
            store.backend().get_item(keys::BARCODE).unwrap().as_deref(),
            Some("4006381333931")
        );
        assert_eq!(store.load_barcode().unwrap().as_deref(), Some("4006381333931"));
    }

    #[test]
    fn test_diet_log_grows_by_one() {
        let store = AppStore::new(MemoryStore::new());
        let product = MockCatalog.lookup("");
        for expected in 1..=3 {
            store.append_diet_log(&product, now()).unwrap();
            assert_eq!(store.load_diet_log().unwrap().len(), expected);
        }
        let ids: Vec<i64> = store.load_diet_log().unwrap().iter().map(|e| e.id).collect();
        assert!(ids.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_diet_log_accepts_browser_entries() {
        let backend = MemoryStore::new();
        let product = serde_json::to_value(MockCatalog.lookup("")).unwrap();
        let mut entry = product.as_object().unwrap().clone();
        entry.insert("scannedAt".into(), "2025-01-02T03:04:05.678Z".into());
        entry.insert("id".into(), 1735787045678i64.into());
        backend
            .set_item(keys::DIET_LOG, &serde_json::to_string(&vec![entry]).unwrap())
            .unwrap();

        let store = AppStore::new(&backend);
        let log = store.load_diet_log().unwrap();
        assert_eq!(log.len(), 1);
        assert_eq!(log[0].id, 1735787045678);
    }
}
