//! ライト/ダークテーマ

use foodscan_common::{keys, KeyValueStore, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// 保存値を読む（未保存・不明値はライト）
    pub fn load<S: KeyValueStore>(store: &S) -> Result<Self> {
        Ok(match store.get_item(keys::THEME)?.as_deref() {
            Some("dark") => Theme::Dark,
            _ => Theme::Light,
        })
    }

    pub fn save<S: KeyValueStore>(&self, store: &S) -> Result<()> {
        store.set_item(keys::THEME, self.as_str())
    }

    /// ルート要素の `dark` クラスに反映
    pub fn apply(&self) {
        let root = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element());
        if let Some(root) = root {
            let _ = root
                .class_list()
                .toggle_with_force("dark", *self == Theme::Dark);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use foodscan_common::MemoryStore;

    #[test]
    fn test_default_light() {
        let store = MemoryStore::new();
        assert_eq!(Theme::load(&store).unwrap(), Theme::Light);
    }

    #[test]
    fn test_toggle_persists() {
        let store = MemoryStore::new();
        let theme = Theme::load(&store).unwrap().toggled();
        theme.save(&store).unwrap();
        assert_eq!(Theme::load(&store).unwrap(), Theme::Dark);
        assert_eq!(store.get_item(keys::THEME).unwrap().as_deref(), Some("dark"));
    }

    #[test]
    fn test_unknown_value_falls_back() {
        let store = MemoryStore::new();
        store.set_item(keys::THEME, "system").unwrap();
        assert_eq!(Theme::load(&store).unwrap(), Theme::Light);
    }
}
