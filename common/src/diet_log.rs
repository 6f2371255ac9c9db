//! 食事ログ
//!
//! 商品レコードにスキャン日時とIDを付けて追記する。件数の上限はない。

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::product::Product;

/// ログ1件
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DietLogEntry {
    #[serde(flatten)]
    pub product: Product,
    pub scanned_at: DateTime<Utc>,
    /// 追加時刻のエポックミリ秒（ログ内で単調増加）
    pub id: i64,
}

impl DietLogEntry {
    /// 既存ログの末尾に続くエントリを作成
    pub fn next(log: &[DietLogEntry], product: &Product, scanned_at: DateTime<Utc>) -> Self {
        let millis = scanned_at.timestamp_millis();
        let id = match log.iter().map(|e| e.id).max() {
            Some(last) if last >= millis => last + 1,
            _ => millis,
        };
        Self {
            product: product.clone(),
            scanned_at,
            id,
        }
    }
}
