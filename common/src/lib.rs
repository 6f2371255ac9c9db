//! FoodScan Common Library
//!
//! CLIとWeb(WASM)で共有される型とユーティリティ

pub mod allergen;
pub mod catalog;
pub mod diet_log;
pub mod error;
pub mod nutrition;
pub mod product;
pub mod profile;
pub mod results;
pub mod scan;
pub mod storage;

pub use allergen::{has_allergen_overlap, matched_allergens};
pub use catalog::{Allergy, Choice, DietaryPreference, HealthGoal, ALLERGIES};
pub use diet_log::DietLogEntry;
pub use error::{Error, Result, ValidationError};
pub use nutrition::{Nutrient, NutrientLevel, NutrientRow, ScoreBand};
pub use product::{Alternative, MockCatalog, Nutrition, Product, ProductCatalog};
pub use profile::{Profile, ProfileForm};
pub use results::{AllergyBadge, ResultsView};
pub use scan::{
    validate_barcode, BarcodeDecoder, CameraError, CancelHandle, DecodeEvent, DecodeSender, ScanMethod,
    ScanSession, SessionState, LOOKUP_DELAY_MS, PROFILE_SAVE_DELAY_MS,
};
pub use storage::{keys, AppStore, KeyValueStore, MemoryStore};
