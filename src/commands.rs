//! サブコマンドの処理
//!
//! 出力先は引数で受け取る（`main` では標準出力）。待ち時間は設定値に従う。

use crate::config::Config;
use crate::error::Result;
use crate::render;
use chrono::Utc;
use dialoguer::{Input, MultiSelect, Select};
use foodscan_common::{
    validate_barcode, AppStore, Choice, DietLogEntry, DietaryPreference, HealthGoal,
    KeyValueStore, MockCatalog, Profile, ProfileForm, ResultsView, ALLERGIES,
};
use indicatif::{ProgressBar, ProgressStyle};
use std::io::Write;
use std::path::Path;
use std::time::Duration;

/// コマンド実行に必要な状態
pub struct App<S: KeyValueStore> {
    pub config: Config,
    pub store: AppStore<S>,
}

impl<S: KeyValueStore> App<S> {
    pub fn new(config: Config, backend: S) -> Self {
        Self {
            config,
            store: AppStore::new(backend),
        }
    }

    /// 結果表示用の状態（壊れた保存値は警告して無視）
    fn results_view(&self) -> ResultsView {
        let profile = self.store.load_profile().unwrap_or_else(|e| {
            tracing::warn!(error = %e, "saved profile ignored");
            None
        });
        let barcode = self.store.load_barcode().unwrap_or_else(|e| {
            tracing::warn!(error = %e, "saved barcode ignored");
            None
        });
        ResultsView::build(profile, barcode, &MockCatalog)
    }
}

async fn wait_with_spinner(ms: u64, message: &'static str) {
    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("{spinner:.green} {msg}") {
        pb.set_style(style);
    }
    pb.set_message(message);
    pb.enable_steady_tick(Duration::from_millis(100));
    tokio::time::sleep(Duration::from_millis(ms)).await;
    pb.finish_and_clear();
}

/// 引数からフォームを組み立てる
pub fn form_from_args(
    name: String,
    allergies: Vec<String>,
    health_goal: Option<HealthGoal>,
    dietary_preference: Option<DietaryPreference>,
) -> ProfileForm {
    let mut form = ProfileForm {
        name,
        health_goal,
        dietary_preference,
        ..Default::default()
    };
    for id in allergies {
        if !form.has_allergy(&id) {
            form.toggle_allergy(&id);
        }
    }
    form
}

/// 対話入力の初期値に引数を反映（指定があった項目だけ上書き）
pub fn seed_form(
    mut form: ProfileForm,
    allergies: Vec<String>,
    health_goal: Option<HealthGoal>,
    dietary_preference: Option<DietaryPreference>,
) -> ProfileForm {
    if !allergies.is_empty() {
        form.allergies = form_from_args(String::new(), allergies, None, None).allergies;
    }
    if health_goal.is_some() {
        form.health_goal = health_goal;
    }
    if dietary_preference.is_some() {
        form.dietary_preference = dietary_preference;
    }
    form
}

fn select_choice<T: Choice + PartialEq>(prompt: &str, current: Option<T>) -> Result<Option<T>> {
    let mut items = vec!["Not set"];
    items.extend(T::ALL.iter().map(|c| c.label()));
    let default = current
        .and_then(|c| T::ALL.iter().position(|x| *x == c))
        .map_or(0, |i| i + 1);

    let index = Select::new()
        .with_prompt(prompt)
        .items(&items)
        .default(default)
        .interact()?;
    Ok(index.checked_sub(1).map(|i| T::ALL[i]))
}

/// 対話入力（既存プロフィールを初期値にする）
pub fn prompt_profile(initial: ProfileForm) -> Result<ProfileForm> {
    let name: String = Input::new()
        .with_prompt("Full name")
        .with_initial_text(initial.name.clone())
        .allow_empty(true)
        .interact_text()?;

    let labels: Vec<String> = ALLERGIES
        .iter()
        .map(|a| format!("{} {}", a.icon, a.label))
        .collect();
    let checked: Vec<bool> = ALLERGIES.iter().map(|a| initial.has_allergy(a.id)).collect();
    let picked = MultiSelect::new()
        .with_prompt("Allergies & restrictions (space to toggle)")
        .items(&labels)
        .defaults(&checked)
        .interact()?;

    let health_goal = select_choice("Health goal", initial.health_goal)?;
    let dietary_preference = select_choice("Dietary preference", initial.dietary_preference)?;

    Ok(ProfileForm {
        name,
        allergies: picked.into_iter().map(|i| ALLERGIES[i].id.to_string()).collect(),
        health_goal,
        dietary_preference,
    })
}

/// 現在のフォーム初期値（保存済みがあればそれ）
pub fn current_form<S: KeyValueStore>(app: &App<S>) -> ProfileForm {
    match app.store.load_profile() {
        Ok(Some(profile)) => ProfileForm::from_profile(&profile),
        Ok(None) => ProfileForm::default(),
        Err(e) => {
            tracing::warn!(error = %e, "saved profile ignored");
            ProfileForm::default()
        }
    }
}

pub async fn profile_set<S: KeyValueStore, W: Write>(
    app: &App<S>,
    form: ProfileForm,
    out: &mut W,
) -> Result<Profile> {
    form.validate()?;
    wait_with_spinner(app.config.profile_save_delay_ms, "Saving profile...").await;
    let profile = app.store.save_profile(&form, Utc::now())?;

    writeln!(out, "✔ Profile saved successfully!")?;
    write!(out, "{}", render::render_profile(&profile))?;
    writeln!(out, "\nContinue to scanning: foodscan scan <BARCODE>")?;
    Ok(profile)
}

pub fn profile_show<S: KeyValueStore, W: Write>(app: &App<S>, out: &mut W) -> Result<()> {
    match app.store.load_profile()? {
        Some(profile) => write!(out, "{}", render::render_profile(&profile))?,
        None => writeln!(out, "No profile yet. Create one with: foodscan profile set")?,
    }
    Ok(())
}

/// 手入力スキャン（空白のみは受け付けない）
pub async fn scan<S: KeyValueStore, W: Write>(
    app: &App<S>,
    input: &str,
    out: &mut W,
) -> Result<String> {
    let barcode = validate_barcode(input)?;
    wait_with_spinner(app.config.lookup_delay_ms, "Analyzing Product...").await;
    app.store.save_barcode(&barcode)?;

    writeln!(out, "✔ Barcode saved: {}", barcode)?;
    writeln!(out, "View the analysis with: foodscan results")?;
    Ok(barcode)
}

pub fn results<S: KeyValueStore, W: Write>(app: &App<S>, out: &mut W) -> Result<()> {
    write!(out, "{}", render::render_results(&app.results_view()))?;
    Ok(())
}

pub fn log_save<S: KeyValueStore, W: Write>(app: &App<S>, out: &mut W) -> Result<DietLogEntry> {
    let view = app.results_view();
    let entry = app.store.append_diet_log(&view.product, Utc::now())?;
    writeln!(out, "✔ Product saved to your diet log!")?;
    Ok(entry)
}

pub fn log_list<S: KeyValueStore, W: Write>(app: &App<S>, out: &mut W) -> Result<()> {
    let entries = app.store.load_diet_log()?;
    write!(out, "{}", render::render_log(&entries))?;
    Ok(())
}

pub fn config_show<W: Write>(config: &Config, store_path: &Path, out: &mut W) -> Result<()> {
    writeln!(out, "Settings:")?;
    writeln!(out, "  Store file:         {}", store_path.display())?;
    writeln!(out, "  Lookup delay:       {} ms", config.lookup_delay_ms)?;
    writeln!(out, "  Profile save delay: {} ms", config.profile_save_delay_ms)?;
    Ok(())
}
