//! プロフィール作成
//!
//! 名前（必須）・アレルギー・健康目標・食事スタイルを入力し、
//! 保存済みの内容があればそれで初期化する。

use foodscan_common::{
    Choice, DietaryPreference, HealthGoal, ProfileForm, ALLERGIES, PROFILE_SAVE_DELAY_MS,
};
use gloo::timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use crate::components::step_indicator::StepIndicator;
use crate::routes::Route;
use crate::storage::{app_store, now};
use crate::toast::use_toasts;

fn initial_form() -> ProfileForm {
    match app_store().load_profile() {
        Ok(Some(profile)) => ProfileForm::from_profile(&profile),
        Ok(None) => ProfileForm::default(),
        Err(e) => {
            gloo::console::warn!(format!("saved profile ignored: {}", e));
            ProfileForm::default()
        }
    }
}

/// 未選択（空ID）を先頭に置いた選択肢
fn choice_select<T, G, S>(placeholder: &'static str, get: G, set: S) -> impl IntoView
where
    T: Choice + PartialEq + Send + Sync,
    G: Fn() -> Option<T> + Copy + Send + Sync + 'static,
    S: Fn(Option<T>) + 'static,
{
    view! {
        <select
            class="input"
            on:change=move |ev| set(T::from_id(&event_target_value(&ev)))
        >
            <option value="" prop:selected=move || get().is_none()>{placeholder}</option>
            {T::ALL
                .iter()
                .copied()
                .map(|choice| {
                    view! {
                        <option value=choice.id() prop:selected=move || get() == Some(choice)>
                            {choice.label()}
                        </option>
                    }
                })
                .collect_view()}
        </select>
    }
}

#[component]
pub fn ProfilePage() -> impl IntoView {
    let toasts = use_toasts();
    let form = RwSignal::new(initial_form());
    let (saving, set_saving) = signal(false);

    let on_save = move |_| {
        let snapshot = form.get_untracked();
        if let Err(e) = snapshot.validate() {
            toasts.error(e.to_string());
            return;
        }
        set_saving.set(true);
        spawn_local(async move {
            TimeoutFuture::new(PROFILE_SAVE_DELAY_MS).await;
            match app_store().save_profile(&snapshot, now()) {
                Ok(_) => toasts.success("Profile saved successfully!"),
                Err(e) => toasts.error(e.to_string()),
            }
            set_saving.set(false);
        });
    };

    view! {
        <div class="page page-narrow">
            <header class="page-header">
                <h1>"Create Your Profile"</h1>
                <p class="text-muted">
                    "Tell us about your dietary needs so we can personalize your food insights"
                </p>
            </header>

            <div class="card form-card">
                <section class="form-section">
                    <h3>"👤 Basic Information"</h3>
                    <label class="label" for="profile-name">"Full Name *"</label>
                    <input
                        id="profile-name"
                        class="input"
                        type="text"
                        placeholder="Enter your name"
                        prop:value=move || form.with(|f| f.name.clone())
                        on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
                    />
                </section>

                <section class="form-section">
                    <h3>"⚠️ Allergies & Restrictions"</h3>
                    <p class="text-muted text-small">"Select all that apply"</p>
                    <div class="allergy-grid">
                        {ALLERGIES
                            .iter()
                            .map(|allergy| {
                                let id = allergy.id;
                                view! {
                                    <button
                                        type="button"
                                        class=move || {
                                            if form.with(|f| f.has_allergy(id)) {
                                                "allergy-chip selected"
                                            } else {
                                                "allergy-chip"
                                            }
                                        }
                                        on:click=move |_| form.update(|f| f.toggle_allergy(id))
                                    >
                                        <span>{allergy.icon}</span>
                                        <span>{allergy.label}</span>
                                    </button>
                                }
                            })
                            .collect_view()}
                    </div>
                </section>

                <section class="form-section">
                    <h3>"🎯 Health Goals"</h3>
                    {choice_select::<HealthGoal, _, _>(
                        "Select your primary health goal",
                        move || form.with(|f| f.health_goal),
                        move |goal| form.update(|f| f.health_goal = goal),
                    )}
                </section>

                <section class="form-section">
                    <h3>"🥗 Dietary Preference"</h3>
                    {choice_select::<DietaryPreference, _, _>(
                        "Select your dietary preference",
                        move || form.with(|f| f.dietary_preference),
                        move |pref| form.update(|f| f.dietary_preference = pref),
                    )}
                </section>

                <div class="button-row">
                    <button class="btn btn-primary" disabled=move || saving.get() on:click=on_save>
                        {move || if saving.get() { "Saving..." } else { "💾 Save Profile" }}
                    </button>
                    <Show when=move || form.with(|f| f.can_continue())>
                        <a href=Route::Scan.href() class="btn btn-secondary">
                            "Continue to Scanning →"
                        </a>
                    </Show>
                </div>
            </div>

            <StepIndicator current=1 />
        </div>
    }
}
