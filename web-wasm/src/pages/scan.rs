//! 商品スキャン
//!
//! 方法を選んでからカメラ読み取りか手入力に進む。どちらの経路でも
//! バーコードを保存して結果画面へ遷移する。

use foodscan_common::{
    validate_barcode, CancelHandle, ScanMethod, ScanSession, LOOKUP_DELAY_MS,
};
use futures::channel::oneshot;
use futures::future::{self, Either};
use gloo::timers::future::TimeoutFuture;
use leptos::html::Video;
use leptos::prelude::*;
use leptos::task::spawn_local;
use web_sys::HtmlVideoElement;
use crate::barcode::ZxingDecoder;
use crate::components::{loading_overlay::LoadingOverlay, step_indicator::StepIndicator};
use crate::routes::{navigate, Route};
use crate::storage::app_store;
use crate::toast::{use_toasts, Toasts};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stage {
    Choose,
    Camera,
    Manual,
}

fn is_cancelled(cancelled: &mut oneshot::Receiver<()>) -> bool {
    !matches!(cancelled.try_recv(), Ok(None))
}

/// カメラ読み取りを開始し、最初の一致を `on_match` に渡す
///
/// `cancelled` に通知が届くとセッションを破棄してカメラを解放する。
/// 取り消し済みのセッションは起動失敗を報告しない。
fn run_camera<F>(
    video: HtmlVideoElement,
    mut cancelled: oneshot::Receiver<()>,
    toasts: Toasts,
    set_stage: WriteSignal<Stage>,
    on_match: F,
) where
    F: Fn(String) + 'static,
{
    spawn_local(async move {
        let started = ScanSession::start(ZxingDecoder::new(video)).await;

        // 起動待ちの間に取り消された
        if is_cancelled(&mut cancelled) {
            return;
        }
        let mut session = match started {
            Ok(session) => session,
            Err(e) => {
                toasts.error(e.to_string());
                set_stage.set(Stage::Choose);
                return;
            }
        };

        let barcode = match future::select(Box::pin(session.next_match()), cancelled).await {
            Either::Left((Some(barcode), _)) => barcode,
            Either::Left((None, _)) | Either::Right(_) => return,
        };
        drop(session);
        on_match(barcode);
    });
}

#[component]
pub fn ScanPage() -> impl IntoView {
    let toasts = use_toasts();
    let (stage, set_stage) = signal(Stage::Choose);
    let (barcode_input, set_barcode_input) = signal(String::new());
    let (is_loading, set_is_loading) = signal(false);
    let video_ref: NodeRef<Video> = NodeRef::new();
    let cancel = CancelHandle::new();

    // 照会（擬似待ち）→ 保存 → 結果画面
    let proceed = move |barcode: String| {
        set_is_loading.set(true);
        spawn_local(async move {
            TimeoutFuture::new(LOOKUP_DELAY_MS).await;
            match app_store().save_barcode(&barcode) {
                Ok(()) => navigate(Route::Results),
                Err(e) => {
                    toasts.error(e.to_string());
                    set_is_loading.set(false);
                }
            }
        });
    };

    let on_match = move |barcode: String| {
        toasts.success(format!("Barcode detected: {}", barcode));
        set_barcode_input.set(barcode.clone());
        set_stage.set(Stage::Manual);
        proceed(barcode);
    };

    Effect::new({
        let cancel = cancel.clone();
        move |_| {
            let video = video_ref.get();
            if stage.get() != Stage::Camera {
                cancel.fire();
                return;
            }
            if let Some(video) = video {
                run_camera(video, cancel.arm(), toasts, set_stage, on_match);
            }
        }
    });

    on_cleanup({
        let cancel = cancel.clone();
        move || cancel.fire()
    });

    let choose = move |method: ScanMethod| match method {
        ScanMethod::Camera => set_stage.set(Stage::Camera),
        ScanMethod::Manual => set_stage.set(Stage::Manual),
        ScanMethod::Upload => toasts.info("Image upload feature coming soon!"),
    };

    let submit_manual = move || {
        if is_loading.get_untracked() {
            return;
        }
        match validate_barcode(&barcode_input.get_untracked()) {
            Ok(barcode) => proceed(barcode),
            Err(e) => toasts.error(e.to_string()),
        }
    };

    view! {
        <div class="page page-narrow">
            <header class="page-header">
                <h1>"Scan Product"</h1>
                <p class="text-muted">"Choose how you'd like to analyze your food product"</p>
            </header>

            <Show when=move || stage.get() == Stage::Choose>
                <div class="grid grid-3">
                    {ScanMethod::ALL
                        .into_iter()
                        .map(|method| {
                            let class = if method.is_available() {
                                "card method-card"
                            } else {
                                "card method-card method-disabled"
                            };
                            view! {
                                <button type="button" class=class on:click=move |_| choose(method)>
                                    <div class="feature-icon">{method.icon()}</div>
                                    <h3>{method.title()}</h3>
                                    <p class="text-muted text-small">{method.description()}</p>
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
            </Show>

            <Show when=move || stage.get() == Stage::Camera>
                <div class="card camera-card">
                    <h3>"📷 Camera Scanner"</h3>
                    <div class="camera-frame">
                        <video node_ref=video_ref class="camera-video" autoplay=true muted=true playsinline=true />
                        <div class="scan-target" />
                    </div>
                    <p class="text-muted text-small">"Position the barcode within the frame"</p>
                    <button class="btn btn-secondary" on:click=move |_| set_stage.set(Stage::Choose)>
                        "Stop Scanning"
                    </button>
                </div>
            </Show>

            <Show when=move || stage.get() == Stage::Manual>
                <div class="card">
                    <h3>"⌨️ Enter Barcode"</h3>
                    <input
                        class="input"
                        type="text"
                        inputmode="numeric"
                        placeholder="e.g. 1234567890123"
                        prop:value=move || barcode_input.get()
                        on:input=move |ev| set_barcode_input.set(event_target_value(&ev))
                        on:keydown=move |ev: web_sys::KeyboardEvent| {
                            if ev.key() == "Enter" {
                                submit_manual();
                            }
                        }
                    />
                    <div class="button-row">
                        <button
                            class="btn btn-secondary"
                            on:click=move |_| set_stage.set(Stage::Choose)
                        >
                            "Back"
                        </button>
                        <button
                            class="btn btn-primary"
                            disabled=move || barcode_input.with(|b| b.trim().is_empty()) || is_loading.get()
                            on:click=move |_| submit_manual()
                        >
                            "Analyze Product"
                        </button>
                    </div>
                </div>
            </Show>

            <Show when=move || is_loading.get()>
                <LoadingOverlay
                    title="Analyzing Product"
                    message="Fetching nutrition data and checking against your profile..."
                />
            </Show>

            <StepIndicator current=2 />
        </div>
    }
}
