//! スキャンフロー
//!
//! - 手入力: 空でないことだけを検証
//! - カメラ: 外部デコーダにフレーム解析を任せ、結果をイベントストリームとして受け取る
//!
//! `ScanSession` は開始・停止のライフサイクルを持ち、最初の一致で終了する。
//! どの経路で終わっても（停止・一致・破棄）デコーダの `stop` が必ず呼ばれる。

use std::sync::{Arc, Mutex};

use futures::channel::{mpsc, oneshot};
use futures::StreamExt;
use thiserror::Error;

use crate::error::ValidationError;

/// 商品照会の擬似待ち時間
pub const LOOKUP_DELAY_MS: u32 = 2000;

/// プロフィール保存の擬似待ち時間
pub const PROFILE_SAVE_DELAY_MS: u32 = 1000;

/// スキャン方法
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanMethod {
    Camera,
    Manual,
    Upload,
}

impl ScanMethod {
    pub const ALL: [ScanMethod; 3] = [ScanMethod::Camera, ScanMethod::Manual, ScanMethod::Upload];

    pub fn title(&self) -> &'static str {
        match self {
            ScanMethod::Camera => "Scan Barcode",
            ScanMethod::Manual => "Manual Input",
            ScanMethod::Upload => "Upload Label",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            ScanMethod::Camera => "Use your camera to scan product barcodes",
            ScanMethod::Manual => "Enter barcode number manually",
            ScanMethod::Upload => "Upload product label image (Coming Soon)",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            ScanMethod::Camera => "📷",
            ScanMethod::Manual => "⌨️",
            ScanMethod::Upload => "📤",
        }
    }

    /// ラベル画像アップロードは未提供
    pub fn is_available(&self) -> bool {
        !matches!(self, ScanMethod::Upload)
    }
}

/// 手入力バーコードの検証（前後の空白は除去）
pub fn validate_barcode(input: &str) -> Result<String, ValidationError> {
    let barcode = input.trim();
    if barcode.is_empty() {
        return Err(ValidationError::EmptyBarcode);
    }
    Ok(barcode.to_string())
}

/// カメラ取得失敗の分類
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CameraError {
    #[error("Camera permission was denied. Please grant permission in your browser settings.")]
    PermissionDenied,

    #[error("No camera was found on this device.")]
    NoCamera,

    #[error("The camera is already in use by another application or is malfunctioning.")]
    Busy,

    #[error("Unable to access camera.")]
    Other(String),
}

impl CameraError {
    /// DOMException名から分類
    pub fn from_dom_name(name: &str) -> Self {
        match name {
            "NotAllowedError" | "PermissionDeniedError" => CameraError::PermissionDenied,
            "NotFoundError" | "DevicesNotFoundError" | "OverconstrainedError" => {
                CameraError::NoCamera
            }
            "NotReadableError" | "TrackStartError" | "AbortError" => CameraError::Busy,
            other => CameraError::Other(other.to_string()),
        }
    }
}

/// デコーダからのイベント
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeEvent {
    /// バーコードを読み取った
    Matched(String),
    /// このフレームでは見つからなかった（エラー名）
    Miss(String),
}

/// デコーダ側がイベントを送る口
#[derive(Debug, Clone)]
pub struct DecodeSender(mpsc::UnboundedSender<DecodeEvent>);

impl DecodeSender {
    pub fn send(&self, event: DecodeEvent) {
        // 受信側が閉じた後のイベントは捨てる
        let _ = self.0.unbounded_send(event);
    }

    pub fn matched(&self, text: impl Into<String>) {
        self.send(DecodeEvent::Matched(text.into()));
    }

    pub fn miss(&self, name: impl Into<String>) {
        self.send(DecodeEvent::Miss(name.into()));
    }

    pub fn is_closed(&self) -> bool {
        self.0.is_closed()
    }
}

/// 外部バーコードデコーダの契約
///
/// `start` でカメラを取得してフレーム解析を始め、結果を `events` に送る。
/// `stop` はカメラストリームを解放する。複数回呼ばれても安全であること。
#[allow(async_fn_in_trait)]
pub trait BarcodeDecoder {
    async fn start(&mut self, events: DecodeSender) -> Result<(), CameraError>;

    fn stop(&mut self);
}

/// セッション状態
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Scanning,
    Matched,
    Stopped,
}

/// カメラスキャン1回分
pub struct ScanSession<D: BarcodeDecoder> {
    decoder: D,
    events: mpsc::UnboundedReceiver<DecodeEvent>,
    state: SessionState,
}

impl<D: BarcodeDecoder> ScanSession<D> {
    /// デコーダを起動してセッションを開始
    pub async fn start(mut decoder: D) -> Result<Self, CameraError> {
        let (tx, rx) = mpsc::unbounded();
        if let Err(e) = decoder.start(DecodeSender(tx)).await {
            tracing::warn!(error = %e, "camera start failed");
            decoder.stop();
            return Err(e);
        }
        tracing::debug!("scan session started");
        Ok(Self {
            decoder,
            events: rx,
            state: SessionState::Scanning,
        })
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// 最初の一致まで待つ
    ///
    /// 一致したらデコーダを止めてバーコードを返す。停止済み、または
    /// デコーダ側が送信口を閉じた場合は `None`。
    pub async fn next_match(&mut self) -> Option<String> {
        if self.state != SessionState::Scanning {
            return None;
        }
        while let Some(event) = self.events.next().await {
            match event {
                DecodeEvent::Matched(text) if !text.trim().is_empty() => {
                    self.release(SessionState::Matched);
                    tracing::info!(barcode = %text, "barcode matched");
                    return Some(text);
                }
                DecodeEvent::Matched(_) => {}
                DecodeEvent::Miss(name) => {
                    tracing::trace!(%name, "no barcode in frame");
                }
            }
        }
        self.release(SessionState::Stopped);
        None
    }

    /// 明示的な停止
    pub fn stop(&mut self) {
        if self.state == SessionState::Scanning {
            self.release(SessionState::Stopped);
            tracing::debug!("scan session stopped");
        }
    }

    fn release(&mut self, next: SessionState) {
        if self.state == SessionState::Scanning {
            self.decoder.stop();
            self.events.close();
        }
        self.state = next;
    }
}

impl<D: BarcodeDecoder> Drop for ScanSession<D> {
    fn drop(&mut self) {
        self.stop();
    }
}

/// 実行中セッションの取り消し口
///
/// UIの停止ボタン・画面破棄から、非同期タスク側のセッションを止めるために使う。
/// 新しく `arm` すると前回分は取り消される。
#[derive(Debug, Clone, Default)]
pub struct CancelHandle {
    slot: Arc<Mutex<Option<oneshot::Sender<()>>>>,
}

impl CancelHandle {
    pub fn new() -> Self {
        Self::default()
    }

    /// 取り消し通知を受け取る口を作る
    pub fn arm(&self) -> oneshot::Receiver<()> {
        let (tx, rx) = oneshot::channel();
        if let Ok(mut slot) = self.slot.lock() {
            if let Some(previous) = slot.replace(tx) {
                let _ = previous.send(());
            }
        }
        rx
    }

    /// 取り消しを通知（未armなら何もしない）
    pub fn fire(&self) {
        if let Ok(mut slot) = self.slot.lock() {
            if let Some(tx) = slot.take() {
                let _ = tx.send(());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// 送信予定のイベントと停止回数を記録するデコーダ
    struct FakeDecoder {
        script: Vec<DecodeEvent>,
        fail_with: Option<CameraError>,
        keep_sender: Rc<RefCell<Option<DecodeSender>>>,
        stops: Rc<RefCell<u32>>,
    }

    impl FakeDecoder {
        fn new(script: Vec<DecodeEvent>) -> (Self, Rc<RefCell<u32>>) {
            let stops = Rc::new(RefCell::new(0));
            let decoder = Self {
                script,
                fail_with: None,
                keep_sender: Rc::new(RefCell::new(None)),
                stops: stops.clone(),
            };
            (decoder, stops)
        }
    }

    impl BarcodeDecoder for FakeDecoder {
        async fn start(&mut self, events: DecodeSender) -> Result<(), CameraError> {
            if let Some(e) = self.fail_with.clone() {
                return Err(e);
            }
            for event in self.script.drain(..) {
                events.send(event);
            }
            *self.keep_sender.borrow_mut() = Some(events);
            Ok(())
        }

        fn stop(&mut self) {
            *self.stops.borrow_mut() += 1;
            self.keep_sender.borrow_mut().take();
        }
    }

    #[test]
    fn test_validate_barcode() {
        assert_eq!(validate_barcode(" 0123456789012 ").unwrap(), "0123456789012");
        assert_eq!(validate_barcode(""), Err(ValidationError::EmptyBarcode));
        assert_eq!(validate_barcode(" \t\n"), Err(ValidationError::EmptyBarcode));
    }

    #[test]
    fn test_camera_error_classification() {
        assert_eq!(CameraError::from_dom_name("NotAllowedError"), CameraError::PermissionDenied);
        assert_eq!(CameraError::from_dom_name("NotFoundError"), CameraError::NoCamera);
        assert_eq!(CameraError::from_dom_name("NotReadableError"), CameraError::Busy);
        assert_eq!(
            CameraError::from_dom_name("SecurityError"),
            CameraError::Other("SecurityError".into())
        );
        assert_eq!(CameraError::Other("x".into()).to_string(), "Unable to access camera.");
    }

    #[test]
    fn test_misses_ignored_until_match() {
        let (decoder, stops) = FakeDecoder::new(vec![
            DecodeEvent::Miss("NotFoundException".into()),
            DecodeEvent::Miss("ChecksumException".into()),
            DecodeEvent::Matched("4006381333931".into()),
            DecodeEvent::Matched("9999999999999".into()),
        ]);
        block_on(async {
            let mut session = ScanSession::start(decoder).await.unwrap();
            assert_eq!(session.next_match().await.as_deref(), Some("4006381333931"));
            assert_eq!(session.state(), SessionState::Matched);
            assert_eq!(*stops.borrow(), 1);

            // 一致は1回だけ
            assert_eq!(session.next_match().await, None);
        });
        assert_eq!(*stops.borrow(), 1);
    }

    #[test]
    fn test_explicit_stop_releases_once() {
        let (decoder, stops) = FakeDecoder::new(vec![]);
        block_on(async {
            let mut session = ScanSession::start(decoder).await.unwrap();
            session.stop();
            session.stop();
            assert_eq!(session.state(), SessionState::Stopped);
            assert_eq!(session.next_match().await, None);
        });
        assert_eq!(*stops.borrow(), 1);
    }

    #[test]
    fn test_drop_releases_stream() {
        let (decoder, stops) = FakeDecoder::new(vec![DecodeEvent::Miss("NotFoundException".into())]);
        let session = block_on(ScanSession::start(decoder)).unwrap();
        assert_eq!(*stops.borrow(), 0);
        drop(session);
        assert_eq!(*stops.borrow(), 1);
    }

    #[test]
    fn test_start_failure_releases_and_reports() {
        let (mut decoder, stops) = FakeDecoder::new(vec![]);
        decoder.fail_with = Some(CameraError::PermissionDenied);
        let result = block_on(ScanSession::start(decoder));
        assert!(matches!(result, Err(CameraError::PermissionDenied)));
        assert_eq!(*stops.borrow(), 1);
    }

    #[test]
    fn test_sender_closed_after_stop() {
        let (decoder, _stops) = FakeDecoder::new(vec![]);
        let keep = decoder.keep_sender.clone();
        let mut session = block_on(ScanSession::start(decoder)).unwrap();
        let sender = keep.borrow().clone().expect("sender kept");
        assert!(!sender.is_closed());
        session.stop();
        assert!(sender.is_closed());
    }

    #[test]
    fn test_cancel_handle_fire() {
        let cancel = CancelHandle::new();
        let mut rx = cancel.arm();
        assert_eq!(rx.try_recv(), Ok(None));
        cancel.fire();
        assert_eq!(rx.try_recv(), Ok(Some(())));
        // 二重通知は無害
        cancel.fire();
    }

    #[test]
    fn test_cancel_handle_rearm_cancels_previous() {
        let cancel = CancelHandle::new();
        let mut first = cancel.arm();
        let mut second = cancel.arm();
        assert_eq!(first.try_recv(), Ok(Some(())));
        assert_eq!(second.try_recv(), Ok(None));
    }

    #[test]
    fn test_cancel_stops_waiting_session() {
        use futures::future::{self, Either};

        let (decoder, stops) = FakeDecoder::new(vec![DecodeEvent::Miss("NotFoundException".into())]);
        let cancel = CancelHandle::new();
        let rx = cancel.arm();
        cancel.fire();
        block_on(async {
            let mut session = ScanSession::start(decoder).await.unwrap();
            let matched = match future::select(Box::pin(session.next_match()), rx).await {
                Either::Left((barcode, _)) => barcode,
                Either::Right(_) => None,
            };
            assert_eq!(matched, None);
        });
        assert_eq!(*stops.borrow(), 1);
    }
}
