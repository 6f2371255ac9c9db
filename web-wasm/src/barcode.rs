//! カメラバーコード読み取り（ZXing JSブリッジ）

use foodscan_common::{BarcodeDecoder, CameraError, DecodeSender};
use wasm_bindgen::prelude::*;
use web_sys::HtmlVideoElement;

#[wasm_bindgen(module = "/js/barcode-reader.js")]
extern "C" {
    type BarcodeReader;

    #[wasm_bindgen(constructor)]
    fn new() -> BarcodeReader;

    #[wasm_bindgen(method, catch)]
    async fn start(
        this: &BarcodeReader,
        video: &HtmlVideoElement,
        on_result: &js_sys::Function,
        on_error: &js_sys::Function,
    ) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(method)]
    fn stop(this: &BarcodeReader);
}

/// 例外オブジェクトの `name`（DOMException名）
fn error_name(error: &JsValue) -> String {
    js_sys::Reflect::get(error, &JsValue::from_str("name"))
        .ok()
        .and_then(|name| name.as_string())
        .unwrap_or_else(|| "Error".to_string())
}

type Callback = Closure<dyn FnMut(String)>;

/// `<video>` 要素に紐づくデコーダ
pub struct ZxingDecoder {
    video: HtmlVideoElement,
    reader: BarcodeReader,
    callbacks: Option<(Callback, Callback)>,
}

impl ZxingDecoder {
    pub fn new(video: HtmlVideoElement) -> Self {
        Self {
            video,
            reader: BarcodeReader::new(),
            callbacks: None,
        }
    }
}

impl BarcodeDecoder for ZxingDecoder {
    async fn start(&mut self, events: DecodeSender) -> Result<(), CameraError> {
        let on_result = {
            let events = events.clone();
            Closure::wrap(Box::new(move |text: String| events.matched(text)) as Box<dyn FnMut(String)>)
        };
        let on_error = Closure::wrap(Box::new(move |name: String| {
            events.miss(name);
        }) as Box<dyn FnMut(String)>);

        let result = self
            .reader
            .start(
                &self.video,
                on_result.as_ref().unchecked_ref(),
                on_error.as_ref().unchecked_ref(),
            )
            .await;
        self.callbacks = Some((on_result, on_error));

        result.map(|_| ()).map_err(|e| {
            let name = error_name(&e);
            gloo::console::error!(format!("Camera initialization error: {}", name));
            CameraError::from_dom_name(&name)
        })
    }

    fn stop(&mut self) {
        // JS側のコールバック参照を外してからクロージャを破棄する
        self.reader.stop();
        self.callbacks = None;
    }
}
