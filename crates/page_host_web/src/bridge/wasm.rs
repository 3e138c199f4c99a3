use super::*;
use js_sys::Promise;
use serde::Serialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;

#[derive(Serialize)]
struct Keyframe {
    opacity: f64,
}

#[derive(Serialize)]
struct Timing {
    duration: f64,
    easing: &'static str,
    fill: &'static str,
}

#[wasm_bindgen(inline_js = r#"
export function jsAnimate(element, keyframes, timing) {
  if (typeof element.animate !== 'function') {
    return Promise.resolve();
  }
  return element.animate(keyframes, timing).finished.then(() => undefined);
}
"#)]
extern "C" {
    #[wasm_bindgen(catch, js_name = jsAnimate)]
    fn js_animate(element: &HtmlElement, keyframes: JsValue, timing: JsValue)
        -> Result<Promise, JsValue>;
}

pub async fn animate_opacity(
    element: &HtmlElement,
    from: f64,
    to: f64,
    duration_ms: f64,
) -> Result<(), String> {
    let keyframes = serde_wasm_bindgen::to_value(&[
        Keyframe { opacity: from },
        Keyframe { opacity: to },
    ])
    .map_err(|e| e.to_string())?;
    let timing = serde_wasm_bindgen::to_value(&Timing {
        duration: duration_ms,
        easing: "ease",
        fill: "forwards",
    })
    .map_err(|e| e.to_string())?;
    let promise = js_animate(element, keyframes, timing)
        .map_err(|err| format!("animation start failed: {err:?}"))?;
    JsFuture::from(promise)
        .await
        .map(|_| ())
        .map_err(|err| format!("animation interrupted: {err:?}"))
}
