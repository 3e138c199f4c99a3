use super::*;

pub fn accepts_duration(duration_ms: f64) -> bool {
    duration_ms.is_finite() && duration_ms >= 0.0
}

pub async fn animate_opacity(
    _element: &HtmlElement,
    _from: f64,
    _to: f64,
    duration_ms: f64,
) -> Result<(), String> {
    if accepts_duration(duration_ms) {
        Ok(())
    } else {
        Err(format!("invalid animation duration: {duration_ms}"))
    }
}
