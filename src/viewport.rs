use portfolio_core::DeviceClass;
use web_sys as web;

/// Classify the current window width; desktop when no window is available.
pub fn current_device_class() -> DeviceClass {
    web::window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|v| v.as_f64())
        .map(DeviceClass::from_width)
        .unwrap_or(DeviceClass::Desktop)
}
