//! Component-tagged logging over the `log` facade.
//!
//! The embedding app decides the sink (a console logger in the browser);
//! this crate only tags records with the component they came from.

pub struct Logger;

impl Logger {
    pub fn debug_with_component(component: &str, message: &str) {
        log::debug!("[{}] {}", component, message);
    }

    pub fn info_with_component(component: &str, message: &str) {
        log::info!("[{}] {}", component, message);
    }

    pub fn warn_with_component(component: &str, message: &str) {
        log::warn!("[{}] {}", component, message);
    }

    pub fn error_with_component(component: &str, message: &str) {
        log::error!("[{}] {}", component, message);
    }
}
