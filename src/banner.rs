//! Shared banner (notification) store.
//!
//! One message and one severity, overwritten by every CRUD outcome. The store
//! is a cheap cloneable handle: the repository writes through it, the banner
//! line reads from it, the "clear" key resets it.

use std::sync::{Arc, Mutex, MutexGuard};

/// Severity of the current banner message.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Severity {
    #[default]
    Info,
    Success,
    Error,
}

impl Severity {
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Info => "Info",
            Severity::Success => "Success",
            Severity::Error => "Error",
        }
    }
}

/// Snapshot of the banner.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Banner {
    pub message: String,
    pub severity: Severity,
}

impl Banner {
    /// An empty message hides the banner.
    pub fn is_visible(&self) -> bool {
        !self.message.is_empty()
    }
}

#[derive(Clone, Debug, Default)]
pub struct BannerStore {
    inner: Arc<Mutex<Banner>>,
}

impl BannerStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overwrite message and severity. Last write wins.
    pub fn set_banner_data(&self, message: impl Into<String>, severity: Severity) {
        let message = message.into();
        tracing::debug!(severity = severity.as_str(), %message, "banner set");
        let mut banner = self.lock();
        banner.message = message;
        banner.severity = severity;
    }

    /// Reset to `("", Info)`.
    pub fn clear(&self) {
        self.set_banner_data("", Severity::Info);
    }

    pub fn snapshot(&self) -> Banner {
        self.lock().clone()
    }

    pub fn message(&self) -> String {
        self.lock().message.clone()
    }

    pub fn severity(&self) -> Severity {
        self.lock().severity
    }

    fn lock(&self) -> MutexGuard<'_, Banner> {
        // A writer cannot panic half-way through two field stores.
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
