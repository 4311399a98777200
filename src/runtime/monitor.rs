use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use crate::core::error::MetadataError;

/// Cooperative cancellation/progress token threaded through every
/// potentially blocking catalog operation.
///
/// Cloning is cheap; all clones share the same cancellation flag, so a
/// caller can keep one handle and cancel a resolution running elsewhere.
#[derive(Debug, Clone)]
pub struct ProgressMonitor {
    cancelled: Arc<AtomicBool>,
    task: Arc<Mutex<String>>,
}

impl ProgressMonitor {
    #[must_use]
    pub fn new() -> Self {
        Self {
            cancelled: Arc::new(AtomicBool::new(false)),
            task: Arc::new(Mutex::new(String::new())),
        }
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }

    /// Poll point for blocking steps: surfaces `Cancelled` once signalled
    pub fn check_cancelled(&self) -> Result<(), MetadataError> {
        if self.is_cancelled() {
            Err(MetadataError::Cancelled)
        } else {
            Ok(())
        }
    }

    pub fn begin_task(&self, name: &str) {
        if let Ok(mut task) = self.task.lock() {
            name.clone_into(&mut task);
        }
    }

    #[must_use]
    pub fn current_task(&self) -> String {
        self.task.lock().map(|t| t.clone()).unwrap_or_default()
    }
}

impl Default for ProgressMonitor {
    fn default() -> Self {
        Self::new()
    }
}
