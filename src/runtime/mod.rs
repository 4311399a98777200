// Module declarations
pub mod monitor;
pub mod ui_task;

// Re-exports for convenience
pub use monitor::ProgressMonitor;
pub use ui_task::UiExecutor;
