//! Ctrl+C handling for interactive prompts.
//!
//! An installed handler sets a flag that [`Prompter`](crate::prompt::Prompter)
//! checks before and after every attempt. A blocking read does not return on
//! SIGINT, so processes that must stop mid-read register an action that exits
//! with [`INTERRUPTED_EXIT_CODE`].

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::error::{EzConsoleError, Result};

/// Conventional exit status for a process ended by SIGINT.
pub const INTERRUPTED_EXIT_CODE: i32 = 130;

/// Shared shutdown flag, optionally driven by SIGINT.
///
/// Cloning shares the underlying flag.
#[derive(Clone, Debug, Default)]
pub struct SignalHandler {
    shutdown_flag: Arc<AtomicBool>,
}

impl SignalHandler {
    /// Creates a `SignalHandler` and registers it for SIGINT.
    ///
    /// # Errors
    ///
    /// Returns an error if a handler is already registered for this process.
    pub fn new() -> Result<Self> {
        Self::with_action(|| {})
    }

    /// Like [`new`](Self::new), but also runs `action` after setting the flag.
    pub fn with_action(mut action: impl FnMut() + Send + 'static) -> Result<Self> {
        let handler = Self::unregistered();
        let flag_clone = Arc::clone(&handler.shutdown_flag);

        ctrlc::set_handler(move || {
            flag_clone.store(true, Ordering::SeqCst);
            action();
        })
        .map_err(|e| EzConsoleError::SignalHandler(e.to_string()))?;

        tracing::debug!("SIGINT handler registered");
        Ok(handler)
    }

    /// A handler that is only triggered through [`request_shutdown`](Self::request_shutdown).
    pub fn unregistered() -> Self {
        Self::default()
    }

    /// Checks if a shutdown has been requested (non-blocking).
    pub fn is_shutdown_requested(&self) -> bool {
        self.shutdown_flag.load(Ordering::SeqCst)
    }

    pub fn request_shutdown(&self) {
        self.shutdown_flag.store(true, Ordering::SeqCst);
    }

    /// Clears the flag so the next prompt can run.
    pub fn reset(&self) {
        self.shutdown_flag.store(false, Ordering::SeqCst);
    }
}
