//! Global logging module for token_match
//!
//! Provides a process-wide logging service plus a per-thread override that
//! tests and embedding parsers use to capture events from a single parse.

pub mod codes;
pub mod config;
pub mod events;
pub mod macros;
pub mod service;

use std::cell::RefCell;
use std::sync::{Arc, OnceLock};

// Re-export main types
pub use codes::Code;
pub use events::{LogEvent, LogLevel};
pub use service::{ConsoleLogger, Logger, LoggingService, MemoryLogger, StructuredLogger};

// ============================================================================
// GLOBAL STATE
// ============================================================================

static GLOBAL_LOGGER: OnceLock<Arc<LoggingService>> = OnceLock::new();

thread_local! {
    static THREAD_LOGGER: RefCell<Option<Arc<dyn Logger>>> = RefCell::new(None);
}

// ============================================================================
// INITIALIZATION
// ============================================================================

/// Initialize global logging system
pub fn init_global_logging() -> Result<(), String> {
    config::validate_config().map_err(|e| format!("Configuration validation failed: {}", e))?;

    let logging_service = Arc::new(service::create_configured_service());

    GLOBAL_LOGGER
        .set(logging_service.clone())
        .map_err(|_| "Global logger already initialized")?;

    let event = LogEvent::success(
        codes::success::SYSTEM_INITIALIZATION_COMPLETED,
        "Global logging system initialized",
    );
    logging_service.log_event(event);

    Ok(())
}

/// Check if global logging is initialized
pub fn is_initialized() -> bool {
    GLOBAL_LOGGER.get().is_some()
}

/// Safe access to global logger
pub fn try_get_global_logger() -> Option<&'static LoggingService> {
    GLOBAL_LOGGER.get().map(|service| service.as_ref())
}

// ============================================================================
// THREAD OVERRIDE
// ============================================================================

/// Route every event logged on this thread to `logger` while `f` runs
pub fn with_thread_logger<F, R>(logger: Arc<dyn Logger>, f: F) -> R
where
    F: FnOnce() -> R,
{
    let _restore = RestoreThreadLogger {
        previous: THREAD_LOGGER.with(|slot| slot.borrow_mut().replace(logger)),
    };
    f()
}

/// Puts the outer override back when dropped, including during unwinding
struct RestoreThreadLogger {
    previous: Option<Arc<dyn Logger>>,
}

impl Drop for RestoreThreadLogger {
    fn drop(&mut self) {
        let previous = self.previous.take();
        THREAD_LOGGER.with(|slot| *slot.borrow_mut() = previous);
    }
}

fn has_thread_logger() -> bool {
    THREAD_LOGGER.with(|slot| slot.borrow().is_some())
}

// ============================================================================
// MACRO SUPPORT FUNCTIONS
// ============================================================================

/// Whether an event at `level` would reach any logger (used by macros)
pub fn is_enabled(level: LogLevel) -> bool {
    if has_thread_logger() {
        return true;
    }
    try_get_global_logger()
        .map(|logger| logger.should_log(level))
        .unwrap_or(false)
}

/// Deliver an event to the thread override or the global service
pub fn dispatch(event: LogEvent) {
    let delivered = THREAD_LOGGER.with(|slot| match slot.borrow().as_ref() {
        Some(logger) => {
            logger.log(&event);
            true
        }
        None => false,
    });

    if !delivered {
        if let Some(logger) = try_get_global_logger() {
            logger.log_event(event);
        }
    }
}

/// Attach `key => value` pairs to an event (used by macros)
pub fn with_context_pairs(mut event: LogEvent, context: Vec<(&str, String)>) -> LogEvent {
    for (key, value) in context {
        event = event.with_context(key, &value);
    }
    event
}
