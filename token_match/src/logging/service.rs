//! Logging service implementation

use super::config;
use super::events::{LogEvent, LogLevel};
use std::sync::{Arc, Mutex, MutexGuard};

/// Simple logger trait
pub trait Logger: Send + Sync {
    fn log(&self, event: &LogEvent);
}

/// Main logging service with configuration awareness
pub struct LoggingService {
    logger: Arc<dyn Logger>,
    min_level: LogLevel,
}

impl LoggingService {
    /// Create new logging service with specified logger and minimum level
    pub fn new(logger: Arc<dyn Logger>, min_level: LogLevel) -> Self {
        Self { logger, min_level }
    }

    /// Create service with configuration-aware settings
    pub fn with_config() -> Self {
        let min_level = config::get_min_log_level();
        let logger: Arc<dyn Logger> = if !config::use_console_logging() {
            Arc::new(NullLogger)
        } else if config::use_structured_logging() {
            Arc::new(StructuredLogger::new(min_level))
        } else {
            Arc::new(ConsoleLogger::new(min_level))
        };

        Self::new(logger, min_level)
    }

    pub fn min_level(&self) -> LogLevel {
        self.min_level
    }

    /// Check if level should be logged
    pub fn should_log(&self, level: LogLevel) -> bool {
        level <= self.min_level
    }

    /// Log an event
    pub fn log_event(&self, event: LogEvent) {
        if self.should_log(event.level) {
            self.logger.log(&event);
        }
    }
}

/// Service built from the runtime preferences
pub fn create_configured_service() -> LoggingService {
    LoggingService::with_config()
}

/// Logger that drops every event
pub struct NullLogger;

impl Logger for NullLogger {
    fn log(&self, _event: &LogEvent) {}
}

/// Simple console logger
pub struct ConsoleLogger {
    min_level: LogLevel,
}

impl ConsoleLogger {
    pub fn new(min_level: LogLevel) -> Self {
        Self { min_level }
    }
}

impl Logger for ConsoleLogger {
    fn log(&self, event: &LogEvent) {
        if event.level <= self.min_level {
            match event.level {
                LogLevel::Error => eprintln!("{}", event.format()),
                _ => println!("{}", event.format()),
            }
        }
    }
}

/// Structured logger for JSON output
pub struct StructuredLogger {
    min_level: LogLevel,
}

impl StructuredLogger {
    pub fn new(min_level: LogLevel) -> Self {
        Self { min_level }
    }
}

impl Logger for StructuredLogger {
    fn log(&self, event: &LogEvent) {
        if event.level <= self.min_level {
            // Fall back to the plain format if JSON serialization fails
            let line = event.format_json().unwrap_or_else(|_| event.format());
            match event.level {
                LogLevel::Error => eprintln!("{}", line),
                _ => println!("{}", line),
            }
        }
    }
}

/// Memory logger for testing
#[derive(Default)]
pub struct MemoryLogger {
    events: Mutex<Vec<LogEvent>>,
}

impl MemoryLogger {
    pub fn new() -> Self {
        Self::default()
    }

    fn events(&self) -> MutexGuard<'_, Vec<LogEvent>> {
        self.events
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn get_events(&self) -> Vec<LogEvent> {
        self.events().clone()
    }

    pub fn clear(&self) {
        self.events().clear();
    }

    pub fn event_count(&self) -> usize {
        self.events().len()
    }

    pub fn get_errors(&self) -> Vec<LogEvent> {
        self.events()
            .iter()
            .filter(|e| e.is_error())
            .cloned()
            .collect()
    }

    pub fn get_events_with_code(&self, code: super::Code) -> Vec<LogEvent> {
        self.events()
            .iter()
            .filter(|e| e.code == code)
            .cloned()
            .collect()
    }

    pub fn has_event_with_code(&self, code: super::Code) -> bool {
        self.events().iter().any(|e| e.code == code)
    }
}

impl Logger for MemoryLogger {
    fn log(&self, event: &LogEvent) {
        self.events().push(event.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::codes;

    #[test]
    fn test_service_filters_by_level() {
        let memory = Arc::new(MemoryLogger::new());
        let service = LoggingService::new(memory.clone(), LogLevel::Warning);

        service.log_event(LogEvent::debug("hidden"));
        service.log_event(LogEvent::info("hidden"));
        service.log_event(LogEvent::warning_with_code(
            codes::matching::ZERO_WIDTH_REPETITION,
            "shown",
        ));
        service.log_event(LogEvent::error(codes::syntax::UNEXPECTED_TOKEN, "shown"));

        assert_eq!(memory.event_count(), 2);
        assert_eq!(memory.get_errors().len(), 1);
        assert!(memory.has_event_with_code(codes::matching::ZERO_WIDTH_REPETITION));
    }

    #[test]
    fn test_memory_logger_clear() {
        let memory = MemoryLogger::new();
        memory.log(&LogEvent::info("one"));
        assert_eq!(memory.event_count(), 1);
        memory.clear();
        assert_eq!(memory.event_count(), 0);
    }
}
