//! Type-safe logging macros using Code types with Display support

/// Log error with Code type - accepts Display types for context values
#[macro_export]
macro_rules! log_error {
    (@emit $code:expr, $message:expr, $span:expr, $context:expr) => {
        if $crate::logging::is_enabled($crate::logging::LogLevel::Error) {
            let mut event = $crate::logging::LogEvent::error($code, $message);
            let span: Option<$crate::utils::Span> = $span;
            if let Some(span) = span {
                event = event.with_span(span);
            }
            $crate::logging::dispatch($crate::logging::with_context_pairs(event, $context));
        }
    };

    ($code:expr, $message:expr) => {
        $crate::log_error!(@emit $code, $message, None, vec![])
    };

    ($code:expr, $message:expr, span = $span:expr) => {
        $crate::log_error!(@emit $code, $message, Some($span), vec![])
    };

    ($code:expr, $message:expr, $($key:expr => $value:expr),+) => {
        $crate::log_error!(@emit $code, $message, None, vec![$(($key, format!("{}", $value))),+])
    };

    ($code:expr, $message:expr, span = $span:expr, $($key:expr => $value:expr),+) => {
        $crate::log_error!(@emit $code, $message, Some($span), vec![$(($key, format!("{}", $value))),+])
    };
}

/// Log warning with Code type
#[macro_export]
macro_rules! log_warning {
    ($code:expr, $message:expr) => {
        if $crate::logging::is_enabled($crate::logging::LogLevel::Warning) {
            $crate::logging::dispatch($crate::logging::LogEvent::warning_with_code($code, $message));
        }
    };

    ($code:expr, $message:expr, $($key:expr => $value:expr),+) => {
        if $crate::logging::is_enabled($crate::logging::LogLevel::Warning) {
            let event = $crate::logging::LogEvent::warning_with_code($code, $message);
            $crate::logging::dispatch($crate::logging::with_context_pairs(
                event,
                vec![$(($key, format!("{}", $value))),+],
            ));
        }
    };
}

/// Log success with Code type
#[macro_export]
macro_rules! log_success {
    ($code:expr, $message:expr) => {
        if $crate::logging::is_enabled($crate::logging::LogLevel::Info) {
            $crate::logging::dispatch($crate::logging::LogEvent::success($code, $message));
        }
    };

    ($code:expr, $message:expr, $($key:expr => $value:expr),+) => {
        if $crate::logging::is_enabled($crate::logging::LogLevel::Info) {
            let event = $crate::logging::LogEvent::success($code, $message);
            $crate::logging::dispatch($crate::logging::with_context_pairs(
                event,
                vec![$(($key, format!("{}", $value))),+],
            ));
        }
    };
}

/// Log informational message
#[macro_export]
macro_rules! log_info {
    ($message:expr) => {
        if $crate::logging::is_enabled($crate::logging::LogLevel::Info) {
            $crate::logging::dispatch($crate::logging::LogEvent::info($message));
        }
    };

    ($message:expr, $($key:expr => $value:expr),+) => {
        if $crate::logging::is_enabled($crate::logging::LogLevel::Info) {
            let event = $crate::logging::LogEvent::info($message);
            $crate::logging::dispatch($crate::logging::with_context_pairs(
                event,
                vec![$(($key, format!("{}", $value))),+],
            ));
        }
    };
}

/// Log debug message
#[macro_export]
macro_rules! log_debug {
    ($message:expr) => {
        if $crate::logging::is_enabled($crate::logging::LogLevel::Debug) {
            $crate::logging::dispatch($crate::logging::LogEvent::debug($message));
        }
    };

    ($message:expr, $($key:expr => $value:expr),+) => {
        if $crate::logging::is_enabled($crate::logging::LogLevel::Debug) {
            let event = $crate::logging::LogEvent::debug($message);
            $crate::logging::dispatch($crate::logging::with_context_pairs(
                event,
                vec![$(($key, format!("{}", $value))),+],
            ));
        }
    };
}
