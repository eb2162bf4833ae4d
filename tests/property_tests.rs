//! Property-based tests for app_logging using proptest

use app_logging::prelude::*;
use parking_lot::Mutex;
use proptest::prelude::*;
use std::sync::Arc;

fn any_level() -> impl Strategy<Value = LogLevel> {
    prop_oneof![
        Just(LogLevel::Debug),
        Just(LogLevel::Info),
        Just(LogLevel::Warning),
        Just(LogLevel::Error),
        Just(LogLevel::Critical),
    ]
}

/// Sink that counts the records it receives
struct CountingSink {
    count: Arc<Mutex<usize>>,
}

impl Sink for CountingSink {
    fn write(&mut self, _record: &LogRecord) -> app_logging::Result<()> {
        *self.count.lock() += 1;
        Ok(())
    }

    fn flush(&mut self) -> app_logging::Result<()> {
        Ok(())
    }

    fn kind(&self) -> SinkKind {
        SinkKind::Console
    }

    fn name(&self) -> &str {
        "counting"
    }
}

// ============================================================================
// LogLevel properties
// ============================================================================

proptest! {
    /// Level string conversions roundtrip correctly
    #[test]
    fn test_log_level_str_roundtrip(level in any_level()) {
        let as_str = level.to_str();
        let parsed: LogLevel = as_str.parse().unwrap();
        prop_assert_eq!(level, parsed);
    }

    /// Level ordering is consistent with the numeric ranking
    #[test]
    fn test_log_level_ordering(level1 in any_level(), level2 in any_level()) {
        let val1 = level1 as u8;
        let val2 = level2 as u8;

        prop_assert_eq!(level1 <= level2, val1 <= val2);
        prop_assert_eq!(level1 < level2, val1 < val2);
        prop_assert_eq!(level1 >= level2, val1 >= val2);
        prop_assert_eq!(level1 > level2, val1 > val2);
    }

    /// Level Display matches to_str
    #[test]
    fn test_log_level_display(level in any_level()) {
        prop_assert_eq!(format!("{}", level), level.to_str());
    }

    /// Parsing accepts case-insensitive input
    #[test]
    fn test_log_level_case_insensitive(use_lower in any::<bool>()) {
        for level in LogLevel::all() {
            let input = if use_lower {
                level.to_str().to_lowercase()
            } else {
                level.to_str().to_string()
            };
            prop_assert!(input.parse::<LogLevel>().is_ok(), "Failed to parse: {}", input);
        }
    }
}

// ============================================================================
// Threshold property
// ============================================================================

proptest! {
    /// A record is delivered to every sink iff its severity is at or above
    /// the configured threshold
    #[test]
    fn test_threshold_filtering(threshold in any_level(), level in any_level()) {
        let ctx = LoggingContext::new();
        ctx.set_min_level(threshold);

        let count = Arc::new(Mutex::new(0));
        ctx.attach(Box::new(CountingSink { count: Arc::clone(&count) }));

        ctx.handle("prop").log(level, "probe");

        let expected = usize::from(level >= threshold);
        prop_assert_eq!(*count.lock(), expected);
    }
}

// ============================================================================
// Record sanitization properties
// ============================================================================

proptest! {
    /// Newlines are escaped in messages so a record stays on one line
    #[test]
    fn test_message_sanitization_newlines(message in ".*") {
        let record = LogRecord::new(LogLevel::Info, "prop", message.clone());

        prop_assert!(!record.message.contains('\n'),
                "record contains unsanitized newline: {:?}", record.message);

        if message.contains('\n') {
            prop_assert!(record.message.contains("\\n"),
                    "newlines not escaped: {:?}", record.message);
        }
    }

    /// Carriage returns are escaped in messages
    #[test]
    fn test_message_sanitization_carriage_return(message in ".*") {
        let record = LogRecord::new(LogLevel::Info, "prop", message.clone());

        prop_assert!(!record.message.contains('\r'),
                "record contains unsanitized carriage return: {:?}", record.message);

        if message.contains('\r') {
            prop_assert!(record.message.contains("\\r"),
                    "carriage returns not escaped: {:?}", record.message);
        }
    }

    /// The formatted line always carries the level token and logger name
    #[test]
    fn test_formatted_line_structure(level in any_level(), name in "[a-z][a-z0-9_]{0,16}") {
        let record = LogRecord::new(level, name.clone(), "probe");
        let line = LineFormat::new().line(&record);

        let level_token = format!(" - {} - ", level.to_str());
        let name_token = format!(" - {} - probe", name);
        prop_assert!(line.contains(&level_token));
        prop_assert!(line.contains(&name_token));
    }
}
