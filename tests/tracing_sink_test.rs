use std::error::Error;
use std::fmt;
use std::sync::{Arc, Mutex};

use caller_log::logging::{log_to, TracingSink};
use caller_log::{Level, LogSink};
use tracing::field::{Field, Visit};
use tracing::span;
use tracing::{Event, Metadata, Subscriber};

#[derive(Debug, Clone, Default, PartialEq)]
struct Captured {
    level: Option<tracing::Level>,
    tag: Option<String>,
    assert: Option<bool>,
    message: Option<String>,
}

impl Visit for Captured {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "tag" {
            self.tag = Some(value.to_string());
        }
    }

    fn record_bool(&mut self, field: &Field, value: bool) {
        if field.name() == "assert" {
            self.assert = Some(value);
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            self.message = Some(format!("{:?}", value));
        }
    }
}

/// Records events at or above `max` verbosity
struct CaptureSubscriber {
    max: tracing::Level,
    events: Arc<Mutex<Vec<Captured>>>,
}

impl Subscriber for CaptureSubscriber {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        *metadata.level() <= self.max
    }

    fn new_span(&self, _span: &span::Attributes<'_>) -> span::Id {
        span::Id::from_u64(1)
    }

    fn record(&self, _span: &span::Id, _values: &span::Record<'_>) {}

    fn record_follows_from(&self, _span: &span::Id, _follows: &span::Id) {}

    fn event(&self, event: &Event<'_>) {
        let mut captured = Captured {
            level: Some(*event.metadata().level()),
            ..Captured::default()
        };
        event.record(&mut captured);
        self.events.lock().unwrap().push(captured);
    }

    fn enter(&self, _span: &span::Id) {}

    fn exit(&self, _span: &span::Id) {}
}

#[derive(Debug)]
struct Timeout;

impl fmt::Display for Timeout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "timed out")
    }
}

impl Error for Timeout {}

#[test]
fn test_tracing_sink_fields_and_filtering() {
    let events = Arc::new(Mutex::new(Vec::new()));
    let subscriber = CaptureSubscriber {
        max: tracing::Level::DEBUG,
        events: events.clone(),
    };
    let timeout = Timeout;
    let err: &(dyn Error + 'static) = &timeout;
    let line = line!() + 7;
    let line_err = line + 2;

    tracing::subscriber::with_default(subscriber, || {
        assert!(!TracingSink.is_loggable(Level::Verbose, "Tracer"));
        assert!(TracingSink.is_loggable(Level::Debug, "Tracer"));
        for level in Level::ALL {
            log_to(&TracingSink, level, "Tracer", "ping", None);
        }
        log_to(&TracingSink, Level::Assert, "Tracer", "broken", Some(err));
    });

    let events = events.lock().unwrap().clone();
    let levels: Vec<tracing::Level> = events.iter().filter_map(|e| e.level).collect();
    assert_eq!(
        levels,
        vec![
            tracing::Level::DEBUG,
            tracing::Level::INFO,
            tracing::Level::WARN,
            tracing::Level::ERROR,
            tracing::Level::ERROR,
            tracing::Level::ERROR,
        ]
    );
    for event in &events {
        assert_eq!(event.tag.as_deref(), Some("Tracer"));
    }

    let asserts: Vec<Option<bool>> = events.iter().map(|e| e.assert).collect();
    assert_eq!(asserts, vec![None, None, None, None, Some(true), Some(true)]);

    assert_eq!(
        events[0].message.as_deref(),
        Some(format!("ping (tracing_sink_test:{})", line).as_str())
    );
    assert_eq!(
        events[5].message.as_deref(),
        Some(format!("broken (tracing_sink_test:{})\ntimed out", line_err).as_str())
    );
}
