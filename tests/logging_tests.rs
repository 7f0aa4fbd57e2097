//! Checks the debug events emitted by the top-level sort calls.

use mqsort::prelude::*;
use std::sync::{Arc, Mutex};
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

/// Collects the `algorithm` field of every debug event.
#[derive(Clone, Default)]
struct AlgorithmEvents(Arc<Mutex<Vec<String>>>);

struct AlgorithmField(Option<String>);

impl Visit for AlgorithmField {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "algorithm" {
            self.0 = Some(value.to_string());
        }
    }

    fn record_debug(&mut self, _field: &Field, _value: &dyn std::fmt::Debug) {}
}

impl<S: Subscriber> Layer<S> for AlgorithmEvents {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        if *event.metadata().level() != Level::DEBUG {
            return;
        }
        let mut visitor = AlgorithmField(None);
        event.record(&mut visitor);
        if let Some(algorithm) = visitor.0 {
            self.0.lock().unwrap().push(algorithm);
        }
    }
}

#[test]
fn test_every_top_level_call_logs_once() {
    let events = AlgorithmEvents::default();
    let subscriber = tracing_subscriber::registry().with(events.clone());

    tracing::subscriber::with_default(subscriber, || {
        for algorithm in Algorithm::ALL {
            for mut v in [vec![], vec![1], vec![2, 1]] {
                sort_by(algorithm, &mut v, &Natural).unwrap();
            }
        }
    });

    let seen = events.0.lock().unwrap().clone();
    assert_eq!(seen, ["merge", "merge", "merge", "quick", "quick", "quick"]);
}
