#![forbid(unsafe_code)]

//! Tracing instrumentation tests.
//!
//! Spans and events enabled:
//!   cargo test -p tabula-widgets --features tracing --test tracing_tests
//!
//! Without the feature only the silence check runs.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

#[cfg(feature = "tracing")]
use tabula_widgets::{ColumnBuilder, ColumnWidth, Panel, Text, VerticalLayoutBuilder};
use tabula_widgets::{RenderContext, TableBuilder, Widget};

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::registry::LookupSpan;

// ============================================================================
// Test Infrastructure
// ============================================================================

#[derive(Debug, Clone)]
#[allow(dead_code)]
struct CapturedSpan {
    name: String,
    fields: HashMap<String, String>,
    parent_name: Option<String>,
}

#[derive(Debug, Clone)]
#[allow(dead_code)]
struct CapturedEvent {
    message: String,
    span_name: Option<String>,
}

#[derive(Default, Clone)]
struct CaptureHandle {
    spans: Arc<Mutex<Vec<CapturedSpan>>>,
    events: Arc<Mutex<Vec<CapturedEvent>>>,
}

impl CaptureHandle {
    fn spans(&self) -> Vec<CapturedSpan> {
        self.spans.lock().unwrap().clone()
    }

    fn events(&self) -> Vec<CapturedEvent> {
        self.events.lock().unwrap().clone()
    }

    fn widget_names(&self) -> Vec<String> {
        self.spans()
            .into_iter()
            .filter(|s| s.name == "widget_render")
            .filter_map(|s| s.fields.get("widget").cloned())
            .collect()
    }
}

struct Capture(CaptureHandle);

struct FieldVisitor(Vec<(String, String)>);

impl tracing::field::Visit for FieldVisitor {
    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        self.0.push((field.name().to_string(), format!("{value:?}")));
    }

    fn record_u64(&mut self, field: &tracing::field::Field, value: u64) {
        self.0.push((field.name().to_string(), value.to_string()));
    }

    fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
        self.0.push((field.name().to_string(), value.to_string()));
    }
}

impl<S> tracing_subscriber::Layer<S> for Capture
where
    S: tracing::Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_new_span(
        &self,
        attrs: &tracing::span::Attributes<'_>,
        _id: &tracing::span::Id,
        ctx: tracing_subscriber::layer::Context<'_, S>,
    ) {
        let mut visitor = FieldVisitor(Vec::new());
        attrs.record(&mut visitor);
        let parent_name = ctx
            .current_span()
            .id()
            .and_then(|id| ctx.span(id))
            .map(|span| span.name().to_string());
        self.0.spans.lock().unwrap().push(CapturedSpan {
            name: attrs.metadata().name().to_string(),
            fields: visitor.0.into_iter().collect(),
            parent_name,
        });
    }

    fn on_event(&self, event: &tracing::Event<'_>, ctx: tracing_subscriber::layer::Context<'_, S>) {
        let mut visitor = FieldVisitor(Vec::new());
        event.record(&mut visitor);
        let message = visitor
            .0
            .into_iter()
            .find(|(name, _)| name == "message")
            .map(|(_, value)| value)
            .unwrap_or_default();
        let span_name = ctx.lookup_current().map(|span| span.name().to_string());
        self.0.events.lock().unwrap().push(CapturedEvent { message, span_name });
    }
}

fn with_captured<F: FnOnce()>(f: F) -> CaptureHandle {
    let handle = CaptureHandle::default();
    let subscriber = tracing_subscriber::registry().with(Capture(handle.clone()));
    tracing::subscriber::with_default(subscriber, f);
    handle
}

// ============================================================================
// Tests
// ============================================================================

#[test]
#[cfg(feature = "tracing")]
fn widget_render_spans_name_the_widget() {
    let handle = with_captured(|| {
        let cx = RenderContext::default();
        let _ = Panel::new(Text::new("hi")).render(&cx, 20);
        let _ = TableBuilder::new().row(["a"]).build().unwrap().render(&cx, 20);
        let _ = VerticalLayoutBuilder::new().cell("v").build().render(&cx, 20);
    });

    let names = handle.widget_names();
    for expected in ["Panel", "Table", "VerticalLayout", "Text"] {
        assert!(
            names.iter().any(|n| n.contains(expected)),
            "missing {expected} span, got: {names:?}"
        );
    }
}

#[test]
#[cfg(feature = "tracing")]
fn cell_spans_nest_under_the_table() {
    let handle = with_captured(|| {
        let table = TableBuilder::new().row(["a", "b"]).build().unwrap();
        let _ = table.render(&RenderContext::default(), 20);
    });

    let cells: Vec<_> = handle
        .spans()
        .into_iter()
        .filter(|s| s.fields.get("widget").is_some_and(|w| w.contains("Text")))
        .collect();
    assert_eq!(cells.len(), 2);
    assert!(cells.iter().all(|s| s.parent_name.as_deref() == Some("widget_render")));
}

#[test]
#[cfg(feature = "tracing")]
fn table_build_and_width_allocation_are_logged() {
    let handle = with_captured(|| {
        let table = TableBuilder::new()
            .column(0, ColumnBuilder::new().width(ColumnWidth::expand(1.0)))
            .row(["a", "b"])
            .build()
            .unwrap();
        let _ = table.render(&RenderContext::default(), 20);
    });

    let events = handle.events();
    assert!(events.iter().any(|e| e.message == "table built"), "{events:?}");
    let widths = events
        .iter()
        .find(|e| e.message == "table column widths")
        .expect("width allocation event");
    assert_eq!(widths.span_name.as_deref(), Some("widget_render"));
}

#[test]
#[cfg(not(feature = "tracing"))]
fn zero_overhead_without_feature() {
    let handle = with_captured(|| {
        let table = TableBuilder::new().row(["a"]).build().unwrap();
        let _ = table.render(&RenderContext::default(), 20);
    });
    // Text wrapping logs on its own; widgets stay silent.
    assert!(handle.widget_names().is_empty());
    assert!(!handle.events().iter().any(|e| e.message.starts_with("table")));
}
