#![forbid(unsafe_code)]

//! Tracing span instrumentation tests.
//!
//! Spans enabled:
//!   cargo test -p ctab-widgets --features tracing --test tracing_tests
//!
//! Without the feature only the no-op check runs:
//!   cargo test -p ctab-widgets --test tracing_tests

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use ctab_core::geometry::Rect;
use ctab_model::College;
use ctab_render::Buffer;
use ctab_widgets::{Column, FixedIcon, IncrementalTableView};

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::registry::LookupSpan;

// ============================================================================
// Test Infrastructure
// ============================================================================

/// A captured span with its fields and parent.
#[derive(Debug, Clone)]
#[allow(dead_code)]
struct CapturedSpan {
    name: String,
    fields: HashMap<String, String>,
    parent_name: Option<String>,
}

/// A tracing Layer that records every new span.
struct SpanCapture {
    spans: Arc<Mutex<Vec<CapturedSpan>>>,
}

/// Visitor that extracts span fields.
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

impl<S> tracing_subscriber::Layer<S> for SpanCapture
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
            .map(|span_ref| span_ref.name().to_string());

        self.spans.lock().unwrap().push(CapturedSpan {
            name: attrs.metadata().name().to_string(),
            fields: visitor.0.into_iter().collect(),
            parent_name,
        });
    }
}

/// Run `f` with span capture installed and return what was captured.
fn with_captured_spans(f: impl FnOnce()) -> Vec<CapturedSpan> {
    let spans = Arc::new(Mutex::new(Vec::new()));
    let layer = SpanCapture {
        spans: Arc::clone(&spans),
    };
    let subscriber = tracing_subscriber::registry().with(layer);
    tracing::subscriber::with_default(subscriber, f);
    let captured = spans.lock().unwrap().clone();
    captured
}

fn sample_view() -> IncrementalTableView {
    let source: Arc<[College]> = (1..=25)
        .map(|i| College::new(i, format!("College {i}")).with_rating(f64::from(i % 5)))
        .collect::<Vec<_>>()
        .into();
    IncrementalTableView::new(source).with_decoration(FixedIcon("*"))
}

fn render(view: &mut IncrementalTableView) {
    let mut buf = Buffer::new(80, 12);
    view.render(Rect::from_size(80, 12), &mut buf);
}

// ============================================================================
// Tests
// ============================================================================

#[test]
#[cfg(feature = "tracing")]
fn render_spans_nest_under_the_view() {
    let mut view = sample_view();
    let spans = with_captured_spans(|| render(&mut view));

    let widgets: Vec<(&str, Option<&str>)> = spans
        .iter()
        .filter(|s| s.name == "widget_render")
        .filter_map(|s| {
            s.fields
                .get("widget")
                .map(|w| (w.as_str(), s.parent_name.as_deref()))
        })
        .collect();

    assert!(
        widgets.contains(&("IncrementalTableView", None)),
        "got: {widgets:?}"
    );
    assert!(
        widgets.contains(&("SearchInput", Some("widget_render"))),
        "got: {widgets:?}"
    );
    assert!(
        widgets.contains(&("Table", Some("widget_render"))),
        "got: {widgets:?}"
    );
}

#[test]
#[cfg(feature = "tracing")]
fn render_span_records_area() {
    let mut view = sample_view();
    let spans = with_captured_spans(|| render(&mut view));

    let view_span = spans
        .iter()
        .find(|s| s.fields.get("widget").map(String::as_str) == Some("IncrementalTableView"))
        .expect("view span");
    assert_eq!(view_span.fields.get("w").map(String::as_str), Some("80"));
    assert_eq!(view_span.fields.get("h").map(String::as_str), Some("12"));
}

#[test]
#[cfg(feature = "tracing")]
fn sort_and_search_recompute_in_a_span() {
    let mut view = sample_view();
    let spans = with_captured_spans(|| {
        view.click_header(Column::Rating);
        view.set_search("1");
    });

    let recomputes: Vec<&CapturedSpan> =
        spans.iter().filter(|s| s.name == "view_recompute").collect();
    assert_eq!(recomputes.len(), 2);
    assert!(
        spans.iter().any(|s| s.name == "pipeline_order"
            && s.parent_name.as_deref() == Some("view_recompute")),
        "pipeline span should nest inside the recompute span"
    );
}

#[test]
#[cfg(not(feature = "tracing"))]
fn no_spans_without_feature() {
    let mut view = sample_view();
    let spans = with_captured_spans(|| {
        render(&mut view);
        view.click_header(Column::Name);
    });
    assert!(spans.is_empty(), "got: {spans:?}");
}
