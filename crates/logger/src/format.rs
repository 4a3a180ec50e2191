//! Record encoding (text and JSON lines)
//!
//! The stock `tracing_subscriber::fmt` formatters write fields as they visit
//! them, so there is no point at which an attribute can be rewritten before it
//! is serialized. [`RecordFormat`] collects the record into [`Attr`]s first,
//! runs them through the [`Replacer`], and only then encodes the line.

use std::borrow::Cow;
use std::fmt;

use serde_json::{Value, json};
use smallvec::SmallVec;
use time::{OffsetDateTime, format_description::well_known::Rfc3339};
use tracing::field::{Field, Visit};
use tracing::{Event, Metadata, Subscriber};
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::{FmtContext, FormatEvent, FormatFields};
use tracing_subscriber::registry::LookupSpan;

use crate::config::Format;
use crate::layer::SpanFields;
use crate::replace::{Attr, LEVEL_KEY, MESSAGE_KEY, Replacer, SOURCE_KEY, TIME_KEY};

/// Event formatter used by every logger this crate builds
#[derive(Debug, Clone)]
pub(crate) struct RecordFormat {
    format: Format,
    source: bool,
    replacer: Replacer,
}

impl RecordFormat {
    pub(crate) fn new(format: Format, source: bool, replacer: Replacer) -> Self {
        Self {
            format,
            source,
            replacer,
        }
    }

    /// Collect the attributes of `event` in output order, replacers applied.
    ///
    /// `spans` holds the fields of the enclosing spans, root first, each
    /// paired with the depth of the span that carries it in `groups`.
    fn attrs(
        &self,
        groups: &[&str],
        spans: Vec<(usize, Attr)>,
        event: &Event<'_>,
    ) -> Result<Vec<Attr>, fmt::Error> {
        let meta = event.metadata();
        let mut visitor = FieldVisitor::event();
        event.record(&mut visitor);

        let mut attrs = Vec::with_capacity(spans.len() + visitor.fields.len() + 4);
        let mut push = |groups: &[&str], attr: Attr| {
            let attr = self.replacer.apply(groups, attr);
            if !attr.is_dropped() {
                attrs.push(attr);
            }
        };

        let now = OffsetDateTime::now_utc()
            .format(&Rfc3339)
            .map_err(|_| fmt::Error)?;
        push(&[], Attr::new(TIME_KEY, now));
        push(&[], Attr::new(LEVEL_KEY, level_name(meta.level())));
        if self.source
            && let Some(source) = self.source_value(meta)
        {
            push(&[], Attr::new(SOURCE_KEY, source));
        }
        push(&[], Attr::new(MESSAGE_KEY, visitor.message.unwrap_or_default()));

        for (depth, attr) in spans {
            push(&groups[..depth], attr);
        }
        for attr in visitor.fields {
            push(groups, attr);
        }

        Ok(attrs)
    }

    fn source_value(&self, meta: &Metadata<'_>) -> Option<Value> {
        let file = meta.file()?;
        Some(match (self.format, meta.line()) {
            (Format::Text, Some(line)) => json!(format!("{file}:{line}")),
            (Format::Text, None) => json!(file),
            (Format::Json, line) => json!({
                "file": file,
                "line": line,
                "module": meta.module_path(),
            }),
        })
    }
}

impl<S, N> FormatEvent<S, N> for RecordFormat
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        let mut groups: SmallVec<[&'static str; 4]> = SmallVec::new();
        let mut span_fields = Vec::new();
        if let Some(scope) = ctx.event_scope() {
            for span in scope.from_root() {
                groups.push(span.name());
                if let Some(fields) = span.extensions().get::<SpanFields>() {
                    span_fields.extend(fields.0.iter().map(|attr| (groups.len(), attr.clone())));
                }
            }
        }

        let attrs = self.attrs(&groups, span_fields, event)?;
        match self.format {
            Format::Text => write_text(&mut writer, &attrs),
            Format::Json => write_json(&mut writer, &attrs),
        }
    }
}

fn level_name(level: &tracing::Level) -> &'static str {
    match *level {
        tracing::Level::TRACE => "TRACE",
        tracing::Level::DEBUG => "DEBUG",
        tracing::Level::INFO => "INFO",
        tracing::Level::WARN => "WARN",
        tracing::Level::ERROR => "ERROR",
    }
}

fn write_text(w: &mut impl fmt::Write, attrs: &[Attr]) -> fmt::Result {
    for (i, attr) in attrs.iter().enumerate() {
        if i > 0 {
            w.write_char(' ')?;
        }
        write!(w, "{}={}", text_token(&attr.key), text_value(&attr.value))?;
    }
    w.write_char('\n')
}

fn text_value(value: &Value) -> Cow<'_, str> {
    match value {
        Value::String(s) => text_token(s),
        Value::Array(_) | Value::Object(_) => Cow::Owned(text_token(&value.to_string()).into_owned()),
        other => Cow::Owned(other.to_string()),
    }
}

/// Bare if it survives a `key=value` split, otherwise a JSON string literal.
fn text_token(s: &str) -> Cow<'_, str> {
    let needs_quoting = s.is_empty()
        || s
            .chars()
            .any(|c| c.is_whitespace() || c.is_control() || c == '=' || c == '"');
    if needs_quoting {
        Cow::Owned(Value::from(s).to_string())
    } else {
        Cow::Borrowed(s)
    }
}

/// Keys are written in attribute order; serde_json's `Map` would sort them.
fn write_json(w: &mut impl fmt::Write, attrs: &[Attr]) -> fmt::Result {
    w.write_char('{')?;
    for (i, attr) in attrs.iter().enumerate() {
        if i > 0 {
            w.write_char(',')?;
        }
        write!(w, "{}:{}", Value::from(attr.key.as_str()), attr.value)?;
    }
    w.write_str("}\n")
}

/// Collects tracing fields as [`Attr`]s
pub(crate) struct FieldVisitor {
    /// Events split off their `message` field; spans keep it as an attribute.
    split_message: bool,
    pub(crate) message: Option<String>,
    pub(crate) fields: Vec<Attr>,
}

impl FieldVisitor {
    pub(crate) fn event() -> Self {
        Self {
            split_message: true,
            message: None,
            fields: Vec::new(),
        }
    }

    pub(crate) fn span() -> Self {
        Self {
            split_message: false,
            ..Self::event()
        }
    }

    fn record(&mut self, field: &Field, value: Value) {
        if self.split_message && field.name() == "message" {
            self.message = Some(match value {
                Value::String(s) => s,
                other => other.to_string(),
            });
        } else {
            self.fields.push(Attr::new(field.name(), value));
        }
    }
}

impl Visit for FieldVisitor {
    fn record_f64(&mut self, field: &Field, value: f64) {
        self.record(field, float_value(value));
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.record(field, json!(value));
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        self.record(field, json!(value));
    }

    fn record_bool(&mut self, field: &Field, value: bool) {
        self.record(field, json!(value));
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        self.record(field, json!(value));
    }

    fn record_error(&mut self, field: &Field, value: &(dyn std::error::Error + 'static)) {
        self.record(field, json!(value.to_string()));
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        self.record(field, json!(format!("{value:?}")));
    }
}

/// JSON has no NaN or infinity; those are kept as `NaN`, `+Inf`, `-Inf`.
fn float_value(value: f64) -> Value {
    if value.is_finite() {
        json!(value)
    } else if value.is_nan() {
        json!("NaN")
    } else if value > 0.0 {
        json!("+Inf")
    } else {
        json!("-Inf")
    }
}
