//! Layer that keeps span fields for the record encoder

use tracing::Subscriber;
use tracing::span::{Attributes, Id, Record};
use tracing_subscriber::layer::{Context, Layer};
use tracing_subscriber::registry::LookupSpan;

use crate::format::FieldVisitor;
use crate::replace::Attr;

/// Fields of one span, in declaration order, stored in its extensions
#[derive(Debug, Default)]
pub(crate) struct SpanFields(pub(crate) Vec<Attr>);

impl SpanFields {
    /// Later values for a key overwrite earlier ones in place.
    fn merge(&mut self, fields: Vec<Attr>) {
        for attr in fields {
            match self.0.iter_mut().find(|f| f.key == attr.key) {
                Some(existing) => existing.value = attr.value,
                None => self.0.push(attr),
            }
        }
    }
}

/// Records span fields on creation and on `Span::record`
#[derive(Debug, Default, Clone, Copy)]
pub(crate) struct SpanFieldsLayer;

impl<S> Layer<S> for SpanFieldsLayer
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_new_span(&self, attrs: &Attributes<'_>, id: &Id, ctx: Context<'_, S>) {
        let Some(span) = ctx.span(id) else {
            return;
        };
        let mut visitor = FieldVisitor::span();
        attrs.record(&mut visitor);
        span.extensions_mut().insert(SpanFields(visitor.fields));
    }

    fn on_record(&self, id: &Id, values: &Record<'_>, ctx: Context<'_, S>) {
        let Some(span) = ctx.span(id) else {
            return;
        };
        let mut visitor = FieldVisitor::span();
        values.record(&mut visitor);

        let mut extensions = span.extensions_mut();
        match extensions.get_mut::<SpanFields>() {
            Some(fields) => fields.merge(visitor.fields),
            None => extensions.insert(SpanFields(visitor.fields)),
        }
    }
}
