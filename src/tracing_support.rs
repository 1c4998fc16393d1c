//! Subscriber setup for the library's `tracing` output.
//!
//! The library only emits events and spans. With the `subscriber` feature
//! enabled this module can install a subscriber that prints them to stderr
//! and totals the time spent in each span; without it, installation is a
//! no-op and the timings stay empty.

pub use tracing::info_span;

/// Filter used when the caller passes one that does not parse.
pub const DEFAULT_FILTER: &str = "info";

#[cfg(feature = "subscriber")]
mod enabled {
    use std::{
        cell::RefCell,
        collections::BTreeMap,
        sync::Once,
        time::{Duration, Instant},
    };

    use tracing_subscriber::{
        EnvFilter, Layer, Registry, layer::Context, layer::SubscriberExt, registry::LookupSpan,
        util::SubscriberInitExt,
    };

    use super::DEFAULT_FILTER;

    thread_local! {
        static SPAN_TIMINGS: RefCell<BTreeMap<&'static str, (Duration, usize)>> =
            const { RefCell::new(BTreeMap::new()) };
    }

    /// Records how long each closed span was open, keyed by span name.
    struct TimingLayer;

    impl<S> Layer<S> for TimingLayer
    where
        S: tracing::Subscriber + for<'a> LookupSpan<'a>,
    {
        fn on_new_span(
            &self,
            _attrs: &tracing::span::Attributes<'_>,
            id: &tracing::Id,
            ctx: Context<'_, S>,
        ) {
            if let Some(span) = ctx.span(id) {
                span.extensions_mut().insert(Instant::now());
            }
        }

        fn on_close(&self, id: tracing::Id, ctx: Context<'_, S>) {
            let Some(span) = ctx.span(&id) else {
                return;
            };
            let name = span.metadata().name();
            if let Some(start) = span.extensions().get::<Instant>() {
                let elapsed = start.elapsed();
                SPAN_TIMINGS.with(|totals| {
                    let mut totals = totals.borrow_mut();
                    let entry = totals.entry(name).or_insert((Duration::ZERO, 0));
                    entry.0 += elapsed;
                    entry.1 += 1;
                });
            }
        }
    }

    /// Installs a stderr subscriber filtered by `filter` (an `EnvFilter`
    /// directive such as `"graphcycle=debug"`). Only the first call in a
    /// process has any effect.
    pub fn init_tracing(filter: &str) {
        static INIT: Once = Once::new();
        INIT.call_once(|| {
            let filter = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
            let fmt = tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_filter(filter);
            let _ = Registry::default().with(fmt).with(TimingLayer).try_init();
        });
    }

    /// Accumulated `(span name, total time, count)` for spans closed on this
    /// thread, longest first.
    pub fn span_timings() -> Vec<(&'static str, Duration, usize)> {
        SPAN_TIMINGS.with(|totals| {
            let mut entries: Vec<_> = totals
                .borrow()
                .iter()
                .map(|(&name, &(total, count))| (name, total, count))
                .collect();
            entries.sort_by(|a, b| b.1.cmp(&a.1));
            entries
        })
    }

    pub fn reset_span_timings() {
        SPAN_TIMINGS.with(|totals| totals.borrow_mut().clear());
    }
}

#[cfg(not(feature = "subscriber"))]
mod disabled {
    use std::time::Duration;

    pub fn init_tracing(_filter: &str) {}

    pub fn span_timings() -> Vec<(&'static str, Duration, usize)> {
        Vec::new()
    }

    pub fn reset_span_timings() {}
}

#[cfg(feature = "subscriber")]
pub use enabled::*;

#[cfg(not(feature = "subscriber"))]
pub use disabled::*;

/// Prints the span timings to stderr.
pub fn dump_span_timings() {
    let timings = span_timings();
    eprintln!("span timings (desc):");
    for (name, total, count) in timings {
        eprintln!("  {name}: {total:?} ({count}x)");
    }
}
