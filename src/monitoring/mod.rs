/*!
 * Monitoring
 * Performance metrics over finished runs, plus structured tracing
 */

mod metrics;
mod tracer;

pub use metrics::{MetricsCalculator, PerformanceMetrics, ThroughputSample};
pub use tracer::{init_tracing, PolicySpan, TRACE_JSON_ENV};
