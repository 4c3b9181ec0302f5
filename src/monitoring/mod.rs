/*!
 * Monitoring
 * Simulation trace events and structured logging
 */

mod events;
mod tracer;

pub use events::{EventSink, RecordingSink, SimEvent, TracingSink};
pub use tracer::{init_tracing, TRACE_JSON_ENV};
