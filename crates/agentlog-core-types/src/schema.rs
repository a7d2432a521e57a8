//! Canonical schema constants for the factory's own diagnostic events
//!
//! These constants keep the `tracing` events emitted by agentlog consistent.

// Canonical field keys
pub const FIELD_COMPONENT: &str = "component";
pub const FIELD_OP: &str = "op";
pub const FIELD_EVENT: &str = "event";
pub const FIELD_DURATION_MS: &str = "duration_ms";

// Logger identifiers
pub const FIELD_LOGGER: &str = "logger";
pub const FIELD_LEVEL: &str = "level";
pub const FIELD_SINK_ATTACHED: &str = "sink_attached";

// Error fields
pub const FIELD_ERR_KIND: &str = "err.kind";
pub const FIELD_ERR_CODE: &str = "err.code";

// Canonical operation names
pub const OP_GET_LOGGER: &str = "get_logger";
pub const OP_EMIT: &str = "emit";

// Canonical event names
pub const EVENT_START: &str = "start";
pub const EVENT_END: &str = "end";
pub const EVENT_END_ERROR: &str = "end_error";
