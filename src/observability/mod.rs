//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! gateway layer and CLI produce:
//!     → logging.rs (structured log events)
//!     → metrics.rs (counters)
//!
//! Consumers:
//!     → Log aggregation (stderr, JSON or text)
//!     → Whatever metrics recorder the host installs
//! ```
//!
//! # Design Decisions
//! - The capture core stays silent; only the gateway layer reports
//! - Metrics are cheap (facade no-ops without a recorder)

pub mod logging;
pub mod metrics;

pub use logging::init_logging;
