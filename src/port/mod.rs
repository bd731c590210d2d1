//! Trait definitions (hexagonal ports). Depend only on domain.
//!
//! ```text
//!        ┌───────────────────────┐
//!        │      Application      │
//!        │  (ReportingService)   │
//!        └───────────┬───────────┘
//!                    │ ReportStore / ReportSession
//!                    ▼
//!           ┌─────────────────┐
//!           │ Postgres Adapter│
//!           └─────────────────┘
//! ```

pub mod outbound;

pub use outbound::store::{ReportSession, ReportStore};
