//! # imgtools-core
//!
//! Foundation types shared by the image tools telemetry crates:
//!
//! - **Correlation IDs**: [`ids::CorrelationId`] newtype, one per tool invocation
//! - **Obfuscation**: [`obfuscate::obfuscate`] one-way hash for identifiers sent off-host
//! - **Logging**: [`logging::init_subscriber`] for the `tracing` subscriber
//!
//! ## Crate Position
//!
//! Foundation crate. Depended on by `imgtools-settings` and `imgtools-telemetry`.

#![deny(unsafe_code)]

pub mod ids;
pub mod logging;
pub mod obfuscate;

pub use ids::CorrelationId;
pub use obfuscate::obfuscate;
