//! # omnilearn-adapt
//!
//! Device-adaptive content and avatar-fidelity selection for the
//! OmniLearn platform. The crate senses a client device's capability
//! profile, scores it, classifies the device, maps the result onto
//! discrete fidelity and quality tiers, and rewrites lesson content to
//! fit. Everything it produces is plain data handed to an embedding
//! rendering layer.
//!
//! - [`adapt`] - capability probe, classifier, scorer, tier selection,
//!   content adaptation and the [`AdaptEngine`] facade
//! - [`stores`] - collaborator contracts for lesson content and
//!   per-device user preferences
//! - [`learning`] - course recommendation ranking and progress figures
//! - [`config`] - tunable thresholds and weights with spec defaults

pub mod adapt;
pub mod config;
pub mod error;
pub mod learning;
pub mod logging;
pub mod stores;

pub use adapt::engine::{AdaptEngine, DeviceSnapshot};
pub use config::AdaptConfig;
pub use error::{AdaptError, ProbeError, StoreError};
