//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`connection`, `request`, `simulator`, `uploads`)
//! so individual components can depend on small focused models. Each model is
//! a plain struct wrapped in an `RwSignal` by its owner.

pub mod connection;
pub mod request;
pub mod simulator;
pub mod uploads;
