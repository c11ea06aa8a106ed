//! Configuration types
//!
//! Board-agnostic, read-only configuration tables fixed at startup.

pub mod hardware;
pub mod pins;

pub use hardware::*;
pub use pins::*;
