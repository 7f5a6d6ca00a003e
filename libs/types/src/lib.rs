//! Types library for the leveraged position risk calculator
//!
//! This library provides the data model shared by the calculator core and
//! the shells that drive it.
//!
//! # Modules
//! - `numeric`: Decimal helpers (percent clamping, display rounding)
//! - `trade`: Trade inputs (side, risk mode, sizing policy, target)
//! - `risk`: Derived metrics and advisories
//! - `errors`: Error taxonomy

// Public modules
pub mod numeric;
pub mod trade;
pub mod risk;
pub mod errors;

// Library version constant
pub const LIB_VERSION: &str = "1.0.0";

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::numeric::*;
    pub use crate::trade::*;
    pub use crate::risk::*;
    pub use crate::errors::*;
}
