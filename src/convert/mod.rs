//! Conversion module
//!
//! Factor resolution and value transformation.

pub mod transform;
pub mod units;

pub use transform::compute_result;
pub use units::{resolve_factor, Unit, UnitCategory};
