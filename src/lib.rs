//! Unit Converter (uconv) Library
//!
//! Core functionality for converting between length and mass units.

pub mod build_info;
pub mod convert;
pub mod repl;
pub mod session;
