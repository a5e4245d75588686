//! Derived physical quantities
//!
//! Total functions over optional measurements: missing inputs fall back to
//! documented defaults instead of failing.

pub mod magnetopause;
pub mod storm;

pub use magnetopause::{compression_factor, dynamic_pressure, magnetopause_standoff};
pub use storm::{classify_storm, dst_level, kp_level};
