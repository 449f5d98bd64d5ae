//! translatekit: pluggable translation-store strategies and the contract the
//! benchmark harness drives them through.
//!
//! See `DESIGN.md` for how strategy combinations are assembled.

pub mod backend;
pub mod builder;
pub mod dataset;
pub mod error;
pub mod traits;
pub mod value;
