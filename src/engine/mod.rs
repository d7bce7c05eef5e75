//! Engine modules: the numeric core.
//!
//! The engine sits below the presentation layer: it turns a term count into
//! a Fibonacci sequence and prime statistics, and never touches I/O.

pub mod report;
pub mod sequence;
