//! Module containing all algorithms implementations.

pub mod sccs;
