//! Common test utilities for vanadis.

pub mod assertions;
pub mod fixtures;
