//! Step definitions for recurring series behaviour tests.

pub mod given;
pub mod when;
pub mod world;
