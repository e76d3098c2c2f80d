//! Integration flows.

pub mod algorithms;
pub mod bootstrap;
pub mod section_file;
pub mod strategies;
