//! Library side of the `vc-brief` CLI, exposed for integration tests.

pub mod cli;
pub mod commands;
pub mod logging;
pub mod summary;
