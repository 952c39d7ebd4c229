//! Workspace package that hosts the end-to-end tests in `tests/`

pub use react_runner_core::*;
