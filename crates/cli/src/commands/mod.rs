pub mod config;
pub mod debug;
pub mod run;

pub use config::config_command;
pub use debug::debug_command;
pub use run::run_command;
