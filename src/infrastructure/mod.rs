// Infrastructure layer - configuration, system sources and timers
pub mod config;
pub mod system_sources;
pub mod ticker;
