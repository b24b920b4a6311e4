// Application layer - sampling, figure building, panels, routing and the shell
pub mod capabilities;
pub mod dashboard;
pub mod figure_builder;
pub mod panel_controller;
pub mod router;
pub mod sampler;
pub mod shell;
pub mod tick_source;

#[cfg(test)]
pub mod testing;
