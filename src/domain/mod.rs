// Domain layer - plain data: samples, figures and page layouts
pub mod figure;
pub mod page;
pub mod sample;
