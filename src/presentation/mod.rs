// Presentation layer - HTTP handlers, markup and the live session socket
pub mod app_state;
pub mod handlers;
pub mod markup;
pub mod protocol;
pub mod session;
