// Application state for HTTP handlers
use crate::application::dashboard::Dashboard;

#[derive(Clone)]
pub struct AppState {
    pub dashboard: Dashboard,
}
