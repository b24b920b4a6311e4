// Page router - maps a navigation path to the layout mounted for it
use crate::domain::page::{
    Component, PageLayout, PanelKind, Route, SelectorStyle, INTERVAL_ID, LIVE_TEXT_ID,
};

pub const DEFAULT_REFRESH_INTERVAL_MS: u64 = 1000;

#[derive(Debug, Clone)]
pub struct PageRouter {
    refresh_interval_ms: u64,
}

impl PageRouter {
    pub fn new(refresh_interval_ms: u64) -> Self {
        Self {
            refresh_interval_ms,
        }
    }

    /// Render the layout for `path`. Unknown paths get the not-found page.
    pub fn render(&self, path: &str) -> PageLayout {
        let route = Route::resolve(path);
        let components = match &route {
            Route::Home => self.home(),
            Route::Settings => Self::cost_function_settings(),
            Route::Placeholder => vec![Component::paragraph("Oh cool, this is page 2!")],
            Route::NotFound(unknown) => Self::not_found(unknown),
        };

        PageLayout {
            path: path.to_string(),
            route,
            components,
        }
    }

    fn home(&self) -> Vec<Component> {
        let mut components = vec![
            Component::heading(1, "Select cost function"),
            Component::cost_function_selector(SelectorStyle::Radio),
        ];
        for (i, panel) in PanelKind::ALL.into_iter().enumerate() {
            components.push(Component::heading(4, panel.heading()));
            if i == 0 {
                components.push(Component::LiveText { id: LIVE_TEXT_ID });
            }
            components.push(Component::panel(panel));
        }
        components.push(Component::Interval {
            id: INTERVAL_ID,
            interval_ms: self.refresh_interval_ms,
            n_intervals: 0,
        });
        components
    }

    fn cost_function_settings() -> Vec<Component> {
        vec![
            Component::heading(1, "Select cost function"),
            Component::cost_function_selector(SelectorStyle::Dropdown),
            Component::Graph {
                id: PanelKind::Frame.element_id(),
            },
        ]
    }

    fn not_found(path: &str) -> Vec<Component> {
        vec![
            Component::Heading {
                level: 1,
                text: "404: Not found".to_string(),
                class: Some("text-danger"),
            },
            Component::Divider,
            Component::paragraph(format!("The pathname {} was not recognised...", path)),
        ]
    }
}

impl Default for PageRouter {
    fn default() -> Self {
        Self::new(DEFAULT_REFRESH_INTERVAL_MS)
    }
}
