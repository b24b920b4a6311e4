// Page domain models - routes, panels and the component tree of a layout
use crate::domain::figure::FigureShape;
use serde::{Deserialize, Serialize};

pub const HOME_PATH: &str = "/";
pub const SETTINGS_PATH: &str = "/page-1";
pub const PLACEHOLDER_PATH: &str = "/page-2";

/// The closed set of pages a navigation path can resolve to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "page", content = "path", rename_all = "snake_case")]
pub enum Route {
    Home,
    Settings,
    Placeholder,
    NotFound(String),
}

impl Route {
    pub fn resolve(path: &str) -> Self {
        match path {
            HOME_PATH => Route::Home,
            SETTINGS_PATH => Route::Settings,
            PLACEHOLDER_PATH => Route::Placeholder,
            other => Route::NotFound(other.to_string()),
        }
    }
}

/// The two live chart panels mounted on the home page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PanelKind {
    Frame,
    Acquisition,
}

impl PanelKind {
    pub const ALL: [PanelKind; 2] = [PanelKind::Frame, PanelKind::Acquisition];

    pub fn element_id(self) -> &'static str {
        match self {
            PanelKind::Frame => "live-update-graph",
            PanelKind::Acquisition => "live-update-acquisition-function",
        }
    }

    pub fn shape(self) -> FigureShape {
        match self {
            PanelKind::Frame => FigureShape::Altitude,
            PanelKind::Acquisition => FigureShape::Spatial,
        }
    }

    pub fn heading(self) -> &'static str {
        match self {
            PanelKind::Frame => "Cost function",
            PanelKind::Acquisition => "Acquisition function",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CostFunction {
    #[default]
    #[serde(rename = "Met")]
    Metabolic,
    #[serde(rename = "RMSSD")]
    Rmssd,
    #[serde(rename = "EMG")]
    Emg,
}

impl CostFunction {
    pub const ALL: [CostFunction; 3] = [CostFunction::Metabolic, CostFunction::Rmssd, CostFunction::Emg];

    pub fn label(self) -> &'static str {
        match self {
            CostFunction::Metabolic => "Metabolic cost",
            CostFunction::Rmssd => "RMSSD",
            CostFunction::Emg => "EMG",
        }
    }

    pub fn value(self) -> &'static str {
        match self {
            CostFunction::Metabolic => "Met",
            CostFunction::Rmssd => "RMSSD",
            CostFunction::Emg => "EMG",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectorStyle {
    Radio,
    Dropdown,
}

pub const COST_FUNCTION_SELECTOR_ID: &str = "cost-function";
pub const LIVE_TEXT_ID: &str = "live-update-text";
pub const INTERVAL_ID: &str = "interval-component";

/// One node of a page layout. Markup is produced from these by the
/// presentation layer.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "component", rename_all = "snake_case")]
pub enum Component {
    Heading {
        level: u8,
        text: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        class: Option<&'static str>,
    },
    Paragraph {
        text: String,
    },
    Divider,
    CostFunctionSelector {
        id: &'static str,
        style: SelectorStyle,
        options: Vec<CostFunction>,
        value: CostFunction,
    },
    LiveText {
        id: &'static str,
    },
    /// A chart bound to a live refresh pipeline.
    Panel {
        id: &'static str,
        panel: PanelKind,
    },
    /// A chart with no data bound.
    Graph {
        id: &'static str,
    },
    Interval {
        id: &'static str,
        interval_ms: u64,
        n_intervals: u64,
    },
}

impl Component {
    pub fn heading(level: u8, text: impl Into<String>) -> Self {
        Component::Heading {
            level,
            text: text.into(),
            class: None,
        }
    }

    pub fn paragraph(text: impl Into<String>) -> Self {
        Component::Paragraph { text: text.into() }
    }

    pub fn cost_function_selector(style: SelectorStyle) -> Self {
        Component::CostFunctionSelector {
            id: COST_FUNCTION_SELECTOR_ID,
            style,
            options: CostFunction::ALL.to_vec(),
            value: CostFunction::default(),
        }
    }

    pub fn panel(panel: PanelKind) -> Self {
        Component::Panel {
            id: panel.element_id(),
            panel,
        }
    }
}

/// Everything mounted in the content slot for one navigation path.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageLayout {
    pub path: String,
    pub route: Route,
    pub components: Vec<Component>,
}

impl PageLayout {
    pub fn panels(&self) -> Vec<PanelKind> {
        self.components
            .iter()
            .filter_map(|c| match c {
                Component::Panel { panel, .. } => Some(*panel),
                _ => None,
            })
            .collect()
    }

    /// Period of the ticking timer, if the layout mounts one.
    pub fn timer_interval_ms(&self) -> Option<u64> {
        self.components.iter().find_map(|c| match c {
            Component::Interval { interval_ms, .. } => Some(*interval_ms),
            _ => None,
        })
    }
}
