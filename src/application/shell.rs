// Shell - owns the mounted page and the lifecycle of its live panels
use crate::application::panel_controller::PanelController;
#[cfg(test)]
use crate::application::panel_controller::PanelState;
use crate::application::router::PageRouter;
use crate::application::sampler::Sampler;
use crate::application::tick_source::TickSource;
use crate::domain::figure::Figure;
use crate::domain::page::{CostFunction, PageLayout, PanelKind};
use std::time::Duration;

/// A figure produced by a tick, addressed to the panel that displays it.
#[derive(Debug, Clone, PartialEq)]
pub struct FigureUpdate {
    pub panel: PanelKind,
    pub n_intervals: u64,
    pub figure: Figure,
}

/// Timer plus the panels subscribed to it. Exists only while a live page is mounted.
struct LivePanels {
    ticks: TickSource,
    period: Duration,
    panels: Vec<PanelController>,
}

struct MountedPage {
    layout: PageLayout,
    live: Option<LivePanels>,
}

pub struct Shell {
    router: PageRouter,
    sampler: Sampler,
    mounted: Option<MountedPage>,
    cost_function: CostFunction,
}

impl Shell {
    pub fn new(router: PageRouter, sampler: Sampler) -> Self {
        Self {
            router,
            sampler,
            mounted: None,
            cost_function: CostFunction::default(),
        }
    }

    /// Mount the layout for `path`, tearing down whatever was mounted before.
    ///
    /// Returns false when `path` is already mounted, in which case nothing
    /// changes.
    pub fn navigate(&mut self, path: &str) -> bool {
        if self.path() == Some(path) {
            return false;
        }

        if let Some(previous) = self.mounted.take() {
            tracing::debug!("Unmounting page {}", previous.layout.path);
        }

        let layout = self.router.render(path);
        let live = layout.timer_interval_ms().map(|interval_ms| {
            let ticks = TickSource::new();
            let panels = layout
                .panels()
                .into_iter()
                .map(|kind| PanelController::mount(kind, self.sampler.clone(), &ticks))
                .collect();
            LivePanels {
                ticks,
                period: Duration::from_millis(interval_ms),
                panels,
            }
        });

        tracing::info!(
            "Mounted page {} ({} live panels)",
            layout.path,
            live.as_ref().map(|l| l.panels.len()).unwrap_or(0)
        );
        self.cost_function = CostFunction::default();
        self.mounted = Some(MountedPage { layout, live });
        true
    }

    pub fn layout(&self) -> Option<&PageLayout> {
        self.mounted.as_ref().map(|m| &m.layout)
    }

    pub fn path(&self) -> Option<&str> {
        self.layout().map(|l| l.path.as_str())
    }

    #[cfg(test)]
    pub fn is_live(&self) -> bool {
        self.live().is_some()
    }

    /// Period of the mounted timer; `None` while the timer is suspended.
    pub fn refresh_period(&self) -> Option<Duration> {
        self.live().map(|l| l.period)
    }

    #[cfg(test)]
    pub fn tick_source(&self) -> Option<&TickSource> {
        self.live().map(|l| &l.ticks)
    }

    #[cfg(test)]
    pub fn panel_state(&self, kind: PanelKind) -> Option<&PanelState> {
        self.live()?
            .panels
            .iter()
            .find(|p| p.kind() == kind)
            .map(|p| p.state())
    }

    /// Fire the shared timer and collect every panel's new figure.
    ///
    /// Does nothing while no live page is mounted.
    pub fn tick(&mut self) -> Vec<FigureUpdate> {
        let Some(live) = self.mounted.as_mut().and_then(|m| m.live.as_mut()) else {
            return Vec::new();
        };

        live.ticks.fire();
        let mut updates = Vec::with_capacity(live.panels.len());
        for panel in &mut live.panels {
            let kind = panel.kind();
            if let Some(figure) = panel.pump().cloned() {
                updates.push(FigureUpdate {
                    panel: kind,
                    n_intervals: panel.last_tick().map(|t| t.n_intervals).unwrap_or(0),
                    figure,
                });
            }
        }
        updates
    }

    /// Record the selector's value. Nothing downstream reads it.
    pub fn select_cost_function(&mut self, value: CostFunction) {
        tracing::debug!("Cost function selected: {}", value.value());
        self.cost_function = value;
    }

    #[allow(dead_code)] // placeholder state: the selection is recorded, nothing consumes it
    pub fn cost_function(&self) -> CostFunction {
        self.cost_function
    }

    fn live(&self) -> Option<&LivePanels> {
        self.mounted.as_ref().and_then(|m| m.live.as_ref())
    }
}
