// Panel controller - one live chart bound to a tick subscription
use crate::application::figure_builder::build_figure;
use crate::application::sampler::Sampler;
use crate::application::tick_source::{Tick, TickSource, TickSubscription};
use crate::domain::figure::Figure;
use crate::domain::page::PanelKind;

#[derive(Debug, Clone, PartialEq)]
pub enum PanelState {
    Idle,
    Displaying(Figure),
}

pub struct PanelController {
    kind: PanelKind,
    sampler: Sampler,
    subscription: TickSubscription,
    state: PanelState,
    last_tick: Option<Tick>,
}

impl PanelController {
    /// Mount a panel: subscribe to `ticks` and start out idle.
    pub fn mount(kind: PanelKind, sampler: Sampler, ticks: &TickSource) -> Self {
        tracing::debug!("Mounting panel {}", kind.element_id());
        Self {
            kind,
            sampler,
            subscription: ticks.subscribe(),
            state: PanelState::Idle,
            last_tick: None,
        }
    }

    pub fn kind(&self) -> PanelKind {
        self.kind
    }

    #[cfg(test)]
    pub fn state(&self) -> &PanelState {
        &self.state
    }

    pub fn figure(&self) -> Option<&Figure> {
        match &self.state {
            PanelState::Idle => None,
            PanelState::Displaying(figure) => Some(figure),
        }
    }

    pub fn last_tick(&self) -> Option<Tick> {
        self.last_tick
    }

    /// Handle any ticks delivered since the last call.
    ///
    /// Several pending ticks produce a single refresh. Returns the new
    /// figure when one was built.
    pub fn pump(&mut self) -> Option<&Figure> {
        let tick = self.subscription.take_latest()?;
        self.refresh(tick);
        self.figure()
    }

    fn refresh(&mut self, tick: Tick) {
        let series = self.sampler.generate();
        let figure = build_figure(series, self.kind.shape());
        tracing::trace!(
            "Panel {} refreshed on tick {}",
            self.kind.element_id(),
            tick.n_intervals
        );
        self.state = PanelState::Displaying(figure);
        self.last_tick = Some(tick);
    }
}

impl Drop for PanelController {
    fn drop(&mut self) {
        tracing::debug!("Unmounting panel {}", self.kind.element_id());
    }
}
