// Dashboard - composition root shared by every session
use crate::application::router::PageRouter;
use crate::application::sampler::Sampler;
use crate::application::shell::Shell;
use crate::domain::page::PageLayout;

#[derive(Clone)]
pub struct Dashboard {
    router: PageRouter,
    sampler: Sampler,
}

impl Dashboard {
    pub fn new(router: PageRouter, sampler: Sampler) -> Self {
        Self { router, sampler }
    }

    /// Stateless render, for clients that only want the layout.
    pub fn render(&self, path: &str) -> PageLayout {
        self.router.render(path)
    }

    /// A fresh shell with nothing mounted, one per session.
    pub fn open_shell(&self) -> Shell {
        Shell::new(self.router.clone(), self.sampler.clone())
    }
}
