use tracing::{debug, trace};

use super::{ChartRenderer, ChartSpec, SurfaceId};

/// A drawable target holding at most one live chart handle.
#[derive(Debug)]
pub struct ChartSurface<H> {
    id: SurfaceId,
    attached: bool,
    handle: Option<H>,
}

impl<H> ChartSurface<H> {
    /// A detached surface with nothing bound.
    pub fn new(id: SurfaceId) -> Self {
        Self {
            id,
            attached: false,
            handle: None,
        }
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }

    pub fn handle(&self) -> Option<&H> {
        self.handle.as_ref()
    }

    pub fn attach(&mut self) {
        self.attached = true;
    }

    /// Destroy the bound chart (if any) and render `spec` in its place.
    ///
    /// Returns `false` without touching the renderer when the surface is detached.
    pub fn rebind<R>(&mut self, renderer: &mut R, spec: &ChartSpec) -> bool
    where
        R: ChartRenderer<Handle = H>,
    {
        if !self.attached {
            debug!(surface = ?self.id, "skipping render on detached surface");
            return false;
        }

        if let Some(old) = self.handle.take() {
            trace!(surface = ?self.id, "destroying previous chart");
            renderer.destroy(old);
        }
        self.handle = Some(renderer.render(self.id, spec));
        trace!(surface = ?self.id, kind = ?spec.kind, points = spec.dataset.data.len(), "chart rendered");
        true
    }

    /// Destroy the bound chart, if any.
    pub fn release<R>(&mut self, renderer: &mut R)
    where
        R: ChartRenderer<Handle = H>,
    {
        if let Some(handle) = self.handle.take() {
            renderer.destroy(handle);
        }
    }

    /// Release the bound chart and mark the surface detached.
    pub fn detach<R>(&mut self, renderer: &mut R)
    where
        R: ChartRenderer<Handle = H>,
    {
        self.release(renderer);
        self.attached = false;
    }
}
