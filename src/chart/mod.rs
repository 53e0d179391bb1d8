//! Chart descriptions and the draw/destroy contract with a chart backend.
//!
//! A backend implements [`ChartRenderer`]: `render` returns an opaque handle
//! for a live chart, `destroy` releases it. [`ChartSurface`] owns at most one
//! handle and always destroys the old one before asking for a new one.

mod spec;
mod surface;

#[cfg(test)]
pub(crate) mod testing;

pub use spec::*;
pub use surface::ChartSurface;

/// Drawable targets of the calculator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SurfaceId {
    /// Bar chart of the live projection.
    Earnings,
    /// Line chart of fixed illustrative data.
    Example,
}

impl SurfaceId {
    pub const ALL: [SurfaceId; 2] = [SurfaceId::Earnings, SurfaceId::Example];
}

/// A chart backend.
pub trait ChartRenderer {
    type Handle;

    /// Build a chart for `spec` on `surface` and return its handle.
    fn render(&mut self, surface: SurfaceId, spec: &ChartSpec) -> Self::Handle;

    /// Release a chart previously returned by `render`.
    fn destroy(&mut self, handle: Self::Handle);
}
