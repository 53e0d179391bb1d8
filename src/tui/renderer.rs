//! Retained chart store backing the terminal front end.
//!
//! `render` stores a copy of the `ChartSpec` under a fresh handle and `destroy`
//! drops it; each frame then draws whichever spec a surface's handle points at.

use std::collections::HashMap;

use tracing::warn;

use crate::chart::{ChartRenderer, ChartSpec, SurfaceId};

/// Opaque id of a chart stored in [`TerminalCharts`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChartHandle(u64);

#[derive(Debug)]
struct ChartInstance {
    surface: SurfaceId,
    spec: ChartSpec,
}

#[derive(Debug, Default)]
pub struct TerminalCharts {
    next_id: u64,
    live: HashMap<ChartHandle, ChartInstance>,
}

impl TerminalCharts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Spec for a live handle; `None` once destroyed.
    pub fn get(&self, handle: &ChartHandle) -> Option<&ChartSpec> {
        self.live.get(handle).map(|c| &c.spec)
    }

    pub fn live_count(&self) -> usize {
        self.live.len()
    }

    pub fn live_on(&self, surface: SurfaceId) -> usize {
        self.live.values().filter(|c| c.surface == surface).count()
    }
}

impl ChartRenderer for TerminalCharts {
    type Handle = ChartHandle;

    fn render(&mut self, surface: SurfaceId, spec: &ChartSpec) -> ChartHandle {
        if self.live_on(surface) > 0 {
            warn!(?surface, "rendering over a surface that still has a live chart");
        }
        self.next_id += 1;
        let handle = ChartHandle(self.next_id);
        self.live.insert(
            handle,
            ChartInstance {
                surface,
                spec: spec.clone(),
            },
        );
        handle
    }

    fn destroy(&mut self, handle: ChartHandle) {
        if self.live.remove(&handle).is_none() {
            warn!(?handle, "destroy called on unknown chart handle");
        }
    }
}
