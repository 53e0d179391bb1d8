//! Test double that records every render/destroy call.

use std::collections::BTreeMap;

use super::{ChartRenderer, ChartSpec, SurfaceId};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FakeHandle {
    pub id: u64,
    pub surface: SurfaceId,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Render(SurfaceId, u64),
    Destroy(SurfaceId, u64),
}

#[derive(Debug, Default)]
pub struct RecordingRenderer {
    next_id: u64,
    pub renders: usize,
    pub destroys: usize,
    pub calls: Vec<Call>,
    live: BTreeMap<u64, (SurfaceId, ChartSpec)>,
    overlapped: bool,
}

impl RecordingRenderer {
    pub fn live_on(&self, surface: SurfaceId) -> usize {
        self.live.values().filter(|(s, _)| *s == surface).count()
    }

    pub fn live_total(&self) -> usize {
        self.live.len()
    }

    pub fn live_spec(&self, surface: SurfaceId) -> Option<&ChartSpec> {
        self.live.values().find(|(s, _)| *s == surface).map(|(_, spec)| spec)
    }

    /// True when no surface ever had two live handles at once.
    pub fn never_overlapped(&self) -> bool {
        !self.overlapped
    }

    pub fn renders_on(&self, surface: SurfaceId) -> usize {
        self.calls
            .iter()
            .filter(|c| matches!(c, Call::Render(s, _) if *s == surface))
            .count()
    }

    pub fn destroys_on(&self, surface: SurfaceId) -> usize {
        self.calls
            .iter()
            .filter(|c| matches!(c, Call::Destroy(s, _) if *s == surface))
            .count()
    }

    pub fn reset_counts(&mut self) {
        self.renders = 0;
        self.destroys = 0;
        self.calls.clear();
    }
}

impl ChartRenderer for RecordingRenderer {
    type Handle = FakeHandle;

    fn render(&mut self, surface: SurfaceId, spec: &ChartSpec) -> FakeHandle {
        if self.live_on(surface) > 0 {
            self.overlapped = true;
        }
        self.next_id += 1;
        let id = self.next_id;
        self.renders += 1;
        self.calls.push(Call::Render(surface, id));
        self.live.insert(id, (surface, spec.clone()));
        FakeHandle { id, surface }
    }

    fn destroy(&mut self, handle: FakeHandle) {
        self.destroys += 1;
        self.calls.push(Call::Destroy(handle.surface, handle.id));
        self.live.remove(&handle.id);
    }
}
