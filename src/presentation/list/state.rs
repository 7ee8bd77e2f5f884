//! State of a paginated list screen.

use crate::presentation::mvi::ScreenState;

/// Which refresh pipeline a trigger or result belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RefreshKind {
    /// Pull-to-refresh / activation: first page, replaces the list.
    Header,
    /// End of list reached: next page, appended.
    Footer,
}

impl RefreshKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            RefreshKind::Header => "header",
            RefreshKind::Footer => "footer",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PipelinePhase {
    #[default]
    Idle,
    Fetching,
}

/// One refresh pipeline: `Idle → Fetching → Idle`.
///
/// Every trigger bumps the generation. Only a result tagged with the
/// latest generation settles the pipeline; older ones are stale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Pipeline {
    generation: u64,
    phase: PipelinePhase,
}

impl Pipeline {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn phase(&self) -> PipelinePhase {
        self.phase
    }

    pub fn is_fetching(&self) -> bool {
        self.phase == PipelinePhase::Fetching
    }

    /// Whether a result tagged with `generation` may still be applied.
    pub fn is_current(&self, generation: u64) -> bool {
        self.is_fetching() && self.generation == generation
    }

    pub(super) fn begin(self) -> Self {
        Self {
            generation: self.generation + 1,
            phase: PipelinePhase::Fetching,
        }
    }

    pub(super) fn settle(self) -> Self {
        Self {
            phase: PipelinePhase::Idle,
            ..self
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ListState<T> {
    pub items: Vec<T>,
    pub header: Pipeline,
    pub footer: Pipeline,
    /// Bumped on every change to `items`.
    pub revision: u64,
}

impl<T> Default for ListState<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            header: Pipeline::default(),
            footer: Pipeline::default(),
            revision: 0,
        }
    }
}

impl<T: Send + 'static> ScreenState for ListState<T> {
    fn revision(&self) -> u64 {
        self.revision
    }
}

impl<T> ListState<T> {
    pub fn pipeline(&self, kind: RefreshKind) -> &Pipeline {
        match kind {
            RefreshKind::Header => &self.header,
            RefreshKind::Footer => &self.footer,
        }
    }

    pub(super) fn pipeline_mut(&mut self, kind: RefreshKind) -> &mut Pipeline {
        match kind {
            RefreshKind::Header => &mut self.header,
            RefreshKind::Footer => &mut self.footer,
        }
    }

    pub fn is_fetching(&self) -> bool {
        self.header.is_fetching() || self.footer.is_fetching()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_empty_and_idle() {
        let state = ListState::<u32>::default();
        assert!(state.items.is_empty());
        assert_eq!(state.header.phase(), PipelinePhase::Idle);
        assert_eq!(state.footer.phase(), PipelinePhase::Idle);
        assert!(!state.is_fetching());
    }

    #[test]
    fn begin_bumps_generation() {
        let pipeline = Pipeline::default().begin();
        assert_eq!(pipeline.generation(), 1);
        assert!(pipeline.is_current(1));

        let pipeline = pipeline.begin();
        assert!(!pipeline.is_current(1));
        assert!(pipeline.is_current(2));

        let pipeline = pipeline.settle();
        assert!(!pipeline.is_current(2));
        assert_eq!(pipeline.generation(), 2);
    }
}
