use crate::usecase::stats::SccStats;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type")]
pub enum AppEvent {
    PhaseStarted {
        name: String,
    },
    PhaseFinished {
        name: String,
    },

    ComponentEmitted {
        index: usize,
        vertices: Vec<usize>,
    },

    SccComputed {
        vertices: usize,
        edges: usize,
        components: usize,
        cyclic_components: usize,
    },

    Finished {
        stats: SccStats,
    },
}
