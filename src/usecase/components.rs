use crate::domain::graph::{Graph, SccResult};
use crate::domain::traits::SccDetector;
use crate::usecase::event::AppEvent;
use crate::usecase::stats::SccStats;
use tokio::sync::mpsc;
use tracing::{info, instrument};

/// Runs `detector` over `graph` and reports progress into `sink`.
///
/// Event order: `PhaseStarted("scc")`, one `ComponentEmitted` per component
/// in emission order, `SccComputed`, `PhaseFinished("scc")`, `Finished`.
#[instrument(skip_all, fields(vertices = graph.vertex_count(), edges = graph.edge_count()))]
pub async fn find_components(
    graph: &Graph,
    detector: &dyn SccDetector,
    sink: Option<mpsc::Sender<AppEvent>>,
) -> (SccResult, SccStats) {
    emit(&sink, AppEvent::PhaseStarted { name: "scc".into() }).await;

    let res = detector.compute_scc(graph);

    for (index, comp) in res.components.iter().enumerate() {
        emit(
            &sink,
            AppEvent::ComponentEmitted {
                index,
                vertices: comp.clone(),
            },
        )
        .await;
    }

    let stats = SccStats {
        vertices: graph.vertex_count(),
        edges: graph.edge_count(),
        components: res.components.len(),
        cyclic_components: res.cyclic_count(),
        largest_component: res.largest_component(),
    };

    emit(
        &sink,
        AppEvent::SccComputed {
            vertices: stats.vertices,
            edges: stats.edges,
            components: stats.components,
            cyclic_components: stats.cyclic_components,
        },
    )
    .await;
    emit(&sink, AppEvent::PhaseFinished { name: "scc".into() }).await;

    info!(
        components = stats.components,
        cyclic = stats.cyclic_components,
        largest = stats.largest_component,
        "scc.computed"
    );

    emit(
        &sink,
        AppEvent::Finished {
            stats: stats.clone(),
        },
    )
    .await;
    (res, stats)
}

async fn emit(sink: &Option<mpsc::Sender<AppEvent>>, ev: AppEvent) {
    if let Some(tx) = sink {
        let _ = tx.send(ev).await;
    }
}
