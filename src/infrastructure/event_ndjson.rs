use crate::usecase::event::AppEvent;
use anyhow::{Context, Result};
use serde_json::json;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

fn app_event_to_json(ev: &AppEvent) -> serde_json::Value {
    match ev {
        AppEvent::PhaseStarted { name } => json!({"type":"phase_started","name":name}),
        AppEvent::PhaseFinished { name } => json!({"type":"phase_finished","name":name}),
        AppEvent::ComponentEmitted { index, vertices } => {
            json!({"type":"component_emitted","index":index,"vertices":vertices})
        }
        AppEvent::SccComputed {
            vertices,
            edges,
            components,
            cyclic_components,
        } => {
            json!({"type":"scc_computed","vertices":vertices,"edges":edges,"components":components,"cyclic_components":cyclic_components})
        }
        AppEvent::Finished { stats } => json!({"type":"finished","stats":stats}),
    }
}

pub fn spawn_ndjson_printer(mut rx: mpsc::Receiver<AppEvent>) -> JoinHandle<()> {
    tokio::spawn(async move {
        while let Some(ev) = rx.recv().await {
            let line = app_event_to_json(&ev);

            // NDJSON to stdout.
            println!("{line}");
        }
    })
}

/// Waits for a printer started by [`spawn_ndjson_printer`]; a panicked or
/// cancelled printer is reported instead of swallowed.
pub async fn join_ndjson_printer(handle: JoinHandle<()>) -> Result<()> {
    handle.await.context("ndjson printer task failed")
}
