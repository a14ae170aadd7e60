use crate::domain::graph::Graph;
use crate::infrastructure::event_ndjson::{join_ndjson_printer, spawn_ndjson_printer};
use crate::infrastructure::scc_kosaraju::KosarajuSccDetector;
use crate::usecase::components::find_components;
use crate::usecase::event::AppEvent;
use crate::usecase::verify::verify_components;
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use std::ffi::OsString;
use std::io::Write;
use tokio::sync::mpsc;
use tracing_subscriber::EnvFilter;

const BANNER: &str = "Strongly Connected Components:";

const DEMO_VERTICES: i64 = 5;
const DEMO_EDGES: &[(i64, i64)] = &[(0, 2), (2, 1), (1, 0), (0, 3), (3, 4)];

/// Strongly connected components of a directed graph (Kosaraju).
#[derive(Debug, Parser)]
#[command(name = "kosaraju-scc", author, version, about)]
struct Cli {
    #[command(flatten)]
    verbose: Verbosity<WarnLevel>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Print the components of the built-in five-vertex graph (default)
    Demo {
        /// Write NDJSON events to stdout instead of the component listing
        #[arg(long)]
        emit_events: bool,
    },
    /// Compute the components of a graph given on the command line
    Run {
        /// Number of vertices; vertices are numbered 0..N
        #[arg(short = 'n', long, allow_hyphen_values = true)]
        vertices: i64,

        /// Directed edge as SOURCE:DEST, repeatable, kept in the given order
        #[arg(short = 'e', long = "edge", value_parser = parse_edge, allow_hyphen_values = true)]
        edges: Vec<(i64, i64)>,

        /// Write NDJSON events to stdout instead of the component listing
        #[arg(long)]
        emit_events: bool,

        /// Re-check the result against the graph before printing
        #[arg(long)]
        verify: bool,
    },
}

pub async fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli.verbose);
    let mut stdout = std::io::stdout();
    execute(cli, &mut stdout).await
}

/// Parses `args` (program name first) and writes the listing to `out`.
/// NDJSON events, when requested, always go to stdout.
pub async fn run_with_args<I, T, W>(args: I, out: &mut W) -> Result<()>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
    W: Write,
{
    let cli = Cli::try_parse_from(args)?;
    execute(cli, out).await
}

fn init_tracing(verbose: &Verbosity<WarnLevel>) {
    // Logs go to stderr so stdout stays a clean listing or NDJSON stream.
    let level = verbose.tracing_level_filter();
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("warn,kosaraju_scc={level}")));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

async fn execute<W: Write>(cli: Cli, out: &mut W) -> Result<()> {
    let cmd = cli.command.unwrap_or(Commands::Demo { emit_events: false });

    match cmd {
        Commands::Demo { emit_events } => {
            let graph =
                Graph::from_edges(DEMO_VERTICES, DEMO_EDGES).context("building demo graph")?;
            report(&graph, emit_events, false, out).await
        }
        Commands::Run {
            vertices,
            edges,
            emit_events,
            verify,
        } => {
            let graph = Graph::from_edges(vertices, &edges)
                .context("building graph from arguments")?;
            report(&graph, emit_events, verify, out).await
        }
    }
}

async fn report<W: Write>(
    graph: &Graph,
    emit_events: bool,
    verify: bool,
    out: &mut W,
) -> Result<()> {
    let (tx, rx) = mpsc::channel::<AppEvent>(1024);
    let printer = if emit_events {
        Some(spawn_ndjson_printer(rx))
    } else {
        drop(rx);
        None
    };

    let detector = KosarajuSccDetector;
    let (res, stats) = find_components(graph, &detector, Some(tx)).await;

    if let Some(handle) = printer {
        join_ndjson_printer(handle).await?;
    }

    if verify {
        verify_components(graph, &res).context("verifying components")?;
        eprintln!("ok: components verified");
    }

    if !emit_events {
        writeln!(out, "{BANNER}")?;
        for comp in &res.components {
            let line: Vec<String> = comp.iter().map(|v| v.to_string()).collect();
            writeln!(out, "{}", line.join(" "))?;
        }
        out.flush()?;
    }

    eprintln!(
        "summary: vertices={} edges={} components={} cyclic_components={} largest_component={}",
        stats.vertices,
        stats.edges,
        stats.components,
        stats.cyclic_components,
        stats.largest_component
    );

    Ok(())
}

fn parse_edge(raw: &str) -> Result<(i64, i64), String> {
    let (src, dst) = raw
        .split_once(':')
        .ok_or_else(|| format!("expected SOURCE:DEST, got {raw:?}"))?;
    let src = src
        .trim()
        .parse::<i64>()
        .map_err(|e| format!("bad source in {raw:?}: {e}"))?;
    let dst = dst
        .trim()
        .parse::<i64>()
        .map_err(|e| format!("bad destination in {raw:?}: {e}"))?;
    Ok((src, dst))
}
