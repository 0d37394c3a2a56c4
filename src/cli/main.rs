#![warn(clippy::all, clippy::pedantic)]
use std::error::Error;
use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use clap::{ArgAction, Parser, ValueEnum};
use csv::Writer;
use log::LevelFilter;
use maxflow::{DefaultSolver, EdmondsKarp, FlowSolver, GraphSpec, InputEdge, MaxFlowResult};
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Format {
    /// One `u,v,flow` row per input edge
    Csv,
    /// The complete result: flow value, augmentations, flows and minimum cut
    Json,
}

/// Maximum flow and minimum cut of a capacitated directed graph (Edmonds-Karp)
#[derive(Debug, Parser)]
#[command(version)]
struct Args {
    /// CSV edge list with a `u,v,capacity` header
    edges: PathBuf,

    /// Number of nodes, indexed from 0
    #[arg(short, long)]
    nodes: usize,

    #[arg(short, long, default_value_t = 0)]
    source: usize,

    /// Defaults to the last node
    #[arg(short = 't', long)]
    sink: Option<usize>,

    /// Smallest accepted node count
    #[arg(long, default_value_t = 1)]
    min_nodes: usize,

    /// Largest accepted node count
    #[arg(long, default_value_t = usize::MAX)]
    max_nodes: usize,

    #[arg(short, long, value_enum, default_value_t = Format::Csv)]
    format: Format,

    /// Write the result here instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Verify the result before writing it
    #[arg(long)]
    check: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

// Read the edge list from a CSV file
fn read_edges_csv(filepath: &Path) -> Result<Vec<InputEdge<f64>>, Box<dyn Error>> {
    let mut rdr = csv::Reader::from_path(filepath)?;
    let edges: Result<Vec<_>, _> = rdr.deserialize().collect();
    Ok(edges?)
}

// Write the per-edge flows
fn write_csv(result: &MaxFlowResult<f64>, out: impl Write) -> Result<(), Box<dyn Error>> {
    let mut wtr = Writer::from_writer(out);
    for assignment in result.flow_assignments() {
        wtr.serialize(assignment)?;
    }
    wtr.flush()?;
    Ok(())
}

fn write_json(result: &MaxFlowResult<f64>, mut out: impl Write) -> Result<(), Box<dyn Error>> {
    serde_json::to_writer_pretty(&mut out, result)?;
    writeln!(out)?;
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    let level = match args.verbose {
        0 => LevelFilter::Info,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    TermLogger::init(
        level,
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )
    .map_err(|e| e.to_string())?;

    let edges = read_edges_csv(&args.edges)?;
    let sink = args.sink.unwrap_or_else(|| args.nodes.saturating_sub(1));
    let graph =
        GraphSpec::new(args.nodes, edges, args.source, sink).map_err(|e| e.to_string())?;
    graph
        .ensure_node_count(args.min_nodes..=args.max_nodes)
        .map_err(|e| e.to_string())?;

    let mut solver = DefaultSolver::new(EdmondsKarp::default());
    let result = solver.run(&graph).map_err(|e| e.to_string())?;
    if args.check {
        solver.check(&graph, &result).map_err(|e| e.to_string())?;
        log::info!("result verified");
    }

    let out: Box<dyn Write> = match &args.output {
        Some(path) => Box::new(File::create(path)?),
        None => Box::new(io::stdout().lock()),
    };
    match args.format {
        Format::Csv => write_csv(&result, out),
        Format::Json => write_json(&result, out),
    }
}
