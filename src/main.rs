//! ATSP Solver - Command Line Interface
//!
//! Thin driver around the library: loads a graph from a JSON edge list,
//! runs one heuristic, and reports the tour or tree with its total weight.
//! Everything interactive about the original workflow that is not algorithm
//! work (start-node randomization, timing, user-facing messages) lives here.

use clap::{Parser, Subcommand, ValueEnum};
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use atsp_solver::graph::{Graph, NodeId};
use atsp_solver::heuristics::{
    minimum_spanning_tree, nearest_neighbor, repetitive_nearest_neighbor, two_opt,
};
use atsp_solver::Tour;

use std::path::{Path, PathBuf};
use std::time::Instant;

#[derive(Parser)]
#[command(name = "atsp-solver")]
#[command(version = "1.0")]
#[command(about = "Approximate solver for the Asymmetric Traveling Salesman Problem")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve a graph with one heuristic
    Solve {
        /// Path to the graph file (JSON: {"nodes": [[x, y], ...], "edges": [[from, to, weight], ...]})
        #[arg(short, long)]
        graph: PathBuf,

        /// Algorithm to use
        #[arg(short, long, value_enum, default_value = "rnn")]
        algorithm: Algorithm,

        /// Start node for the single nearest-neighbor run; random if omitted
        #[arg(long)]
        start: Option<NodeId>,

        /// Random seed for start selection
        #[arg(short, long, default_value = "42")]
        seed: u64,

        /// Write the result as JSON to this file
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },

    /// Print statistics and quick solution estimates for a graph
    Analyze {
        /// Path to the graph file
        #[arg(short, long)]
        graph: PathBuf,
    },
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum, Debug)]
enum Algorithm {
    /// Nearest neighbor from a single start
    Nn,
    /// Repetitive nearest neighbor (best of all starts)
    Rnn,
    /// Repetitive nearest neighbor refined with 2-opt
    TwoOpt,
    /// Minimum spanning tree of the undirected projection
    Mst,
}

/// On-disk graph shape consumed by the CLI. Edges go through the library's
/// own `upsert_edge` validation, so malformed files surface its errors.
#[derive(Debug, Serialize, Deserialize)]
struct GraphFile {
    nodes: Vec<(f64, f64)>,
    edges: Vec<(NodeId, NodeId, i64)>,
}

#[derive(Debug, Serialize)]
#[serde(tag = "result", rename_all = "snake_case")]
enum Report {
    Tour {
        algorithm: String,
        nodes: Vec<NodeId>,
        weight: f64,
        elapsed_seconds: f64,
    },
    SpanningTree {
        edges: Vec<(NodeId, NodeId, i64)>,
        total_weight: i64,
        elapsed_seconds: f64,
    },
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Solve {
            graph,
            algorithm,
            start,
            seed,
            output,
            verbose,
        } => {
            solve(&graph, algorithm, start, seed, output, verbose);
        }

        Commands::Analyze { graph } => {
            analyze(&graph);
        }
    }
}

fn load_graph(path: &Path) -> Result<Graph, String> {
    let data = std::fs::read_to_string(path).map_err(|e| format!("Cannot open file: {}", e))?;
    let file: GraphFile =
        serde_json::from_str(&data).map_err(|e| format!("Invalid graph file: {}", e))?;

    let mut graph = Graph::new();
    for pos in file.nodes {
        graph.add_node(pos);
    }
    for (from, to, weight) in file.edges {
        graph.upsert_edge(from, to, weight).map_err(|e| e.to_string())?;
    }
    Ok(graph)
}

fn solve(
    path: &Path,
    algorithm: Algorithm,
    start: Option<NodeId>,
    seed: u64,
    output: Option<PathBuf>,
    verbose: bool,
) {
    let graph = match load_graph(path) {
        Ok(g) => g,
        Err(e) => {
            eprintln!("Error loading graph: {}", e);
            std::process::exit(1);
        }
    };

    if algorithm != Algorithm::Mst && graph.node_count() < 2 {
        eprintln!("The graph must contain at least 2 nodes");
        std::process::exit(1);
    }

    println!(
        "Solving {:?} ({} nodes, {} edges) with {:?}...",
        path,
        graph.node_count(),
        graph.edge_count(),
        algorithm
    );
    let timer = Instant::now();

    let report = match algorithm {
        Algorithm::Nn => {
            let start = match start {
                Some(s) if s < graph.node_count() => s,
                Some(s) => {
                    eprintln!("Start node {} does not exist", s);
                    std::process::exit(1);
                }
                None => {
                    // The library is deterministic by contract; randomizing
                    // the start is this caller's choice.
                    let mut rng = ChaCha8Rng::seed_from_u64(seed);
                    rng.gen_range(0..graph.node_count())
                }
            };
            let tour = nearest_neighbor(&graph, start);
            tour_report(&graph, "NearestNeighbor", tour, timer)
        }

        Algorithm::Rnn => {
            let tour = repetitive_nearest_neighbor(&graph).map(|(tour, _)| tour);
            tour_report(&graph, "RepetitiveNearestNeighbor", tour, timer)
        }

        Algorithm::TwoOpt => {
            let tour = repetitive_nearest_neighbor(&graph)
                .map(|(tour, _)| two_opt(&graph, &tour));
            tour_report(&graph, "RepetitiveNearestNeighbor+2opt", tour, timer)
        }

        Algorithm::Mst => match minimum_spanning_tree(&graph) {
            Ok(tree) => Report::SpanningTree {
                edges: tree.edges().to_vec(),
                total_weight: tree.total_weight(),
                elapsed_seconds: timer.elapsed().as_secs_f64(),
            },
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        },
    };

    print_report(&report, verbose);

    if let Some(out_path) = output {
        let json = match serde_json::to_string_pretty(&report) {
            Ok(json) => json,
            Err(e) => {
                eprintln!("Failed to serialize result: {}", e);
                std::process::exit(1);
            }
        };
        if let Err(e) = std::fs::write(&out_path, json) {
            eprintln!("Failed to write output: {}", e);
            std::process::exit(1);
        }
        println!("\nResult saved to {:?}", out_path);
    }
}

fn tour_report(graph: &Graph, algorithm: &str, tour: Option<Tour>, timer: Instant) -> Report {
    match tour {
        Some(tour) => Report::Tour {
            algorithm: algorithm.to_string(),
            weight: tour.weight(graph),
            nodes: tour.nodes().to_vec(),
            elapsed_seconds: timer.elapsed().as_secs_f64(),
        },
        None => {
            eprintln!("No feasible tour found");
            std::process::exit(1);
        }
    }
}

fn print_report(report: &Report, verbose: bool) {
    println!("\n========== Results ==========");
    match report {
        Report::Tour {
            algorithm,
            nodes,
            weight,
            elapsed_seconds,
        } => {
            println!("Algorithm: {}", algorithm);
            println!("Total weight: {}", weight);
            println!("Time: {:.4}s", elapsed_seconds);
            if verbose {
                println!("Tour: {:?}", nodes);
            }
        }
        Report::SpanningTree {
            edges,
            total_weight,
            elapsed_seconds,
        } => {
            println!("Algorithm: MinimumSpanningTree");
            println!("Total weight: {}", total_weight);
            println!("Edges: {}", edges.len());
            println!("Time: {:.4}s", elapsed_seconds);
            if verbose {
                for (u, v, w) in edges {
                    println!("  {} -- {} (weight {})", u, v, w);
                }
            }
        }
    }
}

fn analyze(path: &Path) {
    let graph = match load_graph(path) {
        Ok(g) => g,
        Err(e) => {
            eprintln!("Error loading graph: {}", e);
            std::process::exit(1);
        }
    };

    println!("========== Graph Analysis ==========\n");
    println!("Nodes: {}", graph.node_count());
    println!("Edges: {}", graph.edge_count());

    let weights: Vec<i64> = graph.edges().map(|(_, _, w)| w).collect();
    if !weights.is_empty() {
        let min = weights.iter().min().copied().unwrap_or(0);
        let max = weights.iter().max().copied().unwrap_or(0);
        let avg = weights.iter().sum::<i64>() as f64 / weights.len() as f64;
        println!("\nEdge Weight Statistics:");
        println!("  Min: {}", min);
        println!("  Max: {}", max);
        println!("  Average: {:.2}", avg);
    }

    if graph.node_count() >= 2 {
        println!("\nQuick Solution Estimates:");
        match repetitive_nearest_neighbor(&graph) {
            Some((tour, weight)) => {
                let refined = two_opt(&graph, &tour);
                println!("  Repetitive Nearest Neighbor: {}", weight);
                println!("  After 2-opt: {}", refined.weight(&graph));
            }
            None => println!("  No feasible tour from any start"),
        }
        match minimum_spanning_tree(&graph) {
            Ok(tree) => println!("  Spanning tree weight: {}", tree.total_weight()),
            Err(_) => println!("  Undirected projection is disconnected"),
        }
    }
}
