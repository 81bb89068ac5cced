use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::time::Instant;

use anyhow::Context;
use clap::{Args, Parser, Subcommand, ValueEnum};

use ppinet::algorithms::{bfs, dfs, most_confident_path, PathSearch, Traversal};
use ppinet::graph::{EdgeListGraph, GraphMetrics, PpiGraph};
use ppinet::loader::{load_graph, LoadReport};
use ppinet::PpiConfig;

#[derive(Parser, Debug)]
#[command(name = "ppinet", about = "Directed weighted PPI network analysis CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args, Debug)]
struct LoadArgs {
    /// Protein info file (accession <tab> preferred name, header line first)
    #[arg(long)]
    info: PathBuf,

    /// Interaction links file (source destination combined_score)
    #[arg(long)]
    links: PathBuf,

    /// Minimum normalized confidence for an interaction to be kept
    #[arg(long, default_value_t = 0.5)]
    threshold: f64,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum TraversalKind {
    Bfs,
    Dfs,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Interactive menu session.
    Menu {
        /// Path to config file (JSON)
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Load a graph and print its aggregate metrics.
    Stats {
        #[command(flatten)]
        load: LoadArgs,
    },

    /// Load a graph and look up one protein.
    Search {
        #[command(flatten)]
        load: LoadArgs,
        /// Protein accession to look up
        #[arg(long)]
        id: String,
    },

    /// Load a graph and traverse it from a start protein.
    Traverse {
        #[command(flatten)]
        load: LoadArgs,
        /// Traversal algorithm
        #[arg(long, value_enum)]
        algo: TraversalKind,
        /// Start protein accession
        #[arg(long)]
        start: String,
    },

    /// Load a graph and find the most confident path between two proteins.
    Path {
        #[command(flatten)]
        load: LoadArgs,
        /// Start protein accession
        #[arg(long)]
        from: String,
        /// Destination protein accession
        #[arg(long)]
        to: String,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let config = PpiConfig::default();

    match cli.command {
        Commands::Menu { config: path } => {
            let config = match path {
                Some(path) => PpiConfig::from_file(&path)
                    .with_context(|| format!("reading config {}", path.display()))?,
                None => config,
            };
            MenuSession::new(config).run()
        }
        Commands::Stats { load } => {
            let (graph, _) = load_from_args(&load)?;
            run_metrics(&graph, config.progress_interval);
            Ok(())
        }
        Commands::Search { load, id } => {
            let (graph, _) = load_from_args(&load)?;
            run_search(&graph, &id, config.neighbor_preview);
            Ok(())
        }
        Commands::Traverse { load, algo, start } => {
            let (graph, _) = load_from_args(&load)?;
            run_traversal(&graph, algo, &start);
            Ok(())
        }
        Commands::Path { load, from, to } => {
            let (graph, _) = load_from_args(&load)?;
            run_path(&graph, &from, &to);
            Ok(())
        }
    }
}

fn load_from_args(args: &LoadArgs) -> anyhow::Result<(EdgeListGraph, LoadReport)> {
    let started = Instant::now();
    let (graph, report) = load_graph(&args.info, &args.links, args.threshold)
        .with_context(|| {
            format!(
                "loading graph from {} and {}",
                args.info.display(),
                args.links.display()
            )
        })?;
    println!(
        "Loaded {} proteins and {} interactions in {} ms",
        report.proteins,
        report.interactions,
        started.elapsed().as_millis()
    );
    print_drops(&report);
    Ok((graph, report))
}

fn print_drops(report: &LoadReport) {
    if report.below_threshold > 0 {
        println!(
            "  {} interactions dropped below threshold",
            report.below_threshold
        );
    }
    if report.malformed_lines > 0 {
        println!("  {} malformed lines skipped", report.malformed_lines);
    }
    if report.unknown_endpoints > 0 {
        println!(
            "  {} interactions referenced unknown proteins",
            report.unknown_endpoints
        );
    }
}

fn run_metrics(graph: &EdgeListGraph, every: usize) {
    println!("Calculating metrics (dots mark progress)...");
    let metrics = GraphMetrics::compute_with_progress(graph, every, |_| {
        print!(".");
        let _ = io::stdout().flush();
    });
    println!();
    print_metrics(&metrics);
}

fn print_metrics(m: &GraphMetrics) {
    println!("--- Graph Metrics ---");
    println!("1. Vertex Count: {}", m.vertex_count);
    println!("2. Edge Count: {}", m.edge_count);
    println!("3. Average Degree: {:.2}", m.avg_out_degree);
    println!("4. Reciprocity: {:.4}", m.reciprocity);
    println!("5. Diameter: {}", m.diameter);
}

fn run_search(graph: &EdgeListGraph, id: &str, preview: usize) {
    let Some(protein) = graph.search_protein(id) else {
        println!("Protein not found.");
        return;
    };

    println!("------------------------------------------------");
    println!("FOUND: {protein}");

    let neighbors = graph.neighbors(protein.id);
    println!("Connection Count (Out-Degree): {}", neighbors.len());

    if neighbors.is_empty() {
        println!("This protein has no outgoing edges.");
    } else {
        println!("First {} connected proteins:", preview.min(neighbors.len()));
        for id in neighbors.iter().take(preview) {
            if let Some(neighbor) = graph.protein(*id) {
                println!("   -> {}", neighbor.accession);
            }
        }
        if neighbors.len() > preview {
            println!("   ... and {} more.", neighbors.len() - preview);
        }
    }
    println!("------------------------------------------------");
}

fn run_traversal(graph: &EdgeListGraph, kind: TraversalKind, start: &str) {
    let (label, result) = match kind {
        TraversalKind::Bfs => ("BFS", bfs(graph, start)),
        TraversalKind::Dfs => ("DFS", dfs(graph, start)),
    };
    match result {
        None => println!("Start protein ({start}) not found!"),
        Some(traversal) => print_traversal(graph, label, &traversal),
    }
}

fn print_traversal(graph: &EdgeListGraph, label: &str, traversal: &Traversal) {
    let accessions: Vec<&str> = traversal
        .order
        .iter()
        .filter_map(|id| graph.protein(*id))
        .map(|p| p.accession.as_str())
        .collect();
    println!("{label} Output: {} -> END", accessions.join(" -> "));
    println!("{label} visited {} proteins.", traversal.visited_count());
}

fn run_path(graph: &EdgeListGraph, from: &str, to: &str) {
    match most_confident_path(graph, from, to) {
        None => println!("One of the proteins does not exist in the graph."),
        Some(PathSearch::NoPath) => println!("No path found between {from} and {to}."),
        Some(PathSearch::Found(found)) => {
            let rendered: Vec<String> = found
                .path
                .iter()
                .filter_map(|id| graph.protein(*id))
                .map(ToString::to_string)
                .collect();
            println!("--- Most Confident Path Result ---");
            println!("Path: {}", rendered.join(" -> "));
            println!("Total Confidence Score: {:.4}", found.confidence);
        }
    }
}

/// Interactive menu over one optional loaded graph.
///
/// All session state lives here and is threaded through the handlers;
/// there are no module-level globals.
struct MenuSession {
    config: PpiConfig,
    graph: Option<EdgeListGraph>,
}

impl MenuSession {
    fn new(config: PpiConfig) -> Self {
        Self {
            config,
            graph: None,
        }
    }

    fn run(&mut self) -> anyhow::Result<()> {
        let stdin = io::stdin();
        loop {
            print_options();
            let Some(choice) = read_prompt(&stdin, "Your Choice (1-7): ")? else {
                // stdin closed; leave like an explicit exit
                println!();
                return Ok(());
            };

            match choice.as_str() {
                "1" => self.handle_load(&stdin)?,
                "2" => self.handle_search(&stdin)?,
                "3" => self.handle_check_interaction(&stdin)?,
                "4" => self.handle_path(&stdin)?,
                "5" => self.handle_metrics(),
                "6" => self.handle_traversal(&stdin)?,
                "7" => {
                    println!("Exiting program...");
                    return Ok(());
                }
                _ => println!("Invalid choice! Please try again."),
            }
            println!("--------------------------------------------------");
        }
    }

    fn loaded_graph(&self) -> Option<&EdgeListGraph> {
        if self.graph.is_none() {
            println!("ERROR: You must load the graph first (Option 1).");
        }
        self.graph.as_ref()
    }

    fn handle_load(&mut self, stdin: &io::Stdin) -> anyhow::Result<()> {
        let answer = read_line(stdin, "Use default file paths? (Y/N): ")?;
        let (info, links) = if answer.eq_ignore_ascii_case("n") {
            (
                PathBuf::from(read_line(stdin, "Protein Info File Path: ")?),
                PathBuf::from(read_line(stdin, "Links File Path: ")?),
            )
        } else {
            (
                self.config.info_path.clone(),
                self.config.links_path.clone(),
            )
        };

        let raw = read_line(stdin, "Confidence Score Threshold (0.0 - 1.0, e.g., 0.7): ")?;
        let threshold = raw.parse().unwrap_or_else(|_| {
            println!(
                "ERROR: Invalid number format! Using default {}.",
                self.config.threshold
            );
            self.config.threshold
        });

        println!("Loading graph, please wait...");
        let started = Instant::now();
        match load_graph(&info, &links, threshold) {
            Ok((graph, report)) => {
                println!("Loading Completed! ({} ms)", started.elapsed().as_millis());
                println!("Total Proteins (Vertices): {}", report.proteins);
                println!("Total Interactions (Edges): {}", report.interactions);
                print_drops(&report);
                self.graph = Some(graph);
            }
            // a failed load keeps whatever graph was loaded before
            Err(err) => println!("ERROR: Failed to load graph: {err}"),
        }
        Ok(())
    }

    fn handle_search(&self, stdin: &io::Stdin) -> anyhow::Result<()> {
        let Some(graph) = self.loaded_graph() else {
            return Ok(());
        };
        let id = read_line(stdin, "Enter Protein ID to search (e.g., 9606.ENSP00000000233): ")?;
        run_search(graph, id.trim(), self.config.neighbor_preview);
        Ok(())
    }

    fn handle_check_interaction(&self, stdin: &io::Stdin) -> anyhow::Result<()> {
        let Some(graph) = self.loaded_graph() else {
            return Ok(());
        };
        let source = read_line(stdin, "Source Protein ID: ")?;
        let destination = read_line(stdin, "Destination Protein ID: ")?;

        let (Some(p1), Some(p2)) = (
            graph.search_protein(source.trim()),
            graph.search_protein(destination.trim()),
        ) else {
            println!("ERROR: One or both proteins do not exist in the graph.");
            return Ok(());
        };

        if graph.has_interaction(p1.id, p2.id) {
            println!(
                "RESULT: YES, interaction EXISTS between {} and {}.",
                p1.accession, p2.accession
            );
        } else {
            println!("RESULT: NO, there is NO direct interaction between these two proteins.");
        }
        Ok(())
    }

    fn handle_path(&self, stdin: &io::Stdin) -> anyhow::Result<()> {
        let Some(graph) = self.loaded_graph() else {
            return Ok(());
        };
        let from = read_line(stdin, "Start Protein ID: ")?;
        let to = read_line(stdin, "Destination Protein ID: ")?;
        run_path(graph, from.trim(), to.trim());
        Ok(())
    }

    fn handle_metrics(&self) {
        let Some(graph) = self.loaded_graph() else {
            return;
        };
        run_metrics(graph, self.config.progress_interval);
    }

    fn handle_traversal(&self, stdin: &io::Stdin) -> anyhow::Result<()> {
        let Some(graph) = self.loaded_graph() else {
            return Ok(());
        };
        let kind = read_line(stdin, "Traversal type (BFS/DFS): ")?;
        let kind = if kind.trim().eq_ignore_ascii_case("dfs") {
            TraversalKind::Dfs
        } else {
            TraversalKind::Bfs
        };
        let start = read_line(stdin, "Start Protein ID: ")?;
        run_traversal(graph, kind, start.trim());
        Ok(())
    }
}

fn print_options() {
    println!();
    println!("=== STRING PPI GRAPH SYSTEM MENU ===");
    println!("1. Load Graph");
    println!("2. Search for Protein");
    println!("3. Check Interaction");
    println!("4. Find Most Confident Path");
    println!("5. Calculate Graph Metrics");
    println!("6. BFS & DFS Traversal");
    println!("7. Exit");
}

/// Prompt and read one trimmed line; `None` means stdin reached EOF.
fn read_prompt(stdin: &io::Stdin, message: &str) -> io::Result<Option<String>> {
    print!("{message}");
    io::stdout().flush()?;

    let mut buffer = String::new();
    let bytes = stdin.lock().read_line(&mut buffer)?;
    if bytes == 0 {
        return Ok(None);
    }
    Ok(Some(buffer.trim().to_string()))
}

/// Prompt variant for follow-up questions: EOF reads as an empty answer.
fn read_line(stdin: &io::Stdin, message: &str) -> io::Result<String> {
    Ok(read_prompt(stdin, message)?.unwrap_or_default())
}
