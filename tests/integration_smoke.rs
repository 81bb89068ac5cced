//! End-to-end smoke test: write real data files, load them through the
//! loader, and drive every algorithm group against the resulting graph.

use std::path::PathBuf;

use ppinet::algorithms::{bfs, dfs, most_confident_path, PathSearch};
use ppinet::graph::{GraphMetrics, PpiGraph};
use ppinet::loader::load_graph;
use ppinet::ProteinId;

const INFO: &str = "\
string_protein_id\tpreferred_name\tannotation
A\tAlpha\t-
B\tBeta\t-
C\tGamma\t-
D\tDelta\t-
E\tEpsilon\t-
";

// Spec-scenario network: the three-hop product 0.9 * 0.8 * 0.7 beats the
// two-hop 0.5 * 0.7. One edge falls below the threshold, one line is
// malformed, and one references an accession absent from the info file.
const LINKS: &str = "\
protein1 protein2 combined_score
A B 900
B C 800
A C 500
C D 700
D E 300
A B not_a_number
A ZZZ 900
";

fn load_fixture() -> (ppinet::EdgeListGraph, ppinet::loader::LoadReport) {
    let dir = tempfile::tempdir().expect("tempdir");
    let info: PathBuf = dir.path().join("protein.info.txt");
    let links: PathBuf = dir.path().join("protein.links.txt");
    std::fs::write(&info, INFO).expect("write info");
    std::fs::write(&links, LINKS).expect("write links");
    load_graph(&info, &links, 0.4).expect("load")
}

fn accessions(graph: &ppinet::EdgeListGraph, ids: &[ProteinId]) -> Vec<String> {
    ids.iter()
        .map(|id| graph.protein(*id).expect("vertex").accession.clone())
        .collect()
}

#[test]
fn smoke_load_and_analyze() {
    let (graph, report) = load_fixture();

    // Loader accounting
    assert_eq!(report.proteins, 5);
    assert_eq!(report.interactions, 4);
    assert_eq!(report.below_threshold, 1);
    assert_eq!(report.malformed_lines, 1);
    assert_eq!(report.unknown_endpoints, 1);

    // Store queries
    let alpha = graph.search_protein("A").expect("A exists");
    assert_eq!(alpha.to_string(), "A (Alpha)");
    assert!(graph.search_protein("ZZZ").is_none());

    let a = alpha.id;
    let b = graph.search_protein("B").expect("B exists").id;
    assert!(graph.has_interaction(a, b));
    assert!(!graph.has_interaction(b, a));

    // Traversals
    let bfs_run = bfs(&graph, "A").expect("known start");
    assert_eq!(accessions(&graph, &bfs_run.order), ["A", "B", "C", "D"]);

    let dfs_run = dfs(&graph, "A").expect("known start");
    assert_eq!(accessions(&graph, &dfs_run.order), ["A", "B", "C", "D"]);
    assert_eq!(dfs_run.visited_count(), 4);

    assert!(bfs(&graph, "ZZZ").is_none());

    // Most confident path
    let outcome = most_confident_path(&graph, "A", "D").expect("known endpoints");
    let PathSearch::Found(found) = outcome else {
        panic!("expected a path, got {outcome:?}");
    };
    assert_eq!(accessions(&graph, &found.path), ["A", "B", "C", "D"]);
    assert!((found.confidence - 0.504).abs() < 1e-12);

    // E kept its vertex but lost its only inbound edge to the threshold.
    assert_eq!(
        most_confident_path(&graph, "A", "E"),
        Some(PathSearch::NoPath)
    );

    // Metrics
    let metrics = GraphMetrics::compute(&graph);
    assert_eq!(metrics.vertex_count, 5);
    assert_eq!(metrics.edge_count, 4);
    assert!((metrics.avg_out_degree - 0.8).abs() < 1e-12);
    assert!((metrics.reciprocity - 0.0).abs() < f64::EPSILON);
    assert_eq!(metrics.diameter, 2);
}

#[test]
fn smoke_progress_hook_reports_during_metrics() {
    let (graph, _) = load_fixture();
    let mut ticks = 0;
    let _ = GraphMetrics::compute_with_progress(&graph, 2, |_| ticks += 1);
    // 5 vertices at a cadence of 2 → callbacks after 2 and 4.
    assert_eq!(ticks, 2);
}
