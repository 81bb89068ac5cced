//! File loading: parses STRING-style protein-info and interaction-links
//! files into a populated graph.
//!
//! All validation lives here. Scores are normalized into `[0, 1]`,
//! interactions below the caller's threshold are dropped, and edges whose
//! endpoints never appeared in the info file are omitted, so the graph only
//! ever sees already-valid data. Per-line problems are counted and skipped;
//! only an unreadable file aborts a load.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::{debug, info};

use crate::errors::Result;
use crate::graph::{EdgeListGraph, PpiGraph};

/// Per-load statistics reported back to the caller.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct LoadReport {
    /// Proteins registered from the info file.
    pub proteins: usize,
    /// Interactions that survived filtering and entered the graph.
    pub interactions: usize,
    /// Interactions dropped for scoring below the threshold.
    pub below_threshold: usize,
    /// Lines skipped for missing columns or unparsable scores.
    pub malformed_lines: usize,
    /// Interactions dropped because an endpoint was not in the info file.
    pub unknown_endpoints: usize,
}

/// Build a graph from an info file (`accession <tab> preferred_name`) and a
/// links file (`source destination combined_score`, whitespace-separated).
///
/// The first line of each file is treated as a header and skipped.
/// `threshold` is compared against normalized scores; see
/// [`normalize_score`] for the normalization rule.
pub fn load_graph(
    info_path: &Path,
    links_path: &Path,
    threshold: f64,
) -> Result<(EdgeListGraph, LoadReport)> {
    let mut graph = EdgeListGraph::new();
    let mut report = LoadReport::default();

    info!(path = %info_path.display(), "loading protein table");
    let reader = BufReader::new(File::open(info_path)?);
    for (lineno, line) in reader.lines().enumerate() {
        let line = line?;
        if lineno == 0 || line.trim().is_empty() {
            continue;
        }
        let mut cols = line.split('\t');
        let (Some(accession), Some(name)) = (cols.next(), cols.next()) else {
            report.malformed_lines += 1;
            debug!(line = lineno + 1, "info line has fewer than two columns");
            continue;
        };
        graph.add_vertex(accession.trim(), name.trim());
    }
    report.proteins = graph.vertex_count();

    info!(path = %links_path.display(), threshold, "loading interactions");
    let reader = BufReader::new(File::open(links_path)?);
    for (lineno, line) in reader.lines().enumerate() {
        let line = line?;
        if lineno == 0 || line.trim().is_empty() {
            continue;
        }
        let mut cols = line.split_whitespace();
        let (Some(source), Some(destination), Some(raw)) =
            (cols.next(), cols.next(), cols.next())
        else {
            report.malformed_lines += 1;
            debug!(line = lineno + 1, "links line has fewer than three columns");
            continue;
        };
        let Ok(raw_score) = raw.parse::<f64>() else {
            report.malformed_lines += 1;
            debug!(line = lineno + 1, raw, "combined score is not a number");
            continue;
        };

        let score = normalize_score(raw_score);
        if score < threshold {
            report.below_threshold += 1;
            continue;
        }
        if graph.search_protein(source).is_none() || graph.search_protein(destination).is_none() {
            report.unknown_endpoints += 1;
            continue;
        }
        graph.add_edge(source, destination, score);
    }
    report.interactions = graph.edge_count();

    info!(
        proteins = report.proteins,
        interactions = report.interactions,
        below_threshold = report.below_threshold,
        "graph loaded"
    );
    Ok((graph, report))
}

/// Normalize a raw combined score into `[0, 1]`.
///
/// STRING publishes combined scores as integers in `0..=1000`, so anything
/// above 1 is scaled down by 1000; values already at or below 1 pass
/// through unchanged.
pub fn normalize_score(raw: f64) -> f64 {
    if raw > 1.0 {
        raw / 1000.0
    } else {
        raw
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn write_fixtures(info: &str, links: &str) -> (tempfile::TempDir, PathBuf, PathBuf) {
        let dir = tempfile::tempdir().expect("tempdir");
        let info_path = dir.path().join("protein.info.txt");
        let links_path = dir.path().join("protein.links.txt");
        std::fs::write(&info_path, info).expect("write info");
        std::fs::write(&links_path, links).expect("write links");
        (dir, info_path, links_path)
    }

    const INFO: &str = "\
string_protein_id\tpreferred_name\tannotation
P1\tAlpha\tsome annotation
P2\tBeta\t-
P3\tGamma\t-
P4\t\t-
";

    #[test]
    fn loads_vertices_and_filtered_edges() {
        let links = "\
protein1 protein2 combined_score
P1 P2 900
P2 P3 450
P1 P3 700
";
        let (_dir, info, links) = write_fixtures(INFO, links);
        let (graph, report) = load_graph(&info, &links, 0.5).expect("load");

        assert_eq!(report.proteins, 4);
        assert_eq!(report.interactions, 2);
        assert_eq!(report.below_threshold, 1);
        assert_eq!(graph.edge_count(), 2);

        let p1 = graph.search_protein("P1").expect("P1");
        assert_eq!(p1.to_string(), "P1 (Alpha)");
        // P4 has an empty name column and displays as its bare accession.
        assert_eq!(graph.search_protein("P4").expect("P4").to_string(), "P4");
    }

    #[test]
    fn normalizes_integer_scores_and_passes_fractions_through() {
        assert!((normalize_score(950.0) - 0.95).abs() < 1e-12);
        assert!((normalize_score(0.8) - 0.8).abs() < 1e-12);
        assert!((normalize_score(1.0) - 1.0).abs() < 1e-12);
        assert!((normalize_score(0.0) - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn skips_malformed_lines_without_aborting() {
        let links = "\
protein1 protein2 combined_score
P1 P2 not_a_number
P1
P2 P3 800
";
        let (_dir, info, links) = write_fixtures(INFO, links);
        let (graph, report) = load_graph(&info, &links, 0.5).expect("load");
        assert_eq!(report.malformed_lines, 2);
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn drops_edges_with_unknown_endpoints() {
        let links = "\
protein1 protein2 combined_score
P1 P9 900
P9 P2 900
P1 P2 900
";
        let (_dir, info, links) = write_fixtures(INFO, links);
        let (graph, report) = load_graph(&info, &links, 0.5).expect("load");
        assert_eq!(report.unknown_endpoints, 2);
        assert_eq!(graph.edge_count(), 1);
        // The unknown accession never became a vertex either.
        assert!(graph.search_protein("P9").is_none());
    }

    #[test]
    fn threshold_zero_keeps_everything_parsable() {
        let links = "\
protein1 protein2 combined_score
P1 P2 1
P2 P3 0
";
        let (_dir, info, links) = write_fixtures(INFO, links);
        let (_graph, report) = load_graph(&info, &links, 0.0).expect("load");
        assert_eq!(report.interactions, 2);
        assert_eq!(report.below_threshold, 0);
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let (_dir, info, _links) = write_fixtures(INFO, "header\n");
        let missing = info.with_file_name("nope.txt");
        assert!(load_graph(&info, &missing, 0.5).is_err());
    }
}
