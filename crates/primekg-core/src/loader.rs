//! Graph Loader: parses the raw edge list into node and edge tables.
//!
//! The file is read row for row into the edge table; nodes are derived
//! from the edge endpoints afterwards. Any parse problem discards the
//! whole file: callers get either a complete graph or nothing.

use crate::error::{KgError, KgResult};
use crate::table::KnowledgeGraph;
use crate::types::{Edge, EDGE_LIST_FILE, REQUIRED_EDGE_COLUMNS};
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::{error, info, warn};

const PRIMEKG_HOME: &str = "https://github.com/mims-harvard/PrimeKG";

/// Path of the edge list inside a data directory.
pub fn edge_list_path(data_dir: &Path) -> PathBuf {
    data_dir.join(EDGE_LIST_FILE)
}

/// Load the graph from `data_dir`.
///
/// Returns `None` when the edge list is missing or cannot be parsed. The
/// reason is logged; it is never surfaced to query callers.
pub fn load(data_dir: &Path) -> Option<KnowledgeGraph> {
    let path = edge_list_path(data_dir);
    if !path.exists() {
        warn!("PrimeKG data file not found at {}", path.display());
        info!("Download PrimeKG data from: {}", PRIMEKG_HOME);
        return None;
    }

    info!("Loading PrimeKG data from {}...", path.display());
    match read_path(&path) {
        Ok(graph) => {
            info!(
                "Loaded {} nodes and {} edges",
                graph.nodes().len(),
                graph.edges().len()
            );
            Some(graph)
        }
        Err(e) => {
            error!("Error loading PrimeKG data: {}", e);
            info!("PrimeKG data not loaded. Download from: {}", PRIMEKG_HOME);
            None
        }
    }
}

/// Parse an edge-list file.
pub fn read_path(path: &Path) -> KgResult<KnowledgeGraph> {
    let file = std::fs::File::open(path)?;
    from_reader(std::io::BufReader::new(file))
}

/// Parse an edge list from any CSV source with a header row.
pub fn from_reader<R: Read>(reader: R) -> KgResult<KnowledgeGraph> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(reader);

    let layout = ColumnLayout::from_headers(reader.headers()?)?;

    let mut edges = Vec::new();
    for record in reader.records() {
        edges.push(layout.edge(&record?));
    }

    Ok(KnowledgeGraph::from_edges(edges, layout.extra_names))
}

/// Where each required column sits in the header, plus the pass-through columns.
struct ColumnLayout {
    required: [usize; 7],
    extra: Vec<usize>,
    extra_names: Vec<String>,
}

impl ColumnLayout {
    fn from_headers(headers: &csv::StringRecord) -> KgResult<Self> {
        let mut required = [0usize; 7];
        for (slot, name) in required.iter_mut().zip(REQUIRED_EDGE_COLUMNS) {
            *slot = headers
                .iter()
                .position(|h| h.trim() == name)
                .ok_or_else(|| KgError::missing_column(name))?;
        }

        let (extra, extra_names) = headers
            .iter()
            .enumerate()
            .filter(|(idx, _)| !required.contains(idx))
            .map(|(idx, name)| (idx, name.trim().to_string()))
            .unzip();

        Ok(Self {
            required,
            extra,
            extra_names,
        })
    }

    fn edge(&self, record: &csv::StringRecord) -> Edge {
        let field = |idx: usize| record.get(idx).unwrap_or_default().to_string();
        let [x_id, x_type, x_name, relation, y_id, y_type, y_name] = self.required.map(field);
        Edge {
            x_id,
            x_type,
            x_name,
            relation,
            y_id,
            y_type,
            y_name,
            extra: self.extra.iter().map(|&idx| field(idx)).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PRIMEKG_SAMPLE: &str = "\
relation,display_relation,x_index,x_id,x_type,x_name,x_source,y_index,y_id,y_type,y_name,y_source
drug_protein,target,1,DB00945,drug,Aspirin,DrugBank,2,5742,gene/protein,PTGS1,NCBI
drug_protein,target,1,DB00945,drug,Aspirin,DrugBank,3,5743,gene/protein,PTGS2,NCBI
indication,indication,1,DB00945,drug,Aspirin,DrugBank,4,1234,disease,\"headache, tension\",MONDO
";

    #[test]
    fn parses_primekg_layout() {
        let graph = from_reader(PRIMEKG_SAMPLE.as_bytes()).unwrap();
        assert_eq!(graph.edges().len(), 3);
        assert_eq!(graph.nodes().len(), 4);
        assert_eq!(
            graph.edges().extra_columns(),
            ["display_relation", "x_index", "x_source", "y_index", "y_source"]
        );

        let (_, edge) = graph.edges().rows().nth(2).unwrap();
        assert_eq!(edge.relation, "indication");
        assert_eq!(edge.y_name, "headache, tension");
        assert_eq!(edge.extra[0], "indication");
        assert_eq!(edge.extra[4], "MONDO");
    }

    #[test]
    fn missing_column_is_an_error() {
        let csv = "x_id,x_type,x_name,y_id,y_type,y_name\nA,drug,a,B,disease,b\n";
        match from_reader(csv.as_bytes()) {
            Err(KgError::MissingColumn(name)) => assert_eq!(name, "relation"),
            other => panic!("expected MissingColumn, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn ragged_row_rejects_whole_file() {
        let csv = "x_id,x_type,x_name,relation,y_id,y_type,y_name\n\
                   A,drug,a,r,B,disease,b\n\
                   C,drug,c,r\n";
        assert!(matches!(from_reader(csv.as_bytes()), Err(KgError::Csv(_))));
    }

    #[test]
    fn load_without_file_is_not_loaded() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load(dir.path()).is_none());
    }

    #[test]
    fn load_with_corrupt_file_is_not_loaded() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(edge_list_path(dir.path()), "id,name\n1,x\n").unwrap();
        assert!(load(dir.path()).is_none());
    }

    #[test]
    fn load_reads_data_dir() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(edge_list_path(dir.path()), PRIMEKG_SAMPLE).unwrap();
        let graph = load(dir.path()).unwrap();
        assert_eq!(graph.edges().len(), 3);
    }
}
