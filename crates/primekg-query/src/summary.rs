//! Summary Reporter: schema description and table statistics.

use crate::engine::{QueryEngine, NOT_LOADED};
use primekg_core::types::NODE_TYPES;
use std::collections::HashMap;

/// Number of relation types listed in the statistics.
const TOP_RELATIONS: usize = 20;

/// Static description of the PrimeKG taxonomy. Available without data.
pub fn schema() -> String {
    let node_types: String = NODE_TYPES.iter().map(|t| format!("- {}\n", t)).collect();
    format!(
        "PrimeKG Schema:\n\
         \n\
         Node Types:\n\
         {node_types}\
         \n\
         Relationship Types:\n\
         - drug-protein interactions\n\
         - gene-disease associations\n\
         - gene-gene interactions\n\
         - protein-pathway associations\n\
         - disease-phenotype associations\n\
         - drug-disease indications\n\
         - and many more...\n\
         \n\
         Data Sources: 20+ biomedical databases including:\n\
         - DrugBank, PRIMEKG, CTD, DisGeNET, GO, Reactome, SIDER, etc.\n\
         \n\
         Total: ~129,375 nodes and ~8+ million relationships\n"
    )
}

/// Row counts plus node-type and top relation-type frequencies.
///
/// Computed from the tables on every call.
pub fn statistics(engine: &QueryEngine) -> String {
    let Some(graph) = engine.graph() else {
        return NOT_LOADED.to_string();
    };

    let node_types = value_counts(graph.nodes().rows().map(|(_, n)| n.node_type.as_str()));
    let mut relations = value_counts(graph.edges().rows().map(|(_, e)| e.relation.as_str()));
    relations.truncate(TOP_RELATIONS);

    format!(
        "PrimeKG Statistics:\n\
         \n\
         Nodes: {}\n\
         Edges: {}\n\
         \n\
         Node Type Distribution:\n\
         {}\n\
         \n\
         Relationship Type Distribution:\n\
         {}\n",
        group_thousands(graph.nodes().len()),
        group_thousands(graph.edges().len()),
        frequency_table("node_type", &node_types),
        frequency_table("relation", &relations),
    )
}

/// Distinct values with counts, most frequent first; ties keep first-seen order.
fn value_counts<'a>(values: impl Iterator<Item = &'a str>) -> Vec<(&'a str, usize)> {
    let mut slots: HashMap<&str, usize> = HashMap::new();
    let mut counts: Vec<(&str, usize)> = Vec::new();
    for value in values {
        match slots.get(value) {
            Some(&slot) => counts[slot].1 += 1,
            None => {
                slots.insert(value, counts.len());
                counts.push((value, 1));
            }
        }
    }
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
}

fn frequency_table(label: &str, counts: &[(&str, usize)]) -> String {
    let name_width = counts
        .iter()
        .map(|(name, _)| name.chars().count())
        .chain(std::iter::once(label.len()))
        .max()
        .unwrap_or(0);
    let count_width = counts
        .iter()
        .map(|(_, n)| n.to_string().len())
        .max()
        .unwrap_or(0);

    let mut lines = vec![label.to_string()];
    for (name, n) in counts {
        let pad = name_width - name.chars().count();
        lines.push(format!(
            "{}{}    {:>width$}",
            name,
            " ".repeat(pad),
            n,
            width = count_width
        ));
    }
    lines.join("\n")
}

/// 1234567 -> "1,234,567".
fn group_thousands(n: usize) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
