//! Plain-text table rendering for query results.
//!
//! Output is a column-aligned table whose first column is the row's
//! position in its source table.

use crate::table::EdgeTable;
use crate::types::{Edge, Node, NODE_COLUMNS, REQUIRED_EDGE_COLUMNS};

/// A column-aligned text table.
#[derive(Debug, Clone)]
pub struct TextTable {
    headers: Vec<String>,
    rows: Vec<(usize, Vec<String>)>,
}

impl TextTable {
    pub fn new<S: Into<String>>(headers: impl IntoIterator<Item = S>) -> Self {
        Self {
            headers: headers.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    /// Append a row. Missing trailing cells render empty.
    pub fn push<S: Into<String>>(&mut self, position: usize, cells: impl IntoIterator<Item = S>) {
        self.rows
            .push((position, cells.into_iter().map(Into::into).collect()));
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn render(&self) -> String {
        let positions: Vec<String> = self.rows.iter().map(|(p, _)| p.to_string()).collect();
        let index_width = positions.iter().map(|p| p.len()).max().unwrap_or(0);

        let widths: Vec<usize> = self
            .headers
            .iter()
            .enumerate()
            .map(|(col, header)| {
                self.rows
                    .iter()
                    .filter_map(|(_, cells)| cells.get(col))
                    .map(|cell| cell.chars().count())
                    .chain(std::iter::once(header.chars().count()))
                    .max()
                    .unwrap_or(0)
            })
            .collect();

        let mut lines = Vec::with_capacity(self.rows.len() + 1);
        lines.push(line(" ".repeat(index_width), &self.headers, &widths));
        for ((_, cells), position) in self.rows.iter().zip(positions) {
            lines.push(line(
                format!("{:>width$}", position, width = index_width),
                cells,
                &widths,
            ));
        }
        lines.join("\n")
    }
}

fn line(lead: String, cells: &[String], widths: &[usize]) -> String {
    let mut out = lead;
    for (col, width) in widths.iter().enumerate() {
        let cell = cells.get(col).map(String::as_str).unwrap_or("");
        out.push_str("  ");
        out.push_str(cell);
        let pad = width.saturating_sub(cell.chars().count());
        out.extend(std::iter::repeat(' ').take(pad));
    }
    out.trim_end().to_string()
}

/// Render node rows with the node-table columns.
pub fn node_rows(rows: &[(usize, &Node)]) -> String {
    let mut table = TextTable::new(NODE_COLUMNS);
    for (pos, node) in rows {
        table.push(*pos, node.fields());
    }
    table.render()
}

/// Render edge rows: required columns first, then the pass-through columns.
pub fn edge_rows(edges: &EdgeTable, rows: &[(usize, &Edge)]) -> String {
    let headers = REQUIRED_EDGE_COLUMNS
        .iter()
        .map(|h| h.to_string())
        .chain(edges.extra_columns().iter().cloned());
    let mut table = TextTable::new(headers);
    for (pos, edge) in rows {
        let cells = edge
            .required_fields()
            .into_iter()
            .map(str::to_string)
            .chain(edge.extra.iter().cloned());
        table.push(*pos, cells);
    }
    table.render()
}
