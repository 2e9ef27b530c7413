//! Graph-coloring instance loader: the DIMACS-ish edge-list format used by
//! the standard coloring benchmark suites.
//!
//! ```text
//! c a comment line
//! p edge 4 5
//! e 1 2
//! e 1 3
//! ```
//! A header `p edge N M` declares `N` nodes and `M` edges; each `e u v` line
//! is an undirected edge with 1-based node indices.

use crate::csp::constraint::not_equal;
use crate::csp::Csp;
use crate::error::{Error, Result};

/// A parsed graph, not yet bound to a particular number of colors — the
/// optimization driver rebuilds the CSP once per candidate bound.
pub struct ColoringInstance {
    pub num_nodes: usize,
    pub edges: Vec<(usize, usize)>,
    pub max_degree: usize,
}

pub fn parse(contents: &str) -> Result<ColoringInstance> {
    let mut lines = contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('c'));

    let header = lines
        .next()
        .ok_or_else(|| Error::Parse("missing 'p edge N M' header".into()))?;
    let mut header_fields = header.split_whitespace();
    match (header_fields.next(), header_fields.next()) {
        (Some("p"), Some("edge")) => {}
        _ => return Err(Error::Parse(format!("expected 'p edge N M', got {header:?}"))),
    }
    let num_nodes: usize = header_fields
        .next()
        .ok_or_else(|| Error::Parse("missing node count in header".into()))?
        .parse()
        .map_err(|_| Error::Parse("node count is not an integer".into()))?;
    let num_edges: usize = header_fields
        .next()
        .ok_or_else(|| Error::Parse("missing edge count in header".into()))?
        .parse()
        .map_err(|_| Error::Parse("edge count is not an integer".into()))?;

    let mut degrees = vec![0usize; num_nodes];
    let mut edges = Vec::with_capacity(num_edges);
    for _ in 0..num_edges {
        let line = lines
            .next()
            .ok_or_else(|| Error::Parse("fewer edge lines than the header declared".into()))?;
        let mut fields = line.split_whitespace();
        if fields.next() != Some("e") {
            return Err(Error::Parse(format!("expected an 'e u v' line, got {line:?}")));
        }
        let u: usize = fields
            .next()
            .ok_or_else(|| Error::Parse("edge line missing first node".into()))?
            .parse()
            .map_err(|_| Error::Parse("edge endpoint is not an integer".into()))?;
        let v: usize = fields
            .next()
            .ok_or_else(|| Error::Parse("edge line missing second node".into()))?
            .parse()
            .map_err(|_| Error::Parse("edge endpoint is not an integer".into()))?;
        let (u, v) = (u - 1, v - 1);
        degrees[u] += 1;
        degrees[v] += 1;
        edges.push((u, v));
    }

    Ok(ColoringInstance {
        num_nodes,
        edges,
        max_degree: degrees.into_iter().max().unwrap_or(0),
    })
}

impl ColoringInstance {
    /// Builds the CSP for coloring this graph with exactly `num_colors`
    /// colors (labeled `0..num_colors`).
    pub fn build(&self, num_colors: usize) -> Result<Csp<u32>> {
        let labels = (0..self.num_nodes).map(|i| format!("n{i}")).collect();
        let domains = vec![(0..num_colors as u32).collect(); self.num_nodes];
        let constraints = self
            .edges
            .iter()
            .map(|&(u, v)| (u, v, not_equal()))
            .collect();
        Csp::construct(labels, domains, constraints)
    }
}
