//! Sudoku instance loader: a grid of `block_edge_size^2` lines, each with
//! that many digits, `0` marking a blank cell.

use crate::csp::constraint::not_equal;
use crate::csp::Csp;
use crate::error::{Error, Result};

pub fn parse(contents: &str, block_edge_size: usize) -> Result<Csp<u32>> {
    let grid_edge_size = block_edge_size * block_edge_size;
    let lines: Vec<&str> = contents.lines().filter(|l| !l.trim().is_empty()).collect();
    if lines.len() < grid_edge_size {
        return Err(Error::Parse(format!(
            "expected {grid_edge_size} grid rows, found {}",
            lines.len()
        )));
    }

    let mut domains = Vec::with_capacity(grid_edge_size * grid_edge_size);
    for row in lines.iter().take(grid_edge_size) {
        let digits: Vec<char> = row.trim().chars().collect();
        if digits.len() < grid_edge_size {
            return Err(Error::Parse(format!(
                "row {row:?} has fewer than {grid_edge_size} cells"
            )));
        }
        for &ch in digits.iter().take(grid_edge_size) {
            let value = ch
                .to_digit(10)
                .ok_or_else(|| Error::Parse(format!("non-digit cell {ch:?}")))?;
            if value == 0 {
                domains.push((1..=grid_edge_size as u32).collect());
            } else {
                domains.push(vec![value]);
            }
        }
    }

    let labels = (0..grid_edge_size * grid_edge_size)
        .map(|i| format!("x{}_{}", i / grid_edge_size, i % grid_edge_size))
        .collect();

    let mut constraints = Vec::new();
    let cell = |row: usize, col: usize| row * grid_edge_size + col;

    for row in 0..grid_edge_size {
        for i in 0..grid_edge_size {
            for j in (i + 1)..grid_edge_size {
                constraints.push((cell(row, i), cell(row, j), not_equal()));
            }
        }
    }
    for col in 0..grid_edge_size {
        for i in 0..grid_edge_size {
            for j in (i + 1)..grid_edge_size {
                constraints.push((cell(i, col), cell(j, col), not_equal()));
            }
        }
    }
    for block_row in 0..block_edge_size {
        for block_col in 0..block_edge_size {
            let cells: Vec<usize> = (0..block_edge_size)
                .flat_map(|r| (0..block_edge_size).map(move |c| (r, c)))
                .map(|(r, c)| {
                    cell(
                        block_row * block_edge_size + r,
                        block_col * block_edge_size + c,
                    )
                })
                .collect();
            for i in 0..cells.len() {
                for j in (i + 1)..cells.len() {
                    constraints.push((cells[i], cells[j], not_equal()));
                }
            }
        }
    }

    Csp::construct(labels, domains, constraints)
}
