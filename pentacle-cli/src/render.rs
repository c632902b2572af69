//! Text rendering for classification grids.

use pentacle_core::{Grid, Pentagram};
use serde::Serialize;

/// Hex-square rendering configuration
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Columns per cell: the digit plus `spacing - 1` spaces
    pub spacing: usize,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self { spacing: 2 }
    }
}

const HEX_DIGITS: &[u8; 16] = b"0123456789ABCDEF";

pub fn hex_digit(value: u8) -> char {
    HEX_DIGITS[(value % 16) as usize] as char
}

/// Render a grid as a square of hex digits, one line per row.
///
/// Every cell is followed by `spacing - 1` spaces, and every line by one more space.
pub fn render_hex(grid: &Grid, config: &RenderConfig) -> String {
    let padding = config.spacing.saturating_sub(1);
    let mut out = String::with_capacity(grid.side() * (grid.side() * config.spacing.max(1) + 2));
    for row in grid.rows() {
        for &cell in row {
            out.push(hex_digit(cell));
            out.extend(std::iter::repeat(' ').take(padding));
        }
        out.push_str(" \n");
    }
    out
}

#[derive(Serialize)]
struct Report<'a> {
    pentagram: &'a Pentagram,
    grid: &'a Grid,
}

/// Render the pentagram and its grid as pretty-printed JSON.
pub fn render_json(pentagram: &Pentagram, grid: &Grid) -> serde_json::Result<String> {
    let mut json = serde_json::to_string_pretty(&Report { pentagram, grid })?;
    json.push('\n');
    Ok(json)
}
