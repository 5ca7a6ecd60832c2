//! Truth table rendering.
//!
//! A table has one column per symbol followed by one column per node of the
//! formula, in reading order. The header of a node column is the node's own token
//! (symbol or connective) with the parentheses assigned to it by
//! [`parens`][crate::parens], so reading the header left to right spells the
//! formula. Each row shows one valuation and the truth value of every node under it.
//!
//! # Examples
//!
//! ```
//! use ttgen_rs::parser::parse;
//! use ttgen_rs::table::{render_table, Format, RenderOptions};
//!
//! let expr = parse("A -> B").unwrap().unwrap();
//! let options = RenderOptions {
//!     format: Format::Text,
//!     true_symbol: "T".to_string(),
//!     false_symbol: "F".to_string(),
//!     ..RenderOptions::default()
//! };
//! let table = render_table(&expr, &options).unwrap();
//! assert_eq!(table.lines().next(), Some("A B | (A → B)"));
//! ```

use std::fmt::Write as _;

use log::debug;

use crate::ast::{Expr, Formula, Idx, Node};
use crate::connective;
use crate::error::TableError;
use crate::eval::row_count;
use crate::parens::decorate;

/// Largest number of symbols a table can ever have (rows are indexed by `u64`).
pub const MAX_SYMBOLS: usize = 63;

/// Output format of a rendered table.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
pub enum Format {
    /// LaTeX `array` environment for math mode.
    #[default]
    Latex,
    /// Aligned plain text with Unicode connectives.
    Text,
}

/// Options controlling table generation.
///
/// # Examples
///
/// ```
/// use ttgen_rs::table::RenderOptions;
///
/// let options = RenderOptions {
///     reverse_rows: true,
///     true_symbol: "T".to_string(),
///     false_symbol: "F".to_string(),
///     ..RenderOptions::default()
/// };
/// assert!(!options.reverse_columns);
/// ```
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct RenderOptions {
    /// Map the first symbol column to the most significant bit of the row index
    /// (default: false, first column is the least significant bit)
    pub reverse_columns: bool,
    /// Invert every symbol value, so rows run from all-true to all-false (default: false)
    pub reverse_rows: bool,
    /// Cell text for true (default: "1")
    pub true_symbol: String,
    /// Cell text for false (default: "0")
    pub false_symbol: String,
    /// Output format (default: LaTeX)
    pub format: Format,
    /// Largest accepted number of symbols (default: 16, capped at [`MAX_SYMBOLS`])
    pub max_symbols: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            reverse_columns: false,
            reverse_rows: false,
            true_symbol: "1".to_string(),
            false_symbol: "0".to_string(),
            format: Format::Latex,
            max_symbols: 16,
        }
    }
}

impl RenderOptions {
    pub fn display(&self, value: bool) -> &str {
        if value {
            &self.true_symbol
        } else {
            &self.false_symbol
        }
    }
}

impl Formula {
    fn token_text(&self, idx: Idx, format: Format) -> &str {
        let glyph = match format {
            Format::Latex => connective::latex,
            Format::Text => connective::unicode,
        };
        match self.node(idx) {
            Node::Symbol(name) => name.as_str(),
            Node::True => glyph("\\top"),
            Node::False => glyph("\\bot"),
            Node::Not { spelling, .. } => glyph(spelling),
            Node::Binary { spelling, .. } => glyph(spelling),
        }
    }

    /// Header cells: every symbol, then every node in reading order.
    pub fn header(&self, format: Format) -> Vec<String> {
        let mut cells = self.symbols.clone();
        for idx in self.infix() {
            cells.push(decorate(self.paren_count(idx), self.token_text(idx, format)));
        }
        cells
    }

    /// Cells of table row `row`: the value of every symbol, then the value of every node.
    ///
    /// Evaluates the formula, so the previous truth values are overwritten.
    pub fn row(&mut self, row: u64, options: &RenderOptions) -> Vec<String> {
        let valuation = self.evaluate_row(row, options);
        let mut cells: Vec<String> = self
            .symbols
            .iter()
            .map(|name| options.display(valuation[name]).to_string())
            .collect();
        for idx in self.infix() {
            cells.push(options.display(self.value(idx)).to_string());
        }
        cells
    }

    /// Render the complete truth table.
    pub fn table(&mut self, options: &RenderOptions) -> Result<String, TableError> {
        let count = self.symbols.len();
        let max = options.max_symbols.min(MAX_SYMBOLS);
        let rows = match row_count(count) {
            Some(rows) if count <= max => rows,
            _ => return Err(TableError::TooManySymbols { count, max }),
        };
        debug!(
            "table: {} symbols, {} nodes, {} rows, {:?}",
            count,
            self.len(),
            rows,
            options.format
        );

        match options.format {
            Format::Latex => self.latex_table(rows, options),
            Format::Text => self.text_table(rows, options),
        }
    }

    fn latex_table(&mut self, rows: u64, options: &RenderOptions) -> Result<String, TableError> {
        let line = |cells: &[String]| format!("    {} ", cells.join(" & "));
        let count = self.symbols.len();

        let mut out = String::new();
        let columns = if count == 0 {
            "c".repeat(self.len())
        } else {
            format!("{}|{}", "c".repeat(count), "c".repeat(self.len()))
        };
        writeln!(out, "\\begin{{array}}{{{}}}", columns)?;
        writeln!(out, "{}\\\\ \\hline", line(&self.header(Format::Latex)))?;
        for row in 0..rows {
            let cells = self.row(row, options);
            if row + 1 < rows {
                writeln!(out, "{}\\\\", line(&cells))?;
            } else {
                writeln!(out, "{}", line(&cells))?;
            }
        }
        writeln!(out, "\\end{{array}}")?;
        Ok(out)
    }

    fn text_table(&mut self, rows: u64, options: &RenderOptions) -> Result<String, TableError> {
        let header = self.header(Format::Text);
        let count = self.symbols.len();
        let value_width = options
            .true_symbol
            .chars()
            .count()
            .max(options.false_symbol.chars().count());
        let widths: Vec<usize> = header.iter().map(|h| h.chars().count().max(value_width)).collect();

        let line = |cells: &[String]| -> String {
            let padded: Vec<String> = cells
                .iter()
                .zip(&widths)
                .map(|(cell, &width)| format!("{:^width$}", cell, width = width))
                .collect();
            let (symbols, nodes) = padded.split_at(count);
            let line = if symbols.is_empty() {
                nodes.join(" ")
            } else {
                format!("{} | {}", symbols.join(" "), nodes.join(" "))
            };
            line.trim_end().to_string()
        };

        let mut out = String::new();
        writeln!(out, "{}", line(&header))?;
        let dashes: Vec<String> = widths.iter().map(|&w| "-".repeat(w)).collect();
        let (symbols, nodes) = dashes.split_at(count);
        if symbols.is_empty() {
            writeln!(out, "{}", nodes.join("-"))?;
        } else {
            writeln!(out, "{}-+-{}", symbols.join("-"), nodes.join("-"))?;
        }
        for row in 0..rows {
            let cells = self.row(row, options);
            writeln!(out, "{}", line(&cells))?;
        }
        Ok(out)
    }
}

/// Render the truth table of `expr`.
pub fn render_table(expr: &Expr, options: &RenderOptions) -> Result<String, TableError> {
    Formula::new(expr).table(options)
}
