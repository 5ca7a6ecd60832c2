//! Symbol extraction, valuation enumeration and evaluation.
//!
//! A formula with `n` distinct symbols has `2^n` rows. Row `r` assigns to the
//! symbol in column `i` the `i`-th bit of `r` (or the `(n-1-i)`-th bit when
//! [`reverse_columns`][RenderOptions::reverse_columns] is set), inverted when
//! [`reverse_rows`][RenderOptions::reverse_rows] is set. Both flags only
//! permute the rows; every assignment is enumerated exactly once.

use std::collections::HashMap;

use log::debug;

use crate::ast::{Expr, Formula, Node};
use crate::connective::{Nullary, Unary};
use crate::table::RenderOptions;

/// Assignment of truth values to symbol names.
pub type Valuation = HashMap<String, bool>;

/// Sorted, duplicate-free names of all symbols in `expr`.
pub fn symbols(expr: &Expr) -> Vec<String> {
    expr.symbols()
}

/// Number of rows in the truth table over `symbols` symbols.
///
/// Returns `None` if the count does not fit into `u64`.
pub fn row_count(symbols: usize) -> Option<u64> {
    if symbols < 64 {
        Some(1 << symbols)
    } else {
        None
    }
}

/// Valuation of `symbols` for the given `row`.
pub fn valuation(symbols: &[String], row: u64, options: &RenderOptions) -> Valuation {
    let n = symbols.len();
    symbols
        .iter()
        .enumerate()
        .map(|(i, name)| {
            let bit = if options.reverse_columns { n - 1 - i } else { i };
            let set = row.checked_shr(bit as u32).is_some_and(|r| r & 1 == 1);
            (name.clone(), set != options.reverse_rows)
        })
        .collect()
}

impl Formula {
    /// Evaluate every node under `valuation`, overwriting the previous results.
    ///
    /// Read the result with [`truth_value`][Formula::truth_value] or
    /// [`value`][Formula::value]. Unassigned symbols are false.
    pub fn evaluate(&mut self, valuation: &Valuation) {
        // Children always have larger indices than their parent,
        // so a reverse sweep sees every operand before its connective.
        for i in (0..self.nodes.len()).rev() {
            let value = match &self.nodes[i] {
                Node::Symbol(name) => valuation.get(name).copied().unwrap_or(false),
                Node::True => Nullary::True.value(),
                Node::False => Nullary::False.value(),
                Node::Not { sub, .. } => Unary::Not.apply(self.truth[sub.index()]),
                Node::Binary { op, lhs, rhs, .. } => op.apply(self.truth[lhs.index()], self.truth[rhs.index()]),
            };
            self.truth[i] = value;
        }
    }

    /// Evaluate the formula for table row `row`.
    pub fn evaluate_row(&mut self, row: u64, options: &RenderOptions) -> Valuation {
        let valuation = valuation(&self.symbols, row, options);
        debug!("evaluate_row(row = {}) with {:?}", row, valuation);
        self.evaluate(&valuation);
        valuation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::collections::HashSet;

    use test_log::test;

    use crate::parser::parse;

    fn formula(input: &str) -> Formula {
        Formula::new(&parse(input).unwrap().unwrap())
    }

    fn names(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_symbols() {
        let symbols = |s| symbols(&parse(s).unwrap().unwrap());
        assert_eq!(symbols("A"), vec!["A"]);
        assert_eq!(symbols("A & B"), vec!["A", "B"]);
        assert_eq!(symbols("A & (B | C)"), vec!["A", "B", "C"]);
        assert_eq!(symbols("A \\land (\\lnot B \\lor C)"), vec!["A", "B", "C"]);
        assert_eq!(symbols("B & (! A | C)"), vec!["A", "B", "C"]);
        assert_eq!(symbols("B & (! A | B)"), vec!["A", "B"]);
        assert_eq!(symbols("A & A"), vec!["A"]);
        assert_eq!(symbols("(TRUE | p) -> FALSE"), vec!["p"]);
    }

    #[test]
    fn test_valuation() {
        let syms = names(&["A", "B", "C"]);
        let options = RenderOptions::default();

        let v = valuation(&syms, 0, &options);
        assert_eq!((v["A"], v["B"], v["C"]), (false, false, false));
        let v = valuation(&syms, 2, &options);
        assert_eq!((v["A"], v["B"], v["C"]), (false, true, false));
        let v = valuation(&syms, 7, &options);
        assert_eq!((v["A"], v["B"], v["C"]), (true, true, true));
    }

    #[test]
    fn test_valuation_reversed() {
        let syms = names(&["A", "B", "C"]);

        let options = RenderOptions {
            reverse_columns: true,
            ..RenderOptions::default()
        };
        let v = valuation(&syms, 1, &options);
        assert_eq!((v["A"], v["B"], v["C"]), (false, false, true));

        let options = RenderOptions {
            reverse_rows: true,
            ..RenderOptions::default()
        };
        let v = valuation(&syms, 1, &options);
        assert_eq!((v["A"], v["B"], v["C"]), (false, true, true));

        let options = RenderOptions {
            reverse_columns: true,
            reverse_rows: true,
            ..RenderOptions::default()
        };
        let v = valuation(&syms, 0, &options);
        assert_eq!((v["A"], v["B"], v["C"]), (true, true, true));
        let v = valuation(&syms, 1, &options);
        assert_eq!((v["A"], v["B"], v["C"]), (true, true, false));
    }

    #[test]
    fn test_valuation_complete() {
        let syms = names(&["p", "q", "r", "s"]);
        for (reverse_columns, reverse_rows) in [(false, false), (true, false), (false, true), (true, true)] {
            let options = RenderOptions {
                reverse_columns,
                reverse_rows,
                ..RenderOptions::default()
            };
            let rows: HashSet<Vec<bool>> = (0..16)
                .map(|row| {
                    let v = valuation(&syms, row, &options);
                    syms.iter().map(|s| v[s]).collect()
                })
                .collect();
            assert_eq!(rows.len(), 16);
        }
    }

    #[test]
    fn test_row_count() {
        assert_eq!(row_count(0), Some(1));
        assert_eq!(row_count(3), Some(8));
        assert_eq!(row_count(63), Some(1 << 63));
        assert_eq!(row_count(64), None);
    }

    fn check(input: &str, expected: impl Fn(&Valuation) -> bool) {
        let mut f = formula(input);
        let syms = f.symbols().to_vec();
        let options = RenderOptions::default();
        for row in 0..row_count(syms.len()).unwrap() {
            let v = valuation(&syms, row, &options);
            f.evaluate(&v);
            assert_eq!(f.truth_value(), expected(&v), "{} under {:?}", input, v);
        }
    }

    #[test]
    fn test_evaluate_connectives() {
        check("A", |v| v["A"]);
        check("\\lnot A", |v| !v["A"]);
        check("A & B", |v| v["A"] && v["B"]);
        check("A | B", |v| v["A"] || v["B"]);
        check("A -> B", |v| !v["A"] || v["B"]);
        check("A <-> B", |v| v["A"] == v["B"]);
        check("A \\mid B", |v| !(v["A"] && v["B"]));
        check("A \\downarrow B", |v| !(v["A"] || v["B"]));
        check("A XOR B", |v| v["A"] != v["B"]);
        check("TRUE", |_| true);
        check("(FALSE | A)", |v| v["A"]);
    }

    #[test]
    fn test_evaluate_literal_cases() {
        let v = |pairs: &[(&str, bool)]| -> Valuation { pairs.iter().map(|&(k, b)| (k.to_string(), b)).collect() };

        let mut f = formula("(A & B)");
        f.evaluate(&v(&[("A", true), ("B", false)]));
        assert!(!f.truth_value());

        let mut f = formula("(A -> B)");
        f.evaluate(&v(&[("A", true), ("B", false)]));
        assert!(!f.truth_value());
        f.evaluate(&v(&[("A", false), ("B", false)]));
        assert!(f.truth_value());

        let mut f = formula("! A");
        f.evaluate(&v(&[("A", true)]));
        assert!(!f.truth_value());
    }

    #[test]
    fn test_tautologies() {
        check("((A -> (B -> C)) -> ((A -> B) -> (A -> C)))", |_| true);
        check("(A \\to B) \\to (\\lnot B \\to \\lnot A)", |_| true);
        check("(A | ! A)", |_| true);
    }

    #[test]
    fn test_evaluate_overwrites() {
        let mut f = formula("(A & ! B)");
        let syms = f.symbols().to_vec();
        let options = RenderOptions::default();

        f.evaluate(&valuation(&syms, 1, &options));
        let first: Vec<bool> = f.infix().into_iter().map(|i| f.value(i)).collect();
        assert_eq!(first, vec![true, true, true, false]);

        f.evaluate(&valuation(&syms, 2, &options));
        let second: Vec<bool> = f.infix().into_iter().map(|i| f.value(i)).collect();
        assert_eq!(second, vec![false, false, false, true]);
    }
}
