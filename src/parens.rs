//! Minimal parenthesization.
//!
//! Negation binds tighter than any binary connective, and every binary connective
//! is printed with exactly one pair of parentheses around its full span. Instead of
//! attaching that pair to the binary node, the opening parenthesis is pushed down to
//! the leftmost node of the span and the closing one to the rightmost node, so that
//! every printed token (symbol or connective) carries its parentheses with it. This
//! is what a truth table needs: each column header is a single token, and the
//! parentheses stay glued to the tokens they belong to.
//!
//! The annotation of a node is a signed count: negative values ask for that many
//! `(` before the node's own text, positive values for that many `)` after it.

use std::fmt::{Display, Formatter};

use crate::ast::{Formula, Idx, Node};

/// Compute the parenthesis annotation of every node in `nodes`.
///
/// `nodes` must be an arena rooted at index 0.
pub fn minimize(nodes: &[Node]) -> Vec<i32> {
    let mut parens = vec![0; nodes.len()];
    if !nodes.is_empty() {
        distribute(nodes, &mut parens, 0, 0);
    }
    parens
}

fn distribute(nodes: &[Node], parens: &mut [i32], index: usize, demand: i32) {
    match &nodes[index] {
        Node::Symbol(_) | Node::True | Node::False => parens[index] = demand,
        Node::Not { sub, .. } => {
            if demand < 0 {
                // `(` goes before the negation sign, not between it and its operand.
                parens[index] = demand;
                distribute(nodes, parens, sub.index(), 0);
            } else {
                parens[index] = 0;
                distribute(nodes, parens, sub.index(), demand);
            }
        }
        Node::Binary { lhs, rhs, .. } => {
            parens[index] = 0;
            if demand < 0 {
                distribute(nodes, parens, lhs.index(), demand - 1);
                distribute(nodes, parens, rhs.index(), 1);
            } else {
                distribute(nodes, parens, lhs.index(), -1);
                distribute(nodes, parens, rhs.index(), demand + 1);
            }
        }
    }
}

/// Surround `text` with the parentheses requested by `count`.
pub fn decorate(count: i32, text: &str) -> String {
    let n = count.unsigned_abs() as usize;
    if count < 0 {
        format!("{}{}", "(".repeat(n), text)
    } else {
        format!("{}{}", text, ")".repeat(n))
    }
}

impl Formula {
    /// The node's own text as the user spelled it, with its parentheses.
    pub fn spelled(&self, idx: Idx) -> String {
        let text = match self.node(idx) {
            Node::Symbol(name) => name.as_str(),
            Node::True => "TRUE",
            Node::False => "FALSE",
            Node::Not { spelling, .. } => spelling.as_str(),
            Node::Binary { spelling, .. } => spelling.as_str(),
        };
        decorate(self.paren_count(idx), text)
    }
}

/// Minimally parenthesized formula, using the connectives as the user spelled them.
///
/// Tokens are separated by single spaces, so the output parses back to the same tree.
impl Display for Formula {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for (i, idx) in self.infix().into_iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", self.spelled(idx))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use test_log::test;

    use crate::parser::parse;

    fn print(input: &str) -> String {
        Formula::new(&parse(input).unwrap().unwrap()).to_string()
    }

    #[test]
    fn test_decorate() {
        assert_eq!(decorate(0, "A"), "A");
        assert_eq!(decorate(-2, "A"), "((A");
        assert_eq!(decorate(3, "A"), "A)))");
    }

    #[test]
    fn test_parens() {
        assert_eq!(print("A"), "A");
        assert_eq!(print("A & B"), "(A & B)");
        assert_eq!(print("A & ! B"), "(A & ! B)");
        assert_eq!(print("! A & B"), "(! A & B)");
        assert_eq!(print("! (A & B)"), "! (A & B)");
        assert_eq!(print("! ! A"), "! ! A");
        assert_eq!(print("((! (A & B) | (! A & ! B)) -> ! C)"), "((! (A & B) | (! A & ! B)) -> ! C)");
    }

    #[test]
    fn test_parens_keep_spelling() {
        assert_eq!(
            print("((\\lnot (A \\land B) \\lor (\\lnot A \\land \\lnot B)) \\to \\lnot C)"),
            "((\\lnot (A \\land B) \\lor (\\lnot A \\land \\lnot B)) \\to \\lnot C)"
        );
        assert_eq!(print("TRUE -> false"), "(TRUE -> FALSE)");
    }

    #[test]
    fn test_annotations() {
        let formula = Formula::new(&parse("((! (A & B) | (! A & ! B)) -> ! C)").unwrap().unwrap());
        let counts: Vec<i32> = formula.infix().into_iter().map(|i| formula.paren_count(i)).collect();
        //                  !   A  &  B  |  !  A  &  !  B  -> ! C
        assert_eq!(counts, [-2, -1, 0, 1, 0, -1, 0, 0, 0, 2, 0, 0, 1]);
    }

    #[test]
    fn test_nested_left_chain() {
        assert_eq!(print("(((A & B) & C) & D)"), "(((A & B) & C) & D)");
        assert_eq!(print("(A & (B & (C & D)))"), "(A & (B & (C & D)))");
    }
}
