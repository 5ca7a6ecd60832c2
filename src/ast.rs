//! Formula syntax trees.
//!
//! A parsed formula is an owned tree, [`Expr`]. For evaluation and rendering it is
//! flattened into a [`Formula`]: an arena of [`Node`]s addressed by [`Idx`], plus
//! side tables holding per-node annotations (truth values and parenthesis counts).
//! The parsed tree itself is never mutated.

use std::collections::VecDeque;

use crate::connective::{Binary, Nullary, Unary};
use crate::eval::Valuation;

#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub enum Expr {
    Symbol(String),
    True,
    False,
    /// Negation. `spelling` is the connective as the user wrote it.
    Not { spelling: String, sub: Box<Expr> },
    /// Binary connective. `spelling` is the connective as the user wrote it.
    Binary {
        op: Binary,
        spelling: String,
        lhs: Box<Expr>,
        rhs: Box<Expr>,
    },
}

impl Expr {
    pub fn symbol(name: impl Into<String>) -> Self {
        Expr::Symbol(name.into())
    }

    pub fn not(spelling: impl Into<String>, sub: Self) -> Self {
        Expr::Not {
            spelling: spelling.into(),
            sub: Box::new(sub),
        }
    }

    pub fn binary(op: Binary, spelling: impl Into<String>, lhs: Self, rhs: Self) -> Self {
        Expr::Binary {
            op,
            spelling: spelling.into(),
            lhs: Box::new(lhs),
            rhs: Box::new(rhs),
        }
    }

    /// Sorted, duplicate-free names of all symbols in the tree.
    pub fn symbols(&self) -> Vec<String> {
        let mut names = Vec::new();
        self.collect_symbols(&mut names);
        names.sort_unstable();
        names.dedup();
        names.into_iter().map(str::to_owned).collect()
    }

    fn collect_symbols<'a>(&'a self, names: &mut Vec<&'a str>) {
        match self {
            Expr::Symbol(name) => names.push(name),
            Expr::True | Expr::False => {}
            Expr::Not { sub, .. } => sub.collect_symbols(names),
            Expr::Binary { lhs, rhs, .. } => {
                lhs.collect_symbols(names);
                rhs.collect_symbols(names);
            }
        }
    }

    /// Evaluate the tree under `valuation`. Unassigned symbols are false.
    pub fn evaluate(&self, valuation: &Valuation) -> bool {
        match self {
            Expr::Symbol(name) => valuation.get(name).copied().unwrap_or(false),
            Expr::True => Nullary::True.value(),
            Expr::False => Nullary::False.value(),
            Expr::Not { sub, .. } => Unary::Not.apply(sub.evaluate(valuation)),
            Expr::Binary { op, lhs, rhs, .. } => op.apply(lhs.evaluate(valuation), rhs.evaluate(valuation)),
        }
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Idx(usize);

impl Idx {
    pub fn index(self) -> usize {
        self.0
    }
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Node<I = Idx> {
    Symbol(String),
    True,
    False,
    Not {
        spelling: String,
        sub: I,
    },
    Binary {
        op: Binary,
        spelling: String,
        lhs: I,
        rhs: I,
    },
}

impl<A> Node<A> {
    #[inline(always)]
    pub fn fmap<B, F>(self, mut f: F) -> Node<B>
    where
        F: FnMut(A) -> B,
    {
        match self {
            Node::Symbol(name) => Node::Symbol(name),
            Node::True => Node::True,
            Node::False => Node::False,
            Node::Not { spelling, sub } => Node::Not { spelling, sub: f(sub) },
            Node::Binary { op, spelling, lhs, rhs } => {
                let lhs = f(lhs);
                let rhs = f(rhs);
                Node::Binary { op, spelling, lhs, rhs }
            }
        }
    }
}

impl<'a> From<&'a Expr> for Node<&'a Expr> {
    fn from(expr: &'a Expr) -> Self {
        match expr {
            Expr::Symbol(name) => Node::Symbol(name.clone()),
            Expr::True => Node::True,
            Expr::False => Node::False,
            Expr::Not { spelling, sub } => Node::Not {
                spelling: spelling.clone(),
                sub: sub.as_ref(),
            },
            Expr::Binary { op, spelling, lhs, rhs } => Node::Binary {
                op: *op,
                spelling: spelling.clone(),
                lhs: lhs.as_ref(),
                rhs: rhs.as_ref(),
            },
        }
    }
}

/// Flattened formula with per-node annotations.
#[derive(Debug, Clone)]
pub struct Formula {
    /// Nodes in breadth-first order: the root is at index 0 and children
    /// always come after their parent.
    pub(crate) nodes: Vec<Node>,
    pub(crate) symbols: Vec<String>,
    /// Truth value of every node under the last evaluated valuation.
    pub(crate) truth: Vec<bool>,
    /// Parenthesis demand of every node, see [`parens`][crate::parens].
    pub(crate) parens: Vec<i32>,
}

impl Formula {
    pub fn new(expr: &Expr) -> Self {
        let mut frontier: VecDeque<&Expr> = VecDeque::from([expr]);
        let mut nodes: Vec<Node> = vec![];

        while let Some(seed) = frontier.pop_front() {
            let node = Node::from(seed).fmap(|e| {
                frontier.push_back(e);
                Idx(nodes.len() + frontier.len())
            });
            nodes.push(node);
        }

        let parens = crate::parens::minimize(&nodes);
        Self {
            truth: vec![false; nodes.len()],
            symbols: expr.symbols(),
            nodes,
            parens,
        }
    }

    pub fn root(&self) -> Idx {
        Idx(0)
    }

    /// Number of nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn node(&self, idx: Idx) -> &Node {
        &self.nodes[idx.0]
    }

    pub fn symbols(&self) -> &[String] {
        &self.symbols
    }

    /// Truth value of the whole formula under the last evaluated valuation.
    pub fn truth_value(&self) -> bool {
        self.truth[0]
    }

    /// Truth value of the node at `idx` under the last evaluated valuation.
    pub fn value(&self, idx: Idx) -> bool {
        self.truth[idx.0]
    }

    pub fn paren_count(&self, idx: Idx) -> i32 {
        self.parens[idx.0]
    }

    /// Node indices in left-to-right reading order.
    pub fn infix(&self) -> Vec<Idx> {
        let mut order = Vec::with_capacity(self.nodes.len());
        self.infix_into(self.root(), &mut order);
        order
    }

    fn infix_into(&self, idx: Idx, order: &mut Vec<Idx>) {
        match &self.nodes[idx.0] {
            Node::Not { sub, .. } => {
                order.push(idx);
                self.infix_into(*sub, order);
            }
            Node::Binary { lhs, rhs, .. } => {
                self.infix_into(*lhs, order);
                order.push(idx);
                self.infix_into(*rhs, order);
            }
            _ => order.push(idx),
        }
    }
}
