//! # ttgen-rs: Truth tables for propositional formulas
//!
//! **`ttgen-rs`** parses a propositional formula written with ASCII, word, Unicode or LaTeX
//! connectives and derives its complete truth table, rendered with minimal parentheses
//! either as a LaTeX `array` or as aligned plain text.
//!
//! ## Formula syntax
//!
//! - **Symbols**: any run of non-space characters that is not a connective, e.g. `p_0`, `Cee`, `B_{10}`.
//! - **Constants**: `TRUE`/`FALSE`, `1`/`0`, `\top`/`\bot`, `⊤`/`⊥`.
//! - **Negation**: `!`, `~`, `¬`, `NOT`, `\lnot`, `\neg`. Negation is written directly before its operand.
//! - **Binary connectives**: and (`&`, `\land`), or (`|`, `\lor`), implies (`->`, `=>`, `\to`),
//!   iff (`<->`, `<=>`, `\leftrightarrow`), nand (`NAND`, `\uparrow`), nor (`NOR`, `\downarrow`),
//!   xor (`^`, `XOR`, `\oplus`), plus their word and Unicode forms.
//!   See [`connective::SPELLINGS`] for the full list.
//!
//! Tokens must be separated by spaces or parentheses: `A&B` is a single symbol.
//! Every binary connective needs its own pair of parentheses, `(A & (B | C))`; there is no
//! precedence. The outermost pair may be omitted, so `A & (B | C)` works too.
//!
//! ## Basic Usage
//!
//! ```rust
//! use ttgen_rs::ast::Formula;
//! use ttgen_rs::eval::valuation;
//! use ttgen_rs::parser::parse;
//! use ttgen_rs::table::{render_table, RenderOptions};
//!
//! // 1. Parse (`None` means the input was blank)
//! let expr = parse("(A -> B) -> (! B -> ! A)").unwrap().unwrap();
//!
//! // 2. Evaluate under every valuation
//! let options = RenderOptions::default();
//! let mut formula = Formula::new(&expr);
//! let symbols = formula.symbols().to_vec();
//! assert_eq!(symbols, ["A", "B"]);
//! for row in 0..4 {
//!     formula.evaluate(&valuation(&symbols, row, &options));
//!     assert!(formula.truth_value()); // contraposition is a tautology
//! }
//!
//! // 3. Print it back with minimal parentheses
//! assert_eq!(formula.to_string(), "((A -> B) -> (! B -> ! A))");
//!
//! // 4. Render the table
//! let table = render_table(&expr, &options).unwrap();
//! assert!(table.starts_with("\\begin{array}{cc|ccccccccc}"));
//! ```
//!
//! ## Core Components
//!
//! - **[`token`]**: tokenizer and classifier.
//! - **[`parser`]**: recursive-descent parser with exact error positions.
//! - **[`ast`]**: the parsed tree [`Expr`][ast::Expr] and its flattened, annotated form [`Formula`][ast::Formula].
//! - **[`eval`]**: symbols, valuations and evaluation.
//! - **[`parens`]**: minimal parenthesization.
//! - **[`table`]**: truth table rendering.

pub mod ast;
pub mod connective;
pub mod error;
pub mod eval;
pub mod parens;
pub mod parser;
pub mod table;
pub mod token;

pub use ast::{Expr, Formula};
pub use error::{ParseError, TableError};
pub use eval::{symbols, valuation, Valuation};
pub use parser::parse;
pub use table::{render_table, Format, RenderOptions};
