//! Logical connectives and their accepted spellings.
//!
//! Every connective can be written in several ways: ASCII operators (`&`, `->`),
//! words (`AND`, `implies`), Unicode glyphs (`∧`, `→`) or LaTeX commands
//! (`\land`, `\to`). The [`SPELLINGS`] table maps each accepted spelling to the
//! connective it denotes, together with the LaTeX and Unicode text used to render it.
//!
//! Spellings are unique across the table and never equal to a parenthesis,
//! so classification is a plain exact match.

/// Nullary connectives (constants).
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Nullary {
    True,
    False,
}

/// Unary connectives.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Unary {
    Not,
}

/// Binary connectives.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Binary {
    And,
    Or,
    Implies,
    Iff,
    Nand,
    Nor,
    Xor,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Connective {
    Nullary(Nullary),
    Unary(Unary),
    Binary(Binary),
}

impl Nullary {
    pub fn value(self) -> bool {
        match self {
            Nullary::True => true,
            Nullary::False => false,
        }
    }
}

impl Unary {
    pub fn apply(self, a: bool) -> bool {
        match self {
            Unary::Not => !a,
        }
    }
}

impl Binary {
    pub fn apply(self, a: bool, b: bool) -> bool {
        match self {
            Binary::And => a && b,
            Binary::Or => a || b,
            Binary::Implies => !a || b,
            Binary::Iff => a == b,
            Binary::Nand => !(a && b),
            Binary::Nor => !(a || b),
            Binary::Xor => a != b,
        }
    }
}

/// One accepted way of writing a connective.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Spelling {
    /// Text as typed by the user.
    pub raw: &'static str,
    pub connective: Connective,
    /// LaTeX rendering (math mode).
    pub latex: &'static str,
    /// Plain-text rendering.
    pub unicode: &'static str,
}

const fn spelling(raw: &'static str, connective: Connective, latex: &'static str, unicode: &'static str) -> Spelling {
    Spelling {
        raw,
        connective,
        latex,
        unicode,
    }
}

const TRUE: Connective = Connective::Nullary(Nullary::True);
const FALSE: Connective = Connective::Nullary(Nullary::False);
const NOT: Connective = Connective::Unary(Unary::Not);
const AND: Connective = Connective::Binary(Binary::And);
const OR: Connective = Connective::Binary(Binary::Or);
const IMPLIES: Connective = Connective::Binary(Binary::Implies);
const IFF: Connective = Connective::Binary(Binary::Iff);
const NAND: Connective = Connective::Binary(Binary::Nand);
const NOR: Connective = Connective::Binary(Binary::Nor);
const XOR: Connective = Connective::Binary(Binary::Xor);

/// All accepted spellings.
///
/// A LaTeX command renders as itself, so `\neg` stays `\neg` and `\wedge` stays `\wedge`.
/// Other spellings render as the command of their family: single arrows as `\to` and
/// `\leftrightarrow`, double arrows as `\Rightarrow` and `\Leftrightarrow`.
pub const SPELLINGS: &[Spelling] = &[
    spelling("1", TRUE, "\\top", "⊤"),
    spelling("TRUE", TRUE, "\\top", "⊤"),
    spelling("True", TRUE, "\\top", "⊤"),
    spelling("true", TRUE, "\\top", "⊤"),
    spelling("\\top", TRUE, "\\top", "⊤"),
    spelling("⊤", TRUE, "\\top", "⊤"),
    spelling("0", FALSE, "\\bot", "⊥"),
    spelling("FALSE", FALSE, "\\bot", "⊥"),
    spelling("False", FALSE, "\\bot", "⊥"),
    spelling("false", FALSE, "\\bot", "⊥"),
    spelling("\\bot", FALSE, "\\bot", "⊥"),
    spelling("⊥", FALSE, "\\bot", "⊥"),
    spelling("!", NOT, "\\lnot", "¬"),
    spelling("~", NOT, "\\lnot", "¬"),
    spelling("¬", NOT, "\\lnot", "¬"),
    spelling("NOT", NOT, "\\lnot", "¬"),
    spelling("not", NOT, "\\lnot", "¬"),
    spelling("\\lnot", NOT, "\\lnot", "¬"),
    spelling("\\neg", NOT, "\\neg", "¬"),
    spelling("&", AND, "\\land", "∧"),
    spelling("&&", AND, "\\land", "∧"),
    spelling("∧", AND, "\\land", "∧"),
    spelling("AND", AND, "\\land", "∧"),
    spelling("and", AND, "\\land", "∧"),
    spelling("\\land", AND, "\\land", "∧"),
    spelling("\\wedge", AND, "\\wedge", "∧"),
    spelling("|", OR, "\\lor", "∨"),
    spelling("||", OR, "\\lor", "∨"),
    spelling("∨", OR, "\\lor", "∨"),
    spelling("OR", OR, "\\lor", "∨"),
    spelling("or", OR, "\\lor", "∨"),
    spelling("\\lor", OR, "\\lor", "∨"),
    spelling("\\vee", OR, "\\vee", "∨"),
    spelling("->", IMPLIES, "\\to", "→"),
    spelling("→", IMPLIES, "\\to", "→"),
    spelling("IMPLIES", IMPLIES, "\\to", "→"),
    spelling("implies", IMPLIES, "\\to", "→"),
    spelling("\\to", IMPLIES, "\\to", "→"),
    spelling("\\rightarrow", IMPLIES, "\\rightarrow", "→"),
    spelling("=>", IMPLIES, "\\Rightarrow", "⇒"),
    spelling("⇒", IMPLIES, "\\Rightarrow", "⇒"),
    spelling("\\Rightarrow", IMPLIES, "\\Rightarrow", "⇒"),
    spelling("\\implies", IMPLIES, "\\implies", "⇒"),
    spelling("<->", IFF, "\\leftrightarrow", "↔"),
    spelling("↔", IFF, "\\leftrightarrow", "↔"),
    spelling("IFF", IFF, "\\leftrightarrow", "↔"),
    spelling("iff", IFF, "\\leftrightarrow", "↔"),
    spelling("\\leftrightarrow", IFF, "\\leftrightarrow", "↔"),
    spelling("<=>", IFF, "\\Leftrightarrow", "⇔"),
    spelling("⇔", IFF, "\\Leftrightarrow", "⇔"),
    spelling("\\Leftrightarrow", IFF, "\\Leftrightarrow", "⇔"),
    spelling("\\iff", IFF, "\\iff", "⇔"),
    spelling("NAND", NAND, "\\uparrow", "↑"),
    spelling("nand", NAND, "\\uparrow", "↑"),
    spelling("↑", NAND, "\\uparrow", "↑"),
    spelling("\\uparrow", NAND, "\\uparrow", "↑"),
    spelling("\\mid", NAND, "\\mid", "↑"),
    spelling("NOR", NOR, "\\downarrow", "↓"),
    spelling("nor", NOR, "\\downarrow", "↓"),
    spelling("↓", NOR, "\\downarrow", "↓"),
    spelling("\\downarrow", NOR, "\\downarrow", "↓"),
    spelling("^", XOR, "\\oplus", "⊕"),
    spelling("XOR", XOR, "\\oplus", "⊕"),
    spelling("xor", XOR, "\\oplus", "⊕"),
    spelling("⊕", XOR, "\\oplus", "⊕"),
    spelling("\\oplus", XOR, "\\oplus", "⊕"),
    spelling("⊻", XOR, "\\veebar", "⊻"),
    spelling("\\veebar", XOR, "\\veebar", "⊻"),
];

/// Look up the table entry for `raw`.
pub fn lookup(raw: &str) -> Option<&'static Spelling> {
    SPELLINGS.iter().find(|s| s.raw == raw)
}

/// LaTeX rendering of a connective spelled `raw`.
///
/// Falls back to `raw` itself for spellings the table does not know.
pub fn latex(raw: &str) -> &str {
    lookup(raw).map_or(raw, |s| s.latex)
}

/// Unicode rendering of a connective spelled `raw`.
pub fn unicode(raw: &str) -> &str {
    lookup(raw).map_or(raw, |s| s.unicode)
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::collections::HashSet;

    use test_log::test;

    #[test]
    fn test_spellings_are_unique() {
        let mut seen = HashSet::new();
        for s in SPELLINGS {
            assert!(seen.insert(s.raw), "duplicate spelling {:?}", s.raw);
            assert_ne!(s.raw, "(");
            assert_ne!(s.raw, ")");
            assert!(!s.raw.is_empty());
            assert!(!s.raw.contains(char::is_whitespace));
        }
    }

    #[test]
    fn test_lookup() {
        assert_eq!(lookup("&").unwrap().connective, Connective::Binary(Binary::And));
        assert_eq!(lookup("\\land").unwrap().connective, Connective::Binary(Binary::And));
        assert_eq!(lookup("IFF").unwrap().connective, Connective::Binary(Binary::Iff));
        assert_eq!(lookup("FALSE").unwrap().connective, Connective::Nullary(Nullary::False));
        assert!(lookup("\\veee").is_none());
        assert!(lookup("A").is_none());
    }

    #[test]
    fn test_truth_functions() {
        let cases = [(false, false), (false, true), (true, false), (true, true)];
        for (a, b) in cases {
            assert_eq!(Binary::And.apply(a, b), a & b);
            assert_eq!(Binary::Or.apply(a, b), a | b);
            assert_eq!(Binary::Implies.apply(a, b), !a | b);
            assert_eq!(Binary::Iff.apply(a, b), a == b);
            assert_eq!(Binary::Nand.apply(a, b), !(a & b));
            assert_eq!(Binary::Nor.apply(a, b), !(a | b));
            assert_eq!(Binary::Xor.apply(a, b), a ^ b);
        }
        assert!(!Unary::Not.apply(true));
        assert!(Nullary::True.value());
        assert!(!Nullary::False.value());
    }

    #[test]
    fn test_rendering_families() {
        assert_eq!(latex("->"), "\\to");
        assert_eq!(latex("=>"), "\\Rightarrow");
        assert_eq!(latex("\\Rightarrow"), "\\Rightarrow");
        assert_eq!(latex("<=>"), "\\Leftrightarrow");
        assert_eq!(latex("\\neg"), "\\neg");
        assert_eq!(unicode("=>"), "⇒");
        assert_eq!(unicode("->"), "→");
        assert_eq!(unicode("\\land"), "∧");
        assert_eq!(latex("p_0"), "p_0");
    }
}
