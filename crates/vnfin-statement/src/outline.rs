//! Hierarchical outline numbering.
//!
//! Rows are prefixed top-to-bottom with per-level symbols: `A.` for sections,
//! Roman numerals for level 1, Arabic numerals for level 2 and lowercase letters
//! for level 3. Each level keeps its own counter; visiting a level resets every
//! deeper counter. Sibling runs longer than a symbol table wrap around.

use vnfin_core::StatementTable;

const LEVEL_0: [&str; 4] = ["A.", "B.", "C.", "D."];

const LEVEL_1: [&str; 24] = [
    "I.", "II.", "III.", "IV.", "V.", "VI.", "VII.", "VIII.", "IX.", "X.", "XI.", "XII.", "XIII.",
    "XIV.", "XV.", "XVI.", "XVII.", "XVIII.", "XIX.", "XX.", "XXI.", "XXII.", "XXIII.", "XXIV.",
];

const LEVEL_2: [&str; 24] = [
    "1.", "2.", "3.", "4.", "5.", "6.", "7.", "8.", "9.", "10.", "11.", "12.", "13.", "14.", "15.",
    "16.", "17.", "18.", "19.", "20.", "21.", "22.", "23.", "24.",
];

const LEVEL_3: [&str; 26] = [
    "a.", "b.", "c.", "d.", "e.", "f.", "g.", "h.", "i.", "j.", "k.", "l.", "m.", "n.", "o.", "p.",
    "q.", "r.", "s.", "t.", "u.", "v.", "w.", "x.", "y.", "z.",
];

const SYMBOLS: [&[&str]; 4] = [&LEVEL_0, &LEVEL_1, &LEVEL_2, &LEVEL_3];

/// Number of nesting levels that receive a prefix.
pub const OUTLINE_DEPTH: usize = SYMBOLS.len();

/// Per-level counters for one numbering pass.
///
/// A numberer is scoped to a single table; create a fresh one per table.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OutlineNumberer {
    counters: [usize; OUTLINE_DEPTH],
}

impl OutlineNumberer {
    /// Creates a numberer with all counters at zero.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            counters: [0; OUTLINE_DEPTH],
        }
    }

    /// Returns the current counter values, level 0 first.
    #[must_use]
    pub const fn counters(&self) -> [usize; OUTLINE_DEPTH] {
        self.counters
    }

    /// Advances the counters for a row at `level` and returns its prefix.
    ///
    /// Levels outside `0..OUTLINE_DEPTH` (or undeclared) get an empty prefix and
    /// leave every counter untouched.
    pub fn next_prefix(&mut self, level: Option<u8>) -> &'static str {
        let Some(level) = level.map(usize::from).filter(|&l| l < OUTLINE_DEPTH) else {
            return "";
        };

        let symbols = SYMBOLS[level];
        let prefix = symbols[self.counters[level] % symbols.len()];
        self.counters[level] += 1;
        for deeper in &mut self.counters[level + 1..] {
            *deeper = 0;
        }
        prefix
    }

    /// Returns `name` with the next prefix for `level` prepended.
    pub fn label(&mut self, level: Option<u8>, name: &str) -> String {
        let prefix = self.next_prefix(level);
        if name.is_empty() {
            prefix.to_string()
        } else {
            format!("{prefix} {name}")
        }
    }
}

/// Prefixes every row name in `table` with its outline number.
pub fn number(table: &mut StatementTable) {
    let mut numberer = OutlineNumberer::new();
    table.rename_rows(|row| Some(numberer.label(row.nesting_level, &row.name)));
}
