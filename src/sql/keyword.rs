//! Keywords the completion heuristics reason about.
//!
//! Only words that open or delimit a clause are classified; every other word
//! stays an identifier so its original casing survives tokenization. Extend
//! only when a new clause needs to be recognised.
//!
//! Keywords are matched case‑insensitively via `from_lower` on a pre‑lower‑cased
//! slice. `as_str` gives the canonical lowercase spelling.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Keyword {
    Select,
    From,
    Join,
    On,
    Where,
    Group,
    Order,
    By,
    Having,
    Set,
}

impl Keyword {
    /// Attempt to classify a *lower‑cased* word slice into a `Keyword`.
    /// Returns `None` if the word is not a recognized keyword.
    ///
    /// NOTE: The caller is responsible for lower‑casing the input.
    pub fn from_lower(word: &str) -> Option<Self> {
        use Keyword::*;
        let kw = match word {
            "select" => Select,
            "from" => From,
            "join" => Join,
            "on" => On,
            "where" => Where,
            "group" => Group,
            "order" => Order,
            "by" => By,
            "having" => Having,
            "set" => Set,
            _ => return None,
        };
        Some(kw)
    }

    /// Canonical lowercase string form of the keyword.
    pub const fn as_str(self) -> &'static str {
        use Keyword::*;
        match self {
            Select => "select",
            From => "from",
            Join => "join",
            On => "on",
            Where => "where",
            Group => "group",
            Order => "order",
            By => "by",
            Having => "having",
            Set => "set",
        }
    }
}

impl std::fmt::Display for Keyword {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
