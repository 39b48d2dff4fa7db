//! Regex extraction of contact signals from free text.
//!
//! The patterns are deliberately approximate. The phone pattern targets
//! North-American formats (optional 1-3 digit country code, 3-3-4 digit
//! groups with `-`, `.`, space, or parentheses as separators) and will both
//! miss other national formats and match phone-shaped digit runs inside
//! longer numbers. The email pattern accepts the common `local@domain.tld`
//! shape without attempting full RFC coverage. Callers get a deduplicated,
//! canonicalized [`SignalSet`] and should treat its contents as leads, not
//! verified contact data.

use std::collections::BTreeSet;
use std::sync::LazyLock;

use regex::Regex;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b").unwrap());

static PHONE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:\+?\d{1,3}[-.\s]?)?\(?\d{3}\)?[-.\s]?\d{3}[-.\s]?\d{4}").unwrap()
});

/// Deduplicated contact signals pulled out of free text.
///
/// Ordered sets keep iteration deterministic; the order itself carries no
/// meaning. Emails are stored lowercased, phones in canonical digit form
/// (separators stripped, leading `+` preserved), so formatting variants of
/// the same contact collapse to one entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignalSet {
    pub emails: BTreeSet<String>,
    pub phones: BTreeSet<String>,
}

impl SignalSet {
    /// Folds another set's entries into this one.
    pub fn merge(&mut self, other: SignalSet) {
        self.emails.extend(other.emails);
        self.phones.extend(other.phones);
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.emails.is_empty() && self.phones.is_empty()
    }
}

/// Extracts email and phone signals from arbitrary text.
///
/// Never fails: text with no matches (including the empty string) yields an
/// empty set. Safe to call from any number of concurrent tasks; the patterns
/// compile once.
#[must_use]
pub fn extract_signals(text: &str) -> SignalSet {
    let mut signals = SignalSet::default();

    for m in EMAIL_RE.find_iter(text) {
        signals.emails.insert(m.as_str().to_lowercase());
    }

    for m in PHONE_RE.find_iter(text) {
        signals.phones.insert(canonical_phone(m.as_str()));
    }

    signals
}

/// Reduces a matched phone string to digits plus an optional leading `+`.
fn canonical_phone(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for (i, c) in raw.chars().enumerate() {
        if c.is_ascii_digit() || (c == '+' && i == 0) {
            out.push(c);
        }
    }
    out
}
