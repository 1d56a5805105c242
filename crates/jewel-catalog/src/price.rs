//! Listed prices.
//!
//! A diamond either carries a whole-dollar amount or is sold "on request".
//! The ordering rule for price sorts lives here so nothing else has to
//! invent a sentinel for the missing amount.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// Direction of a sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortDirection {
    Ascending,
    Descending,
}

/// Price of a catalog record, in whole US dollars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(from = "Option<u64>", into = "Option<u64>")]
pub enum Price {
    /// A listed amount.
    Amount(u64),
    /// Price withheld; the buyer has to ask.
    #[default]
    OnRequest,
}

impl Price {
    /// Create a listed price.
    pub fn amount(dollars: u64) -> Self {
        Price::Amount(dollars)
    }

    /// Get the listed amount, if any.
    pub fn as_amount(&self) -> Option<u64> {
        match self {
            Price::Amount(dollars) => Some(*dollars),
            Price::OnRequest => None,
        }
    }

    /// Check if the price is withheld.
    pub fn is_on_request(&self) -> bool {
        matches!(self, Price::OnRequest)
    }

    /// Compare two prices for a price sort.
    ///
    /// Listed amounts compare numerically in the requested direction.
    /// On-request prices sort after every listed amount in both directions
    /// and tie with each other.
    pub fn cmp_for(&self, other: &Price, direction: SortDirection) -> Ordering {
        match (self, other) {
            (Price::Amount(a), Price::Amount(b)) => match direction {
                SortDirection::Ascending => a.cmp(b),
                SortDirection::Descending => b.cmp(a),
            },
            (Price::Amount(_), Price::OnRequest) => Ordering::Less,
            (Price::OnRequest, Price::Amount(_)) => Ordering::Greater,
            (Price::OnRequest, Price::OnRequest) => Ordering::Equal,
        }
    }

    /// Format a listed amount (e.g. "$12,500"). Returns `None` on request,
    /// leaving the wording to the caller's string table.
    pub fn display(&self) -> Option<String> {
        self.as_amount().map(|dollars| format!("${}", group_thousands(dollars)))
    }
}

impl From<Option<u64>> for Price {
    fn from(value: Option<u64>) -> Self {
        match value {
            Some(dollars) => Price::Amount(dollars),
            None => Price::OnRequest,
        }
    }
}

impl From<Price> for Option<u64> {
    fn from(price: Price) -> Self {
        price.as_amount()
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.display() {
            Some(text) => f.write_str(&text),
            None => f.write_str("on request"),
        }
    }
}

fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
