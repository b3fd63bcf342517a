//! Transaction model
//!
//! An imported income or outcome entry. Values are never negative; the
//! direction of money is carried by [`TransactionType`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ids::{CategoryId, TransactionId};
use super::money::Money;

/// Direction of a transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    /// Money coming in
    Income,
    /// Money going out
    Outcome,
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Income => write!(f, "income"),
            Self::Outcome => write!(f, "outcome"),
        }
    }
}

impl FromStr for TransactionType {
    type Err = UnknownTransactionType;

    /// Only the exact lowercase spellings are accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "income" => Ok(Self::Income),
            "outcome" => Ok(Self::Outcome),
            other => Err(UnknownTransactionType(other.to_string())),
        }
    }
}

/// A type string that is neither `income` nor `outcome`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownTransactionType(pub String);

impl fmt::Display for UnknownTransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown transaction type: {}", self.0)
    }
}

impl std::error::Error for UnknownTransactionType {}

/// Everything needed to build a [`Transaction`] before it gets an id
#[derive(Debug, Clone, PartialEq)]
pub struct NewTransaction {
    pub title: String,
    pub kind: TransactionType,
    pub value: Money,
    pub category_id: CategoryId,
}

/// A financial transaction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique identifier
    pub id: TransactionId,

    /// Free-form title
    pub title: String,

    /// Income or outcome
    #[serde(rename = "type")]
    pub kind: TransactionType,

    /// Non-negative amount
    pub value: Money,

    /// The category this transaction belongs to
    pub category_id: CategoryId,

    /// When the transaction was created
    pub created_at: DateTime<Utc>,

    /// When the transaction was last modified
    pub updated_at: DateTime<Utc>,
}

impl Transaction {
    /// Create a new transaction
    pub fn new(input: NewTransaction) -> Self {
        let now = Utc::now();
        Self {
            id: TransactionId::new(),
            title: input.title,
            kind: input.kind,
            value: input.value,
            category_id: input.category_id,
            created_at: now,
            updated_at: now,
        }
    }

    /// Check if this is an income transaction
    pub fn is_income(&self) -> bool {
        self.kind == TransactionType::Income
    }

    /// Check if this is an outcome transaction
    pub fn is_outcome(&self) -> bool {
        self.kind == TransactionType::Outcome
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} {})", self.title, self.kind, self.value)
    }
}
