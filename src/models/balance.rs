//! Balance summary over a set of transactions

use serde::{Deserialize, Serialize};

use super::money::Money;
use super::transaction::{Transaction, TransactionType};
use crate::error::{CashbookError, CashbookResult};

/// Income, outcome and their difference
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Balance {
    pub income: Money,
    pub outcome: Money,
    pub total: Money,
}

impl Balance {
    /// Sum a set of transactions in one pass.
    pub fn from_transactions<'a>(
        transactions: impl IntoIterator<Item = &'a Transaction>,
    ) -> CashbookResult<Self> {
        Self::from_entries(transactions.into_iter().map(|txn| (txn.kind, txn.value)))
    }

    /// Sum `(type, value)` pairs in one pass.
    ///
    /// `total` is derived once after the scan, never per row. Fails with
    /// [`CashbookError::Overflow`] when a sum leaves the decimal range.
    pub fn from_entries(
        entries: impl IntoIterator<Item = (TransactionType, Money)>,
    ) -> CashbookResult<Self> {
        let (income, outcome) = entries
            .into_iter()
            .try_fold(
                (Money::zero(), Money::zero()),
                |(income, outcome), (kind, value)| match kind {
                    TransactionType::Income => Some((income.checked_add(value)?, outcome)),
                    TransactionType::Outcome => Some((income, outcome.checked_add(value)?)),
                },
            )
            .ok_or_else(|| CashbookError::Overflow("income or outcome sum too large".into()))?;

        let total = income
            .checked_sub(outcome)
            .ok_or_else(|| CashbookError::Overflow("balance total too large".into()))?;

        Ok(Self {
            income,
            outcome,
            total,
        })
    }
}
