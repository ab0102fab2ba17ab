use super::transaction::Transaction;

/// Income, expense, and net totals over a set of transactions.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BalanceSummary {
    pub income: f64,
    pub expense: f64,
    pub balance: f64,
    pub count: usize,
}

impl BalanceSummary {
    pub fn from_transactions<'a, I>(transactions: I) -> Self
    where
        I: IntoIterator<Item = &'a Transaction>,
    {
        let mut summary = Self::default();
        for txn in transactions {
            if txn.is_income() {
                summary.income += txn.amount;
            } else {
                summary.expense += txn.amount;
            }
            summary.count += 1;
        }
        summary.balance = summary.income - summary.expense;
        summary
    }
}
