use tracing::debug;

use super::transaction::{Transaction, TransactionKind};
use crate::errors::LedgerError;

/// In-memory record of the current balance and the ordered transaction
/// history. Owned exclusively by the shell; every operation is synchronous.
#[derive(Debug, Clone)]
pub struct Ledger {
    balance: f64,
    transactions: Vec<Transaction>,
}

impl Ledger {
    pub fn new(initial_balance: f64) -> Self {
        Self {
            balance: initial_balance,
            transactions: Vec::new(),
        }
    }

    /// Current balance.
    pub fn balance(&self) -> f64 {
        self.balance
    }

    /// Ordered view of every recorded transaction.
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn transaction_count(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    /// Records an income entry and raises the balance. Always succeeds; the
    /// sign of `amount` is not validated.
    pub fn add_income(&mut self, amount: f64) {
        self.balance += amount;
        self.transactions.push(Transaction::income(amount));
        debug!(amount, balance = self.balance, "income recorded");
    }

    /// Records a categorized expense and lowers the balance. Fails without
    /// touching state when `amount` exceeds the current balance.
    pub fn add_expense(
        &mut self,
        description: impl Into<String>,
        amount: f64,
        category: impl Into<String>,
    ) -> Result<(), LedgerError> {
        if amount > self.balance {
            debug!(amount, balance = self.balance, "expense rejected");
            return Err(LedgerError::InsufficientBalance {
                requested: amount,
                available: self.balance,
            });
        }
        self.transactions
            .push(Transaction::expense(description, amount, category));
        self.balance -= amount;
        debug!(amount, balance = self.balance, "expense recorded");
        Ok(())
    }

    /// Removes the transaction at `index`, reverses its balance effect, and
    /// returns the removed entry. Order of the remaining entries is preserved.
    pub fn delete_transaction(&mut self, index: usize) -> Result<Transaction, LedgerError> {
        if index >= self.transactions.len() {
            return Err(LedgerError::InvalidIndex {
                index,
                count: self.transactions.len(),
            });
        }
        let removed = self.transactions.remove(index);
        match removed.kind {
            TransactionKind::Expense { .. } => self.balance += removed.amount,
            TransactionKind::Income => self.balance -= removed.amount,
        }
        debug!(index, balance = self.balance, "transaction deleted");
        Ok(removed)
    }

    /// Expenses whose category matches `category` ignoring case, in insertion
    /// order. Income entries are never included.
    pub fn filter_by_category(&self, category: &str) -> Vec<&Transaction> {
        self.transactions
            .iter()
            .filter(|txn| txn.matches_category(category))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn income_raises_balance_and_appends() {
        let mut ledger = Ledger::new(100.0);
        ledger.add_income(50.0);
        assert_eq!(ledger.balance(), 150.0);
        assert_eq!(ledger.transaction_count(), 1);
        assert!(!ledger.transactions()[0].is_expense());
    }

    #[test]
    fn expense_within_balance_lowers_balance() {
        let mut ledger = Ledger::new(100.0);
        ledger
            .add_expense("Lunch", 20.0, "Food")
            .expect("expense fits balance");
        assert_eq!(ledger.balance(), 80.0);
        assert_eq!(ledger.transaction_count(), 1);
    }

    #[test]
    fn expense_beyond_balance_leaves_state_untouched() {
        let mut ledger = Ledger::new(100.0);
        let err = ledger
            .add_expense("Rent", 500.0, "Housing")
            .expect_err("expense must be rejected");
        assert_eq!(
            err,
            LedgerError::InsufficientBalance {
                requested: 500.0,
                available: 100.0,
            }
        );
        assert_eq!(ledger.balance(), 100.0);
        assert!(ledger.is_empty());
    }

    #[test]
    fn expense_equal_to_balance_is_accepted() {
        let mut ledger = Ledger::new(100.0);
        ledger
            .add_expense("Rent", 100.0, "Housing")
            .expect("amount equal to balance is allowed");
        assert_eq!(ledger.balance(), 0.0);
    }

    #[test]
    fn delete_expense_restores_its_amount() {
        let mut ledger = Ledger::new(100.0);
        ledger.add_expense("Lunch", 20.0, "Food").unwrap();
        let removed = ledger.delete_transaction(0).unwrap();
        assert!(removed.is_expense());
        assert_eq!(ledger.balance(), 100.0);
        assert!(ledger.is_empty());
    }

    #[test]
    fn delete_income_subtracts_its_amount() {
        let mut ledger = Ledger::new(100.0);
        ledger.add_income(50.0);
        ledger.delete_transaction(0).unwrap();
        assert_eq!(ledger.balance(), 100.0);
    }

    #[test]
    fn delete_out_of_range_leaves_state_untouched() {
        let mut ledger = Ledger::new(100.0);
        ledger.add_income(50.0);
        let err = ledger
            .delete_transaction(3)
            .expect_err("index past the end must fail");
        assert_eq!(err, LedgerError::InvalidIndex { index: 3, count: 1 });
        assert_eq!(ledger.balance(), 150.0);
        assert_eq!(ledger.transaction_count(), 1);
    }

    #[test]
    fn delete_preserves_order_of_remaining_entries() {
        let mut ledger = Ledger::new(100.0);
        ledger.add_expense("A", 10.0, "One").unwrap();
        ledger.add_expense("B", 10.0, "Two").unwrap();
        ledger.add_expense("C", 10.0, "Three").unwrap();
        ledger.delete_transaction(1).unwrap();
        let descriptions: Vec<&str> = ledger
            .transactions()
            .iter()
            .map(|txn| txn.description.as_str())
            .collect();
        assert_eq!(descriptions, vec!["A", "C"]);
    }

    #[test]
    fn filter_is_case_insensitive_and_skips_income() {
        let mut ledger = Ledger::new(200.0);
        ledger.add_income(50.0);
        ledger.add_expense("Lunch", 20.0, "Food").unwrap();
        ledger.add_expense("Bus", 5.0, "Transit").unwrap();
        ledger.add_expense("Dinner", 30.0, "FOOD").unwrap();

        let matches = ledger.filter_by_category("food");
        let descriptions: Vec<&str> = matches.iter().map(|txn| txn.description.as_str()).collect();
        assert_eq!(descriptions, vec!["Lunch", "Dinner"]);
    }

    #[test]
    fn negative_income_is_accepted_unvalidated() {
        // Matches the original behavior: amounts are not sign-checked.
        let mut ledger = Ledger::new(100.0);
        ledger.add_income(-30.0);
        assert_eq!(ledger.balance(), 70.0);
        assert_eq!(ledger.transaction_count(), 1);
    }
}
