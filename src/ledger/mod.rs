mod ledger;
mod transaction;

pub use ledger::Ledger;
pub use transaction::{Transaction, TransactionKind};
