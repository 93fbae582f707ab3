mod ledger;
mod money;
mod transaction;
mod validate;

pub use ledger::*;
pub use money::*;
pub use transaction::*;
pub use validate::*;
