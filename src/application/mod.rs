// Application layer - errors shared by the exporter and the menu.
// The ledger itself lives in `domain`; there is no service layer because
// nothing is persisted between runs.

pub mod error;

pub use error::*;
