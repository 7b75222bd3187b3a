pub mod assignment;
pub mod bill;
pub mod ledger;
pub mod message;
pub mod roster;
pub mod session;
