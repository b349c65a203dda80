//! Wire data model for the gateway REST API.
//!
//! All types serialize with camelCase field names to match the JSON bodies
//! the backend produces and consumes. Accounts and transactions are
//! read-only from the client's perspective; products are mutated via the
//! product endpoints by staff roles.

pub mod account;
pub mod calc;
pub mod dashboard;
pub mod product;
pub mod user;

pub use account::{Account, AccountStatus, Transaction, TransactionType};
pub use calc::{CalculationRequest, CalculationResult, CompoundingFrequency};
pub use dashboard::DashboardStats;
pub use product::{Product, ProductInput};
pub use user::{Role, User};
