//! Endpoint interfaces: lightweight wrappers borrowing the [`Connection`]
//! and grouping related REST calls, obtained via the accessors on
//! [`FdBankSdk`](crate::FdBankSdk).
//!
//! [`Connection`]: crate::connection::Connection

pub mod accounts;
pub mod auth;
pub mod dashboard;
pub mod fd;
pub mod products;
