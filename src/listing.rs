//! In-memory filtering and sorting for fetched collections.
//!
//! Collections are small enough to fetch whole and filter client-side, so
//! there is no pagination. Filters AND together; a `None` field skips that
//! filter entirely, which makes filtering idempotent. Sorting is a stable
//! comparator over one of the documented keys.

use crate::models::{Account, AccountStatus, Product};
use std::cmp::Ordering;

// ---------------------------------------------------------------------------
// ProductFilter
// ---------------------------------------------------------------------------

/// Active filters for the product list. All fields optional.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductFilter {
    /// Case-insensitive substring match on name or description.
    pub search: Option<String>,
    /// Exact category match.
    pub category: Option<String>,
}

impl ProductFilter {
    pub fn matches(&self, product: &Product) -> bool {
        if let Some(ref term) = self.search {
            let term = term.to_lowercase();
            let in_name = product.name.to_lowercase().contains(&term);
            let in_description = product.description.to_lowercase().contains(&term);
            if !in_name && !in_description {
                return false;
            }
        }
        if let Some(ref category) = self.category {
            if product.category != *category {
                return false;
            }
        }
        true
    }
}

/// Return the products matching every active filter, in input order.
pub fn filter_products(products: &[Product], filter: &ProductFilter) -> Vec<Product> {
    products
        .iter()
        .filter(|p| filter.matches(p))
        .cloned()
        .collect()
}

// ---------------------------------------------------------------------------
// ProductSortKey
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProductSortKey {
    /// Lexicographic, ascending.
    Name,
    /// Interest rate, descending.
    Rate,
    /// Minimum investment, ascending.
    MinAmount,
    /// Tenure in years, ascending.
    Tenure,
}

/// Stable sort by the given key. Float comparisons treat NaN as equal,
/// keeping the ordering total.
pub fn sort_products(products: &mut [Product], key: ProductSortKey) {
    products.sort_by(|a, b| match key {
        ProductSortKey::Name => a.name.cmp(&b.name),
        ProductSortKey::Rate => b
            .interest_rate
            .partial_cmp(&a.interest_rate)
            .unwrap_or(Ordering::Equal),
        ProductSortKey::MinAmount => a
            .min_amount
            .partial_cmp(&b.min_amount)
            .unwrap_or(Ordering::Equal),
        ProductSortKey::Tenure => a.tenure.cmp(&b.tenure),
    });
}

/// Distinct product categories, sorted, for building a category picker.
pub fn categories(products: &[Product]) -> Vec<String> {
    let mut out: Vec<String> = products.iter().map(|p| p.category.clone()).collect();
    out.sort();
    out.dedup();
    out
}

// ---------------------------------------------------------------------------
// AccountFilter
// ---------------------------------------------------------------------------

/// Active filters for the account list. All fields optional.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AccountFilter {
    /// Substring match on the account number, or case-insensitive substring
    /// match on the product name.
    pub search: Option<String>,
    /// Exact status match.
    pub status: Option<AccountStatus>,
    /// Exact account type match (e.g. `FIXED_DEPOSIT`).
    pub account_type: Option<String>,
}

impl AccountFilter {
    pub fn matches(&self, account: &Account) -> bool {
        if let Some(ref term) = self.search {
            let in_number = account.account_number.contains(term.as_str());
            let in_product = account
                .product_name
                .to_lowercase()
                .contains(&term.to_lowercase());
            if !in_number && !in_product {
                return false;
            }
        }
        if let Some(status) = self.status {
            if account.status != status {
                return false;
            }
        }
        if let Some(ref account_type) = self.account_type {
            if account.account_type != *account_type {
                return false;
            }
        }
        true
    }
}

/// Return the accounts matching every active filter, in input order.
pub fn filter_accounts(accounts: &[Account], filter: &AccountFilter) -> Vec<Account> {
    accounts
        .iter()
        .filter(|a| filter.matches(a))
        .cloned()
        .collect()
}
