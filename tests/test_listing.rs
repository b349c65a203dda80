//! Filter and sort tests over in-memory product and account collections.

use fdbank_sdk::listing::{
    categories, filter_accounts, filter_products, sort_products, AccountFilter, ProductFilter,
    ProductSortKey,
};
use fdbank_sdk::models::{Account, AccountStatus, Product};

fn product(name: &str, description: &str, rate: f64, min: f64, tenure: u32, category: &str) -> Product {
    Product {
        id: format!("prod-{}", name.to_lowercase().replace(' ', "-")),
        name: name.to_string(),
        description: description.to_string(),
        interest_rate: rate,
        min_amount: min,
        max_amount: min * 100.0,
        tenure,
        category: category.to_string(),
        is_active: true,
        created_at: None,
        updated_at: None,
    }
}

fn sample_products() -> Vec<Product> {
    vec![
        product("Premium FD", "High-yield fixed deposit for long horizons", 8.0, 50_000.0, 5, "FIXED_DEPOSIT"),
        product("Starter FD", "Entry-level fixed deposit scheme", 6.5, 1_000.0, 1, "FIXED_DEPOSIT"),
        product("Monthly Saver", "Recurring deposit with monthly instalments", 7.0, 2_000.0, 3, "RECURRING_DEPOSIT"),
        product("Senior Citizen FD", "Preferential rates for senior citizens", 8.0, 10_000.0, 2, "FIXED_DEPOSIT"),
    ]
}

fn account(number: &str, product_name: &str, status: AccountStatus, account_type: &str) -> Account {
    Account {
        id: format!("acct-{number}"),
        account_number: number.to_string(),
        account_type: account_type.to_string(),
        balance: 120_000.0,
        principal_amount: 100_000.0,
        interest_rate: 6.5,
        maturity_date: "2027-01-15".to_string(),
        status,
        created_at: "2026-01-15".to_string(),
        product_name: product_name.to_string(),
        customer_id: None,
        customer_name: None,
        customer_email: None,
    }
}

fn sample_accounts() -> Vec<Account> {
    vec![
        account("10001234", "Premium FD", AccountStatus::Active, "FIXED_DEPOSIT"),
        account("10005678", "Starter FD", AccountStatus::Matured, "FIXED_DEPOSIT"),
        account("20001111", "Monthly Saver", AccountStatus::Active, "RECURRING_DEPOSIT"),
        account("30002222", "Everyday Savings", AccountStatus::Closed, "SAVINGS"),
    ]
}

// ---------------------------------------------------------------------------
// Product filtering
// ---------------------------------------------------------------------------

#[test]
fn empty_filter_matches_everything() {
    let products = sample_products();
    let filtered = filter_products(&products, &ProductFilter::default());
    assert_eq!(filtered, products);
}

#[test]
fn search_matches_name_case_insensitively() {
    let products = sample_products();
    let filter = ProductFilter {
        search: Some("premium".to_string()),
        ..Default::default()
    };
    let filtered = filter_products(&products, &filter);
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].name, "Premium FD");
}

#[test]
fn search_matches_description_too() {
    let products = sample_products();
    let filter = ProductFilter {
        search: Some("instalments".to_string()),
        ..Default::default()
    };
    let filtered = filter_products(&products, &filter);
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].name, "Monthly Saver");
}

#[test]
fn search_and_category_combine_with_and() {
    let products = sample_products();
    let filter = ProductFilter {
        search: Some("fd".to_string()),
        category: Some("RECURRING_DEPOSIT".to_string()),
    };
    // "fd" matches three names but none of them is a recurring deposit.
    let filtered = filter_products(&products, &filter);
    assert!(filtered.is_empty());
}

#[test]
fn category_filter_is_exact() {
    let products = sample_products();
    let filter = ProductFilter {
        category: Some("FIXED_DEPOSIT".to_string()),
        ..Default::default()
    };
    let filtered = filter_products(&products, &filter);
    assert_eq!(filtered.len(), 3);
}

#[test]
fn filtering_is_idempotent() {
    let products = sample_products();
    let filter = ProductFilter {
        search: Some("fd".to_string()),
        category: Some("FIXED_DEPOSIT".to_string()),
    };
    let once = filter_products(&products, &filter);
    let twice = filter_products(&once, &filter);
    assert_eq!(once, twice);
}

// ---------------------------------------------------------------------------
// Product sorting
// ---------------------------------------------------------------------------

#[test]
fn sort_by_name_is_lexicographic() {
    let mut products = sample_products();
    sort_products(&mut products, ProductSortKey::Name);
    let names: Vec<&str> = products.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(
        names,
        ["Monthly Saver", "Premium FD", "Senior Citizen FD", "Starter FD"]
    );
}

#[test]
fn sort_by_rate_is_descending() {
    let mut products = sample_products();
    sort_products(&mut products, ProductSortKey::Rate);
    let rates: Vec<f64> = products.iter().map(|p| p.interest_rate).collect();
    assert_eq!(rates, [8.0, 8.0, 7.0, 6.5]);
}

#[test]
fn sort_by_rate_is_stable_for_ties() {
    let mut products = sample_products();
    sort_products(&mut products, ProductSortKey::Rate);
    // Premium FD and Senior Citizen FD share 8.0 and keep their input order.
    assert_eq!(products[0].name, "Premium FD");
    assert_eq!(products[1].name, "Senior Citizen FD");
}

#[test]
fn sort_by_min_amount_is_ascending() {
    let mut products = sample_products();
    sort_products(&mut products, ProductSortKey::MinAmount);
    let mins: Vec<f64> = products.iter().map(|p| p.min_amount).collect();
    assert_eq!(mins, [1_000.0, 2_000.0, 10_000.0, 50_000.0]);
}

#[test]
fn sort_by_tenure_is_ascending() {
    let mut products = sample_products();
    sort_products(&mut products, ProductSortKey::Tenure);
    let tenures: Vec<u32> = products.iter().map(|p| p.tenure).collect();
    assert_eq!(tenures, [1, 2, 3, 5]);
}

#[test]
fn categories_are_distinct_and_sorted() {
    let products = sample_products();
    assert_eq!(
        categories(&products),
        ["FIXED_DEPOSIT", "RECURRING_DEPOSIT"]
    );
}

// ---------------------------------------------------------------------------
// Account filtering
// ---------------------------------------------------------------------------

#[test]
fn account_search_matches_number_substring() {
    let accounts = sample_accounts();
    let filter = AccountFilter {
        search: Some("5678".to_string()),
        ..Default::default()
    };
    let filtered = filter_accounts(&accounts, &filter);
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].account_number, "10005678");
}

#[test]
fn account_search_matches_product_name_case_insensitively() {
    let accounts = sample_accounts();
    let filter = AccountFilter {
        search: Some("saver".to_string()),
        ..Default::default()
    };
    let filtered = filter_accounts(&accounts, &filter);
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].account_number, "20001111");
}

#[test]
fn account_status_and_type_combine_with_and() {
    let accounts = sample_accounts();
    let filter = AccountFilter {
        status: Some(AccountStatus::Active),
        account_type: Some("FIXED_DEPOSIT".to_string()),
        ..Default::default()
    };
    let filtered = filter_accounts(&accounts, &filter);
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].account_number, "10001234");
}

#[test]
fn account_filtering_is_idempotent() {
    let accounts = sample_accounts();
    let filter = AccountFilter {
        status: Some(AccountStatus::Active),
        ..Default::default()
    };
    let once = filter_accounts(&accounts, &filter);
    let twice = filter_accounts(&once, &filter);
    assert_eq!(once, twice);
}
