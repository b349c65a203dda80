use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// Role
// ---------------------------------------------------------------------------

/// Fixed role enumeration. The role determines which operations the SDK
/// will issue at all; the backend enforces the same rules server-side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Customer,
    BankOfficer,
    Admin,
}

impl Role {
    /// Bank officers and admins are staff.
    pub fn is_staff(self) -> bool {
        matches!(self, Role::BankOfficer | Role::Admin)
    }

    pub fn can_manage_products(self) -> bool {
        self.is_staff()
    }

    pub fn can_view_all_accounts(self) -> bool {
        self.is_staff()
    }

    pub fn can_manage_users(self) -> bool {
        matches!(self, Role::Admin)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Role::Customer => "CUSTOMER",
            Role::BankOfficer => "BANK_OFFICER",
            Role::Admin => "ADMIN",
        };
        f.write_str(name)
    }
}

// ---------------------------------------------------------------------------
// User
// ---------------------------------------------------------------------------

/// Identity decoded from the session token. Never fetched from an endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub role: Role,
}

impl User {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}
