use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::UnknownRoleError;

/// Authenticated identity that decides which features a user sees.
///
/// The set is closed; parsing anything else fails with [`UnknownRoleError`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Superadmin,
    AdminHead,
    AdminOfficer,
    HouseholdHead,
    SecurityOfficer,
}

impl Role {
    /// Every role, in privilege order.
    pub const ALL: [Role; 5] = [
        Role::Superadmin,
        Role::AdminHead,
        Role::AdminOfficer,
        Role::HouseholdHead,
        Role::SecurityOfficer,
    ];

    /// Lowercase identifier as stored by the identity provider.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Role::Superadmin => "superadmin",
            Role::AdminHead => "admin_head",
            Role::AdminOfficer => "admin_officer",
            Role::HouseholdHead => "household_head",
            Role::SecurityOfficer => "security_officer",
        }
    }

    /// Human-readable label for headers and profile menus.
    pub const fn label(&self) -> &'static str {
        match self {
            Role::Superadmin => "Super Admin",
            Role::AdminHead => "Head Administrator",
            Role::AdminOfficer => "Administrative Officer",
            Role::HouseholdHead => "Household Head",
            Role::SecurityOfficer => "Security Officer",
        }
    }
}

impl FromStr for Role {
    type Err = UnknownRoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Role::ALL
            .into_iter()
            .find(|role| role.as_str() == s)
            .ok_or_else(|| UnknownRoleError::new(s))
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
