//! Role-scoped navigation catalog.
//!
//! The catalog is static data: one ordered slice per [`Role`], selected by an
//! exhaustive match. Entry metadata comes from the [`View`] row it points at,
//! so a view shared between roles carries identical label, icon and
//! coming-soon flag everywhere.

use serde::Serialize;

use crate::error::UnknownRoleError;
use crate::role::Role;
use crate::view::{NavIcon, View};

/// Badge on the superadmin payments entry: pending payouts need review.
pub const PAYMENTS_REVIEW_BADGE: &str = "Review";

/// One sidebar item.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct NavigationEntry {
    pub id: &'static str,
    pub label: &'static str,
    pub icon: NavIcon,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub badge: Option<&'static str>,
    pub is_coming_soon: bool,
}

impl NavigationEntry {
    pub const fn for_view(view: View) -> Self {
        Self {
            id: view.id(),
            label: view.label(),
            icon: view.icon(),
            badge: None,
            is_coming_soon: view.is_coming_soon(),
        }
    }

    const fn with_badge(mut self, badge: &'static str) -> Self {
        self.badge = Some(badge);
        self
    }
}

const fn entry(view: View) -> NavigationEntry {
    NavigationEntry::for_view(view)
}

static SUPERADMIN: [NavigationEntry; 5] = [
    entry(View::Dashboard),
    entry(View::Communities),
    entry(View::Administrators),
    entry(View::Payments).with_badge(PAYMENTS_REVIEW_BADGE),
    entry(View::Settings),
];

static ADMIN_HEAD: [NavigationEntry; 8] = [
    entry(View::Dashboard),
    entry(View::Households),
    entry(View::Residents),
    entry(View::Officers),
    entry(View::Payments),
    entry(View::Announcements),
    entry(View::Reports),
    entry(View::Settings),
];

static ADMIN_OFFICER: [NavigationEntry; 7] = [
    entry(View::Dashboard),
    entry(View::Households),
    entry(View::Residents),
    entry(View::Payments),
    entry(View::Announcements),
    entry(View::Complaints),
    entry(View::Settings),
];

static HOUSEHOLD_HEAD: [NavigationEntry; 8] = [
    entry(View::Dashboard),
    entry(View::Members),
    entry(View::Visitors),
    entry(View::Payments),
    entry(View::Announcements),
    entry(View::Complaints),
    entry(View::Emergency),
    entry(View::Settings),
];

static SECURITY_OFFICER: [NavigationEntry; 9] = [
    entry(View::Dashboard),
    entry(View::Visitors),
    entry(View::GateLog),
    entry(View::Vehicles),
    entry(View::Incidents),
    entry(View::Patrols),
    entry(View::Emergency),
    entry(View::Announcements),
    entry(View::Settings),
];

/// Sidebar entries for a role, in render order.
pub fn navigation_for_role(role: Role) -> &'static [NavigationEntry] {
    match role {
        Role::Superadmin => &SUPERADMIN,
        Role::AdminHead => &ADMIN_HEAD,
        Role::AdminOfficer => &ADMIN_OFFICER,
        Role::HouseholdHead => &HOUSEHOLD_HEAD,
        Role::SecurityOfficer => &SECURITY_OFFICER,
    }
}

/// Same as [`navigation_for_role`] for an untyped role string.
pub fn navigation_for_role_str(
    role: &str,
) -> Result<&'static [NavigationEntry], UnknownRoleError> {
    let role: Role = role.parse()?;
    Ok(navigation_for_role(role))
}

/// Whether `view_id` appears in the role's sidebar. Not an access check.
pub fn role_can_navigate(role: Role, view_id: &str) -> bool {
    navigation_for_role(role)
        .iter()
        .any(|entry| entry.id == view_id)
}
