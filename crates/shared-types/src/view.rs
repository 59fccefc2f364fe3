//! Content views and the feature metadata resolver.
//!
//! Every view the portal knows is a [`View`] variant, so titles and
//! coming-soon flags are exhaustive matches checked by the compiler. The
//! router itself stores a free-form [`ViewId`] because deep links and
//! rollouts can name views this build has never heard of; those resolve to
//! [`FALLBACK_TITLE`].

use serde::{Deserialize, Serialize};
use std::fmt;

/// Title shown for a view id with no [`View`] counterpart.
pub const FALLBACK_TITLE: &str = "Feature";

/// Identifier of the view every session starts on.
pub const DEFAULT_VIEW: &str = "dashboard";

/// A content panel the portal can render.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum View {
    Dashboard,
    Communities,
    Administrators,
    Payments,
    Settings,
    Households,
    Residents,
    Officers,
    Announcements,
    Reports,
    Complaints,
    Members,
    Visitors,
    Emergency,
    GateLog,
    Vehicles,
    Incidents,
    Patrols,
}

impl View {
    pub const ALL: [View; 18] = [
        View::Dashboard,
        View::Communities,
        View::Administrators,
        View::Payments,
        View::Settings,
        View::Households,
        View::Residents,
        View::Officers,
        View::Announcements,
        View::Reports,
        View::Complaints,
        View::Members,
        View::Visitors,
        View::Emergency,
        View::GateLog,
        View::Vehicles,
        View::Incidents,
        View::Patrols,
    ];

    pub const fn id(&self) -> &'static str {
        match self {
            View::Dashboard => "dashboard",
            View::Communities => "communities",
            View::Administrators => "administrators",
            View::Payments => "payments",
            View::Settings => "settings",
            View::Households => "households",
            View::Residents => "residents",
            View::Officers => "officers",
            View::Announcements => "announcements",
            View::Reports => "reports",
            View::Complaints => "complaints",
            View::Members => "members",
            View::Visitors => "visitors",
            View::Emergency => "emergency",
            View::GateLog => "gate_log",
            View::Vehicles => "vehicles",
            View::Incidents => "incidents",
            View::Patrols => "patrols",
        }
    }

    pub fn from_id(id: &str) -> Option<View> {
        View::ALL.into_iter().find(|view| view.id() == id)
    }

    /// Short label used in the sidebar.
    pub const fn label(&self) -> &'static str {
        match self {
            View::Dashboard => "Dashboard",
            View::Communities => "Communities",
            View::Administrators => "Administrators",
            View::Payments => "Payments",
            View::Settings => "Settings",
            View::Households => "Households",
            View::Residents => "Residents",
            View::Officers => "Officers",
            View::Announcements => "Announcements",
            View::Reports => "Reports",
            View::Complaints => "Complaints",
            View::Members => "Members",
            View::Visitors => "Visitors",
            View::Emergency => "Emergency",
            View::GateLog => "Gate Log",
            View::Vehicles => "Vehicles",
            View::Incidents => "Incidents",
            View::Patrols => "Patrols",
        }
    }

    /// Page title shown above the content panel.
    pub const fn title(&self) -> &'static str {
        match self {
            View::Dashboard => "Dashboard",
            View::Communities => "Community Management",
            View::Administrators => "Administrator Accounts",
            View::Payments => "Payments & Dues",
            View::Settings => "Settings",
            View::Households => "Households",
            View::Residents => "Residents",
            View::Officers => "Security Officers",
            View::Announcements => "Announcements",
            View::Reports => "Reports & Analytics",
            View::Complaints => "Complaints",
            View::Members => "Household Members",
            View::Visitors => "Visitor Management",
            View::Emergency => "Emergency Alerts",
            View::GateLog => "Gate Log",
            View::Vehicles => "Vehicle Registry",
            View::Incidents => "Incident Reports",
            View::Patrols => "Patrol Schedule",
        }
    }

    pub const fn icon(&self) -> NavIcon {
        match self {
            View::Dashboard => NavIcon::LayoutDashboard,
            View::Communities => NavIcon::Building,
            View::Administrators => NavIcon::Shield,
            View::Payments => NavIcon::CreditCard,
            View::Settings => NavIcon::Settings,
            View::Households => NavIcon::Building,
            View::Residents => NavIcon::Users,
            View::Officers => NavIcon::ShieldAlert,
            View::Announcements => NavIcon::Megaphone,
            View::Reports => NavIcon::FileText,
            View::Complaints => NavIcon::MessageSquare,
            View::Members => NavIcon::Users,
            View::Visitors => NavIcon::UserCheck,
            View::Emergency => NavIcon::Siren,
            View::GateLog => NavIcon::DoorOpen,
            View::Vehicles => NavIcon::Car,
            View::Incidents => NavIcon::ShieldAlert,
            View::Patrols => NavIcon::MapPin,
        }
    }

    /// Navigable but not built yet; the shell renders a placeholder.
    pub const fn is_coming_soon(&self) -> bool {
        match self {
            View::Dashboard
            | View::Communities
            | View::Administrators
            | View::Payments
            | View::Settings
            | View::Households
            | View::Residents
            | View::Officers
            | View::Members
            | View::Visitors => false,
            View::Announcements
            | View::Reports
            | View::Complaints
            | View::Emergency
            | View::GateLog
            | View::Vehicles
            | View::Incidents
            | View::Patrols => true,
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Sidebar glyph. Names follow the Lucide icon set.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum NavIcon {
    LayoutDashboard,
    Building,
    Shield,
    ShieldAlert,
    CreditCard,
    Settings,
    Users,
    UserCheck,
    Megaphone,
    FileText,
    MessageSquare,
    Siren,
    DoorOpen,
    Car,
    MapPin,
}

impl NavIcon {
    pub const fn as_str(&self) -> &'static str {
        match self {
            NavIcon::LayoutDashboard => "layout-dashboard",
            NavIcon::Building => "building",
            NavIcon::Shield => "shield",
            NavIcon::ShieldAlert => "shield-alert",
            NavIcon::CreditCard => "credit-card",
            NavIcon::Settings => "settings",
            NavIcon::Users => "users",
            NavIcon::UserCheck => "user-check",
            NavIcon::Megaphone => "megaphone",
            NavIcon::FileText => "file-text",
            NavIcon::MessageSquare => "message-square",
            NavIcon::Siren => "siren",
            NavIcon::DoorOpen => "door-open",
            NavIcon::Car => "car",
            NavIcon::MapPin => "map-pin",
        }
    }
}

/// The router's notion of "which panel is showing".
///
/// Free-form so that ids outside [`View`] survive a round trip through the URL.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct ViewId(String);

impl ViewId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The known view this id names, if any.
    pub fn view(&self) -> Option<View> {
        View::from_id(&self.0)
    }
}

impl Default for ViewId {
    fn default() -> Self {
        Self::new(DEFAULT_VIEW)
    }
}

impl From<View> for ViewId {
    fn from(view: View) -> Self {
        Self::new(view.id())
    }
}

impl From<&str> for ViewId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for ViewId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl fmt::Display for ViewId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Page title for a view id; unknown ids get [`FALLBACK_TITLE`].
pub fn resolve_title(view_id: &str) -> &'static str {
    View::from_id(view_id)
        .map(|view| view.title())
        .unwrap_or(FALLBACK_TITLE)
}

/// Whether a view id names an unimplemented feature. Unknown ids are not.
pub fn is_coming_soon(view_id: &str) -> bool {
    View::from_id(view_id)
        .map(|view| view.is_coming_soon())
        .unwrap_or(false)
}
