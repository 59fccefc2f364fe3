//! Dashboard statistics and the PostgREST count transport behind them.

use session::StatAggregator;
use shared_types::{DataSourceConfig, Role};
use thiserror::Error;

/// A count shown on a role's dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DashboardStat {
    Communities,
    Administrators,
    PendingPayments,
    Households,
    Residents,
    OpenComplaints,
    HouseholdMembers,
    ExpectedVisitors,
    OpenIncidents,
}

impl DashboardStat {
    /// Widgets on a role's dashboard, in render order.
    pub fn for_role(role: Role) -> &'static [DashboardStat] {
        match role {
            Role::Superadmin => &[
                DashboardStat::Communities,
                DashboardStat::Administrators,
                DashboardStat::PendingPayments,
            ],
            Role::AdminHead | Role::AdminOfficer => &[
                DashboardStat::Households,
                DashboardStat::Residents,
                DashboardStat::PendingPayments,
                DashboardStat::OpenComplaints,
            ],
            Role::HouseholdHead => &[
                DashboardStat::HouseholdMembers,
                DashboardStat::ExpectedVisitors,
                DashboardStat::PendingPayments,
            ],
            Role::SecurityOfficer => &[
                DashboardStat::ExpectedVisitors,
                DashboardStat::OpenIncidents,
            ],
        }
    }

    pub const fn label(&self) -> &'static str {
        match self {
            DashboardStat::Communities => "Communities",
            DashboardStat::Administrators => "Administrators",
            DashboardStat::PendingPayments => "Pending Payments",
            DashboardStat::Households => "Households",
            DashboardStat::Residents => "Residents",
            DashboardStat::OpenComplaints => "Open Complaints",
            DashboardStat::HouseholdMembers => "Household Members",
            DashboardStat::ExpectedVisitors => "Expected Visitors",
            DashboardStat::OpenIncidents => "Open Incidents",
        }
    }

    /// PostgREST table and optional row filter counted for this stat.
    pub const fn query(&self) -> (&'static str, Option<&'static str>) {
        match self {
            DashboardStat::Communities => ("communities", None),
            DashboardStat::Administrators => ("profiles", Some("role=in.(admin_head,admin_officer)")),
            DashboardStat::PendingPayments => ("payments", Some("status=eq.pending")),
            DashboardStat::Households => ("households", None),
            DashboardStat::Residents => ("residents", None),
            DashboardStat::OpenComplaints => ("complaints", Some("status=eq.open")),
            DashboardStat::HouseholdMembers => ("household_members", None),
            DashboardStat::ExpectedVisitors => ("visitors", Some("status=eq.expected")),
            DashboardStat::OpenIncidents => ("incidents", Some("status=eq.open")),
        }
    }
}

/// Why a count request failed.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("data source is not configured")]
    NotConfigured,
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("unexpected status {0}")]
    Status(u16),
    #[error("response has no Content-Range header")]
    MissingContentRange,
    #[error("invalid Content-Range `{0}`")]
    InvalidContentRange(String),
}

/// Extract the total from a PostgREST `Content-Range` header (`0-0/42`, `*/0`).
pub fn parse_content_range_total(header: &str) -> Result<u64, TransportError> {
    let invalid = || TransportError::InvalidContentRange(header.to_string());
    let (_, total) = header.trim().rsplit_once('/').ok_or_else(invalid)?;
    total.parse::<u64>().map_err(|_| invalid())
}

/// Counts rows through PostgREST without transferring them.
#[derive(Debug, Clone)]
pub struct PostgrestCounter {
    client: reqwest::Client,
    rest_url: String,
    anon_key: String,
}

impl PostgrestCounter {
    pub fn from_config(config: &DataSourceConfig) -> Result<Self, TransportError> {
        let (Some(rest_url), Some(anon_key)) = (&config.rest_url, &config.anon_key) else {
            return Err(TransportError::NotConfigured);
        };
        if !config.is_configured() {
            return Err(TransportError::NotConfigured);
        }

        let builder = reqwest::Client::builder();
        #[cfg(not(target_arch = "wasm32"))]
        let builder = builder.timeout(std::time::Duration::from_secs(config.timeout_secs));
        let client = builder.build()?;

        Ok(Self {
            client,
            rest_url: rest_url.trim_end_matches('/').to_string(),
            anon_key: anon_key.clone(),
        })
    }

    pub fn count_url(&self, stat: DashboardStat) -> String {
        let (table, filter) = stat.query();
        match filter {
            Some(filter) => format!("{}/{table}?select=id&{filter}", self.rest_url),
            None => format!("{}/{table}?select=id", self.rest_url),
        }
    }

    pub async fn count(&self, stat: DashboardStat) -> Result<u64, TransportError> {
        let response = self
            .client
            .get(self.count_url(stat))
            .header("apikey", &self.anon_key)
            .bearer_auth(&self.anon_key)
            .header("Prefer", "count=exact")
            .header("Range", "0-0")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(TransportError::Status(status.as_u16()));
        }
        let header = response
            .headers()
            .get("content-range")
            .and_then(|v| v.to_str().ok())
            .ok_or(TransportError::MissingContentRange)?;
        parse_content_range_total(header)
    }
}

/// The counter injected into dashboards; `None` when no data source is set.
#[derive(Debug, Clone)]
pub struct StatsSource {
    pub counter: Option<PostgrestCounter>,
}

impl StatsSource {
    pub fn from_config(config: &DataSourceConfig) -> Self {
        let counter = match PostgrestCounter::from_config(config) {
            Ok(counter) => Some(counter),
            Err(e) => {
                tracing::info!(error = %e, "dashboard statistics disabled");
                None
            }
        };
        Self { counter }
    }
}

/// One aggregator per mounted dashboard, tracking the role's widgets.
pub fn dashboard_aggregator(
    role: Role,
    counter: Option<PostgrestCounter>,
) -> StatAggregator<DashboardStat, u64> {
    DashboardStat::for_role(role)
        .iter()
        .fold(StatAggregator::builder(), |builder, &stat| {
            let counter = counter.clone();
            builder.track(stat, move || {
                let counter = counter.clone();
                async move {
                    match counter {
                        Some(counter) => counter.count(stat).await,
                        None => Err(TransportError::NotConfigured),
                    }
                }
            })
        })
        .build()
}
