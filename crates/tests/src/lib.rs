#[cfg(test)]
mod common;

#[cfg(test)]
mod catalog_resolver_tests;

#[cfg(test)]
mod session_flow_tests;

#[cfg(test)]
mod dashboard_stats_tests;
