use dioxus::prelude::*;
use session::StatQueryState;
use shared_types::Role;

use crate::stats::{dashboard_aggregator, DashboardStat, StatsSource};

/// Dashboard panel: one widget per statistic, each loading on its own.
#[component]
pub fn DashboardPanel(role: Role) -> Element {
    let source = use_context::<StatsSource>();
    let stats = use_hook(|| dashboard_aggregator(role, source.counter.clone()));
    let states = use_signal(|| stats.states());

    use_hook(|| {
        stats.subscribe(move |key, state| {
            let mut states = states;
            let mut current = states.write();
            if let Some(slot) = current.iter_mut().find(|(k, _)| *k == key) {
                slot.1 = state.clone();
            }
        });
        spawn(stats.refetch_all());
    });

    let refresh = stats.clone();
    let current = states.read().clone();

    rsx! {
        div { class: "dashboard-panel",
            div { class: "dashboard-toolbar",
                button {
                    class: "dashboard-refresh",
                    onclick: move |_| {
                        spawn(refresh.refetch_all());
                    },
                    "Refresh all"
                }
            }
            div { class: "stats-grid",
                for (stat, state) in current {
                    StatWidget {
                        key: "{stat:?}",
                        stat,
                        state,
                        onretry: {
                            let stats = stats.clone();
                            move |_| {
                                if let Some(task) = stats.retry(stat) {
                                    spawn(task);
                                }
                            }
                        },
                    }
                }
            }
        }
    }
}

/// A single stat card. Failures render inline with a retry button.
#[component]
pub fn StatWidget(
    stat: DashboardStat,
    state: StatQueryState<u64>,
    onretry: EventHandler<()>,
) -> Element {
    let title = stat.label();

    rsx! {
        div { class: "stat-card", "data-loading": if state.loading { "true" } else { "false" },
            h3 { class: "stat-title", "{title}" }
            if state.loading {
                div { class: "stat-skeleton", aria_busy: "true" }
            } else if let Some(err) = &state.error {
                div { class: "stat-error", role: "alert",
                    p { class: "stat-error-text", "{err}" }
                    button {
                        class: "stat-retry",
                        onclick: move |_| onretry.call(()),
                        "Retry"
                    }
                }
            } else if let Some(value) = state.data {
                span { class: "stat-value", "{value}" }
            }
        }
    }
}
