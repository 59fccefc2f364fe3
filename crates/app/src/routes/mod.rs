pub mod dashboard;
pub mod not_found;
pub mod placeholder;
pub mod sidebar;

use crate::auth::{use_auth, use_session, use_session_scope, use_view_snapshot, ActiveSession};
use dioxus::prelude::*;
use session::ViewRouter;
use shared_types::{navigation_for_role, role_can_navigate, Role, View, DEFAULT_VIEW};

use dashboard::DashboardPanel;
use not_found::NotFound;
use placeholder::{ComingSoonPanel, FeaturePanel, UnknownViewPanel};
use sidebar::NavigationMenu;

/// Application routes.
///
/// Every authenticated panel lives under one URL shell; `?view=` selects the
/// panel so reloads and shared links restore it.
#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[layout(AuthGuard)]
    #[route("/portal?:view")]
    Portal { view: Option<String> },
    #[end_layout]
    #[redirect("/", || Route::Portal { view: None })]
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}

/// Auth guard layout: keeps the session in step with the signed-in role, or
/// shows a sign-in notice without touching the navigation catalog.
#[component]
fn AuthGuard() -> Element {
    let auth = use_auth();
    let scope = use_session_scope();

    let tracked = scope.clone();
    let session = use_memo(move || {
        let scope = tracked.as_ref().ok()?;
        match auth.role() {
            Some(role) => Some(match scope.session() {
                Ok(current) if current.role() == role => current,
                _ => scope.begin(role),
            }),
            None => {
                scope.end();
                None
            }
        }
    });
    use_context_provider(|| ActiveSession(session));

    if let Err(err) = scope {
        return rsx! { ContextError { message: err.to_string() } };
    }
    if session.read().is_some() {
        rsx! { Outlet::<Route> {} }
    } else {
        rsx! {
            div { class: "auth-guard-signed-out",
                h1 { "Signed out" }
                p { "Sign in through your community's identity provider to open the portal." }
            }
        }
    }
}

/// Route target for the portal shell.
#[component]
fn Portal(view: Option<String>) -> Element {
    match use_session() {
        Ok(session) => {
            let key = session.id();
            let router = session.router().clone();
            let role = session.role();
            // A new session remounts the shell onto its own router.
            rsx! { PortalShell { key: "{key}", router, role, view } }
        }
        Err(err) => rsx! { ContextError { message: err.to_string() } },
    }
}

/// Apply the URL's `view` to the router when it differs from the active one.
fn sync_from_url(router: &ViewRouter, role: Role, view: Option<String>) {
    let requested = view.unwrap_or_else(|| DEFAULT_VIEW.to_string());
    if router.active_view().as_str() == requested {
        return;
    }
    if !role_can_navigate(role, &requested) {
        tracing::debug!(%role, view = %requested, "deep link to a view outside the sidebar");
    }
    router.set_active_view(requested);
}

/// Sidebar, header and the active content panel, all driven by one router.
#[component]
fn PortalShell(router: ViewRouter, role: Role, view: Option<String>) -> Element {
    // The first frame already reflects the URL.
    let initial = view.clone();
    use_hook(|| sync_from_url(&router, role, initial));
    let snapshot = use_view_snapshot(&router);
    let mut auth = use_auth();

    // Later URL changes. Transitions started from the sidebar already match
    // the URL by the time this runs, so no cycle.
    let url_router = router.clone();
    use_effect(use_reactive!(|view| sync_from_url(&url_router, role, view)));

    let select_router = router.clone();
    let on_select = move |id: &'static str| {
        select_router.set_active_view(id);
        navigator().replace(Route::Portal {
            view: Some(id.to_string()),
        });
    };

    let current = snapshot.read().clone();
    let active_id = current.active_view.as_str().to_string();
    let entries = navigation_for_role(role);
    let role_label = role.label();
    let display_name = auth
        .current_user
        .read()
        .as_ref()
        .map(|u| u.display_name.clone())
        .unwrap_or_default();
    let page_title = current.page_title;

    rsx! {
        div { class: "portal",
            aside { class: "portal-sidebar",
                div { class: "sidebar-brand",
                    span { class: "sidebar-brand-name", "Commons" }
                    span { class: "sidebar-user", "{display_name}" }
                    span { class: "sidebar-role", "{role_label}" }
                }
                NavigationMenu { entries, active: active_id.clone(), onselect: on_select }
                button {
                    class: "sidebar-sign-out",
                    onclick: move |_| auth.clear_auth(),
                    "Sign out"
                }
            }
            main { class: "portal-main",
                header { class: "portal-header",
                    h1 { class: "portal-title", "{page_title}" }
                    if current.is_coming_soon {
                        span { class: "portal-coming-soon-badge", "Coming soon" }
                    }
                }
                section { class: "portal-content",
                    match current.active_view.view() {
                        Some(View::Dashboard) => rsx! { DashboardPanel { role } },
                        Some(view) if view.is_coming_soon() => rsx! { ComingSoonPanel { view } },
                        Some(view) => rsx! { FeaturePanel { view } },
                        None => rsx! { UnknownViewPanel { view_id: active_id.clone() } },
                    }
                }
            }
        }
    }
}

/// Rendered when session context is missing; a wiring bug, not a user error.
#[component]
fn ContextError(message: String) -> Element {
    tracing::error!(%message, "portal rendered without session context");
    rsx! {
        div { class: "context-error", role: "alert",
            h1 { "Portal unavailable" }
            p { "{message}" }
        }
    }
}
