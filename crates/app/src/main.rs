use dioxus::prelude::*;
use session::SessionScope;

mod auth;
mod config;
mod routes;
mod stats;
use auth::{AuthState, AuthUser};
use routes::Route;
use stats::StatsSource;

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let config = use_hook(config::load_config);

    let mut auth = use_context_provider(AuthState::new);
    // One scope per mounted app; AuthGuard begins and ends sessions in it.
    use_context_provider(SessionScope::new);
    use_context_provider(|| StatsSource::from_config(&config.data));

    // Without a hosted identity provider, sign in as the configured role.
    use_hook(|| {
        if let Some(role) = config.session.role {
            let display_name = config
                .session
                .display_name
                .clone()
                .unwrap_or_else(|| role.label().to_string());
            auth.set_user(AuthUser { display_name, role });
        }
    });

    rsx! {
        Router::<Route> {}
    }
}
