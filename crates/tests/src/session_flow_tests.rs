use pretty_assertions::assert_eq;
use session::{SessionScope, ViewSnapshot};
use shared_types::{ContextNotInitializedError, Role, View, FALLBACK_TITLE};
use std::cell::RefCell;
use std::rc::Rc;

#[test]
fn router_is_unavailable_outside_a_session() {
    let scope = SessionScope::new();
    assert_eq!(
        scope.router().unwrap_err(),
        ContextNotInitializedError::new("view router")
    );
}

#[test]
fn sidebar_selection_drives_title_and_banner() {
    let scope = SessionScope::new();
    let session = scope.begin(Role::HouseholdHead);

    let router = scope.router().unwrap();
    let observed = Rc::new(RefCell::new(Vec::<ViewSnapshot>::new()));
    let sink = Rc::clone(&observed);
    router.subscribe(move |snapshot| sink.borrow_mut().push(snapshot.clone()));

    for entry in session.navigation() {
        router.set_active_view(entry.id);
        assert_eq!(router.active_view().as_str(), entry.id);
        assert_eq!(router.is_coming_soon(), entry.is_coming_soon);
    }

    let observed = observed.borrow();
    assert_eq!(observed.len(), session.navigation().len());
    for (snapshot, entry) in observed.iter().zip(session.navigation()) {
        assert_eq!(snapshot.active_view.as_str(), entry.id);
        assert_eq!(snapshot.is_coming_soon, entry.is_coming_soon);
    }
}

#[test]
fn every_resolver_view_and_an_unknown_one_are_routable() {
    let scope = SessionScope::new();
    scope.begin(Role::Superadmin);
    let router = scope.router().unwrap();

    for view in View::ALL {
        router.set_active_view(view);
        assert_eq!(router.page_title(), view.title());
        assert_eq!(router.is_coming_soon(), view.is_coming_soon());
    }

    router.set_active_view("marketplace");
    assert_eq!(router.active_view().as_str(), "marketplace");
    assert_eq!(router.page_title(), FALLBACK_TITLE);
    assert!(!router.is_coming_soon());
}

#[test]
fn logout_and_login_restart_on_dashboard() {
    let scope = SessionScope::new();
    scope.begin(Role::AdminHead);
    scope.router().unwrap().set_active_view(View::Reports);

    scope.end();
    assert!(scope.navigation().is_err());

    scope.begin(Role::AdminOfficer);
    let snapshot = scope.router().unwrap().snapshot();
    assert_eq!(snapshot, ViewSnapshot::default());
    assert_eq!(scope.navigation().unwrap().len(), 7);
}

#[test]
fn url_sync_pattern_does_not_loop() {
    // The shell mirrors transitions into the URL and applies URL changes only
    // when they differ from the active view.
    let scope = SessionScope::new();
    scope.begin(Role::SecurityOfficer);
    let router = scope.router().unwrap();

    let url = Rc::new(RefCell::new(String::from("dashboard")));
    let url_writer = Rc::clone(&url);
    router.subscribe(move |snapshot| {
        *url_writer.borrow_mut() = snapshot.active_view.to_string();
    });

    let transitions = Rc::new(RefCell::new(0));
    let counter = Rc::clone(&transitions);
    router.subscribe(move |_| *counter.borrow_mut() += 1);

    router.set_active_view(View::GateLog);
    let from_url = url.borrow().clone();
    if router.active_view().as_str() != from_url {
        router.set_active_view(from_url);
    }

    assert_eq!(*transitions.borrow(), 1);
    assert_eq!(url.borrow().as_str(), "gate_log");
}
