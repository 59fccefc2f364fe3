use pretty_assertions::assert_eq;
use shared_types::{
    is_coming_soon, navigation_for_role, navigation_for_role_str, resolve_title, NavigationEntry,
    Role, UnknownRoleError, View, FALLBACK_TITLE,
};
use std::collections::{HashMap, HashSet};

#[test]
fn every_role_has_a_non_empty_unique_list() {
    for role in Role::ALL {
        let entries = navigation_for_role(role);
        assert!(!entries.is_empty(), "{role} has no navigation");
        let ids: HashSet<&str> = entries.iter().map(|e| e.id).collect();
        assert_eq!(ids.len(), entries.len(), "{role} repeats an id");
    }
}

#[test]
fn concrete_entry_counts() {
    let counts: Vec<(Role, usize)> = Role::ALL
        .into_iter()
        .map(|role| (role, navigation_for_role(role).len()))
        .collect();
    assert_eq!(
        counts,
        vec![
            (Role::Superadmin, 5),
            (Role::AdminHead, 8),
            (Role::AdminOfficer, 7),
            (Role::HouseholdHead, 8),
            (Role::SecurityOfficer, 9),
        ]
    );
}

#[test]
fn string_and_typed_lookups_agree() {
    for role in Role::ALL {
        let by_str = navigation_for_role_str(role.as_str()).unwrap();
        assert_eq!(by_str, navigation_for_role(role));
    }
    assert_eq!(
        navigation_for_role_str("guard").unwrap_err(),
        UnknownRoleError::new("guard")
    );
}

#[test]
fn shared_ids_carry_identical_metadata_across_roles() {
    let mut seen: HashMap<&str, NavigationEntry> = HashMap::new();
    for role in Role::ALL {
        for entry in navigation_for_role(role) {
            let unbadged = NavigationEntry {
                badge: None,
                ..*entry
            };
            let first = seen.entry(entry.id).or_insert(unbadged);
            assert_eq!(first.label, entry.label, "{} label differs", entry.id);
            assert_eq!(first.icon, entry.icon, "{} icon differs", entry.id);
            assert_eq!(first.is_coming_soon, entry.is_coming_soon);
        }
    }
}

#[test]
fn payments_badge_is_unique_to_superadmin() {
    for role in Role::ALL {
        let payments = navigation_for_role(role)
            .iter()
            .find(|entry| entry.id == View::Payments.id());
        match (role, payments) {
            (Role::Superadmin, Some(entry)) => assert!(entry.badge.is_some()),
            (_, Some(entry)) => assert_eq!(entry.badge, None, "{role}"),
            (_, None) => {}
        }
    }
}

#[test]
fn catalog_flags_match_the_resolver() {
    for role in Role::ALL {
        for entry in navigation_for_role(role) {
            assert_eq!(entry.is_coming_soon, is_coming_soon(entry.id), "{}", entry.id);
            assert_ne!(resolve_title(entry.id), FALLBACK_TITLE, "{}", entry.id);
        }
    }
}

#[test]
fn resolver_answers_for_views_outside_every_sidebar() {
    let in_some_sidebar: HashSet<&str> = Role::ALL
        .into_iter()
        .flat_map(|role| navigation_for_role(role).iter().map(|e| e.id))
        .collect();
    for view in View::ALL {
        // Deep links resolve whether or not a sidebar lists them.
        assert_eq!(resolve_title(view.id()), view.title());
        if !in_some_sidebar.contains(view.id()) {
            assert_eq!(is_coming_soon(view.id()), view.is_coming_soon());
        }
    }
}
