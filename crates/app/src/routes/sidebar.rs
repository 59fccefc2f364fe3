use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{
    LdBuilding, LdCar, LdCreditCard, LdDoorOpen, LdFileText, LdLayoutDashboard, LdMapPin,
    LdMegaphone, LdMessageSquare, LdSettings, LdShield, LdShieldAlert, LdSiren, LdUserCheck,
    LdUsers,
};
use dioxus_free_icons::Icon;
use shared_types::{NavIcon, NavigationEntry};

/// Role-scoped sidebar menu. Selection is reported, never routed here.
#[component]
pub fn NavigationMenu(
    entries: &'static [NavigationEntry],
    active: String,
    onselect: EventHandler<&'static str>,
) -> Element {
    rsx! {
        nav { class: "sidebar-menu",
            ul {
                for entry in entries.iter() {
                    li { key: "{entry.id}", class: "sidebar-menu-item",
                        button {
                            class: "sidebar-menu-button",
                            "data-active": if entry.id == active { "true" } else { "false" },
                            "data-coming-soon": if entry.is_coming_soon { "true" } else { "false" },
                            onclick: {
                                let id = entry.id;
                                move |_| onselect.call(id)
                            },
                            NavIconGlyph { icon: entry.icon }
                            span { class: "sidebar-menu-label", "{entry.label}" }
                            if let Some(badge) = entry.badge {
                                span { class: "sidebar-menu-badge", "{badge}" }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn NavIconGlyph(icon: NavIcon) -> Element {
    match icon {
        NavIcon::LayoutDashboard => rsx! { Icon::<LdLayoutDashboard> { icon: LdLayoutDashboard, width: 18, height: 18 } },
        NavIcon::Building => rsx! { Icon::<LdBuilding> { icon: LdBuilding, width: 18, height: 18 } },
        NavIcon::Shield => rsx! { Icon::<LdShield> { icon: LdShield, width: 18, height: 18 } },
        NavIcon::ShieldAlert => rsx! { Icon::<LdShieldAlert> { icon: LdShieldAlert, width: 18, height: 18 } },
        NavIcon::CreditCard => rsx! { Icon::<LdCreditCard> { icon: LdCreditCard, width: 18, height: 18 } },
        NavIcon::Settings => rsx! { Icon::<LdSettings> { icon: LdSettings, width: 18, height: 18 } },
        NavIcon::Users => rsx! { Icon::<LdUsers> { icon: LdUsers, width: 18, height: 18 } },
        NavIcon::UserCheck => rsx! { Icon::<LdUserCheck> { icon: LdUserCheck, width: 18, height: 18 } },
        NavIcon::Megaphone => rsx! { Icon::<LdMegaphone> { icon: LdMegaphone, width: 18, height: 18 } },
        NavIcon::FileText => rsx! { Icon::<LdFileText> { icon: LdFileText, width: 18, height: 18 } },
        NavIcon::MessageSquare => rsx! { Icon::<LdMessageSquare> { icon: LdMessageSquare, width: 18, height: 18 } },
        NavIcon::Siren => rsx! { Icon::<LdSiren> { icon: LdSiren, width: 18, height: 18 } },
        NavIcon::DoorOpen => rsx! { Icon::<LdDoorOpen> { icon: LdDoorOpen, width: 18, height: 18 } },
        NavIcon::Car => rsx! { Icon::<LdCar> { icon: LdCar, width: 18, height: 18 } },
        NavIcon::MapPin => rsx! { Icon::<LdMapPin> { icon: LdMapPin, width: 18, height: 18 } },
    }
}
