use dioxus::prelude::*;

use crate::i18n;

/// Fixed site header: brand, section nav, language dropdown and the mobile
/// menu button. The switcher and the behavior controller attach to these
/// anchors after mount; English baseline text renders inline and the
/// `data-i18n` keys drive runtime translation.
#[component]
pub fn SiteHeader() -> Element {
    let registry = i18n::registry();
    let languages: Vec<(String, String)> = registry
        .codes()
        .into_iter()
        .map(|code| {
            let display = registry
                .get(&code)
                .map(|entry| entry.display_code.clone())
                .unwrap_or_else(|| code.to_ascii_uppercase());
            (code, display)
        })
        .collect();

    rsx! {
        header { id: "header", class: "header",
            div { class: "header__inner",
                a { class: "logo", href: "#home", "data-i18n": "brand-name", "Sport Planet" }

                nav { id: "nav", class: "nav",
                    a { class: "nav-link active", href: "#home", "data-i18n": "nav-home", "Home" }
                    a { class: "nav-link", href: "#sports", "data-i18n": "nav-sports", "Sports" }
                    a { class: "nav-link", href: "#stories", "data-i18n": "nav-stories", "Stories" }
                    a { class: "nav-link", href: "#how-it-works", "data-i18n": "nav-how", "How it works" }
                    a { class: "nav-link", href: "#contact", "data-i18n": "nav-contact", "Contact" }
                }

                div { id: "language-dropdown", class: "language-dropdown",
                    button {
                        class: "dropdown-trigger",
                        "data-i18n-title": "lang-switcher-title",
                        "data-i18n-aria": "lang-switcher-aria",
                        aria_label: "Choose language",
                        span { class: "selected-code", "EN" }
                        span { class: "dropdown-caret", aria_hidden: "true" }
                    }
                    ul { class: "dropdown-menu",
                        { languages.iter().map(|(code, display)| rsx! {
                            li { key: "{code}",
                                a {
                                    class: "dropdown-item",
                                    href: "#",
                                    "data-lang": "{code}",
                                    "{display}"
                                }
                            }
                        }) }
                    }
                }

                button {
                    id: "mobile-menu-btn",
                    class: "mobile-menu-btn",
                    "data-i18n-aria": "menu-toggle-aria",
                    aria_label: "Open menu",
                    span {}
                    span {}
                    span {}
                }
            }
        }
    }
}
