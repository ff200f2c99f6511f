use dioxus::prelude::*;

/// Landing page body: hero slider, sports, stories, how-it-works and contact
/// sections, plus the footer with the legacy language select.
#[component]
pub fn Home() -> Element {
    rsx! {
        section { id: "home", class: "hero",
            div { id: "hero-slider", class: "hero-slider", aria_hidden: "true",
                div {
                    class: "hero-slide active",
                    style: "background-image: url('/assets/hero/stadium.jpg')",
                }
                div {
                    class: "hero-slide",
                    style: "background-image: url('/assets/hero/track.jpg')",
                }
                div {
                    class: "hero-slide",
                    style: "background-image: url('/assets/hero/court.jpg')",
                }
            }
            div { class: "animated-bg", aria_hidden: "true" }
            div { class: "hero__content",
                h1 { "data-i18n": "hero-title", "Discover. Connect. Succeed." }
                p { "data-i18n": "hero-subtitle",
                    "Find your sport, your team and your next challenge, all in one place."
                }
                div { class: "hero__actions",
                    button { class: "btn btn-primary", "data-i18n": "hero-cta", "Get started" }
                    button { class: "btn btn-ghost", "data-i18n": "hero-cta-secondary", "Browse sports" }
                }
            }
        }

        section { id: "sports", class: "section",
            h2 { "data-i18n": "sports-title", "Popular sports" }
            div { class: "card-grid",
                div { class: "sport-card", h3 { "data-i18n": "sport-football", "Football" } }
                div { class: "sport-card", h3 { "data-i18n": "sport-basketball", "Basketball" } }
                div { class: "sport-card", h3 { "data-i18n": "sport-tennis", "Tennis" } }
                div { class: "sport-card", h3 { "data-i18n": "sport-swimming", "Swimming" } }
            }
        }

        section { id: "stories", class: "section",
            h2 { "data-i18n": "stories-title", "Success stories" }
            div { class: "card-grid",
                div { class: "story-card",
                    p { "data-i18n": "story-1", "I found my five-a-side team within a week." }
                }
                div { class: "story-card",
                    p { "data-i18n": "story-2", "From the couch to my first 10k, together with a crew." }
                }
            }
        }

        section { id: "how-it-works", class: "section",
            h2 { "data-i18n": "steps-title", "How it works" }
            ol { class: "steps",
                li { class: "step",
                    h3 { "data-i18n": "step-1-title", "Pick a sport" }
                    p { "data-i18n": "step-1-text", "Browse dozens of disciplines near you." }
                }
                li { class: "step",
                    h3 { "data-i18n": "step-2-title", "Join a group" }
                    p { "data-i18n": "step-2-text", "Connect with players at your level." }
                }
                li { class: "step",
                    h3 { "data-i18n": "step-3-title", "Play" }
                    p { "data-i18n": "step-3-text", "Show up, have fun and track your progress." }
                }
            }
        }

        section { id: "contact", class: "section",
            h2 { "data-i18n": "contact-title", "Get in touch" }
            form { class: "contact-form",
                input { r#type: "text", "data-i18n": "contact-name-ph", placeholder: "Your name" }
                input { r#type: "email", "data-i18n": "contact-email-ph", placeholder: "Your email" }
                textarea { "data-i18n": "contact-message-ph", placeholder: "Your message" }
                button { r#type: "submit", class: "btn btn-primary", "data-i18n": "contact-send",
                    "Send message"
                }
            }
        }

        footer { class: "footer",
            p { "data-i18n": "footer-tagline", "Sport Planet. Discover, connect, succeed." }
            label { class: "visually-hidden", r#for: "legacy-language", "data-i18n": "lang-label",
                "Language"
            }
            // Legacy control; independent of the header dropdown on purpose.
            select { id: "legacy-language", class: "language-switch",
                option { value: "en", "English" }
                option { value: "ar", "العربية" }
            }
        }
    }
}
