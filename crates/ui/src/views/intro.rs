use dioxus::prelude::*;
use dioxus_router::Link;

use track_core::model::ModuleId;

use crate::context::AppContext;
use crate::routes::Route;

#[component]
pub fn IntroView() -> Element {
    let ctx = use_context::<AppContext>();
    let cards: Vec<(ModuleId, String, String)> = ctx
        .modules()
        .modules()
        .iter()
        .map(|module| {
            (
                module.id(),
                module.title().to_string(),
                module.blurb().to_string(),
            )
        })
        .collect();

    rsx! {
        section { class: "page",
            section { class: "hero-layout",
                div { class: "hero-text intro",
                    div { class: "hero-badge",
                        span { class: "hero-dot" }
                        "Student-friendly walkthrough of HTTPS logins"
                    }

                    h1 {
                        "What really happens when you "
                        span { class: "highlight", "log in to a website?" }
                    }

                    p {
                        "When you open a site like "
                        code { "https://school-portal.com" }
                        " and log in, it feels simple: type your username and password, click "
                        "“Log in,” and wait a second. This site breaks that moment into four "
                        "short modules you can explore at your own pace."
                    }

                    div { class: "hero-buttons",
                        Link {
                            class: "btn primary",
                            to: Route::Module { module_id: ModuleId::Journey },
                            "Start with the Login Journey"
                        }
                        Link {
                            class: "btn ghost",
                            to: Route::Module { module_id: ModuleId::Handshake },
                            "Jump to TLS Handshake"
                        }
                    }
                }

                div { class: "hero-visual",
                    HeroCard {
                        icon: "🌐",
                        title: "Login request",
                        caption: "Browser builds a message with your username and password.",
                    }
                    HeroCard {
                        icon: "🧊",
                        title: "TLS tunnel",
                        caption: "Keys are agreed and traffic is wrapped in encryption.",
                    }
                    HeroCard {
                        icon: "🔐",
                        title: "Secure session",
                        caption: "The server checks your login over a private connection.",
                    }
                }
            }

            section { class: "panel background-panel",
                div { class: "background-header-row",
                    div {
                        h2 { "Background: What’s going on behind that “Log in” button?" }
                        p { class: "panel-subtitle",
                            "No prior networking knowledge needed. Skim this section once, then "
                            "use the modules to deepen each idea."
                        }
                    }
                    div { class: "background-tag-row",
                        span { class: "background-pill", "TCP/IP layers" }
                        span { class: "background-pill", "HTTPS / TLS" }
                        span { class: "background-pill", "Authentication & MFA" }
                    }
                }

                div { class: "background-columns",
                    div { class: "background-column",
                        div { class: "background-block",
                            h3 { "1. Your login is just a message" }
                            p {
                                "When you click "
                                strong { "“Log in”" }
                                ", your browser creates a message that says something like: "
                                "“Here is this student’s name and password, please check them.” "
                                "On its own this is just text, like a note you could write on a "
                                "piece of paper."
                            }
                            p {
                                "To send that note across the Internet, computers follow sets of "
                                "rules called "
                                strong { "protocols" }
                                ". They describe how to cut the message into pieces, number "
                                "those pieces, send them, and put them back together."
                            }
                        }

                        div { class: "background-block",
                            h3 { "2. Layers = envelopes around the message" }
                            p {
                                "Before the login leaves your computer, it gets wrapped in "
                                "several “envelopes.” Each layer adds its own info:"
                            }
                            ul { class: "background-list",
                                li {
                                    strong { "Application layer" }
                                    ": “This is a website login for school-portal.com.”"
                                }
                                li {
                                    strong { "Transport layer (TCP)" }
                                    ": “Deliver these pieces in order, and resend if any are lost.”"
                                }
                                li {
                                    strong { "Internet layer (IP)" }
                                    ": “Send this to this server address.”"
                                }
                                li {
                                    strong { "Link layer (Wi-Fi / cable)" }
                                    ": “Turn bits into radio waves or electrical signals on this "
                                    "local network.”"
                                }
                            }
                            p {
                                "Together these layers are often called the "
                                strong { "TCP/IP model" }
                                "."
                            }
                        }

                        div { class: "background-block",
                            h3 { "3. Why we need HTTPS / TLS" }
                            p {
                                "By default, those envelopes are not secret. A person on the "
                                "same Wi-Fi, or somewhere along the path, could read what’s "
                                "inside — including your password."
                            }
                            p {
                                strong { "HTTPS" }
                                " solves that by adding an extra security layer called "
                                strong { "TLS" }
                                ". TLS builds an encrypted “tunnel” between your browser and the "
                                "website so outsiders see scrambled data instead of your real "
                                "login."
                            }
                        }

                        div { class: "background-block",
                            h3 { "4. Proving it’s really you: authentication" }
                            p {
                                "Even with a secure tunnel, the website needs to know who you "
                                "are. That process is called "
                                strong { "authentication" }
                                "."
                            }
                            p {
                                "The simplest version is a password (something you know). Modern "
                                "sites often add extra steps like texted codes, app codes, or "
                                "security keys — called "
                                strong { "multi-factor authentication (MFA)" }
                                ". Some MFA methods are easy to trick out of people; others "
                                "(like security keys) are built to resist phishing."
                            }
                        }
                    }

                    div { class: "background-column background-visual",
                        div { class: "background-card",
                            h4 { "TCP/IP “envelope” stack" }
                            p { class: "background-card-subtitle",
                                "The same login, seen at different layers."
                            }
                            div { class: "layer-stack",
                                LayerBox {
                                    title: "Website & Apps",
                                    caption: "Login form, username, password, “Log in” button.",
                                }
                                LayerBox {
                                    title: "Reliable Conversation (TCP)",
                                    caption: "Makes sure packets arrive and are re-ordered correctly.",
                                }
                                LayerBox {
                                    title: "Internet Addresses (IP)",
                                    caption: "Uses IP addresses to reach the correct server.",
                                }
                                LayerBox {
                                    title: "Wi-Fi / Cable",
                                    caption: "Turns bits into radio waves or signals on a wire.",
                                }
                            }
                        }

                        div { class: "background-card",
                            h4 { "HTTPS tunnel" }
                            p { class: "background-card-subtitle",
                                "What changes when you add the “S” in HTTPS."
                            }
                            div { class: "tunnel-card",
                                p {
                                    "TLS wraps your login in a protective “tube” between your "
                                    "browser and the real site. People on the path can see that "
                                    em { "something" }
                                    " is being sent, but not the contents."
                                }
                                div { class: "tunnel-legend",
                                    span { class: "legend-dot legend-plain" }
                                    span { "Plain HTTP: easy to read" }
                                }
                                div { class: "tunnel-legend",
                                    span { class: "legend-dot legend-encrypted" }
                                    span { "HTTPS/TLS: scrambled to outsiders" }
                                }
                            }
                        }
                    }
                }
            }

            section { class: "panel panel-intro-grid",
                for (id, title, blurb) in cards {
                    article { key: "{id}", class: "card intro-card",
                        h2 { "{title}" }
                        p { class: "muted", "{blurb}" }
                        Link { class: "btn small", to: Route::Module { module_id: id }, "Open module" }
                    }
                }
            }
        }
    }
}

#[component]
fn HeroCard(icon: &'static str, title: &'static str, caption: &'static str) -> Element {
    rsx! {
        div { class: "hero-card",
            div { class: "hero-card-icon", "{icon}" }
            div { class: "hero-card-title", "{title}" }
            div { class: "hero-card-caption", "{caption}" }
        }
    }
}

#[component]
fn LayerBox(title: &'static str, caption: &'static str) -> Element {
    rsx! {
        div { class: "layer-box",
            div { class: "layer-title", "{title}" }
            div { class: "layer-caption", "{caption}" }
        }
    }
}
