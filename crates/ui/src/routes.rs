use dioxus::prelude::*;
use dioxus_router::{Link, Outlet, Routable};

use track_core::model::ModuleId;

use crate::context::AppContext;
use crate::views::{IntroView, ModuleView};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", IntroView)] Intro {},
        #[route("/:module_id", ModuleView)] Module { module_id: ModuleId },
        // Anything unknown lands back on the intro.
        #[route("/:..segments", NotFound)] NotFound { segments: Vec<String> },
}

#[component]
fn Layout() -> Element {
    rsx! {
        div { class: "app",
            TopNav {}
            main { class: "main",
                Outlet::<Route> {}
            }
        }
    }
}

#[component]
fn TopNav() -> Element {
    let ctx = use_context::<AppContext>();
    let items: Vec<(ModuleId, String)> = ctx
        .modules()
        .modules()
        .iter()
        .map(|module| (module.id(), module.title().to_string()))
        .collect();

    rsx! {
        nav { class: "nav",
            div { class: "brand",
                Link { to: Route::Intro {}, "Track the Attack" }
            }
            div { class: "nav-links",
                for (id, title) in items {
                    Link { key: "{id}", to: Route::Module { module_id: id }, "{title}" }
                }
            }
        }
    }
}

#[component]
fn NotFound(segments: Vec<String>) -> Element {
    let _ = segments;
    rsx! { IntroView {} }
}
