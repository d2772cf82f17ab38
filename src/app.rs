mod contact;
mod header;
mod homepage;
mod scroll;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::content::{NAV_ITEMS, PROFILE};
use header::Header;
use homepage::HomePage;
use scroll::{use_active_section, use_scroll_reveal};

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="antialiased">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        <Title formatter=|title| format!("{} - {title}", PROFILE.name) />

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=path!("/") view=Portfolio />
            </Routes>
        </Router>
    }
}

/// The one page: header, every section, and the observers that watch them.
#[component]
fn Portfolio() -> impl IntoView {
    let active = use_active_section(NAV_ITEMS);
    use_scroll_reveal();

    view! {
        <div class="min-h-dvh">
            <a
                href="#home"
                class="sr-only focus:not-sr-only focus:fixed focus:left-3 focus:top-3 focus:z-50 focus:rounded-md focus:bg-brand focus:px-3 focus:py-2 focus:text-white"
            >
                "Skip to content"
            </a>
            <Header active />
            <HomePage />
            <footer class="mt-16 border-t border-black/10 py-6 text-center text-xs text-gray-600">
                {format!("© {} {}. All rights reserved.", env!("BUILD_YEAR"), PROFILE.name)}
            </footer>
        </div>
    }
}
