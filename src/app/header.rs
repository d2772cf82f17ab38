use leptos::prelude::*;

use crate::{
    content::{NAV_ITEMS, PROFILE},
    viewport::{NavItem, SectionId},
};

#[component]
pub fn Header(active: ReadSignal<SectionId>) -> impl IntoView {
    view! {
        <header class="sticky top-0 z-20 backdrop-blur border-b border-black/10 bg-white/70">
            <div class="mx-auto flex max-w-5xl items-center justify-between px-4 py-3">
                <h1 class="text-xl font-bold text-brand">{PROFILE.name}</h1>
                <nav class="hidden gap-6 md:flex" aria-label="Primary">
                    {NAV_ITEMS
                        .iter()
                        .map(|item| view! { <NavLink item=*item active /> })
                        .collect_view()}
                </nav>
                <a
                    class="rounded-md bg-brand px-3 py-1 text-white text-sm font-semibold hover:bg-brand-dark"
                    href="#contact"
                >
                    "Contact"
                </a>
            </div>
        </header>
    }
}

#[component]
fn NavLink(item: NavItem, active: ReadSignal<SectionId>) -> impl IntoView {
    let is_active = move || active.with(|id| id == item.section_id());
    view! {
        <a
            href=item.href
            class=move || {
                if is_active() {
                    "text-sm font-semibold text-brand"
                } else {
                    "text-sm font-semibold hover:text-brand"
                }
            }
            aria-current=move || is_active().then_some("page")
        >
            {item.label}
        </a>
    }
}
