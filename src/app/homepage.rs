use leptos::{either::Either, prelude::*};
use leptos_meta::Title;

use super::contact::ContactForm;
use crate::content::{
    Project, ABOUT, ACHIEVEMENTS, EXPERIENCE, HOBBIES, PROFILE, PROJECTS, SKILLS,
};

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Title text="Portfolio" />
        <main>
            <Hero />
            <Section id="about" title="About Me">
                {ABOUT}
            </Section>
            <Section id="projects" title="Projects">
                <div class="grid gap-6 sm:grid-cols-2">
                    {PROJECTS
                        .iter()
                        .enumerate()
                        .map(|(idx, project)| view! { <ProjectCard project=*project idx /> })
                        .collect_view()}
                </div>
            </Section>
            <Section id="experience" title="Experience">
                <ol class="relative border-l border-brand/30">
                    {EXPERIENCE
                        .iter()
                        .map(|exp| {
                            view! {
                                <li class="mb-8 ml-4" data-reveal="">
                                    <div class="absolute -left-1.5 mt-1.5 h-3 w-3 rounded-full bg-brand"></div>
                                    <time class="text-xs font-semibold text-brand">{exp.period}</time>
                                    <h4 class="text-base font-semibold">
                                        {exp.title} <span class="font-normal">" · " {exp.organisation}</span>
                                    </h4>
                                    <p class="mt-1">{exp.summary}</p>
                                </li>
                            }
                        })
                        .collect_view()}
                </ol>
            </Section>
            <Section id="skills" title="Skills">
                <ul class="flex flex-wrap gap-2" aria-label="Skills">
                    {SKILLS
                        .iter()
                        .map(|skill| {
                            view! {
                                <li class="rounded-full bg-brand/10 px-3 py-1 text-xs font-semibold text-brand">
                                    {*skill}
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </Section>
            <Section id="hobbies" title="Hobbies">
                {HOBBIES}
            </Section>
            <Section id="achievements" title="Achievements">
                <ul class="list-disc pl-5 space-y-1">
                    {ACHIEVEMENTS
                        .iter()
                        .map(|a| view! { <li>{*a}</li> })
                        .collect_view()}
                </ul>
            </Section>
            <Section id="contact" title="Contact">
                <ContactForm recipient=PROFILE.email />
            </Section>
        </main>
    }
}

#[component]
fn Hero() -> impl IntoView {
    view! {
        <section
            id="home"
            class="mx-auto max-w-5xl px-4 py-16 md:py-24"
            aria-labelledby="home-heading"
        >
            <div class="grid items-center gap-8 md:grid-cols-2">
                <div>
                    <h2
                        id="home-heading"
                        class="text-4xl font-extrabold tracking-tight md:text-5xl"
                    >
                        {PROFILE.name}
                    </h2>
                    <p class="mt-2 text-lg text-gray-600">{PROFILE.role}</p>
                    <p class="mt-4 text-sm font-medium">
                        {format!("Email: {} • Course: {}", PROFILE.email, PROFILE.course)}
                    </p>
                    <div class="mt-6 flex gap-3 items-center">
                        {PROFILE
                            .links
                            .iter()
                            .map(|link| {
                                view! {
                                    <a
                                        href=link.href
                                        target="_blank"
                                        rel="noreferrer"
                                        class="rounded-md border px-3 py-1 text-sm hover:bg-black/5 flex items-center gap-2"
                                    >
                                        <img src=link.icon alt=link.label class="h-4 w-4 rounded-full" />
                                        {link.label}
                                    </a>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
                <div class="flex justify-center">
                    <div
                        class="h-48 w-48 overflow-hidden rounded-full ring-4 ring-brand"
                        aria-hidden="true"
                    >
                        <img src=PROFILE.photo alt="" class="h-full w-full object-cover" />
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn Section(id: &'static str, title: &'static str, children: Children) -> impl IntoView {
    view! {
        <section
            id=id
            class="mx-auto max-w-5xl px-4 py-12"
            aria-labelledby=format!("{id}-heading")
        >
            <h3 id=format!("{id}-heading") class="text-2xl font-bold text-brand">
                {title}
            </h3>
            <div class="mt-4 text-sm leading-6 text-gray-700">{children()}</div>
        </section>
    }
}

#[component]
fn ProjectCard(project: Project, idx: usize) -> impl IntoView {
    let tags = project
        .tags
        .iter()
        .map(|t| {
            view! {
                <span class="rounded-full bg-brand/10 px-2 py-0.5 text-[10px] font-semibold text-brand">
                    {*t}
                </span>
            }
        })
        .collect_view();
    let body = view! {
        <div class="flex items-start justify-between">
            <h4 class="text-lg font-semibold">{project.title}</h4>
            <span class="text-xs text-brand">"View"</span>
        </div>
        <p class="mt-2 text-sm text-gray-600">{project.description}</p>
        <div class="mt-3 flex flex-wrap gap-2">{tags}</div>
    };
    let class = "group block rounded-lg border border-black/10 p-4 transition hover:-translate-y-1 hover:shadow-lg focus:outline-none focus:ring-2 focus:ring-brand";
    // stagger cards in the same row
    let style = format!("transition-delay: {}ms", idx * 50);

    match project.href() {
        Some(href) => Either::Left(view! {
            <a href=href target="_blank" rel="noreferrer" class=class style=style data-reveal="">
                {body}
            </a>
        }),
        None => Either::Right(view! {
            <a href="#" class=class style=style data-reveal="">
                {body}
            </a>
        }),
    }
}
