use leptos::{ev, prelude::*};
use leptos_use::{use_event_listener, use_window};
use wasm_bindgen::JsCast;

use crate::{
    config::SiteConfig,
    gallery::{Gallery, Project, ProjectDetails},
    page::Section,
};

const BACKDROP_CLASS: &str = "modal";

fn lock_scroll(locked: bool) {
    let Some(body) = document().body() else {
        return;
    };
    let value = if locked { "hidden" } else { "" };
    if let Err(e) = body.style().set_property("overflow", value) {
        log::warn!("couldn't toggle page scroll: {e:?}");
    }
}

fn on_backdrop(ev: &ev::MouseEvent) -> bool {
    ev.target()
        .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
        .is_some_and(|el| el.class_list().contains(BACKDROP_CLASS))
}

#[component]
fn ProjectCard(project: &'static Project, gallery: RwSignal<Gallery>) -> impl IntoView {
    view! {
        <div class="project-card" on:click=move |_| gallery.update(|g| _ = g.open(project.id))>
            <img src=project.card_image() alt=project.title class="w-full h-48 object-cover" />
            <div class="p-4">
                <h3 class="text-xl text-cyan mb-2">{project.title}</h3>
                <p>{project.description}</p>
            </div>
        </div>
    }
}

#[component]
fn Details(details: ProjectDetails) -> impl IntoView {
    match details {
        ProjectDetails::Prose { heading, text } => view! {
            <h4 class="text-cyan mb-2">{heading}</h4>
            <p>{text}</p>
        }
        .into_any(),
        ProjectDetails::List { heading, items } => view! {
            <h4 class="text-cyan mb-2">{heading}</h4>
            <ul class="list-disc pl-6">
                {items.iter().map(|item| view! { <li>{*item}</li> }).collect_view()}
            </ul>
        }
        .into_any(),
    }
}

#[component]
fn ProjectModal(project: &'static Project, gallery: RwSignal<Gallery>) -> impl IntoView {
    let current = move || gallery.with(|g| g.current_slide().unwrap_or_default());

    view! {
        <div
            class=BACKDROP_CLASS
            role="dialog"
            aria-modal="true"
            aria-label=project.heading()
            on:click=move |e| gallery.update(|g| _ = g.dismiss(on_backdrop(&e)))
        >
            <div class="modal-content relative max-w-4xl mx-auto p-6">
                <button
                    class="modal-close absolute top-2 right-4 text-3xl"
                    aria-label="Close"
                    on:click=move |_| gallery.update(|g| _ = g.close())
                >
                    "×"
                </button>
                <h3 class="section-title mb-4">{project.heading()}</h3>
                <div class="slideshow relative">
                    {project
                        .images
                        .iter()
                        .enumerate()
                        .map(|(i, src)| {
                            view! {
                                <img
                                    src=*src
                                    alt=format!("{} screenshot {}", project.title, i + 1)
                                    class="w-full"
                                    style:display=move || if current() == i { "block" } else { "none" }
                                />
                            }
                        })
                        .collect_view()}
                    <button
                        class="slide-prev absolute left-0 top-1/2"
                        aria-label="Previous slide"
                        on:click=move |_| gallery.update(|g| g.advance(-1))
                    >
                        "❮"
                    </button>
                    <button
                        class="slide-next absolute right-0 top-1/2"
                        aria-label="Next slide"
                        on:click=move |_| gallery.update(|g| g.advance(1))
                    >
                        "❯"
                    </button>
                </div>
                <div class="flex justify-center gap-2 mt-3">
                    {(0..project.images.len())
                        .map(|i| {
                            view! {
                                <span
                                    class=move || if current() == i { "dot active" } else { "dot" }
                                    on:click=move |_| gallery.update(|g| g.jump_to(i))
                                ></span>
                            }
                        })
                        .collect_view()}
                </div>
                <div class="project-details mt-6">
                    <Details details=project.details />
                    <p class="mt-4 text-sm">"Built with " {project.technologies}</p>
                </div>
            </div>
        </div>
    }
}

#[component]
pub fn ProjectsSection() -> impl IntoView {
    let policy = expect_context::<SiteConfig>().reopen_policy;
    let gallery = RwSignal::new(Gallery::with_catalog(policy));

    _ = use_event_listener(use_window(), ev::keydown, move |e| {
        if gallery.with_untracked(Gallery::is_open) && e.key() == "Escape" {
            gallery.update(|g| _ = g.handle_key(&e.key()));
        }
    });

    let active = Memo::new(move |_| gallery.with(Gallery::active_project));
    Effect::new(move |_| lock_scroll(active.with(Option::is_some)));
    #[cfg(feature = "hydrate")]
    on_cleanup(move || lock_scroll(false));

    view! {
        <section id=Section::Projects.id() class="section-panel min-h-screen py-12 px-4">
            <h2 class="section-title text-center mb-12">"Projects"</h2>
            <div class="grid grid-cols-1 md:grid-cols-2 gap-8 max-w-5xl mx-auto">
                {gallery
                    .with_untracked(|g| g.projects())
                    .iter()
                    .map(|project| view! { <ProjectCard project=project gallery=gallery /> })
                    .collect_view()}
            </div>
            {move || {
                active
                    .get()
                    .map(|project| view! { <ProjectModal project=project gallery=gallery /> })
            }}
        </section>
    }
}
