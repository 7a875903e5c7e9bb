use leptos::{ev, prelude::*};
use leptos_router::hooks::use_location;
use leptos_use::{use_event_listener, use_window, use_window_size, UseWindowSizeReturn};
use web_sys::{ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

use super::{
    about::AboutSection, back_to_top::BackToTop, hero::HeroSection, loading::LoadingScreen,
    projects::ProjectsSection, resume::ResumeSection,
};
use crate::{
    config::{build_date, SiteConfig},
    page::{background_position, parallax_offset, LoadingPhase, Section},
};

fn scroll_to_section(section: Section) {
    let Some(el) = document().get_element_by_id(section.id()) else {
        log::warn!("no element for section {}", section.id());
        return;
    };
    let opts = ScrollIntoViewOptions::new();
    opts.set_behavior(ScrollBehavior::Smooth);
    opts.set_block(ScrollLogicalPosition::Start);
    el.scroll_into_view_with_scroll_into_view_options(&opts);
}

#[component]
pub fn HomePage() -> impl IntoView {
    let site = expect_context::<SiteConfig>();
    let phase = RwSignal::new(LoadingPhase::default());
    let range = (site.parallax_x, site.parallax_y);

    let UseWindowSizeReturn { width, height } = use_window_size();
    let (offset, set_offset) = signal((0.0, 0.0));
    _ = use_event_listener(use_window(), ev::mousemove, move |e| {
        if !phase.get_untracked().content_visible() {
            return;
        }
        let pointer = (e.client_x() as f64, e.client_y() as f64);
        let viewport = (width.get_untracked(), height.get_untracked());
        set_offset.set(parallax_offset(pointer, viewport, range));
    });

    // deep links like /#projects land once the page content is shown
    let hash = use_location().hash;
    Effect::new(move |_| {
        if !phase.get().content_visible() {
            return;
        }
        let hash = hash.get();
        if let Some(section) = Section::parse(hash.trim_start_matches('#')) {
            scroll_to_section(section);
        }
    });

    let on_navigate = Callback::new(scroll_to_section);
    let on_top = Callback::new(|_: ()| scroll_to_section(Section::Home));
    let footer = match build_date() {
        Some(date) => format!("© {} · Last updated {date}", site.owner),
        None => format!("© {}", site.owner),
    };

    view! {
        <LoadingScreen phase=phase />
        <main
            class="parallax-bg"
            class:invisible=move || !phase.get().content_visible()
            style:background-position=move || background_position(offset.get())
        >
            <HeroSection on_navigate=on_navigate />
            <ResumeSection />
            <AboutSection />
            <ProjectsSection />
            <footer class="text-center text-sm py-8">{footer}</footer>
        </main>
        <BackToTop on_click=on_top />
    }
}
