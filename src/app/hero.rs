use leptos::prelude::*;
use leptos_router::components::*;

use crate::{config::SiteConfig, page::Section};

const CODING_GIF: &str = "https://media1.giphy.com/media/v1.Y2lkPTc5MGI3NjExeW51dm1jMXFrd2RvMWF1eWF1cXd3bnBhY2ZuM3JxcmhkbTJ0ZjNnMiZlcD12MV9pbnRlcm5hbF9naWZfYnlfaWQmY3Q9Zw/H4QUDqIVeoAViDc1S9/giphy.gif";

#[component]
pub fn HeroSection(on_navigate: Callback<Section>) -> impl IntoView {
    let site = expect_context::<SiteConfig>();
    let (first, last) = site
        .owner
        .split_once(' ')
        .map(|(f, l)| (f.to_string(), l.to_string()))
        .unwrap_or_else(|| (site.owner.clone(), String::new()));

    view! {
        <section id=Section::Home.id() class="min-h-screen flex items-center px-8">
            <div class="grid grid-cols-1 lg:grid-cols-2 items-center w-full max-w-[1500px] mx-auto">
                <div class="text-left lg:pr-12 section-content">
                    <h1 class="hero-name glow font-light mb-3">
                        {first} <br /> <strong>{last}</strong>
                    </h1>
                    <h2 class="text-5xl font-light mb-12 text-cyan">{site.tagline.clone()}</h2>
                    <div class="skills-box p-3">
                        {site
                            .skills
                            .iter()
                            .map(|skill| {
                                view! {
                                    <div class="skill-item relative pl-4 mb-2 text-red">
                                        <span class="absolute left-0 text-cyan">"•"</span>
                                        {skill.clone()}
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
                <div class="relative flex flex-col items-end gap-6 w-full section-content">
                    <A href="/contact" attr:class="contact-btn">
                        "Contact"
                    </A>
                    <div class="socials absolute right-0 top-[40%] flex flex-col gap-3">
                        {site
                            .socials
                            .iter()
                            .map(|social| {
                                view! {
                                    <a
                                        href=social.href.clone()
                                        target="_blank"
                                        rel="noopener noreferrer"
                                        class="text-2xl hover:text-cyan"
                                        aria-label=social.label.clone()
                                    >
                                        <i class=social.icon.clone()></i>
                                    </a>
                                }
                            })
                            .collect_view()}
                    </div>
                    <div class="gif-container mr-auto ml-6 opacity-75">
                        <img src=CODING_GIF alt="Coding Animation" width="350" height="280" />
                    </div>
                    <nav class="flex self-stretch mt-12">
                        {Section::nav()
                            .into_iter()
                            .map(|section| {
                                view! {
                                    <button
                                        class="nav-custom-btn flex-1"
                                        on:click=move |_| on_navigate.run(section)
                                    >
                                        {section.label()}
                                    </button>
                                }
                            })
                            .collect_view()}
                    </nav>
                </div>
            </div>
        </section>
    }
}
