use leptos::prelude::*;

use crate::{config::SiteConfig, page::Section};

#[component]
pub fn ResumeSection() -> impl IntoView {
    let site = expect_context::<SiteConfig>();
    let title = format!("{} Resume", site.owner);
    let file_name = site
        .resume_path
        .rsplit('/')
        .next()
        .unwrap_or_default()
        .to_string();

    view! {
        <section id=Section::Resume.id() class="section-panel min-h-screen py-12 mt-24">
            <h2 class="section-title text-center mb-12">
                "Resume"
                <a
                    href=site.resume_path.clone()
                    download=file_name
                    class="relative top-1 ml-4 text-white"
                    aria-label="Download resume"
                >
                    <i class="extra-download" />
                </a>
            </h2>
            <div class="pdf-viewer mx-auto w-full lg:w-5/6 xl:w-2/3 h-screen min-h-[800px] overflow-hidden">
                <iframe src=site.resume_path.clone() class="w-full h-full border-0" title=title></iframe>
            </div>
        </section>
    }
}
