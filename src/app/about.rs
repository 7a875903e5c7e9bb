use leptos::prelude::*;

use crate::page::Section;

#[component]
pub fn AboutSection() -> impl IntoView {
    view! {
        <section id=Section::About.id() class="section-panel min-h-screen flex items-center py-12 px-4">
            <div class="w-full max-w-4xl mx-auto">
                <h2 class="section-title text-center mb-12">"About Me"</h2>
                <div class="about-text border-2 border-cyan p-12 text-xl leading-relaxed min-h-[400px] section-content">
                    <p class="mb-6">
                        "Hello! My name is Joseph Vazquez, and I'm currently pursuing a Bachelor's degree in Computer Science at California State University, Los Angeles (Cal State LA)."
                    </p>
                    <p class="mb-6">
                        "I'm passionate about technology and actively involved on campus as the Web Master for the Association for Computing Machinery (ACM). I'm also working toward earning the Google Cybersecurity Professional Certificate while continuously improving my personal website with new features and projects."
                    </p>
                    <p class="mb-6">
                        "My career interests and experience span across software engineering, cybersecurity, web development, and IT. I'm currently seeking internship opportunities in any of these areas to gain hands-on experience and to grow professionally."
                    </p>
                    <p>
                        "Feel free to explore my website, check out my LinkedIn or GitHub, and if you'd like to connect, just use the contact button at the very top of the page. Thanks for reading and stopping by!"
                    </p>
                </div>
            </div>
        </section>
    }
}
