use leptos::prelude::*;
use leptos_use::use_window_scroll;

use crate::{config::SiteConfig, page::back_to_top_visible};

#[component]
pub fn BackToTop(on_click: Callback<()>) -> impl IntoView {
    let threshold = expect_context::<SiteConfig>().back_to_top_threshold;
    let (_, scroll_y) = use_window_scroll();
    let visible = Memo::new(move |_| back_to_top_visible(scroll_y.get(), threshold));

    view! {
        <Show when=move || visible.get()>
            <button
                class="back-to-top fixed bottom-8 left-8 z-50 rounded-full w-12 h-12"
                aria-label="Back to top"
                on:click=move |_| on_click.run(())
            >
                <i class="extra-arrow-up" />
            </button>
        </Show>
    }
}
