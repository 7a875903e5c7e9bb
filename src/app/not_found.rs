use leptos::prelude::*;
use leptos_router::components::*;
use leptos_use::{use_timeout_fn, UseTimeoutFnReturn};

use crate::config::SiteConfig;

#[cfg(feature = "ssr")]
fn mark_not_found() {
    if let Some(resp) = use_context::<leptos_axum::ResponseOptions>() {
        resp.set_status(http::StatusCode::NOT_FOUND);
    }
}

#[cfg(not(feature = "ssr"))]
fn mark_not_found() {}

/// Unknown routes land here and are sent back home shortly after.
#[component]
pub fn NotFound() -> impl IntoView {
    mark_not_found();
    let delay = expect_context::<SiteConfig>().not_found_redirect_ms;

    let expired = RwSignal::new(false);
    let UseTimeoutFnReturn { start, .. } =
        use_timeout_fn(move |_: ()| expired.set(true), delay as f64);
    Effect::new(move |_| start(()));

    view! {
        <div class="min-h-screen flex flex-col items-center justify-center gap-6">
            <h1 class="section-title">"404"</h1>
            <h2 class="text-2xl">"Page Not Found"</h2>
            <p>"Redirecting to the home page..."</p>
            <A href="/" attr:class="nav-custom-btn">
                "Go Home"
            </A>
            <Show when=move || expired.get()>
                <Redirect path="/" />
            </Show>
        </div>
    }
}
