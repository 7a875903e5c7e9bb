use leptos::prelude::*;
use leptos_use::{use_timeout_fn, UseTimeoutFnReturn};

use crate::{config::SiteConfig, page::LoadingPhase};

/// Full-screen spinner shown on first load. Holds, fades out, then unmounts.
#[component]
pub fn LoadingScreen(phase: RwSignal<LoadingPhase>) -> impl IntoView {
    let site = expect_context::<SiteConfig>();
    let hold = LoadingPhase::Loading.duration_ms(&site).unwrap_or_default();
    let fade = LoadingPhase::FadingOut.duration_ms(&site).unwrap_or_default();

    let UseTimeoutFnReturn {
        start: start_fade, ..
    } = use_timeout_fn(move |_: ()| phase.update(|p| *p = p.next()), fade as f64);
    let UseTimeoutFnReturn {
        start: start_hold, ..
    } = use_timeout_fn(
        move |_: ()| {
            phase.update(|p| *p = p.next());
            start_fade(());
        },
        hold as f64,
    );
    Effect::new(move |_| start_hold(()));

    view! {
        <Show when=move || phase.get().shows_overlay()>
            <div class=move || match phase.get() {
                LoadingPhase::FadingOut => "loading-screen fade-out",
                _ => "loading-screen",
            }>
                <div class="spinner-box">
                    <div class="configure-border-1">
                        <div class="configure-core"></div>
                    </div>
                    <div class="configure-border-2">
                        <div class="configure-core"></div>
                    </div>
                </div>
            </div>
        </Show>
    }
}
