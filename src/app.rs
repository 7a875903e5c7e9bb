mod about;
mod back_to_top;
mod clipboard;
mod contact;
mod hero;
mod homepage;
mod loading;
mod not_found;
mod projects;
mod resume;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::config::SiteConfig;
use contact::ContactPage;
use homepage::HomePage;
use not_found::NotFound;

const SITE_CONFIG_ID: &str = "site-config";

pub fn shell(options: LeptosOptions) -> impl IntoView {
    let site = use_context::<SiteConfig>().unwrap_or_default();
    // the browser reads this back in `read_site_config` before hydrating
    let site_json = serde_json::to_string(&site)
        .unwrap_or_default()
        .replace("</", "<\\/");
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark" />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <script type="application/json" id=SITE_CONFIG_ID inner_html=site_json></script>
                <MetaTags />
            </head>
            <body class="font-mono">
                <App />
            </body>
        </html>
    }
}

#[cfg(feature = "hydrate")]
pub fn read_site_config() -> SiteConfig {
    let raw = document()
        .get_element_by_id(SITE_CONFIG_ID)
        .and_then(|el| el.text_content());
    match raw.map(|s| serde_json::from_str::<SiteConfig>(&s)) {
        Some(Ok(site)) => site,
        Some(Err(e)) => {
            log::warn!("couldn't parse site config, using defaults: {e}");
            SiteConfig::default()
        }
        None => {
            log::warn!("site config missing from page, using defaults");
            SiteConfig::default()
        }
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();
    let site = use_context::<SiteConfig>().unwrap_or_default();
    let title = site.page_title();
    let description = site.description.clone();
    provide_context(site);

    view! {
        <Title text=title />
        <Meta name="description" content=description />
        <div class="grid-overlay"></div>

        <Router>
            <Routes fallback=|| view! { <NotFound /> }>
                <Route path=path!("/") view=HomePage />
                <Route path=path!("/contact") view=ContactPage />
            </Routes>
        </Router>
    }
}
