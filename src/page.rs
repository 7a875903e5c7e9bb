use crate::config::SiteConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Home,
    Resume,
    About,
    Projects,
}

impl Section {
    /// Sections reachable from the hero navigation buttons.
    pub fn nav() -> [Section; 3] {
        [Section::Resume, Section::About, Section::Projects]
    }

    /// Element id of the section on the page.
    pub fn id(&self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::Resume => "resume",
            Section::About => "about",
            Section::Projects => "projects",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::Resume => "Resume",
            Section::About => "About",
            Section::Projects => "Projects",
        }
    }

    pub fn parse(s: &str) -> Option<Section> {
        match s {
            "home" => Some(Section::Home),
            "resume" => Some(Section::Resume),
            "about" => Some(Section::About),
            "projects" => Some(Section::Projects),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadingPhase {
    #[default]
    Loading,
    FadingOut,
    Done,
}

impl LoadingPhase {
    pub fn next(self) -> LoadingPhase {
        match self {
            LoadingPhase::Loading => LoadingPhase::FadingOut,
            LoadingPhase::FadingOut | LoadingPhase::Done => LoadingPhase::Done,
        }
    }

    /// How long this phase lasts before [`LoadingPhase::next`].
    pub fn duration_ms(self, config: &SiteConfig) -> Option<u64> {
        match self {
            LoadingPhase::Loading => Some(config.loading_hold_ms),
            LoadingPhase::FadingOut => Some(config.loading_fade_ms),
            LoadingPhase::Done => None,
        }
    }

    pub fn shows_overlay(self) -> bool {
        self != LoadingPhase::Done
    }

    pub fn content_visible(self) -> bool {
        self == LoadingPhase::Done
    }
}

pub fn back_to_top_visible(scroll_y: f64, threshold: f64) -> bool {
    scroll_y > threshold
}

/// Background offset for a pointer at `pointer` inside a `viewport`.
pub fn parallax_offset(pointer: (f64, f64), viewport: (f64, f64), range: (f64, f64)) -> (f64, f64) {
    let (w, h) = viewport;
    if w <= 0.0 || h <= 0.0 {
        return (0.0, 0.0);
    }
    (pointer.0 / w * range.0, pointer.1 / h * range.1)
}

pub fn background_position((x, y): (f64, f64)) -> String {
    format!("{x}px {y}px")
}
