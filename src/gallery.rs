use crate::config::ReopenPolicy;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectDetails {
    Prose {
        heading: &'static str,
        text: &'static str,
    },
    List {
        heading: &'static str,
        items: &'static [&'static str],
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub id: &'static str,
    pub title: &'static str,
    /// Heading shown in the modal instead of `title`.
    pub modal_title: Option<&'static str>,
    pub description: &'static str,
    pub images: &'static [&'static str],
    pub thumbnail: Option<&'static str>,
    pub technologies: &'static str,
    pub details: ProjectDetails,
}

impl Project {
    pub fn card_image(&self) -> &'static str {
        self.thumbnail
            .or_else(|| self.images.first().copied())
            .unwrap_or_default()
    }

    pub fn heading(&self) -> &'static str {
        self.modal_title.unwrap_or(self.title)
    }
}

pub static PROJECTS: &[Project] = &[
    Project {
        id: "project1",
        title: "ACM Login Page",
        modal_title: None,
        description: "ACM secure admin authentication login page.",
        images: &["/images/ACM-Login-Page.JPG", "/images/ACM-Wrong-Login.JPG"],
        thumbnail: Some("/images/Title-ACM-Login-Page.JPG"),
        technologies: "HTML, CSS, JavaScript, React, and Bootstrap",
        details: ProjectDetails::Prose {
            heading: "Technologies Used:",
            text: "The login page was built using HTML, CSS, JavaScript, React, and Bootstrap for responsive design. Figma was used during the planning phase to prototype the user interface and ensure consistency with the ACM organization's existing branding.",
        },
    },
    Project {
        id: "project2",
        title: "More Project Cards Coming Soon!",
        modal_title: Some("Project Gallery"),
        description: "Here's a gallery of my past projects.",
        images: &[
            "/images/ACM-Home-Page.JPG",
            "/images/PDA.JPG",
            "/images/PortfolioV1.JPG",
        ],
        thumbnail: Some("/images/thumbNail.png"),
        technologies: "Various Technologies",
        details: ProjectDetails::List {
            heading: "The projects shown here are:",
            items: &[
                "ACM Home Page- I've done lots of work to keep it looking modern",
                "Personal Schedule Tracker Program- A JavaFX program that records users schedules with date, time, and notes",
                "Version 1 Portfolio- Only was the home page and nothing worked. Now you are looking at this on Version 6!",
            ],
        },
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GalleryState {
    Closed,
    Open { project: &'static str, slide: usize },
}

/// Lightbox state: which project modal is open and the slide shown for each
/// project. Slide indices live in one slot per catalog entry.
#[derive(Debug, Clone, PartialEq)]
pub struct Gallery {
    projects: &'static [Project],
    slides: Vec<usize>,
    active: Option<usize>,
    policy: ReopenPolicy,
}

impl Gallery {
    pub fn new(projects: &'static [Project], policy: ReopenPolicy) -> Self {
        Self {
            projects,
            slides: vec![0; projects.len()],
            active: None,
            policy,
        }
    }

    pub fn with_catalog(policy: ReopenPolicy) -> Self {
        Self::new(PROJECTS, policy)
    }

    pub fn projects(&self) -> &'static [Project] {
        self.projects
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.projects.iter().position(|p| p.id == id)
    }

    pub fn state(&self) -> GalleryState {
        match self.active {
            Some(i) => GalleryState::Open {
                project: self.projects[i].id,
                slide: self.slides[i],
            },
            None => GalleryState::Closed,
        }
    }

    pub fn is_open(&self) -> bool {
        self.active.is_some()
    }

    pub fn active_project(&self) -> Option<&'static Project> {
        let projects = self.projects;
        self.active.map(|i| &projects[i])
    }

    pub fn current_slide(&self) -> Option<usize> {
        self.active.map(|i| self.slides[i])
    }

    pub fn slide_of(&self, id: &str) -> Option<usize> {
        self.position(id).map(|i| self.slides[i])
    }

    /// Opens the modal for `id`, replacing any open project.
    pub fn open(&mut self, id: &str) -> bool {
        let Some(i) = self.position(id) else {
            log::warn!("gallery: no project with id {id:?}");
            return false;
        };
        if self.policy == ReopenPolicy::Reset {
            self.slides[i] = 0;
        }
        self.active = Some(i);
        true
    }

    pub fn close(&mut self) -> bool {
        self.active.take().is_some()
    }

    /// Moves the open project's slide by `delta`, wrapping in both directions.
    pub fn advance(&mut self, delta: isize) {
        let Some(i) = self.active else {
            return;
        };
        let n = self.projects[i].images.len() as isize;
        if n == 0 {
            return;
        }
        self.slides[i] = (self.slides[i] as isize + delta).rem_euclid(n) as usize;
    }

    pub fn jump_to(&mut self, index: usize) {
        let Some(i) = self.active else {
            return;
        };
        if index >= self.projects[i].images.len() {
            log::warn!(
                "gallery: slide {index} out of range for {}",
                self.projects[i].id
            );
            return;
        }
        self.slides[i] = index;
    }

    /// Escape closes an open modal. Returns whether the key was consumed.
    pub fn handle_key(&mut self, key: &str) -> bool {
        key == "Escape" && self.close()
    }

    /// Click on the modal overlay; only clicks landing on the backdrop itself
    /// close it.
    pub fn dismiss(&mut self, on_backdrop: bool) -> bool {
        on_backdrop && self.close()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static FIXTURE: &[Project] = &[
        Project {
            id: "a",
            title: "A",
            modal_title: None,
            description: "",
            images: &["a0", "a1", "a2"],
            thumbnail: None,
            technologies: "",
            details: ProjectDetails::Prose {
                heading: "",
                text: "",
            },
        },
        Project {
            id: "b",
            title: "B",
            modal_title: Some("Bee"),
            description: "",
            images: &["b0", "b1"],
            thumbnail: Some("b-thumb"),
            technologies: "",
            details: ProjectDetails::List {
                heading: "",
                items: &[],
            },
        },
    ];

    fn gallery(policy: ReopenPolicy) -> Gallery {
        Gallery::new(FIXTURE, policy)
    }

    #[test]
    fn test_catalog() {
        assert_eq!(PROJECTS.len(), 2);
        for project in PROJECTS {
            assert!(!project.images.is_empty(), "{} has no images", project.id);
        }
        assert_eq!(PROJECTS[0].heading(), "ACM Login Page");
        assert_eq!(PROJECTS[1].heading(), "Project Gallery");
        assert_eq!(PROJECTS[1].card_image(), "/images/thumbNail.png");
    }

    #[test]
    fn test_card_image_fallback() {
        assert_eq!(FIXTURE[0].card_image(), "a0");
        assert_eq!(FIXTURE[1].card_image(), "b-thumb");
    }

    #[test]
    fn test_open_close() {
        let mut g = gallery(ReopenPolicy::Reset);
        assert_eq!(g.state(), GalleryState::Closed);
        assert!(g.open("a"));
        assert_eq!(
            g.state(),
            GalleryState::Open {
                project: "a",
                slide: 0
            }
        );
        assert!(g.is_open());
        assert!(g.close());
        assert!(!g.close());
        assert_eq!(g.state(), GalleryState::Closed);
    }

    #[test]
    fn test_open_unknown() {
        let mut g = gallery(ReopenPolicy::Reset);
        assert!(!g.open("zzz"));
        assert!(!g.is_open());
    }

    #[test]
    fn test_single_active_project() {
        let mut g = gallery(ReopenPolicy::Reset);
        g.open("a");
        g.open("b");
        assert_eq!(g.active_project().map(|p| p.id), Some("b"));
        g.close();
        assert!(g.active_project().is_none());
    }

    #[test]
    fn test_advance_wraps() {
        let mut g = gallery(ReopenPolicy::Reset);
        g.open("a");
        g.advance(-1);
        assert_eq!(g.current_slide(), Some(2));
        g.advance(1);
        assert_eq!(g.current_slide(), Some(0));
        g.jump_to(2);
        g.advance(1);
        assert_eq!(g.current_slide(), Some(0));
    }

    #[test]
    fn test_full_cycle_returns() {
        let mut g = gallery(ReopenPolicy::Reset);
        g.open("a");
        for start in 0..3 {
            g.jump_to(start);
            for _ in 0..3 {
                g.advance(1);
            }
            assert_eq!(g.current_slide(), Some(start));
        }
    }

    #[test]
    fn test_large_deltas() {
        let mut g = gallery(ReopenPolicy::Reset);
        g.open("a");
        g.advance(7);
        assert_eq!(g.current_slide(), Some(1));
        g.advance(-5);
        assert_eq!(g.current_slide(), Some(2));
    }

    #[test]
    fn test_jump_out_of_range_ignored() {
        let mut g = gallery(ReopenPolicy::Reset);
        g.open("b");
        g.jump_to(1);
        g.jump_to(2);
        assert_eq!(g.current_slide(), Some(1));
    }

    #[test]
    fn test_navigation_while_closed() {
        let mut g = gallery(ReopenPolicy::Reset);
        g.advance(1);
        g.jump_to(1);
        assert_eq!(g.slide_of("a"), Some(0));
        assert_eq!(g.current_slide(), None);
    }

    #[test]
    fn test_reopen_resets() {
        let mut g = gallery(ReopenPolicy::Reset);
        g.open("a");
        g.advance(1);
        g.open("b");
        g.advance(1);
        g.close();
        // b's activity never touched a
        assert_eq!(g.slide_of("a"), Some(1));
        g.open("a");
        assert_eq!(g.current_slide(), Some(0));
    }

    #[test]
    fn test_reopen_resumes() {
        let mut g = gallery(ReopenPolicy::Resume);
        g.open("a");
        g.advance(1);
        g.advance(1);
        g.open("b");
        g.close();
        g.open("a");
        assert_eq!(g.current_slide(), Some(2));
    }

    #[test]
    fn test_escape_and_backdrop() {
        let mut g = gallery(ReopenPolicy::Reset);
        assert!(!g.handle_key("Escape"));
        g.open("a");
        assert!(!g.handle_key("Enter"));
        assert!(g.is_open());
        assert!(g.handle_key("Escape"));
        assert!(!g.is_open());

        g.open("a");
        assert!(!g.dismiss(false));
        assert!(g.is_open());
        assert!(g.dismiss(true));
        assert!(!g.is_open());
    }
}
