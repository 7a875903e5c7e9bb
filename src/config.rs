use chrono::DateTime;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::contact::is_valid_email;

pub const BUILD_TIME: &str = env!("BUILD_TIME");

pub fn build_date() -> Option<String> {
    DateTime::parse_from_rfc3339(BUILD_TIME)
        .ok()
        .map(|t| t.format("%b %e %Y").to_string())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReopenPolicy {
    /// Every open starts at the first slide.
    #[default]
    Reset,
    /// Reopening a project shows the slide it was closed on.
    Resume,
}

impl ReopenPolicy {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "reset" => Some(Self::Reset),
            "resume" => Some(Self::Resume),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SocialLink {
    pub label: String,
    pub href: String,
    pub icon: String,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("Invalid contact address: {0:?}")]
    ContactAddress(String),
    #[error("Unknown reopen policy: {0:?}")]
    ReopenPolicy(String),
    #[error("Parallax range must be positive")]
    ParallaxRange,
    #[error("Couldn't parse social links: {0}")]
    Socials(String),
}

/// Site-wide settings shared with every component through context.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub owner: String,
    pub tagline: String,
    pub description: String,
    pub contact_address: String,
    pub resume_path: String,
    pub socials: Vec<SocialLink>,
    pub skills: Vec<String>,
    pub mail_reset_ms: u64,
    pub submitting_ms: u64,
    pub loading_hold_ms: u64,
    pub loading_fade_ms: u64,
    pub not_found_redirect_ms: u64,
    pub back_to_top_threshold: f64,
    pub parallax_x: f64,
    pub parallax_y: f64,
    pub reopen_policy: ReopenPolicy,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            owner: "Joseph Vazquez".to_string(),
            tagline: "Portfolio".to_string(),
            description: "Software Engineer & Cybersecurity Professional Portfolio".to_string(),
            contact_address: "josephvwork04@gmail.com".to_string(),
            resume_path: "/documents/Joseph-A-Vazquez-Resume.pdf".to_string(),
            socials: Vec::new(),
            skills: ["Software Engineering", "Cybersecurity", "Web Development", "IT"]
                .into_iter()
                .map(String::from)
                .collect(),
            mail_reset_ms: 1000,
            submitting_ms: 2000,
            loading_hold_ms: 1500,
            loading_fade_ms: 1000,
            not_found_redirect_ms: 2000,
            back_to_top_threshold: 300.0,
            parallax_x: 40.0,
            parallax_y: 20.0,
            reopen_policy: ReopenPolicy::Reset,
        }
    }
}

impl SiteConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !is_valid_email(&self.contact_address) {
            return Err(ConfigError::ContactAddress(self.contact_address.clone()));
        }
        if self.parallax_x <= 0.0 || self.parallax_y <= 0.0 {
            return Err(ConfigError::ParallaxRange);
        }
        Ok(())
    }

    /// Defaults with `PORTFOLIO_*` environment overrides applied.
    #[cfg(feature = "ssr")]
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::default().with_overrides(|key| std::env::var(key).ok())
    }

    pub fn with_overrides<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(address) = lookup("PORTFOLIO_CONTACT_EMAIL") {
            self.contact_address = address.trim().to_string();
        }
        if let Some(policy) = lookup("PORTFOLIO_REOPEN_POLICY") {
            self.reopen_policy =
                ReopenPolicy::parse(&policy).ok_or(ConfigError::ReopenPolicy(policy))?;
        }
        if let Some(socials) = lookup("PORTFOLIO_SOCIALS") {
            self.socials = serde_json::from_str(&socials)
                .map_err(|e| ConfigError::Socials(e.to_string()))?;
        }
        self.validate()?;
        Ok(self)
    }

    pub fn page_title(&self) -> String {
        format!("{} - {}", self.owner, self.tagline)
    }
}
