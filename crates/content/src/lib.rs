//! Content store: typed portfolio records plus the simulated CMS fetch.
//!
//! # Invariants
//! - Records are immutable after load; skills keep their insertion order
//!   because the neural map layout depends on it.
//! - Exactly one fetch happens per app run; it resolves once after a fixed
//!   delay and never rejects in the reference configuration.

mod records;
mod store;

pub use records::{
    BlogPost, Certificate, Project, ProjectCategory, SiteContent, Skill, SkillCategory,
};
pub use store::{ContentError, ContentState, ContentStore, DEFAULT_FETCH_DELAY};

pub fn crate_info() -> &'static str {
    "folio-content v0.1.0"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crate_loads() {
        assert!(crate_info().contains("content"));
    }
}
