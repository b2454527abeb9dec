//! Non-3D section state: category filters, blog pagination, certificate
//! flip cards, navigation, and the textual descriptions the canvases
//! expose to assistive technology.
//!
//! # Invariants
//! - Changing a blog filter always resets pagination to the first page.
//! - At most one certificate card is flipped at a time.
//! - Keyboard activation (Enter/Space) is indistinguishable from click.

mod blog;
mod canvas;
mod filter;
mod flip;
mod nav;
mod pagination;
mod projects;

pub use blog::{BlogCategory, BlogView};
pub use canvas::CanvasDescription;
pub use filter::CategoryFilter;
pub use flip::{ActivationKey, FlipState};
pub use nav::{Navigation, Section};
pub use pagination::Pagination;
pub use projects::ProjectFilter;

pub fn crate_info() -> &'static str {
    "folio-sections v0.1.0"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crate_loads() {
        assert!(crate_info().contains("sections"));
    }
}
