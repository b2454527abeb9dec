//! Top-level navigation between the page's sections.

/// The page sections, in scroll order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Hero,
    Skills,
    Projects,
    Certificates,
    Drive,
    Blog,
}

impl Section {
    pub const ALL: [Section; 6] = [
        Section::Hero,
        Section::Skills,
        Section::Projects,
        Section::Certificates,
        Section::Drive,
        Section::Blog,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Section::Hero => "Home",
            Section::Skills => "Skills",
            Section::Projects => "Projects",
            Section::Certificates => "Certificates",
            Section::Drive => "Drive",
            Section::Blog => "Blog",
        }
    }

    /// Anchor id used as the scroll target.
    pub fn anchor(&self) -> &'static str {
        match self {
            Section::Hero => "home",
            Section::Skills => "skills",
            Section::Projects => "projects",
            Section::Certificates => "certifications",
            Section::Drive => "drive",
            Section::Blog => "blog",
        }
    }

    /// Whether the section mounts a 3D canvas when shown.
    pub fn has_canvas(&self) -> bool {
        matches!(self, Section::Hero | Section::Skills | Section::Drive)
    }
}

/// Current section plus transitions, which is all the desktop shell
/// needs to drive mount/unmount.
#[derive(Debug, Clone, Copy)]
pub struct Navigation {
    current: Section,
}

impl Default for Navigation {
    fn default() -> Self {
        Self {
            current: Section::Hero,
        }
    }
}

impl Navigation {
    pub fn current(&self) -> Section {
        self.current
    }

    /// Switches section, returning the one being left if it actually
    /// changed.
    pub fn select(&mut self, next: Section) -> Option<Section> {
        if self.current == next {
            return None;
        }
        let previous = self.current;
        self.current = next;
        tracing::debug!(from = previous.label(), to = next.label(), "section change");
        Some(previous)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn select_reports_the_section_being_left() {
        let mut nav = Navigation::default();
        assert_eq!(nav.select(Section::Skills), Some(Section::Hero));
        assert_eq!(nav.current(), Section::Skills);
    }

    #[test]
    fn reselecting_the_current_section_is_a_no_op() {
        let mut nav = Navigation::default();
        nav.select(Section::Drive);
        assert_eq!(nav.select(Section::Drive), None);
        assert_eq!(nav.current(), Section::Drive);
    }

    #[test]
    fn exactly_three_sections_carry_a_canvas() {
        let count = Section::ALL.iter().filter(|s| s.has_canvas()).count();
        assert_eq!(count, 3);
    }

    #[test]
    fn anchors_are_unique() {
        let mut anchors: Vec<&str> = Section::ALL.iter().map(|s| s.anchor()).collect();
        anchors.sort();
        anchors.dedup();
        assert_eq!(anchors.len(), Section::ALL.len());
    }
}
