//! Projects section state: category tabs over the project grid. No
//! pagination; the grid shows everything that passes the filter.

use folio_content::{Project, ProjectCategory};

use crate::filter::CategoryFilter;

#[derive(Debug, Clone, Copy, Default)]
pub struct ProjectFilter {
    pub filter: CategoryFilter<ProjectCategory>,
}

impl ProjectFilter {
    /// The tab set, in display order.
    pub fn tabs() -> [(CategoryFilter<ProjectCategory>, &'static str); 5] {
        [
            (CategoryFilter::All, "All"),
            (CategoryFilter::Only(ProjectCategory::Frontend), "Frontend"),
            (CategoryFilter::Only(ProjectCategory::Fullstack), "Full-Stack"),
            (CategoryFilter::Only(ProjectCategory::DevOps), "DevOps"),
            (CategoryFilter::Only(ProjectCategory::Ml), "ML/AI"),
        ]
    }

    pub fn set(&mut self, filter: CategoryFilter<ProjectCategory>) {
        self.filter = filter;
    }

    pub fn visible<'a>(&self, projects: &'a [Project]) -> Vec<&'a Project> {
        self.filter.apply(projects, |p| p.category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_content::SiteContent;

    #[test]
    fn default_shows_all_projects() {
        let projects = SiteContent::sample().projects;
        let filter = ProjectFilter::default();
        assert_eq!(filter.visible(&projects).len(), projects.len());
    }

    #[test]
    fn devops_tab_shows_only_devops() {
        let projects = SiteContent::sample().projects;
        let mut filter = ProjectFilter::default();
        filter.set(CategoryFilter::Only(ProjectCategory::DevOps));
        let visible = filter.visible(&projects);
        assert_eq!(visible.len(), 2);
        assert!(visible.iter().all(|p| p.category == ProjectCategory::DevOps));
    }

    #[test]
    fn tab_set_covers_every_category() {
        let projects = SiteContent::sample().projects;
        let mut total = 0;
        for (tab, _) in ProjectFilter::tabs().into_iter().skip(1) {
            let mut f = ProjectFilter::default();
            f.set(tab);
            total += f.visible(&projects).len();
        }
        assert_eq!(total, projects.len());
    }
}
