//! Blog section state: category tabs composed with pagination.

use folio_content::BlogPost;

use crate::filter::CategoryFilter;
use crate::pagination::Pagination;

pub const POSTS_PER_PAGE: usize = 4;

/// The fixed blog category tabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlogCategory {
    Frontend,
    DotNet,
    DevOps,
    Ai,
}

impl BlogCategory {
    pub const ALL: [BlogCategory; 4] = [
        BlogCategory::Frontend,
        BlogCategory::DotNet,
        BlogCategory::DevOps,
        BlogCategory::Ai,
    ];

    /// The category key stored on each post.
    pub fn id(&self) -> &'static str {
        match self {
            BlogCategory::Frontend => "frontend",
            BlogCategory::DotNet => "dotnet",
            BlogCategory::DevOps => "devops",
            BlogCategory::Ai => "ai",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            BlogCategory::Frontend => "Frontend",
            BlogCategory::DotNet => ".NET",
            BlogCategory::DevOps => "DevOps",
            BlogCategory::Ai => "AI/ML",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.id() == id)
    }
}

/// Filter and pagination for the blog grid.
///
/// A filter change always resets to page one; a page change raises a
/// one-shot scroll hint so the UI can bring the grid back into view.
#[derive(Debug, Clone)]
pub struct BlogView {
    pub filter: CategoryFilter<BlogCategory>,
    pub pagination: Pagination,
    scroll_hint: bool,
}

impl Default for BlogView {
    fn default() -> Self {
        Self {
            filter: CategoryFilter::All,
            pagination: Pagination::new(POSTS_PER_PAGE),
            scroll_hint: false,
        }
    }
}

impl BlogView {
    pub fn set_filter(&mut self, filter: CategoryFilter<BlogCategory>) {
        if self.filter != filter {
            self.filter = filter;
            self.pagination.reset();
        }
    }

    /// Posts passing the current filter, in content order.
    pub fn filtered<'a>(&self, posts: &'a [BlogPost]) -> Vec<&'a BlogPost> {
        posts
            .iter()
            .filter(|p| match self.filter {
                CategoryFilter::All => true,
                CategoryFilter::Only(c) => p.category == c.id(),
            })
            .collect()
    }

    /// The posts on the current page after filtering.
    pub fn visible<'a>(&self, posts: &'a [BlogPost]) -> Vec<&'a BlogPost> {
        let filtered = self.filtered(posts);
        self.pagination.page_slice(&filtered).to_vec()
    }

    pub fn total_pages(&self, posts: &[BlogPost]) -> usize {
        self.pagination.total_pages(self.filtered(posts).len())
    }

    pub fn set_page(&mut self, page: usize, posts: &[BlogPost]) {
        let len = self.filtered(posts).len();
        let before = self.pagination.current_page;
        self.pagination.set_page(page, len);
        if self.pagination.current_page != before {
            self.scroll_hint = true;
        }
    }

    pub fn next_page(&mut self, posts: &[BlogPost]) {
        self.set_page(self.pagination.current_page + 1, posts);
    }

    pub fn prev_page(&mut self, posts: &[BlogPost]) {
        self.set_page(self.pagination.current_page.saturating_sub(1).max(1), posts);
    }

    /// Consumes the pending scroll-into-view hint, if a page change
    /// raised one.
    pub fn take_scroll_hint(&mut self) -> bool {
        std::mem::take(&mut self.scroll_hint)
    }
}
