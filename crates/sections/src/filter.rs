/// A tab-style category filter: either everything, or one category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter<C> {
    #[default]
    All,
    Only(C),
}

impl<C: PartialEq + Copy> CategoryFilter<C> {
    pub fn matches(&self, category: C) -> bool {
        match self {
            Self::All => true,
            Self::Only(selected) => *selected == category,
        }
    }

    /// Filtered view over a slice, preserving order.
    pub fn apply<'a, T>(&self, items: &'a [T], key: impl Fn(&T) -> C) -> Vec<&'a T> {
        items.iter().filter(|item| self.matches(key(item))).collect()
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }
}
