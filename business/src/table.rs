//! Sorting and pagination core for the dashboard tables.
//!
//! [`TableState`] is component-local: every table widget owns one, created
//! with caller-supplied defaults. All operations here are pure, synchronous
//! transformations over in-memory slices; there are no error states at this
//! layer. Loading/error presentation belongs to the panels that feed rows in.

use std::cmp::Ordering;
use std::ops::Range;

/// Comparator for one sortable column.
pub type Comparator<R> = fn(&R, &R) -> Ordering;

/// Page sizes offered by the pager controls.
pub const PAGE_SIZE_CHOICES: [usize; 3] = [10, 25, 50];

pub const DEFAULT_PAGE_SIZE: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn flipped(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }
}

/// Sort + pagination state of one table.
///
/// `page` is 1-based. The state never inspects row contents; callers resolve
/// the active column key to a [`Comparator`] and hand it to
/// [`sorted_view`](Self::sorted_view).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableState {
    sort: Option<(&'static str, SortDirection)>,
    page: usize,
    page_size: usize,
}

impl TableState {
    pub fn new(page_size: usize) -> Self {
        Self {
            sort: None,
            page: 1,
            page_size: page_size.max(1),
        }
    }

    /// Default sort applied before the first header click.
    pub fn with_sort(mut self, key: &'static str, direction: SortDirection) -> Self {
        self.sort = Some((key, direction));
        self
    }

    pub fn sort(&self) -> Option<(&'static str, SortDirection)> {
        self.sort
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Header click. No-op for non-sortable columns; a repeated click on the
    /// active column flips direction, any other column starts ascending.
    pub fn toggle_sort(&mut self, key: &'static str, sortable: bool) {
        if !sortable {
            return;
        }
        self.sort = match self.sort {
            Some((active, direction)) if active == key => Some((key, direction.flipped())),
            _ => Some((key, SortDirection::Ascending)),
        };
    }

    /// Pager controls only ever pass values they rendered, so this assigns
    /// directly (floored at 1).
    pub fn set_page(&mut self, page: usize) {
        self.page = page.max(1);
    }

    pub fn set_page_size(&mut self, page_size: usize) {
        self.page_size = page_size.max(1);
        self.page = 1;
    }

    /// `ceil(total / page_size)`; zero for an empty table.
    pub fn page_count(&self, total: usize) -> usize {
        total.div_ceil(self.page_size)
    }

    /// Re-clamp, run on every render pass: if the data shrank under us (row
    /// deleted elsewhere) an out-of-range page snaps back to page 1.
    pub fn clamp_page(&mut self, total: usize) {
        if self.page > self.page_count(total).max(1) {
            self.page = 1;
        }
    }

    /// The contiguous index range `[(page-1)*size, page*size)`, clamped to
    /// `total`.
    pub fn page_range(&self, total: usize) -> Range<usize> {
        let start = (self.page - 1).saturating_mul(self.page_size).min(total);
        let end = start.saturating_add(self.page_size).min(total);
        start..end
    }

    /// Ordered copy of `rows` under the active sort.
    ///
    /// `comparator` is the active column's comparator; pass `None` when no
    /// column is active or the column has none, which preserves the original
    /// order. The sort is stable, so ties keep their input order in either
    /// direction.
    pub fn sorted_view<'r, R>(
        &self,
        rows: &'r [R],
        comparator: Option<Comparator<R>>,
    ) -> Vec<&'r R> {
        let mut view: Vec<&R> = rows.iter().collect();
        if let (Some((_, direction)), Some(compare)) = (self.sort, comparator) {
            view.sort_by(|a, b| {
                let ordering = compare(a, b);
                match direction {
                    SortDirection::Ascending => ordering,
                    SortDirection::Descending => ordering.reverse(),
                }
            });
        }
        view
    }
}

impl Default for TableState {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}
