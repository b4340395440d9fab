//! The `SortStrategy` trait and the two orderings.

use std::io::Write;
use std::sync::Arc;

use sp_core::{SpResult, write_line};

/// Tag identifying a sort strategy.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SortOrder {
    /// [`SortAscending`].
    Ascending,
    /// [`SortDescending`].
    Descending,
}

impl SortOrder {
    pub fn as_str(self) -> &'static str {
        match self {
            SortOrder::Ascending  => "sort-ascending",
            SortOrder::Descending => "sort-descending",
        }
    }

    /// A shareable strategy for this tag.
    pub fn strategy<T: Ord + Clone>(self) -> Arc<dyn SortStrategy<T>> {
        match self {
            SortOrder::Ascending  => Arc::new(SortAscending),
            SortOrder::Descending => Arc::new(SortDescending),
        }
    }
}

impl std::fmt::Display for SortOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An interchangeable way of ordering a sequence.
///
/// Only [`sorted`][Self::sorted] does real work, and it is pure: the input
/// slice is borrowed, never reordered, and a fresh `Vec` comes back.
/// [`do_algorithm`][Self::do_algorithm] adds the announcement line that the
/// demo prints before each run.
///
/// The trait has no instance of its own; only variants can be built:
///
/// ```compile_fail
/// use sp_sort::SortStrategy;
///
/// let _strategy: dyn SortStrategy<char> = sp_sort::SortAscending;
/// ```
///
/// Strategies outlive any one context, so they cannot borrow:
///
/// ```compile_fail
/// use sp_sort::{SortOrder, SortStrategy};
///
/// struct Borrowed<'a>(&'a str);
///
/// impl<'a> SortStrategy<i32> for Borrowed<'a> {
///     fn order(&self) -> SortOrder { SortOrder::Ascending }
///     fn announcement(&self) -> &'static str { "borrowed..." }
///     fn sorted(&self, data: &[i32]) -> Vec<i32> { data.to_vec() }
/// }
/// ```
pub trait SortStrategy<T: Ord + Clone>: Send + Sync + 'static {
    fn order(&self) -> SortOrder;

    /// Line written by `do_algorithm` before sorting.
    fn announcement(&self) -> &'static str;

    fn sorted(&self, data: &[T]) -> Vec<T>;

    /// Announce on `out`, then return `sorted(data)`.
    fn do_algorithm(&self, data: &[T], out: &mut dyn Write) -> SpResult<Vec<T>> {
        write_line(out, self.announcement())?;
        Ok(self.sorted(data))
    }
}

/// Natural order, stable.
pub struct SortAscending;

impl<T: Ord + Clone> SortStrategy<T> for SortAscending {
    fn order(&self) -> SortOrder {
        SortOrder::Ascending
    }

    fn announcement(&self) -> &'static str {
        "sorting list..."
    }

    fn sorted(&self, data: &[T]) -> Vec<T> {
        let mut v = data.to_vec();
        v.sort();
        v
    }
}

/// Stable ascending sort, then reversed.
///
/// Equal elements therefore come out in the reverse of their input order.
pub struct SortDescending;

impl<T: Ord + Clone> SortStrategy<T> for SortDescending {
    fn order(&self) -> SortOrder {
        SortOrder::Descending
    }

    fn announcement(&self) -> &'static str {
        "reversing and sorting list..."
    }

    fn sorted(&self, data: &[T]) -> Vec<T> {
        let mut v = data.to_vec();
        v.sort();
        v.reverse();
        v
    }
}
