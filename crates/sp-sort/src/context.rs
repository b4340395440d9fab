//! `Context<T>` — the holder that delegates sorting to its strategy.

use std::fmt::Debug;
use std::io::Write;
use std::sync::Arc;

use sp_core::{SpResult, write_line};

use crate::SortStrategy;

/// Input used by [`Context::do_some_business_logic`].
pub const BUSINESS_INPUT: [char; 3] = ['a', 'b', 'c'];

/// Holds exactly one [`SortStrategy`] and forwards work to it.
///
/// The context never sorts on its own and has no notion of which concrete
/// strategy it holds; it only knows the trait.
///
/// ```
/// use std::sync::Arc;
///
/// use sp_sort::{Context, SortAscending, SortOrder};
///
/// let ctx: Context<char> = Context::new(Arc::new(SortAscending));
/// assert_eq!(ctx.strategy().order(), SortOrder::Ascending);
/// ```
///
/// A context cannot exist without a strategy:
///
/// ```compile_fail
/// use sp_sort::Context;
///
/// let _ctx = Context::<char>::new();
/// ```
///
/// ```compile_fail
/// use sp_sort::Context;
///
/// let _ctx = Context::<char>::default();
/// ```
pub struct Context<T: Ord + Clone> {
    strategy: Arc<dyn SortStrategy<T>>,
}

impl<T: Ord + Clone + 'static> Context<T> {
    pub fn new(strategy: Arc<dyn SortStrategy<T>>) -> Self {
        Self { strategy }
    }

    #[inline]
    pub fn strategy(&self) -> &Arc<dyn SortStrategy<T>> {
        &self.strategy
    }

    /// Replace the strategy; the next `execute` uses `strategy`.
    pub fn set_strategy(&mut self, strategy: Arc<dyn SortStrategy<T>>) {
        self.strategy = strategy;
    }

    /// Run the current strategy over `data` and return its result unchanged.
    pub fn execute(&self, data: &[T], out: &mut dyn Write) -> SpResult<Vec<T>> {
        self.strategy.do_algorithm(data, out)
    }
}

impl Context<char> {
    /// Sort [`BUSINESS_INPUT`] with the current strategy and write the result
    /// in its `Debug` form, e.g. `['a', 'b', 'c']`.
    pub fn do_some_business_logic(&self, out: &mut dyn Write) -> SpResult<Vec<char>> {
        let result = self.execute(&BUSINESS_INPUT, out)?;
        write_line(out, &format!("{result:?}"))?;
        Ok(result)
    }
}

impl<T: Ord + Clone + 'static> Debug for Context<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Context")
            .field("strategy", &self.strategy.order())
            .finish()
    }
}
