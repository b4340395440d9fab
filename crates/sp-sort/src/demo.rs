//! The sorting demonstration: ascending, then the same input descending.
//!
//! Output on `out` is exactly:
//!
//! ```text
//! sorting list...
//! ['a', 'b', 'c']
//! reversing and sorting list...
//! ['c', 'b', 'a']
//! ```

use std::io::Write;
use std::sync::Arc;

use sp_core::SpResult;
use tracing::{debug, info};

use crate::{Context, SortAscending, SortDescending};

pub fn run(out: &mut dyn Write) -> SpResult<()> {
    let mut context: Context<char> = Context::new(Arc::new(SortAscending));
    debug!(strategy = %context.strategy().order(), "context ready");

    let first = context.do_some_business_logic(out)?;
    debug!(?first, "first pass");

    context.set_strategy(Arc::new(SortDescending));
    debug!(strategy = %context.strategy().order(), "strategy replaced");

    let second = context.do_some_business_logic(out)?;
    debug!(?second, "second pass");

    info!("sorting demo complete");
    Ok(())
}
