//! The weapon demonstration: a troll fights with an axe, then switches to a
//! bow and arrow.
//!
//! Output on `out` is exactly:
//!
//! ```text
//! Fight like a troll
//! Use a axe
//! Use a bow and arrow
//! ```

use std::io::Write;
use std::sync::Arc;

use sp_core::SpResult;
use tracing::{debug, info};

use crate::{AxeBehavior, BowAndArrowBehavior, Character, Troll};

pub fn run(out: &mut dyn Write) -> SpResult<()> {
    // 1–2. Bind the initial weapon.
    let axe = Arc::new(AxeBehavior);
    let mut troll = Troll::new(axe);
    debug!(character = %troll.kind(), weapon = %troll.weapon_behavior().kind(), "character ready");

    // 3. Fixed action, then the delegated one.
    troll.fight(out)?;
    troll.weapon_behavior().use_weapon(out)?;

    // 4–5. Swap.
    let bow_and_arrow = Arc::new(BowAndArrowBehavior);
    troll.set_weapon_behavior(bow_and_arrow);
    debug!(weapon = %troll.weapon_behavior().kind(), "weapon replaced");

    // 6. Same call, new behavior.
    troll.weapon_behavior().use_weapon(out)?;

    info!("weapon demo complete");
    Ok(())
}
