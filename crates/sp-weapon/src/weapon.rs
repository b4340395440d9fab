//! The `WeaponBehavior` trait and its variants.

use std::io::Write;
use std::sync::Arc;

use sp_core::{SpResult, write_line};

/// Tag identifying a weapon variant.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum WeaponKind {
    /// [`SwordBehavior`].
    Sword,
    /// [`KnifeBehavior`].
    Knife,
    /// [`BowAndArrowBehavior`].
    BowAndArrow,
    /// [`AxeBehavior`].
    Axe,
}

impl WeaponKind {
    /// Every variant, in declaration order.
    pub const ALL: [WeaponKind; 4] = [
        WeaponKind::Sword,
        WeaponKind::Knife,
        WeaponKind::BowAndArrow,
        WeaponKind::Axe,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            WeaponKind::Sword       => "sword",
            WeaponKind::Knife       => "knife",
            WeaponKind::BowAndArrow => "bow-and-arrow",
            WeaponKind::Axe         => "axe",
        }
    }

    /// A shareable behavior instance for this tag.
    pub fn behavior(self) -> Arc<dyn WeaponBehavior> {
        match self {
            WeaponKind::Sword       => Arc::new(SwordBehavior),
            WeaponKind::Knife       => Arc::new(KnifeBehavior),
            WeaponKind::BowAndArrow => Arc::new(BowAndArrowBehavior),
            WeaponKind::Axe         => Arc::new(AxeBehavior),
        }
    }
}

impl std::fmt::Display for WeaponKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How a character uses whatever it is holding.
///
/// Implementations are stateless: `use_weapon` always writes the same line,
/// and nothing about the holder is read or changed.  The trait is object
/// safe so characters can store an `Arc<dyn WeaponBehavior>` and swap it at
/// run time.
///
/// # Example
///
/// ```rust,ignore
/// struct Slingshot;
///
/// impl WeaponBehavior for Slingshot {
///     fn kind(&self) -> WeaponKind { WeaponKind::BowAndArrow }
///     fn description(&self) -> &'static str { "Use a slingshot" }
/// }
/// ```
///
/// The trait has no instance of its own; only variants can be built:
///
/// ```compile_fail
/// use sp_weapon::WeaponBehavior;
///
/// let _weapon: dyn WeaponBehavior = sp_weapon::SwordBehavior;
/// ```
pub trait WeaponBehavior: Send + Sync + 'static {
    fn kind(&self) -> WeaponKind;

    /// The fixed line printed when the weapon is used.
    fn description(&self) -> &'static str;

    /// Write [`description`][Self::description] as one line to `out`.
    fn use_weapon(&self, out: &mut dyn Write) -> SpResult<()> {
        write_line(out, self.description())
    }
}

/// Writes `Use a sword`.
pub struct SwordBehavior;

impl WeaponBehavior for SwordBehavior {
    fn kind(&self) -> WeaponKind {
        WeaponKind::Sword
    }

    fn description(&self) -> &'static str {
        "Use a sword"
    }
}

/// Writes `Use a knife`.
pub struct KnifeBehavior;

impl WeaponBehavior for KnifeBehavior {
    fn kind(&self) -> WeaponKind {
        WeaponKind::Knife
    }

    fn description(&self) -> &'static str {
        "Use a knife"
    }
}

/// Writes `Use a bow and arrow`.
pub struct BowAndArrowBehavior;

impl WeaponBehavior for BowAndArrowBehavior {
    fn kind(&self) -> WeaponKind {
        WeaponKind::BowAndArrow
    }

    fn description(&self) -> &'static str {
        "Use a bow and arrow"
    }
}

/// Writes `Use a axe`.
pub struct AxeBehavior;

impl WeaponBehavior for AxeBehavior {
    fn kind(&self) -> WeaponKind {
        WeaponKind::Axe
    }

    // Article kept as-is: demo output is compared byte for byte.
    fn description(&self) -> &'static str {
        "Use a axe"
    }
}
