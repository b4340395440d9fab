//! Characters: holders of exactly one swappable weapon behavior.

use std::io::Write;
use std::sync::Arc;

use sp_core::{SpResult, write_line};

use crate::WeaponBehavior;

/// Tag identifying a concrete character type.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CharacterKind {
    /// [`King`].
    King,
    /// [`Knight`].
    Knight,
    /// [`Queen`].
    Queen,
    /// [`Troll`].
    Troll,
}

impl CharacterKind {
    pub fn as_str(self) -> &'static str {
        match self {
            CharacterKind::King   => "king",
            CharacterKind::Knight => "knight",
            CharacterKind::Queen  => "queen",
            CharacterKind::Troll  => "troll",
        }
    }
}

impl std::fmt::Display for CharacterKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A game character.
///
/// `fight` is fixed per concrete type; `use_weapon` is delegated to whichever
/// [`WeaponBehavior`] is currently bound.  A character always holds exactly
/// one behavior: the concrete types can only be built with one, and
/// [`set_weapon_behavior`][Self::set_weapon_behavior] replaces rather than
/// clears it.
///
/// # Construction
///
/// A concrete character is built with the weapon it starts out holding:
///
/// ```
/// use std::sync::Arc;
///
/// use sp_weapon::{AxeBehavior, Character, Troll, WeaponKind};
///
/// let troll = Troll::new(Arc::new(AxeBehavior));
/// assert_eq!(troll.weapon_behavior().kind(), WeaponKind::Axe);
/// ```
///
/// There is no weaponless character, so `Default` is not implemented:
///
/// ```compile_fail
/// use sp_weapon::Troll;
///
/// let _troll = Troll::default();
/// ```
///
/// nor can the struct be assembled by hand outside this crate:
///
/// ```compile_fail
/// use std::sync::Arc;
///
/// use sp_weapon::{AxeBehavior, Troll, WeaponBehavior};
///
/// let weapon: Arc<dyn WeaponBehavior> = Arc::new(AxeBehavior);
/// let _troll = Troll { weapon };
/// ```
///
/// ```compile_fail
/// use sp_weapon::Troll;
///
/// let _troll = Troll::new();
/// ```
///
/// `Character` itself is a trait, not a value:
///
/// ```compile_fail
/// use std::sync::Arc;
///
/// use sp_weapon::{AxeBehavior, Character};
///
/// let _c: dyn Character = sp_weapon::Troll::new(Arc::new(AxeBehavior));
/// ```
pub trait Character {
    fn kind(&self) -> CharacterKind;

    /// The behavior that the next `use_weapon` call will delegate to.
    fn weapon_behavior(&self) -> &Arc<dyn WeaponBehavior>;

    /// Bind `weapon` in place of the current behavior.
    ///
    /// Takes effect for the very next delegated call.  The previous behavior
    /// is only dropped from this character; other holders sharing it are
    /// unaffected.
    fn set_weapon_behavior(&mut self, weapon: Arc<dyn WeaponBehavior>);

    /// Write this character's fixed fighting line to `out`.
    fn fight(&self, out: &mut dyn Write) -> SpResult<()>;

    /// Delegate to the bound weapon behavior, relaying its result.
    fn use_weapon(&self, out: &mut dyn Write) -> SpResult<()> {
        self.weapon_behavior().use_weapon(out)
    }
}

/// Generate a concrete character type holding one weapon behavior.
macro_rules! character {
    ($(#[$attr:meta])* $vis:vis struct $name:ident => $kind:ident, $line:literal;) => {
        $(#[$attr])*
        $vis struct $name {
            weapon: Arc<dyn WeaponBehavior>,
        }

        impl $name {
            /// Build with the weapon it starts out holding.
            pub fn new(weapon: Arc<dyn WeaponBehavior>) -> Self {
                Self { weapon }
            }
        }

        impl Character for $name {
            #[inline]
            fn kind(&self) -> CharacterKind {
                CharacterKind::$kind
            }

            #[inline]
            fn weapon_behavior(&self) -> &Arc<dyn WeaponBehavior> {
                &self.weapon
            }

            fn set_weapon_behavior(&mut self, weapon: Arc<dyn WeaponBehavior>) {
                self.weapon = weapon;
            }

            fn fight(&self, out: &mut dyn Write) -> SpResult<()> {
                write_line(out, $line)
            }
        }

        impl std::fmt::Debug for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.debug_struct(stringify!($name))
                    .field("weapon", &self.weapon.kind())
                    .finish()
            }
        }
    };
}

character! {
    pub struct King => King, "Fight like a king";
}

character! {
    pub struct Knight => Knight, "Fight like a knight";
}

character! {
    pub struct Queen => Queen, "Fight like a queen";
}

character! {
    pub struct Troll => Troll, "Fight like a troll";
}
