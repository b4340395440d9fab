//! `sp-weapon` — characters that fight with a swappable weapon behavior.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                     |
//! |---------------|--------------------------------------------------------------|
//! | [`weapon`]    | `WeaponBehavior` trait, `WeaponKind`, the four weapon variants |
//! | [`character`] | `Character` trait, `CharacterKind`, `King`/`Knight`/`Queen`/`Troll` |
//! | [`demo`]      | `run` — troll fights with an axe, then switches to a bow     |
//!
//! # Design notes
//!
//! Two things vary independently: *who* a character is (its concrete type,
//! which fixes `fight`) and *what* it wields (an `Arc<dyn WeaponBehavior>`
//! that can be replaced at any time).  Weapon behaviors carry no state, so a
//! single instance may be shared by any number of characters.

pub mod character;
pub mod demo;
pub mod weapon;

#[cfg(test)]
mod tests;

pub use character::{Character, CharacterKind, King, Knight, Queen, Troll};
pub use weapon::{
    AxeBehavior, BowAndArrowBehavior, KnifeBehavior, SwordBehavior, WeaponBehavior, WeaponKind,
};
