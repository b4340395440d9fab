//! Unit tests for sp-weapon.

use std::sync::Arc;

use crate::{
    AxeBehavior, BowAndArrowBehavior, Character, CharacterKind, King, Knight, KnifeBehavior, Queen,
    SwordBehavior, Troll, WeaponBehavior, WeaponKind,
};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn captured(f: impl FnOnce(&mut Vec<u8>)) -> String {
    let mut out = Vec::new();
    f(&mut out);
    String::from_utf8(out).expect("demo output is UTF-8")
}

fn used(weapon: &dyn WeaponBehavior) -> String {
    captured(|out| weapon.use_weapon(out).unwrap())
}

// ── WeaponBehavior ────────────────────────────────────────────────────────────

#[cfg(test)]
mod weapon_tests {
    use super::*;

    #[test]
    fn fixed_lines() {
        assert_eq!(used(&SwordBehavior),       "Use a sword\n");
        assert_eq!(used(&KnifeBehavior),       "Use a knife\n");
        assert_eq!(used(&BowAndArrowBehavior), "Use a bow and arrow\n");
        assert_eq!(used(&AxeBehavior),         "Use a axe\n");
    }

    #[test]
    fn deterministic() {
        for kind in WeaponKind::ALL {
            let weapon = kind.behavior();
            assert_eq!(used(weapon.as_ref()), used(weapon.as_ref()), "{kind}");
        }
    }

    #[test]
    fn lines_are_distinct() {
        let mut lines: Vec<_> = WeaponKind::ALL.iter().map(|k| k.behavior().description()).collect();
        lines.sort_unstable();
        lines.dedup();
        assert_eq!(lines.len(), WeaponKind::ALL.len());
    }

    #[test]
    fn kind_factory_matches_variant() {
        for kind in WeaponKind::ALL {
            assert_eq!(kind.behavior().kind(), kind);
        }
    }

    #[test]
    fn kind_display() {
        assert_eq!(WeaponKind::Sword.to_string(), "sword");
        assert_eq!(WeaponKind::BowAndArrow.to_string(), "bow-and-arrow");
        assert_eq!(WeaponKind::Axe.as_str(), "axe");
    }

    #[test]
    fn custom_weapon_through_trait_object() {
        struct Slingshot;

        impl WeaponBehavior for Slingshot {
            fn kind(&self) -> WeaponKind {
                WeaponKind::BowAndArrow
            }

            fn description(&self) -> &'static str {
                "Use a slingshot"
            }
        }

        let weapon: Box<dyn WeaponBehavior> = Box::new(Slingshot);
        assert_eq!(used(weapon.as_ref()), "Use a slingshot\n");
    }
}

// ── Character ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod character_tests {
    use super::*;

    fn fought(c: &dyn Character) -> String {
        captured(|out| c.fight(out).unwrap())
    }

    fn wielded(c: &dyn Character) -> String {
        captured(|out| c.use_weapon(out).unwrap())
    }

    #[test]
    fn fight_lines() {
        let w = WeaponKind::Sword.behavior();
        assert_eq!(fought(&King::new(w.clone())),   "Fight like a king\n");
        assert_eq!(fought(&Knight::new(w.clone())), "Fight like a knight\n");
        assert_eq!(fought(&Queen::new(w.clone())),  "Fight like a queen\n");
        assert_eq!(fought(&Troll::new(w)),          "Fight like a troll\n");
    }

    #[test]
    fn kinds() {
        let w = WeaponKind::Knife.behavior();
        assert_eq!(King::new(w.clone()).kind(),   CharacterKind::King);
        assert_eq!(Knight::new(w.clone()).kind(), CharacterKind::Knight);
        assert_eq!(Queen::new(w.clone()).kind(),  CharacterKind::Queen);
        assert_eq!(Troll::new(w).kind(),          CharacterKind::Troll);
        assert_eq!(CharacterKind::Troll.to_string(), "troll");
    }

    #[test]
    fn reports_initial_weapon() {
        let axe: Arc<dyn WeaponBehavior> = Arc::new(AxeBehavior);
        let troll = Troll::new(axe.clone());
        assert!(Arc::ptr_eq(troll.weapon_behavior(), &axe));
        assert_eq!(troll.weapon_behavior().kind(), WeaponKind::Axe);
    }

    #[test]
    fn delegates_to_bound_weapon() {
        let queen = Queen::new(Arc::new(KnifeBehavior));
        assert_eq!(wielded(&queen), "Use a knife\n");
    }

    #[test]
    fn swap_is_never_stale() {
        let mut knight = Knight::new(Arc::new(SwordBehavior));
        assert_eq!(wielded(&knight), "Use a sword\n");

        knight.set_weapon_behavior(Arc::new(BowAndArrowBehavior));
        assert_eq!(knight.weapon_behavior().kind(), WeaponKind::BowAndArrow);
        assert_eq!(wielded(&knight), "Use a bow and arrow\n");

        knight.set_weapon_behavior(Arc::new(SwordBehavior));
        assert_eq!(wielded(&knight), "Use a sword\n");
    }

    #[test]
    fn swap_does_not_change_fight() {
        let mut king = King::new(Arc::new(SwordBehavior));
        king.set_weapon_behavior(Arc::new(AxeBehavior));
        assert_eq!(fought(&king), "Fight like a king\n");
    }

    #[test]
    fn weapon_shared_between_holders() {
        let sword: Arc<dyn WeaponBehavior> = Arc::new(SwordBehavior);
        let king = King::new(sword.clone());
        let mut queen = Queen::new(sword.clone());
        assert_eq!(Arc::strong_count(&sword), 3);

        queen.set_weapon_behavior(Arc::new(KnifeBehavior));
        assert_eq!(Arc::strong_count(&sword), 2);
        assert!(Arc::ptr_eq(king.weapon_behavior(), &sword));
        assert_eq!(wielded(&king), "Use a sword\n");
        assert_eq!(wielded(&queen), "Use a knife\n");
    }

    #[test]
    fn heterogeneous_roster() {
        let bow = WeaponKind::BowAndArrow.behavior();
        let roster: Vec<Box<dyn Character>> = vec![
            Box::new(King::new(bow.clone())),
            Box::new(Troll::new(bow)),
        ];
        let text = captured(|out| {
            for c in &roster {
                c.fight(out).unwrap();
                c.use_weapon(out).unwrap();
            }
        });
        assert_eq!(
            text,
            "Fight like a king\nUse a bow and arrow\nFight like a troll\nUse a bow and arrow\n"
        );
    }

    #[test]
    fn debug_shows_weapon_kind() {
        let troll = Troll::new(Arc::new(AxeBehavior));
        assert_eq!(format!("{troll:?}"), "Troll { weapon: Axe }");
    }
}

// ── Demo ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod demo_tests {
    use super::*;

    #[test]
    fn transcript() {
        let text = captured(|out| crate::demo::run(out).unwrap());
        assert_eq!(text, "Fight like a troll\nUse a axe\nUse a bow and arrow\n");
    }

    #[test]
    fn repeatable() {
        let a = captured(|out| crate::demo::run(out).unwrap());
        let b = captured(|out| crate::demo::run(out).unwrap());
        assert_eq!(a, b);
    }
}
