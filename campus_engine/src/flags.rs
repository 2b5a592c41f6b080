//! World flags derived from item placement.
//!
//! Flags are recomputed once per turn, after the player's command has been
//! carried out. A non-sticky flag always mirrors its condition. A sticky flag
//! records that something happened: once set it stays set.

use log::info;

use crate::CampusWorld;
use crate::condition::Condition;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlagRule {
    pub name: String,
    pub when: Condition,
    pub sticky: bool,
}

/// Re-derive every flag from the current world state.
///
/// All rules see the flags as they were before this call, so the order of
/// rules doesn't matter. Returns the names of flags whose value changed.
pub fn recompute_flags(world: &mut CampusWorld) -> Vec<String> {
    let updates: Vec<(String, bool)> = world
        .flag_rules
        .iter()
        .map(|rule| {
            let observed = rule.when.holds(world);
            let value = observed || (rule.sticky && world.flag_is_set(&rule.name));
            (rule.name.clone(), value)
        })
        .collect();

    let mut changed = Vec::new();
    for (name, value) in updates {
        let was_set = world.flags.contains(&name);
        if value == was_set {
            continue;
        }
        if value {
            world.flags.insert(name.clone());
        } else {
            world.flags.remove(&name);
        }
        info!("flag '{name}' is now {}", if value { "set" } else { "unset" });
        changed.push(name);
    }
    changed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::room::Room;
    use crate::ItemHolder;

    fn world_with_rule(sticky: bool) -> CampusWorld {
        let mut world = CampusWorld::new_empty();
        world.rooms.insert(
            "desk".into(),
            Room {
                id: "desk".into(),
                name: "Desk".into(),
                description: String::new(),
                exits: Vec::new(),
                contents: Vec::new(),
                entry: None,
                overlays: Vec::new(),
            },
        );
        world.flag_rules.push(FlagRule {
            name: "badge_on_desk".into(),
            when: Condition::ItemInRoom {
                item: "badge".into(),
                room: "desk".into(),
            },
            sticky,
        });
        world
    }

    fn set_badge_on_desk(world: &mut CampusWorld, present: bool) {
        let desk = world.rooms.get_mut("desk").unwrap();
        if present {
            desk.add_item("badge".into());
        } else {
            desk.remove_item("badge");
        }
    }

    #[test]
    fn plain_flag_follows_its_condition() {
        let mut world = world_with_rule(false);
        set_badge_on_desk(&mut world, true);
        assert_eq!(recompute_flags(&mut world), vec!["badge_on_desk".to_string()]);
        assert!(world.flag_is_set("badge_on_desk"));

        set_badge_on_desk(&mut world, false);
        recompute_flags(&mut world);
        assert!(!world.flag_is_set("badge_on_desk"));
    }

    #[test]
    fn sticky_flag_never_unsets() {
        let mut world = world_with_rule(true);
        recompute_flags(&mut world);
        assert!(!world.flag_is_set("badge_on_desk"));

        set_badge_on_desk(&mut world, true);
        recompute_flags(&mut world);
        assert!(world.flag_is_set("badge_on_desk"));

        set_badge_on_desk(&mut world, false);
        for _ in 0..3 {
            assert!(recompute_flags(&mut world).is_empty());
            assert!(world.flag_is_set("badge_on_desk"));
        }
    }
}
