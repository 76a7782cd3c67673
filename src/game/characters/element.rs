// Elemental specialization
//
// One enum stands in for the four character variants. Every behavioral
// difference between them goes through the hooks below: lateral speed,
// descent law, shield damage and restore laws, hit cue, aim cone, and the
// skill factory. The base state machine never matches on the element
// anywhere else.

use std::fmt;
use std::str::FromStr;

use glam::Vec2;
use thiserror::Error;

use crate::engine::world::WorldContext;
use crate::game::skills::{Skill, SkillSet};

use super::aim::AimCone;
use super::stats::ArcanianStats;

// Wind passive descent rates, per tick
const WIND_SLOW_FALL: f32 = 0.01;
const WIND_FAST_FALL: f32 = 0.1;

/// One tick of elemental descent
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Descent {
    pub velocity_y: f32,
    /// Horizontal travel this tick (zero for everyone but Wind)
    pub horizontal: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Element {
    Fire,
    Water,
    Earth,
    Wind,
}

impl Element {
    pub const ALL: [Element; 4] = [Element::Fire, Element::Water, Element::Earth, Element::Wind];

    pub fn display_name(self) -> &'static str {
        match self {
            Element::Fire => "Fire Arcanian",
            Element::Water => "Water Arcanian",
            Element::Earth => "Earth Arcanian",
            Element::Wind => "Wind Arcanian",
        }
    }

    /// Aim cone bounds for a right-facing character
    pub fn aim_cone(self) -> AimCone {
        match self {
            Element::Fire => AimCone::new(-20.0, 55.0),
            Element::Water => AimCone::new(0.0, 85.0),
            Element::Earth => AimCone::new(-90.0, 10.0),
            Element::Wind => AimCone::new(-20.0, 90.0),
        }
    }

    /// Cue played when a hit lands on bare health
    pub fn hit_cue(self) -> &'static str {
        match self {
            Element::Fire => "fireArcHit",
            Element::Water => "waterArcHit",
            Element::Earth => "earthArcHit",
            Element::Wind => "windArcHit",
        }
    }

    /// Ground movement speed multiplier (Wind passive: 2x)
    pub fn lateral_speed_factor(self) -> f32 {
        match self {
            Element::Wind => 2.0,
            _ => 1.0,
        }
    }

    /// Shield capacity (Earth passive: 2x)
    pub fn shield_capacity(self, stats: &ArcanianStats) -> i32 {
        match self {
            Element::Earth => stats.max_shield * 2,
            _ => stats.max_shield,
        }
    }

    /// Water passive: trickle health back over time
    pub fn regenerates_health(self) -> bool {
        matches!(self, Element::Water)
    }

    /// Apply one hit to the shield (Fire passive: shield takes double)
    pub fn shield_hit(self, shield: i32, damage: f32) -> i32 {
        let dealt = match self {
            Element::Fire => damage as i32 * 2,
            _ => damage as i32,
        };
        (shield - dealt).max(0)
    }

    /// One shield-regen cycle.
    ///
    /// Everyone but Earth snaps back to full. Earth has double capacity but
    /// regains it incrementally, except on spawn where it starts full.
    pub fn restore_shield(self, shield: i32, spawning: bool, stats: &ArcanianStats) -> i32 {
        let cap = self.shield_capacity(stats);
        match self {
            Element::Earth => {
                let mut shield = if spawning { cap } else { shield };
                if shield < cap {
                    shield += stats.shield_regen_rate;
                }
                shield.min(cap)
            }
            _ => cap,
        }
    }

    /// One tick of falling (Wind passive: stick-controlled descent rate plus
    /// free horizontal drift; everyone else follows gravity)
    pub fn descend(self, velocity_y: f32, left_stick: Vec2, world: &WorldContext) -> Descent {
        match self {
            Element::Wind => {
                let rate = if left_stick.y < 0.0 {
                    WIND_FAST_FALL
                } else {
                    WIND_SLOW_FALL
                };
                Descent {
                    velocity_y: velocity_y - rate,
                    horizontal: left_stick.x,
                }
            }
            _ => Descent {
                velocity_y: world.next_velocity_y(velocity_y),
                horizontal: 0.0,
            },
        }
    }

    /// The element's three abilities. Ultimates cost no TP; they are gated
    /// by the full ultimate meter instead.
    pub fn skills(self) -> SkillSet {
        match self {
            Element::Fire => SkillSet::new(
                Skill::new("Fireball", 20),
                Skill::new("Multi Fireball", 35),
                Skill::new("Mega Fireball", 0),
            ),
            Element::Water => SkillSet::new(
                Skill::new("Single Stream", 15),
                Skill::new("Double Stream", 30),
                Skill::new("Ultimate Stream", 0),
            ),
            Element::Earth => SkillSet::new(
                Skill::new("Earth Mole", 20),
                Skill::new("Mole Launcher", 40),
                Skill::new("Mole Barrage", 0),
            ),
            Element::Wind => SkillSet::new(
                Skill::new("Wind Blade", 15),
                Skill::new("Multi Wind Blade", 35),
                Skill::new("Mega Wind Blade", 0),
            ),
        }
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown element: {0:?} (expected fire, water, earth, or wind)")]
pub struct ParseElementError(String);

impl FromStr for Element {
    type Err = ParseElementError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "fire" => Ok(Element::Fire),
            "water" => Ok(Element::Water),
            "earth" => Ok(Element::Earth),
            "wind" => Ok(Element::Wind),
            other => Err(ParseElementError(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::characters::stats::BASE_STATS;
    use approx::assert_relative_eq;

    #[test]
    fn test_aim_cones() {
        assert_eq!(Element::Fire.aim_cone(), AimCone::new(-20.0, 55.0));
        assert_eq!(Element::Water.aim_cone(), AimCone::new(0.0, 85.0));
        assert_eq!(Element::Earth.aim_cone(), AimCone::new(-90.0, 10.0));
        assert_eq!(Element::Wind.aim_cone(), AimCone::new(-20.0, 90.0));
    }

    #[test]
    fn test_fire_shield_takes_double() {
        assert_eq!(Element::Fire.shield_hit(40, 10.0), 20);
        assert_eq!(Element::Water.shield_hit(40, 10.0), 30);
    }

    #[test]
    fn test_shield_never_negative() {
        assert_eq!(Element::Fire.shield_hit(10, 50.0), 0);
        assert_eq!(Element::Wind.shield_hit(0, 5.0), 0);
    }

    #[test]
    fn test_earth_shield_capacity_doubles() {
        assert_eq!(Element::Earth.shield_capacity(&BASE_STATS), 80);
        assert_eq!(Element::Fire.shield_capacity(&BASE_STATS), 40);
    }

    #[test]
    fn test_default_restore_snaps_to_full() {
        assert_eq!(Element::Water.restore_shield(3, false, &BASE_STATS), 40);
        assert_eq!(Element::Fire.restore_shield(0, true, &BASE_STATS), 40);
    }

    #[test]
    fn test_earth_restore_is_incremental() {
        assert_eq!(Element::Earth.restore_shield(30, false, &BASE_STATS), 35);
        assert_eq!(Element::Earth.restore_shield(78, false, &BASE_STATS), 80);
        assert_eq!(Element::Earth.restore_shield(80, false, &BASE_STATS), 80);
    }

    #[test]
    fn test_earth_restore_on_spawn_starts_full() {
        assert_eq!(Element::Earth.restore_shield(0, true, &BASE_STATS), 80);
    }

    #[test]
    fn test_wind_descent_rates() {
        let world = WorldContext::default();

        let slow = Element::Wind.descend(-0.5, Vec2::new(0.3, 0.0), &world);
        assert_relative_eq!(slow.velocity_y, -0.51);
        assert_relative_eq!(slow.horizontal, 0.3);

        let fast = Element::Wind.descend(-0.5, Vec2::new(0.0, -1.0), &world);
        assert_relative_eq!(fast.velocity_y, -0.6);
    }

    #[test]
    fn test_default_descent_follows_gravity() {
        let world = WorldContext::default();
        let descent = Element::Earth.descend(-0.1, Vec2::new(1.0, -1.0), &world);
        assert_relative_eq!(descent.velocity_y, world.next_velocity_y(-0.1));
        assert_eq!(descent.horizontal, 0.0);
    }

    #[test]
    fn test_wind_moves_twice_as_fast() {
        assert_eq!(Element::Wind.lateral_speed_factor(), 2.0);
        assert_eq!(Element::Water.lateral_speed_factor(), 1.0);
    }

    #[test]
    fn test_only_water_regenerates_health() {
        assert!(Element::Water.regenerates_health());
        assert!(!Element::Fire.regenerates_health());
        assert!(!Element::Earth.regenerates_health());
        assert!(!Element::Wind.regenerates_health());
    }

    #[test]
    fn test_skill_factories() {
        assert_eq!(
            Element::Wind.skills().skill_name(crate::game::skills::SkillSlot::Primary),
            "Wind Blade"
        );
        for element in Element::ALL {
            let set = element.skills();
            assert_eq!(set.skill(crate::game::skills::SkillSlot::Ultimate).tp_cost, 0);
        }
    }

    #[test]
    fn test_parse() {
        assert_eq!("fire".parse::<Element>().unwrap(), Element::Fire);
        assert_eq!("Wind".parse::<Element>().unwrap(), Element::Wind);
        assert!("lightning".parse::<Element>().is_err());
    }
}
