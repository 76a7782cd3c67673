// Skill sets and launch requests
//
// Projectile flight and damage live outside this crate. Firing a skill only
// records a `SkillLaunch`; the projectile layer drains the queue after each
// tick and does whatever it likes with the requests.

use glam::Vec2;

/// The three selectable ability slots
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SkillSlot {
    Primary,
    Secondary,
    Ultimate,
}

/// A selectable ability and its technical-point cost
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Skill {
    pub name: &'static str,
    pub tp_cost: i32,
}

impl Skill {
    pub const fn new(name: &'static str, tp_cost: i32) -> Self {
        Self { name, tp_cost }
    }
}

/// A projectile launch request handed to the external skill layer
#[derive(Debug, Clone, PartialEq)]
pub struct SkillLaunch {
    pub skill: &'static str,
    pub power: f32,
    pub angle_deg: f32,
    pub origin: Vec2,
}

/// Three abilities plus the pending launch queue
#[derive(Debug, Clone)]
pub struct SkillSet {
    primary: Skill,
    secondary: Skill,
    ultimate: Skill,
    launches: Vec<SkillLaunch>,
}

impl SkillSet {
    pub fn new(primary: Skill, secondary: Skill, ultimate: Skill) -> Self {
        Self {
            primary,
            secondary,
            ultimate,
            launches: Vec::new(),
        }
    }

    pub fn skill(&self, slot: SkillSlot) -> Skill {
        match slot {
            SkillSlot::Primary => self.primary,
            SkillSlot::Secondary => self.secondary,
            SkillSlot::Ultimate => self.ultimate,
        }
    }

    pub fn skill_name(&self, slot: SkillSlot) -> &'static str {
        self.skill(slot).name
    }

    /// Record a launch request. Assumed always to succeed.
    pub fn use_skill(&mut self, slot: SkillSlot, power: f32, angle_deg: f32, origin: Vec2) {
        self.launches.push(SkillLaunch {
            skill: self.skill(slot).name,
            power,
            angle_deg,
            origin,
        });
    }

    /// Hand pending launches to the projectile layer
    pub fn drain_launches(&mut self) -> Vec<SkillLaunch> {
        std::mem::take(&mut self.launches)
    }

    pub fn pending_launches(&self) -> &[SkillLaunch] {
        &self.launches
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_set() -> SkillSet {
        SkillSet::new(
            Skill::new("Fireball", 20),
            Skill::new("Multi Fireball", 35),
            Skill::new("Mega Fireball", 0),
        )
    }

    #[test]
    fn test_slot_lookup() {
        let set = test_set();
        assert_eq!(set.skill(SkillSlot::Primary).name, "Fireball");
        assert_eq!(set.skill(SkillSlot::Secondary).tp_cost, 35);
        assert_eq!(set.skill_name(SkillSlot::Ultimate), "Mega Fireball");
    }

    #[test]
    fn test_use_skill_records_launch() {
        let mut set = test_set();
        set.use_skill(SkillSlot::Primary, 42.0, 25.0, Vec2::new(3.0, 4.0));

        let launches = set.pending_launches();
        assert_eq!(launches.len(), 1);
        assert_eq!(launches[0].skill, "Fireball");
        assert_eq!(launches[0].power, 42.0);
        assert_eq!(launches[0].angle_deg, 25.0);
    }

    #[test]
    fn test_drain_empties_queue() {
        let mut set = test_set();
        set.use_skill(SkillSlot::Ultimate, 70.0, 90.0, Vec2::ZERO);

        let drained = set.drain_launches();
        assert_eq!(drained.len(), 1);
        assert!(set.pending_launches().is_empty());
        assert!(set.drain_launches().is_empty());
    }
}
