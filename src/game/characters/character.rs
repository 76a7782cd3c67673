// Arcanian character: the behavior state machine and everything it owns

use glam::Vec2;
use log::debug;
use thiserror::Error;

use crate::core::math::{dead_zone, STICK_DEAD_ZONE};
use crate::engine::input::{Button, PadSnapshot};
use crate::engine::world::{Platform, WorldContext};
use crate::engine::Services;
use crate::game::skills::{SkillSet, SkillSlot};

use super::aim::Aimer;
use super::element::Element;
use super::resources::{BlinkTimer, RechargeState, Vitals};
use super::state::ArcanianState;
use super::stats::{ArcanianStats, BASE_STATS};

/// Vertical drift per tick while playing the death animation
const DEATH_DRIFT: f32 = 2.0;
/// How far past the world ceiling the death drift runs before respawning
const DEATH_EXIT_MARGIN: f32 = 3.0;

/// A player-controlled elemental combat character.
///
/// One `tick` per frame drives the whole lifecycle: physics integration,
/// input-driven transitions, resource regeneration, and the charge-and-release
/// firing protocol. The caller owns the object exclusively; HUD code may read
/// the getters between ticks.
#[derive(Debug)]
pub struct Arcanian {
    name: String,
    player_index: usize,
    element: Element,
    stats: ArcanianStats,
    world: WorldContext,

    // Physics
    pub center: Vec2,
    pub velocity: Vec2,
    prev_velocity_y: f32,
    facing_left: bool,
    /// Whether the world scroller should move this character by its velocity
    travels: bool,

    // Behavior
    state: ArcanianState,
    vitals: Vitals,
    aimer: Aimer,
    skills: SkillSet,
    active_slot: SkillSlot,

    // Timers (frame counts)
    recharge: RechargeState,
    blink: BlinkTimer,
    tp_regen_timer: u32,
    hp_regen_timer: u32,
    spawn_timer: u32,
    firing_delay: i32,

    // Draw-set membership, toggled but not rendered here
    visible: bool,
    aimer_shown: bool,
    shield_art_shown: bool,
}

impl Arcanian {
    /// Create a character in the hidden `InMenu` state
    pub fn new(element: Element, position: Vec2, player_index: usize, world: WorldContext) -> Self {
        let stats = BASE_STATS;
        let vitals = Vitals::full(&stats);
        let aimer = Aimer::new(&stats);
        Self {
            name: element.display_name().to_string(),
            player_index,
            element,
            center: position,
            velocity: stats.spawn_velocity,
            prev_velocity_y: 0.0,
            facing_left: false,
            travels: false,
            state: ArcanianState::InMenu,
            vitals,
            aimer,
            skills: element.skills(),
            active_slot: SkillSlot::Primary,
            recharge: RechargeState::default(),
            blink: BlinkTimer::default(),
            tp_regen_timer: 0,
            hp_regen_timer: 0,
            spawn_timer: 0,
            firing_delay: 0,
            visible: false,
            aimer_shown: false,
            shield_art_shown: false,
            stats,
            world,
        }
    }

    /// Advance one frame: dispatch on the current state, then run the
    /// unconditional aim/facing/shield/blink/regen updates.
    pub fn tick(&mut self, pad: &PadSnapshot, services: &mut Services, lives: &mut i32) {
        match self.state {
            ArcanianState::Resting => self.resting_state(pad, services),
            ArcanianState::Moving => self.moving_state(pad),
            ArcanianState::Falling => self.falling_state(pad),
            ArcanianState::Dying => self.dying_state(lives),
            ArcanianState::Spawning => self.spawning_state(pad, *lives),
            ArcanianState::Firing => self.firing_state(pad),
            ArcanianState::InMenu => self.hide(),
            ArcanianState::Jumping => self.jumping_state(pad),
        }

        self.update_aim(pad);
        self.update_facing(pad);
        self.update_shield_art();
        self.blink.tick(&mut self.visible, &self.stats);
        if self.state != ArcanianState::Moving {
            self.tick_tp_regen();
        }
        if self.element.regenerates_health() {
            self.tick_hp_regen();
        }
    }

    // ---- State handlers -------------------------------------------------

    fn resting_state(&mut self, pad: &PadSnapshot, services: &mut Services) {
        if self.vitals.health <= 0 {
            self.state = ArcanianState::Dying;
        } else if pad.is_pressed(Button::Jump) && self.vitals.tp >= self.stats.jump_tp_cost {
            self.vitals.spend_tp(self.stats.jump_tp_cost);
            self.velocity.y = self.stats.jump_strength;
            self.state = ArcanianState::Jumping;
        } else if self.velocity.y != self.prev_velocity_y {
            // Knocked off whatever we were standing on
            self.state = ArcanianState::Falling;
        } else {
            self.travels = false;
            self.velocity.y = 0.0;

            if self.vitals.tp > 0 && self.firing_delay <= 0 {
                let input = dead_zone(pad.left_stick.x, STICK_DEAD_ZONE);

                if pad.is_pressed(Button::Primary) {
                    self.try_arm_skill(SkillSlot::Primary);
                } else if pad.is_pressed(Button::Secondary) {
                    self.try_arm_skill(SkillSlot::Secondary);
                } else if pad.is_pressed(Button::Ultimate)
                    && self.vitals.ultimate == self.stats.max_ultimate()
                {
                    self.try_arm_skill(SkillSlot::Ultimate);
                } else if input != 0.0 {
                    self.recharge.timer = 0;
                    self.state = ArcanianState::Moving;
                }
            } else {
                self.firing_delay -= 1;
            }
        }
        self.update_recharge(services);
    }

    /// Enter the firing state if TP covers the slot's cost; otherwise the
    /// input is silently ignored this frame.
    fn try_arm_skill(&mut self, slot: SkillSlot) {
        if self.vitals.tp >= self.skills.skill(slot).tp_cost {
            self.active_slot = slot;
            self.aimer.power = self.stats.min_power;
            self.recharge.reset();
            self.state = ArcanianState::Firing;
        }
    }

    fn moving_state(&mut self, pad: &PadSnapshot) {
        let input = dead_zone(pad.left_stick.x, STICK_DEAD_ZONE);

        if self.vitals.health <= 0 {
            self.state = ArcanianState::Dying;
        } else if pad.is_pressed(Button::Jump) && self.vitals.tp >= self.stats.jump_tp_cost {
            self.vitals.spend_tp(self.stats.jump_tp_cost);
            self.velocity.y = self.stats.jump_strength;
            self.state = ArcanianState::Jumping;
        } else if input == 0.0 || self.vitals.tp <= 0 {
            self.state = ArcanianState::Resting;
        } else {
            let vx = input * self.stats.move_speed * self.element.lateral_speed_factor();
            self.velocity.x = vx;
            self.center.x += vx;
            self.travels = true;
            self.prev_velocity_y = self.velocity.y;
            self.velocity.y = self.world.next_velocity_y(self.velocity.y);
        }
    }

    fn falling_state(&mut self, pad: &PadSnapshot) {
        if self.vitals.health <= 0 || self.below_floor() {
            self.state = ArcanianState::Dying;
        } else if self.velocity.y == self.prev_velocity_y || self.velocity.y == 0.0 {
            // Velocity plateau doubles as ground detection; real contact is
            // also asserted externally through `is_on_ground`
            self.velocity.y = 0.0;
            self.prev_velocity_y = 0.0;
            self.state = ArcanianState::Resting;
        } else {
            self.travels = true;
            self.prev_velocity_y = self.velocity.y;
            let descent = self.element.descend(self.velocity.y, pad.left_stick, &self.world);
            self.velocity.y = descent.velocity_y;
            self.center.x += descent.horizontal;
            self.velocity.x = 0.0;
        }
    }

    fn dying_state(&mut self, lives: &mut i32) {
        if self.center.y >= self.world.world_max.y + DEATH_EXIT_MARGIN {
            self.hide();
            *lives -= 1;
            debug!("{} down, {} lives left", self.name, lives);
            self.state = ArcanianState::Spawning;
        } else {
            self.aimer_shown = false;
            self.shield_art_shown = false;
            self.travels = false;
            self.center.y += DEATH_DRIFT;
            self.velocity.x = 0.0;
        }
    }

    fn spawning_state(&mut self, pad: &PadSnapshot, lives: i32) {
        let timed_out =
            self.spawn_timer == self.world.seconds_to_ticks(self.stats.spawn_timeout_seconds);

        if (pad.is_pressed(Button::Confirm) || timed_out) && lives > 0 {
            self.show();
            self.vitals.health = self.stats.max_health;
            self.restore_shield();
            self.vitals.tp = self.stats.max_tp;
            self.vitals.ultimate = 0;
            self.velocity = self.stats.spawn_velocity;
            self.spawn_timer = 0;
            self.state = ArcanianState::Falling;
        } else if lives > 0 {
            self.spawn_timer += 1;
            // Stick steers the spawn cursor, no dead zone
            self.center.x += pad.left_stick.x * 2.0;
        } else {
            self.center.x = 0.0;
        }
    }

    fn firing_state(&mut self, pad: &PadSnapshot) {
        if self.vitals.health <= 0 {
            self.aimer.power = 0.0;
            self.state = ArcanianState::Dying;
        } else if self.velocity.y != self.prev_velocity_y {
            // Knocked off the ground mid-charge; the shot is lost
            self.aimer.power = 0.0;
            self.state = ArcanianState::Falling;
        } else if self.fire_released(pad) || self.aimer.power >= self.stats.max_power {
            let skill = self.skills.skill(self.active_slot);
            self.vitals.spend_tp(skill.tp_cost);
            let origin = self.aimer.reticle_center(self.center, &self.stats);
            self.skills
                .use_skill(self.active_slot, self.aimer.power, self.aimer.angle_deg, origin);
            debug!("{} fires {}", self.name, skill.name);

            self.aimer.power = 0.0;
            if self.active_slot == SkillSlot::Ultimate {
                self.vitals.ultimate = 0;
            }
            self.aimer.reset_reticle(&self.stats);
            self.firing_delay = self.world.ticks_per_second as i32;
            self.state = ArcanianState::Resting;
        } else {
            self.aimer.power += 1.0;
            self.aimer.grow_reticle();
        }
    }

    fn jumping_state(&mut self, pad: &PadSnapshot) {
        if self.vitals.health <= 0 || self.below_floor() {
            self.state = ArcanianState::Dying;
        } else {
            self.travels = true;
            self.velocity.y = self.world.next_velocity_y(self.velocity.y);
            self.center.y += self.velocity.y;
            self.velocity.x = pad.left_stick.x / 2.0;
            self.center.x += self.velocity.x;
        }
    }

    fn fire_released(&self, pad: &PadSnapshot) -> bool {
        pad.is_released(Button::Primary)
            && pad.is_released(Button::Secondary)
            && pad.is_released(Button::Ultimate)
    }

    fn below_floor(&self) -> bool {
        self.center.y < self.world.world_min.y - self.stats.radius * 3.0
    }

    // ---- Per-tick auxiliary updates -------------------------------------

    fn update_aim(&mut self, pad: &PadSnapshot) {
        self.aimer.update(
            pad.right_stick.y,
            self.facing_left,
            self.element.aim_cone(),
            self.stats.aimer_speed,
        );
    }

    /// Either stick past the dead zone turns the character; turning mirrors
    /// the aim angle across the vertical axis.
    fn update_facing(&mut self, pad: &PadSnapshot) {
        let input = dead_zone(pad.left_stick.x + pad.right_stick.x, STICK_DEAD_ZONE);
        if input > 0.0 && self.facing_left {
            self.facing_left = false;
            self.aimer.flip();
        }
        if input < 0.0 && !self.facing_left {
            self.facing_left = true;
            self.aimer.flip();
        }
    }

    fn update_shield_art(&mut self) {
        if self.vitals.shield == 0 {
            self.shield_art_shown = false;
        }
    }

    /// TP trickle: one point every tick_rate/10 frames, paused while Moving
    fn tick_tp_regen(&mut self) {
        self.tp_regen_timer += 1;
        if self.tp_regen_timer >= self.world.ticks_per_second / 10 {
            self.tp_regen_timer = 0;
            self.vitals.gain_tp(1, self.stats.max_tp);
        }
    }

    /// Water passive: one point of health per regen period while below max
    fn tick_hp_regen(&mut self) {
        if self.vitals.health < self.stats.max_health {
            if self.hp_regen_timer == self.world.seconds_to_ticks(self.stats.hp_regen_seconds) {
                self.vitals.health += 1;
                self.hp_regen_timer = 0;
            }
            self.hp_regen_timer += 1;
        }
    }

    /// Post-skill recharge cycle, ticked every resting frame. Arms after
    /// the threshold; while armed either regenerates shield (TP already
    /// full) or grows TP until full, then disarms.
    fn update_recharge(&mut self, services: &mut Services) {
        self.recharge.timer += 1;
        if self.recharge.timer == self.world.seconds_to_ticks(self.stats.recharge_seconds) {
            self.recharge.armed = true;
            self.recharge.timer = 0;
        }

        if self.recharge.armed {
            if self.vitals.tp >= self.stats.max_tp
                && self.vitals.shield < self.element.shield_capacity(&self.stats)
            {
                if !self.recharge.cue_played {
                    services.audio.play_cue("shieldrecover");
                    self.recharge.cue_played = true;
                }
                self.restore_shield();
            }
            if self.vitals.tp >= self.stats.max_tp {
                self.recharge.armed = false;
                self.recharge.timer = 0;
            } else {
                let gain = if self.vitals.tp + 2 < self.stats.max_tp { 2 } else { 1 };
                self.vitals.gain_tp(gain, self.stats.max_tp);
            }
        }
    }

    fn restore_shield(&mut self) {
        let spawning = self.state == ArcanianState::Spawning;
        self.vitals.shield = self
            .element
            .restore_shield(self.vitals.shield, spawning, &self.stats);
        self.shield_art_shown = true;
    }

    // ---- Damage and external referee hooks ------------------------------

    /// Apply one hit. Shield absorbs the whole hit while it holds (overflow
    /// is dropped, not passed to health); otherwise health takes it and the
    /// hit flash starts. Either way the ultimate meter charges.
    pub fn take_damage(&mut self, damage: f32, services: &mut Services) {
        if self.vitals.shield > 0 {
            services
                .haptics
                .set_vibration_motors(self.player_index, 10, 0.5, 0.5);
            services.audio.play_cue("shieldhit");
            self.vitals.shield = self.element.shield_hit(self.vitals.shield, damage);
            self.recharge.cue_played = false;
        } else {
            services.haptics.set_vibration(self.player_index, 20);
            services.audio.play_cue(self.element.hit_cue());
            self.blink.start();
            self.shield_art_shown = false;
            self.vitals.damage_health(damage as i32);
        }

        self.vitals
            .charge_ultimate(damage as i32, self.stats.max_ultimate());
    }

    /// Explicit ground-contact assertion from the collision pass.
    /// Forces Resting on contact (legacy behavior kept alongside the
    /// velocity-plateau check in the falling state).
    pub fn is_on_ground(&mut self, platform: &Platform) -> bool {
        if self
            .world
            .standing_on(self.center, self.stats.radius, platform)
        {
            self.state = ArcanianState::Resting;
            true
        } else {
            false
        }
    }

    /// Referee hook: shove the character into free fall
    pub fn enter_falling(&mut self) {
        self.state = ArcanianState::Falling;
    }

    /// Referee hook: pull the character out of the menu into the spawn flow
    pub fn enter_spawning(&mut self) {
        self.show();
        self.vitals.health = self.stats.max_health;
        self.state = ArcanianState::Spawning;
    }

    /// Move by the current velocity if the travel flag is set.
    /// The world scroller calls this once per frame after `tick`.
    pub fn integrate_travel(&mut self) {
        if self.travels {
            self.center += self.velocity;
        }
    }

    // ---- Visibility -----------------------------------------------------

    pub fn hide(&mut self) {
        self.visible = false;
        self.aimer_shown = false;
        self.shield_art_shown = false;
    }

    pub fn show(&mut self) {
        self.visible = true;
        self.aimer_shown = true;
        self.shield_art_shown = true;
    }

    pub fn show_body_only(&mut self) {
        self.visible = true;
    }

    // ---- Read access for HUD / minimap ----------------------------------

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn element(&self) -> Element {
        self.element
    }

    pub fn player_index(&self) -> usize {
        self.player_index
    }

    pub fn state(&self) -> ArcanianState {
        self.state
    }

    pub fn stats(&self) -> &ArcanianStats {
        &self.stats
    }

    pub fn vitals(&self) -> &Vitals {
        &self.vitals
    }

    pub fn power(&self) -> f32 {
        self.aimer.power
    }

    /// Aim angle relative to the facing direction (mirrored when left)
    pub fn aim_angle(&self) -> f32 {
        self.aimer.cone_angle(self.facing_left)
    }

    pub fn facing_left(&self) -> bool {
        self.facing_left
    }

    pub fn spawn_timer(&self) -> u32 {
        self.spawn_timer
    }

    pub fn travels(&self) -> bool {
        self.travels
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn is_dying_or_spawning(&self) -> bool {
        self.state.is_dying_or_spawning()
    }

    /// Sprite sheet column for the shield art, by remaining strength
    pub fn shield_art_column(&self) -> Option<u32> {
        if self.vitals.shield == 0 {
            None
        } else {
            Some((self.vitals.shield / 10 - 1).clamp(0, 3) as u32)
        }
    }

    pub fn skills(&self) -> &SkillSet {
        &self.skills
    }

    /// Mutable access so the projectile layer can drain pending launches
    pub fn skills_mut(&mut self) -> &mut SkillSet {
        &mut self.skills
    }
}

/// Error spawning into a roster
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RosterError {
    #[error("player slot {0} already has a character")]
    SlotTaken(usize),
}

/// All characters in a match, keyed by player slot
#[derive(Debug, Default)]
pub struct Roster {
    characters: Vec<Arcanian>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a character for a player slot
    pub fn spawn(
        &mut self,
        element: Element,
        position: Vec2,
        player_index: usize,
        world: WorldContext,
    ) -> Result<(), RosterError> {
        if self.get(player_index).is_some() {
            return Err(RosterError::SlotTaken(player_index));
        }
        self.characters
            .push(Arcanian::new(element, position, player_index, world));
        Ok(())
    }

    pub fn get(&self, player_index: usize) -> Option<&Arcanian> {
        self.characters
            .iter()
            .find(|c| c.player_index == player_index)
    }

    pub fn get_mut(&mut self, player_index: usize) -> Option<&mut Arcanian> {
        self.characters
            .iter_mut()
            .find(|c| c.player_index == player_index)
    }

    pub fn all(&self) -> &[Arcanian] {
        &self.characters
    }

    pub fn all_mut(&mut self) -> &mut [Arcanian] {
        &mut self.characters
    }

    pub fn len(&self) -> usize {
        self.characters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.characters.is_empty()
    }
}
