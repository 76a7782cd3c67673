// Combat resources and the small frame-counting timers

use super::stats::ArcanianStats;

/// Health, shield, technical points, and the ultimate meter.
///
/// Every mutation clamps: none of these ever goes negative or past its cap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vitals {
    pub health: i32,
    pub shield: i32,
    pub tp: i32,
    pub ultimate: i32,
}

impl Vitals {
    /// Fresh character: full health/shield/TP, empty ultimate meter
    pub fn full(stats: &ArcanianStats) -> Self {
        Self {
            health: stats.max_health,
            shield: stats.max_shield,
            tp: stats.max_tp,
            ultimate: 0,
        }
    }

    pub fn spend_tp(&mut self, cost: i32) {
        self.tp = (self.tp - cost).max(0);
    }

    pub fn gain_tp(&mut self, amount: i32, max_tp: i32) {
        self.tp = (self.tp + amount).min(max_tp);
    }

    pub fn damage_health(&mut self, damage: i32) {
        self.health = (self.health - damage).max(0);
    }

    pub fn charge_ultimate(&mut self, amount: i32, max_ultimate: i32) {
        self.ultimate = (self.ultimate + amount).min(max_ultimate);
    }
}

/// Hit-flash timer: toggles visibility every `blink_rate` ticks until
/// `max_blink_ticks` have elapsed, then forces the character visible.
#[derive(Debug, Clone, Default)]
pub struct BlinkTimer {
    active: bool,
    timer: u32,
    elapsed: u32,
}

impl BlinkTimer {
    pub fn start(&mut self) {
        self.active = true;
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn tick(&mut self, visible: &mut bool, stats: &ArcanianStats) {
        if !self.active {
            return;
        }
        if self.elapsed < stats.max_blink_ticks {
            if self.timer == stats.blink_rate {
                *visible = !*visible;
                self.timer = 0;
            } else {
                self.timer += 1;
            }
            self.elapsed += 1;
        } else {
            self.active = false;
            self.elapsed = 0;
            *visible = true;
        }
    }
}

/// Bookkeeping for the post-skill recharge cycle.
///
/// The timer climbs while resting; at the threshold the flag arms and the
/// recharge behavior (TP growth or shield regen) runs until TP is full.
#[derive(Debug, Clone, Default)]
pub struct RechargeState {
    pub timer: u32,
    pub armed: bool,
    /// One-shot guard so the regen cue plays once per armed cycle
    pub cue_played: bool,
}

impl RechargeState {
    /// Cancel the cycle (entering Firing or Moving does this)
    pub fn reset(&mut self) {
        self.timer = 0;
        self.armed = false;
    }
}
