//! Core game state for the idle clicker.
//!
//! All balances, upgrade levels and achievement flags live in [`GameState`];
//! transitions (click, tick, purchase, prestige, hard reset) are methods on
//! it, and the [`Reducible`] impl exposes them to the Yew state handle.
//! Storage and rendering live elsewhere; nothing in this module touches the
//! DOM.

use serde::{Deserialize, Serialize};
use std::rc::Rc;
use yew::Reducible;

use crate::save::SaveGame;
use crate::util::clog;

// ---------------- Upgrades -----------------

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UpgradeId {
    BetterClick,
    AutoClicker,
    SuperClicker,
}

pub struct UpgradeDef {
    pub id: UpgradeId,
    pub name: &'static str,
    pub base_cost: u64,
}

/// Fixed upgrade catalogue in display order. Index == `UpgradeId as usize`.
pub static UPGRADE_DEFS: &[UpgradeDef] = &[
    UpgradeDef {
        id: UpgradeId::BetterClick,
        name: "Better Click",
        base_cost: 10,
    },
    UpgradeDef {
        id: UpgradeId::AutoClicker,
        name: "Auto Clicker",
        base_cost: 50,
    },
    UpgradeDef {
        id: UpgradeId::SuperClicker,
        name: "Super Clicker",
        base_cost: 200,
    },
];

impl UpgradeId {
    pub fn def(self) -> &'static UpgradeDef {
        &UPGRADE_DEFS[self as usize]
    }
}

/// A purchasable upgrade. Identity and costs come from the static def;
/// only the level is mutable state.
#[derive(Clone, Debug, PartialEq)]
pub struct Upgrade {
    pub id: UpgradeId,
    pub level: u32,
}

impl Upgrade {
    pub fn new(id: UpgradeId) -> Self {
        Self { id, level: 0 }
    }

    pub fn name(&self) -> &'static str {
        self.id.def().name
    }

    /// Cost of the next level: floor(base * 1.5^level).
    pub fn cost(&self) -> u64 {
        (self.id.def().base_cost as f64 * 1.5_f64.powi(self.level as i32)).floor() as u64
    }
}

// ---------------- Achievements -----------------

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AchievementId {
    Points100,
    Points1000,
    Points10000,
    Prestige1,
    Prestige5,
    Clicks100,
    Clicks1000,
    Upgrade10,
}

pub struct AchievementDef {
    pub id: AchievementId,
    pub name: &'static str,
    pub desc: &'static str,
}

pub static ACHIEVEMENT_DEFS: &[AchievementDef] = &[
    AchievementDef {
        id: AchievementId::Points100,
        name: "100 Points!",
        desc: "Reach 100 points.",
    },
    AchievementDef {
        id: AchievementId::Points1000,
        name: "1,000 Points!",
        desc: "Reach 1,000 points.",
    },
    AchievementDef {
        id: AchievementId::Points10000,
        name: "10,000 Points!",
        desc: "Reach 10,000 points.",
    },
    AchievementDef {
        id: AchievementId::Prestige1,
        name: "First Prestige!",
        desc: "Reach prestige level 1.",
    },
    AchievementDef {
        id: AchievementId::Prestige5,
        name: "Prestige V",
        desc: "Reach prestige level 5.",
    },
    AchievementDef {
        id: AchievementId::Clicks100,
        name: "Clicker!",
        desc: "Click 100 times.",
    },
    AchievementDef {
        id: AchievementId::Clicks1000,
        name: "Click Machine!",
        desc: "Click 1,000 times.",
    },
    AchievementDef {
        id: AchievementId::Upgrade10,
        name: "Upgrader!",
        desc: "Reach level 10 in any upgrade.",
    },
];

impl AchievementId {
    pub fn def(self) -> &'static AchievementDef {
        &ACHIEVEMENT_DEFS[self as usize]
    }

    /// Pure unlock predicate over the current state.
    pub fn is_met(self, g: &GameState) -> bool {
        match self {
            AchievementId::Points100 => g.points >= 100.0,
            AchievementId::Points1000 => g.points >= 1_000.0,
            AchievementId::Points10000 => g.points >= 10_000.0,
            AchievementId::Prestige1 => g.prestige_level >= 1,
            AchievementId::Prestige5 => g.prestige_level >= 5,
            AchievementId::Clicks100 => g.total_clicks >= 100,
            AchievementId::Clicks1000 => g.total_clicks >= 1_000,
            AchievementId::Upgrade10 => g.upgrades.iter().any(|u| u.level >= 10),
        }
    }
}

/// Achievement progress. `unlocked` only ever flips false -> true.
#[derive(Clone, Debug, PartialEq)]
pub struct Achievement {
    pub id: AchievementId,
    pub unlocked: bool,
}

// ---------------- Game state -----------------

pub const INITIAL_PRESTIGE_COST: u64 = 1000;

#[derive(Clone, Debug, PartialEq)]
pub struct GameState {
    /// Spendable balance. Never negative: spends are gated on affordability.
    pub points: f64,
    /// Lifetime earnings; only hard reset zeroes this.
    pub total_points_earned: f64,
    pub total_clicks: u64,
    /// Base rates derived from upgrade levels, cached alongside them.
    pub base_points_per_click: f64,
    pub base_points_per_second: f64,
    pub prestige_level: u32,
    /// Always 1 + 0.5 * prestige_level; recomputed, never set directly.
    pub prestige_multiplier: f64,
    pub prestige_cost: u64,
    pub upgrades: Vec<Upgrade>,
    pub achievements: Vec<Achievement>,
    /// Change counter bumped on every committed transition; drives the
    /// persist effect and re-renders. Not part of the save record.
    pub version: u64,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    pub fn new() -> Self {
        Self {
            points: 0.0,
            total_points_earned: 0.0,
            total_clicks: 0,
            base_points_per_click: 1.0,
            base_points_per_second: 0.0,
            prestige_level: 0,
            prestige_multiplier: 1.0,
            prestige_cost: INITIAL_PRESTIGE_COST,
            upgrades: UPGRADE_DEFS.iter().map(|d| Upgrade::new(d.id)).collect(),
            achievements: ACHIEVEMENT_DEFS
                .iter()
                .map(|d| Achievement {
                    id: d.id,
                    unlocked: false,
                })
                .collect(),
            version: 0,
        }
    }

    // ---- derived-value queries (pure) ----

    pub fn upgrade_level(&self, id: UpgradeId) -> u32 {
        self.upgrades
            .iter()
            .find(|u| u.id == id)
            .map(|u| u.level)
            .unwrap_or(0)
    }

    /// +25% to all generation per Super Clicker level.
    pub fn super_multiplier(&self) -> f64 {
        1.0 + 0.25 * self.upgrade_level(UpgradeId::SuperClicker) as f64
    }

    pub fn final_points_per_click(&self) -> f64 {
        self.base_points_per_click * self.super_multiplier() * self.prestige_multiplier
    }

    pub fn final_points_per_second(&self) -> f64 {
        self.base_points_per_second * self.super_multiplier() * self.prestige_multiplier
    }

    pub fn can_afford(&self, u: &Upgrade) -> bool {
        self.points >= u.cost() as f64
    }

    pub fn can_prestige(&self) -> bool {
        self.points >= self.prestige_cost as f64
    }

    // ---- transitions ----

    /// Manual click. Always succeeds.
    pub fn click(&mut self) {
        let gained = self.final_points_per_click();
        self.points += gained;
        self.total_points_earned += gained;
        self.total_clicks += 1;
        self.check_achievements();
    }

    /// One second of automatic generation. Generates nothing until the
    /// Auto Clicker has been bought at least once.
    pub fn tick(&mut self) {
        if self.base_points_per_second > 0.0 {
            let gained = self.final_points_per_second();
            self.points += gained;
            self.total_points_earned += gained;
            self.check_achievements();
        }
    }

    /// Buy one level of `id`. Returns false (and changes nothing) when the
    /// balance does not cover the cost; insufficient points is not an error.
    pub fn purchase(&mut self, id: UpgradeId) -> bool {
        let Some(idx) = self.upgrades.iter().position(|u| u.id == id) else {
            return false;
        };
        let cost = self.upgrades[idx].cost();
        if self.points < cost as f64 {
            return false;
        }
        self.points -= cost as f64;
        self.upgrades[idx].level += 1;
        let level = self.upgrades[idx].level;
        match id {
            UpgradeId::BetterClick => self.base_points_per_click = (1 + level) as f64,
            UpgradeId::AutoClicker => self.base_points_per_second = level as f64,
            // Only contributes through super_multiplier().
            UpgradeId::SuperClicker => {}
        }
        clog(&format!(
            "Upgrade purchased: {} (level {level})",
            self.upgrades[idx].name()
        ));
        self.check_achievements();
        true
    }

    /// Soft reset: trade the prestige cost and all upgrade levels for a
    /// permanently higher multiplier. Lifetime counters and achievement
    /// unlocks survive. Returns false when unaffordable.
    pub fn prestige(&mut self) -> bool {
        if !self.can_prestige() {
            return false;
        }
        self.prestige_level += 1;
        self.prestige_multiplier = 1.0 + 0.5 * self.prestige_level as f64;
        self.points -= self.prestige_cost as f64;
        self.prestige_cost *= 2;
        for u in &mut self.upgrades {
            u.level = 0;
        }
        self.base_points_per_click = 1.0;
        self.base_points_per_second = 0.0;
        clog(&format!("Prestige! Now level {}", self.prestige_level));
        self.check_achievements();
        true
    }

    /// Hard reset back to initial values. Confirmation is the caller's
    /// responsibility; by the time this runs the player has already agreed.
    ///
    /// Note the asymmetry: total_points_earned is wiped but total_clicks
    /// and achievement unlocks are kept. See DESIGN.md.
    pub fn hard_reset(&mut self) {
        self.points = 0.0;
        self.base_points_per_click = 1.0;
        self.base_points_per_second = 0.0;
        self.prestige_level = 0;
        self.prestige_multiplier = 1.0;
        self.prestige_cost = INITIAL_PRESTIGE_COST;
        self.total_points_earned = 0.0;
        for u in &mut self.upgrades {
            u.level = 0;
        }
        clog("Hard reset completed");
    }

    /// Flip any newly-satisfied achievement to unlocked. Already-unlocked
    /// entries are never re-evaluated or cleared.
    pub fn check_achievements(&mut self) {
        for i in 0..self.achievements.len() {
            if self.achievements[i].unlocked {
                continue;
            }
            if self.achievements[i].id.is_met(self) {
                self.achievements[i].unlocked = true;
                clog(&format!(
                    "Achievement unlocked: {}",
                    self.achievements[i].id.def().name
                ));
            }
        }
    }
}

// ---------------- Reducer & Actions -----------------

#[derive(Clone, Debug)]
pub enum GameAction {
    Click,
    Tick,
    PurchaseUpgrade(UpgradeId),
    Prestige,
    /// Dispatched only after the player confirmed the reset dialog.
    HardReset,
    /// Replace state with a loaded save on startup.
    Restore(SaveGame),
}

impl Reducible for GameState {
    type Action = GameAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut new = (*self).clone();
        let changed = match action {
            GameAction::Click => {
                new.click();
                true
            }
            // A tick commits even when it generated nothing so the save and
            // display stay current.
            GameAction::Tick => {
                new.tick();
                true
            }
            GameAction::PurchaseUpgrade(id) => new.purchase(id),
            GameAction::Prestige => new.prestige(),
            GameAction::HardReset => {
                new.hard_reset();
                true
            }
            GameAction::Restore(save) => {
                save.apply(&mut new);
                true
            }
        };
        if !changed {
            return self;
        }
        new.version = new.version.wrapping_add(1);
        Rc::new(new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn state_with_points(points: f64) -> GameState {
        let mut g = GameState::new();
        g.points = points;
        g.total_points_earned = points;
        g
    }

    #[test]
    fn first_click_on_fresh_state_awards_one_point() {
        let mut g = GameState::new();
        g.click();
        assert_eq!(g.points, 1.0);
        assert_eq!(g.total_clicks, 1);
        assert_eq!(g.total_points_earned, 1.0);
    }

    #[test]
    fn click_applies_base_and_prestige_multipliers() {
        let mut g = GameState::new();
        g.upgrades[0].level = 2;
        g.base_points_per_click = 3.0;
        g.prestige_level = 2;
        g.prestige_multiplier = 2.0;
        g.click();
        assert_eq!(g.points, 6.0);
    }

    #[test]
    fn super_clicker_boosts_both_rates() {
        let mut g = state_with_points(10_000.0);
        assert!(g.purchase(UpgradeId::SuperClicker));
        assert!(g.purchase(UpgradeId::SuperClicker));
        assert_eq!(g.super_multiplier(), 1.5);
        assert_eq!(g.final_points_per_click(), 1.5);
        assert!(g.purchase(UpgradeId::AutoClicker));
        assert_eq!(g.final_points_per_second(), 1.5);
    }

    #[test]
    fn tick_without_auto_clicker_generates_nothing() {
        let mut g = state_with_points(5.0);
        g.tick();
        assert_eq!(g.points, 5.0);
        assert_eq!(g.total_clicks, 0);
    }

    #[test]
    fn tick_with_auto_clicker_generates_final_rate() {
        let mut g = state_with_points(100.0);
        assert!(g.purchase(UpgradeId::AutoClicker)); // costs 50
        let before = g.points;
        g.tick();
        assert_eq!(g.points, before + 1.0);
    }

    #[test]
    fn upgrade_cost_follows_exponential_curve() {
        let mut u = Upgrade::new(UpgradeId::BetterClick);
        assert_eq!(u.cost(), 10);
        u.level = 1;
        assert_eq!(u.cost(), 15); // floor(10 * 1.5)
        u.level = 2;
        assert_eq!(u.cost(), 22); // floor(22.5)
    }

    #[test]
    fn purchase_updates_level_cost_and_base_rate() {
        let mut g = state_with_points(100.0);
        assert!(g.purchase(UpgradeId::BetterClick));
        assert_eq!(g.points, 90.0);
        assert_eq!(g.upgrade_level(UpgradeId::BetterClick), 1);
        assert_eq!(g.base_points_per_click, 2.0);
        assert!(g.purchase(UpgradeId::BetterClick)); // costs 15 now
        assert_eq!(g.points, 75.0);
        assert_eq!(g.base_points_per_click, 3.0);
    }

    #[test]
    fn unaffordable_purchase_is_a_silent_noop() {
        let mut g = state_with_points(9.0);
        let before = g.clone();
        assert!(!g.purchase(UpgradeId::BetterClick));
        assert_eq!(g, before);
    }

    #[test]
    fn prestige_at_exact_cost_resets_progress_for_multiplier() {
        let mut g = state_with_points(1000.0);
        g.upgrades[0].level = 3;
        g.upgrades[1].level = 2;
        g.base_points_per_click = 4.0;
        g.base_points_per_second = 2.0;
        assert!(g.prestige());
        assert_eq!(g.prestige_level, 1);
        assert_eq!(g.prestige_multiplier, 1.5);
        assert_eq!(g.points, 0.0);
        assert_eq!(g.prestige_cost, 2000);
        assert!(g.upgrades.iter().all(|u| u.level == 0));
        assert_eq!(g.base_points_per_click, 1.0);
        assert_eq!(g.base_points_per_second, 0.0);
        // Lifetime counters survive a soft reset.
        assert_eq!(g.total_points_earned, 1000.0);
    }

    #[test]
    fn prestige_below_cost_changes_nothing() {
        let mut g = state_with_points(999.0);
        let before = g.clone();
        assert!(!g.prestige());
        assert_eq!(g, before);
    }

    #[test]
    fn achievement_unlock_is_permanent_across_hard_reset() {
        let mut g = state_with_points(99.5);
        g.click(); // crosses 100
        assert!(g.achievements[AchievementId::Points100 as usize].unlocked);
        g.hard_reset();
        assert_eq!(g.points, 0.0);
        assert!(g.achievements[AchievementId::Points100 as usize].unlocked);
    }

    #[test]
    fn hard_reset_keeps_total_clicks_but_wipes_total_earned() {
        let mut g = GameState::new();
        for _ in 0..5 {
            g.click();
        }
        g.hard_reset();
        assert_eq!(g.total_clicks, 5);
        assert_eq!(g.total_points_earned, 0.0);
        assert_eq!(g.prestige_level, 0);
        assert_eq!(g.prestige_cost, INITIAL_PRESTIGE_COST);
    }

    #[test]
    fn click_achievements_unlock_at_thresholds() {
        let mut g = GameState::new();
        for _ in 0..100 {
            g.click();
        }
        assert!(g.achievements[AchievementId::Clicks100 as usize].unlocked);
        assert!(!g.achievements[AchievementId::Clicks1000 as usize].unlocked);
    }

    #[test]
    fn reducer_rejects_failed_preconditions_without_committing() {
        let g = Rc::new(GameState::new());
        let v0 = g.version;
        let after = g
            .clone()
            .reduce(GameAction::PurchaseUpgrade(UpgradeId::SuperClicker));
        assert!(Rc::ptr_eq(&g, &after));
        let after = after.reduce(GameAction::Click);
        assert_eq!(after.version, v0 + 1);
    }

    // ---- property tests ----

    #[derive(Clone, Debug)]
    enum Op {
        Click,
        Tick,
        Purchase(UpgradeId),
        Prestige,
        HardReset,
    }

    fn op_strategy() -> impl Strategy<Value = Op> {
        prop_oneof![
            8 => Just(Op::Click),
            3 => Just(Op::Tick),
            3 => prop_oneof![
                Just(UpgradeId::BetterClick),
                Just(UpgradeId::AutoClicker),
                Just(UpgradeId::SuperClicker),
            ]
            .prop_map(Op::Purchase),
            1 => Just(Op::Prestige),
            1 => Just(Op::HardReset),
        ]
    }

    fn apply(g: &mut GameState, op: &Op) {
        match op {
            Op::Click => g.click(),
            Op::Tick => g.tick(),
            Op::Purchase(id) => {
                g.purchase(*id);
            }
            Op::Prestige => {
                g.prestige();
            }
            Op::HardReset => g.hard_reset(),
        }
    }

    proptest! {
        #[test]
        fn invariants_hold_under_any_operation_sequence(
            ops in proptest::collection::vec(op_strategy(), 0..200),
            seed_points in 0.0_f64..5_000.0,
        ) {
            let mut g = state_with_points(seed_points);
            let mut prev_clicks = g.total_clicks;
            let mut prev_unlocked: Vec<bool> =
                g.achievements.iter().map(|a| a.unlocked).collect();
            for op in &ops {
                apply(&mut g, op);
                prop_assert!(g.points >= 0.0);
                prop_assert_eq!(
                    g.prestige_multiplier,
                    1.0 + 0.5 * g.prestige_level as f64
                );
                // total_clicks never decreases (hard reset leaves it alone).
                prop_assert!(g.total_clicks >= prev_clicks);
                prev_clicks = g.total_clicks;
                for (a, was) in g.achievements.iter().zip(&prev_unlocked) {
                    prop_assert!(a.unlocked || !was);
                }
                prev_unlocked = g.achievements.iter().map(|a| a.unlocked).collect();
            }
        }

        #[test]
        fn upgrade_cost_is_strictly_increasing_in_level(level in 0u32..40) {
            for def in UPGRADE_DEFS {
                let lower = Upgrade { id: def.id, level };
                let higher = Upgrade { id: def.id, level: level + 1 };
                prop_assert!(higher.cost() > lower.cost());
            }
        }
    }
}
