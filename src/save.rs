//! Save/load for the idle clicker.
//!
//! The save record is a single JSON document in localStorage. Loading is
//! best-effort: missing fields fall back to defaults rather than rejecting
//! the whole record, upgrades and achievements are matched by id (never by
//! position), and anything unrecognized is ignored. A corrupt document is
//! treated as no save at all.

use serde::{Deserialize, Serialize};

use crate::model::{AchievementId, GameState, UpgradeId};
use crate::util::clog;

pub const STORAGE_KEY: &str = "idle_clicker_save";

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct UpgradeSave {
    pub id: UpgradeId,
    pub level: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct AchievementSave {
    pub id: AchievementId,
    pub unlocked: bool,
}

/// The persisted record. Field defaults cover older saves: `prestige_cost`
/// and `total_clicks` did not always exist, and an absent `achievements`
/// field must leave the in-memory defaults untouched.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SaveGame {
    pub points: f64,
    pub upgrades: Vec<UpgradeSave>,
    pub prestige_level: u32,
    pub prestige_multiplier: f64,
    pub prestige_cost: u64,
    pub total_points_earned: f64,
    pub total_clicks: u64,
    pub achievements: Option<Vec<AchievementSave>>,
}

impl Default for SaveGame {
    fn default() -> Self {
        Self {
            points: 0.0,
            upgrades: Vec::new(),
            prestige_level: 0,
            prestige_multiplier: 1.0,
            prestige_cost: crate::model::INITIAL_PRESTIGE_COST,
            total_points_earned: 0.0,
            total_clicks: 0,
            achievements: None,
        }
    }
}

impl SaveGame {
    /// Snapshot the persistent parts of the live state.
    pub fn capture(g: &GameState) -> Self {
        Self {
            points: g.points,
            upgrades: g
                .upgrades
                .iter()
                .map(|u| UpgradeSave {
                    id: u.id,
                    level: u.level,
                })
                .collect(),
            prestige_level: g.prestige_level,
            prestige_multiplier: g.prestige_multiplier,
            prestige_cost: g.prestige_cost,
            total_points_earned: g.total_points_earned,
            total_clicks: g.total_clicks,
            achievements: Some(
                g.achievements
                    .iter()
                    .map(|a| AchievementSave {
                        id: a.id,
                        unlocked: a.unlocked,
                    })
                    .collect(),
            ),
        }
    }

    /// Write this record over `g`. The upgrade/achievement tables in `g`
    /// keep their fixed identity set; only levels and unlock flags are
    /// copied in. Base rates and the prestige multiplier are derived
    /// values and get recomputed rather than trusted from disk.
    pub fn apply(self, g: &mut GameState) {
        g.points = self.points.max(0.0);
        for saved in &self.upgrades {
            if let Some(u) = g.upgrades.iter_mut().find(|u| u.id == saved.id) {
                u.level = saved.level;
            }
        }
        g.prestige_level = self.prestige_level;
        g.prestige_multiplier = 1.0 + 0.5 * self.prestige_level as f64;
        g.prestige_cost = self.prestige_cost;
        g.total_points_earned = self.total_points_earned;
        g.total_clicks = self.total_clicks;
        if let Some(list) = &self.achievements {
            for saved in list {
                if saved.unlocked {
                    if let Some(a) = g.achievements.iter_mut().find(|a| a.id == saved.id) {
                        a.unlocked = true;
                    }
                }
            }
        }
        g.base_points_per_click = (1 + g.upgrade_level(UpgradeId::BetterClick)) as f64;
        g.base_points_per_second = g.upgrade_level(UpgradeId::AutoClicker) as f64;
    }
}

fn storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

/// Read the save record, or None when absent, unreadable or corrupt.
pub fn load() -> Option<SaveGame> {
    let raw = storage()?.get_item(STORAGE_KEY).ok().flatten()?;
    match serde_json::from_str(&raw) {
        Ok(save) => Some(save),
        Err(e) => {
            clog(&format!("Ignoring corrupt save: {e}"));
            None
        }
    }
}

/// Fire-and-forget write; a full or unavailable store is not an error.
pub fn store(g: &GameState) {
    let Some(store) = storage() else { return };
    if let Ok(raw) = serde_json::to_string(&SaveGame::capture(g)) {
        let _ = store.set_item(STORAGE_KEY, &raw);
    }
}

/// Remove the persisted record (hard reset).
pub fn wipe() {
    if let Some(store) = storage() {
        let _ = store.remove_item(STORAGE_KEY);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capture_then_apply_restores_levels_unlocks_and_rates() {
        let mut original = GameState::new();
        original.points = 321.5;
        original.total_points_earned = 5000.0;
        original.total_clicks = 77;
        original.prestige_level = 2;
        original.prestige_multiplier = 2.0;
        original.prestige_cost = 4000;
        original.upgrades[0].level = 4;
        original.upgrades[1].level = 3;
        original.achievements[0].unlocked = true;

        let save = SaveGame::capture(&original);
        let mut restored = GameState::new();
        save.apply(&mut restored);

        assert_eq!(restored.points, 321.5);
        assert_eq!(restored.total_clicks, 77);
        assert_eq!(restored.prestige_cost, 4000);
        assert_eq!(restored.prestige_multiplier, 2.0);
        assert_eq!(restored.upgrade_level(UpgradeId::BetterClick), 4);
        // Base rates come back from levels, not from the record.
        assert_eq!(restored.base_points_per_click, 5.0);
        assert_eq!(restored.base_points_per_second, 3.0);
        assert!(restored.achievements[0].unlocked);
        assert!(!restored.achievements[1].unlocked);
    }

    #[test]
    fn missing_optional_fields_fall_back_to_defaults() {
        // An early save had no prestige_cost, total_clicks or achievements.
        let raw = r#"{
            "points": 42.0,
            "upgrades": [{"id": "AutoClicker", "level": 2}],
            "prestige_level": 1,
            "total_points_earned": 900.0
        }"#;
        let save: SaveGame = serde_json::from_str(raw).expect("parses");
        assert_eq!(save.prestige_cost, 1000);
        assert_eq!(save.total_clicks, 0);
        assert_eq!(save.achievements, None);

        let mut g = GameState::new();
        save.apply(&mut g);
        assert_eq!(g.points, 42.0);
        assert_eq!(g.prestige_multiplier, 1.5);
        assert_eq!(g.base_points_per_second, 2.0);
        // Untouched upgrade keeps its default level.
        assert_eq!(g.upgrade_level(UpgradeId::BetterClick), 0);
    }

    #[test]
    fn absent_achievements_field_preserves_in_memory_state() {
        let mut g = GameState::new();
        g.achievements[3].unlocked = true;
        let save = SaveGame {
            achievements: None,
            ..SaveGame::default()
        };
        save.apply(&mut g);
        assert!(g.achievements[3].unlocked);
    }

    #[test]
    fn saved_unlocks_never_relock_achievements() {
        let mut g = GameState::new();
        g.achievements[0].unlocked = true;
        let save = SaveGame {
            achievements: Some(vec![AchievementSave {
                id: AchievementId::Points100,
                unlocked: false,
            }]),
            ..SaveGame::default()
        };
        save.apply(&mut g);
        assert!(g.achievements[0].unlocked);
    }

    #[test]
    fn corrupt_json_is_rejected() {
        assert!(serde_json::from_str::<SaveGame>("{not json").is_err());
        assert!(serde_json::from_str::<SaveGame>(r#"{"points": "lots"}"#).is_err());
    }

    #[test]
    fn negative_saved_points_clamp_to_zero() {
        let save = SaveGame {
            points: -5.0,
            ..SaveGame::default()
        };
        let mut g = GameState::new();
        save.apply(&mut g);
        assert_eq!(g.points, 0.0);
    }
}
