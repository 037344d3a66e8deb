pub mod achievements_panel;
pub mod app;
pub mod clicker_panel;
pub mod prestige_panel;
pub mod stats_panel;
pub mod upgrades_panel;
