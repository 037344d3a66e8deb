use yew::prelude::*;

use crate::model::{GameState, UpgradeId};

#[derive(Properties, PartialEq, Clone)]
pub struct UpgradesPanelProps {
    pub game: UseReducerHandle<GameState>,
    pub purchase: Callback<UpgradeId>,
}

/// Per-upgrade description including the live computed rates.
fn describe(g: &GameState, id: UpgradeId) -> String {
    match id {
        UpgradeId::BetterClick => format!(
            "Adds 1 point per click (base: {}, final: {:.2} per click)",
            g.base_points_per_click,
            g.final_points_per_click()
        ),
        UpgradeId::AutoClicker => format!(
            "Adds 1 point per second (base: {}, final: {:.2} per second)",
            g.base_points_per_second,
            g.final_points_per_second()
        ),
        UpgradeId::SuperClicker => format!(
            "Adds 25% to all point generation per level (currently: +{}% bonus)",
            g.upgrade_level(UpgradeId::SuperClicker) * 25
        ),
    }
}

#[function_component(UpgradesPanel)]
pub fn upgrades_panel(props: &UpgradesPanelProps) -> Html {
    let g = &*props.game;
    html! {
        <div id="upgradesContainer" style="background:rgba(22,27,34,0.9); border:1px solid #30363d; border-radius:8px; padding:10px 14px; display:flex; flex-direction:column; gap:8px;">
            <div style="font-weight:600;">{"Upgrades"}</div>
            { for g.upgrades.iter().map(|u| {
                let cost = u.cost();
                let affordable = g.can_afford(u);
                let onclick = {
                    let purchase = props.purchase.clone();
                    let id = u.id;
                    Callback::from(move |_: MouseEvent| purchase.emit(id))
                };
                html! {
                    <div style="display:flex; align-items:center; gap:10px; border:1px solid #30363d; border-radius:8px; padding:8px 10px;">
                        <div style="flex:1; display:flex; flex-direction:column; gap:2px;">
                            <div style="font-weight:600; font-size:14px;">
                                { format!("{} (Level {})", u.name(), u.level) }
                            </div>
                            <div style="font-size:12px; opacity:0.8;">
                                { describe(g, u.id) }
                            </div>
                        </div>
                        <button
                            disabled={!affordable}
                            {onclick}
                            style="min-width:110px; height:30px; border-radius:8px; border:1px solid #30363d; background:#1c2128; color:#fff;"
                        >
                            { format!("Buy ({} points)", cost) }
                        </button>
                    </div>
                }
            }) }
        </div>
    }
}
