use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct PrestigePanelProps {
    pub prestige_level: u32,
    pub prestige_multiplier: f64,
    pub prestige_cost: u64,
    pub can_prestige: bool,
    pub on_prestige: Callback<()>,
}

#[function_component(PrestigePanel)]
pub fn prestige_panel(props: &PrestigePanelProps) -> Html {
    let onclick = {
        let cb = props.on_prestige.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };
    html! {
        <div style="background:rgba(22,27,34,0.9); border:1px solid #30363d; border-radius:8px; padding:10px 14px; display:flex; flex-direction:column; gap:8px; font-size:14px;">
            <div style="font-weight:600;">{"Prestige"}</div>
            <div style="display:flex; justify-content:space-between;">
                <span>{"Level"}</span>
                <span id="prestigeLevel" style="font-weight:600;">{ props.prestige_level }</span>
            </div>
            <div style="display:flex; justify-content:space-between;">
                <span>{"Multiplier"}</span>
                <span id="prestigeMultiplier" style="font-weight:600;">{ format!("x{:.1}", props.prestige_multiplier) }</span>
            </div>
            <button
                id="prestigeButton"
                disabled={!props.can_prestige}
                {onclick}
                style="margin-top:4px; height:32px; border-radius:8px; border:1px solid #8957e5; background:#6e40c9; color:#fff;"
            >
                { format!("Prestige ({} points)", props.prestige_cost) }
            </button>
            <div style="font-size:11px; opacity:0.7;">
                {"Resets points and upgrades. +0.5x permanent multiplier per level."}
            </div>
        </div>
    }
}
