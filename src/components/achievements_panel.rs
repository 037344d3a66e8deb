use yew::prelude::*;

use crate::model::GameState;

#[derive(Properties, PartialEq, Clone)]
pub struct AchievementsPanelProps {
    pub game: UseReducerHandle<GameState>,
}

#[function_component(AchievementsPanel)]
pub fn achievements_panel(props: &AchievementsPanelProps) -> Html {
    let unlocked_count = props
        .game
        .achievements
        .iter()
        .filter(|a| a.unlocked)
        .count();
    html! {
        <div style="background:rgba(22,27,34,0.9); border:1px solid #30363d; border-radius:8px; padding:10px 14px; font-size:13px;">
            <div style="font-weight:600; margin-bottom:6px;">
                { format!("Achievements ({}/{})", unlocked_count, props.game.achievements.len()) }
            </div>
            <ul id="achievementsList" style="list-style:none; margin:0; padding:0; display:flex; flex-direction:column; gap:4px;">
                { for props.game.achievements.iter().map(|a| {
                    let def = a.id.def();
                    let style = if a.unlocked {
                        "color:#3fb950; font-weight:700;"
                    } else {
                        "color:#8b949e;"
                    };
                    html! {
                        <li style={style}>{ format!("{} - {}", def.name, def.desc) }</li>
                    }
                }) }
            </ul>
        </div>
    }
}
