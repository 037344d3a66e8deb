use yew::prelude::*;

use crate::util::format_points;

#[derive(Properties, PartialEq, Clone)]
pub struct StatsPanelProps {
    pub points: f64,
    pub total_points_earned: f64,
    pub total_clicks: u64,
}

#[function_component]
pub fn StatsPanel(props: &StatsPanelProps) -> Html {
    let row_style = "display:flex; align-items:center; gap:8px;";
    let label_style = "flex:1; font-weight:500;";
    let value_style =
        "min-width:90px; text-align:right; font-variant-numeric:tabular-nums; font-weight:600;";
    html! {
        <div style="background:rgba(22,27,34,0.9); border:1px solid #30363d; border-radius:8px; padding:10px 14px; display:flex; flex-direction:column; gap:10px; font-size:14px;">
            <div style={row_style}>
                <span style={format!("{} color:#d4af37;", label_style)}>{"Points"}</span>
                <span id="points" style={format!("{} color:#d4af37;", value_style)}>{ format_points(props.points) }</span>
            </div>
            <div style={row_style}>
                <span style={label_style}>{"Lifetime earned"}</span>
                <span style={value_style}>{ format_points(props.total_points_earned) }</span>
            </div>
            <div style={row_style}>
                <span style={label_style}>{"Total clicks"}</span>
                <span style={value_style}>{ props.total_clicks }</span>
            </div>
        </div>
    }
}
