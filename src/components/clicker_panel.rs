use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct ClickerPanelProps {
    pub points_per_click: f64,
    pub points_per_second: f64,
    pub on_click: Callback<()>,
}

/// The big button. Rates shown are the final (super + prestige) values.
#[function_component(ClickerPanel)]
pub fn clicker_panel(props: &ClickerPanelProps) -> Html {
    let onclick = {
        let cb = props.on_click.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };
    html! {
        <div style="background:rgba(22,27,34,0.9); border:1px solid #30363d; border-radius:8px; padding:16px; display:flex; flex-direction:column; gap:10px; align-items:center;">
            <button
                id="clickButton"
                {onclick}
                style="width:160px; height:160px; border-radius:50%; font-size:20px; font-weight:700; background:#238636; border:2px solid #2ea043; color:#fff; cursor:pointer;"
            >
                { "Click!" }
            </button>
            <div style="font-size:13px; opacity:0.85;">
                { format!("{:.2} per click", props.points_per_click) }
            </div>
            <div style="font-size:13px; opacity:0.85;">
                { format!("{:.2} per second", props.points_per_second) }
            </div>
        </div>
    }
}
