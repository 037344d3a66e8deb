use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use yew::prelude::*;

use super::{
    achievements_panel::AchievementsPanel, clicker_panel::ClickerPanel,
    prestige_panel::PrestigePanel, stats_panel::StatsPanel, upgrades_panel::UpgradesPanel,
};
use crate::model::{GameAction, GameState, UpgradeId};
use crate::save;
use crate::util::clog;

#[function_component(App)]
pub fn app() -> Html {
    let game = use_reducer(GameState::new);
    let show_reset_confirm = use_state(|| false);

    // Load persisted state once on mount.
    {
        let game = game.clone();
        use_effect_with((), move |_| {
            match save::load() {
                Some(saved) => {
                    game.dispatch(GameAction::Restore(saved));
                    clog("Save loaded");
                }
                None => clog("No saved game found, starting fresh"),
            }
            || ()
        });
    }

    // Persist after every committed transition. Version 0 is the pristine
    // initial state; writing it would race the load above.
    {
        let game = game.clone();
        use_effect_with(game.version, move |_| {
            if game.version > 0 {
                save::store(&game);
            }
            || ()
        });
    }

    // Automatic generation: one Tick per second until unmount.
    {
        let game = game.clone();
        use_effect_with((), move |_| {
            let window = web_sys::window().expect("no global `window` exists");
            let game2 = game.clone();
            let tick = Closure::wrap(Box::new(move || {
                game2.dispatch(GameAction::Tick);
            }) as Box<dyn FnMut()>);
            let id = window
                .set_interval_with_callback_and_timeout_and_arguments_0(
                    tick.as_ref().unchecked_ref(),
                    1000,
                )
                .unwrap();
            move || {
                window.clear_interval_with_handle(id);
                drop(tick);
            }
        });
    }

    let on_click = {
        let game = game.clone();
        Callback::from(move |_: ()| game.dispatch(GameAction::Click))
    };
    let purchase = {
        let game = game.clone();
        Callback::from(move |id: UpgradeId| game.dispatch(GameAction::PurchaseUpgrade(id)))
    };
    let on_prestige = {
        let game = game.clone();
        Callback::from(move |_: ()| game.dispatch(GameAction::Prestige))
    };

    // Hard reset is gated behind the confirmation modal; cancelling leaves
    // the state and the save untouched.
    let open_reset = {
        let show_reset_confirm = show_reset_confirm.clone();
        Callback::from(move |_: MouseEvent| show_reset_confirm.set(true))
    };
    let cancel_reset = {
        let show_reset_confirm = show_reset_confirm.clone();
        Callback::from(move |_: MouseEvent| show_reset_confirm.set(false))
    };
    let confirm_reset = {
        let show_reset_confirm = show_reset_confirm.clone();
        let game = game.clone();
        Callback::from(move |_: MouseEvent| {
            save::wipe();
            game.dispatch(GameAction::HardReset);
            show_reset_confirm.set(false);
        })
    };

    let reset_modal = if *show_reset_confirm {
        html! {
            <div style="position:fixed; inset:0; background:rgba(0,0,0,0.55); backdrop-filter:blur(2px); display:flex; align-items:center; justify-content:center; z-index:200;">
                <div style="width:360px; max-width:90%; background:#161b22; border:1px solid #30363d; border-radius:12px; padding:18px 20px 16px 20px; display:flex; flex-direction:column; gap:14px;">
                    <div style="font-size:16px; font-weight:600;">{"Reset Game"}</div>
                    <div style="font-size:13px; line-height:1.4; opacity:0.85;">
                        {"Are you sure you want to reset the game? This will delete all progress, including prestige levels."}
                    </div>
                    <div style="display:flex; gap:10px; justify-content:flex-end;">
                        <button onclick={cancel_reset} style="min-width:90px;">{"Cancel"}</button>
                        <button onclick={confirm_reset} style="min-width:110px; background:#b62324; border:1px solid #da3633; color:#fff;">{"Confirm Reset"}</button>
                    </div>
                </div>
            </div>
        }
    } else {
        html! {}
    };

    html! {
        <div style="min-height:100vh; background:#0d1117; color:#c9d1d9; font-family:system-ui, sans-serif;">
            <div id="top-bar" style="display:flex; align-items:center; justify-content:space-between; padding:12px 16px; border-bottom:1px solid #30363d;">
                <div style="font-size:18px; font-weight:700;">{"Idle Clicker"}</div>
                <button id="resetButton" onclick={open_reset} style="background:#3b1d1d; border:1px solid #5d2d2d; color:#c9d1d9; border-radius:8px; height:30px; padding:0 12px;">
                    {"Reset Game"}
                </button>
            </div>
            <div style="display:grid; grid-template-columns:minmax(220px, 300px) minmax(260px, 1fr) minmax(240px, 340px); gap:14px; padding:14px; align-items:start;">
                <div style="display:flex; flex-direction:column; gap:14px;">
                    <StatsPanel
                        points={game.points}
                        total_points_earned={game.total_points_earned}
                        total_clicks={game.total_clicks}
                    />
                    <PrestigePanel
                        prestige_level={game.prestige_level}
                        prestige_multiplier={game.prestige_multiplier}
                        prestige_cost={game.prestige_cost}
                        can_prestige={game.can_prestige()}
                        on_prestige={on_prestige}
                    />
                </div>
                <ClickerPanel
                    points_per_click={game.final_points_per_click()}
                    points_per_second={game.final_points_per_second()}
                    on_click={on_click}
                />
                <div style="display:flex; flex-direction:column; gap:14px;">
                    <UpgradesPanel game={game.clone()} purchase={purchase} />
                    <AchievementsPanel game={game.clone()} />
                </div>
            </div>
            { reset_modal }
        </div>
    }
}
