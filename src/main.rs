mod components;
mod model;
mod save;
mod util;

use components::app::App;

fn main() {
    yew::Renderer::<App>::new().render();
}
