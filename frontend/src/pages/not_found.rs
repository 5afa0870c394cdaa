use yew::prelude::*;
use yew_router::prelude::*;

use crate::app::Route;
use crate::theme::use_theme;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    let theme = use_theme();
    html! {
        <div style={format!(
            "min-height: 100vh; display: flex; flex-direction: column; align-items: center; justify-content: center; gap: {};",
            theme.space(4),
        )}>
            <h1 style={format!("font-size: {}; animation: float 3s ease-in-out infinite;", theme.typography.font_size.xl6)}>
                {"404"}
            </h1>
            <p style={format!("color: {};", theme.colors.text.secondary)}>{"This page does not exist."}</p>
            <Link<Route> to={Route::Home}>{"Back to home"}</Link<Route>>
        </div>
    }
}
