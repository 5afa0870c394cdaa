use log::info;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::pages::{
    account_deletion::AccountDeletion, catalog::Catalog, faq::Faq, home::Home, not_found::NotFound,
    privacy::PrivacyPolicy,
};
use crate::theme::ThemeProvider;

#[derive(Clone, Debug, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/components")]
    Catalog,
    #[at("/faq")]
    Faq,
    #[at("/privacy")]
    Privacy,
    #[at("/account-deletion")]
    AccountDeletion,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        }
        Route::Catalog => {
            info!("Rendering Components page");
            html! { <Catalog /> }
        }
        Route::Faq => {
            info!("Rendering FAQ page");
            html! { <Faq /> }
        }
        Route::Privacy => {
            info!("Rendering Privacy page");
            html! { <PrivacyPolicy /> }
        }
        Route::AccountDeletion => {
            info!("Rendering AccountDeletion page");
            html! { <AccountDeletion /> }
        }
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        }
    }
}

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <ThemeProvider>
            <BrowserRouter>
                <Switch<Route> render={switch} />
            </BrowserRouter>
        </ThemeProvider>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn routes_resolve() {
        assert_eq!(Route::recognize("/"), Some(Route::Home));
        assert_eq!(Route::recognize("/components"), Some(Route::Catalog));
        assert_eq!(Route::recognize("/faq"), Some(Route::Faq));
        assert_eq!(Route::recognize("/privacy"), Some(Route::Privacy));
        assert_eq!(Route::recognize("/account-deletion"), Some(Route::AccountDeletion));
        assert_eq!(Route::recognize("/missing"), Some(Route::NotFound));
        assert_eq!(Route::Catalog.to_path(), "/components");
    }
}
