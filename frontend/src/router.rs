use shared::navigation::Page;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::pages::{home::Home, login::Login, profile::Profile, register::Register};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/login")]
    Login,
    #[at("/register")]
    Register,
    #[at("/profile")]
    Profile,
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl From<Page> for Route {
    fn from(page: Page) -> Self {
        match page {
            Page::Home => Route::Home,
            Page::Login => Route::Login,
            Page::Register => Route::Register,
            Page::Profile => Route::Profile,
        }
    }
}

pub fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => html! { <Home /> },
        Route::Login => html! { <Login /> },
        Route::Register => html! { <Register /> },
        Route::Profile => html! { <Profile /> },
        Route::NotFound => html! { <Redirect<Route> to={Route::Home} /> },
    }
}
