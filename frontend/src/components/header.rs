use yew::prelude::*;
use yew_router::prelude::*;

use crate::router::Route;
use crate::session::use_session;

#[function_component(Header)]
pub fn header() -> Html {
    let session = use_session();

    html! {
        <header class="header">
            <div class="container">
                <h1>{ "Gref" }</h1>
                <nav>
                    if session.is_present() {
                        <>
                            <Link<Route> to={Route::Home}>{ "Home" }</Link<Route>>
                            { " | " }
                            <Link<Route> to={Route::Profile}>{ "Profile" }</Link<Route>>
                        </>
                    } else {
                        <>
                            <Link<Route> to={Route::Login}>{ "Login" }</Link<Route>>
                            { " | " }
                            <Link<Route> to={Route::Register}>{ "Register" }</Link<Route>>
                        </>
                    }
                </nav>
            </div>
        </header>
    }
}
