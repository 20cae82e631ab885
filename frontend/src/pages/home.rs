use shared::models::FormMessage;
use shared::navigation::{self, Guard, Page};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::hooks::{use_timer_slot, TransitionTargets};
use crate::router::Route;
use crate::services::storage;
use crate::session::use_session;

#[function_component(Home)]
pub fn home() -> Html {
    let session = use_session();
    let navigator = use_navigator();
    let timer = use_timer_slot();
    let message = use_state(|| None::<FormMessage>);

    if let Guard::Redirect(page) = navigation::guard(Page::Home, &session) {
        return html! { <Redirect<Route> to={Route::from(page)} /> };
    }
    let Some(profile) = session.get().cloned() else {
        return html! { <Redirect<Route> to={Route::Login} /> };
    };

    let on_logout = {
        let targets = TransitionTargets {
            session: session.clone(),
            message,
            navigator,
            timer: timer.clone(),
        };
        Callback::from(move |_: MouseEvent| {
            targets.apply(navigation::on_logout());
            storage::clear_legacy_auth_keys();
        })
    };

    html! {
        <div class="container">
            <h2>{ "Welcome to Gref" }</h2>
            <div>
                <h3>{ profile.name.clone() }</h3>
                <p>{ profile.email.clone() }</p>
                <button class="btn btn-primary" onclick={on_logout}>{ "Logout" }</button>
            </div>
        </div>
    }
}
