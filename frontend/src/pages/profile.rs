use shared::models::{FormMessage, Profile as UserProfile};
use shared::navigation;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::form_message::FormMessageView;
use crate::hooks::{use_request_lifetime, use_timer_slot, TransitionTargets};
use crate::services::api::AuthApi;
use crate::session::use_session;

#[function_component(Profile)]
pub fn profile() -> Html {
    let session = use_session();
    let navigator = use_navigator();
    let timer = use_timer_slot();
    let lifetime = use_request_lifetime();
    let profile = use_state(|| None::<UserProfile>);
    let loading = use_state(|| true);
    let message = use_state(|| None::<FormMessage>);

    {
        let profile = profile.clone();
        let loading = loading.clone();
        let targets = TransitionTargets {
            session,
            message: message.clone(),
            navigator,
            timer: timer.clone(),
        };

        use_effect_with((), move |_| {
            let token = lifetime.token();
            wasm_bindgen_futures::spawn_local(async move {
                let result = AuthApi::fetch_profile().await;
                if !token.is_live() {
                    tracing::debug!("profile view closed, dropping response");
                    return;
                }
                if let Err(e) = &result {
                    tracing::info!("profile fetch failed: {}", e);
                }
                profile.set(result.as_ref().ok().cloned());
                loading.set(false);
                targets.apply(navigation::on_profile(&result));
            });
            || ()
        });
    }

    if *loading {
        return html! {
            <div class="container">
                <div class="loading">{ "Loading..." }</div>
            </div>
        };
    }

    if message.is_some() {
        return html! {
            <div class="container">
                <FormMessageView message={(*message).clone()} />
            </div>
        };
    }

    let Some(user) = (*profile).clone() else {
        return html! {};
    };

    html! {
        <div class="container">
            <h2>{ "Profile" }</h2>
            if let Some(picture) = user.picture.clone() {
                <img class="avatar" src={picture} alt={user.display_name().to_string()} />
            }
            <p><b>{ "Name:" }</b>{ " " }{ user.display_name() }</p>
            <p><b>{ "Email:" }</b>{ " " }{ user.email.clone() }</p>
        </div>
    }
}
