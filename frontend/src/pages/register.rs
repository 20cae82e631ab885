use shared::api::RegisterRequest;
use shared::models::FormMessage;
use shared::navigation;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::form_message::FormMessageView;
use crate::components::text_input::TextInput;
use crate::config::AppConfig;
use crate::hooks::{use_request_lifetime, use_timer_slot, TransitionTargets};
use crate::router::Route;
use crate::services::api::AuthApi;
use crate::session::use_session;

#[function_component(Register)]
pub fn register() -> Html {
    let session = use_session();
    let navigator = use_navigator();
    let lifetime = use_request_lifetime();
    let redirect_timer = use_timer_slot();
    let full_name = use_state(String::new);
    let email = use_state(String::new);
    let password = use_state(String::new);
    let message = use_state(|| None::<FormMessage>);
    let pending = use_state(|| false);

    let on_full_name = {
        let full_name = full_name.clone();
        Callback::from(move |value: String| full_name.set(value))
    };
    let on_email = {
        let email = email.clone();
        Callback::from(move |value: String| email.set(value))
    };
    let on_password = {
        let password = password.clone();
        Callback::from(move |value: String| password.set(value))
    };

    let onsubmit = {
        let full_name = full_name.clone();
        let email = email.clone();
        let password = password.clone();
        let message = message.clone();
        let pending = pending.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            message.set(None);
            pending.set(true);

            let request = RegisterRequest::new(
                (*email).clone(),
                (*password).clone(),
                (*full_name).clone(),
            );
            let delay = AppConfig::load().register_redirect_delay;
            let token = lifetime.token();
            let pending = pending.clone();
            let targets = TransitionTargets {
                session: session.clone(),
                message: message.clone(),
                navigator: navigator.clone(),
                timer: redirect_timer.clone(),
            };

            wasm_bindgen_futures::spawn_local(async move {
                let result = AuthApi::register(&request).await;
                if !token.is_live() {
                    tracing::debug!("register view closed, dropping response");
                    return;
                }
                pending.set(false);
                targets.apply(navigation::on_register(result, delay));
            });
        })
    };

    html! {
        <div class="container auth-form">
            <h2>{ "Register" }</h2>
            <form {onsubmit}>
                <TextInput
                    placeholder="Full Name"
                    value={(*full_name).clone()}
                    on_change={on_full_name}
                />
                <TextInput
                    input_type="email"
                    placeholder="Email"
                    value={(*email).clone()}
                    on_change={on_email}
                />
                <TextInput
                    input_type="password"
                    placeholder="Password"
                    value={(*password).clone()}
                    on_change={on_password}
                />
                <button type="submit" class="btn btn-primary" disabled={*pending}>
                    { "Register" }
                </button>
            </form>
            <div class="form-footer">
                { "Already have an account? " }
                <Link<Route> to={Route::Login}>{ "Login" }</Link<Route>>
            </div>
            <FormMessageView message={(*message).clone()} />
        </div>
    }
}
