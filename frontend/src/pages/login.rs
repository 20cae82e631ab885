use shared::api::LoginRequest;
use shared::models::FormMessage;
use shared::navigation;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::form_message::FormMessageView;
use crate::components::text_input::TextInput;
use crate::hooks::{use_request_lifetime, use_timer_slot, TransitionTargets};
use crate::router::Route;
use crate::services::api::AuthApi;
use crate::session::use_session;

#[function_component(Login)]
pub fn login() -> Html {
    let session = use_session();
    let navigator = use_navigator();
    let timer = use_timer_slot();
    let lifetime = use_request_lifetime();
    let email = use_state(String::new);
    let password = use_state(String::new);
    let message = use_state(|| None::<FormMessage>);
    let pending = use_state(|| false);

    let on_email = {
        let email = email.clone();
        Callback::from(move |value: String| email.set(value))
    };
    let on_password = {
        let password = password.clone();
        Callback::from(move |value: String| password.set(value))
    };

    let on_google = Callback::from(|_: MouseEvent| AuthApi::redirect_to_google_login());

    let onsubmit = {
        let email = email.clone();
        let password = password.clone();
        let message = message.clone();
        let pending = pending.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            message.set(None);
            pending.set(true);

            let request = LoginRequest::new((*email).clone(), (*password).clone());
            let token = lifetime.token();
            let pending = pending.clone();
            let targets = TransitionTargets {
                session: session.clone(),
                message: message.clone(),
                navigator: navigator.clone(),
                timer: timer.clone(),
            };

            wasm_bindgen_futures::spawn_local(async move {
                let result = AuthApi::login(&request).await;
                if !token.is_live() {
                    tracing::debug!("login view closed, dropping response");
                    return;
                }
                pending.set(false);
                targets.apply(navigation::on_login(&request.email, result));
            });
        })
    };

    html! {
        <div class="container auth-form">
            <h2>{ "Login" }</h2>
            <button type="button" class="btn btn-google" onclick={on_google}>
                { "Login with Google" }
            </button>
            <div class="divider">{ "or" }</div>
            <form {onsubmit}>
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
                    { "Login with Email" }
                </button>
            </form>
            <div class="form-footer">
                { "Don't have an account? " }
                <Link<Route> to={Route::Register}>{ "Register" }</Link<Route>>
            </div>
            <FormMessageView message={(*message).clone()} />
        </div>
    }
}
