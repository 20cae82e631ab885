use std::cell::RefCell;
use std::rc::Rc;

use gloo::timers::callback::Timeout;
use shared::lifetime::RequestLifetime;
use shared::models::FormMessage;
use shared::navigation::Transition;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::router::Route;
use crate::session::SessionHandle;

/// A request lifetime that ends when the calling component unmounts.
#[hook]
pub fn use_request_lifetime() -> RequestLifetime {
    let lifetime = use_memo((), |_| RequestLifetime::new());

    {
        let lifetime = (*lifetime).clone();
        use_effect_with((), move |_| move || lifetime.end());
    }

    (*lifetime).clone()
}

/// Pending delayed navigation. Dropping a `Timeout` cancels it, so the slot
/// empties itself when the component goes away.
pub type TimerSlot = Rc<RefCell<Option<Timeout>>>;

#[hook]
pub fn use_timer_slot() -> TimerSlot {
    use_mut_ref(|| None::<Timeout>)
}

/// Everything a page needs to carry out a [`Transition`].
pub struct TransitionTargets {
    pub session: SessionHandle,
    pub message: UseStateHandle<Option<FormMessage>>,
    pub navigator: Option<Navigator>,
    pub timer: TimerSlot,
}

impl TransitionTargets {
    pub fn apply(&self, transition: Transition) {
        if let Some(action) = transition.session {
            self.session.dispatch(action);
        }
        if let Some(message) = transition.message {
            self.message.set(Some(message));
        }

        let Some(navigate) = transition.navigate else {
            return;
        };
        let Some(navigator) = self.navigator.clone() else {
            tracing::warn!("no router in scope, cannot navigate");
            return;
        };

        let route = Route::from(navigate.page());
        match navigate.delay() {
            Some(delay) => {
                let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
                let timeout = Timeout::new(millis, move || navigator.push(&route));
                *self.timer.borrow_mut() = Some(timeout);
            }
            None => navigator.push(&route),
        }
    }
}
