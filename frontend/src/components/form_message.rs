use shared::models::FormMessage;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct FormMessageViewProps {
    pub message: Option<FormMessage>,
}

/// Red for errors, green for confirmations.
#[function_component(FormMessageView)]
pub fn form_message_view(props: &FormMessageViewProps) -> Html {
    let Some(message) = &props.message else {
        return html! {};
    };

    let (class, color) = if message.is_error() {
        ("form-message error", "red")
    } else {
        ("form-message success", "green")
    };

    html! {
        <div class={class} style={format!("color: {}; margin-top: 12px", color)}>
            { message.text() }
        </div>
    }
}
