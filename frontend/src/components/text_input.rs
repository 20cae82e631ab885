use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct TextInputProps {
    #[prop_or(AttrValue::Static("text"))]
    pub input_type: AttrValue,
    pub placeholder: AttrValue,
    pub value: AttrValue,
    pub on_change: Callback<String>,
}

/// Controlled, required input bound to a `String` in the parent's state.
#[function_component(TextInput)]
pub fn text_input(props: &TextInputProps) -> Html {
    let oninput = {
        let on_change = props.on_change.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_change.emit(input.value());
        })
    };

    html! {
        <input
            type={props.input_type.clone()}
            placeholder={props.placeholder.clone()}
            value={props.value.clone()}
            {oninput}
            required=true
        />
    }
}
