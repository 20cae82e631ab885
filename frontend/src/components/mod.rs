pub mod form_message;
pub mod header;
pub mod text_input;
