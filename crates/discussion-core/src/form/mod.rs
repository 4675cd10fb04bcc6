//! Discussion category forms: decoding, question mapping and body assembly.

pub mod compose;
pub mod decode;
pub mod question;

pub use compose::{compose_body, push_section};
pub use decode::decode_template;
pub use question::{category_question, field_prompt, title_prompt};
