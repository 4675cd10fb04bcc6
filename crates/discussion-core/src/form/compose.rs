//! Assembly of the discussion body from answered fields.
//!
//! Each field becomes a `### <label>` section. The layout is what GitHub
//! renders for discussions created through the web form, so it must not vary.

/// Append one answered field to `body`.
pub fn push_section(body: &mut String, label: &str, answer: &str) {
    body.push_str("### ");
    body.push_str(label);
    body.push_str("\n\n");
    body.push_str(answer);
    body.push_str("\n\n");
}

/// Compose a whole body from `(label, answer)` pairs, in the given order.
pub fn compose_body<'a, I>(sections: I) -> String
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    let mut body = String::new();
    for (label, answer) in sections {
        push_section(&mut body, label, answer);
    }
    body
}
