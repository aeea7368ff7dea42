/// Whether the value has nothing in it apart from whitespaces.
#[must_use]
pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}
