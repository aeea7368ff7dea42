use once_cell::sync::Lazy;
use regex::Regex;

pub const USERNAME_MAX: usize = 30;
static USERNAME_REGEX: Lazy<Regex> = Lazy::new(|| {
    #[allow(clippy::expect_used)]
    Regex::new(r"^[A-Za-z0-9_][A-Za-z0-9\.\-_]*$").expect("compile username regex")
});

pub const PASSWORD_MAX: usize = 128;

/// Usernames are used as the display name inside issued tokens,
/// so they have to be printable and reasonably short.
pub fn is_valid_username(name: &str) -> bool {
    USERNAME_REGEX.is_match(name) && name.len() <= USERNAME_MAX
}
