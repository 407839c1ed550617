/// The only code that authorizes a launch
pub const AUTHORIZATION_CODE: &str = "00000000";

/// Maximum number of characters the code field accepts
pub const AUTHORIZATION_CODE_LEN: usize = 8;

/// Checks an entered code against [`AUTHORIZATION_CODE`] one character at a time.
pub fn verify(entered: &str) -> bool {
    if entered.chars().count() != AUTHORIZATION_CODE.len() {
        return false;
    }

    entered
        .chars()
        .zip(AUTHORIZATION_CODE.chars())
        .all(|(given, expected)| given == expected)
}
