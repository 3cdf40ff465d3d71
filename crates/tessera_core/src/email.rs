//! Email address shape check.

/// Whether `email` has exactly one `@` with text on both sides and no
/// whitespace. Surrounding whitespace is ignored.
///
/// # Examples
///
/// ```
/// use tessera_core::is_plausible_email;
///
/// assert!(is_plausible_email("ana@example.com"));
/// assert!(is_plausible_email(" ana@example.com "));
/// assert!(!is_plausible_email("ana@"));
/// assert!(!is_plausible_email("a@b@c"));
/// assert!(!is_plausible_email("an a@example.com"));
/// ```
pub fn is_plausible_email(email: &str) -> bool {
    let email = email.trim();
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.is_empty()
                && !domain.contains('@')
                && !email.contains(char::is_whitespace)
        }
        None => false,
    }
}
