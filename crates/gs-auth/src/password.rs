use gs_core::User;

/// Whether `supplied` grants password login to `user`.
///
/// Externally authenticated accounts store a sentinel instead of a
/// password; they never pass this check, not even when the supplied string
/// equals the sentinel itself.
pub fn password_matches(user: &User, supplied: &str) -> bool {
    !user.is_externally_authenticated() && user.password == supplied
}
