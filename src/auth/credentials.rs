use subtle::ConstantTimeEq;

use crate::config::AdminCredentials;

/// Exact match against the configured admin account.
///
/// This is a plain shared-secret comparison with no hashing, lockout or
/// throttling; it is only as strong as the configured password.
pub fn verify(admin: &AdminCredentials, username: &str, password: &str) -> bool {
    let user_ok = username.as_bytes().ct_eq(admin.username.as_bytes());
    let pass_ok = password.as_bytes().ct_eq(admin.password.as_bytes());
    (user_ok & pass_ok).into()
}
