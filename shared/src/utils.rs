//! # Shared Utility Functions
//!
//! Helpers used by the client and the identity service alike.
//!
//! ## Identity Masking
//!
//! Phone numbers and emails are personal data; logs and confirmation toasts
//! only ever show a masked form:
//! - [`mask_identity`] - pick the right masking for a phone number or email
//! - [`mask_middle`] - keep the first N and last M characters, star the rest
//!
//! ## Usage
//!
//! ```rust
//! use shared::utils::mask_identity;
//!
//! assert_eq!(mask_identity("13800138000"), "138****8000");
//! assert_eq!(mask_identity("alice@example.com"), "a***e@example.com");
//! ```

/// Keep the first `prefix_len` and last `suffix_len` characters and replace the
/// middle with `*`.
///
/// If the value is not longer than `prefix_len + suffix_len` it is returned as-is.
///
/// # Examples
///
/// ```rust
/// use shared::utils::mask_middle;
///
/// assert_eq!(mask_middle("13800138000", 3, 4), "138****8000");
/// assert_eq!(mask_middle("short", 4, 4), "short");
/// ```
pub fn mask_middle(value: &str, prefix_len: usize, suffix_len: usize) -> String {
    let chars: Vec<char> = value.chars().collect();
    let len = chars.len();

    if len <= prefix_len + suffix_len {
        return value.to_string();
    }

    let prefix: String = chars[..prefix_len].iter().collect();
    let suffix: String = chars[len - suffix_len..].iter().collect();
    let hidden = "*".repeat(len - prefix_len - suffix_len);

    format!("{}{}{}", prefix, hidden, suffix)
}

/// Mask a phone number or email for display.
///
/// Emails keep the domain and the first/last character of the local part;
/// anything else is treated as a phone number and keeps 3 leading and
/// 4 trailing digits.
pub fn mask_identity(identity: &str) -> String {
    match identity.split_once('@') {
        Some((local, domain)) => format!("{}@{}", mask_middle(local, 1, 1), domain),
        None => mask_middle(identity, 3, 4),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_middle() {
        assert_eq!(mask_middle("13800138000", 3, 4), "138****8000");
        assert_eq!(mask_middle("abcdefgh", 2, 2), "ab****gh");
    }

    #[test]
    fn test_mask_middle_short() {
        assert_eq!(mask_middle("short", 4, 4), "short");
        assert_eq!(mask_middle("", 3, 4), "");
    }

    #[test]
    fn test_mask_identity_email_keeps_domain() {
        assert_eq!(mask_identity("alice@example.com"), "a***e@example.com");
        assert_eq!(mask_identity("ab@example.com"), "ab@example.com");
    }

    #[test]
    fn test_mask_identity_phone() {
        assert_eq!(mask_identity("13800138000"), "138****8000");
    }
}
