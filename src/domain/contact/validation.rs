//! Field validators for submitted contacts.

use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;
use utoipa::ToSchema;

pub const NAME_REQUIRED: &str = "Name is required!";
pub const EMAIL_INVALID: &str = "Email is not valid!";
pub const PHONE_INVALID: &str = "Phone number is not valid!";
pub const NAME_DUPLICATE: &str = "Contact name already in list!";

// One dot-separated piece of the local part. Non-ASCII letters are allowed.
static EMAIL_LOCAL_PIECE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[A-Za-z0-9!#$%&'*+/=?^_`{|}~\u{00A1}-\u{D7FF}\u{F900}-\u{FDCF}\u{FDF0}-\u{FFEF}-]+$",
    )
    .expect("email local part pattern is valid")
});

static EMAIL_DOMAIN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?(?:\.[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?)*\.[A-Za-z]{2,}$",
    )
    .expect("email domain pattern is valid")
});

// Indonesian mobile numbers: +62 / 62 / 0, then 8, an operator code, then the subscriber part.
static MOBILE_PHONE_ID_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(\+?62|0)8(1[123456789]|2[1238]|3[1238]|5[12356789]|7[78]|9[56789]|8[123456789])([\s?|\d]{5,11})$",
    )
    .expect("phone pattern is valid")
});

/// A single rejected field, rendered next to the form or returned in `data.errors`.
#[derive(Serialize, Debug, Clone, PartialEq, Eq, ToSchema)]
pub struct ValidationError {
    pub field: String,
    pub message: String,
    pub value: String,
}

impl ValidationError {
    pub fn new(field: &str, message: &str, value: &str) -> Self {
        Self {
            field: field.to_string(),
            message: message.to_string(),
            value: value.to_string(),
        }
    }

    pub fn duplicate_name(name: &str) -> Self {
        Self::new("name", NAME_DUPLICATE, name)
    }
}

pub fn is_email(value: &str) -> bool {
    let Some((local, domain)) = value.rsplit_once('@') else {
        return false;
    };
    // Local part is capped at 64 octets; no leading, trailing or doubled dots.
    local.len() <= 64
        && local
            .split('.')
            .all(|piece| EMAIL_LOCAL_PIECE_RE.is_match(piece))
        && EMAIL_DOMAIN_RE.is_match(domain)
}

pub fn is_mobile_phone_id(value: &str) -> bool {
    MOBILE_PHONE_ID_RE.is_match(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_common_emails() {
        assert!(is_email("budi@example.com"));
        assert!(is_email("first.last+tag@mail.example.co.id"));
        assert!(is_email("josé@example.com"));
    }

    #[test]
    fn rejects_malformed_emails() {
        for bad in [
            "",
            "budi",
            "budi@",
            "@example.com",
            "budi@example",
            "budi@@example.com",
            "bu di@example.com",
            "a..b@example.com",
            ".a@example.com",
            "a.@example.com",
        ] {
            assert!(!is_email(bad), "{bad:?} should be rejected");
        }
    }

    #[test]
    fn accepts_indonesian_mobile_numbers() {
        assert!(is_mobile_phone_id("081234567890"));
        assert!(is_mobile_phone_id("+6281234567890"));
        assert!(is_mobile_phone_id("6285712345678"));
    }

    #[test]
    fn rejects_other_numbers() {
        for bad in ["", "12345", "0212345678", "+15551234567", "0810", "08123abc456"] {
            assert!(!is_mobile_phone_id(bad), "{bad:?} should be rejected");
        }
    }
}
