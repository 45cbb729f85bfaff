//! Mail and phone format grammars.

use regex::Regex;
use std::sync::OnceLock;

const MAIL_PATTERN: &str = r#"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$"#;

// `\d` is Unicode-aware in `regex`; phones are ASCII digits only.
const PHONE_PATTERN: &str = r"^[0-9]{10}$";

static MAIL_RE: OnceLock<Regex> = OnceLock::new();
static PHONE_RE: OnceLock<Regex> = OnceLock::new();

fn mail_regex() -> &'static Regex {
    MAIL_RE.get_or_init(|| {
        Regex::new(MAIL_PATTERN)
            .unwrap_or_else(|error| panic!("mail regex failed to compile: {error}"))
    })
}

fn phone_regex() -> &'static Regex {
    PHONE_RE.get_or_init(|| {
        Regex::new(PHONE_PATTERN)
            .unwrap_or_else(|error| panic!("phone regex failed to compile: {error}"))
    })
}

/// Return true if `mail` is a `local@domain(.label)*` address.
pub fn is_valid_mail(mail: &str) -> bool {
    mail_regex().is_match(mail)
}

/// Return true if `phone` is exactly ten ASCII digits.
pub fn is_valid_phone(phone: &str) -> bool {
    phone_regex().is_match(phone)
}
