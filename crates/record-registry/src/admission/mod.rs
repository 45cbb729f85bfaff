//! Admission of candidate records into the store.
//!
//! A candidate runs through [`CHECKS`] in order and the first rejection
//! wins. The order is observable by clients:
//! 1. phone uniqueness
//! 2. mail uniqueness
//! 3. mail format
//! 4. phone format
//! 5. required fields (`user`, `phone`, `mail`, `password`)
//!
//! Uniqueness runs before format, and format before presence, so an
//! empty candidate is reported as an invalid mail rather than a missing
//! field.

mod format;

pub use format::{is_valid_mail, is_valid_phone};

use crate::error::{Field, Rejection};
use crate::store::{Record, RecordStore};
use tracing::{debug, info};

/// Outcome of a single check or of a full evaluation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Admit,
    Reject(Rejection),
}

/// A named admission predicate.
pub struct Check {
    pub name: &'static str,
    pub run: fn(&Record, &RecordStore) -> Verdict,
}

/// Admission checks in evaluation order.
pub const CHECKS: &[Check] = &[
    Check {
        name: "phone_unique",
        run: phone_unique,
    },
    Check {
        name: "mail_unique",
        run: mail_unique,
    },
    Check {
        name: "mail_format",
        run: mail_format,
    },
    Check {
        name: "phone_format",
        run: phone_format,
    },
    Check {
        name: "required_fields",
        run: required_fields,
    },
];

fn reject_if(failed: bool, rejection: Rejection) -> Verdict {
    if failed {
        Verdict::Reject(rejection)
    } else {
        Verdict::Admit
    }
}

fn phone_unique(candidate: &Record, store: &RecordStore) -> Verdict {
    reject_if(
        store.find_by_phone(&candidate.phone).is_some(),
        Rejection::DuplicatePhone,
    )
}

fn mail_unique(candidate: &Record, store: &RecordStore) -> Verdict {
    reject_if(
        store.find_by_mail(&candidate.mail).is_some(),
        Rejection::DuplicateMail,
    )
}

fn mail_format(candidate: &Record, _store: &RecordStore) -> Verdict {
    reject_if(!is_valid_mail(&candidate.mail), Rejection::InvalidMailFormat)
}

fn phone_format(candidate: &Record, _store: &RecordStore) -> Verdict {
    reject_if(!is_valid_phone(&candidate.phone), Rejection::InvalidPhoneFormat)
}

fn required_fields(candidate: &Record, _store: &RecordStore) -> Verdict {
    let fields = [
        (Field::User, &candidate.user),
        (Field::Phone, &candidate.phone),
        (Field::Mail, &candidate.mail),
        (Field::Password, &candidate.password),
    ];

    fields
        .into_iter()
        .find(|(_, value)| value.is_empty())
        .map_or(Verdict::Admit, |(field, _)| {
            Verdict::Reject(Rejection::MissingField(field))
        })
}

/// Evaluate a candidate against the store without modifying it.
pub fn evaluate(candidate: &Record, store: &RecordStore) -> Verdict {
    for check in CHECKS {
        if let Verdict::Reject(rejection) = (check.run)(candidate, store) {
            debug!(check = check.name, reason = %rejection, "Admission check failed");
            return Verdict::Reject(rejection);
        }
    }
    Verdict::Admit
}

/// Admit a candidate: evaluate it and, if every check passes, append it.
///
/// Returns the stored record verbatim. On rejection the store is left
/// untouched.
pub fn admit(candidate: Record, store: &mut RecordStore) -> Result<Record, Rejection> {
    match evaluate(&candidate, store) {
        Verdict::Reject(rejection) => Err(rejection),
        Verdict::Admit => {
            store.append(candidate.clone());
            info!(
                phone = %candidate.phone,
                mail = %candidate.mail,
                total = store.count(),
                "Record admitted"
            );
            Ok(candidate)
        }
    }
}
