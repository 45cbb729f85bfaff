//! Record store: the ordered collection of admitted contact records.

mod memory;
mod seed;

pub use memory::RecordStore;
pub use seed::{default_seed, load_seed};

use serde::{Deserialize, Serialize};

/// A registered contact record.
///
/// Missing fields on the wire decode as empty strings so that the
/// admission checks, not the JSON codec, decide how to reject them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Display identifier
    #[serde(default)]
    pub user: String,

    /// Contact number, ten ASCII digits
    #[serde(default)]
    pub phone: String,

    /// Contact mail address
    #[serde(default)]
    pub mail: String,

    /// Credential, stored as received
    #[serde(default)]
    pub password: String,
}

impl Record {
    /// Build a record from its four fields.
    pub fn new(
        user: impl Into<String>,
        phone: impl Into<String>,
        mail: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            user: user.into(),
            phone: phone.into(),
            mail: mail.into(),
            password: password.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_missing_fields_decode_as_empty() {
        let record: Record = serde_json::from_str(r#"{"user":"ana"}"#).unwrap();

        assert_eq!(record.user, "ana");
        assert_eq!(record.phone, "");
        assert_eq!(record.mail, "");
        assert_eq!(record.password, "");
    }

    #[test]
    fn test_record_serializes_wire_field_names() {
        let record = Record::new("ana", "5551234567", "ana@example.com", "pw");
        let json = serde_json::to_value(&record).unwrap();

        assert_eq!(json["user"], "ana");
        assert_eq!(json["phone"], "5551234567");
        assert_eq!(json["mail"], "ana@example.com");
        assert_eq!(json["password"], "pw");
    }
}
