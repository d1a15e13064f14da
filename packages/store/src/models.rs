//! # Domain models for demo accounts
//!
//! Defines the data structures persisted by [`crate::UserDirectory`]. These types
//! are `Serialize + Deserialize` so the whole record mapping can be written to and
//! read back from a single JSON string in browser storage.
//!
//! ## Types
//!
//! | Type | Represents |
//! |------|-----------|
//! | [`UserRecord`] | One demo account: the display name as typed (trimmed, original casing), the age given at registration, and the plaintext password. |
//! | [`UserTable`] | The whole mapping from normalized key to [`UserRecord`]. Serialized as a JSON object. |
//! | [`Credentials`] | A validated submission: trimmed name, parsed age and raw password. |
//!
//! Passwords are stored in plaintext. This is a local demo with no server and
//! must not be used as a template for real account storage.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};

/// A stored demo account.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    /// Name as entered at registration: "Alice"
    pub display_name: String,
    /// Age given at registration. Any JSON number is accepted on read.
    #[serde(deserialize_with = "deserialize_age")]
    pub age: u32,
    /// Plaintext password
    pub password: String,
}

fn deserialize_age<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u32, D::Error> {
    f64::deserialize(deserializer).map(age_from_number)
}

/// Convert a coerced age to a whole number of years.
///
/// Fractions are truncated; the float-to-int cast saturates, so negatives and
/// NaN become 0 and huge values `u32::MAX`.
pub fn age_from_number(age: f64) -> u32 {
    age.trunc() as u32
}

/// Key → record mapping, kept sorted so the serialized form is stable.
pub type UserTable = BTreeMap<String, UserRecord>;

/// A submission that already passed validation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Credentials {
    pub display_name: String,
    pub age: u32,
    pub password: String,
}

impl Credentials {
    pub fn new(display_name: &str, age: u32, password: &str) -> Self {
        Self {
            display_name: js_trim(display_name).to_string(),
            age,
            password: password.to_string(),
        }
    }

    /// Lookup key for this submission.
    pub fn key(&self) -> String {
        user_key(&self.display_name)
    }

    pub(crate) fn to_record(&self) -> UserRecord {
        UserRecord {
            display_name: self.display_name.clone(),
            age: self.age,
            password: self.password.clone(),
        }
    }
}

/// Normalize a display name into its lookup key: trimmed and lowercased.
pub fn user_key(display_name: &str) -> String {
    js_trim(display_name).to_lowercase()
}

/// Whitespace as browsers define it for `String.prototype.trim` and number
/// coercion. Unlike [`char::is_whitespace`] this excludes U+0085 and includes
/// U+FEFF.
pub fn is_js_whitespace(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n' | '\u{b}' | '\u{c}' | '\r' | ' ' | '\u{a0}' | '\u{1680}'
            | '\u{2000}'..='\u{200a}'
            | '\u{2028}' | '\u{2029}' | '\u{202f}' | '\u{205f}' | '\u{3000}' | '\u{feff}'
    )
}

/// Trim browser whitespace from both ends.
pub fn js_trim(s: &str) -> &str {
    s.trim_matches(is_js_whitespace)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_key_normalizes_case_and_whitespace() {
        assert_eq!(user_key("  Bob "), "bob");
        assert_eq!(user_key("BOB"), "bob");
        assert_eq!(user_key("Ærøskøbing"), "ærøskøbing");
    }

    #[test]
    fn test_record_uses_camel_case_fields() {
        let record = UserRecord {
            display_name: "Alice".to_string(),
            age: 20,
            password: "secret1".to_string(),
        };
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(
            json,
            r#"{"displayName":"Alice","age":20,"password":"secret1"}"#
        );
    }

    #[test]
    fn test_js_trim_matches_browser_whitespace() {
        assert_eq!(js_trim("\u{feff} Bob\u{3000}\u{2028}"), "Bob");
        // NEL is not whitespace in browsers
        assert_eq!(js_trim("\u{85}A\u{85}"), "\u{85}A\u{85}");
        assert_eq!(user_key("\u{a0}BOB\t"), "bob");
    }

    #[test]
    fn test_record_reads_fractional_age() {
        let record: UserRecord =
            serde_json::from_str(r#"{"displayName":"Zed","age":13.5,"password":"zzzzzz"}"#)
                .unwrap();
        assert_eq!(record.age, 13);
        // Written back as an integer
        assert!(serde_json::to_string(&record).unwrap().contains(r#""age":13,"#));

        let record: UserRecord =
            serde_json::from_str(r#"{"displayName":"Old","age":1e2,"password":"zzzzzz"}"#)
                .unwrap();
        assert_eq!(record.age, 100);
    }

    #[test]
    fn test_age_from_number() {
        assert_eq!(age_from_number(13.9), 13);
        assert_eq!(age_from_number(-1.0), 0);
        assert_eq!(age_from_number(f64::INFINITY), u32::MAX);
    }

    #[test]
    fn test_credentials_trim_display_name() {
        let creds = Credentials::new("  Alice  ", 20, " pass word ");
        assert_eq!(creds.display_name, "Alice");
        assert_eq!(creds.key(), "alice");
        // Passwords are taken verbatim.
        assert_eq!(creds.password, " pass word ");
    }
}
