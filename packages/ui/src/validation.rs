//! Client-side validation of the sign-in form.
//!
//! [`validate`] is pure: it takes the raw field values and either returns the
//! [`Credentials`] to submit or the per-field errors to show. Lengths are counted
//! in UTF-16 code units and ages are coerced the way a browser coerces a string
//! to a number, so the rules match what users of the page see in any browser.

use std::fmt;

use store::{age_from_number, js_trim, Credentials};

pub const MIN_NAME_LEN: usize = 2;
pub const MIN_AGE: f64 = 13.0;
pub const MIN_PASSWORD_LEN: usize = 6;

/// Raw, unvalidated values of the three form fields.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FormInput {
    pub name: String,
    pub age: String,
    pub password: String,
}

impl FormInput {
    pub fn new(name: &str, age: &str, password: &str) -> Self {
        Self {
            name: name.to_string(),
            age: age.to_string(),
            password: password.to_string(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Age,
    Password,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::Name, Field::Age, Field::Password];

    /// DOM id of the input element.
    pub fn id(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Age => "age",
            Field::Password => "password",
        }
    }
}

/// An inline error attached to one field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldError {
    NameMissing,
    NameTooShort,
    AgeInvalid,
    AgeTooYoung,
    PasswordTooShort,
    PasswordIncorrect,
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            FieldError::NameMissing => "Please enter your name.",
            FieldError::NameTooShort => "Name must be at least 2 characters.",
            FieldError::AgeInvalid => "Please enter a valid age.",
            FieldError::AgeTooYoung => "You must be at least 13 years old to sign up.",
            FieldError::PasswordTooShort => "Password must be at least 6 characters.",
            FieldError::PasswordIncorrect => "Incorrect password. Try again.",
        };
        f.write_str(msg)
    }
}

/// At most one error per field.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub name: Option<FieldError>,
    pub age: Option<FieldError>,
    pub password: Option<FieldError>,
}

impl FieldErrors {
    pub fn get(&self, field: Field) -> Option<FieldError> {
        match field {
            Field::Name => self.name,
            Field::Age => self.age,
            Field::Password => self.password,
        }
    }

    /// Attach `error` to `field`, replacing any previous error there.
    pub fn set(&mut self, field: Field, error: FieldError) {
        let slot = match field {
            Field::Name => &mut self.name,
            Field::Age => &mut self.age,
            Field::Password => &mut self.password,
        };
        *slot = Some(error);
    }

    pub fn is_empty(&self) -> bool {
        self.count() == 0
    }

    pub fn count(&self) -> usize {
        Field::ALL.iter().filter(|f| self.get(**f).is_some()).count()
    }
}

/// Validate all three fields.
pub fn validate(input: &FormInput) -> Result<Credentials, FieldErrors> {
    let mut errors = FieldErrors::default();

    let name = js_trim(&input.name);
    if name.is_empty() {
        errors.name = Some(FieldError::NameMissing);
    } else if utf16_len(name) < MIN_NAME_LEN {
        errors.name = Some(FieldError::NameTooShort);
    }

    let age = coerce_number(&input.age);
    if input.age.is_empty() || age.is_nan() || age < 0.0 {
        errors.age = Some(FieldError::AgeInvalid);
    } else if age < MIN_AGE {
        errors.age = Some(FieldError::AgeTooYoung);
    }

    if utf16_len(&input.password) < MIN_PASSWORD_LEN {
        errors.password = Some(FieldError::PasswordTooShort);
    }

    if !errors.is_empty() {
        return Err(errors);
    }
    Ok(Credentials::new(name, age_from_number(age), &input.password))
}

fn utf16_len(s: &str) -> usize {
    s.encode_utf16().count()
}

/// Browser string-to-number coercion. Returns NaN for anything non-numeric.
pub fn coerce_number(raw: &str) -> f64 {
    let s = js_trim(raw);
    if s.is_empty() {
        return 0.0;
    }

    match s {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }

    let radix = match s.get(..2) {
        Some("0x" | "0X") => Some(16),
        Some("0o" | "0O") => Some(8),
        Some("0b" | "0B") => Some(2),
        _ => None,
    };
    if let Some(radix) = radix {
        let digits = &s[2..];
        if digits.is_empty() {
            return f64::NAN;
        }
        return digits.chars().try_fold(0.0_f64, |acc, c| {
            c.to_digit(radix).map(|d| acc * radix as f64 + d as f64)
        })
        .unwrap_or(f64::NAN);
    }

    // Rust's float parser also accepts "inf" and "NaN", which browsers reject.
    if !s
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '.' | 'e' | 'E' | '+' | '-'))
    {
        return f64::NAN;
    }
    s.parse().unwrap_or(f64::NAN)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> FormInput {
        FormInput::new("Alice", "20", "secret1")
    }

    fn errors_for(input: FormInput) -> FieldErrors {
        validate(&input).expect_err("input should be rejected")
    }

    #[test]
    fn test_accepts_valid_input() {
        let creds = validate(&FormInput::new("  Alice ", "20", "secret1")).unwrap();
        assert_eq!(creds.display_name, "Alice");
        assert_eq!(creds.age, 20);
        assert_eq!(creds.password, "secret1");
    }

    #[test]
    fn test_name_rules() {
        for name in ["", "   "] {
            let errors = errors_for(FormInput { name: name.into(), ..valid() });
            assert_eq!(errors.name, Some(FieldError::NameMissing));
            assert_eq!(errors.count(), 1);
        }
        let errors = errors_for(FormInput { name: " A ".into(), ..valid() });
        assert_eq!(errors.name, Some(FieldError::NameTooShort));

        for name in ["Al", " Al ", "Alexandra"] {
            assert!(validate(&FormInput { name: name.into(), ..valid() }).is_ok());
        }
        // One astral character is two UTF-16 code units
        assert!(validate(&FormInput { name: "😀".into(), ..valid() }).is_ok());
    }

    #[test]
    fn test_age_rules() {
        assert!(validate(&FormInput { age: "13".into(), ..valid() }).is_ok());

        let errors = errors_for(FormInput { age: "12".into(), ..valid() });
        assert_eq!(errors.age, Some(FieldError::AgeTooYoung));
        assert_eq!(
            errors.age.unwrap().to_string(),
            "You must be at least 13 years old to sign up."
        );

        for age in ["-1", "", "abc", "inf", "NaN", "1e", "0x"] {
            let errors = errors_for(FormInput { age: age.into(), ..valid() });
            assert_eq!(errors.age, Some(FieldError::AgeInvalid), "age {age:?}");
            assert_eq!(errors.age.unwrap().to_string(), "Please enter a valid age.");
        }

        // Whitespace-only coerces to zero
        let errors = errors_for(FormInput { age: "  ".into(), ..valid() });
        assert_eq!(errors.age, Some(FieldError::AgeTooYoung));
    }

    #[test]
    fn test_age_coercion_forms() {
        let age = |raw: &str| validate(&FormInput { age: raw.into(), ..valid() }).unwrap().age;
        assert_eq!(age(" 18 "), 18);
        assert_eq!(age("13.9"), 13);
        assert_eq!(age("1e2"), 100);
        assert_eq!(age("0x20"), 32);
        assert_eq!(age("+21"), 21);
        assert_eq!(age("Infinity"), u32::MAX);
    }

    #[test]
    fn test_password_rules() {
        for password in ["", "12345"] {
            let errors = errors_for(FormInput { password: password.into(), ..valid() });
            assert_eq!(errors.password, Some(FieldError::PasswordTooShort));
        }
        assert!(validate(&FormInput { password: "123456".into(), ..valid() }).is_ok());
    }

    #[test]
    fn test_reports_every_invalid_field() {
        let errors = errors_for(FormInput::new("", "abc", "123"));
        assert_eq!(errors.count(), 3);
        assert_eq!(errors.get(Field::Name), Some(FieldError::NameMissing));
        assert_eq!(errors.get(Field::Age), Some(FieldError::AgeInvalid));
        assert_eq!(errors.get(Field::Password), Some(FieldError::PasswordTooShort));
    }

    #[test]
    fn test_browser_whitespace_only() {
        // NEL is not trimmed by browsers, so it counts toward the name
        let input = FormInput { name: "\u{85}A\u{85}".into(), ..valid() };
        assert_eq!(validate(&input).unwrap().display_name, "\u{85}A\u{85}");
        let errors = errors_for(FormInput { name: "\u{feff}A\u{3000}".into(), ..valid() });
        assert_eq!(errors.name, Some(FieldError::NameTooShort));

        let errors = errors_for(FormInput { age: "20\u{85}".into(), ..valid() });
        assert_eq!(errors.age, Some(FieldError::AgeInvalid));
        assert_eq!(validate(&FormInput { age: "\u{a0}20\u{2029}".into(), ..valid() }).unwrap().age, 20);
    }

    #[test]
    fn test_coerce_number() {
        assert_eq!(coerce_number(""), 0.0);
        assert_eq!(coerce_number("\t\n"), 0.0);
        assert_eq!(coerce_number("0b101"), 5.0);
        assert_eq!(coerce_number("0o17"), 15.0);
        assert_eq!(coerce_number(".5"), 0.5);
        assert_eq!(coerce_number("-Infinity"), f64::NEG_INFINITY);
        assert!(coerce_number("12px").is_nan());
        assert!(coerce_number("-0x10").is_nan());
        assert!(coerce_number("infinity").is_nan());
    }
}
