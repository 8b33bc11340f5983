use serde::{Deserialize, Serialize};

/// Raw booking form as submitted. Every field is optional here so that a
/// missing field is reported as a validation error rather than a parse error.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BookingForm {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub service: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub time: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Booking {
    pub name: String,
    pub phone: String,
    pub service: String,
    pub date: String,
    pub time: String,
}

impl BookingForm {
    /// Returns `None` unless all five fields are present and non-empty.
    pub fn validate(self) -> Option<Booking> {
        fn required(value: Option<String>) -> Option<String> {
            value.filter(|v| !v.is_empty())
        }

        Some(Booking {
            name: required(self.name)?,
            phone: required(self.phone)?,
            service: required(self.service)?,
            date: required(self.date)?,
            time: required(self.time)?,
        })
    }
}

impl Booking {
    /// Phone reduced to digits, keeping a `+` only as the first character.
    pub fn callable_phone(&self) -> String {
        normalize_phone(&self.phone)
    }

    pub fn sheet_row(&self, submitted_at: &str) -> Vec<String> {
        vec![
            self.name.clone(),
            self.phone.clone(),
            self.service.clone(),
            self.date.clone(),
            self.time.clone(),
            submitted_at.to_string(),
        ]
    }
}

pub fn normalize_phone(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        if c.is_ascii_digit() {
            out.push(c);
        } else if c == '+' && out.is_empty() {
            out.push(c);
        }
    }
    out
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BookingResponse {
    pub success: bool,
    pub message: String,
}

impl BookingResponse {
    pub fn ok(message: &str) -> Self {
        Self {
            success: true,
            message: message.to_string(),
        }
    }

    pub fn failed(message: &str) -> Self {
        Self {
            success: false,
            message: message.to_string(),
        }
    }
}
