use std::collections::BTreeMap;

/// A single failed validation, keyed by field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

/// A validation rule attached to one field.
#[derive(Debug, Clone)]
enum Rule {
    Required,
    MinLength(usize),
    Email,
    Matches(&'static str),
    MustBeTrue,
}

/// Explicit form state: a mapping of field name to current value plus the
/// rules to validate it with. The presentation layer writes values in and
/// reads errors out; nothing here is bound to any widget.
#[derive(Debug, Clone, Default)]
pub struct Form {
    values: BTreeMap<&'static str, String>,
    rules: Vec<(&'static str, Rule)>,
}

impl Form {
    /// The login form: username and password, both required.
    pub fn login() -> Self {
        Form::default()
            .field("username", Rule::Required)
            .field("password", Rule::Required)
    }

    /// The signup form, with the rules the web client enforces.
    pub fn signup() -> Self {
        Form::default()
            .field("firstname", Rule::Required)
            .field("firstname", Rule::MinLength(2))
            .field("lastname", Rule::Required)
            .field("lastname", Rule::MinLength(2))
            .field("email", Rule::Required)
            .field("email", Rule::Email)
            .field("username", Rule::Required)
            .field("username", Rule::MinLength(3))
            .field("password", Rule::Required)
            .field("password", Rule::MinLength(6))
            .field("confirm_password", Rule::Required)
            .field("confirm_password", Rule::Matches("password"))
            .field("agree_to_terms", Rule::MustBeTrue)
    }

    fn field(mut self, name: &'static str, rule: Rule) -> Self {
        self.values.entry(name).or_default();
        self.rules.push((name, rule));
        self
    }

    pub fn set(&mut self, name: &'static str, value: impl Into<String>) -> &mut Self {
        self.values.insert(name, value.into());
        self
    }

    pub fn get(&self, name: &str) -> &str {
        self.values.get(name).map(String::as_str).unwrap_or("")
    }

    /// Run every rule; an empty result means the form is valid.
    pub fn validate(&self) -> Vec<FieldError> {
        let mut errors = Vec::new();

        for (field, rule) in &self.rules {
            let field = *field;
            let value = self.get(field);
            let message = match rule {
                Rule::Required => {
                    if value.trim().is_empty() {
                        Some(format!("{} is required", field))
                    } else {
                        None
                    }
                }
                Rule::MinLength(min) => {
                    // Skip when empty: Required reports that case
                    if !value.is_empty() && value.chars().count() < *min {
                        Some(format!("{} must be at least {} characters", field, min))
                    } else {
                        None
                    }
                }
                Rule::Email => {
                    if !value.is_empty() && !looks_like_email(value) {
                        Some(format!("{} must be a valid email address", field))
                    } else {
                        None
                    }
                }
                Rule::Matches(other) => {
                    if value != self.get(other) {
                        Some(format!("{} does not match {}", field, other))
                    } else {
                        None
                    }
                }
                Rule::MustBeTrue => {
                    if value != "true" {
                        Some(format!("{} must be accepted", field))
                    } else {
                        None
                    }
                }
            };

            if let Some(message) = message {
                errors.push(FieldError { field, message });
            }
        }

        errors
    }

    pub fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }
}

fn looks_like_email(value: &str) -> bool {
    match value.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty() && !domain.is_empty() && !domain.starts_with('.') && domain.contains('.')
        }
        None => false,
    }
}
