//! User-facing system messages.
//!
//! Messages are looked up by key and rendered by substituting `{name}` placeholders.

use crate::{RegistryError, RegistryResult};
use pharmops_types::MessageCategory;
use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;

static PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{([A-Za-z_][A-Za-z0-9_]*)\}").expect("placeholder pattern compiles")
});

/// A message template and its category.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct SystemMessage {
    pub key: &'static str,
    pub category: MessageCategory,
    pub template: &'static str,
}

const fn msg(
    key: &'static str,
    category: MessageCategory,
    template: &'static str,
) -> SystemMessage {
    SystemMessage {
        key,
        category,
        template,
    }
}

/// Every system message, grouped by category.
pub static MESSAGES: &[SystemMessage] = &[
    msg("login_success", MessageCategory::Success, "Welcome back, {name}!"),
    msg(
        "registration_success",
        MessageCategory::Success,
        "Staff account created for {email}. Check your inbox to verify the address.",
    ),
    msg(
        "patient_admitted",
        MessageCategory::Success,
        "Patient {patient_id} admitted to {department}.",
    ),
    msg(
        "prescription_verified",
        MessageCategory::Success,
        "Prescription {prescription_id} verified.",
    ),
    msg(
        "prescription_dispensed",
        MessageCategory::Success,
        "Prescription {prescription_id} dispensed.",
    ),
    msg(
        "delivery_completed",
        MessageCategory::Success,
        "Medication delivered to {patient_id} at the bedside.",
    ),
    msg("settings_saved", MessageCategory::Success, "Settings saved."),
    msg(
        "invalid_credentials",
        MessageCategory::Error,
        "Invalid email or password.",
    ),
    msg(
        "unauthorized",
        MessageCategory::Error,
        "You do not have permission to open {feature}.",
    ),
    msg(
        "validation_failed",
        MessageCategory::Error,
        "{field} is not in the expected format.",
    ),
    msg(
        "network_error",
        MessageCategory::Error,
        "Unable to reach the server. Please try again.",
    ),
    msg(
        "registration_failed",
        MessageCategory::Error,
        "Could not create the staff account: {reason}",
    ),
    msg(
        "session_expiring",
        MessageCategory::Warning,
        "Your session will expire in {minutes} minutes.",
    ),
    msg(
        "low_stock",
        MessageCategory::Warning,
        "{medication} is running low ({quantity} remaining).",
    ),
    msg(
        "unsaved_changes",
        MessageCategory::Warning,
        "You have unsaved changes.",
    ),
    msg(
        "delivery_delayed",
        MessageCategory::Warning,
        "Delivery for {patient_id} is running late.",
    ),
];

/// Look up a message by key.
pub fn message(key: &str) -> RegistryResult<&'static SystemMessage> {
    MESSAGES
        .iter()
        .find(|m| m.key == key)
        .ok_or_else(|| RegistryError::UnknownMessage(key.to_string()))
}

pub fn messages_in(category: MessageCategory) -> impl Iterator<Item = &'static SystemMessage> {
    MESSAGES.iter().filter(move |m| m.category == category)
}

impl SystemMessage {
    /// Names of the placeholders in this template, in order of appearance.
    pub fn placeholders(&self) -> Vec<&'static str> {
        PLACEHOLDER
            .captures_iter(self.template)
            .filter_map(|c| c.get(1).map(|m| m.as_str()))
            .collect()
    }

    /// Substitute every `{name}` placeholder with the matching value from `vars`.
    ///
    /// Extra variables are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::MissingTemplateVariable`] naming the first placeholder with no
    /// value in `vars`.
    pub fn render(&self, vars: &[(&str, &str)]) -> RegistryResult<String> {
        let mut out = String::with_capacity(self.template.len());
        let mut last = 0;

        for caps in PLACEHOLDER.captures_iter(self.template) {
            let (Some(whole), Some(name)) = (caps.get(0), caps.get(1)) else {
                continue;
            };
            let value = vars
                .iter()
                .find(|(k, _)| *k == name.as_str())
                .map(|(_, v)| *v)
                .ok_or_else(|| RegistryError::MissingTemplateVariable {
                    key: self.key,
                    variable: name.as_str().to_string(),
                })?;

            out.push_str(&self.template[last..whole.start()]);
            out.push_str(value);
            last = whole.end();
        }

        out.push_str(&self.template[last..]);
        Ok(out)
    }
}

/// Look up `key` and render it with `vars`.
pub fn render(key: &str, vars: &[(&str, &str)]) -> RegistryResult<String> {
    message(key)?.render(vars)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn keys_are_unique() {
        let keys: HashSet<_> = MESSAGES.iter().map(|m| m.key).collect();
        assert_eq!(keys.len(), MESSAGES.len());
    }

    #[test]
    fn every_category_has_messages() {
        for category in MessageCategory::ALL {
            assert!(messages_in(*category).next().is_some(), "{category} is empty");
        }
    }

    #[test]
    fn braces_only_appear_as_placeholders() {
        for m in MESSAGES {
            let opens = m.template.matches('{').count();
            assert_eq!(opens, m.template.matches('}').count(), "{}", m.key);
            assert_eq!(opens, m.placeholders().len(), "{}", m.key);
        }
    }

    #[test]
    fn renders_all_placeholders() {
        let text = render(
            "low_stock",
            &[("medication", "Amoxicillin 500mg"), ("quantity", "12")],
        )
        .expect("render");
        assert_eq!(text, "Amoxicillin 500mg is running low (12 remaining).");
    }

    #[test]
    fn renders_template_without_placeholders() {
        assert_eq!(
            render("unsaved_changes", &[]).expect("render"),
            "You have unsaved changes."
        );
    }

    #[test]
    fn ignores_extra_variables() {
        let text = render("login_success", &[("name", "Ada"), ("unused", "x")]).expect("render");
        assert_eq!(text, "Welcome back, Ada!");
    }

    #[test]
    fn missing_variable_is_an_error() {
        let err = render("patient_admitted", &[("patient_id", "PAT000001")])
            .expect_err("department missing");
        match err {
            RegistryError::MissingTemplateVariable { key, variable } => {
                assert_eq!(key, "patient_admitted");
                assert_eq!(variable, "department");
            }
            other => panic!("expected MissingTemplateVariable, got {other:?}"),
        }
    }

    #[test]
    fn unknown_key_is_an_error() {
        let err = message("does_not_exist").expect_err("unknown key");
        assert!(matches!(err, RegistryError::UnknownMessage(k) if k == "does_not_exist"));
    }

    #[test]
    fn placeholders_listed_in_order() {
        let m = message("patient_admitted").expect("known key");
        assert_eq!(m.placeholders(), ["patient_id", "department"]);
    }
}
