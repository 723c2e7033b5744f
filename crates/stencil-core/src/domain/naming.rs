//! Entity-name casing.
//!
//! Every identifier, path segment, route and environment prefix that a
//! template emits is read from one [`NameBundle`]. Templates never re-case a
//! name locally; they pick the field that matches the position:
//!
//! | Field    | Example (`invoiceItem`) | Used for                                  |
//! |----------|-------------------------|-------------------------------------------|
//! | `raw`    | `invoiceItem`           | Display only                              |
//! | `lower`  | `invoiceitem`           | Paths, routes, package names, properties  |
//! | `pascal` | `InvoiceItem`           | Class, type and module identifiers        |
//! | `upper`  | `INVOICEITEM`           | Environment-variable prefixes             |
//!
//! `lower` is also emitted as a bare local binding in the use-case files, so
//! it may not be a JavaScript reserved word or a name those files already
//! bind.
//!
//! `pascal` only touches the first character. Generated projects already in
//! the wild depend on that, so `invoice_item`-style word splitting is not
//! performed.

use serde::Serialize;
use std::fmt;

use crate::domain::error::DomainError;

/// Casing variants of one entity name, derived once per generation run.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct NameBundle {
    raw: String,
    lower: String,
    pascal: String,
    upper: String,
}

impl NameBundle {
    /// Validate `raw` and derive every variant from it.
    ///
    /// # Errors
    ///
    /// `InvalidName` if `raw` is empty, contains anything other than ASCII
    /// letters and digits, starts with a digit, or is reserved (compared
    /// case-insensitively).
    pub fn derive(raw: &str) -> Result<Self, DomainError> {
        validate(raw)?;

        Ok(Self {
            raw: raw.to_string(),
            lower: raw.to_ascii_lowercase(),
            pascal: capitalize_first(raw),
            upper: raw.to_ascii_uppercase(),
        })
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn lower(&self) -> &str {
        &self.lower
    }

    pub fn pascal(&self) -> &str {
        &self.pascal
    }

    pub fn upper(&self) -> &str {
        &self.upper
    }

    /// Expand `{{name}}`, `{{Name}}` and `{{NAME}}` in a path pattern.
    ///
    /// Only these three placeholders exist; anything else is left untouched.
    pub fn expand(&self, pattern: &str) -> String {
        pattern
            .replace("{{name}}", &self.lower)
            .replace("{{Name}}", &self.pascal)
            .replace("{{NAME}}", &self.upper)
    }
}

impl fmt::Display for NameBundle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

/// Words a strict-mode module cannot use as a binding name.
const JS_RESERVED: &[&str] = &[
    "arguments", "await", "break", "case", "catch", "class", "const", "continue", "debugger",
    "default", "delete", "do", "else", "enum", "eval", "export", "extends", "false", "finally",
    "for", "function", "if", "implements", "import", "in", "instanceof", "interface", "let", "new",
    "null", "package", "private", "protected", "public", "return", "static", "super", "switch",
    "this", "throw", "true", "try", "typeof", "undefined", "var", "void", "while", "with", "yield",
];

/// Bindings that share a scope with the entity binding in generated use cases.
const TEMPLATE_BOUND: &[&str] = &[
    "created", "entity", "id", "input", "model", "tracing", "updated", "user", "z",
];

/// Directory of the health module bundled into every application.
const HEALTH_MODULE: &str = "health";

fn validate(raw: &str) -> Result<(), DomainError> {
    let Some(first) = raw.chars().next() else {
        return Err(DomainError::invalid_name(raw, "name cannot be empty"));
    };

    if let Some(bad) = raw.chars().find(|c| !c.is_ascii_alphanumeric()) {
        return Err(DomainError::invalid_name(
            raw,
            format!("unsupported character {bad:?}"),
        ));
    }

    if !first.is_ascii_alphabetic() {
        return Err(DomainError::invalid_name(
            raw,
            "name must start with a letter",
        ));
    }

    let lower = raw.to_ascii_lowercase();
    if lower == HEALTH_MODULE {
        return Err(DomainError::invalid_name(
            raw,
            "reserved: collides with the bundled health module",
        ));
    }
    if JS_RESERVED.contains(&lower.as_str()) {
        return Err(DomainError::invalid_name(
            raw,
            "reserved word in generated TypeScript",
        ));
    }
    if TEMPLATE_BOUND.contains(&lower.as_str()) {
        return Err(DomainError::invalid_name(
            raw,
            "reserved: already bound in generated use cases",
        ));
    }

    Ok(())
}

/// Upper-case the first character, leave the rest alone.
fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => {
            let mut out = String::with_capacity(s.len());
            out.push(first.to_ascii_uppercase());
            out.push_str(chars.as_str());
            out
        }
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derives_all_variants() {
        let bundle = NameBundle::derive("teste").unwrap();
        assert_eq!(bundle.raw(), "teste");
        assert_eq!(bundle.lower(), "teste");
        assert_eq!(bundle.pascal(), "Teste");
        assert_eq!(bundle.upper(), "TESTE");
    }

    #[test]
    fn pascal_only_touches_first_character() {
        let bundle = NameBundle::derive("invoiceItem").unwrap();
        assert_eq!(bundle.pascal(), "InvoiceItem");
        assert_eq!(bundle.lower(), "invoiceitem");
        assert_eq!(bundle.upper(), "INVOICEITEM");

        // No word boundary detection
        let bundle = NameBundle::derive("dog2cat").unwrap();
        assert_eq!(bundle.pascal(), "Dog2cat");
    }

    #[test]
    fn already_capitalized_input_keeps_remainder() {
        let bundle = NameBundle::derive("TESTE").unwrap();
        assert_eq!(bundle.pascal(), "TESTE");
        assert_eq!(bundle.lower(), "teste");
    }

    #[test]
    fn derivation_is_deterministic() {
        assert_eq!(
            NameBundle::derive("dog").unwrap(),
            NameBundle::derive("dog").unwrap()
        );
    }

    #[test]
    fn rejects_empty() {
        assert!(matches!(
            NameBundle::derive(""),
            Err(DomainError::InvalidName { .. })
        ));
    }

    #[test]
    fn rejects_separators_and_non_ascii() {
        for bad in ["my-entity", "my_entity", "my entity", "../etc", "café", "a.b"] {
            assert!(
                matches!(NameBundle::derive(bad), Err(DomainError::InvalidName { .. })),
                "accepted: {bad}"
            );
        }
    }

    #[test]
    fn rejects_leading_digit() {
        let err = NameBundle::derive("2fast").unwrap_err();
        assert!(err.to_string().contains("start with a letter"));
    }

    #[test]
    fn rejects_health_in_any_case() {
        for name in ["health", "Health", "HEALTH"] {
            let err = NameBundle::derive(name).unwrap_err();
            assert!(err.to_string().contains("health module"), "{name}: {err}");
        }
    }

    #[test]
    fn rejects_javascript_reserved_words() {
        for name in ["delete", "class", "Class", "new", "default", "this", "await", "yield"] {
            let err = NameBundle::derive(name).unwrap_err();
            assert!(err.to_string().contains("reserved word"), "{name}: {err}");
        }
    }

    #[test]
    fn rejects_names_bound_by_use_cases() {
        for name in ["model", "Input", "entity", "tracing", "user", "id", "z"] {
            assert!(
                matches!(NameBundle::derive(name), Err(DomainError::InvalidName { .. })),
                "accepted: {name}"
            );
        }
    }

    #[test]
    fn accepts_names_containing_reserved_words() {
        for name in ["healthCheck", "classroom", "newsletter", "users", "modelo"] {
            assert!(NameBundle::derive(name).is_ok(), "rejected: {name}");
        }
    }

    #[test]
    fn expands_placeholders() {
        let bundle = NameBundle::derive("dog").unwrap();
        assert_eq!(
            bundle.expand("modules/{{name}}/{{Name}}.{{NAME}}"),
            "modules/dog/Dog.DOG"
        );
        assert_eq!(bundle.expand("{{other}}"), "{{other}}");
    }
}
