//! Reading untyped JSON input into validated content types
//!
//! Content arrives as [`serde_json::Value`]: a JSON file written by an author,
//! a form payload, or a literal in code. Each content type implements
//! [`Schema`] and walks its object with a [`Fields`] reader, which records
//! every failed rule with the path of the offending field instead of stopping
//! at the first one.

use serde_json::{Map, Value};

use super::choice::{Choice, SectionId};
use super::validation::{Count, FieldPath, Range, Text, ValidationError, ValidationErrors};

/// A content type that can be validated out of untyped input
pub trait Schema: Sized {
    /// Type name used in log events
    const NAME: &'static str;

    /// Validates `value` located at `path`.
    ///
    /// Returns `Some` only when no issue was recorded for this value; every
    /// failure is appended to `issues`.
    fn validate_at(value: &Value, path: &FieldPath, issues: &mut ValidationErrors)
    -> Option<Self>;

    /// Validates a whole document
    fn parse(value: &Value) -> Result<Self, ValidationErrors> {
        let mut issues = ValidationErrors::new();
        match Self::validate_at(value, &FieldPath::root(), &mut issues) {
            Some(parsed) if issues.is_empty() => {
                tracing::trace!(schema = Self::NAME, "content accepted");
                Ok(parsed)
            }
            _ => {
                tracing::debug!(
                    schema = Self::NAME,
                    issues = issues.len(),
                    "content rejected"
                );
                Err(issues)
            }
        }
    }

    fn is_valid(value: &Value) -> bool {
        Self::parse(value).is_ok()
    }
}

/// Reads a string, recording a type issue for anything else
pub fn read_str<'v>(
    value: &'v Value,
    path: &FieldPath,
    issues: &mut ValidationErrors,
) -> Option<&'v str> {
    let text = value.as_str();
    if text.is_none() {
        issues.push(path.clone(), ValidationError::InvalidType { expected: "string" });
    }
    text
}

/// Reads a string with `check`, which may also normalize it
pub fn read_checked(
    value: &Value,
    path: &FieldPath,
    issues: &mut ValidationErrors,
    check: impl FnOnce(&str) -> Result<String, ValidationError>,
) -> Option<String> {
    let text = read_str(value, path, issues)?;
    check(text)
        .map_err(|error| issues.push(path.clone(), error))
        .ok()
}

pub fn read_text(
    value: &Value,
    path: &FieldPath,
    issues: &mut ValidationErrors,
    rule: Text,
) -> Option<String> {
    read_checked(value, path, issues, |text| rule.check(text))
}

pub fn read_bool(value: &Value, path: &FieldPath, issues: &mut ValidationErrors) -> Option<bool> {
    let flag = value.as_bool();
    if flag.is_none() {
        issues.push(path.clone(), ValidationError::InvalidType { expected: "boolean" });
    }
    flag
}

pub fn read_number(
    value: &Value,
    path: &FieldPath,
    issues: &mut ValidationErrors,
    range: Range,
) -> Option<f64> {
    let Some(number) = value.as_f64() else {
        issues.push(path.clone(), ValidationError::InvalidType { expected: "number" });
        return None;
    };
    range
        .check(number)
        .map_err(|error| issues.push(path.clone(), error))
        .ok()
}

/// Reads a whole number inside `range`; `range` must lie within `u32`
pub fn read_integer(
    value: &Value,
    path: &FieldPath,
    issues: &mut ValidationErrors,
    range: Range,
) -> Option<u32> {
    let number = read_number(value, path, issues, range)?;
    if number.fract() != 0.0 {
        issues.push(path.clone(), ValidationError::NotInteger);
        return None;
    }
    Some(number as u32)
}

pub fn read_choice<E: Choice>(
    value: &Value,
    path: &FieldPath,
    issues: &mut ValidationErrors,
) -> Option<E> {
    let name = read_str(value, path, issues)?;
    E::parse_name(name)
        .map_err(|error| issues.push(path.clone(), error))
        .ok()
}

/// Reads an array of `T`, validating every item before the item count
pub fn read_list<T: Schema>(
    value: &Value,
    path: &FieldPath,
    issues: &mut ValidationErrors,
    count: Count,
) -> Option<Vec<T>> {
    let Some(items) = value.as_array() else {
        issues.push(path.clone(), ValidationError::InvalidType { expected: "array" });
        return None;
    };
    let parsed: Vec<Option<T>> = items
        .iter()
        .enumerate()
        .map(|(index, item)| T::validate_at(item, &path.index(index), issues))
        .collect();
    if let Err(error) = count.check(items.len()) {
        issues.push(path.clone(), error);
        return None;
    }
    parsed.into_iter().collect()
}

/// Field-by-field reader over one JSON object
///
/// Absent keys are "omitted"; `null` is treated as a value of the wrong type.
/// Keys the reader never asks for are ignored.
pub struct Fields<'a> {
    map: &'a Map<String, Value>,
    path: FieldPath,
    checkpoint: usize,
}

impl<'a> Fields<'a> {
    /// Starts reading `value`, recording a type issue if it is not an object
    pub fn open(value: &'a Value, path: &FieldPath, issues: &mut ValidationErrors) -> Option<Self> {
        match value.as_object() {
            Some(map) => Some(Self {
                map,
                path: path.clone(),
                checkpoint: issues.len(),
            }),
            None => {
                issues.push(path.clone(), ValidationError::InvalidType { expected: "object" });
                None
            }
        }
    }

    /// `Some(())` when no field of this object has failed
    pub fn finish(&self, issues: &ValidationErrors) -> Option<()> {
        (issues.len() == self.checkpoint).then_some(())
    }

    fn lookup(&self, key: &str) -> Option<(&'a Value, FieldPath)> {
        self.map.get(key).map(|value| (value, self.path.key(key)))
    }

    /// Reads a key that must be present
    pub fn required<T>(
        &self,
        key: &str,
        issues: &mut ValidationErrors,
        read: impl FnOnce(&'a Value, &FieldPath, &mut ValidationErrors) -> Option<T>,
    ) -> Option<T> {
        match self.lookup(key) {
            Some((value, path)) => read(value, &path, issues),
            None => {
                issues.push(self.path.key(key), ValidationError::Required);
                None
            }
        }
    }

    /// Reads a key that may be omitted
    pub fn optional<T>(
        &self,
        key: &str,
        issues: &mut ValidationErrors,
        read: impl FnOnce(&'a Value, &FieldPath, &mut ValidationErrors) -> Option<T>,
    ) -> Option<T> {
        let (value, path) = self.lookup(key)?;
        read(value, &path, issues)
    }

    /// Reads a key that falls back to `default` when omitted
    pub fn or<T>(
        &self,
        key: &str,
        default: T,
        issues: &mut ValidationErrors,
        read: impl FnOnce(&'a Value, &FieldPath, &mut ValidationErrors) -> Option<T>,
    ) -> T {
        match self.lookup(key) {
            Some((value, path)) => read(value, &path, issues).unwrap_or(default),
            None => default,
        }
    }

    pub fn text(&self, key: &str, rule: Text, issues: &mut ValidationErrors) -> Option<String> {
        self.required(key, issues, |value, path, issues| {
            read_text(value, path, issues, rule)
        })
    }

    pub fn optional_text(
        &self,
        key: &str,
        rule: Text,
        issues: &mut ValidationErrors,
    ) -> Option<String> {
        self.optional(key, issues, |value, path, issues| {
            read_text(value, path, issues, rule)
        })
    }

    pub fn text_or(
        &self,
        key: &str,
        rule: Text,
        default: &str,
        issues: &mut ValidationErrors,
    ) -> String {
        self.or(key, default.to_string(), issues, |value, path, issues| {
            read_text(value, path, issues, rule)
        })
    }

    pub fn checked(
        &self,
        key: &str,
        check: fn(&str) -> Result<String, ValidationError>,
        issues: &mut ValidationErrors,
    ) -> Option<String> {
        self.required(key, issues, |value, path, issues| {
            read_checked(value, path, issues, check)
        })
    }

    pub fn optional_checked(
        &self,
        key: &str,
        check: fn(&str) -> Result<String, ValidationError>,
        issues: &mut ValidationErrors,
    ) -> Option<String> {
        self.optional(key, issues, |value, path, issues| {
            read_checked(value, path, issues, check)
        })
    }

    pub fn checked_or(
        &self,
        key: &str,
        check: fn(&str) -> Result<String, ValidationError>,
        default: &str,
        issues: &mut ValidationErrors,
    ) -> String {
        self.or(key, default.to_string(), issues, |value, path, issues| {
            read_checked(value, path, issues, check)
        })
    }

    pub fn flag_or(&self, key: &str, default: bool, issues: &mut ValidationErrors) -> bool {
        self.or(key, default, issues, read_bool)
    }

    pub fn number(&self, key: &str, range: Range, issues: &mut ValidationErrors) -> Option<f64> {
        self.required(key, issues, |value, path, issues| {
            read_number(value, path, issues, range)
        })
    }

    pub fn number_or(
        &self,
        key: &str,
        range: Range,
        default: f64,
        issues: &mut ValidationErrors,
    ) -> f64 {
        self.or(key, default, issues, |value, path, issues| {
            read_number(value, path, issues, range)
        })
    }

    pub fn integer(&self, key: &str, range: Range, issues: &mut ValidationErrors) -> Option<u32> {
        self.required(key, issues, |value, path, issues| {
            read_integer(value, path, issues, range)
        })
    }

    pub fn optional_integer(
        &self,
        key: &str,
        range: Range,
        issues: &mut ValidationErrors,
    ) -> Option<u32> {
        self.optional(key, issues, |value, path, issues| {
            read_integer(value, path, issues, range)
        })
    }

    pub fn choice<E: Choice>(&self, key: &str, issues: &mut ValidationErrors) -> Option<E> {
        self.required(key, issues, read_choice::<E>)
    }

    pub fn choice_or<E: Choice>(&self, key: &str, default: E, issues: &mut ValidationErrors) -> E {
        self.or(key, default, issues, read_choice::<E>)
    }

    /// Reads a section `id` that may only name `expected`
    pub fn section_id(
        &self,
        key: &str,
        expected: SectionId,
        issues: &mut ValidationErrors,
    ) -> SectionId {
        self.or(key, expected, issues, |value, path, issues| {
            let id = read_choice::<SectionId>(value, path, issues)?;
            if id != expected {
                issues.push(
                    path.clone(),
                    ValidationError::UnexpectedValue {
                        expected: expected.as_str(),
                    },
                );
                return None;
            }
            Some(id)
        })
    }

    /// Reads a string that may only equal `expected`
    pub fn literal_or(
        &self,
        key: &str,
        expected: &'static str,
        issues: &mut ValidationErrors,
    ) -> &'static str {
        self.or(key, expected, issues, |value, path, issues| {
            let text = read_str(value, path, issues)?;
            if text != expected {
                issues.push(path.clone(), ValidationError::UnexpectedValue { expected });
                return None;
            }
            Some(expected)
        })
    }

    pub fn nested<T: Schema>(&self, key: &str, issues: &mut ValidationErrors) -> Option<T> {
        self.required(key, issues, T::validate_at)
    }

    pub fn optional_nested<T: Schema>(
        &self,
        key: &str,
        issues: &mut ValidationErrors,
    ) -> Option<T> {
        self.optional(key, issues, T::validate_at)
    }

    /// Reads a nested object, substituting its fully defaulted form when omitted
    pub fn nested_or_default<T: Schema + Default>(
        &self,
        key: &str,
        issues: &mut ValidationErrors,
    ) -> T {
        self.or(key, T::default(), issues, T::validate_at)
    }

    pub fn list<T: Schema>(
        &self,
        key: &str,
        count: Count,
        issues: &mut ValidationErrors,
    ) -> Option<Vec<T>> {
        self.required(key, issues, |value, path, issues| {
            read_list(value, path, issues, count)
        })
    }

    pub fn list_or_empty<T: Schema>(
        &self,
        key: &str,
        count: Count,
        issues: &mut ValidationErrors,
    ) -> Vec<T> {
        self.or(key, Vec::new(), issues, |value, path, issues| {
            read_list(value, path, issues, count)
        })
    }
}

/// Checks that `key` of `base` accepts `max` characters and rejects `max + 1`
#[cfg(test)]
pub(crate) fn assert_text_ceiling<T: Schema + std::fmt::Debug>(base: &Value, key: &str, max: usize) {
    use pretty_assertions::assert_eq;

    let mut input = base.clone();
    input[key] = Value::String("x".repeat(max));
    assert!(T::is_valid(&input), "{} {key} at {max}", T::NAME);

    input[key] = Value::String("x".repeat(max + 1));
    let errors = T::parse(&input).unwrap_err();
    assert_eq!(
        errors.messages(),
        vec![format!(
            "{key}: {}",
            ValidationError::TooLong {
                max,
                actual: max + 1
            }
        )],
        "{} {key}",
        T::NAME
    );
}
