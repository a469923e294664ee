use alloc::vec::Vec;
use core::slice::Iter;

use thiserror::Error;

use super::FieldError;

/// The outcome of one marshal or unmarshal call.
///
/// Per-field failures never stop the traversal; they are listed here in
/// the order the fields were visited.
///
/// # Examples
///
/// ```
/// use tm_mapper::{Convertible, derive::Convertible, serde_json::json};
///
/// #[derive(Convertible, Default)]
/// struct Point {
///     x: i32,
///     y: i32,
/// }
///
/// let node = json!({ "x": 1, "y": "two" });
/// let mut point = Point::default();
/// let report = tm_mapper::unmarshal_with_report(&mut point, node.as_object().unwrap());
///
/// assert_eq!(point.x, 1);
/// assert!(!report.is_complete());
/// assert_eq!(report.errors()[0].path(), "y");
/// // The compatibility flag does not reflect failures.
/// assert!(report.legacy_status());
/// ```
#[derive(Debug, Default, Clone, PartialEq, Eq, Error)]
#[error("{} field(s) failed to convert", .errors.len())]
pub struct Report {
    errors: Vec<FieldError>,
}

impl Report {
    #[inline]
    pub const fn new() -> Self {
        Self { errors: Vec::new() }
    }

    #[inline]
    pub(crate) fn push(&mut self, error: FieldError) {
        self.errors.push(error);
    }

    /// Returns `true` if every field converted.
    #[inline]
    pub fn is_complete(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns the number of failed fields, nested ones included.
    #[inline]
    pub fn failure_count(&self) -> usize {
        self.errors.len()
    }

    #[inline]
    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    #[inline]
    pub fn iter(&self) -> Iter<'_, FieldError> {
        self.errors.iter()
    }

    /// The status reported by [`unmarshal`](crate::unmarshal).
    ///
    /// Always `true`, whatever happened to the fields. Kept for callers of
    /// the boolean contract; use [`is_complete`](Self::is_complete) instead.
    #[inline]
    pub const fn legacy_status(&self) -> bool {
        true
    }

    /// Converts into `Err(self)` if any field failed.
    #[inline]
    pub fn into_result(self) -> Result<(), Self> {
        if self.is_complete() { Ok(()) } else { Err(self) }
    }

    #[inline]
    pub fn into_errors(self) -> Vec<FieldError> {
        self.errors
    }
}

impl<'a> IntoIterator for &'a Report {
    type Item = &'a FieldError;
    type IntoIter = Iter<'a, FieldError>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::Report;
    use crate::error::{FieldError, FieldErrorKind};

    #[test]
    fn into_result() {
        assert!(Report::new().into_result().is_ok());

        let mut report = Report::new();
        report.push(FieldError::new("a", FieldErrorKind::MissingKey));
        report.push(FieldError::new("b.c", FieldErrorKind::MissingKey));

        assert_eq!(report.failure_count(), 2);
        assert!(report.legacy_status());

        let err = report.into_result().unwrap_err();
        assert_eq!(err.to_string(), "2 field(s) failed to convert");
        let paths = err.iter().map(FieldError::path).collect::<alloc::vec::Vec<_>>();
        assert_eq!(paths, ["a", "b.c"]);
    }
}
