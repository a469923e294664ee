use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use crate::error::{FieldError, FieldErrorKind, Report};

/// The state of one conversion call.
///
/// Tracks the keys of the nested convertibles currently being visited and
/// collects the failures of every field, so that errors raised deep in a
/// tree carry their full dotted path.
///
/// Created by the `*_with_report` functions and handed to
/// [`DynConvertible`](crate::DynConvertible) for nested values.
pub struct Traversal {
    path: Vec<&'static str>,
    report: Report,
}

impl Traversal {
    #[inline]
    pub(crate) const fn new() -> Self {
        Self {
            path: Vec::new(),
            report: Report::new(),
        }
    }

    /// Returns the current nesting depth, `0` for the top-level object.
    #[inline]
    pub fn depth(&self) -> usize {
        self.path.len()
    }

    /// Descends into the nested object stored under `key`.
    #[inline]
    pub(crate) fn enter(&mut self, key: &'static str) {
        self.path.push(key);
    }

    /// Returns to the enclosing object.
    #[inline]
    pub(crate) fn leave(&mut self) {
        self.path.pop();
    }

    /// Returns the dotted path of `key` in the current object.
    pub(crate) fn path_of(&self, key: &str) -> String {
        let mut path = String::new();
        for segment in &self.path {
            path.push_str(segment);
            path.push('.');
        }
        path.push_str(key);
        path
    }

    /// Records a failure of the field `key` in the current object.
    pub(crate) fn record(&mut self, key: &str, kind: impl Into<FieldErrorKind>) {
        let error = FieldError::new(self.path_of(key), kind.into());

        crate::cfg::debug! {
            log::trace!("field failed: {error}");
        }

        self.report.push(error);
    }

    #[inline]
    pub(crate) fn into_report(self) -> Report {
        self.report
    }
}

impl fmt::Debug for Traversal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("<root>")?;
        for key in &self.path {
            write!(f, " -> `{key}`")?;
        }

        write!(f, " ({} failed)", self.report.failure_count())
    }
}

#[cfg(test)]
mod tests {
    use alloc::format;

    use super::Traversal;
    use crate::error::{AccessError, FieldErrorKind};

    #[test]
    fn dotted_paths() {
        let mut traversal = Traversal::new();
        assert_eq!(traversal.path_of("id"), "id");

        traversal.enter("outer");
        traversal.enter("inner");
        assert_eq!(traversal.depth(), 2);
        traversal.record("value", FieldErrorKind::MissingKey);
        traversal.leave();
        traversal.record("flag", AccessError::new("locked"));
        traversal.leave();

        assert_eq!(traversal.depth(), 0);
        assert_eq!(format!("{traversal:?}"), "<root> (2 failed)");

        let report = traversal.into_report();
        let paths = report.iter().map(|e| e.path()).collect::<alloc::vec::Vec<_>>();
        assert_eq!(paths, ["outer.inner.value", "outer.flag"]);
    }
}
