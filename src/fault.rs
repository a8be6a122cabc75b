//! Fault - the error payload carried by failed outcomes.
//!
//! This module provides the [`Fault`] type, the error value stored inside
//! a failure [`Outcome`](crate::outcome::Outcome) or
//! [`Completion`](crate::completion::Completion). A fault is a small,
//! cheap-to-clone value holding a name (an error category, defaulting to
//! `"Fault"`) and a human-readable message.
//!
//! # Examples
//!
//! ```rust
//! use railway::fault::Fault;
//!
//! let fault = Fault::new("connection refused");
//! assert_eq!(fault.name(), "Fault");
//! assert_eq!(fault.message(), "connection refused");
//! assert_eq!(format!("{}", fault), "Fault: connection refused");
//!
//! let named = Fault::named("NotFound", "user 42 does not exist");
//! assert_eq!(format!("{}", named), "NotFound: user 42 does not exist");
//! ```

use std::borrow::Cow;
use std::fmt;

/// The error payload of a failed outcome.
///
/// A `Fault` pairs a name (an error category such as `"NotFound"`) with a
/// message. Both are stored as [`Cow<'static, str>`] so that faults built
/// from string literals never allocate.
///
/// Blank names and messages are contract violations: constructors panic
/// rather than produce a fault that renders as nothing.
///
/// # Examples
///
/// ```rust
/// use railway::fault::Fault;
///
/// let fault = Fault::named("Timeout", "no response within 5s");
/// assert_eq!(fault.name(), "Timeout");
/// assert_eq!(fault.message(), "no response within 5s");
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Fault {
    name: Cow<'static, str>,
    message: Cow<'static, str>,
}

/// The name used by faults constructed without an explicit category.
const DEFAULT_NAME: &str = "Fault";

impl Fault {
    /// Creates a fault with the default name and the given message.
    ///
    /// # Panics
    ///
    /// Panics if `message` is blank.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::fault::Fault;
    ///
    /// let fault = Fault::new("disk full");
    /// assert_eq!(fault.name(), "Fault");
    /// assert_eq!(fault.message(), "disk full");
    /// ```
    #[must_use]
    pub fn new(message: impl Into<Cow<'static, str>>) -> Self {
        Self::named(DEFAULT_NAME, message)
    }

    /// Creates a fault with an explicit name and message.
    ///
    /// The name identifies the error category and appears before the
    /// message in the rendered form (`"<name>: <message>"`).
    ///
    /// # Panics
    ///
    /// Panics if `name` or `message` is blank.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::fault::Fault;
    ///
    /// let fault = Fault::named("Validation", "age must be positive");
    /// assert_eq!(format!("{}", fault), "Validation: age must be positive");
    /// ```
    #[must_use]
    pub fn named(
        name: impl Into<Cow<'static, str>>,
        message: impl Into<Cow<'static, str>>,
    ) -> Self {
        let name = name.into();
        let message = message.into();
        assert!(
            !name.trim().is_empty(),
            "fault name must not be blank"
        );
        assert!(
            !message.trim().is_empty(),
            "fault message must not be blank"
        );
        Self { name, message }
    }

    /// Wraps a foreign error value into a fault.
    ///
    /// The fault's name is the unqualified type name of the error and the
    /// message is its [`Display`](fmt::Display) rendering.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::fault::Fault;
    ///
    /// let parse_error = "abc".parse::<i32>().unwrap_err();
    /// let fault = Fault::wrap(parse_error);
    /// assert_eq!(fault.name(), "ParseIntError");
    /// ```
    #[must_use]
    pub fn wrap<E>(error: E) -> Self
    where
        E: std::error::Error,
    {
        let qualified = std::any::type_name::<E>();
        let name = qualified.rsplit("::").next().unwrap_or(qualified);
        Self::named(name.to_owned(), error.to_string())
    }

    /// Returns the fault's name.
    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the fault's message.
    #[inline]
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for Fault {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}: {}", self.name, self.message)
    }
}

impl fmt::Debug for Fault {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Fault")
            .field("name", &self.name)
            .field("message", &self.message)
            .finish()
    }
}

impl std::error::Error for Fault {}

impl From<&'static str> for Fault {
    /// Converts a message literal into a fault with the default name.
    ///
    /// # Panics
    ///
    /// Panics if `message` is blank.
    #[inline]
    fn from(message: &'static str) -> Self {
        Self::new(message)
    }
}

impl From<String> for Fault {
    /// Converts an owned message into a fault with the default name.
    ///
    /// # Panics
    ///
    /// Panics if `message` is blank.
    #[inline]
    fn from(message: String) -> Self {
        Self::new(message)
    }
}

static_assertions::assert_impl_all!(Fault: Send, Sync, Clone);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fault_display() {
        let fault = Fault::new("boom");
        assert_eq!(format!("{fault}"), "Fault: boom");
    }

    #[test]
    fn test_named_fault_display() {
        let fault = Fault::named("NotFound", "user 42 does not exist");
        assert_eq!(format!("{fault}"), "NotFound: user 42 does not exist");
    }

    #[test]
    fn test_wrap_uses_unqualified_type_name() {
        let error = "xyz".parse::<u32>().unwrap_err();
        let fault = Fault::wrap(error);
        assert_eq!(fault.name(), "ParseIntError");
    }

    #[test]
    #[should_panic(expected = "fault message must not be blank")]
    fn test_blank_message_is_a_contract_violation() {
        let _ = Fault::new("   ");
    }

    #[test]
    #[should_panic(expected = "fault name must not be blank")]
    fn test_blank_name_is_a_contract_violation() {
        let _ = Fault::named("", "message");
    }
}
