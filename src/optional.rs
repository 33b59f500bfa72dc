//! An [`Optional`] holds zero or one value of a given type, keeping "no
//! value" distinct from "a value that happens to be the type's default".
//!
//! Unlike handing around nullable references, every access goes through an
//! accessor that accounts for absence, so a forgotten check can't
//! dereference nothing. Transformations short-circuit on an empty
//! container: the supplied closure is simply never run.
use std::fmt;

/// A container that is either `Present`, holding exactly one `T`, or
/// `Empty`, holding nothing.
///
/// The container owns its value outright. `Default` is the empty
/// container.
///
/// ```
/// # use optional::Optional;
/// let age = Optional::new(69);
/// assert_eq!(69, age.or(0));
///
/// let name = Optional::<String>::empty();
/// assert!(name.is_empty());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Optional<T>(Option<T>);

// -----------------------------------------------------------------------------
//   - Construction -
// -----------------------------------------------------------------------------
impl<T> Optional<T> {
    /// Create an empty optional.
    pub const fn empty() -> Self {
        Self(None)
    }

    /// Wrap a value in an optional.
    pub const fn new(value: T) -> Self {
        Self(Some(value))
    }

    /// Wrap the result of applying `f` to `value`.
    /// The result is always present since the input is not optional.
    pub fn new_map<U>(value: U, f: impl FnOnce(U) -> T) -> Self {
        Self::new(f(value))
    }

    /// Wrap `value` if the accompanying flag is true.
    /// Pairs with APIs that hand back a value together with a validity flag.
    pub fn new_when(value: T, ok: bool) -> Self {
        if ok { Self::new(value) } else { Self::empty() }
    }

    /// Wrap `value` if the predicate holds for it.
    /// Useful for input sanitisation, e.g. treating an empty string as no
    /// value at all.
    pub fn new_if(value: T, predicate: impl FnOnce(&T) -> bool) -> Self {
        if predicate(&value) { Self::new(value) } else { Self::empty() }
    }

    /// Lift a nullable reference into an optional by cloning the referent.
    /// The borrow is not retained.
    pub fn from_ref(value: Option<&T>) -> Self
    where
        T: Clone,
    {
        Self(value.cloned())
    }

    /// Lift a nullable reference into an optional, applying `f` to the
    /// referent. `f` runs only when the reference is non-null.
    pub fn from_ref_map<U>(value: Option<&U>, f: impl FnOnce(&U) -> T) -> Self {
        Self(value.map(f))
    }

    /// Lift a nullable reference into an optional by cloning the referent,
    /// keeping it only if the predicate holds.
    pub fn from_ref_if(value: Option<&T>, predicate: impl FnOnce(&T) -> bool) -> Self
    where
        T: Clone,
    {
        match value {
            Some(val) if predicate(val) => Self::new(val.clone()),
            _ => Self::empty(),
        }
    }

    /// Lift a nullable reference into an optional, substituting `fallback`
    /// for a null reference.
    ///
    /// Unlike [`Optional::from_ref`] this never produces an empty
    /// optional: absence is replaced by a concrete value rather than
    /// propagated.
    pub fn from_ref_or(value: Option<&T>, fallback: T) -> Self
    where
        T: Clone,
    {
        match value {
            Some(val) => Self::new(val.clone()),
            None => Self::new(fallback),
        }
    }
}

// -----------------------------------------------------------------------------
//   - Access -
// -----------------------------------------------------------------------------
impl<T> Optional<T> {
    /// Returns true if there is a value inside.
    pub const fn is_present(&self) -> bool {
        self.0.is_some()
    }

    /// Returns true if there is no value inside.
    ///
    /// This is also the predicate to use for eliding empty fields during
    /// serialization:
    /// `#[serde(default, skip_serializing_if = "Optional::is_empty")]`.
    pub const fn is_empty(&self) -> bool {
        self.0.is_none()
    }

    /// The held value and a flag signalling existence.
    /// An empty optional yields `(T::default(), false)` rather than
    /// failing.
    pub fn get(self) -> (T, bool)
    where
        T: Default,
    {
        match self.0 {
            Some(value) => (value, true),
            None => (T::default(), false),
        }
    }

    /// Same as [`Optional::get`] but applies `f` to the value first.
    /// `f` runs only when a value is present; an empty optional yields
    /// `(U::default(), false)`.
    pub fn get_map<U>(self, f: impl FnOnce(T) -> U) -> (U, bool)
    where
        U: Default,
    {
        match self.0 {
            Some(value) => (f(value), true),
            None => (U::default(), false),
        }
    }

    /// Borrow the held value, or `None` if the optional is empty.
    /// The borrow lives as long as the optional it came from.
    pub const fn as_ref(&self) -> Option<&T> {
        self.0.as_ref()
    }

    /// Produce a fresh `U` from the held value, or `None` if the optional
    /// is empty. `f` runs only when a value is present.
    pub fn as_ref_map<U>(&self, f: impl FnOnce(&T) -> U) -> Option<U> {
        self.0.as_ref().map(f)
    }

    /// The held value, or `fallback` if the optional is empty.
    pub fn or(self, fallback: T) -> T {
        self.0.unwrap_or(fallback)
    }

    /// The held value, or the result of calling `f`.
    /// `f` runs only when the optional is empty.
    pub fn or_else(self, f: impl FnOnce() -> T) -> T {
        self.0.unwrap_or_else(f)
    }

    /// The held value, or `T::default()` if the optional is empty.
    pub fn or_default(self) -> T
    where
        T: Default,
    {
        self.0.unwrap_or_default()
    }

    /// Run `f` on the held value if there is one, otherwise do nothing.
    pub fn if_present(&self, f: impl FnOnce(&T)) {
        if let Some(value) = &self.0 {
            f(value);
        }
    }
}

// -----------------------------------------------------------------------------
//   - Transformation -
// -----------------------------------------------------------------------------
impl<T> Optional<T> {
    /// Transform the held value, producing an optional of the output type.
    /// An empty input short-circuits: `f` is never run and the output is
    /// empty.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Optional<U> {
        Optional(self.0.map(f))
    }

    /// Transform the held value with a fallible closure.
    ///
    /// An empty input short-circuits to `Ok(Optional::empty())` without
    /// running `f`, so no error can arise from absence. When a value is
    /// present, the closure's error is returned unmodified.
    pub fn try_map<U, E>(self, f: impl FnOnce(T) -> Result<U, E>) -> Result<Optional<U>, E> {
        match self.0 {
            Some(value) => f(value).map(Optional::new),
            None => Ok(Optional::empty()),
        }
    }
}

// -----------------------------------------------------------------------------
//   - Conversions -
// -----------------------------------------------------------------------------
impl<T> From<Option<T>> for Optional<T> {
    fn from(value: Option<T>) -> Self {
        Self(value)
    }
}

impl<T> From<Optional<T>> for Option<T> {
    fn from(value: Optional<T>) -> Self {
        value.0
    }
}

impl<T> From<T> for Optional<T> {
    fn from(value: T) -> Self {
        Self::new(value)
    }
}

impl<T: fmt::Display> fmt::Display for Optional<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Some(value) => value.fmt(f),
            None => Ok(()),
        }
    }
}
