//! Opaque identifiers for machine states.
//!
//! A `State` carries no structure beyond its name. Equality is the only
//! operation the engine relies on; ordering and hashing exist so states can
//! live in sets and maps.

/// Defines a string-like identifier newtype backed by `Cow<'static, str>`.
///
/// Both `State` and `EventType` share this shape while remaining distinct
/// types, so one can never be passed where the other is expected.
macro_rules! opaque_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(
            Clone,
            PartialEq,
            Eq,
            Hash,
            PartialOrd,
            Ord,
            Debug,
            serde::Serialize,
            serde::Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(std::borrow::Cow<'static, str>);

        impl $name {
            /// Create an identifier from a string literal, usable in `const` items.
            pub const fn from_static(name: &'static str) -> Self {
                Self(std::borrow::Cow::Borrowed(name))
            }

            /// Create an identifier from any owned or static string.
            pub fn new(name: impl Into<std::borrow::Cow<'static, str>>) -> Self {
                Self(name.into())
            }

            /// The identifier's name.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl std::borrow::Borrow<str> for $name {
            fn borrow(&self) -> &str {
                &self.0
            }
        }

        impl From<&'static str> for $name {
            fn from(name: &'static str) -> Self {
                Self::from_static(name)
            }
        }

        impl From<String> for $name {
            fn from(name: String) -> Self {
                Self(std::borrow::Cow::Owned(name))
            }
        }
    };
}

pub(crate) use opaque_id;

opaque_id! {
    /// A state the machine can occupy.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tablefsm::core::State;
    ///
    /// const LOCKED: State = State::from_static("Locked");
    ///
    /// let runtime = State::new(String::from("Locked"));
    /// assert_eq!(LOCKED, runtime);
    /// assert_eq!(LOCKED.to_string(), "Locked");
    /// ```
    State
}
