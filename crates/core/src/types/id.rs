//! Newtype IDs for type-safe entity references.
//!
//! Use the `define_id!` macro to create type-safe ID wrappers that prevent
//! accidentally mixing IDs from different entity types.

/// Macro to define a type-safe ID wrapper.
///
/// Creates a newtype wrapper around `String` with:
/// - `Serialize`/`Deserialize` with `#[serde(transparent)]`
/// - `Debug`, `Clone`, `PartialEq`, `Eq`, `Hash`, `PartialOrd`, `Ord`
/// - Conversion methods: `new()`, `as_str()`, `into_inner()`
/// - `From<&str>`, `From<String>` and `Into<String>` implementations
/// - `Borrow<str>` so maps keyed by the ID can be queried with a plain `&str`
///
/// # Example
///
/// ```rust
/// # use aura_scents_core::define_id;
/// define_id!(ShelfId);
/// define_id!(BinId);
///
/// let shelf = ShelfId::new("1");
/// let bin = BinId::new("1");
///
/// // These are different types, so this won't compile:
/// // let _: ShelfId = bin;
/// assert_eq!(shelf.as_str(), bin.as_str());
/// ```
#[macro_export]
macro_rules! define_id {
    ($name:ident) => {
        #[derive(
            Debug,
            Clone,
            PartialEq,
            Eq,
            Hash,
            PartialOrd,
            Ord,
            ::serde::Serialize,
            ::serde::Deserialize
        )]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create a new ID from anything string-like.
            #[must_use]
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Get the underlying string value.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume the ID and return its inner string.
            #[must_use]
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_owned())
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }

        impl From<$name> for String {
            fn from(id: $name) -> Self {
                id.0
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl ::core::borrow::Borrow<str> for $name {
            fn borrow(&self) -> &str {
                &self.0
            }
        }
    };
}

// Define standard entity IDs
define_id!(ProductId);
define_id!(UserId);
define_id!(OrderId);

impl OrderId {
    /// Prefix shared by every order number.
    pub const PREFIX: &'static str = "ORD";

    /// Build an order number from its sequence, e.g. `4` becomes `ORD004`.
    #[must_use]
    pub fn from_sequence(sequence: u32) -> Self {
        Self(format!("{}{sequence:03}", Self::PREFIX))
    }

    /// Numeric sequence of an `ORDnnn` order number.
    ///
    /// Returns `None` for IDs that do not follow the `ORD` + digits shape.
    #[must_use]
    pub fn sequence(&self) -> Option<u32> {
        self.0
            .strip_prefix(Self::PREFIX)
            .filter(|digits| !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()))
            .and_then(|digits| digits.parse().ok())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_display_and_as_str() {
        let id = ProductId::new("2");
        assert_eq!(id.as_str(), "2");
        assert_eq!(id.to_string(), "2");
    }

    #[test]
    fn test_borrow_lookup() {
        let mut ids = HashSet::new();
        ids.insert(ProductId::from("7"));
        assert!(ids.contains("7"));
        assert!(!ids.contains("8"));
    }

    #[test]
    fn test_serde_transparent() {
        let id = ProductId::new("12");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"12\"");
        let parsed: ProductId = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn test_order_id_from_sequence() {
        assert_eq!(OrderId::from_sequence(4).as_str(), "ORD004");
        assert_eq!(OrderId::from_sequence(1234).as_str(), "ORD1234");
    }

    #[test]
    fn test_order_id_sequence() {
        assert_eq!(OrderId::new("ORD003").sequence(), Some(3));
        assert_eq!(OrderId::new("ORD").sequence(), None);
        assert_eq!(OrderId::new("ORD-7").sequence(), None);
        assert_eq!(OrderId::new("X001").sequence(), None);
    }
}
