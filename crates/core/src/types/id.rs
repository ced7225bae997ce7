//! Shopify global IDs (GIDs) as type-safe newtypes.
//!
//! Shopify identifies every resource with a string of the form
//! `gid://shopify/<Resource>/<number>`. Merchants, URLs and metafield values
//! frequently carry only the numeric tail, so every ID type here accepts both
//! forms and normalizes to the full GID.
//!
//! Use the `define_gid!` macro to create a wrapper for a new resource type.

/// Macro to define a type-safe Shopify GID wrapper.
///
/// Creates a newtype wrapper around `String` with:
/// - `Serialize`/`Deserialize` as a plain string (normalized on the way in)
/// - `Debug`, `Clone`, `PartialEq`, `Eq`, `Hash`, `PartialOrd`, `Ord`
/// - `parse()`, `as_str()`, `numeric_id()`, `into_inner()`
/// - `Display`, `AsRef<str>`, `From<String>`, `From<&str>`
///
/// # Example
///
/// ```rust
/// # use curator_core::define_gid;
/// define_gid!(MenuId, "Menu");
///
/// let id = MenuId::parse("42");
/// assert_eq!(id.as_str(), "gid://shopify/Menu/42");
/// assert_eq!(id.numeric_id(), Some("42"));
/// ```
#[macro_export]
macro_rules! define_gid {
    ($name:ident, $resource:literal) => {
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
        #[serde(from = "String", into = "String")]
        pub struct $name(String);

        impl $name {
            /// Shopify resource name used in the GID path.
            pub const RESOURCE: &'static str = $resource;

            /// Full GID prefix for this resource, including the trailing slash.
            pub const PREFIX: &'static str = concat!("gid://shopify/", $resource, "/");

            /// Parse an ID from either a full GID or a bare numeric ID.
            ///
            /// Strings that are neither are kept verbatim so that opaque IDs
            /// still round-trip to Shopify unchanged.
            #[must_use]
            pub fn parse(raw: &str) -> Self {
                Self($crate::types::id::normalize_gid(raw, Self::PREFIX))
            }

            /// Get the full GID string.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Get the numeric tail of the GID, if it has one.
            #[must_use]
            pub fn numeric_id(&self) -> Option<&str> {
                self.0
                    .strip_prefix(Self::PREFIX)
                    .filter(|tail| $crate::types::id::is_numeric(tail))
            }

            /// Consume the ID and return the inner GID string.
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

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl From<String> for $name {
            fn from(raw: String) -> Self {
                Self::parse(&raw)
            }
        }

        impl From<&str> for $name {
            fn from(raw: &str) -> Self {
                Self::parse(raw)
            }
        }

        impl From<$name> for String {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

/// Normalize `raw` against a resource GID `prefix`.
///
/// - already prefixed: returned as-is
/// - all ASCII digits: prefixed
/// - anything else: returned verbatim (trimmed)
#[must_use]
pub fn normalize_gid(raw: &str, prefix: &str) -> String {
    let raw = raw.trim();
    if raw.starts_with(prefix) {
        raw.to_owned()
    } else if is_numeric(raw) {
        format!("{prefix}{raw}")
    } else {
        raw.to_owned()
    }
}

/// Whether `s` is a non-empty run of ASCII digits.
#[must_use]
pub fn is_numeric(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

define_gid!(CollectionId, "Collection");
define_gid!(ProductId, "Product");
define_gid!(FileId, "MediaImage");
