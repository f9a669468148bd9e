//! Declarative wire enums.
//!
//! AWS models enums as plain strings and adds new values over time, so every
//! wire enum carries an `Unknown(String)` catch-all: a newer service value
//! never breaks deserialization of an older client.

/// Declare a string-valued wire enum.
///
/// The first listed variant is the [`Default`].
///
/// # Examples
///
/// ```
/// stratus_core::string_enum! {
///     /// Sort order.
///     pub enum SortOrder {
///         /// Descending.
///         Desc => "DESC",
///         /// Ascending.
///         Asc => "ASC",
///     }
/// }
///
/// assert_eq!(SortOrder::from("ASC"), SortOrder::Asc);
/// assert_eq!(SortOrder::from("SIDEWAYS").as_str(), "SIDEWAYS");
/// assert_eq!(serde_json::to_string(&SortOrder::Desc).unwrap(), r#""DESC""#);
/// ```
#[macro_export]
macro_rules! string_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(#[$first_meta:meta])*
            $first:ident => $first_wire:literal
            $(,
                $(#[$variant_meta:meta])*
                $variant:ident => $wire:literal
            )*
            $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        $vis enum $name {
            $(#[$first_meta])*
            $first,
            $(
                $(#[$variant_meta])*
                $variant,
            )*
            /// A value not known to this version of the client.
            Unknown(String),
        }

        impl $name {
            /// Every value known to this version of the client.
            pub const VALUES: &'static [&'static str] = &[$first_wire $(, $wire)*];

            /// Returns the wire-format string.
            #[must_use]
            pub fn as_str(&self) -> &str {
                match self {
                    Self::$first => $first_wire,
                    $(Self::$variant => $wire,)*
                    Self::Unknown(s) => s.as_str(),
                }
            }
        }

        impl ::std::default::Default for $name {
            fn default() -> Self {
                Self::$first
            }
        }

        impl ::std::convert::From<&str> for $name {
            fn from(s: &str) -> Self {
                match s {
                    $first_wire => Self::$first,
                    $($wire => Self::$variant,)*
                    other => Self::Unknown(other.to_owned()),
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $crate::__private::serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> ::std::result::Result<S::Ok, S::Error>
            where
                S: $crate::__private::serde::Serializer,
            {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> $crate::__private::serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> ::std::result::Result<Self, D::Error>
            where
                D: $crate::__private::serde::Deserializer<'de>,
            {
                let s = <::std::string::String as $crate::__private::serde::Deserialize>::deserialize(
                    deserializer,
                )?;
                Ok(Self::from(s.as_str()))
            }
        }
    };
}
