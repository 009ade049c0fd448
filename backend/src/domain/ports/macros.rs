//! Helper macro generating port error enums.
//!
//! Every variant is a struct variant; each gets a snake_case constructor
//! accepting `impl Into<_>` for its fields. Writing `as Code` after the enum
//! name also emits a `From` conversion into the domain [`Error`] carrying that
//! [`ErrorCode`] and the variant's display text.
//!
//! [`Error`]: crate::domain::Error
//! [`ErrorCode`]: crate::domain::ErrorCode

macro_rules! define_port_error {
    (
        $(#[$outer:meta])*
        pub enum $name:ident as $code:ident {
            $($body:tt)*
        }
    ) => {
        define_port_error! {
            $(#[$outer])*
            pub enum $name {
                $($body)*
            }
        }

        impl From<$name> for $crate::domain::Error {
            fn from(value: $name) -> Self {
                $crate::domain::Error::new($crate::domain::ErrorCode::$code, value.to_string())
            }
        }
    };

    (
        $(#[$outer:meta])*
        pub enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident { $($field:ident : $ty:ty),* $(,)? } => $message:literal
            ),* $(,)?
        }
    ) => {
        $(#[$outer])*
        #[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
        pub enum $name {
            $(
                $(#[$variant_meta])*
                #[error($message)]
                $variant { $($field: $ty),* },
            )*
        }

        impl $name {
            $(
                ::paste::paste! {
                    pub fn [<$variant:snake>]($($field: impl Into<$ty>),*) -> Self {
                        Self::$variant { $($field: $field.into()),* }
                    }
                }
            )*
        }
    };
}

pub(crate) use define_port_error;
