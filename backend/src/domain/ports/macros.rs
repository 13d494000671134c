//! Helper macro for declaring port error enums.
//!
//! Each variant gets a snake-case constructor whose parameters accept
//! anything convertible into the field type, plus a `variant_name` accessor
//! used when logging.

macro_rules! define_port_error {
    (
        $(#[$outer:meta])*
        pub enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident { $($field:ident : $ty:ty),* $(,)? } => $message:literal
            ),+ $(,)?
        }
    ) => {
        $(#[$outer])*
        #[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
        pub enum $name {
            $(
                $(#[$variant_meta])*
                #[error($message)]
                $variant { $($field: $ty),* },
            )+
        }

        impl $name {
            $(
                ::paste::paste! {
                    pub fn [<$variant:snake>]($($field: impl Into<$ty>),*) -> Self {
                        Self::$variant { $($field: $field.into()),* }
                    }
                }
            )+

            /// Variant name for structured logs.
            #[must_use]
            pub const fn variant_name(&self) -> &'static str {
                match self {
                    $(Self::$variant { .. } => stringify!($variant),)+
                }
            }
        }
    };
}

pub(crate) use define_port_error;

#[cfg(test)]
mod tests {
    define_port_error! {
        pub enum LedgerError {
            Unreachable { message: String } => "ledger unreachable: {message}",
            Rejected { row: i32, message: String } => "row {row} rejected: {message}",
        }
    }

    #[test]
    fn constructors_convert_fields() {
        let err = LedgerError::unreachable("timeout");
        assert_eq!(err.to_string(), "ledger unreachable: timeout");
        assert_eq!(err.variant_name(), "Unreachable");
    }

    #[test]
    fn constructors_keep_field_order() {
        let err = LedgerError::rejected(7, "duplicate");
        assert_eq!(err.to_string(), "row 7 rejected: duplicate");
        assert_eq!(err.variant_name(), "Rejected");
    }
}
