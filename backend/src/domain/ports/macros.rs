//! `define_port_error!`: declares a port error enum with snake_case
//! constructors for each variant.
//!
//! ```ignore
//! define_port_error! {
//!     pub enum ShelfError {
//!         Connection { message: String } => "connection failed: {message}",
//!     }
//! }
//! let err = ShelfError::connection("refused");
//! ```
//!
//! Constructor parameters take `impl Into<T>` so callers can pass `&str` for
//! `String` fields.

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
                    #[doc = concat!("Construct [`", stringify!($name), "::", stringify!($variant), "`].")]
                    pub fn [<$variant:snake>]($($field: impl Into<$ty>),*) -> Self {
                        Self::$variant { $($field: $field.into()),* }
                    }
                }
            )+
        }
    };
}

pub(crate) use define_port_error;

#[cfg(test)]
mod tests {
    define_port_error! {
        pub enum ShelfError {
            Connection { message: String } => "shelf connection failed: {message}",
            Missing { shelf: i32 } => "shelf {shelf} is missing",
            Mixed { message: String, shelf: i32 } => "{message} on shelf {shelf}",
        }
    }

    #[test]
    fn string_fields_accept_str() {
        assert_eq!(
            ShelfError::connection("refused").to_string(),
            "shelf connection failed: refused"
        );
    }

    #[test]
    fn numeric_fields_keep_their_type() {
        assert_eq!(ShelfError::missing(4_i32), ShelfError::Missing { shelf: 4 });
    }

    #[test]
    fn multiple_fields_follow_declaration_order() {
        assert_eq!(ShelfError::mixed("dusty", 2_i32).to_string(), "dusty on shelf 2");
    }
}
