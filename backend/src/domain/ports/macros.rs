//! Helper macro for declaring port error enums.
//!
//! Every variant carries named fields (usually a single `message`). The macro
//! derives `thiserror::Error` and emits one snake_case constructor per
//! variant whose parameters accept anything convertible into the field type.

macro_rules! define_port_error {
    (@ctor $variant:ident ($($params:tt)*) ($($inits:tt)*)) => {
        ::paste::paste! {
            #[doc = concat!("Construct [`Self::", stringify!($variant), "`].")]
            pub fn [<$variant:snake>]($($params)*) -> Self {
                Self::$variant { $($inits)* }
            }
        }
    };

    (@ctor $variant:ident ($($params:tt)*) ($($inits:tt)*) $field:ident : $ty:ty, $($rest:tt)*) => {
        define_port_error!(
            @ctor
            $variant
            ($($params)* $field: impl Into<$ty>,)
            ($($inits)* $field: $field.into(),)
            $($rest)*
        );
    };

    (
        $(#[$outer:meta])*
        pub enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident { $($field:ident : $ty:ty),+ $(,)? } => $message:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$outer])*
        #[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
        pub enum $name {
            $(
                $(#[$variant_meta])*
                #[error($message)]
                #[allow(missing_docs)]
                $variant { $($field : $ty),+ },
            )+
        }

        impl $name {
            $(
                define_port_error!(@ctor $variant () () $($field : $ty,)+);
            )+
        }
    };
}

pub(crate) use define_port_error;

#[cfg(test)]
mod tests {
    define_port_error! {
        pub enum SamplePortError {
            Unreachable { message: String } => "unreachable: {message}",
            Rejected { status: u16, message: String } => "rejected with {status}: {message}",
        }
    }

    #[test]
    fn constructors_accept_borrowed_strings() {
        let err = SamplePortError::unreachable("dns failure");
        assert_eq!(err.to_string(), "unreachable: dns failure");
    }

    #[test]
    fn constructors_convert_each_field() {
        let err = SamplePortError::rejected(404_u16, "no such artist");
        assert_eq!(
            err,
            SamplePortError::Rejected {
                status: 404,
                message: "no such artist".to_owned(),
            }
        );
        assert_eq!(err.to_string(), "rejected with 404: no such artist");
    }
}
