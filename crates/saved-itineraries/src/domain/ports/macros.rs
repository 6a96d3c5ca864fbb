//! `define_port_error!`: declares the error enum a driven port returns.
//!
//! Each variant gets a `thiserror` message and a snake_case constructor whose
//! fields accept `impl Into<T>`, so adapters can write
//! `KeyValueStoreError::write(format!("{file_name}: {err}"))`. Doc attributes
//! on variants and their fields pass through, keeping the generated enum
//! compliant with `missing_docs`.

macro_rules! define_port_error {
    (@ctor $variant:ident) => {
        ::paste::paste! {
            #[doc = "Builds [`Self::" $variant "`]."]
            pub fn [<$variant:snake>]() -> Self {
                Self::$variant
            }
        }
    };

    (@ctor $variant:ident { $($field:ident : $ty:ty),* $(,)? }) => {
        define_port_error!(@ctor_impl $variant () () $( $field : $ty, )*);
    };

    (@ctor_impl $variant:ident ($($params:tt)*) ($($inits:tt)*) ) => {
        ::paste::paste! {
            #[doc = "Builds [`Self::" $variant "`]."]
            pub fn [<$variant:snake>]($($params)*) -> Self {
                Self::$variant { $($inits)* }
            }
        }
    };

    (@ctor_impl $variant:ident ($($params:tt)*) ($($inits:tt)*) $field:ident : $ty:ty, $($rest:tt)*) => {
        define_port_error!(
            @ctor_impl
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
                $variant:ident $( { $($(#[$field_meta:meta])* $field:ident : $ty:ty),* $(,)? } )? => $message:expr
            ),* $(,)?
        }
    ) => {
        $(#[$outer])*
        #[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
        pub enum $name {
            $(
                $(#[$variant_meta])*
                #[error($message)]
                $variant $( { $($(#[$field_meta])* $field : $ty),* } )?,
            )*
        }

        impl $name {
            $(
                define_port_error!(@ctor $variant $( { $($field : $ty),* } )?);
            )*
        }
    };
}

pub(crate) use define_port_error;

#[cfg(test)]
mod tests {
    //! Regression coverage for the generated constructors.
    define_port_error! {
        /// Sample error used to exercise the macro.
        pub enum SamplePortError {
            /// Unit-like variant.
            Gone => "gone",
            /// Single string field.
            Read {
                /// Failure description.
                message: String,
            } => "read: {message}",
            /// Mixed field types.
            Slow {
                /// Failure description.
                message: String,
                /// Elapsed milliseconds.
                elapsed_ms: u64,
            } => "slow: {message} ({elapsed_ms} ms)",
        }
    }

    #[test]
    fn constructors_accept_str_for_string_fields() {
        let err = SamplePortError::read("disk unplugged");
        assert_eq!(err.to_string(), "read: disk unplugged");
    }

    #[test]
    fn constructors_preserve_non_string_types() {
        let err = SamplePortError::slow("timeout", 1500_u64);
        assert_eq!(err.to_string(), "slow: timeout (1500 ms)");
    }

    #[test]
    fn unit_variants_get_constructors() {
        assert_eq!(SamplePortError::gone(), SamplePortError::Gone);
    }
}
