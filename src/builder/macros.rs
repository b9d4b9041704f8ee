//! Macros for ergonomic state machine construction.

/// Generate a fieldless state enum together with its `State` implementation.
///
/// The generated enum derives `Clone`, `Copy`, `PartialEq`, `Eq`, `Hash`
/// and `Debug`. Attributes written above the enum are passed through, so
/// extra derives such as serde's can be added by the caller.
///
/// # Example
///
/// ```
/// use statewise::state_enum;
///
/// state_enum! {
///     pub enum ProcessState {
///         Started,
///         Paused,
///         Ended,
///         Crashed,
///     }
///     final: [Ended, Crashed]
///     error: [Crashed]
/// }
/// ```
#[macro_export]
macro_rules! state_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),* $(,)?
        }

        $(final: [$($final:ident),* $(,)?])?
        $(error: [$($error:ident),* $(,)?])?
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $name {
            /// Every variant, in declaration order.
            #[allow(dead_code)]
            pub const ALL: &'static [$name] = &[$(Self::$variant),*];
        }

        impl $crate::core::State for $name {
            fn name(&self) -> &str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }

            fn is_final(&self) -> bool {
                match self {
                    $($(Self::$final => true,)*)?
                    _ => false,
                }
            }

            fn is_error(&self) -> bool {
                match self {
                    $($(Self::$error => true,)*)?
                    _ => false,
                }
            }
        }
    };
}
