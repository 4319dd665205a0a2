//! Macros for ergonomic state machine construction.

/// Declare a unit enum usable as a state or event type.
///
/// Derives everything [`State`](crate::core::State) and
/// [`Event`](crate::core::Event) require, plus serde support so the enum can
/// appear in a [`Topology`](crate::topology::Topology). Also generates `ALL`
/// (every variant, in declaration order) and `name()`.
///
/// The serde derives go through this crate's own serde, so callers do not
/// need a direct serde dependency.
///
/// # Example
///
/// ```
/// use transit::state_enum;
///
/// state_enum! {
///     pub enum PaymentState {
///         Created,
///         Pending,
///         Settled,
///     }
/// }
///
/// assert_eq!(PaymentState::ALL.len(), 3);
/// assert_eq!(PaymentState::Pending.name(), "Pending");
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
    ) => {
        $(#[$meta])*
        #[derive(
            Clone,
            Copy,
            PartialEq,
            Eq,
            Hash,
            Debug,
            $crate::__private::serde::Serialize,
            $crate::__private::serde::Deserialize,
        )]
        #[serde(crate = "transit::__private::serde")]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        #[allow(dead_code)]
        impl $name {
            /// Every variant, in declaration order.
            pub const ALL: &'static [Self] = &[$(Self::$variant),*];

            /// The variant's name.
            pub fn name(&self) -> &'static str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }
        }
    };
}
