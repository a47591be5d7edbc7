//! Arena Range Types
//!
//! Compact `start`/`len` views into the arena's flat lists.

/// Defines a range type over one of the arena's flat lists.
///
/// Each generated type has `start`/`len` fields, an `EMPTY` constant,
/// `new()`, `is_empty()`, `len()`, `indices()`, and a `Debug` impl showing
/// the range as `TypeName(start..end)`.
macro_rules! define_range {
    ($($name:ident),* $(,)?) => { $(
        #[derive(Copy, Clone, Eq, PartialEq, Hash, Default)]
        pub struct $name {
            pub start: u32,
            pub len: u32,
        }

        impl $name {
            pub const EMPTY: Self = Self { start: 0, len: 0 };

            #[inline]
            pub const fn new(start: u32, len: u32) -> Self {
                Self { start, len }
            }

            #[inline]
            pub const fn is_empty(&self) -> bool {
                self.len == 0
            }

            #[inline]
            pub const fn len(&self) -> usize {
                self.len as usize
            }

            /// Positions in the backing list covered by this range.
            #[inline]
            pub fn indices(&self) -> ::std::ops::Range<usize> {
                let start = self.start as usize;
                start..start + self.len()
            }
        }

        impl ::std::fmt::Debug for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                write!(f, "{}({}..{})", stringify!($name), self.start, self.start + self.len)
            }
        }
    )* };
}

define_range!(StmtRange, CaseRange, GuardRange);
