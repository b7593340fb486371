//! Levelled assertions. Cheap checks are always on; the expensive ones (such as re-running every
//! propagator after a fixpoint) only run with the `debug-checks` feature.

#[cfg(all(not(test), not(feature = "debug-checks")))]
pub const CALABASH_ASSERT_LEVEL_DEFINITION: u8 = CALABASH_ASSERT_SIMPLE;

#[cfg(all(test, not(feature = "debug-checks")))]
pub const CALABASH_ASSERT_LEVEL_DEFINITION: u8 = CALABASH_ASSERT_MODERATE;

#[cfg(feature = "debug-checks")]
pub const CALABASH_ASSERT_LEVEL_DEFINITION: u8 = CALABASH_ASSERT_EXTREME;

pub const CALABASH_ASSERT_SIMPLE: u8 = 1;
pub const CALABASH_ASSERT_MODERATE: u8 = 2;
pub const CALABASH_ASSERT_EXTREME: u8 = 3;

#[macro_export]
#[doc(hidden)]
macro_rules! calabash_assert_simple {
    ($($arg:tt)*) => {
        if $crate::asserts::CALABASH_ASSERT_LEVEL_DEFINITION >= $crate::asserts::CALABASH_ASSERT_SIMPLE {
            assert!($($arg)*);
        }
    };
}

#[macro_export]
#[doc(hidden)]
macro_rules! calabash_assert_eq_simple {
    ($($arg:tt)*) => {
        if $crate::asserts::CALABASH_ASSERT_LEVEL_DEFINITION >= $crate::asserts::CALABASH_ASSERT_SIMPLE {
            assert_eq!($($arg)*);
        }
    };
}

#[macro_export]
#[doc(hidden)]
macro_rules! calabash_assert_moderate {
    ($($arg:tt)*) => {
        if $crate::asserts::CALABASH_ASSERT_LEVEL_DEFINITION >= $crate::asserts::CALABASH_ASSERT_MODERATE {
            assert!($($arg)*);
        }
    };
}

/// Returns whether the checks of the extreme level are enabled; used to guard checks which need
/// more than a single expression.
#[macro_export]
#[doc(hidden)]
macro_rules! calabash_extreme_checks_enabled {
    () => {
        $crate::asserts::CALABASH_ASSERT_LEVEL_DEFINITION >= $crate::asserts::CALABASH_ASSERT_EXTREME
    };
}
