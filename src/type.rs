use std::fmt::{Debug, Display};

use num_traits::{Bounded, Num, NumCast, ToPrimitive};

/// A trait for types that can be used as point coordinates.
///
/// This trait is sealed and cannot be implemented for external types. Every implementor is a
/// plain `Copy` number with a `Default` (zero), which is what lets [`Point`][crate::kdtree::Point]
/// keep small coordinate arrays inline.
pub trait IndexableNum:
    private::Sealed
    + Num
    + NumCast
    + ToPrimitive
    + PartialOrd
    + Copy
    + Default
    + Debug
    + Display
    + Send
    + Sync
    + Bounded
{
    /// Human readable name of the coordinate type
    const TYPE_NAME: &'static str;
}

impl IndexableNum for i8 {
    const TYPE_NAME: &'static str = "i8";
}

impl IndexableNum for u8 {
    const TYPE_NAME: &'static str = "u8";
}

impl IndexableNum for i16 {
    const TYPE_NAME: &'static str = "i16";
}

impl IndexableNum for u16 {
    const TYPE_NAME: &'static str = "u16";
}

impl IndexableNum for i32 {
    const TYPE_NAME: &'static str = "i32";
}

impl IndexableNum for u32 {
    const TYPE_NAME: &'static str = "u32";
}

impl IndexableNum for i64 {
    const TYPE_NAME: &'static str = "i64";
}

impl IndexableNum for u64 {
    const TYPE_NAME: &'static str = "u64";
}

impl IndexableNum for f32 {
    const TYPE_NAME: &'static str = "f32";
}

impl IndexableNum for f64 {
    const TYPE_NAME: &'static str = "f64";
}

// https://rust-lang.github.io/api-guidelines/future-proofing.html#sealed-traits-protect-against-downstream-implementations-c-sealed
mod private {
    pub trait Sealed {}

    impl Sealed for i8 {}
    impl Sealed for u8 {}
    impl Sealed for i16 {}
    impl Sealed for u16 {}
    impl Sealed for i32 {}
    impl Sealed for u32 {}
    impl Sealed for i64 {}
    impl Sealed for u64 {}
    impl Sealed for f32 {}
    impl Sealed for f64 {}
}
