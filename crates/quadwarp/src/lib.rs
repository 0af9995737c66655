#![doc = include_str!(concat!("../", env!("CARGO_PKG_README")))]

#[doc(inline)]
pub use quadwarp_algebra as algebra;

#[doc(inline)]
pub use quadwarp_homography as homography;
