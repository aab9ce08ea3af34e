pub mod convex_hull;

#[doc(inline)]
pub use convex_hull::gift_wrapping::{anchor_index, convex_hull};
