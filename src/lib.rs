pub use crate::optional::Optional;

mod optional;
#[cfg(feature = "serde")]
mod serde;
