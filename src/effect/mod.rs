//! Concrete effects that instantiate the type classes.
//!
//! - [`IO`]: a deferred, re-runnable side-effecting computation
//! - [`Reader`]: a computation reading an environment (`ReaderT` over
//!   `Identity`, requires the `transformer` feature)
//!
//! These carry only the algebra; there is no scheduling, resource handling
//! or error recovery here.

mod io;
#[cfg(feature = "transformer")]
mod reader;

#[cfg(feature = "laws")]
pub use io::equivalence;
pub use io::{IO, IOBrand};
#[cfg(feature = "transformer")]
pub use reader::{Reader, ReaderBrand};
