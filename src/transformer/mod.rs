//! Monad transformers that work over any monad.
//!
//! - [`EitherT<F, E>`]: adds a failure channel to `F`
//! - [`ReaderT<R, M>`] with brand [`ReaderTBrand<R, F>`]: adds a read-only
//!   environment to `F`
//!
//! Stacks are built by nesting brands. `ReaderTBrand<R, EitherT<IOBrand, E>>`
//! is a reader of an IO that may fail, with values of type
//! `ReaderT<R, IO<Result<A, E>>>`.

pub mod either_t;
pub mod reader_t;

pub use either_t::EitherT;
pub use reader_t::{ReaderT, ReaderTBrand};
