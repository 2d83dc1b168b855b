//! Reader - computations that read a shared environment.
//!
//! `Reader<R, A>` is [`ReaderT`] over [`Identity`]: a function `R -> A` whose
//! monad instance comes from [`ReaderBrand<R>`]. There is no separate
//! implementation to keep in sync with the transformer.
//!
//! # Laws
//!
//! Besides the monad laws, `local` and `ask` satisfy:
//!
//! - Local identity: `local(|r| r, m) == m`
//! - Local composition: `local(f, local(g, m)) == local(|r| g(f(r)), m)`
//! - Ask retrieval: `ask().run_reader(r) == r`
//!
//! # Examples
//!
//! ```rust
//! use kindred::effect::{Reader, ReaderBrand};
//! use kindred::typeclass::{Apply, Functor};
//!
//! #[derive(Clone)]
//! struct Config {
//!     port: u16,
//!     host: String,
//! }
//!
//! let port = Reader::from_fn(|config: Config| config.port);
//! let host = Reader::from_fn(|config: Config| config.host);
//! let address = ReaderBrand::<Config>::map2(host, port, |host, port| format!("{host}:{port}"));
//!
//! let config = Config { port: 8080, host: "localhost".into() };
//! assert_eq!(address.run_reader(config), "localhost:8080");
//! ```

use crate::transformer::{ReaderT, ReaderTBrand};
use crate::typeclass::{Identity, IdentityBrand};

/// A computation of `A` from an environment `R`.
pub type Reader<R, A> = ReaderT<R, Identity<A>>;

/// Brand for [`Reader`].
pub type ReaderBrand<R> = ReaderTBrand<R, IdentityBrand>;

impl<R: 'static, A: 'static> ReaderT<R, Identity<A>> {
    /// Creates a reader from a plain function of the environment.
    pub fn from_fn<F>(function: F) -> Self
    where
        F: Fn(R) -> A + 'static,
    {
        Self::new(move |environment| Identity(function(environment)))
    }

    /// Runs the reader and unwraps the [`Identity`].
    #[inline]
    pub fn run_reader(&self, environment: R) -> A {
        self.run(environment).into_inner()
    }
}
