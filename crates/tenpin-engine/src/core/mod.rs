//! Validated bowling values.
//!
//! Every type in this module can only be built through a fallible constructor,
//! so scoring code downstream can treat its input as well-formed.

pub use self::{frame::*, game::*, roll::*};

pub(crate) mod frame;
pub(crate) mod game;
pub(crate) mod roll;
