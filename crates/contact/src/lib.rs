mod error;
mod form;
mod intake;
mod types;
mod value_object;
mod workflow;

pub use error::*;
pub use form::*;
pub use intake::*;
pub use types::*;
pub use value_object::*;
pub use workflow::*;
