// Application layer: the ledger service and the operation routing the host
// talks to.

pub mod error;
pub mod operation;
pub mod service;

pub use error::*;
pub use operation::*;
pub use service::*;
