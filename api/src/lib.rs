//! HTTP boundary for the transcript-scoring platform.
//!
//! Route handlers own input validation, the transcript size cap, and
//! persistence of computed metrics; all scoring and diff computation is
//! delegated to the `scoring` crate. Authentication, audio storage, and
//! admin tooling are separate services and do not live here.

pub mod response;
pub mod routes;
pub mod state;
pub mod store;
