//! Dashboard operations.
//!
//! Each operation takes the request context, runs the access guard, then
//! reads or writes the store. Denial handling follows one fixed policy:
//!
//! | operation                                  | on no access      |
//! |--------------------------------------------|-------------------|
//! | list calls / clients / tasks by call       | empty collection  |
//! | get call                                   | permission error  |
//! | generate summary, create/update task       | permission error  |
//! | create client, organization settings       | permission error  |
//!
//! List endpoints degrade to empty results so they cannot be used to probe
//! for existence; single-record and mutation endpoints already hold the id.

pub mod calls;
pub mod clients;
pub mod organizations;
pub mod tasks;
pub mod users;
