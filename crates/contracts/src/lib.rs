//! Wire types shared by the hospitality dashboard frontend and the REST backend.

pub mod domain;
pub mod enums;
