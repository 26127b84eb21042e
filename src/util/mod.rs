//! Small cross-cutting helpers.

pub mod random;
