//! Cross-cutting helpers shared by every layer

pub mod errors;
pub mod shutdown;
pub mod time;
