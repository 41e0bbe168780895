//! The GL ES 2.0 API surface, loaded at runtime from the system GL library,
//! plus the GL3-era blend equation tokens `GL_MIN` and `GL_MAX` exposed as
//! extension tokens on top of the strict ES 2.0 set.

#[macro_use]
mod macros;

pub mod blend;
pub mod gl;
pub mod tokens;

pub use gl::{Backend, GlApiError, GlInfo, check_error, current_info, init, is_initialized};
