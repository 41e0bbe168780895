pub mod ext;
pub mod sys;

use {
    crate::{
        gl::{
            ext::GlExt,
            sys::{
                GL_NO_ERROR, GL_RENDERER, GL_SHADING_LANGUAGE_VERSION, GL_VENDOR, GL_VERSION,
                GLenum, GlFns,
            },
        },
        tokens,
    },
    libloading::Library,
    once_cell::sync::OnceCell,
    std::ffi::CStr,
    thiserror::Error,
    uapi::c,
};

#[derive(Debug, Error)]
pub enum GlApiError {
    #[error("Could not load the {0} library")]
    LoadLibrary(&'static str, #[source] libloading::Error),
    #[error("GL library does not export `{0}`")]
    MissingSymbol(&'static str),
    #[error("The GL API has already been initialized")]
    AlreadyInitialized,
    #[error("`glGetString({0})` returned NULL")]
    GetString(&'static str),
    #[error("GL error(s) during {context}: {errors}")]
    GlErrors { context: String, errors: String },
    #[error("Unknown blend equation `{0}`")]
    UnknownBlendEquation(String),
    #[error("Unknown blend factor `{0}`")]
    UnknownBlendFactor(String),
}

/// The system library that provides the GL ES 2.0 symbol set.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Backend {
    GlEs2,
    Desktop,
}

impl Backend {
    pub fn name(self) -> &'static str {
        match self {
            Backend::GlEs2 => "GLESv2",
            Backend::Desktop => "GL",
        }
    }

    fn library_names(self) -> &'static [&'static str] {
        match self {
            Backend::GlEs2 => &["libGLESv2.so.2", "libGLESv2.so"],
            Backend::Desktop => &["libGL.so.1", "libGL.so"],
        }
    }
}

struct Loaded {
    backend: Backend,
    fns: GlFns,
    _lib: Library,
}

static GL: OnceCell<Loaded> = OnceCell::new();

/// Loads the GL library of `backend` and resolves the ES 2.0 symbol set.
///
/// The backend is bound for the lifetime of the process. Resolved function
/// pointers escape into callers, so a second `init` with a different backend
/// cannot be honored and reports `AlreadyInitialized`.
pub fn init(backend: Backend) -> Result<(), GlApiError> {
    if GL.get().is_some() {
        return Err(GlApiError::AlreadyInitialized);
    }
    let names = backend.library_names();
    for (i, name) in names.iter().enumerate() {
        let lib = match unsafe { Library::new(*name) } {
            Ok(l) => l,
            Err(e) => {
                if i + 1 == names.len() {
                    return Err(GlApiError::LoadLibrary(backend.name(), e));
                }
                log::debug!("Could not load {}: {}", name, e);
                continue;
            }
        };
        let fns = GlFns::load(&lib)?;
        if GL
            .set(Loaded {
                backend,
                fns,
                _lib: lib,
            })
            .is_err()
        {
            return Err(GlApiError::AlreadyInitialized);
        }
        log::debug!("Loaded the {} API from {}", backend.name(), name);
        return Ok(());
    }
    unreachable!();
}

pub(crate) fn fns() -> &'static GlFns {
    match GL.get() {
        Some(l) => &l.fns,
        _ => panic!("the GL API has not been initialized"),
    }
}

pub fn backend() -> Option<Backend> {
    GL.get().map(|l| l.backend)
}

pub fn is_initialized() -> bool {
    GL.get().is_some()
}

/// Drains `glGetError` and reports all pending error tokens by name.
pub fn check_error(context: &str) -> Result<(), GlApiError> {
    let mut errors = Vec::new();
    // Drivers with broken error latching would otherwise keep us here forever.
    while errors.len() < 32 {
        let error = unsafe { sys::glGetError() };
        if error == GL_NO_ERROR {
            break;
        }
        match tokens::token_name(error) {
            Some(name) => errors.push(name.to_string()),
            _ => errors.push(format!("0x{:04X}", error)),
        }
    }
    if errors.is_empty() {
        return Ok(());
    }
    Err(GlApiError::GlErrors {
        context: context.to_string(),
        errors: errors.join(", "),
    })
}

/// Identification strings and the detected extension set of the current
/// context.
#[derive(Clone, Debug)]
pub struct GlInfo {
    pub vendor: String,
    pub renderer: String,
    pub version: String,
    pub shading_language_version: String,
    pub extensions: GlExt,
}

pub fn current_info() -> Result<GlInfo, GlApiError> {
    Ok(GlInfo {
        vendor: get_string(GL_VENDOR)?,
        renderer: get_string(GL_RENDERER)?,
        version: get_string(GL_VERSION)?,
        shading_language_version: get_string(GL_SHADING_LANGUAGE_VERSION)?,
        extensions: ext::get_gl_ext(),
    })
}

fn get_string(name: GLenum) -> Result<String, GlApiError> {
    let s = unsafe { sys::glGetString(name) };
    if s.is_null() {
        return Err(GlApiError::GetString(
            tokens::token_name(name).unwrap_or("unknown"),
        ));
    }
    let s = unsafe { CStr::from_ptr(s as *const c::c_char) };
    Ok(s.to_string_lossy().into_owned())
}
