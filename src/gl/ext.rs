use {
    crate::{
        gl::{
            Backend,
            sys::{GL_EXTENSIONS, GLenum, glGetString},
        },
        tokens::Token,
    },
    ahash::AHashSet,
    bstr::ByteSlice,
    std::{ffi::CStr, ops::BitOrAssign, str},
    uapi::c,
};

// GL3-era blend equation modes. Not part of the strict ES 2.0 token set;
// usable on ES 2.0 only with `GL_EXT_blend_minmax`.
pub const GL_MIN: GLenum = 0x8007;
pub const GL_MAX: GLenum = 0x8008;

pub static EXT_TOKENS: &[Token] = &[
    Token {
        name: "GL_MIN",
        value: GL_MIN,
        requires: Some(GlExt::EXT_BLEND_MINMAX),
    },
    Token {
        name: "GL_MAX",
        value: GL_MAX,
        requires: Some(GlExt::EXT_BLEND_MINMAX),
    },
];

pub fn parse_extension_string(ext: &[u8]) -> AHashSet<String> {
    let mut res = AHashSet::new();
    for part in ext.split_str(" ") {
        let name = part.trim();
        if name.len() > 0 {
            if let Ok(s) = str::from_utf8(name) {
                res.insert(s.to_string());
            }
        }
    }
    res
}

unsafe fn get_extensions(ext: *const c::c_char) -> Option<AHashSet<String>> {
    if ext.is_null() {
        return None;
    }
    let ext = unsafe { CStr::from_ptr(ext) };
    Some(parse_extension_string(ext.to_bytes()))
}

fn get_typed_ext<T>(exts: &AHashSet<String>, mut base: T, map: &[(&str, T)]) -> T
where
    T: BitOrAssign + Copy,
{
    for (name, ext) in map.iter().copied() {
        if exts.contains(name) {
            base |= ext;
        }
    }
    base
}

bitflags::bitflags! {
    #[derive(Copy, Clone, Debug, Eq, PartialEq)]
    pub struct GlExt: u32 {
        const EXT_BLEND_MINMAX          = 1 << 0;
        const OES_ELEMENT_INDEX_UINT    = 1 << 1;
        const OES_STANDARD_DERIVATIVES  = 1 << 2;
        const OES_TEXTURE_FLOAT         = 1 << 3;
        const OES_TEXTURE_HALF_FLOAT    = 1 << 4;
    }
}

pub fn get_gl_ext() -> GlExt {
    let map = [
        ("GL_EXT_blend_minmax", GlExt::EXT_BLEND_MINMAX),
        ("GL_OES_element_index_uint", GlExt::OES_ELEMENT_INDEX_UINT),
        (
            "GL_OES_standard_derivatives",
            GlExt::OES_STANDARD_DERIVATIVES,
        ),
        ("GL_OES_texture_float", GlExt::OES_TEXTURE_FLOAT),
        ("GL_OES_texture_half_float", GlExt::OES_TEXTURE_HALF_FLOAT),
    ];
    // Blend min/max is core desktop GL since 1.4, so drivers need not
    // advertise the extension string there.
    let base = match crate::gl::backend() {
        Some(Backend::Desktop) => GlExt::EXT_BLEND_MINMAX,
        _ => GlExt::empty(),
    };
    match unsafe { get_extensions(glGetString(GL_EXTENSIONS) as _) } {
        Some(exts) => get_typed_ext(&exts, base, &map),
        _ => base,
    }
}

#[test]
fn parse_splits_on_spaces() {
    let exts = parse_extension_string(b"GL_EXT_blend_minmax GL_OES_texture_float");
    assert!(exts.contains("GL_EXT_blend_minmax"));
    assert!(exts.contains("GL_OES_texture_float"));
    assert_eq!(exts.len(), 2);
}

#[test]
fn parse_handles_padding() {
    let exts = parse_extension_string(b"  GL_EXT_blend_minmax   GL_OES_texture_float \n");
    assert!(exts.contains("GL_EXT_blend_minmax"));
    assert!(exts.contains("GL_OES_texture_float"));
    assert_eq!(exts.len(), 2);
}

#[test]
fn parse_empty() {
    assert!(parse_extension_string(b"").is_empty());
    assert!(parse_extension_string(b"   ").is_empty());
}

#[test]
fn folds_known_extensions() {
    let exts = parse_extension_string(b"GL_EXT_blend_minmax GL_OES_element_index_uint GL_EXT_sRGB");
    let map = [
        ("GL_EXT_blend_minmax", GlExt::EXT_BLEND_MINMAX),
        ("GL_OES_element_index_uint", GlExt::OES_ELEMENT_INDEX_UINT),
        ("GL_OES_texture_float", GlExt::OES_TEXTURE_FLOAT),
    ];
    let flags = get_typed_ext(&exts, GlExt::empty(), &map);
    assert_eq!(
        flags,
        GlExt::EXT_BLEND_MINMAX | GlExt::OES_ELEMENT_INDEX_UINT
    );
}
