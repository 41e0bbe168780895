use crate::{
    blend::{BlendEquation, BlendFactor, BlendState},
    gl::{
        GlApiError,
        ext::{GL_MAX, GL_MIN, GlExt},
        sys::{GL_FUNC_ADD, GL_ONE, GL_SRC_ALPHA, GL_ZERO},
    },
};

#[test]
fn equation_names_round_trip() {
    let equations = [
        BlendEquation::FuncAdd,
        BlendEquation::FuncSubtract,
        BlendEquation::FuncReverseSubtract,
        BlendEquation::Min,
        BlendEquation::Max,
    ];
    for eq in equations {
        assert_eq!(BlendEquation::from_name(eq.name()).unwrap(), eq);
        assert_eq!(BlendEquation::from_gl(eq.to_gl()), Some(eq));
    }
}

#[test]
fn min_max_map_to_extension_tokens() {
    assert_eq!(BlendEquation::Min.to_gl(), GL_MIN);
    assert_eq!(BlendEquation::Max.to_gl(), GL_MAX);
    assert_eq!(BlendEquation::Min.to_gl(), 0x8007);
    assert_eq!(BlendEquation::Max.to_gl(), 0x8008);
    assert_eq!(BlendEquation::from_gl(0x8007), Some(BlendEquation::Min));
    assert_eq!(BlendEquation::from_gl(0x8008), Some(BlendEquation::Max));
}

#[test]
fn min_max_require_the_extension() {
    assert!(!BlendEquation::Min.is_available(GlExt::empty()));
    assert!(!BlendEquation::Max.is_available(GlExt::OES_TEXTURE_FLOAT));
    assert!(BlendEquation::Min.is_available(GlExt::EXT_BLEND_MINMAX));
    assert!(BlendEquation::Max.is_available(GlExt::all()));
    assert!(BlendEquation::FuncAdd.is_available(GlExt::empty()));
    assert!(BlendEquation::FuncReverseSubtract.is_available(GlExt::empty()));
}

#[test]
fn unknown_equation_is_reported() {
    match BlendEquation::from_name("darken") {
        Err(GlApiError::UnknownBlendEquation(name)) => assert_eq!(name, "darken"),
        res => panic!("unexpected result: {:?}", res.map(|e| e.name())),
    }
}

#[test]
fn factor_names_round_trip() {
    let factors = [
        BlendFactor::Zero,
        BlendFactor::One,
        BlendFactor::SrcColor,
        BlendFactor::OneMinusSrcColor,
        BlendFactor::DstColor,
        BlendFactor::OneMinusDstColor,
        BlendFactor::SrcAlpha,
        BlendFactor::OneMinusSrcAlpha,
        BlendFactor::DstAlpha,
        BlendFactor::OneMinusDstAlpha,
        BlendFactor::ConstantColor,
        BlendFactor::OneMinusConstantColor,
        BlendFactor::ConstantAlpha,
        BlendFactor::OneMinusConstantAlpha,
        BlendFactor::SrcAlphaSaturate,
    ];
    for factor in factors {
        assert_eq!(BlendFactor::from_name(factor.name()).unwrap(), factor);
    }
    assert_eq!(BlendFactor::SrcAlpha.to_gl(), GL_SRC_ALPHA);
    assert!(BlendFactor::from_name("source_alpha").is_err());
}

#[test]
fn default_is_the_initial_gl_state() {
    let state = BlendState::default();
    assert_eq!(state.equation_rgb.to_gl(), GL_FUNC_ADD);
    assert_eq!(state.equation_alpha.to_gl(), GL_FUNC_ADD);
    assert_eq!(state.src_rgb.to_gl(), GL_ONE);
    assert_eq!(state.dst_rgb.to_gl(), GL_ZERO);
    assert_eq!(state.color, [0.0; 4]);
    assert!(state.is_available(GlExt::empty()));
}

#[test]
fn min_max_state_needs_the_extension() {
    let state = BlendState {
        equation_rgb: BlendEquation::Max,
        ..Default::default()
    };
    assert!(!state.is_available(GlExt::empty()));
    assert!(state.is_available(GlExt::EXT_BLEND_MINMAX));
}
