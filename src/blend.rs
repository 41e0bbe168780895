//! Typed blend state over the GL blend tokens.

#[cfg(test)]
mod tests;

use crate::gl::{
    GlApiError,
    ext::{GL_MAX, GL_MIN, GlExt},
    sys::{
        GL_CONSTANT_ALPHA, GL_CONSTANT_COLOR, GL_DST_ALPHA, GL_DST_COLOR, GL_FUNC_ADD,
        GL_FUNC_REVERSE_SUBTRACT, GL_FUNC_SUBTRACT, GL_ONE, GL_ONE_MINUS_CONSTANT_ALPHA,
        GL_ONE_MINUS_CONSTANT_COLOR, GL_ONE_MINUS_DST_ALPHA, GL_ONE_MINUS_DST_COLOR,
        GL_ONE_MINUS_SRC_ALPHA, GL_ONE_MINUS_SRC_COLOR, GL_SRC_ALPHA, GL_SRC_ALPHA_SATURATE,
        GL_SRC_COLOR, GL_ZERO, GLenum, glBlendColor, glBlendEquationSeparate, glBlendFuncSeparate,
    },
};

/// How source and destination colors are combined.
///
/// `Min` and `Max` map to the GL3-era tokens and need
/// `GL_EXT_blend_minmax` on an ES 2.0 context.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum BlendEquation {
    FuncAdd,
    FuncSubtract,
    FuncReverseSubtract,
    Min,
    Max,
}

impl BlendEquation {
    pub fn to_gl(self) -> GLenum {
        match self {
            BlendEquation::FuncAdd => GL_FUNC_ADD,
            BlendEquation::FuncSubtract => GL_FUNC_SUBTRACT,
            BlendEquation::FuncReverseSubtract => GL_FUNC_REVERSE_SUBTRACT,
            BlendEquation::Min => GL_MIN,
            BlendEquation::Max => GL_MAX,
        }
    }

    pub fn from_gl(value: GLenum) -> Option<Self> {
        let eq = match value {
            GL_FUNC_ADD => BlendEquation::FuncAdd,
            GL_FUNC_SUBTRACT => BlendEquation::FuncSubtract,
            GL_FUNC_REVERSE_SUBTRACT => BlendEquation::FuncReverseSubtract,
            GL_MIN => BlendEquation::Min,
            GL_MAX => BlendEquation::Max,
            _ => return None,
        };
        Some(eq)
    }

    pub fn from_name(name: &str) -> Result<Self, GlApiError> {
        let eq = match name {
            "func_add" => BlendEquation::FuncAdd,
            "func_subtract" => BlendEquation::FuncSubtract,
            "func_reverse_subtract" => BlendEquation::FuncReverseSubtract,
            "min" => BlendEquation::Min,
            "max" => BlendEquation::Max,
            _ => return Err(GlApiError::UnknownBlendEquation(name.to_string())),
        };
        Ok(eq)
    }

    pub fn name(self) -> &'static str {
        match self {
            BlendEquation::FuncAdd => "func_add",
            BlendEquation::FuncSubtract => "func_subtract",
            BlendEquation::FuncReverseSubtract => "func_reverse_subtract",
            BlendEquation::Min => "min",
            BlendEquation::Max => "max",
        }
    }

    pub fn is_available(self, exts: GlExt) -> bool {
        match self {
            BlendEquation::Min | BlendEquation::Max => exts.contains(GlExt::EXT_BLEND_MINMAX),
            _ => true,
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum BlendFactor {
    Zero,
    One,
    SrcColor,
    OneMinusSrcColor,
    DstColor,
    OneMinusDstColor,
    SrcAlpha,
    OneMinusSrcAlpha,
    DstAlpha,
    OneMinusDstAlpha,
    ConstantColor,
    OneMinusConstantColor,
    ConstantAlpha,
    OneMinusConstantAlpha,
    SrcAlphaSaturate,
}

impl BlendFactor {
    pub fn to_gl(self) -> GLenum {
        match self {
            BlendFactor::Zero => GL_ZERO,
            BlendFactor::One => GL_ONE,
            BlendFactor::SrcColor => GL_SRC_COLOR,
            BlendFactor::OneMinusSrcColor => GL_ONE_MINUS_SRC_COLOR,
            BlendFactor::DstColor => GL_DST_COLOR,
            BlendFactor::OneMinusDstColor => GL_ONE_MINUS_DST_COLOR,
            BlendFactor::SrcAlpha => GL_SRC_ALPHA,
            BlendFactor::OneMinusSrcAlpha => GL_ONE_MINUS_SRC_ALPHA,
            BlendFactor::DstAlpha => GL_DST_ALPHA,
            BlendFactor::OneMinusDstAlpha => GL_ONE_MINUS_DST_ALPHA,
            BlendFactor::ConstantColor => GL_CONSTANT_COLOR,
            BlendFactor::OneMinusConstantColor => GL_ONE_MINUS_CONSTANT_COLOR,
            BlendFactor::ConstantAlpha => GL_CONSTANT_ALPHA,
            BlendFactor::OneMinusConstantAlpha => GL_ONE_MINUS_CONSTANT_ALPHA,
            BlendFactor::SrcAlphaSaturate => GL_SRC_ALPHA_SATURATE,
        }
    }

    pub fn from_name(name: &str) -> Result<Self, GlApiError> {
        let factor = match name {
            "zero" => BlendFactor::Zero,
            "one" => BlendFactor::One,
            "src_color" => BlendFactor::SrcColor,
            "one_minus_src_color" => BlendFactor::OneMinusSrcColor,
            "dst_color" => BlendFactor::DstColor,
            "one_minus_dst_color" => BlendFactor::OneMinusDstColor,
            "src_alpha" => BlendFactor::SrcAlpha,
            "one_minus_src_alpha" => BlendFactor::OneMinusSrcAlpha,
            "dst_alpha" => BlendFactor::DstAlpha,
            "one_minus_dst_alpha" => BlendFactor::OneMinusDstAlpha,
            "constant_color" => BlendFactor::ConstantColor,
            "one_minus_constant_color" => BlendFactor::OneMinusConstantColor,
            "constant_alpha" => BlendFactor::ConstantAlpha,
            "one_minus_constant_alpha" => BlendFactor::OneMinusConstantAlpha,
            "src_alpha_saturate" => BlendFactor::SrcAlphaSaturate,
            _ => return Err(GlApiError::UnknownBlendFactor(name.to_string())),
        };
        Ok(factor)
    }

    pub fn name(self) -> &'static str {
        match self {
            BlendFactor::Zero => "zero",
            BlendFactor::One => "one",
            BlendFactor::SrcColor => "src_color",
            BlendFactor::OneMinusSrcColor => "one_minus_src_color",
            BlendFactor::DstColor => "dst_color",
            BlendFactor::OneMinusDstColor => "one_minus_dst_color",
            BlendFactor::SrcAlpha => "src_alpha",
            BlendFactor::OneMinusSrcAlpha => "one_minus_src_alpha",
            BlendFactor::DstAlpha => "dst_alpha",
            BlendFactor::OneMinusDstAlpha => "one_minus_dst_alpha",
            BlendFactor::ConstantColor => "constant_color",
            BlendFactor::OneMinusConstantColor => "one_minus_constant_color",
            BlendFactor::ConstantAlpha => "constant_alpha",
            BlendFactor::OneMinusConstantAlpha => "one_minus_constant_alpha",
            BlendFactor::SrcAlphaSaturate => "src_alpha_saturate",
        }
    }
}

/// The full blend configuration of a context, with separate RGB and alpha
/// halves. `default()` is the initial GL state.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct BlendState {
    pub equation_rgb: BlendEquation,
    pub equation_alpha: BlendEquation,
    pub src_rgb: BlendFactor,
    pub dst_rgb: BlendFactor,
    pub src_alpha: BlendFactor,
    pub dst_alpha: BlendFactor,
    pub color: [f32; 4],
}

impl Default for BlendState {
    fn default() -> Self {
        Self {
            equation_rgb: BlendEquation::FuncAdd,
            equation_alpha: BlendEquation::FuncAdd,
            src_rgb: BlendFactor::One,
            dst_rgb: BlendFactor::Zero,
            src_alpha: BlendFactor::One,
            dst_alpha: BlendFactor::Zero,
            color: [0.0, 0.0, 0.0, 0.0],
        }
    }
}

impl BlendState {
    pub fn is_available(&self, exts: GlExt) -> bool {
        self.equation_rgb.is_available(exts) && self.equation_alpha.is_available(exts)
    }

    /// Issues the blend state to the current context. The caller must have
    /// initialized the API and made a context current.
    pub unsafe fn apply(&self) {
        unsafe {
            glBlendEquationSeparate(self.equation_rgb.to_gl(), self.equation_alpha.to_gl());
            glBlendFuncSeparate(
                self.src_rgb.to_gl(),
                self.dst_rgb.to_gl(),
                self.src_alpha.to_gl(),
                self.dst_alpha.to_gl(),
            );
            glBlendColor(self.color[0], self.color[1], self.color[2], self.color[3]);
        }
    }
}
