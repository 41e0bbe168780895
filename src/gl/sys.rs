pub use uapi::c;

pub type GLbitfield = c::c_uint;
pub type GLboolean = c::c_uchar;
pub type GLbyte = i8;
pub type GLchar = c::c_char;
pub type GLclampf = f32;
pub type GLenum = c::c_uint;
pub type GLfixed = i32;
pub type GLfloat = f32;
pub type GLint = c::c_int;
pub type GLintptr = isize;
pub type GLshort = i16;
pub type GLsizei = c::c_int;
pub type GLsizeiptr = isize;
pub type GLubyte = u8;
pub type GLuint = c::c_uint;
pub type GLushort = u16;

pub const GL_FALSE: GLboolean = 0;
pub const GL_TRUE: GLboolean = 1;

pub static BOOL_TOKENS: &[crate::tokens::Token] = &[
    crate::tokens::Token {
        name: "GL_FALSE",
        value: GL_FALSE as GLenum,
        requires: None,
    },
    crate::tokens::Token {
        name: "GL_TRUE",
        value: GL_TRUE as GLenum,
        requires: None,
    },
];

tokens! {
    CORE_TOKENS:
    GL_ACTIVE_ATTRIBUTES = 0x8B89,
    GL_ACTIVE_ATTRIBUTE_MAX_LENGTH = 0x8B8A,
    GL_ACTIVE_TEXTURE = 0x84E0,
    GL_ACTIVE_UNIFORMS = 0x8B86,
    GL_ACTIVE_UNIFORM_MAX_LENGTH = 0x8B87,
    GL_ALIASED_LINE_WIDTH_RANGE = 0x846E,
    GL_ALIASED_POINT_SIZE_RANGE = 0x846D,
    GL_ALPHA = 0x1906,
    GL_ALPHA_BITS = 0x0D55,
    GL_ALWAYS = 0x0207,
    GL_ARRAY_BUFFER = 0x8892,
    GL_ARRAY_BUFFER_BINDING = 0x8894,
    GL_ATTACHED_SHADERS = 0x8B85,
    GL_BACK = 0x0405,
    GL_BLEND = 0x0BE2,
    GL_BLEND_COLOR = 0x8005,
    GL_BLEND_DST_ALPHA = 0x80CA,
    GL_BLEND_DST_RGB = 0x80C8,
    GL_BLEND_EQUATION = 0x8009,
    GL_BLEND_EQUATION_ALPHA = 0x883D,
    GL_BLEND_EQUATION_RGB = 0x8009,
    GL_BLEND_SRC_ALPHA = 0x80CB,
    GL_BLEND_SRC_RGB = 0x80C9,
    GL_BLUE_BITS = 0x0D54,
    GL_BOOL = 0x8B56,
    GL_BOOL_VEC2 = 0x8B57,
    GL_BOOL_VEC3 = 0x8B58,
    GL_BOOL_VEC4 = 0x8B59,
    GL_BUFFER_SIZE = 0x8764,
    GL_BUFFER_USAGE = 0x8765,
    GL_BYTE = 0x1400,
    GL_CCW = 0x0901,
    GL_CLAMP_TO_EDGE = 0x812F,
    GL_COLOR_ATTACHMENT0 = 0x8CE0,
    GL_COLOR_BUFFER_BIT = 0x00004000,
    GL_COLOR_CLEAR_VALUE = 0x0C22,
    GL_COLOR_WRITEMASK = 0x0C23,
    GL_COMPILE_STATUS = 0x8B81,
    GL_COMPRESSED_TEXTURE_FORMATS = 0x86A3,
    GL_CONSTANT_ALPHA = 0x8003,
    GL_CONSTANT_COLOR = 0x8001,
    GL_CULL_FACE = 0x0B44,
    GL_CULL_FACE_MODE = 0x0B45,
    GL_CURRENT_PROGRAM = 0x8B8D,
    GL_CURRENT_VERTEX_ATTRIB = 0x8626,
    GL_CW = 0x0900,
    GL_DECR = 0x1E03,
    GL_DECR_WRAP = 0x8508,
    GL_DELETE_STATUS = 0x8B80,
    GL_DEPTH_ATTACHMENT = 0x8D00,
    GL_DEPTH_BITS = 0x0D56,
    GL_DEPTH_BUFFER_BIT = 0x00000100,
    GL_DEPTH_CLEAR_VALUE = 0x0B73,
    GL_DEPTH_COMPONENT = 0x1902,
    GL_DEPTH_COMPONENT16 = 0x81A5,
    GL_DEPTH_FUNC = 0x0B74,
    GL_DEPTH_RANGE = 0x0B70,
    GL_DEPTH_TEST = 0x0B71,
    GL_DEPTH_WRITEMASK = 0x0B72,
    GL_DITHER = 0x0BD0,
    GL_DONT_CARE = 0x1100,
    GL_DST_ALPHA = 0x0304,
    GL_DST_COLOR = 0x0306,
    GL_DYNAMIC_DRAW = 0x88E8,
    GL_ELEMENT_ARRAY_BUFFER = 0x8893,
    GL_ELEMENT_ARRAY_BUFFER_BINDING = 0x8895,
    GL_EQUAL = 0x0202,
    GL_ES_VERSION_2_0 = 1,
    GL_EXTENSIONS = 0x1F03,
    GL_FASTEST = 0x1101,
    GL_FIXED = 0x140C,
    GL_FLOAT = 0x1406,
    GL_FLOAT_MAT2 = 0x8B5A,
    GL_FLOAT_MAT3 = 0x8B5B,
    GL_FLOAT_MAT4 = 0x8B5C,
    GL_FLOAT_VEC2 = 0x8B50,
    GL_FLOAT_VEC3 = 0x8B51,
    GL_FLOAT_VEC4 = 0x8B52,
    GL_FRAGMENT_SHADER = 0x8B30,
    GL_FRAMEBUFFER = 0x8D40,
    GL_FRAMEBUFFER_ATTACHMENT_OBJECT_NAME = 0x8CD1,
    GL_FRAMEBUFFER_ATTACHMENT_OBJECT_TYPE = 0x8CD0,
    GL_FRAMEBUFFER_ATTACHMENT_TEXTURE_CUBE_MAP_FACE = 0x8CD3,
    GL_FRAMEBUFFER_ATTACHMENT_TEXTURE_LEVEL = 0x8CD2,
    GL_FRAMEBUFFER_BINDING = 0x8CA6,
    GL_FRAMEBUFFER_COMPLETE = 0x8CD5,
    GL_FRAMEBUFFER_INCOMPLETE_ATTACHMENT = 0x8CD6,
    GL_FRAMEBUFFER_INCOMPLETE_DIMENSIONS = 0x8CD9,
    GL_FRAMEBUFFER_INCOMPLETE_MISSING_ATTACHMENT = 0x8CD7,
    GL_FRAMEBUFFER_UNSUPPORTED = 0x8CDD,
    GL_FRONT = 0x0404,
    GL_FRONT_AND_BACK = 0x0408,
    GL_FRONT_FACE = 0x0B46,
    GL_FUNC_ADD = 0x8006,
    GL_FUNC_REVERSE_SUBTRACT = 0x800B,
    GL_FUNC_SUBTRACT = 0x800A,
    GL_GENERATE_MIPMAP_HINT = 0x8192,
    GL_GEQUAL = 0x0206,
    GL_GREATER = 0x0204,
    GL_GREEN_BITS = 0x0D53,
    GL_HIGH_FLOAT = 0x8DF2,
    GL_HIGH_INT = 0x8DF5,
    GL_IMPLEMENTATION_COLOR_READ_FORMAT = 0x8B9B,
    GL_IMPLEMENTATION_COLOR_READ_TYPE = 0x8B9A,
    GL_INCR = 0x1E02,
    GL_INCR_WRAP = 0x8507,
    GL_INFO_LOG_LENGTH = 0x8B84,
    GL_INT = 0x1404,
    GL_INT_VEC2 = 0x8B53,
    GL_INT_VEC3 = 0x8B54,
    GL_INT_VEC4 = 0x8B55,
    GL_INVALID_ENUM = 0x0500,
    GL_INVALID_FRAMEBUFFER_OPERATION = 0x0506,
    GL_INVALID_OPERATION = 0x0502,
    GL_INVALID_VALUE = 0x0501,
    GL_INVERT = 0x150A,
    GL_KEEP = 0x1E00,
    GL_LEQUAL = 0x0203,
    GL_LESS = 0x0201,
    GL_LINEAR = 0x2601,
    GL_LINEAR_MIPMAP_LINEAR = 0x2703,
    GL_LINEAR_MIPMAP_NEAREST = 0x2701,
    GL_LINES = 0x0001,
    GL_LINE_LOOP = 0x0002,
    GL_LINE_STRIP = 0x0003,
    GL_LINE_WIDTH = 0x0B21,
    GL_LINK_STATUS = 0x8B82,
    GL_LOW_FLOAT = 0x8DF0,
    GL_LOW_INT = 0x8DF3,
    GL_LUMINANCE = 0x1909,
    GL_LUMINANCE_ALPHA = 0x190A,
    GL_MAX_COMBINED_TEXTURE_IMAGE_UNITS = 0x8B4D,
    GL_MAX_CUBE_MAP_TEXTURE_SIZE = 0x851C,
    GL_MAX_FRAGMENT_UNIFORM_VECTORS = 0x8DFD,
    GL_MAX_RENDERBUFFER_SIZE = 0x84E8,
    GL_MAX_TEXTURE_IMAGE_UNITS = 0x8872,
    GL_MAX_TEXTURE_SIZE = 0x0D33,
    GL_MAX_VARYING_VECTORS = 0x8DFC,
    GL_MAX_VERTEX_ATTRIBS = 0x8869,
    GL_MAX_VERTEX_TEXTURE_IMAGE_UNITS = 0x8B4C,
    GL_MAX_VERTEX_UNIFORM_VECTORS = 0x8DFB,
    GL_MAX_VIEWPORT_DIMS = 0x0D3A,
    GL_MEDIUM_FLOAT = 0x8DF1,
    GL_MEDIUM_INT = 0x8DF4,
    GL_MIRRORED_REPEAT = 0x8370,
    GL_NEAREST = 0x2600,
    GL_NEAREST_MIPMAP_LINEAR = 0x2702,
    GL_NEAREST_MIPMAP_NEAREST = 0x2700,
    GL_NEVER = 0x0200,
    GL_NICEST = 0x1102,
    GL_NONE = 0,
    GL_NOTEQUAL = 0x0205,
    GL_NO_ERROR = 0,
    GL_NUM_COMPRESSED_TEXTURE_FORMATS = 0x86A2,
    GL_NUM_SHADER_BINARY_FORMATS = 0x8DF9,
    GL_ONE = 1,
    GL_ONE_MINUS_CONSTANT_ALPHA = 0x8004,
    GL_ONE_MINUS_CONSTANT_COLOR = 0x8002,
    GL_ONE_MINUS_DST_ALPHA = 0x0305,
    GL_ONE_MINUS_DST_COLOR = 0x0307,
    GL_ONE_MINUS_SRC_ALPHA = 0x0303,
    GL_ONE_MINUS_SRC_COLOR = 0x0301,
    GL_OUT_OF_MEMORY = 0x0505,
    GL_PACK_ALIGNMENT = 0x0D05,
    GL_POINTS = 0x0000,
    GL_POLYGON_OFFSET_FACTOR = 0x8038,
    GL_POLYGON_OFFSET_FILL = 0x8037,
    GL_POLYGON_OFFSET_UNITS = 0x2A00,
    GL_RED_BITS = 0x0D52,
    GL_RENDERBUFFER = 0x8D41,
    GL_RENDERBUFFER_ALPHA_SIZE = 0x8D53,
    GL_RENDERBUFFER_BINDING = 0x8CA7,
    GL_RENDERBUFFER_BLUE_SIZE = 0x8D52,
    GL_RENDERBUFFER_DEPTH_SIZE = 0x8D54,
    GL_RENDERBUFFER_GREEN_SIZE = 0x8D51,
    GL_RENDERBUFFER_HEIGHT = 0x8D43,
    GL_RENDERBUFFER_INTERNAL_FORMAT = 0x8D44,
    GL_RENDERBUFFER_RED_SIZE = 0x8D50,
    GL_RENDERBUFFER_STENCIL_SIZE = 0x8D55,
    GL_RENDERBUFFER_WIDTH = 0x8D42,
    GL_RENDERER = 0x1F01,
    GL_REPEAT = 0x2901,
    GL_REPLACE = 0x1E01,
    GL_RGB = 0x1907,
    GL_RGB565 = 0x8D62,
    GL_RGB5_A1 = 0x8057,
    GL_RGBA = 0x1908,
    GL_RGBA4 = 0x8056,
    GL_SAMPLER_2D = 0x8B5E,
    GL_SAMPLER_CUBE = 0x8B60,
    GL_SAMPLES = 0x80A9,
    GL_SAMPLE_ALPHA_TO_COVERAGE = 0x809E,
    GL_SAMPLE_BUFFERS = 0x80A8,
    GL_SAMPLE_COVERAGE = 0x80A0,
    GL_SAMPLE_COVERAGE_INVERT = 0x80AB,
    GL_SAMPLE_COVERAGE_VALUE = 0x80AA,
    GL_SCISSOR_BOX = 0x0C10,
    GL_SCISSOR_TEST = 0x0C11,
    GL_SHADER_BINARY_FORMATS = 0x8DF8,
    GL_SHADER_COMPILER = 0x8DFA,
    GL_SHADER_SOURCE_LENGTH = 0x8B88,
    GL_SHADER_TYPE = 0x8B4F,
    GL_SHADING_LANGUAGE_VERSION = 0x8B8C,
    GL_SHORT = 0x1402,
    GL_SRC_ALPHA = 0x0302,
    GL_SRC_ALPHA_SATURATE = 0x0308,
    GL_SRC_COLOR = 0x0300,
    GL_STATIC_DRAW = 0x88E4,
    GL_STENCIL_ATTACHMENT = 0x8D20,
    GL_STENCIL_BACK_FAIL = 0x8801,
    GL_STENCIL_BACK_FUNC = 0x8800,
    GL_STENCIL_BACK_PASS_DEPTH_FAIL = 0x8802,
    GL_STENCIL_BACK_PASS_DEPTH_PASS = 0x8803,
    GL_STENCIL_BACK_REF = 0x8CA3,
    GL_STENCIL_BACK_VALUE_MASK = 0x8CA4,
    GL_STENCIL_BACK_WRITEMASK = 0x8CA5,
    GL_STENCIL_BITS = 0x0D57,
    GL_STENCIL_BUFFER_BIT = 0x00000400,
    GL_STENCIL_CLEAR_VALUE = 0x0B91,
    GL_STENCIL_FAIL = 0x0B94,
    GL_STENCIL_FUNC = 0x0B92,
    GL_STENCIL_INDEX8 = 0x8D48,
    GL_STENCIL_PASS_DEPTH_FAIL = 0x0B95,
    GL_STENCIL_PASS_DEPTH_PASS = 0x0B96,
    GL_STENCIL_REF = 0x0B97,
    GL_STENCIL_TEST = 0x0B90,
    GL_STENCIL_VALUE_MASK = 0x0B93,
    GL_STENCIL_WRITEMASK = 0x0B98,
    GL_STREAM_DRAW = 0x88E0,
    GL_SUBPIXEL_BITS = 0x0D50,
    GL_TEXTURE = 0x1702,
    GL_TEXTURE0 = 0x84C0,
    GL_TEXTURE1 = 0x84C1,
    GL_TEXTURE2 = 0x84C2,
    GL_TEXTURE3 = 0x84C3,
    GL_TEXTURE4 = 0x84C4,
    GL_TEXTURE5 = 0x84C5,
    GL_TEXTURE6 = 0x84C6,
    GL_TEXTURE7 = 0x84C7,
    GL_TEXTURE8 = 0x84C8,
    GL_TEXTURE9 = 0x84C9,
    GL_TEXTURE10 = 0x84CA,
    GL_TEXTURE11 = 0x84CB,
    GL_TEXTURE12 = 0x84CC,
    GL_TEXTURE13 = 0x84CD,
    GL_TEXTURE14 = 0x84CE,
    GL_TEXTURE15 = 0x84CF,
    GL_TEXTURE16 = 0x84D0,
    GL_TEXTURE17 = 0x84D1,
    GL_TEXTURE18 = 0x84D2,
    GL_TEXTURE19 = 0x84D3,
    GL_TEXTURE20 = 0x84D4,
    GL_TEXTURE21 = 0x84D5,
    GL_TEXTURE22 = 0x84D6,
    GL_TEXTURE23 = 0x84D7,
    GL_TEXTURE24 = 0x84D8,
    GL_TEXTURE25 = 0x84D9,
    GL_TEXTURE26 = 0x84DA,
    GL_TEXTURE27 = 0x84DB,
    GL_TEXTURE28 = 0x84DC,
    GL_TEXTURE29 = 0x84DD,
    GL_TEXTURE30 = 0x84DE,
    GL_TEXTURE31 = 0x84DF,
    GL_TEXTURE_2D = 0x0DE1,
    GL_TEXTURE_BINDING_2D = 0x8069,
    GL_TEXTURE_BINDING_CUBE_MAP = 0x8514,
    GL_TEXTURE_CUBE_MAP = 0x8513,
    GL_TEXTURE_CUBE_MAP_NEGATIVE_X = 0x8516,
    GL_TEXTURE_CUBE_MAP_NEGATIVE_Y = 0x8518,
    GL_TEXTURE_CUBE_MAP_NEGATIVE_Z = 0x851A,
    GL_TEXTURE_CUBE_MAP_POSITIVE_X = 0x8515,
    GL_TEXTURE_CUBE_MAP_POSITIVE_Y = 0x8517,
    GL_TEXTURE_CUBE_MAP_POSITIVE_Z = 0x8519,
    GL_TEXTURE_MAG_FILTER = 0x2800,
    GL_TEXTURE_MIN_FILTER = 0x2801,
    GL_TEXTURE_WRAP_S = 0x2802,
    GL_TEXTURE_WRAP_T = 0x2803,
    GL_TRIANGLES = 0x0004,
    GL_TRIANGLE_FAN = 0x0006,
    GL_TRIANGLE_STRIP = 0x0005,
    GL_UNPACK_ALIGNMENT = 0x0CF5,
    GL_UNSIGNED_BYTE = 0x1401,
    GL_UNSIGNED_INT = 0x1405,
    GL_UNSIGNED_SHORT = 0x1403,
    GL_UNSIGNED_SHORT_4_4_4_4 = 0x8033,
    GL_UNSIGNED_SHORT_5_5_5_1 = 0x8034,
    GL_UNSIGNED_SHORT_5_6_5 = 0x8363,
    GL_VALIDATE_STATUS = 0x8B83,
    GL_VENDOR = 0x1F00,
    GL_VERSION = 0x1F02,
    GL_VERTEX_ATTRIB_ARRAY_BUFFER_BINDING = 0x889F,
    GL_VERTEX_ATTRIB_ARRAY_ENABLED = 0x8622,
    GL_VERTEX_ATTRIB_ARRAY_NORMALIZED = 0x886A,
    GL_VERTEX_ATTRIB_ARRAY_POINTER = 0x8645,
    GL_VERTEX_ATTRIB_ARRAY_SIZE = 0x8623,
    GL_VERTEX_ATTRIB_ARRAY_STRIDE = 0x8624,
    GL_VERTEX_ATTRIB_ARRAY_TYPE = 0x8625,
    GL_VERTEX_SHADER = 0x8B31,
    GL_VIEWPORT = 0x0BA2,
    GL_ZERO = 0,
}

dynload! {
    pub struct GlFns via crate::gl::fns {
        glGetError: unsafe fn() -> GLenum,
        glGetString: unsafe fn(name: GLenum) -> *const u8,
        glGetBooleanv: unsafe fn(pname: GLenum, data: *mut GLboolean),
        glGetFloatv: unsafe fn(pname: GLenum, data: *mut GLfloat),
        glGetIntegerv: unsafe fn(pname: GLenum, data: *mut GLint),
        glIsEnabled: unsafe fn(cap: GLenum) -> GLboolean,
        glEnable: unsafe fn(cap: GLenum),
        glDisable: unsafe fn(cap: GLenum),
        glFinish: unsafe fn(),
        glFlush: unsafe fn(),
        glHint: unsafe fn(target: GLenum, mode: GLenum),

        glBlendColor: unsafe fn(red: GLclampf, green: GLclampf, blue: GLclampf, alpha: GLclampf),
        glBlendEquation: unsafe fn(mode: GLenum),
        glBlendEquationSeparate: unsafe fn(mode_rgb: GLenum, mode_alpha: GLenum),
        glBlendFunc: unsafe fn(sfactor: GLenum, dfactor: GLenum),
        glBlendFuncSeparate: unsafe fn(
            src_rgb: GLenum,
            dst_rgb: GLenum,
            src_alpha: GLenum,
            dst_alpha: GLenum,
        ),

        glGenBuffers: unsafe fn(n: GLsizei, buffers: *mut GLuint),
        glDeleteBuffers: unsafe fn(n: GLsizei, buffers: *const GLuint),
        glBindBuffer: unsafe fn(target: GLenum, buffer: GLuint),
        glIsBuffer: unsafe fn(buffer: GLuint) -> GLboolean,
        glBufferData: unsafe fn(
            target: GLenum,
            size: GLsizeiptr,
            data: *const c::c_void,
            usage: GLenum,
        ),
        glBufferSubData: unsafe fn(
            target: GLenum,
            offset: GLintptr,
            size: GLsizeiptr,
            data: *const c::c_void,
        ),
        glGetBufferParameteriv: unsafe fn(target: GLenum, pname: GLenum, params: *mut GLint),

        glGenFramebuffers: unsafe fn(n: GLsizei, framebuffers: *mut GLuint),
        glDeleteFramebuffers: unsafe fn(n: GLsizei, framebuffers: *const GLuint),
        glBindFramebuffer: unsafe fn(target: GLenum, framebuffer: GLuint),
        glIsFramebuffer: unsafe fn(framebuffer: GLuint) -> GLboolean,
        glCheckFramebufferStatus: unsafe fn(target: GLenum) -> GLenum,
        glFramebufferRenderbuffer: unsafe fn(
            target: GLenum,
            attachment: GLenum,
            renderbuffertarget: GLenum,
            renderbuffer: GLuint,
        ),
        glFramebufferTexture2D: unsafe fn(
            target: GLenum,
            attachment: GLenum,
            textarget: GLenum,
            texture: GLuint,
            level: GLint,
        ),
        glGetFramebufferAttachmentParameteriv: unsafe fn(
            target: GLenum,
            attachment: GLenum,
            pname: GLenum,
            params: *mut GLint,
        ),

        glGenRenderbuffers: unsafe fn(n: GLsizei, renderbuffers: *mut GLuint),
        glDeleteRenderbuffers: unsafe fn(n: GLsizei, renderbuffers: *const GLuint),
        glBindRenderbuffer: unsafe fn(target: GLenum, renderbuffer: GLuint),
        glIsRenderbuffer: unsafe fn(renderbuffer: GLuint) -> GLboolean,
        glRenderbufferStorage: unsafe fn(
            target: GLenum,
            internalformat: GLenum,
            width: GLsizei,
            height: GLsizei,
        ),
        glGetRenderbufferParameteriv: unsafe fn(target: GLenum, pname: GLenum, params: *mut GLint),

        glGenTextures: unsafe fn(n: GLsizei, textures: *mut GLuint),
        glDeleteTextures: unsafe fn(n: GLsizei, textures: *const GLuint),
        glBindTexture: unsafe fn(target: GLenum, texture: GLuint),
        glIsTexture: unsafe fn(texture: GLuint) -> GLboolean,
        glActiveTexture: unsafe fn(texture: GLenum),
        glGenerateMipmap: unsafe fn(target: GLenum),
        glTexImage2D: unsafe fn(
            target: GLenum,
            level: GLint,
            internalformat: GLint,
            width: GLsizei,
            height: GLsizei,
            border: GLint,
            format: GLenum,
            ty: GLenum,
            pixels: *const c::c_void,
        ),
        glTexSubImage2D: unsafe fn(
            target: GLenum,
            level: GLint,
            xoffset: GLint,
            yoffset: GLint,
            width: GLsizei,
            height: GLsizei,
            format: GLenum,
            ty: GLenum,
            pixels: *const c::c_void,
        ),
        glCompressedTexImage2D: unsafe fn(
            target: GLenum,
            level: GLint,
            internalformat: GLenum,
            width: GLsizei,
            height: GLsizei,
            border: GLint,
            image_size: GLsizei,
            data: *const c::c_void,
        ),
        glCompressedTexSubImage2D: unsafe fn(
            target: GLenum,
            level: GLint,
            xoffset: GLint,
            yoffset: GLint,
            width: GLsizei,
            height: GLsizei,
            format: GLenum,
            image_size: GLsizei,
            data: *const c::c_void,
        ),
        glCopyTexImage2D: unsafe fn(
            target: GLenum,
            level: GLint,
            internalformat: GLenum,
            x: GLint,
            y: GLint,
            width: GLsizei,
            height: GLsizei,
            border: GLint,
        ),
        glCopyTexSubImage2D: unsafe fn(
            target: GLenum,
            level: GLint,
            xoffset: GLint,
            yoffset: GLint,
            x: GLint,
            y: GLint,
            width: GLsizei,
            height: GLsizei,
        ),
        glTexParameterf: unsafe fn(target: GLenum, pname: GLenum, param: GLfloat),
        glTexParameterfv: unsafe fn(target: GLenum, pname: GLenum, params: *const GLfloat),
        glTexParameteri: unsafe fn(target: GLenum, pname: GLenum, param: GLint),
        glTexParameteriv: unsafe fn(target: GLenum, pname: GLenum, params: *const GLint),
        glGetTexParameterfv: unsafe fn(target: GLenum, pname: GLenum, params: *mut GLfloat),
        glGetTexParameteriv: unsafe fn(target: GLenum, pname: GLenum, params: *mut GLint),

        glCreateShader: unsafe fn(ty: GLenum) -> GLuint,
        glDeleteShader: unsafe fn(shader: GLuint),
        glIsShader: unsafe fn(shader: GLuint) -> GLboolean,
        glShaderSource: unsafe fn(
            shader: GLuint,
            count: GLsizei,
            string: *const *const GLchar,
            length: *const GLint,
        ),
        glShaderBinary: unsafe fn(
            count: GLsizei,
            shaders: *const GLuint,
            binaryformat: GLenum,
            binary: *const c::c_void,
            length: GLsizei,
        ),
        glCompileShader: unsafe fn(shader: GLuint),
        glReleaseShaderCompiler: unsafe fn(),
        glGetShaderiv: unsafe fn(shader: GLuint, pname: GLenum, params: *mut GLint),
        glGetShaderInfoLog: unsafe fn(
            shader: GLuint,
            buf_size: GLsizei,
            length: *mut GLsizei,
            info_log: *mut GLchar,
        ),
        glGetShaderSource: unsafe fn(
            shader: GLuint,
            buf_size: GLsizei,
            length: *mut GLsizei,
            source: *mut GLchar,
        ),
        glGetShaderPrecisionFormat: unsafe fn(
            shadertype: GLenum,
            precisiontype: GLenum,
            range: *mut GLint,
            precision: *mut GLint,
        ),

        glCreateProgram: unsafe fn() -> GLuint,
        glDeleteProgram: unsafe fn(program: GLuint),
        glIsProgram: unsafe fn(program: GLuint) -> GLboolean,
        glAttachShader: unsafe fn(program: GLuint, shader: GLuint),
        glDetachShader: unsafe fn(program: GLuint, shader: GLuint),
        glLinkProgram: unsafe fn(program: GLuint),
        glUseProgram: unsafe fn(program: GLuint),
        glValidateProgram: unsafe fn(program: GLuint),
        glGetProgramiv: unsafe fn(program: GLuint, pname: GLenum, params: *mut GLint),
        glGetProgramInfoLog: unsafe fn(
            program: GLuint,
            buf_size: GLsizei,
            length: *mut GLsizei,
            info_log: *mut GLchar,
        ),
        glGetAttachedShaders: unsafe fn(
            program: GLuint,
            max_count: GLsizei,
            count: *mut GLsizei,
            shaders: *mut GLuint,
        ),

        glGetActiveAttrib: unsafe fn(
            program: GLuint,
            index: GLuint,
            buf_size: GLsizei,
            length: *mut GLsizei,
            size: *mut GLint,
            ty: *mut GLenum,
            name: *mut GLchar,
        ),
        glGetActiveUniform: unsafe fn(
            program: GLuint,
            index: GLuint,
            buf_size: GLsizei,
            length: *mut GLsizei,
            size: *mut GLint,
            ty: *mut GLenum,
            name: *mut GLchar,
        ),
        glBindAttribLocation: unsafe fn(program: GLuint, index: GLuint, name: *const GLchar),
        glGetAttribLocation: unsafe fn(program: GLuint, name: *const GLchar) -> GLint,
        glGetUniformLocation: unsafe fn(program: GLuint, name: *const GLchar) -> GLint,
        glGetUniformfv: unsafe fn(program: GLuint, location: GLint, params: *mut GLfloat),
        glGetUniformiv: unsafe fn(program: GLuint, location: GLint, params: *mut GLint),

        glUniform1f: unsafe fn(location: GLint, v0: GLfloat),
        glUniform2f: unsafe fn(location: GLint, v0: GLfloat, v1: GLfloat),
        glUniform3f: unsafe fn(location: GLint, v0: GLfloat, v1: GLfloat, v2: GLfloat),
        glUniform4f: unsafe fn(location: GLint, v0: GLfloat, v1: GLfloat, v2: GLfloat, v3: GLfloat),
        glUniform1i: unsafe fn(location: GLint, v0: GLint),
        glUniform2i: unsafe fn(location: GLint, v0: GLint, v1: GLint),
        glUniform3i: unsafe fn(location: GLint, v0: GLint, v1: GLint, v2: GLint),
        glUniform4i: unsafe fn(location: GLint, v0: GLint, v1: GLint, v2: GLint, v3: GLint),
        glUniform1fv: unsafe fn(location: GLint, count: GLsizei, value: *const GLfloat),
        glUniform2fv: unsafe fn(location: GLint, count: GLsizei, value: *const GLfloat),
        glUniform3fv: unsafe fn(location: GLint, count: GLsizei, value: *const GLfloat),
        glUniform4fv: unsafe fn(location: GLint, count: GLsizei, value: *const GLfloat),
        glUniform1iv: unsafe fn(location: GLint, count: GLsizei, value: *const GLint),
        glUniform2iv: unsafe fn(location: GLint, count: GLsizei, value: *const GLint),
        glUniform3iv: unsafe fn(location: GLint, count: GLsizei, value: *const GLint),
        glUniform4iv: unsafe fn(location: GLint, count: GLsizei, value: *const GLint),
        glUniformMatrix2fv: unsafe fn(
            location: GLint,
            count: GLsizei,
            transpose: GLboolean,
            value: *const GLfloat,
        ),
        glUniformMatrix3fv: unsafe fn(
            location: GLint,
            count: GLsizei,
            transpose: GLboolean,
            value: *const GLfloat,
        ),
        glUniformMatrix4fv: unsafe fn(
            location: GLint,
            count: GLsizei,
            transpose: GLboolean,
            value: *const GLfloat,
        ),

        glEnableVertexAttribArray: unsafe fn(index: GLuint),
        glDisableVertexAttribArray: unsafe fn(index: GLuint),
        glVertexAttrib1f: unsafe fn(index: GLuint, x: GLfloat),
        glVertexAttrib2f: unsafe fn(index: GLuint, x: GLfloat, y: GLfloat),
        glVertexAttrib3f: unsafe fn(index: GLuint, x: GLfloat, y: GLfloat, z: GLfloat),
        glVertexAttrib4f: unsafe fn(index: GLuint, x: GLfloat, y: GLfloat, z: GLfloat, w: GLfloat),
        glVertexAttrib1fv: unsafe fn(index: GLuint, v: *const GLfloat),
        glVertexAttrib2fv: unsafe fn(index: GLuint, v: *const GLfloat),
        glVertexAttrib3fv: unsafe fn(index: GLuint, v: *const GLfloat),
        glVertexAttrib4fv: unsafe fn(index: GLuint, v: *const GLfloat),
        glVertexAttribPointer: unsafe fn(
            index: GLuint,
            size: GLint,
            ty: GLenum,
            normalized: GLboolean,
            stride: GLsizei,
            pointer: *const c::c_void,
        ),
        glGetVertexAttribfv: unsafe fn(index: GLuint, pname: GLenum, params: *mut GLfloat),
        glGetVertexAttribiv: unsafe fn(index: GLuint, pname: GLenum, params: *mut GLint),
        glGetVertexAttribPointerv: unsafe fn(
            index: GLuint,
            pname: GLenum,
            pointer: *mut *mut c::c_void,
        ),

        glDrawArrays: unsafe fn(mode: GLenum, first: GLint, count: GLsizei),
        glDrawElements: unsafe fn(
            mode: GLenum,
            count: GLsizei,
            ty: GLenum,
            indices: *const c::c_void,
        ),

        glClear: unsafe fn(mask: GLbitfield),
        glClearColor: unsafe fn(red: GLclampf, green: GLclampf, blue: GLclampf, alpha: GLclampf),
        glClearDepthf: unsafe fn(depth: GLclampf),
        glClearStencil: unsafe fn(s: GLint),
        glColorMask: unsafe fn(red: GLboolean, green: GLboolean, blue: GLboolean, alpha: GLboolean),
        glDepthFunc: unsafe fn(func: GLenum),
        glDepthMask: unsafe fn(flag: GLboolean),
        glDepthRangef: unsafe fn(n: GLclampf, f: GLclampf),
        glStencilFunc: unsafe fn(func: GLenum, reference: GLint, mask: GLuint),
        glStencilFuncSeparate: unsafe fn(
            face: GLenum,
            func: GLenum,
            reference: GLint,
            mask: GLuint,
        ),
        glStencilMask: unsafe fn(mask: GLuint),
        glStencilMaskSeparate: unsafe fn(face: GLenum, mask: GLuint),
        glStencilOp: unsafe fn(fail: GLenum, zfail: GLenum, zpass: GLenum),
        glStencilOpSeparate: unsafe fn(face: GLenum, fail: GLenum, zfail: GLenum, zpass: GLenum),

        glCullFace: unsafe fn(mode: GLenum),
        glFrontFace: unsafe fn(mode: GLenum),
        glLineWidth: unsafe fn(width: GLfloat),
        glPolygonOffset: unsafe fn(factor: GLfloat, units: GLfloat),
        glSampleCoverage: unsafe fn(value: GLclampf, invert: GLboolean),
        glScissor: unsafe fn(x: GLint, y: GLint, width: GLsizei, height: GLsizei),
        glViewport: unsafe fn(x: GLint, y: GLint, width: GLsizei, height: GLsizei),
        glPixelStorei: unsafe fn(pname: GLenum, param: GLint),
        glReadPixels: unsafe fn(
            x: GLint,
            y: GLint,
            width: GLsizei,
            height: GLsizei,
            format: GLenum,
            ty: GLenum,
            pixels: *mut c::c_void,
        ),
    }
}
