macro_rules! dynload {
    (
        $vis:vis struct $ty:ident via $fns:path {
            $(
                $fname:ident: unsafe fn($($arg:ident: $aty:ty),* $(,)?) $(-> $ret:ty)?,
            )*
        }
    ) => {
        $vis struct $ty {
            $(
                pub $fname: unsafe extern "C" fn($($arg: $aty),*) $(-> $ret)?,
            )*
        }

        impl $ty {
            pub fn load(lib: &libloading::Library) -> Result<Self, crate::gl::GlApiError> {
                unsafe {
                    Ok(Self {
                        $(
                            $fname: *lib
                                .get::<unsafe extern "C" fn($($aty),*) $(-> $ret)?>(
                                    concat!(stringify!($fname), "\0").as_bytes(),
                                )
                                .map_err(|_| {
                                    crate::gl::GlApiError::MissingSymbol(stringify!($fname))
                                })?,
                        )*
                    })
                }
            }
        }

        $(
            $vis unsafe fn $fname($($arg: $aty),*) $(-> $ret)? {
                unsafe { ($fns().$fname)($($arg),*) }
            }
        )*
    };
}

macro_rules! tokens {
    ($table:ident: $($name:ident = $value:expr,)*) => {
        $(
            pub const $name: crate::gl::sys::GLenum = $value;
        )*

        pub static $table: &[crate::tokens::Token] = &[
            $(
                crate::tokens::Token {
                    name: stringify!($name),
                    value: $name,
                    requires: None,
                },
            )*
        ];
    };
}
