pub mod char_class;
pub mod lexeme;
pub mod number;

pub use char_class::{
    alpha, alphanum, digit, hexdigit, lower, newline, octdigit, space, spaces, tab, underscore,
    upper,
};
pub use lexeme::{char_lit, colon, comma, dot, escape, ident, regex_lit, semi, string_lit};
pub use number::{digits, float, hex, int, number, oct, real};
