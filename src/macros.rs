// src/macros.rs
#[macro_export]
macro_rules! s {
    // String shorthand!
    () => {
        ::std::string::String::new()
    };
    // Works for literals, consts, or vars
    ($expr:expr) => {
        ::std::string::String::from($expr)
    };
}
