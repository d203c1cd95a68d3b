// src/macros.rs
// Owned-string shorthands used across the crate.

/// `s!()` is an empty `String`; `s!(x)` is `String::from(x)`.
#[macro_export]
macro_rules! s {
    () => {
        ::std::string::String::new()
    };
    ($text:expr) => {
        ::std::string::String::from($text)
    };
}

/// Concatenate string slices into one owned `String`, left to right.
#[macro_export]
macro_rules! join {
    ($head:expr $(, $tail:expr)+ $(,)?) => {{
        let mut out = ::std::string::String::from($head);
        $( out.push_str($tail); )+
        out
    }};
}
