use std::fmt::Display;

/// Extends `Option` for easy display formatting
pub trait OptionExt {
    /// Better option outputs
    ///
    /// ```rust
    /// # use nucdata_core::OptionExt;
    /// let x: Option<u32> = Some(2);
    /// assert_eq!(x.display(), "2");
    ///
    /// let x: Option<u32> = None;
    /// assert_eq!(x.display(), "none");
    /// ```
    fn display(&self) -> String;
}

impl<T: Display> OptionExt for Option<T> {
    fn display(&self) -> String {
        match self {
            Some(value) => format!("{value}"),
            None => "none".to_string(),
        }
    }
}
