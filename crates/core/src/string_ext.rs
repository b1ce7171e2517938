/// Extends string types with useful functions
pub trait StringExt {
    /// Capitalises the first letter in a string
    ///
    /// ```rust
    /// # use nucdata_core::StringExt;
    /// assert_eq!("lithium".capitalise(), "Lithium".to_string());
    /// ```
    fn capitalise(&self) -> String;
}

impl<T: AsRef<str>> StringExt for T {
    fn capitalise(&self) -> String {
        let mut c = self.as_ref().chars();
        match c.next() {
            Some(f) => f.to_uppercase().collect::<String>() + c.as_str(),
            None => String::new(),
        }
    }
}
