use crate::f;

/// Extends Option for easy display formatting
pub trait OptionExt {
    /// Either the value contained within `Some()` or "none"
    ///
    /// ```rust
    /// # use thornado_utils::OptionExt;
    /// let x: Option<usize> = Some(2);
    /// assert_eq!(x.display(), "2");
    ///
    /// let x: Option<usize> = None;
    /// assert_eq!(x.display(), "none");
    /// ```
    fn display(&self) -> String;

    /// Either the value contained within `Some()` or the `fallback` text
    ///
    /// Useful for fixed-width tables where "none" is too wide or too quiet.
    ///
    /// ```rust
    /// # use thornado_utils::OptionExt;
    /// let x: Option<f64> = None;
    /// assert_eq!(x.display_or("-"), "-");
    /// ```
    fn display_or(&self, fallback: &str) -> String;
}

impl<T: std::fmt::Display> OptionExt for Option<T> {
    fn display(&self) -> String {
        self.display_or("none")
    }

    fn display_or(&self, fallback: &str) -> String {
        match self {
            Some(value) => f!("{value}"),
            None => fallback.to_string(),
        }
    }
}
