use crate::f;

/// Extends float primitives with formatting and comparison helpers
pub trait ValueExt {
    /// Scientific formatting matching C-style `%.<precision>e`
    ///
    /// The default `{:e}` formatting drops the exponent sign and padding, which
    /// makes text output inconsistent with numpy and existing data files.
    ///
    /// Non-finite values are written as `nan`, `inf`, and `-inf`.
    ///
    /// ```rust
    /// # use thornado_utils::ValueExt;
    /// assert_eq!((-1.0_f64).sci(5, 2), "-1.00000e+00".to_string());
    /// assert_eq!(1.0e15_f64.sci(3, 2), "1.000e+15".to_string());
    /// assert_eq!(2.5e-7_f64.sci(3, 2), "2.500e-07".to_string());
    /// assert_eq!(f64::NAN.sci(3, 2), "nan".to_string());
    /// ```
    fn sci(&self, precision: usize, exp_pad: usize) -> String;

    /// Floor a value, letting NaN through
    ///
    /// Equivalent to Python's `max(value, floor)`, which returns the first
    /// argument unless the second compares greater. A NaN therefore survives
    /// rather than being silently replaced by the floor.
    ///
    /// ```rust
    /// # use thornado_utils::ValueExt;
    /// assert_eq!(0.5_f64.at_least(1.0e-17), 0.5);
    /// assert_eq!(0.0_f64.at_least(1.0e-17), 1.0e-17);
    /// assert!(f64::NAN.at_least(1.0e-17).is_nan());
    /// ```
    fn at_least(self, floor: f64) -> f64;
}

impl ValueExt for f64 {
    fn sci(&self, precision: usize, exp_pad: usize) -> String {
        if self.is_nan() {
            return "nan".to_string();
        } else if self.is_infinite() {
            return if self.is_sign_positive() { "inf" } else { "-inf" }.to_string();
        }

        let mut num = f!("{:.precision$e}", self, precision = precision);
        // Safe to `unwrap` as a finite `num` is guaranteed to contain `'e'`
        let exp = num.split_off(num.find('e').unwrap());
        // Make sure the exponent is signed
        let (sign, exp) = match exp.strip_prefix("e-") {
            Some(exp) => ('-', exp),
            None => ('+', &exp[1..]),
        };
        num.push_str(&f!("e{}{:0>pad$}", sign, exp, pad = exp_pad));
        num
    }

    fn at_least(self, floor: f64) -> f64 {
        if floor > self {
            floor
        } else {
            self
        }
    }
}
