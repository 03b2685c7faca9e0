//! Operand formatting for `print` and `println`.
//!
//! `print` adds a space between two operands only when neither is a string.
//! `println` always separates operands with a space and appends a newline.

use std::fmt::{self, Write};

/// A value that can be passed to [`Logger::print`](crate::Logger::print).
pub trait Operand: fmt::Display {
    /// String operands are never padded by `print`.
    fn is_string(&self) -> bool {
        false
    }
}

impl Operand for str {
    fn is_string(&self) -> bool {
        true
    }
}

impl Operand for String {
    fn is_string(&self) -> bool {
        true
    }
}

impl<T: Operand + ?Sized> Operand for &T {
    fn is_string(&self) -> bool {
        (**self).is_string()
    }
}

macro_rules! display_operand {
    ($($ty:ty),* $(,)?) => {
        $(impl Operand for $ty {})*
    };
}

display_operand!(
    bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64,
);

impl Operand for fmt::Arguments<'_> {}

/// Concatenate operands, spacing adjacent non-string operands.
pub fn sprint(operands: &[&dyn Operand]) -> String {
    let mut out = String::new();
    let mut prev_string = true;
    for (i, operand) in operands.iter().enumerate() {
        let is_string = operand.is_string();
        if i > 0 && !is_string && !prev_string {
            out.push(' ');
        }
        let _ = write!(out, "{}", operand);
        prev_string = is_string;
    }
    out
}

/// Join operands with spaces and append a newline.
pub fn sprintln(operands: &[&dyn Operand]) -> String {
    let mut out = String::new();
    for (i, operand) in operands.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        let _ = write!(out, "{}", operand);
    }
    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sprint_spaces_only_between_non_strings() {
        assert_eq!(sprint(&[&1, &2]), "1 2");
        assert_eq!(sprint(&[&"a", &1, &2, &"b"]), "a1 2b");
        assert_eq!(sprint(&[&"a", &"b"]), "ab");
        assert_eq!(sprint(&[&true, &String::from("x"), &3.5]), "truex3.5");
    }

    #[test]
    fn test_sprintln_always_spaces() {
        assert_eq!(sprintln(&[&"a", &"b", &1]), "a b 1\n");
        assert_eq!(sprintln(&[]), "\n");
    }

    #[test]
    fn test_empty_print() {
        assert_eq!(sprint(&[]), "");
    }
}
