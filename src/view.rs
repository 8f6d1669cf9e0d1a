use crate::fraction::Fraction;
use crate::numeric::{abs_pair, digit_length};
use std::fmt;

const RULE: &str = "—";

impl fmt::Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.sign() == 1 { "" } else { "- " };
        let (abs_numerator, abs_denominator) =
            abs_pair(self.numerator().into(), self.denominator().into());

        write!(f, "{}{} / {}", sign, abs_numerator, abs_denominator)
    }
}

impl Fraction {
    /// Two-line rendering with the numerator stacked over the denominator.
    ///
    /// Whole numbers render as a bare integer. The string is built on the
    /// first call and reused afterwards.
    pub fn visualize(&self) -> &str {
        self.view.get_or_init(|| render_view(self))
    }
}

fn render_view(fraction: &Fraction) -> String {
    if fraction.is_whole_number() {
        return fraction.numerator().to_string();
    }

    let (abs_numerator, abs_denominator) =
        abs_pair(fraction.numerator().into(), fraction.denominator().into());

    let numerator_length = digit_length(abs_numerator);
    let denominator_length = digit_length(abs_denominator);
    let max_length = numerator_length.max(denominator_length);

    let mut delimiter = RULE.repeat(max_length + 1);
    let mut numerator = abs_numerator.to_string();
    let mut denominator = abs_denominator.to_string();

    // center the shorter line under/over the longer one
    let spaces = " ".repeat(max_length / 2);
    if numerator_length < denominator_length {
        numerator.insert_str(0, &spaces);
    } else if denominator_length < numerator_length {
        denominator.insert_str(0, &spaces);
    }

    if fraction.sign() == -1 {
        delimiter.insert_str(0, "- ");
        numerator.insert_str(0, "  ");
        denominator.insert_str(0, "  ");
    }

    format!("{}\n{}\n{}", numerator, delimiter, denominator)
}

#[cfg(test)]
mod test {
    use super::*;
    use indoc::indoc;

    fn frac(numerator: i32, denominator: i32) -> Fraction {
        Fraction::new(numerator, denominator)
            .unwrap_or_else(|e| panic!("cannot build {}/{}: {}", numerator, denominator, e))
    }

    #[test]
    fn should_display_single_line() {
        assert_eq!(frac(3, 4).to_string(), "3 / 4");
        assert_eq!(frac(-3, 4).to_string(), "- 3 / 4");
        assert_eq!(frac(6, -4).to_string(), "- 3 / 2");
        assert_eq!(frac(0, 7).to_string(), "0 / 1");
        assert_eq!(frac(20, 10).to_string(), "2 / 1");
    }

    #[test]
    fn should_visualize_whole_numbers() {
        assert_eq!(frac(0, 5).visualize(), "0");
        assert_eq!(frac(20, 10).visualize(), "2");
        assert_eq!(frac(-22, 11).visualize(), "-2");
        assert_eq!(frac(-19, -19).visualize(), "1");
    }

    #[test]
    fn should_visualize_same_length() {
        assert_eq!(
            frac(1, 4).visualize(),
            indoc! {"
                1
                ——
                4"}
        );
        assert_eq!(
            frac(42, 55).visualize(),
            indoc! {"
                42
                ———
                55"}
        );
    }

    #[test]
    fn should_center_shorter_line() {
        assert_eq!(
            frac(1, 10).visualize(),
            indoc! {"
                 1
                ———
                10"}
        );
        assert_eq!(
            frac(7, 100).visualize(),
            indoc! {"
                 7
                ————
                100"}
        );
        assert_eq!(
            frac(1000, 3).visualize(),
            indoc! {"
                1000
                —————
                  3"}
        );
    }

    #[test]
    fn should_visualize_negative() {
        assert_eq!(
            frac(-3, 4).visualize(),
            indoc! {"
                  3
                - ——
                  4"}
        );
        assert_eq!(
            frac(7, -100).visualize(),
            indoc! {"
                   7
                - ————
                  100"}
        );
    }

    #[test]
    fn should_memoize_view() {
        let fraction = frac(5, 8);
        let first = fraction.visualize();
        let second = fraction.visualize();

        assert!(std::ptr::eq(first, second));
        assert_eq!(fraction.clone().visualize(), first);
    }
}
