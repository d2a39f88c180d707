pub fn assert_ord<T: PartialOrd>(_: &T) {}
pub fn assert_same_type<T, U>(_: &T, _: &U) {}

#[macro_export]
macro_rules! current_location {
    () => {
        format!("{}:{}", file!(), line!())
    };
}

macro_rules! check_le {
    ($lhs:expr, $rhs:expr) => {{
        $crate::assert::assert_same_type(&$lhs, &$rhs);
        $crate::assert::assert_ord(&$lhs);
        if !($lhs <= $rhs) {
            panic!(
                "check failed: {}: {} <= {}: {:?} vs. {:?}",
                $crate::current_location!(),
                stringify!($lhs),
                stringify!($rhs),
                $lhs,
                $rhs
            );
        }
    }};
}
pub(crate) use check_le;

#[cfg(test)]
mod tests {
    #[test]
    fn passing_check_le_does_not_panic() {
        check_le!(1.0_f32, 1.0_f32);
        check_le!(-1, 2);
    }

    #[test]
    #[should_panic(expected = "check failed")]
    fn failing_check_le_panics() {
        check_le!(2.0_f32, 1.0_f32);
    }

    #[test]
    #[should_panic(expected = "NaN vs. NaN")]
    fn nan_fails_check_le() {
        check_le!(f32::NAN, f32::NAN);
    }
}
