/// Returns early with [`Error::InvalidArgument`](crate::error::Error::InvalidArgument)
/// unless a numerical value lies in the half-open interval `(a, b]`
///
/// ### Example
/// ```ignore
/// let percentage = 120.0;
/// ensure_interval!(percentage, 0.0, 100.0);
/// ```
/// This returns the error "Invalid value for \`percentage\`. Must be in the interval (0, 100]."
///
/// NaN never satisfies the bounds and is rejected.
macro_rules! ensure_interval {
    ($var:expr, $a:expr, $b:expr) => {
        if !($var > $a && $var <= $b) {
            return Err($crate::error::Error::InvalidArgument(format!(
                "Invalid value for `{}`. Must be in the interval ({}, {}].",
                stringify!($var),
                $a,
                $b,
            )));
        }
    };
}

pub(crate) use ensure_interval;
