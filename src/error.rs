use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum FractionError {
    #[error("denominator should be not equal to zero")]
    InvalidArgument,
    #[error("arithmetic overflow, {0} does not fit into i32")]
    Overflow(i64),
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn should_render_error_messages() {
        assert_eq!(
            FractionError::InvalidArgument.to_string(),
            "denominator should be not equal to zero"
        );
        assert_eq!(
            FractionError::Overflow(2_147_483_648).to_string(),
            "arithmetic overflow, 2147483648 does not fit into i32"
        );
    }
}
