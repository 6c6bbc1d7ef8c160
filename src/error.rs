use thiserror::Error;

/*
 * Reasons a value argument is refused by the list
 */
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidArgument {
    #[error("absent value is not allowed in the list")]
    Absent,
    #[error("all elements in the list must be of the same kind: {expected}")]
    KindMismatch {
        expected: &'static str,
        found: &'static str,
    },
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("invalid argument: {0}")]
    InvalidArgument(#[from] InvalidArgument),
    #[error("index {index} out of range for list of size {size}")]
    IndexOutOfRange { index: usize, size: usize },
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        assert_eq!(
            Error::from(InvalidArgument::Absent).to_string(),
            "invalid argument: absent value is not allowed in the list"
        );
        assert_eq!(
            Error::from(InvalidArgument::KindMismatch {
                expected: "i32",
                found: "u8"
            })
            .to_string(),
            "invalid argument: all elements in the list must be of the same kind: i32"
        );
        assert_eq!(
            Error::IndexOutOfRange { index: 3, size: 3 }.to_string(),
            "index 3 out of range for list of size 3"
        );
    }
}
