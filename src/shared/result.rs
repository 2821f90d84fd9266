/// Type alias for Result with anyhow::Error as the error type.
/// Application and adapter code returns this; typed `BomError`s convert into it.
pub type Result<T> = std::result::Result<T, anyhow::Error>;
