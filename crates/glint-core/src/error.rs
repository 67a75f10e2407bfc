use thiserror::Error;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("no value of type `{0}` provided in the current composition")]
    MissingLocal(&'static str),

    #[error("interval period must be nonzero")]
    ZeroInterval,
}
