use flock_core::FlockError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("flock configuration error: {0}")]
    Config(String),

    #[error("{requested} predators requested but a flock holds at most {cap}")]
    TooManyPredators {
        requested: usize,
        cap:       usize,
    },

    #[error(transparent)]
    Flock(#[from] FlockError),
}

pub type SimResult<T> = Result<T, SimError>;
