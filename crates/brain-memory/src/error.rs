use brain_core::KeyId;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MemoryError {
    /// The key was never declared for this agent.  Distinct from "absent":
    /// reading an undeclared key is a caller contract violation.
    #[error("memory key {0} not declared for this agent")]
    Undeclared(KeyId),

    /// The slot holds a value of a different type than the key promises.
    /// Only reachable when two keys share a `KeyId` with different phantom
    /// types — a programming error in key declarations.
    #[error("memory key {0} holds a value of an unexpected type")]
    TypeMismatch(KeyId),

    /// The slot is declared but holds no live value.
    #[error("memory key {0} has no live value")]
    Missing(KeyId),
}

pub type MemoryResult<T> = Result<T, MemoryError>;
