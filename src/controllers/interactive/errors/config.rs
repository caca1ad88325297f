use thiserror::Error;

use crate::core::util::coordinate_mapper::CoordinateMapperError;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("{field} must be a positive finite number, got {value}")]
    NotPositive { field: &'static str, value: f64 },

    #[error("{0} must be at least one pixel")]
    ZeroStride(&'static str),

    #[error("tick rate must be greater than zero")]
    ZeroTickRate,

    #[error("tick catch-up cap must be greater than zero")]
    ZeroTickCap,

    #[error("initial iteration budget {initial} exceeds the maximum of {max}")]
    InitialBudgetAboveMax { initial: u32, max: u32 },

    #[error("initial pan origin must be finite")]
    NonFiniteOrigin,

    #[error(transparent)]
    Mapper(#[from] CoordinateMapperError),
}
