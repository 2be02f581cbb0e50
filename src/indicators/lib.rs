//! Indicator sequences derived from close-price series. Warmup entries are
//! explicit `None`s, never NaN, so downstream signal code can treat "not yet
//! available" as "no signal" on purpose.

pub mod oscillator;
pub mod trend;
