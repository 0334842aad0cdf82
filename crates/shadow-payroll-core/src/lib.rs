pub mod config;
pub mod error;
pub mod estimate;
pub mod payroll;
pub mod types;

#[cfg(feature = "payroll")]
pub mod calculations;

#[cfg(feature = "comparison")]
pub mod comparison;

#[cfg(feature = "estimation")]
pub mod estimator;

#[cfg(feature = "payroll")]
pub mod pe_risk;

#[cfg(feature = "comparison")]
pub mod store;

#[cfg(feature = "comparison")]
pub mod taxonomy;

pub use error::ShadowPayrollError;
pub use types::*;

/// Standard result type for all shadow-payroll operations
pub type ShadowPayrollResult<T> = Result<T, ShadowPayrollError>;
