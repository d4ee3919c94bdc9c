// Meal Energy Matcher - Core Library
// Exposes all modules for use in CLI, API server, and tests

pub mod calculator;
pub mod config;
pub mod energy;
pub mod error;
pub mod food;
pub mod logging;
pub mod matcher;
pub mod metabolic;

#[cfg(feature = "server")]
pub mod api;

// Re-export commonly used types
pub use calculator::{calculate, calculate_for_profile, CalculationRequest, CalculationResult};
pub use config::{DatasetConfig, ServerConfig};
pub use energy::{parse_energy, parse_energy_value, KJ_PER_KCAL};
pub use error::{CalcResult, CalculatorError};
pub use food::{load_csv, read_csv, FoodItem, FoodTable};
pub use matcher::{closest_meals, MealMatch, MAX_MEALS};
pub use metabolic::{
    calculate_bmr, daily_energy, estimate, ActivityLevel, EnergyEstimate, Gender, Profile,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
