// 🔥 Metabolic Calculator
// Mifflin-St Jeor BMR and activity-scaled daily energy requirement

use crate::error::{CalcResult, CalculatorError};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

// ============================================================================
// CORE TYPES
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    /// Constant term of the Mifflin-St Jeor equation
    pub fn offset(&self) -> f64 {
        match self {
            Gender::Male => 5.0,
            Gender::Female => -161.0,
        }
    }
}

impl FromStr for Gender {
    type Err = CalculatorError;

    /// Case-insensitive: "male", "Male" and "MALE" are all accepted
    fn from_str(s: &str) -> CalcResult<Self> {
        match s.to_lowercase().as_str() {
            "male" => Ok(Gender::Male),
            "female" => Ok(Gender::Female),
            _ => Err(CalculatorError::invalid(
                "gender",
                "gender must be male or female",
            )),
        }
    }
}

/// Self-reported activity level. Its text form is the ACTIVITY_FACTORS name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivityLevel {
    Sedentary,
    LightlyActive,
    ModeratelyActive,
    VeryActive,
    ExtraActive,
}

/// Lowercase name and BMR multiplier for every activity level
pub const ACTIVITY_FACTORS: &[(ActivityLevel, &str, f64)] = &[
    (ActivityLevel::Sedentary, "sedentary", 1.2),
    (ActivityLevel::LightlyActive, "lightly active", 1.375),
    (ActivityLevel::ModeratelyActive, "moderately active", 1.55),
    (ActivityLevel::VeryActive, "very active", 1.725),
    (ActivityLevel::ExtraActive, "extra active", 1.9),
];

impl ActivityLevel {
    // ACTIVITY_FACTORS is listed in declaration order
    fn entry(&self) -> &'static (ActivityLevel, &'static str, f64) {
        &ACTIVITY_FACTORS[*self as usize]
    }

    pub fn name(&self) -> &'static str {
        self.entry().1
    }

    pub fn multiplier(&self) -> f64 {
        self.entry().2
    }

    /// Comma-separated list of accepted level names
    pub fn valid_names() -> String {
        ACTIVITY_FACTORS
            .iter()
            .map(|(_, name, _)| *name)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl FromStr for ActivityLevel {
    type Err = CalculatorError;

    fn from_str(s: &str) -> CalcResult<Self> {
        let normalized = s.to_lowercase();

        ACTIVITY_FACTORS
            .iter()
            .find(|(_, name, _)| *name == normalized)
            .map(|(level, _, _)| *level)
            .ok_or_else(|| {
                CalculatorError::invalid(
                    "activity_level",
                    format!("activity level must be one of: {}", Self::valid_names()),
                )
            })
    }
}

impl fmt::Display for ActivityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Request-scoped biometric inputs
#[derive(Debug, Clone, PartialEq)]
pub struct Profile {
    pub weight_kg: f64,
    pub height_cm: f64,
    pub age_years: i32,
    pub gender: Gender,
    pub activity_level: ActivityLevel,
}

/// BMR and daily energy requirement for one profile
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EnergyEstimate {
    /// Basal metabolic rate, kcal/day
    pub bmr: f64,
    /// BMR times the activity multiplier. This is still a kcal-scale number,
    /// but it is compared as-is against the kJ values of the food table.
    /// No kcal→kJ conversion happens anywhere between the two.
    pub daily_energy: f64,
}

// ============================================================================
// FORMULAS
// ============================================================================

/// Mifflin-St Jeor: 10·weight + 6.25·height − 5·age + (5 | −161)
pub fn calculate_bmr(weight_kg: f64, height_cm: f64, age_years: i32, gender: Gender) -> f64 {
    10.0 * weight_kg + 6.25 * height_cm - 5.0 * f64::from(age_years) + gender.offset()
}

pub fn daily_energy(bmr: f64, activity_level: ActivityLevel) -> f64 {
    bmr * activity_level.multiplier()
}

/// Run both steps for a validated profile. No rounding is applied.
pub fn estimate(profile: &Profile) -> EnergyEstimate {
    let bmr = calculate_bmr(
        profile.weight_kg,
        profile.height_cm,
        profile.age_years,
        profile.gender,
    );

    EnergyEstimate {
        bmr,
        daily_energy: daily_energy(bmr, profile.activity_level),
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(gender: &str, activity: &str) -> CalcResult<Profile> {
        Ok(Profile {
            weight_kg: 70.0,
            height_cm: 175.0,
            age_years: 30,
            gender: gender.parse()?,
            activity_level: activity.parse()?,
        })
    }

    #[test]
    fn test_male_sedentary() {
        let result = estimate(&profile("male", "sedentary").unwrap());

        assert_eq!(result.bmr, 1648.75);
        assert!((result.daily_energy - 1978.5).abs() < 1e-9);
    }

    #[test]
    fn test_female_very_active_case_insensitive() {
        let p = Profile {
            weight_kg: 60.0,
            height_cm: 165.0,
            age_years: 25,
            gender: "FEMALE".parse().unwrap(),
            activity_level: "Very Active".parse().unwrap(),
        };
        let result = estimate(&p);

        assert_eq!(result.bmr, 1345.25);
        assert!((result.daily_energy - 2320.56125).abs() < 1e-9);
    }

    #[test]
    fn test_all_activity_multipliers() {
        let expected = [
            ("sedentary", 1.2),
            ("lightly active", 1.375),
            ("moderately active", 1.55),
            ("very active", 1.725),
            ("EXTRA ACTIVE", 1.9),
        ];

        for (name, factor) in expected {
            let level: ActivityLevel = name.parse().unwrap();
            assert_eq!(level.multiplier(), factor, "{}", name);
            assert_eq!(daily_energy(1000.0, level), 1000.0 * factor);
        }
    }

    #[test]
    fn test_unknown_gender_rejected() {
        let err = profile("other", "sedentary").unwrap_err();

        assert_eq!(err.field(), "gender");
        assert!(err.to_string().contains("gender must be male or female"));
    }

    #[test]
    fn test_unknown_activity_level_rejected() {
        let err = profile("male", "extreme").unwrap_err();

        assert_eq!(err.field(), "activity_level");
        let message = err.to_string();
        for (_, name, _) in ACTIVITY_FACTORS {
            assert!(message.contains(name), "missing {} in {}", name, message);
        }
    }

    #[test]
    fn test_factor_table_matches_enum_order() {
        for (level, name, _) in ACTIVITY_FACTORS {
            assert_eq!(level.name(), *name);
        }
    }

    #[test]
    fn test_activity_level_display_round_trips_name() {
        for (level, _, _) in ACTIVITY_FACTORS {
            let parsed: ActivityLevel = level.to_string().parse().unwrap();
            assert_eq!(parsed, *level);
        }
        assert_eq!(ActivityLevel::ModeratelyActive.to_string(), "moderately active");
    }
}
