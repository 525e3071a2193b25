#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

pub mod catalog;
mod error;
mod nutrition;
mod plan;
mod profile;
mod service;
mod split;

use std::slice::Iter;

pub use error::{CreateError, DeleteError, ReadError, StorageError, UpdateError};
pub use nutrition::{
    ACTIVITY_FACTOR, Macros, MacrosError, Meal, NutritionPlan, NutritionService,
    basal_metabolic_rate, compute_nutrition, total_daily_energy_expenditure,
};
pub use plan::{
    DailyWorkout, Exercise, PlanRepository, PlanService, RepScheme, WorkoutPlan, assemble_plan,
    assign_day, prescription,
};
pub use profile::{
    Age, AgeError, Frequency, FrequencyError, Goal, Height, HeightError, Name, NameError, Profile,
    ProfileError, ProfileRepository, ProfileService, Sex, UserID, Weight, WeightError,
};
pub use service::Service;
pub use split::{MuscleGroup, split_schedule};

pub trait Property: Clone + Copy + Sized {
    fn iter() -> Iter<'static, Self>;
    fn name(self) -> &'static str;
}
