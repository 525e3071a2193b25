use std::collections::BTreeMap;

use crate::MuscleGroup;

/// Candidate exercises per muscle group, passed to the exercise assigner
/// as immutable configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    exercises: BTreeMap<MuscleGroup, &'static [&'static str]>,
}

impl Catalog {
    #[must_use]
    pub fn new(exercises: BTreeMap<MuscleGroup, &'static [&'static str]>) -> Self {
        Self { exercises }
    }

    #[must_use]
    pub fn names(&self, group: MuscleGroup) -> &[&'static str] {
        self.exercises.get(&group).copied().unwrap_or_default()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self {
            exercises: DEFAULT_EXERCISES.into_iter().collect(),
        }
    }
}

const DEFAULT_EXERCISES: [(MuscleGroup, &[&str]); 7] = [
    (
        MuscleGroup::Chest,
        &[
            "Barbell Bench Press",
            "Dumbbell Incline Bench Press",
            "Cable Crossover",
            "Push Up",
        ],
    ),
    (
        MuscleGroup::Back,
        &[
            "Barbell Row",
            "Lat Pulldown",
            "Barbell Deadlift",
            "Back Extension",
        ],
    ),
    (
        MuscleGroup::Legs,
        &["Barbell Squat", "Leg Press", "Leg Extension", "Lying Leg Curl"],
    ),
    (
        MuscleGroup::Shoulders,
        &[
            "Dumbbell Shoulder Press",
            "Dumbbell Lateral Raise",
            "Barbell Upright Row",
            "Cable Rope Face Pull",
        ],
    ),
    (
        MuscleGroup::Arms,
        &[
            "Barbell Curl",
            "Cable Rope Triceps Pushdown",
            "Dumbbell Hammer Curl",
            "Barbell Skull Crusher",
        ],
    ),
    (
        MuscleGroup::Cardio,
        &[
            "Treadmill Run",
            "Elliptical Trainer",
            "Stationary Bike",
            "Burpee",
        ],
    ),
    (
        MuscleGroup::Core,
        &["Plank", "Crunch", "Russian Twist", "Hanging Leg Raise"],
    ),
];
