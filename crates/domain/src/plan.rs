use std::fmt;

use chrono::{DateTime, Utc};
use rand::{Rng, seq::SliceRandom};

use crate::{
    CreateError, Frequency, Goal, MuscleGroup, Property, ReadError, UserID, catalog::Catalog,
    split_schedule,
};

#[allow(async_fn_in_trait)]
pub trait PlanService: Send + Sync + 'static {
    async fn get_workout_plan(&self, user_id: UserID) -> Result<WorkoutPlan, ReadError>;
    async fn generate_workout_plan(
        &self,
        user_id: UserID,
        goal: Goal,
        frequency: Frequency,
    ) -> Result<WorkoutPlan, CreateError>;
}

#[allow(async_fn_in_trait)]
pub trait PlanRepository: Send + Sync + 'static {
    async fn read_workout_plan(&self, user_id: UserID) -> Result<WorkoutPlan, ReadError>;
    async fn store_workout_plan(
        &self,
        user_id: UserID,
        plan: WorkoutPlan,
    ) -> Result<WorkoutPlan, CreateError>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkoutPlan {
    pub goal: Goal,
    pub frequency: Frequency,
    pub daily_plans: Vec<DailyWorkout>,
    pub generated_on: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DailyWorkout {
    pub day: String,
    pub theme: String,
    pub exercises: Vec<Exercise>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exercise {
    pub name: String,
    pub sets: u32,
    pub reps: RepScheme,
}

/// Rendered with `Display` when handed to the persistence collaborator:
/// "8-12", "30 min" or "0" for the zero-load placeholder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepScheme {
    Range { min: u32, max: u32 },
    Minutes(u32),
    None,
}

impl fmt::Display for RepScheme {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            RepScheme::Range { min, max } => write!(f, "{min}-{max}"),
            RepScheme::Minutes(minutes) => write!(f, "{minutes} min"),
            RepScheme::None => write!(f, "0"),
        }
    }
}

const RECOVERY_THEME: &str = "Rest / Active Recovery";
const REST_THEME: &str = "Full Rest";

/// Sets and reps as a function of goal and muscle group. Cardio slots get a
/// fixed duration regardless of goal.
#[must_use]
pub fn prescription(goal: Goal, group: MuscleGroup) -> (u32, RepScheme) {
    match (goal, group) {
        (_, MuscleGroup::Cardio) => (1, RepScheme::Minutes(30)),
        (Goal::WeightLoss, _) => (4, RepScheme::Range { min: 12, max: 15 }),
        (Goal::Endurance, _) => (5, RepScheme::Range { min: 15, max: 20 }),
        (Goal::Hypertrophy, _) => (3, RepScheme::Range { min: 8, max: 12 }),
    }
}

const fn draw_count(group: MuscleGroup) -> usize {
    match group {
        MuscleGroup::Cardio | MuscleGroup::Core => 1,
        _ => 3,
    }
}

fn theme(groups: &[MuscleGroup]) -> String {
    if groups.is_empty() {
        return "Rest".to_string();
    }

    groups
        .iter()
        .map(|group| group.name())
        .collect::<Vec<_>>()
        .join(" & ")
}

/// Fill one day's grouping with exercises drawn from the catalog.
///
/// Exercises are drawn uniformly without replacement (partial Fisher-Yates),
/// so a group never prescribes the same exercise twice on one day. The day
/// label is left empty and assigned by the plan assembler.
///
/// # Panics
///
/// Panics if the catalog has fewer candidates for a group than the draw
/// count. The catalog is static configuration, so this is a programmer
/// error, not a recoverable condition.
#[must_use]
pub fn assign_day(
    groups: &[MuscleGroup],
    goal: Goal,
    catalog: &Catalog,
    rng: &mut impl Rng,
) -> DailyWorkout {
    let mut exercises = Vec::new();

    for group in groups {
        let mut candidates = catalog.names(*group).to_vec();
        let count = draw_count(*group);

        assert!(
            candidates.len() >= count,
            "exercise catalog exhausted for {}",
            group.name()
        );

        let (drawn, _) = candidates.partial_shuffle(rng, count);
        let (sets, reps) = prescription(goal, *group);

        exercises.extend(drawn.iter().map(|name| Exercise {
            name: (*name).to_string(),
            sets,
            reps,
        }));
    }

    DailyWorkout {
        day: String::new(),
        theme: theme(groups),
        exercises,
    }
}

fn day_label(index: usize) -> String {
    format!("Day {}", index + 1)
}

fn rest_day(day: String, theme: &str) -> DailyWorkout {
    DailyWorkout {
        day,
        theme: theme.to_string(),
        exercises: vec![Exercise {
            name: REST_THEME.to_string(),
            sets: 0,
            reps: RepScheme::None,
        }],
    }
}

/// Build a complete weekly plan: one workout per training day followed by
/// the trailing rest slot, `frequency + 1` days in total.
#[must_use]
pub fn assemble_plan(
    goal: Goal,
    frequency: Frequency,
    catalog: &Catalog,
    rng: &mut impl Rng,
) -> WorkoutPlan {
    let mut daily_plans = split_schedule(frequency)
        .iter()
        .take(frequency.days())
        .enumerate()
        .map(|(index, groups)| {
            let mut workout = assign_day(groups, goal, catalog, rng);
            workout.day = day_label(index);
            workout
        })
        .collect::<Vec<_>>();

    if frequency < Frequency::MAX {
        daily_plans.push(rest_day(day_label(daily_plans.len()), RECOVERY_THEME));
    }

    while daily_plans.len() < frequency.total_days() {
        daily_plans.push(rest_day(day_label(daily_plans.len()), REST_THEME));
    }

    daily_plans.truncate(frequency.total_days());

    WorkoutPlan {
        goal,
        frequency,
        daily_plans,
        generated_on: Utc::now(),
    }
}
