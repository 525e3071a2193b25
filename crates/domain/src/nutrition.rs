use crate::{Goal, Profile, Sex};

/// Fixed moderate-activity multiplier. Does not vary with the training
/// frequency.
pub const ACTIVITY_FACTOR: f64 = 1.55;

pub trait NutritionService: Send + Sync + 'static {
    /// Computed on demand from the profile, never persisted. Recomputation
    /// from the same profile is idempotent.
    #[must_use]
    fn nutrition_plan(&self, profile: &Profile) -> NutritionPlan {
        compute_nutrition(profile)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NutritionPlan {
    pub target_calories: i32,
    pub macros: Macros,
    pub suggestion_title: &'static str,
    pub meals: Vec<Meal>,
}

/// Percentage allocation of caloric intake. Always sums to 100.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Macros {
    pub protein: u8,
    pub carbs: u8,
    pub fat: u8,
}

impl Macros {
    pub fn new(protein: u8, carbs: u8, fat: u8) -> Result<Self, MacrosError> {
        let sum = u32::from(protein) + u32::from(carbs) + u32::from(fat);

        if sum != 100 {
            return Err(MacrosError::InvalidSum(sum));
        }

        Ok(Self {
            protein,
            carbs,
            fat,
        })
    }

    #[must_use]
    pub fn sum(&self) -> u32 {
        u32::from(self.protein) + u32::from(self.carbs) + u32::from(self.fat)
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum MacrosError {
    #[error("Macro percentages must sum to 100 ({0} != 100)")]
    InvalidSum(u32),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Meal {
    pub label: &'static str,
    pub icon: &'static str,
    pub options: &'static [&'static str],
}

/// Mifflin-St Jeor resting energy expenditure in kcal/day.
#[must_use]
pub fn basal_metabolic_rate(profile: &Profile) -> f64 {
    let weight = f64::from(f32::from(profile.weight));
    let height = f64::from(f32::from(profile.height));
    let age = f64::from(u32::from(profile.age));
    let offset = match profile.sex {
        Sex::MALE => 5.0,
        Sex::FEMALE => -161.0,
    };

    10.0 * weight + 6.25 * height - 5.0 * age + offset
}

#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn total_daily_energy_expenditure(bmr: f64) -> i32 {
    (bmr * ACTIVITY_FACTOR).round() as i32
}

const fn goal_targets(goal: Goal) -> (i32, Macros) {
    match goal {
        Goal::WeightLoss => (
            -500,
            Macros {
                protein: 40,
                carbs: 30,
                fat: 30,
            },
        ),
        Goal::Hypertrophy => (
            300,
            Macros {
                protein: 30,
                carbs: 50,
                fat: 20,
            },
        ),
        Goal::Endurance => (
            0,
            Macros {
                protein: 30,
                carbs: 40,
                fat: 30,
            },
        ),
    }
}

const fn suggestion_title(goal: Goal) -> &'static str {
    match goal {
        Goal::Hypertrophy => "Muscle-Building Meal Suggestions",
        Goal::WeightLoss => "Calorie-Deficit Meal Suggestions",
        Goal::Endurance => "Endurance Fuel Meal Suggestions",
    }
}

const HYPERTROPHY_BREAKFAST: &[&str] = &[
    "Scrambled eggs with oatmeal and a banana",
    "Greek yogurt with granola and whey protein",
    "Omelette with whole-grain toast and cottage cheese",
];

const DEFAULT_BREAKFAST: &[&str] = &[
    "Scrambled eggs with whole-grain toast",
    "Greek yogurt with berries",
    "Oatmeal with fruit and nuts",
];

const LUNCH: &[&str] = &[
    "Grilled chicken breast with rice and vegetables",
    "Lean beef with sweet potato and salad",
    "Baked salmon with quinoa and broccoli",
];

const HYPERTROPHY_SNACK: &[&str] = &[
    "Protein shake with peanut butter",
    "Cottage cheese with almonds",
    "Tuna sandwich on whole-grain bread",
];

const DEFAULT_SNACK: &[&str] = &[
    "Apple with a handful of nuts",
    "Carrot sticks with hummus",
    "Low-fat yogurt",
];

const DINNER: &[&str] = &[
    "Grilled fish with steamed vegetables",
    "Chicken stir-fry with brown rice",
    "Turkey breast with roasted vegetables",
];

fn meals(goal: Goal) -> Vec<Meal> {
    let (breakfast, snack) = match goal {
        Goal::Hypertrophy => (HYPERTROPHY_BREAKFAST, HYPERTROPHY_SNACK),
        _ => (DEFAULT_BREAKFAST, DEFAULT_SNACK),
    };

    vec![
        Meal {
            label: "Breakfast",
            icon: "sunrise",
            options: breakfast,
        },
        Meal {
            label: "Lunch",
            icon: "sun",
            options: LUNCH,
        },
        Meal {
            label: "Afternoon Snack",
            icon: "apple",
            options: snack,
        },
        Meal {
            label: "Dinner",
            icon: "moon",
            options: DINNER,
        },
    ]
}

/// Calorie target, macro split and meal suggestions for a profile.
/// Deterministic: no randomness, no clock.
#[must_use]
pub fn compute_nutrition(profile: &Profile) -> NutritionPlan {
    let tdee = total_daily_energy_expenditure(basal_metabolic_rate(profile));
    let (adjustment, macros) = goal_targets(profile.goal);

    NutritionPlan {
        target_calories: tdee + adjustment,
        macros,
        suggestion_title: suggestion_title(profile.goal),
        meals: meals(profile.goal),
    }
}

#[cfg(test)]
mod tests {
    use assert_approx_eq::assert_approx_eq;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use crate::{Age, Frequency, Height, Name, Property, Weight};

    use super::*;

    fn profile(goal: Goal, sex: Sex) -> Profile {
        Profile {
            name: Name::new("Alice").unwrap(),
            age: Age::new(25).unwrap(),
            sex,
            goal,
            frequency: Frequency::new(4).unwrap(),
            weight: Weight::new(70.0).unwrap(),
            height: Height::new(175.0).unwrap(),
        }
    }

    #[test]
    fn test_basal_metabolic_rate() {
        assert_approx_eq!(
            basal_metabolic_rate(&profile(Goal::Hypertrophy, Sex::MALE)),
            1673.75,
            0.001
        );
        assert_approx_eq!(
            basal_metabolic_rate(&profile(Goal::Hypertrophy, Sex::FEMALE)),
            1507.75,
            0.001
        );
    }

    #[test]
    fn test_total_daily_energy_expenditure() {
        assert_eq!(total_daily_energy_expenditure(1673.75), 2594);
    }

    #[rstest]
    #[case(Goal::Hypertrophy, 2894, Macros { protein: 30, carbs: 50, fat: 20 })]
    #[case(Goal::WeightLoss, 2094, Macros { protein: 40, carbs: 30, fat: 30 })]
    #[case(Goal::Endurance, 2594, Macros { protein: 30, carbs: 40, fat: 30 })]
    fn test_compute_nutrition_targets(
        #[case] goal: Goal,
        #[case] target_calories: i32,
        #[case] macros: Macros,
    ) {
        let plan = compute_nutrition(&profile(goal, Sex::MALE));

        assert_eq!(plan.target_calories, target_calories);
        assert_eq!(plan.macros, macros);
    }

    #[test]
    fn test_macros_sum_to_100_for_every_goal() {
        for goal in Goal::iter() {
            let plan = compute_nutrition(&profile(*goal, Sex::FEMALE));
            assert_eq!(plan.macros.sum(), 100, "{}", goal.name());
        }
    }

    #[rstest]
    #[case(30, 50, 20, Ok(Macros { protein: 30, carbs: 50, fat: 20 }))]
    #[case(40, 40, 30, Err(MacrosError::InvalidSum(110)))]
    #[case(0, 0, 0, Err(MacrosError::InvalidSum(0)))]
    fn test_macros_new(
        #[case] protein: u8,
        #[case] carbs: u8,
        #[case] fat: u8,
        #[case] expected: Result<Macros, MacrosError>,
    ) {
        assert_eq!(Macros::new(protein, carbs, fat), expected);
    }

    #[test]
    fn test_compute_nutrition_is_idempotent() {
        let profile = profile(Goal::WeightLoss, Sex::FEMALE);

        assert_eq!(compute_nutrition(&profile), compute_nutrition(&profile));
    }

    #[test]
    fn test_meal_schedule() {
        let plan = compute_nutrition(&profile(Goal::Endurance, Sex::MALE));

        assert_eq!(
            plan.meals
                .iter()
                .map(|meal| meal.label)
                .collect::<Vec<_>>(),
            vec!["Breakfast", "Lunch", "Afternoon Snack", "Dinner"]
        );
    }

    #[test]
    fn test_meals_conditioned_on_goal() {
        let hypertrophy = compute_nutrition(&profile(Goal::Hypertrophy, Sex::MALE));
        let endurance = compute_nutrition(&profile(Goal::Endurance, Sex::MALE));
        let weight_loss = compute_nutrition(&profile(Goal::WeightLoss, Sex::MALE));

        assert_ne!(hypertrophy.meals[0].options, endurance.meals[0].options);
        assert_ne!(hypertrophy.meals[2].options, endurance.meals[2].options);
        assert_eq!(weight_loss.meals[0].options, endurance.meals[0].options);
        assert_eq!(hypertrophy.meals[1], endurance.meals[1]);
        assert_eq!(hypertrophy.meals[3], endurance.meals[3]);
    }
}
