use std::slice::Iter;

use crate::{Frequency, Property};

#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum MuscleGroup {
    Chest,
    Back,
    Legs,
    Shoulders,
    Arms,
    Cardio,
    Core,
}

impl Property for MuscleGroup {
    fn iter() -> Iter<'static, MuscleGroup> {
        static MUSCLE_GROUPS: [MuscleGroup; 7] = [
            MuscleGroup::Chest,
            MuscleGroup::Back,
            MuscleGroup::Legs,
            MuscleGroup::Shoulders,
            MuscleGroup::Arms,
            MuscleGroup::Cardio,
            MuscleGroup::Core,
        ];
        MUSCLE_GROUPS.iter()
    }

    fn name(self) -> &'static str {
        match self {
            MuscleGroup::Chest => "Chest",
            MuscleGroup::Back => "Back",
            MuscleGroup::Legs => "Legs",
            MuscleGroup::Shoulders => "Shoulders",
            MuscleGroup::Arms => "Arms",
            MuscleGroup::Cardio => "Cardio",
            MuscleGroup::Core => "Core",
        }
    }
}

const THREE_DAY_SPLIT: [&[MuscleGroup]; 4] = [
    &[MuscleGroup::Legs, MuscleGroup::Core],
    &[MuscleGroup::Chest, MuscleGroup::Shoulders, MuscleGroup::Arms],
    &[MuscleGroup::Back, MuscleGroup::Core],
    &[MuscleGroup::Cardio],
];

const FOUR_DAY_SPLIT: [&[MuscleGroup]; 5] = [
    &[MuscleGroup::Chest, MuscleGroup::Shoulders],
    &[MuscleGroup::Back, MuscleGroup::Arms],
    &[MuscleGroup::Legs, MuscleGroup::Core],
    &[MuscleGroup::Cardio],
    &[MuscleGroup::Cardio],
];

const FIVE_DAY_SPLIT: [&[MuscleGroup]; 5] = [
    &[MuscleGroup::Chest],
    &[MuscleGroup::Back],
    &[MuscleGroup::Legs],
    &[MuscleGroup::Shoulders, MuscleGroup::Core],
    &[MuscleGroup::Arms, MuscleGroup::Cardio],
];

const SIX_DAY_SPLIT: [&[MuscleGroup]; 6] = [
    &[MuscleGroup::Chest, MuscleGroup::Shoulders],
    &[MuscleGroup::Back, MuscleGroup::Core],
    &[MuscleGroup::Legs],
    &[MuscleGroup::Shoulders, MuscleGroup::Arms],
    &[MuscleGroup::Back, MuscleGroup::Legs, MuscleGroup::Core],
    &[MuscleGroup::Cardio],
];

/// Ordered day groupings for a training week. The plan assembler consumes
/// the first `frequency` entries.
#[must_use]
pub fn split_schedule(frequency: Frequency) -> &'static [&'static [MuscleGroup]] {
    match u32::from(frequency) {
        3 => &THREE_DAY_SPLIT,
        4 => &FOUR_DAY_SPLIT,
        5 => &FIVE_DAY_SPLIT,
        _ => &SIX_DAY_SPLIT,
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(3)]
    #[case(4)]
    #[case(5)]
    #[case(6)]
    fn test_split_schedule_covers_requested_days(#[case] frequency: u32) {
        let frequency = Frequency::new(frequency).unwrap();
        let schedule = split_schedule(frequency);

        assert!(schedule.len() >= frequency.days());
        assert!(schedule.iter().all(|groups| !groups.is_empty()));
    }

    #[rstest]
    #[case(3, &[
        MuscleGroup::Chest,
        MuscleGroup::Back,
        MuscleGroup::Legs,
        MuscleGroup::Shoulders,
        MuscleGroup::Arms,
        MuscleGroup::Core,
    ])]
    #[case(4, &[
        MuscleGroup::Chest,
        MuscleGroup::Back,
        MuscleGroup::Legs,
        MuscleGroup::Shoulders,
        MuscleGroup::Arms,
        MuscleGroup::Cardio,
        MuscleGroup::Core,
    ])]
    #[case(5, &[
        MuscleGroup::Chest,
        MuscleGroup::Back,
        MuscleGroup::Legs,
        MuscleGroup::Shoulders,
        MuscleGroup::Arms,
        MuscleGroup::Cardio,
        MuscleGroup::Core,
    ])]
    #[case(6, &[
        MuscleGroup::Chest,
        MuscleGroup::Back,
        MuscleGroup::Legs,
        MuscleGroup::Shoulders,
        MuscleGroup::Arms,
        MuscleGroup::Cardio,
        MuscleGroup::Core,
    ])]
    fn test_split_schedule_group_coverage(
        #[case] frequency: u32,
        #[case] expected: &[MuscleGroup],
    ) {
        let frequency = Frequency::new(frequency).unwrap();
        let covered = split_schedule(frequency)
            .iter()
            .take(frequency.days())
            .flat_map(|groups| groups.iter().copied())
            .collect::<BTreeSet<_>>();

        assert_eq!(covered, expected.iter().copied().collect::<BTreeSet<_>>());
    }

    #[test]
    fn test_six_day_split_ends_with_cardio() {
        let frequency = Frequency::MAX;
        let schedule = split_schedule(frequency);

        assert_eq!(schedule.len(), frequency.days());
        assert_eq!(schedule[frequency.days() - 1], &[MuscleGroup::Cardio]);
    }

    #[test]
    fn test_muscle_group_iter() {
        assert_eq!(MuscleGroup::iter().count(), 7);
        assert_eq!(
            MuscleGroup::iter().copied().collect::<BTreeSet<_>>().len(),
            7
        );
    }
}
