use std::{fmt, slice::Iter};

use derive_more::{AsRef, Deref, Display, Into};
use uuid::Uuid;

use crate::{DeleteError, Property, ReadError, UpdateError};

#[allow(async_fn_in_trait)]
pub trait ProfileService: Send + Sync + 'static {
    async fn get_profile(&self, user_id: UserID) -> Result<Profile, ReadError>;
    async fn save_profile(&self, user_id: UserID, profile: Profile)
    -> Result<Profile, UpdateError>;
    async fn delete_profile(&self, user_id: UserID) -> Result<UserID, DeleteError>;

    fn validate_name(&self, name: &str) -> Result<Name, ProfileError> {
        Ok(Name::new(name)?)
    }

    fn validate_age(&self, age: &str) -> Result<Age, ProfileError> {
        Ok(Age::try_from(age)?)
    }

    fn validate_weight(&self, weight: &str) -> Result<Weight, ProfileError> {
        Ok(Weight::try_from(weight)?)
    }

    fn validate_height(&self, height: &str) -> Result<Height, ProfileError> {
        Ok(Height::try_from(height)?)
    }

    fn validate_frequency(&self, frequency: &str) -> Result<Frequency, ProfileError> {
        Ok(Frequency::try_from(frequency)?)
    }
}

#[allow(async_fn_in_trait)]
pub trait ProfileRepository: Send + Sync + 'static {
    async fn read_profile(&self, user_id: UserID) -> Result<Profile, ReadError>;
    async fn store_profile(
        &self,
        user_id: UserID,
        profile: Profile,
    ) -> Result<Profile, UpdateError>;
    async fn delete_profile(&self, user_id: UserID) -> Result<UserID, DeleteError>;
}

/// Input to both plan generators. All fields are validated on construction.
#[derive(Debug, Clone, PartialEq)]
pub struct Profile {
    pub name: Name,
    pub age: Age,
    pub sex: Sex,
    pub goal: Goal,
    pub frequency: Frequency,
    pub weight: Weight,
    pub height: Height,
}

#[derive(Deref, Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct UserID(Uuid);

impl UserID {
    #[must_use]
    pub fn nil() -> Self {
        Self(Uuid::nil())
    }

    #[must_use]
    pub fn is_nil(&self) -> bool {
        self.0.is_nil()
    }
}

impl From<Uuid> for UserID {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl From<u128> for UserID {
    fn from(value: u128) -> Self {
        Self(Uuid::from_bytes(value.to_be_bytes()))
    }
}

#[derive(AsRef, Debug, Display, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Name(String);

impl Name {
    pub fn new(name: &str) -> Result<Self, NameError> {
        let trimmed_name = name.trim();

        if trimmed_name.is_empty() {
            return Err(NameError::Empty);
        }

        let len = trimmed_name.len();

        if len > 64 {
            return Err(NameError::TooLong(len));
        }

        Ok(Name(trimmed_name.to_string()))
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum NameError {
    #[error("Name must not be empty")]
    Empty,
    #[error("Name must be 64 characters or fewer ({0} > 64)")]
    TooLong(usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sex {
    FEMALE,
    MALE,
}

impl From<u8> for Sex {
    fn from(value: u8) -> Self {
        match value {
            0 => Sex::FEMALE,
            _ => Sex::MALE,
        }
    }
}

impl From<&str> for Sex {
    fn from(value: &str) -> Self {
        match value {
            "female" => Sex::FEMALE,
            _ => Sex::MALE,
        }
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Sex::FEMALE => "female",
                Sex::MALE => "male",
            }
        )
    }
}

#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Goal {
    Hypertrophy,
    WeightLoss,
    Endurance,
}

impl Property for Goal {
    fn iter() -> Iter<'static, Goal> {
        static GOALS: [Goal; 3] = [Goal::Hypertrophy, Goal::WeightLoss, Goal::Endurance];
        GOALS.iter()
    }

    fn name(self) -> &'static str {
        match self {
            Goal::Hypertrophy => "Hypertrophy",
            Goal::WeightLoss => "Weight Loss",
            Goal::Endurance => "Endurance",
        }
    }
}

impl From<&str> for Goal {
    fn from(value: &str) -> Self {
        match value {
            "weight_loss" => Goal::WeightLoss,
            "endurance" => Goal::Endurance,
            _ => Goal::Hypertrophy,
        }
    }
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Goal::Hypertrophy => "hypertrophy",
                Goal::WeightLoss => "weight_loss",
                Goal::Endurance => "endurance",
            }
        )
    }
}

/// Number of active training days per week.
#[derive(Debug, Display, Clone, Copy, Into, PartialEq, Eq, PartialOrd, Ord)]
pub struct Frequency(u32);

impl Frequency {
    pub const MIN: Frequency = Frequency(3);
    pub const MAX: Frequency = Frequency(6);

    pub fn new(value: u32) -> Result<Self, FrequencyError> {
        if !(3..=6).contains(&value) {
            return Err(FrequencyError::OutOfRange(value));
        }

        Ok(Self(value))
    }

    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn days(self) -> usize {
        self.0 as usize
    }

    /// Training days plus the trailing rest slot.
    #[must_use]
    pub fn total_days(self) -> usize {
        self.days() + 1
    }
}

impl TryFrom<&str> for Frequency {
    type Error = FrequencyError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().parse::<u32>() {
            Ok(parsed_value) => Frequency::new(parsed_value),
            Err(_) => Err(FrequencyError::ParseError),
        }
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum FrequencyError {
    #[error("Frequency must be in the range 3 to 6 training days per week")]
    OutOfRange(u32),
    #[error("Frequency must be an integer")]
    ParseError,
}

/// Age in years.
#[derive(Debug, Display, Clone, Copy, Into, PartialEq, Eq, PartialOrd, Ord)]
pub struct Age(u32);

impl Age {
    pub fn new(value: u32) -> Result<Self, AgeError> {
        if !(1..150).contains(&value) {
            return Err(AgeError::OutOfRange);
        }

        Ok(Self(value))
    }
}

impl TryFrom<&str> for Age {
    type Error = AgeError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().parse::<u32>() {
            Ok(parsed_value) => Age::new(parsed_value),
            Err(_) => Err(AgeError::ParseError),
        }
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum AgeError {
    #[error("Age must be in the range 1 to 149 years")]
    OutOfRange,
    #[error("Age must be an integer")]
    ParseError,
}

/// Body weight in kilograms.
#[derive(Debug, Display, Clone, Copy, Into, PartialEq, PartialOrd)]
pub struct Weight(f32);

impl Weight {
    pub fn new(value: f32) -> Result<Self, WeightError> {
        if value <= 0.0 || value >= 1000.0 {
            return Err(WeightError::OutOfRange);
        }

        Ok(Self(value))
    }
}

impl TryFrom<&str> for Weight {
    type Error = WeightError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.replace(',', ".").trim().parse::<f32>() {
            Ok(parsed_value) => Weight::new(parsed_value),
            Err(_) => Err(WeightError::ParseError),
        }
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum WeightError {
    #[error("Weight must be a positive number below 1000 kg")]
    OutOfRange,
    #[error("Weight must be a decimal number")]
    ParseError,
}

/// Body height in centimetres.
#[derive(Debug, Display, Clone, Copy, Into, PartialEq, PartialOrd)]
pub struct Height(f32);

impl Height {
    pub fn new(value: f32) -> Result<Self, HeightError> {
        if value <= 0.0 || value >= 300.0 {
            return Err(HeightError::OutOfRange);
        }

        Ok(Self(value))
    }
}

impl TryFrom<&str> for Height {
    type Error = HeightError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.replace(',', ".").trim().parse::<f32>() {
            Ok(parsed_value) => Height::new(parsed_value),
            Err(_) => Err(HeightError::ParseError),
        }
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum HeightError {
    #[error("Height must be a positive number below 300 cm")]
    OutOfRange,
    #[error("Height must be a decimal number")]
    ParseError,
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum ProfileError {
    #[error(transparent)]
    Name(#[from] NameError),
    #[error(transparent)]
    Age(#[from] AgeError),
    #[error(transparent)]
    Weight(#[from] WeightError),
    #[error(transparent)]
    Height(#[from] HeightError),
    #[error(transparent)]
    Frequency(#[from] FrequencyError),
}
