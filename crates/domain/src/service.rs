use log::{debug, error};
use rand::thread_rng;

use crate::{
    CreateError, DeleteError, Frequency, Goal, NutritionService, PlanRepository, PlanService,
    Profile, ProfileRepository, ProfileService, ReadError, UpdateError, UserID, WorkoutPlan,
    assemble_plan, catalog::Catalog,
};

pub struct Service<R> {
    repository: R,
    catalog: Catalog,
}

impl<R> Service<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository,
            catalog: Catalog::default(),
        }
    }

    pub fn with_catalog(repository: R, catalog: Catalog) -> Self {
        Self {
            repository,
            catalog,
        }
    }
}

macro_rules! log_on_error {
    ($func: expr, $error: ident, $action: literal, $entity: literal) => {{
        let result = $func.await;
        match result {
            Ok(_) => {}
            Err(ref err) => match err {
                $error::Storage(crate::StorageError::NoConnection) => {
                    debug!("failed to {} {}: {err}", $action, $entity);
                }
                _ => {
                    error!("failed to {} {}: {err}", $action, $entity);
                }
            },
        }
        result
    }};
}

impl<R: PlanRepository> PlanService for Service<R> {
    async fn get_workout_plan(&self, user_id: UserID) -> Result<WorkoutPlan, ReadError> {
        log_on_error!(
            self.repository.read_workout_plan(user_id),
            ReadError,
            "get",
            "workout plan"
        )
    }

    async fn generate_workout_plan(
        &self,
        user_id: UserID,
        goal: Goal,
        frequency: Frequency,
    ) -> Result<WorkoutPlan, CreateError> {
        let plan = assemble_plan(goal, frequency, &self.catalog, &mut thread_rng());
        log_on_error!(
            self.repository.store_workout_plan(user_id, plan),
            CreateError,
            "store",
            "workout plan"
        )
    }
}

impl<R: ProfileRepository> ProfileService for Service<R> {
    async fn get_profile(&self, user_id: UserID) -> Result<Profile, ReadError> {
        log_on_error!(
            self.repository.read_profile(user_id),
            ReadError,
            "get",
            "profile"
        )
    }

    async fn save_profile(
        &self,
        user_id: UserID,
        profile: Profile,
    ) -> Result<Profile, UpdateError> {
        log_on_error!(
            self.repository.store_profile(user_id, profile),
            UpdateError,
            "save",
            "profile"
        )
    }

    async fn delete_profile(&self, user_id: UserID) -> Result<UserID, DeleteError> {
        log_on_error!(
            self.repository.delete_profile(user_id),
            DeleteError,
            "delete",
            "profile"
        )
    }
}

impl<R: Send + Sync + 'static> NutritionService for Service<R> {}
