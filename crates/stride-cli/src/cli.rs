//! Subcommand arguments and their handlers.
//!
//! Argument structs carry the clap derives and convert into the core
//! parameter types, so `stride-core` never depends on clap. Conversions that
//! need the globally configured user go through `into_params(user)`; the
//! rest use `From`.

use std::time::Duration;

use anyhow::{bail, Context, Result};
use clap::{Args, Subcommand};
use stride_core::{
    catalog::{resolve_or_default, BuiltinCatalog, Lookup, WorkoutCatalog},
    display::{OperationStatus, WorkoutPlans},
    params::{
        CreateCustomWorkout, Id, ListHistory, UpdateCustomWorkout, UpdateProfile, UserScope,
        WorkoutRef,
    },
    Tracker,
};

use crate::{play, renderer::TerminalRenderer};

#[derive(Args)]
pub struct ShowWorkoutArgs {
    #[arg(help = "Catalog ID of the workout to show")]
    pub id: String,
}

impl From<ShowWorkoutArgs> for WorkoutRef {
    fn from(val: ShowWorkoutArgs) -> Self {
        WorkoutRef { workout_id: val.id }
    }
}

#[derive(Subcommand)]
pub enum WorkoutCommands {
    /// List the stock workouts
    #[command(aliases = ["l", "ls"])]
    List,
    /// Show a workout and its rounds
    #[command(alias = "s")]
    Show(ShowWorkoutArgs),
}

/// Play a workout
///
/// Controls are read line by line from stdin: p pause, r resume, n next
/// round, b previous round, q quit (then y to confirm or n to keep going).
#[derive(Args)]
pub struct StartArgs {
    #[arg(help = "Catalog ID of the workout. Unknown IDs play the default workout")]
    pub workout_id: String,

    /// Length of one countdown second in milliseconds
    #[arg(long, hide = true, default_value_t = 1000)]
    pub tick_millis: u64,
}

impl StartArgs {
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_millis)
    }
}

#[derive(Args)]
pub struct HistoryArgs {
    #[arg(short, long, help = "Maximum number of sessions to list")]
    pub limit: Option<u32>,
}

impl HistoryArgs {
    pub fn into_params(self, user_id: String) -> ListHistory {
        ListHistory {
            user_id,
            limit: self.limit,
        }
    }
}

#[derive(Args)]
pub struct AddCustomArgs {
    /// Title of the workout
    pub title: String,
    #[arg(short, long, help = "Duration as you want it shown, e.g. '30 Mins'")]
    pub duration: String,
    #[arg(short, long, help = "Calories burned, e.g. '250'")]
    pub kcal: String,
}

impl AddCustomArgs {
    pub fn into_params(self, user_id: String) -> CreateCustomWorkout {
        CreateCustomWorkout {
            user_id,
            title: self.title,
            duration: self.duration,
            kcal: self.kcal,
        }
    }
}

#[derive(Args)]
pub struct UpdateCustomArgs {
    #[arg(help = "ID of the custom workout to update")]
    pub id: u64,
    #[arg(short, long, help = "New title")]
    pub title: Option<String>,
    #[arg(short, long, help = "New duration")]
    pub duration: Option<String>,
    #[arg(short, long, help = "New calories")]
    pub kcal: Option<String>,
}

impl From<UpdateCustomArgs> for UpdateCustomWorkout {
    fn from(val: UpdateCustomArgs) -> Self {
        UpdateCustomWorkout {
            id: val.id,
            title: val.title,
            duration: val.duration,
            kcal: val.kcal,
        }
    }
}

#[derive(Args)]
pub struct DeleteCustomArgs {
    #[arg(help = "ID of the custom workout to delete")]
    pub id: u64,
}

impl From<DeleteCustomArgs> for Id {
    fn from(val: DeleteCustomArgs) -> Self {
        Id { id: val.id }
    }
}

#[derive(Subcommand)]
pub enum CustomCommands {
    /// Add a custom workout
    #[command(alias = "a")]
    Add(AddCustomArgs),
    /// List your custom workouts
    #[command(aliases = ["l", "ls"])]
    List,
    /// Change fields of a custom workout
    #[command(alias = "u")]
    Update(UpdateCustomArgs),
    /// Delete a custom workout
    #[command(aliases = ["d", "rm"])]
    Delete(DeleteCustomArgs),
}

/// Fields to save. Anything left out keeps its stored value; saving a body
/// stat marks onboarding complete.
#[derive(Args)]
pub struct SetProfileArgs {
    #[arg(short, long, help = "Display name")]
    pub name: Option<String>,
    #[arg(short, long, help = "Age in years")]
    pub age: Option<u32>,
    #[arg(short, long, help = "Weight in kilograms")]
    pub weight: Option<f64>,
    #[arg(long, help = "Height in centimetres")]
    pub height: Option<f64>,
    #[arg(short, long)]
    pub gender: Option<String>,
    #[arg(short, long, help = "Beginner, Intermediate or Advanced")]
    pub level: Option<String>,
    #[arg(long, help = "Mark onboarding as complete (true) or pending (false)")]
    pub onboarding_complete: Option<bool>,
}

impl SetProfileArgs {
    pub fn into_params(self, user_id: String) -> UpdateProfile {
        UpdateProfile {
            user_id,
            name: self.name,
            age: self.age,
            weight_kg: self.weight,
            height_cm: self.height,
            gender: self.gender,
            fitness_level: self.level,
            onboarding_complete: self.onboarding_complete,
        }
    }
}

#[derive(Subcommand)]
pub enum ProfileCommands {
    /// Show your profile
    #[command(alias = "s")]
    Show,
    /// Save profile fields
    Set(SetProfileArgs),
}

/// Runs commands against the tracker and prints their markdown.
pub struct Cli {
    tracker: Tracker,
    catalog: BuiltinCatalog,
    renderer: TerminalRenderer,
    user: String,
}

impl Cli {
    pub fn new(tracker: Tracker, renderer: TerminalRenderer, user: String) -> Result<Self> {
        let catalog = BuiltinCatalog::new().context("Failed to load workout catalog")?;
        Ok(Self {
            tracker,
            catalog,
            renderer,
            user,
        })
    }

    fn user_scope(&self) -> UserScope {
        UserScope {
            user_id: self.user.clone(),
        }
    }

    pub async fn list_workouts(&self) -> Result<()> {
        let plans = WorkoutPlans(self.catalog.list());
        self.renderer.render(&format!("# Workouts\n\n{plans}"))
    }

    pub async fn handle_workout_command(&self, command: WorkoutCommands) -> Result<()> {
        match command {
            WorkoutCommands::List => self.list_workouts().await,
            WorkoutCommands::Show(args) => {
                let params = WorkoutRef::from(args);
                match self.catalog.lookup(&params.workout_id) {
                    Lookup::Found(plan) => self.renderer.render(&plan.to_string()),
                    Lookup::NotFound => bail!("Workout '{}' not found", params.workout_id),
                }
            }
        }
    }

    pub async fn start_workout(&self, args: StartArgs) -> Result<()> {
        let (plan, fell_back) = resolve_or_default(&self.catalog, &args.workout_id);
        if fell_back {
            self.renderer.render(&format!(
                "Workout '{}' not found, starting {} instead.\n",
                args.workout_id, plan.title
            ))?;
        }

        play::run(
            plan,
            &self.user,
            &self.tracker,
            &self.renderer,
            args.tick_interval(),
        )
        .await
    }

    pub async fn list_history(&self, args: HistoryArgs) -> Result<()> {
        let params = args.into_params(self.user.clone());
        let logs = self
            .tracker
            .list_history_result(&params)
            .await
            .context("Failed to list history")?;
        self.renderer.render(&format!("# History\n\n{logs}"))
    }

    pub async fn show_report(&self) -> Result<()> {
        let report = self
            .tracker
            .progress_report(&self.user_scope())
            .await
            .context("Failed to build progress report")?;
        self.renderer.render(&report.to_string())
    }

    pub async fn handle_custom_command(&self, command: CustomCommands) -> Result<()> {
        match command {
            CustomCommands::Add(args) => {
                let params = args.into_params(self.user.clone());
                let result = self
                    .tracker
                    .create_custom_workout_result(&params)
                    .await
                    .context("Failed to add custom workout")?;
                self.renderer.render(&result.to_string())
            }
            CustomCommands::List => {
                let workouts = self
                    .tracker
                    .list_custom_workouts_result(&self.user_scope())
                    .await
                    .context("Failed to list custom workouts")?;
                self.renderer
                    .render(&format!("# Custom Workouts\n\n{workouts}"))
            }
            CustomCommands::Update(args) => {
                let params = UpdateCustomWorkout::from(args);
                let result = self
                    .tracker
                    .update_custom_workout_result(&params)
                    .await
                    .context("Failed to update custom workout")?;
                self.renderer.render(&result.to_string())
            }
            CustomCommands::Delete(args) => {
                let params = Id::from(args);
                match self
                    .tracker
                    .delete_custom_workout_result(&params)
                    .await
                    .context("Failed to delete custom workout")?
                {
                    Some(result) => self.renderer.render(&result.to_string()),
                    None => {
                        let status = OperationStatus::not_found("Custom workout", params.id);
                        self.renderer.render(&status.to_string())
                    }
                }
            }
        }
    }

    pub async fn handle_profile_command(&self, command: ProfileCommands) -> Result<()> {
        match command {
            ProfileCommands::Show => {
                let profile = self
                    .tracker
                    .get_profile(&self.user_scope())
                    .await
                    .context("Failed to get profile")?;
                match profile {
                    Some(profile) => self.renderer.render(&profile.to_string()),
                    None => {
                        let status = OperationStatus::missing_profile(&self.user);
                        self.renderer.render(&status.to_string())
                    }
                }
            }
            ProfileCommands::Set(args) => {
                let params = args.into_params(self.user.clone());
                let result = self
                    .tracker
                    .update_profile_result(&params)
                    .await
                    .context("Failed to update profile")?;
                self.renderer.render(&result.to_string())
            }
        }
    }
}
