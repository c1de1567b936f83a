//! Workout catalog with typed lookups.
//!
//! The catalog never substitutes a plan on its own: [`WorkoutCatalog::lookup`]
//! answers `Found` or `NotFound`, and callers that want the stock fallback
//! go through [`resolve_or_default`].

use crate::{
    error::{Result, StrideError},
    models::{Segment, WorkoutPlan},
};

/// ID of the plan served when a lookup misses.
pub const DEFAULT_WORKOUT_ID: &str = "default";

/// Outcome of a catalog lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup<T> {
    Found(T),
    NotFound,
}

impl<T> Lookup<T> {
    pub fn is_found(&self) -> bool {
        matches!(self, Lookup::Found(_))
    }

    /// Converts into an `Option`, dropping the miss.
    pub fn found(self) -> Option<T> {
        match self {
            Lookup::Found(value) => Some(value),
            Lookup::NotFound => None,
        }
    }
}

/// Source of workout plans.
pub trait WorkoutCatalog {
    /// Finds a plan by ID.
    fn lookup(&self, id: &str) -> Lookup<WorkoutPlan>;

    /// Lists the browsable plans in display order. The fallback plan is not
    /// part of the listing.
    fn list(&self) -> Vec<WorkoutPlan>;

    /// Plan to fall back to when a lookup misses.
    fn default_plan(&self) -> WorkoutPlan;
}

/// Looks up `id`, falling back to the catalog's default plan on a miss.
///
/// Returns the plan and whether it was the fallback.
pub fn resolve_or_default<C: WorkoutCatalog + ?Sized>(
    catalog: &C,
    id: &str,
) -> (WorkoutPlan, bool) {
    match catalog.lookup(id) {
        Lookup::Found(plan) => (plan, false),
        Lookup::NotFound => {
            log::info!("Workout '{id}' not in catalog, using default plan");
            (catalog.default_plan(), true)
        }
    }
}

/// Parses an `MM:SS` clock label into whole seconds.
///
/// # Errors
///
/// Returns `StrideError::InvalidInput` if the label is not two numeric
/// fields separated by a colon or the seconds field is 60 or more.
pub fn parse_clock_label(label: &str) -> Result<u32> {
    let invalid = |reason: &str| {
        StrideError::invalid_input("duration").with_reason(format!("'{label}' {reason}"))
    };

    let (minutes, seconds) = label
        .trim()
        .split_once(':')
        .ok_or_else(|| invalid("is not in MM:SS form"))?;
    let minutes: u32 = minutes
        .parse()
        .map_err(|_| invalid("has a non-numeric minute field"))?;
    let seconds: u32 = seconds
        .parse()
        .map_err(|_| invalid("has a non-numeric second field"))?;
    if seconds >= 60 {
        return Err(invalid("has more than 59 seconds"));
    }

    minutes
        .checked_mul(60)
        .and_then(|total| total.checked_add(seconds))
        .ok_or_else(|| invalid("is too long"))
}

/// Static description of a stock workout, durations as clock labels.
struct StockWorkout {
    id: &'static str,
    title: &'static str,
    description: &'static str,
    level: &'static str,
    duration: &'static str,
    kcal: u32,
    rounds: &'static [(&'static str, &'static str)],
}

const STOCK_WORKOUTS: &[StockWorkout] = &[
    StockWorkout {
        id: "1",
        title: "Upper Body Power",
        description: "Build upper body strength with this intensive power routine targeting chest, arms, and shoulders.",
        level: "Advanced",
        duration: "45 Mins",
        kcal: 320,
        rounds: &[
            ("Warm Up", "05:00"),
            ("Push Ups", "02:00"),
            ("Dumbbell Press", "03:00"),
            ("Pull Ups", "02:00"),
        ],
    },
    StockWorkout {
        id: "2",
        title: "Leg Shred",
        description: "Sculpt your legs and glutes with this intermediate shredding workout.",
        level: "Inter.",
        duration: "30 Mins",
        kcal: 250,
        rounds: &[
            ("Jump Squats", "03:00"),
            ("Lunges", "03:00"),
            ("Calf Raises", "02:00"),
        ],
    },
    StockWorkout {
        id: "3",
        title: "Morning Yoga",
        description: "Start your day with a relaxing yoga flow to improve flexibility and mindfulness.",
        level: "Beginner",
        duration: "20 Mins",
        kcal: 100,
        rounds: &[
            ("Sun Salutation", "05:00"),
            ("Warrior Pose", "03:00"),
            ("Tree Pose", "03:00"),
        ],
    },
    StockWorkout {
        id: DEFAULT_WORKOUT_ID,
        title: "Full Body Basics",
        description: "A great workout to keep you fit and healthy.",
        level: "General",
        duration: "20 Mins",
        kcal: 200,
        rounds: &[
            ("Warm Up", "05:00"),
            ("Basic Exercise", "10:00"),
            ("Cool Down", "05:00"),
        ],
    },
];

impl StockWorkout {
    fn to_plan(&self) -> Result<WorkoutPlan> {
        let segments = self
            .rounds
            .iter()
            .enumerate()
            .map(|(index, (title, clock))| {
                Ok(Segment::new((index + 1).to_string(), *title, parse_clock_label(clock)?))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(WorkoutPlan {
            id: self.id.to_string(),
            title: self.title.to_string(),
            description: self.description.to_string(),
            level: self.level.to_string(),
            total_duration_label: self.duration.to_string(),
            total_kcal: self.kcal,
            segments,
        })
    }
}

/// The stock workouts shipped with the application.
#[derive(Debug, Clone)]
pub struct BuiltinCatalog {
    plans: Vec<WorkoutPlan>,
    fallback: WorkoutPlan,
}

impl BuiltinCatalog {
    /// Builds the catalog, parsing every round's clock label.
    ///
    /// # Errors
    ///
    /// Returns `StrideError::InvalidInput` if a stock clock label is
    /// malformed, and `StrideError::WorkoutNotFound` if the default plan is
    /// missing from the table.
    pub fn new() -> Result<Self> {
        let mut plans = STOCK_WORKOUTS
            .iter()
            .map(StockWorkout::to_plan)
            .collect::<Result<Vec<_>>>()?;

        let fallback_index = plans
            .iter()
            .position(|plan| plan.id == DEFAULT_WORKOUT_ID)
            .ok_or_else(|| StrideError::WorkoutNotFound {
                id: DEFAULT_WORKOUT_ID.to_string(),
            })?;
        let fallback = plans.remove(fallback_index);

        Ok(Self { plans, fallback })
    }

    /// Builds a catalog from explicit plans.
    pub fn from_plans(plans: Vec<WorkoutPlan>, fallback: WorkoutPlan) -> Self {
        Self { plans, fallback }
    }
}

impl WorkoutCatalog for BuiltinCatalog {
    fn lookup(&self, id: &str) -> Lookup<WorkoutPlan> {
        if id == self.fallback.id {
            return Lookup::Found(self.fallback.clone());
        }
        self.plans
            .iter()
            .find(|plan| plan.id == id)
            .cloned()
            .map_or(Lookup::NotFound, Lookup::Found)
    }

    fn list(&self) -> Vec<WorkoutPlan> {
        self.plans.clone()
    }

    fn default_plan(&self) -> WorkoutPlan {
        self.fallback.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_clock_label() {
        assert_eq!(parse_clock_label("05:00").unwrap(), 300);
        assert_eq!(parse_clock_label("02:30").unwrap(), 150);
        assert_eq!(parse_clock_label("0:07").unwrap(), 7);
        assert!(parse_clock_label("5").is_err());
        assert!(parse_clock_label("aa:10").is_err());
        assert!(parse_clock_label("01:75").is_err());
    }

    #[test]
    fn test_builtin_catalog_lists_stock_workouts() {
        let catalog = BuiltinCatalog::new().unwrap();
        let ids: Vec<String> = catalog.list().into_iter().map(|plan| plan.id).collect();
        assert_eq!(ids, vec!["1", "2", "3"]);
    }

    #[test]
    fn test_lookup_found() {
        let catalog = BuiltinCatalog::new().unwrap();
        let plan = catalog.lookup("2").found().unwrap();
        assert_eq!(plan.title, "Leg Shred");
        assert_eq!(plan.segments.len(), 3);
        assert_eq!(plan.segments[0].title, "Jump Squats");
        assert_eq!(plan.segments[0].duration_seconds, 180);
        assert_eq!(plan.segments[2].duration_seconds, 120);
    }

    #[test]
    fn test_lookup_not_found_is_typed() {
        let catalog = BuiltinCatalog::new().unwrap();
        assert_eq!(catalog.lookup("99"), Lookup::NotFound);
        assert!(!catalog.lookup("").is_found());
    }

    #[test]
    fn test_resolve_or_default_falls_back() {
        let catalog = BuiltinCatalog::new().unwrap();

        let (plan, fallback) = resolve_or_default(&catalog, "1");
        assert_eq!(plan.title, "Upper Body Power");
        assert!(!fallback);

        let (plan, fallback) = resolve_or_default(&catalog, "unknown");
        assert_eq!(plan.id, DEFAULT_WORKOUT_ID);
        assert_eq!(plan.segments.len(), 3);
        assert!(fallback);
    }

    #[test]
    fn test_every_stock_plan_is_playable() {
        let catalog = BuiltinCatalog::new().unwrap();
        for plan in catalog.list() {
            plan.validate().unwrap();
        }
        catalog.default_plan().validate().unwrap();
    }
}
