//! Request types for updating models.

/// Partial update of a custom workout. `None` fields are left untouched.
#[derive(Debug, Default, Clone)]
pub struct UpdateCustomWorkoutRequest {
    pub title: Option<String>,
    pub duration: Option<String>,
    pub kcal: Option<String>,
}

impl UpdateCustomWorkoutRequest {
    /// Returns true when the request would not change anything.
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.duration.is_none() && self.kcal.is_none()
    }

    /// Human readable list of the fields this request changes.
    pub fn describe_changes(&self) -> Vec<String> {
        let mut changes = Vec::new();
        if let Some(title) = &self.title {
            changes.push(format!("Title set to '{title}'"));
        }
        if let Some(duration) = &self.duration {
            changes.push(format!("Duration set to '{duration}'"));
        }
        if let Some(kcal) = &self.kcal {
            changes.push(format!("Calories set to '{kcal}'"));
        }
        changes
    }
}

/// Merge into a user profile. `None` fields keep their stored value, so
/// repeated updates build the profile up the way onboarding does.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct UpdateProfileRequest {
    pub name: Option<String>,
    pub age: Option<u32>,
    pub weight_kg: Option<f64>,
    pub height_cm: Option<f64>,
    pub gender: Option<String>,
    pub fitness_level: Option<String>,
    pub onboarding_complete: Option<bool>,
}

impl UpdateProfileRequest {
    /// Returns true when the request would not change anything.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// True if any body stat is part of the request.
    pub fn has_stats(&self) -> bool {
        self.age.is_some()
            || self.weight_kg.is_some()
            || self.height_cm.is_some()
            || self.gender.is_some()
            || self.fitness_level.is_some()
    }

    /// Human readable list of the fields this request changes.
    pub fn describe_changes(&self) -> Vec<String> {
        let mut changes = Vec::new();
        if let Some(name) = &self.name {
            changes.push(format!("Name set to '{name}'"));
        }
        if let Some(age) = self.age {
            changes.push(format!("Age set to {age}"));
        }
        if let Some(weight) = self.weight_kg {
            changes.push(format!("Weight set to {weight} kg"));
        }
        if let Some(height) = self.height_cm {
            changes.push(format!("Height set to {height} cm"));
        }
        if let Some(gender) = &self.gender {
            changes.push(format!("Gender set to '{gender}'"));
        }
        if let Some(level) = &self.fitness_level {
            changes.push(format!("Fitness level set to '{level}'"));
        }
        match self.onboarding_complete {
            Some(true) => changes.push("Onboarding marked complete".to_string()),
            Some(false) => changes.push("Onboarding marked pending".to_string()),
            None => {}
        }
        changes
    }
}
