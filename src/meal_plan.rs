//! # Weekly Meal Plan
//!
//! A meal plan has exactly 21 slots: seven days times Breakfast, Lunch and Dinner.
//! The slots are struct fields rather than map entries, so a plan can never lose or
//! gain a slot. Each slot holds a shared reference to a catalog recipe or nothing.
//!
//! The serialized form keeps the day and meal names as keys:
//!
//! ```json
//! { "Monday": { "Breakfast": null, "Lunch": { "id": 1, ... }, "Dinner": null }, ... }
//! ```

use chrono::Weekday;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

use crate::recipe::Recipe;

/// Day of the week, Monday first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Day {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

/// Meal slot within a day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MealType {
    Breakfast,
    Lunch,
    Dinner,
}

/// The three meals of one day
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct DayMeals {
    pub breakfast: Option<Arc<Recipe>>,
    pub lunch: Option<Arc<Recipe>>,
    pub dinner: Option<Arc<Recipe>>,
}

/// A week of meals
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct MealPlan {
    pub monday: DayMeals,
    pub tuesday: DayMeals,
    pub wednesday: DayMeals,
    pub thursday: DayMeals,
    pub friday: DayMeals,
    pub saturday: DayMeals,
    pub sunday: DayMeals,
}

impl Day {
    pub const ALL: [Day; 7] = [
        Day::Monday,
        Day::Tuesday,
        Day::Wednesday,
        Day::Thursday,
        Day::Friday,
        Day::Saturday,
        Day::Sunday,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Day::Monday => "Monday",
            Day::Tuesday => "Tuesday",
            Day::Wednesday => "Wednesday",
            Day::Thursday => "Thursday",
            Day::Friday => "Friday",
            Day::Saturday => "Saturday",
            Day::Sunday => "Sunday",
        }
    }

    /// Parse a full English day name
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.name() == value)
    }

    /// The local weekday right now
    pub fn today() -> Self {
        use chrono::Datelike;
        Self::from(chrono::Local::now().weekday())
    }
}

impl From<Weekday> for Day {
    fn from(weekday: Weekday) -> Self {
        match weekday {
            Weekday::Mon => Day::Monday,
            Weekday::Tue => Day::Tuesday,
            Weekday::Wed => Day::Wednesday,
            Weekday::Thu => Day::Thursday,
            Weekday::Fri => Day::Friday,
            Weekday::Sat => Day::Saturday,
            Weekday::Sun => Day::Sunday,
        }
    }
}

impl MealType {
    pub const ALL: [MealType; 3] = [MealType::Breakfast, MealType::Lunch, MealType::Dinner];

    pub fn name(&self) -> &'static str {
        match self {
            MealType::Breakfast => "Breakfast",
            MealType::Lunch => "Lunch",
            MealType::Dinner => "Dinner",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.name() == value)
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for MealType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl DayMeals {
    pub fn get(&self, meal: MealType) -> Option<&Arc<Recipe>> {
        match meal {
            MealType::Breakfast => self.breakfast.as_ref(),
            MealType::Lunch => self.lunch.as_ref(),
            MealType::Dinner => self.dinner.as_ref(),
        }
    }

    pub fn slot_mut(&mut self, meal: MealType) -> &mut Option<Arc<Recipe>> {
        match meal {
            MealType::Breakfast => &mut self.breakfast,
            MealType::Lunch => &mut self.lunch,
            MealType::Dinner => &mut self.dinner,
        }
    }

    /// Recipes of this day in Breakfast, Lunch, Dinner order
    pub fn recipes(&self) -> impl Iterator<Item = &Arc<Recipe>> {
        MealType::ALL.into_iter().filter_map(move |meal| self.get(meal))
    }
}

impl MealPlan {
    /// An empty week
    pub fn new() -> Self {
        Self::default()
    }

    pub fn day(&self, day: Day) -> &DayMeals {
        match day {
            Day::Monday => &self.monday,
            Day::Tuesday => &self.tuesday,
            Day::Wednesday => &self.wednesday,
            Day::Thursday => &self.thursday,
            Day::Friday => &self.friday,
            Day::Saturday => &self.saturday,
            Day::Sunday => &self.sunday,
        }
    }

    pub fn day_mut(&mut self, day: Day) -> &mut DayMeals {
        match day {
            Day::Monday => &mut self.monday,
            Day::Tuesday => &mut self.tuesday,
            Day::Wednesday => &mut self.wednesday,
            Day::Thursday => &mut self.thursday,
            Day::Friday => &mut self.friday,
            Day::Saturday => &mut self.saturday,
            Day::Sunday => &mut self.sunday,
        }
    }

    pub fn get(&self, day: Day, meal: MealType) -> Option<&Arc<Recipe>> {
        self.day(day).get(meal)
    }

    /// Put a recipe into a slot, or clear it with `None`. Returns the previous occupant.
    pub fn set(
        &mut self,
        day: Day,
        meal: MealType,
        recipe: Option<Arc<Recipe>>,
    ) -> Option<Arc<Recipe>> {
        std::mem::replace(self.day_mut(day).slot_mut(meal), recipe)
    }

    /// Replace all three meals of a day
    pub fn set_day(&mut self, day: Day, meals: DayMeals) {
        *self.day_mut(day) = meals;
    }

    /// Every slot, filled or not, in week order
    pub fn slots(&self) -> impl Iterator<Item = (Day, MealType, Option<&Arc<Recipe>>)> {
        Day::ALL.into_iter().flat_map(move |day| {
            MealType::ALL
                .into_iter()
                .map(move |meal| (day, meal, self.get(day, meal)))
        })
    }

    pub fn filled_count(&self) -> usize {
        self.slots().filter(|(_, _, r)| r.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.filled_count() == 0
    }

    /// Clear every slot
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
