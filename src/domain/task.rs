//! Habits, dailies, to-dos and rewards.

use serde::{Deserialize, Serialize};

use super::id::{DailyId, HabitId};

text_enum!(
    /// How hard a task is; sets the gold it pays out.
    Difficulty, "difficulty" {
        Trivial => "TRIVIAL",
        Easy => "EASY",
        Medium => "MEDIUM",
        Hard => "HARD",
    }
);

impl Difficulty {
    /// Gold earned for completing a task of this difficulty once.
    #[must_use]
    pub const fn gold_reward(self) -> i32 {
        match self {
            Difficulty::Trivial => 1,
            Difficulty::Easy => 5,
            Difficulty::Medium => 10,
            Difficulty::Hard => 20,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Habit {
    pub id: HabitId,
    pub title: String,
    pub difficulty: Difficulty,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Daily {
    pub id: DailyId,
    pub title: String,
    pub difficulty: Difficulty,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub title: String,
    pub completed: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reward {
    pub title: String,
    pub cost: i32,
}

/// Tasks created together with a new account.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskPlan {
    pub habits: Vec<Habit>,
    pub dailies: Vec<Daily>,
    pub todos: Vec<Todo>,
    pub rewards: Vec<Reward>,
}

impl TaskPlan {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.habits.is_empty()
            && self.dailies.is_empty()
            && self.todos.is_empty()
            && self.rewards.is_empty()
    }
}

/// Outcome of checking off a habit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HabitCompletion {
    pub habit_id: HabitId,
    pub gold_awarded: i32,
    pub gold: i32,
}
