//! Fixture data written by `habitpet seed`.

use crate::domain::{
    Daily, DailyId, Difficulty, EquipmentSlot, Habit, HabitId, ItemType, NewChallenge, NewPetItem,
    PetStat, Reward, TaskPlan, Todo,
};

/// Password of every seeded account.
pub const DEFAULT_PASSWORD: &str = "Password123!";

pub const GROUP_NAME: &str = "The Procrastinators";
pub const GROUP_DESCRIPTION: &str = "A group for getting things done... eventually.";

pub const EXERCISE_HABIT: &str = "cl_habit_1";
pub const MEDITATION_DAILY: &str = "cl_daily_1";
pub const DAILY_LOG_NOTE: &str = "A good session.";

pub const APPLE: &str = "Apple";
pub const TOP_HAT: &str = "Top Hat";

/// The item catalog.
#[must_use]
pub fn pet_items() -> Vec<NewPetItem> {
    vec![
        NewPetItem::consumable(
            APPLE,
            "A crunchy, healthy fruit.",
            ItemType::Food,
            5,
            PetStat::Hunger,
            10,
        )
        .with_image("https://placehold.co/100x100/FF6347/FFFFFF.png?text=Apple"),
        NewPetItem::consumable(
            "Steak",
            "A hearty meal for a hungry pet.",
            ItemType::Food,
            15,
            PetStat::Hunger,
            30,
        )
        .with_image("https://placehold.co/100x100/8B4513/FFFFFF.png?text=Steak"),
        NewPetItem::consumable(
            "Candy",
            "A sugary treat that boosts happiness.",
            ItemType::Treat,
            10,
            PetStat::Happiness,
            20,
        )
        .with_image("https://placehold.co/100x100/FFC0CB/000000.png?text=Candy"),
        NewPetItem::customization(TOP_HAT, "A very fancy top hat.", 100, EquipmentSlot::Hat)
            .with_image("https://placehold.co/100x100/363636/FFFFFF.png?text=Hat"),
        NewPetItem::customization(
            "Sunglasses",
            "Cool shades for a cool pet.",
            75,
            EquipmentSlot::Glasses,
        )
        .with_image("https://placehold.co/100x100/4169E1/FFFFFF.png?text=Glasses"),
        NewPetItem::customization(
            "Default Room",
            "A simple, clean room for your pet.",
            0,
            EquipmentSlot::Background,
        )
        .with_image("https://placehold.co/800x600/3a3a3a/3a3a3a.png"),
        NewPetItem::customization(
            "Sunny Meadow",
            "A beautiful, sunny field for your pet to enjoy.",
            200,
            EquipmentSlot::Background,
        )
        .with_image("https://placehold.co/800x600/87CEEB/90EE90.png"),
        NewPetItem::customization(
            "Starry Night",
            "A peaceful night sky full of twinkling stars.",
            250,
            EquipmentSlot::Background,
        )
        .with_image("https://placehold.co/800x600/00008B/FFD700.png"),
        NewPetItem::customization(
            "Cozy Library",
            "A warm, quiet library with shelves of books.",
            300,
            EquipmentSlot::Background,
        )
        .with_image("https://placehold.co/800x600/8B4513/D2B48C.png"),
    ]
}

/// Public challenges, in the order users are enrolled in them.
#[must_use]
pub fn challenges() -> Vec<NewChallenge> {
    vec![
        NewChallenge::new(
            "30-Day Fitness Challenge",
            "Work out every day for 30 days.",
            "Log 30 fitness activities.",
        ),
        NewChallenge::new(
            "Mindful Mornings",
            "Start your day with meditation.",
            "Meditate for 15 days this month.",
        ),
    ]
}

/// An example account before its password is hashed.
#[derive(Debug, Clone)]
pub struct SeedUser {
    pub email: &'static str,
    pub username: &'static str,
    pub tasks: TaskPlan,
}

#[must_use]
pub fn alice() -> SeedUser {
    SeedUser {
        email: "alice@example.com",
        username: "alice",
        tasks: TaskPlan {
            habits: vec![
                Habit {
                    id: HabitId::new(EXERCISE_HABIT),
                    title: "Exercise for 30 minutes".into(),
                    difficulty: Difficulty::Medium,
                },
                Habit {
                    id: HabitId::new("cl_habit_2"),
                    title: "Read a book chapter".into(),
                    difficulty: Difficulty::Easy,
                },
            ],
            dailies: vec![Daily {
                id: DailyId::new(MEDITATION_DAILY),
                title: "Morning Meditation".into(),
                difficulty: Difficulty::Easy,
            }],
            todos: vec![Todo {
                title: "Buy groceries".into(),
                completed: false,
            }],
            rewards: vec![Reward {
                title: "Watch a movie".into(),
                cost: 50,
            }],
        },
    }
}

#[must_use]
pub fn bob() -> SeedUser {
    SeedUser {
        email: "bob@example.com",
        username: "bob",
        tasks: TaskPlan::default(),
    }
}
