//! Hardcoded sample datasets displayed by the pages.
//!
//! Every record here is fixed at process start and never written back; the
//! pages only project these into views.

use serde::Serialize;

/// A dashboard stat card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashboardStat {
    pub title: &'static str,
    pub value: u64,
    /// Percentage shown next to the trend arrow.
    pub trend_percent: i32,
    pub trend_up: bool,
}

/// Athlete gender as recorded in the sample data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub fn label(self) -> &'static str {
        match self {
            Self::Male => "Male",
            Self::Female => "Female",
        }
    }
}

/// A row in the athlete management table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Athlete {
    pub name: &'static str,
    pub age: u8,
    pub gender: Gender,
    pub location: &'static str,
    pub tests_completed: u32,
    /// Overall score, 0..=100.
    pub score: u8,
}

/// A row in the overall rankings table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LeaderboardEntry {
    /// 1-based rank; ranks 1-3 get trophy markers.
    pub rank: u32,
    pub name: &'static str,
    pub sport: &'static str,
    pub score: u8,
}

/// A category bar on the analytics page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryScore {
    pub category: &'static str,
    /// Percentage, 0..=100.
    pub percent: u8,
}

/// The fixed athlete profile shown on the profiles page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Profile {
    pub name: &'static str,
    pub athlete_id: &'static str,
    pub age: u8,
    pub phone: &'static str,
    /// (test name, rating) pairs for the performance history panel.
    pub history: &'static [(&'static str, &'static str)],
}

/// The four dashboard stat cards.
pub fn dashboard_stats() -> Vec<DashboardStat> {
    vec![
        DashboardStat {
            title: "Total Athletes",
            value: 1250,
            trend_percent: 12,
            trend_up: true,
        },
        DashboardStat {
            title: "New Athletes",
            value: 150,
            trend_percent: 8,
            trend_up: true,
        },
        DashboardStat {
            title: "Completed Tests",
            value: 1000,
            trend_percent: 15,
            trend_up: true,
        },
        DashboardStat {
            title: "Pending Evaluations",
            value: 250,
            trend_percent: 5,
            trend_up: false,
        },
    ]
}

/// Overall performance figure on the dashboard summary panel.
pub const PERFORMANCE_SCORE: u32 = 78;
/// Trend next to [`PERFORMANCE_SCORE`].
pub const PERFORMANCE_TREND_PERCENT: u32 = 5;

/// The athlete management table rows.
pub fn athletes() -> Vec<Athlete> {
    vec![
        Athlete {
            name: "Ethan Carter",
            age: 22,
            gender: Gender::Male,
            location: "Mumbai",
            tests_completed: 5,
            score: 85,
        },
        Athlete {
            name: "Olivia Bennett",
            age: 24,
            gender: Gender::Female,
            location: "Delhi",
            tests_completed: 4,
            score: 92,
        },
        Athlete {
            name: "Noah Thompson",
            age: 21,
            gender: Gender::Male,
            location: "Bangalore",
            tests_completed: 6,
            score: 78,
        },
        Athlete {
            name: "Ava Harris",
            age: 23,
            gender: Gender::Female,
            location: "Chennai",
            tests_completed: 5,
            score: 88,
        },
        Athlete {
            name: "Liam Clark",
            age: 20,
            gender: Gender::Male,
            location: "Kolkata",
            tests_completed: 4,
            score: 80,
        },
        Athlete {
            name: "Sophia Lewis",
            age: 25,
            gender: Gender::Female,
            location: "Hyderabad",
            tests_completed: 6,
            score: 95,
        },
    ]
}

/// The overall rankings rows.
pub fn leaderboard() -> Vec<LeaderboardEntry> {
    vec![
        LeaderboardEntry {
            rank: 1,
            name: "Ethan Carter",
            sport: "Swimming",
            score: 95,
        },
        LeaderboardEntry {
            rank: 2,
            name: "Olivia Bennett",
            sport: "Athletics",
            score: 92,
        },
        LeaderboardEntry {
            rank: 3,
            name: "Noah Thompson",
            sport: "Badminton",
            score: 90,
        },
        LeaderboardEntry {
            rank: 4,
            name: "Ava Martinez",
            sport: "Gymnastics",
            score: 88,
        },
        LeaderboardEntry {
            rank: 5,
            name: "Liam Harris",
            sport: "Boxing",
            score: 85,
        },
    ]
}

/// Category breakdown bars on the analytics page.
pub fn category_breakdown() -> Vec<CategoryScore> {
    ["Speed", "Agility", "Strength", "Endurance"]
        .into_iter()
        .enumerate()
        .map(|(i, category)| CategoryScore {
            category,
            percent: 80 + (i as u8) * 5,
        })
        .collect()
}

/// The fixed profile shown on the profiles page.
pub fn profile() -> Profile {
    Profile {
        name: "Arjun Verma",
        athlete_id: "AV12345",
        age: 25,
        phone: "+91 9876543210",
        history: &[
            ("Endurance Test", "Excellent"),
            ("Strength Test", "Excellent"),
            ("Speed Test", "Excellent"),
        ],
    }
}
