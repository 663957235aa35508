//! The activities offered when the service starts.

use super::types::{Activity, ActivityRoster};

impl ActivityRoster {
    /// Roster pre-filled with the school's standard activities
    pub fn seeded() -> Self {
        let mut roster = Self::new();

        // Intellectual
        roster.insert(
            "Chess Club",
            Activity::new(
                "Learn strategies and compete in chess tournaments",
                "Fridays, 3:30 PM - 5:00 PM",
                12,
            )
            .with_participants(&["michael@mergington.edu", "daniel@mergington.edu"]),
        );
        roster.insert(
            "Programming Class",
            Activity::new(
                "Learn programming fundamentals and build software projects",
                "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
                20,
            )
            .with_participants(&["emma@mergington.edu", "sophia@mergington.edu"]),
        );
        roster.insert(
            "Math Olympiad",
            Activity::new(
                "Prepare for math competitions and solve challenging problems",
                "Wednesdays, 4:00 PM - 5:30 PM",
                15,
            ),
        );
        roster.insert(
            "Science Club",
            Activity::new(
                "Explore science experiments and participate in science fairs",
                "Mondays, 3:30 PM - 5:00 PM",
                18,
            ),
        );

        // Sports
        roster.insert(
            "Gym Class",
            Activity::new(
                "Physical education and sports activities",
                "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
                30,
            )
            .with_participants(&["john@mergington.edu", "olivia@mergington.edu"]),
        );
        roster.insert(
            "Soccer Team",
            Activity::new(
                "Join the school soccer team and compete in matches",
                "Tuesdays and Thursdays, 4:00 PM - 5:30 PM",
                22,
            ),
        );
        roster.insert(
            "Basketball Club",
            Activity::new(
                "Practice basketball skills and play friendly games",
                "Fridays, 5:00 PM - 6:30 PM",
                20,
            ),
        );

        // Artistic
        roster.insert(
            "Art Club",
            Activity::new(
                "Explore painting, drawing, and other visual arts",
                "Thursdays, 3:30 PM - 5:00 PM",
                16,
            ),
        );
        roster.insert(
            "Drama Society",
            Activity::new(
                "Act in plays and learn about theater production",
                "Wednesdays, 5:00 PM - 6:30 PM",
                14,
            ),
        );
        roster.insert(
            "Music Ensemble",
            Activity::new(
                "Perform music in a group and learn new instruments",
                "Mondays, 4:00 PM - 5:30 PM",
                12,
            ),
        );

        roster
    }
}
