//! Static sports content (details pages, home feed cards) and the normalized
//! match summary the home screen lists for cricket and football.

use chrono::{DateTime, Utc};

pub struct SportDetails {
    pub description: &'static str,
    pub benefits: &'static [&'static str],
    pub rules: &'static [&'static str],
    pub equipment: &'static [&'static str],
}

const NO_DETAILS: SportDetails = SportDetails {
    description: "No details available for this sport.",
    benefits: &[],
    rules: &[],
    equipment: &[],
};

/// Details page content, looked up case-insensitively by sport name.
pub fn details_for(sport: &str) -> SportDetails {
    match sport.to_lowercase().as_str() {
        "football" => SportDetails {
            description: "Football, also known as soccer, is the world's most popular sport. It is played between two teams of eleven players on a rectangular field with a goal at each end.",
            benefits: &[
                "Improves cardiovascular health",
                "Enhances coordination and balance",
                "Builds teamwork and communication skills",
                "Increases endurance and stamina",
            ],
            rules: &[
                "Two teams of 11 players each",
                "90 minutes of play time",
                "No hands allowed (except for goalkeepers)",
                "Offside rule applies",
            ],
            equipment: &["Football boots", "Shin guards", "Football", "Goal posts"],
        },
        "basketball" => SportDetails {
            description: "Basketball is a team sport in which two teams score points by throwing a ball through a hoop. It is one of the most popular sports in the world.",
            benefits: &[
                "Improves hand-eye coordination",
                "Builds strength and endurance",
                "Enhances agility and speed",
                "Develops strategic thinking",
            ],
            rules: &[
                "Five players per team",
                "Four quarters of 12 minutes each",
                "Dribbling required to move with the ball",
                "Three-point line for long-range shots",
            ],
            equipment: &["Basketball", "Basketball shoes", "Hoop and backboard", "Court"],
        },
        "tennis" => SportDetails {
            description: "Tennis is a racket sport that can be played individually or between two teams of two players each. It is played on a rectangular court divided by a net.",
            benefits: &[
                "Improves flexibility and coordination",
                "Builds strength and endurance",
                "Enhances mental focus",
                "Develops strategic thinking",
            ],
            rules: &[
                "Scoring system: 15, 30, 40, game",
                "Best of three or five sets",
                "Serve must land in the service box",
                "Ball must bounce once before return",
            ],
            equipment: &["Tennis racket", "Tennis balls", "Tennis court", "Net"],
        },
        "swimming" => SportDetails {
            description: "Swimming is an individual or team sport that involves moving through water using the arms and legs. It is both a competitive sport and a recreational activity.",
            benefits: &[
                "Full-body workout",
                "Low impact on joints",
                "Improves cardiovascular health",
                "Builds endurance and strength",
            ],
            rules: &[
                "Different strokes: freestyle, breaststroke, backstroke, butterfly",
                "Proper breathing techniques",
                "Lane discipline in competitions",
                "Turn techniques at pool ends",
            ],
            equipment: &["Swimsuit", "Goggles", "Swim cap", "Pool"],
        },
        _ => NO_DETAILS,
    }
}

pub struct NewsCard {
    pub title: &'static str,
    pub description: &'static str,
}

/// Home feed cards.
pub const NEWS: [NewsCard; 3] = [
    NewsCard {
        title: "Latest Sports Trends",
        description: "Discover the most popular sports activities this season.",
    },
    NewsCard {
        title: "Sports Tips & Tricks",
        description: "Expert advice to improve your game.",
    },
    NewsCard {
        title: "Sports Events",
        description: "Upcoming sports events in your area.",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchKind {
    Cricket,
    Football,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchStatus {
    Live,
    Completed,
    Upcoming,
}

/// One match card, whatever sport it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchSummary {
    pub id: String,
    pub kind: MatchKind,
    pub home: String,
    pub away: String,
    pub home_score: String,
    pub away_score: String,
    pub status: MatchStatus,
    pub status_label: String,
    pub starts_at: Option<DateTime<Utc>>,
    /// Match format (cricket) or tournament (football).
    pub competition: String,
    /// Match description (cricket) or tournament category (football).
    pub detail: String,
}

impl MatchSummary {
    /// `MMM dd, yyyy`, or `TBD` when the start time is unknown.
    pub fn date_label(&self) -> String {
        self.starts_at
            .map(|t| t.format("%b %d, %Y").to_string())
            .unwrap_or_else(|| "TBD".to_string())
    }
}

/// Sorts by start time, most recent first; unknown start times go last.
pub fn sort_most_recent_first(matches: &mut [MatchSummary]) {
    matches.sort_by(|a, b| b.starts_at.cmp(&a.starts_at));
}
