//! Dashboard data
//!
//! Fixed mock data behind the cognitive profile dashboard. Nothing here is
//! derived from game results.

use serde::Serialize;

/// Skill score at or above which a skill counts as excellent
pub const EXCELLENT_THRESHOLD: u32 = 85;

/// Skill score at or above which a skill counts as good
pub const GOOD_THRESHOLD: u32 = 70;

/// Target score shown next to every skill
pub const SKILL_TARGET: u32 = 95;

/// One day of the weekly performance trend
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PerformancePoint {
    pub day: &'static str,
    pub memory: f64,
    pub attention: f64,
    pub processing: f64,
}

/// One axis of the cognitive profile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SkillScore {
    pub skill: &'static str,
    pub score: u32,
    pub max: u32,
}

/// Tier badge for a skill score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillTier {
    Excellent,
    Good,
    Improving,
}

/// Headline numbers for today
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DailyStats {
    pub exercises_completed: u32,
    pub time_spent_minutes: u32,
    pub streak_days: u32,
    pub improvement_percent: u32,
}

/// A canned coaching message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Insight {
    pub title: &'static str,
    pub body: &'static str,
}

/// Everything the dashboard renders
#[derive(Debug, Clone, Copy, Serialize)]
pub struct DashboardSnapshot {
    pub today: DailyStats,
    pub weekly_performance: &'static [PerformancePoint],
    pub cognitive_profile: &'static [SkillScore],
    pub insights: &'static [Insight],
}

pub const WEEKLY_PERFORMANCE: [PerformancePoint; 7] = [
    PerformancePoint { day: "Mon", memory: 75.0, attention: 82.0, processing: 68.0 },
    PerformancePoint { day: "Tue", memory: 78.0, attention: 85.0, processing: 72.0 },
    PerformancePoint { day: "Wed", memory: 82.0, attention: 88.0, processing: 75.0 },
    PerformancePoint { day: "Thu", memory: 85.0, attention: 90.0, processing: 78.0 },
    PerformancePoint { day: "Fri", memory: 88.0, attention: 92.0, processing: 82.0 },
    PerformancePoint { day: "Sat", memory: 91.0, attention: 94.0, processing: 85.0 },
    PerformancePoint { day: "Sun", memory: 93.0, attention: 96.0, processing: 88.0 },
];

pub const COGNITIVE_PROFILE: [SkillScore; 6] = [
    SkillScore { skill: "Working Memory", score: 85, max: 100 },
    SkillScore { skill: "Attention", score: 92, max: 100 },
    SkillScore { skill: "Processing Speed", score: 78, max: 100 },
    SkillScore { skill: "Problem Solving", score: 88, max: 100 },
    SkillScore { skill: "Pattern Recognition", score: 82, max: 100 },
    SkillScore { skill: "Spatial Reasoning", score: 75, max: 100 },
];

pub const TODAY: DailyStats = DailyStats {
    exercises_completed: 12,
    time_spent_minutes: 45,
    streak_days: 7,
    improvement_percent: 15,
};

pub const INSIGHTS: [Insight; 2] = [
    Insight {
        title: "Today's Recommendation",
        body: "Focus on spatial reasoning exercises. Your processing speed is improving, \
               making this the perfect time to challenge spatial skills.",
    },
    Insight {
        title: "Next Milestone",
        body: "You're 7 points away from achieving \"Expert\" level in working memory. \
               Keep practicing memory sequence exercises!",
    },
];

impl SkillScore {
    pub fn tier(&self) -> SkillTier {
        if self.score >= EXCELLENT_THRESHOLD {
            SkillTier::Excellent
        } else if self.score >= GOOD_THRESHOLD {
            SkillTier::Good
        } else {
            SkillTier::Improving
        }
    }

    /// Score as a percentage of the axis maximum
    pub fn percent(&self) -> f64 {
        if self.max == 0 {
            return 0.0;
        }
        f64::from(self.score) / f64::from(self.max) * 100.0
    }
}

impl SkillTier {
    pub fn label(&self) -> &'static str {
        match self {
            SkillTier::Excellent => "Excellent",
            SkillTier::Good => "Good",
            SkillTier::Improving => "Improving",
        }
    }
}

impl DashboardSnapshot {
    pub fn mock() -> Self {
        Self {
            today: TODAY,
            weekly_performance: &WEEKLY_PERFORMANCE,
            cognitive_profile: &COGNITIVE_PROFILE,
            insights: &INSIGHTS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skill_tiers() {
        let tier = |score| SkillScore { skill: "x", score, max: 100 }.tier();
        assert_eq!(tier(92), SkillTier::Excellent);
        assert_eq!(tier(85), SkillTier::Excellent);
        assert_eq!(tier(84), SkillTier::Good);
        assert_eq!(tier(70), SkillTier::Good);
        assert_eq!(tier(69), SkillTier::Improving);
    }

    #[test]
    fn test_profile_tiers() {
        let tiers: Vec<_> = COGNITIVE_PROFILE.iter().map(SkillScore::tier).collect();
        assert_eq!(
            tiers,
            vec![
                SkillTier::Excellent,
                SkillTier::Excellent,
                SkillTier::Good,
                SkillTier::Excellent,
                SkillTier::Good,
                SkillTier::Good,
            ]
        );
    }

    #[test]
    fn test_shapes() {
        assert_eq!(WEEKLY_PERFORMANCE.len(), 7);
        assert_eq!(COGNITIVE_PROFILE.len(), 6);
        assert_eq!(WEEKLY_PERFORMANCE[0].day, "Mon");
        assert_eq!(WEEKLY_PERFORMANCE[6].day, "Sun");
    }

    #[test]
    fn test_insight_titles() {
        let titles: Vec<&str> = INSIGHTS.iter().map(|i| i.title).collect();
        assert_eq!(titles, ["Today's Recommendation", "Next Milestone"]);
    }

    #[test]
    fn test_snapshot_serializes() {
        let json = serde_json::to_value(DashboardSnapshot::mock()).unwrap();
        assert_eq!(json["today"]["streak_days"], 7);
        assert_eq!(json["cognitive_profile"][1]["skill"], "Attention");
        assert_eq!(json["weekly_performance"].as_array().unwrap().len(), 7);
    }
}
