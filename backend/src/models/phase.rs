//! Phase cycle domain types.
//!
//! A cycle is an ordered list of [`PhaseSegment`]s. Each segment has a
//! [`SegmentKind`], which fixes its season, category and length policy.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::calendar::days_between;
use super::solstice::Season;

pub const DAYS_PER_WEEK: i64 = 7;

/// Weeks in a Hard period and in every fixed-length Transit.
pub const FIXED_WEEKS: u8 = 6;

/// Length of a Hard period in days.
pub const HARD_DAYS: i64 = FIXED_WEEKS as i64 * DAYS_PER_WEEK;

/// Length of a fixed Transit in days.
pub const FIXED_TRANSIT_DAYS: i64 = FIXED_WEEKS as i64 * DAYS_PER_WEEK;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Hard,
    Transit,
}

/// Where a Transit sits relative to the Hard period of its own season.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransitPosition {
    After,
    Before,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LengthPolicy {
    FixedWeeks(u8),
    VariableUntilNextHardStart,
}

/// The ten segments of the yearly cycle, in cycle order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SegmentKind {
    HardWinter,
    Transit1AfterWinterHard,
    Transit2AfterWinterHard,
    Transit1BeforeSummerHard,
    Transit2BeforeSummerHard,
    HardSummer,
    Transit1AfterSummerHard,
    Transit2AfterSummerHard,
    Transit1BeforeWinterHard,
    Transit2BeforeWinterHard,
}

impl SegmentKind {
    pub const CYCLE_ORDER: [SegmentKind; 10] = [
        SegmentKind::HardWinter,
        SegmentKind::Transit1AfterWinterHard,
        SegmentKind::Transit2AfterWinterHard,
        SegmentKind::Transit1BeforeSummerHard,
        SegmentKind::Transit2BeforeSummerHard,
        SegmentKind::HardSummer,
        SegmentKind::Transit1AfterSummerHard,
        SegmentKind::Transit2AfterSummerHard,
        SegmentKind::Transit1BeforeWinterHard,
        SegmentKind::Transit2BeforeWinterHard,
    ];

    pub fn category(&self) -> Category {
        match self {
            SegmentKind::HardWinter | SegmentKind::HardSummer => Category::Hard,
            _ => Category::Transit,
        }
    }

    /// Season whose solstice this segment leads into or away from.
    pub fn season(&self) -> Season {
        use SegmentKind::*;
        match self {
            HardWinter
            | Transit1AfterWinterHard
            | Transit2AfterWinterHard
            | Transit1BeforeWinterHard
            | Transit2BeforeWinterHard => Season::Winter,
            Transit1BeforeSummerHard
            | Transit2BeforeSummerHard
            | HardSummer
            | Transit1AfterSummerHard
            | Transit2AfterSummerHard => Season::Summer,
        }
    }

    /// `None` for Hard segments.
    pub fn position(&self) -> Option<TransitPosition> {
        use SegmentKind::*;
        match self {
            HardWinter | HardSummer => None,
            Transit1AfterWinterHard
            | Transit2AfterWinterHard
            | Transit1AfterSummerHard
            | Transit2AfterSummerHard => Some(TransitPosition::After),
            Transit1BeforeSummerHard
            | Transit2BeforeSummerHard
            | Transit1BeforeWinterHard
            | Transit2BeforeWinterHard => Some(TransitPosition::Before),
        }
    }

    pub fn length_policy(&self) -> LengthPolicy {
        match self {
            SegmentKind::Transit2BeforeSummerHard | SegmentKind::Transit2BeforeWinterHard => {
                LengthPolicy::VariableUntilNextHardStart
            }
            _ => LengthPolicy::FixedWeeks(FIXED_WEEKS),
        }
    }

    pub fn is_variable(&self) -> bool {
        self.length_policy() == LengthPolicy::VariableUntilNextHardStart
    }

    /// Name shown on the dashboard, e.g. `Winter Transit 1`.
    pub fn display_name(&self) -> &'static str {
        use SegmentKind::*;
        match self {
            HardWinter => "Winter Hard",
            Transit1AfterWinterHard | Transit1BeforeWinterHard => "Winter Transit 1",
            Transit2AfterWinterHard | Transit2BeforeWinterHard => "Winter Transit 2",
            Transit1BeforeSummerHard | Transit1AfterSummerHard => "Summer Transit 1",
            Transit2BeforeSummerHard | Transit2AfterSummerHard => "Summer Transit 2",
            HardSummer => "Summer Hard",
        }
    }
}

/// Week of a Hard period, in calendar order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WeekLabel {
    #[serde(rename = "Pre-Low")]
    PreLow,
    #[serde(rename = "Pre-Mid")]
    PreMid,
    #[serde(rename = "Pre-Peak")]
    PrePeak,
    #[serde(rename = "Post-Peak")]
    PostPeak,
    #[serde(rename = "Post-Mid")]
    PostMid,
    #[serde(rename = "Post-Low")]
    PostLow,
}

impl WeekLabel {
    pub const ALL: [WeekLabel; 6] = [
        WeekLabel::PreLow,
        WeekLabel::PreMid,
        WeekLabel::PrePeak,
        WeekLabel::PostPeak,
        WeekLabel::PostMid,
        WeekLabel::PostLow,
    ];

    pub fn from_index(week_index: usize) -> Option<WeekLabel> {
        Self::ALL.get(week_index).copied()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            WeekLabel::PreLow => "Pre-Low",
            WeekLabel::PreMid => "Pre-Mid",
            WeekLabel::PrePeak => "Pre-Peak",
            WeekLabel::PostPeak => "Post-Peak",
            WeekLabel::PostMid => "Post-Mid",
            WeekLabel::PostLow => "Post-Low",
        }
    }

    pub fn display_name(&self) -> String {
        format!("{} Week", self.as_str())
    }
}

/// One resolved, inclusive date range of the cycle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhaseSegment {
    pub kind: SegmentKind,
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl PhaseSegment {
    pub fn new(kind: SegmentKind, start: NaiveDate, end: NaiveDate) -> Self {
        Self { kind, start, end }
    }

    pub fn category(&self) -> Category {
        self.kind.category()
    }

    pub fn season(&self) -> Season {
        self.kind.season()
    }

    pub fn length_policy(&self) -> LengthPolicy {
        self.kind.length_policy()
    }

    pub fn length_days(&self) -> i64 {
        days_between(self.start, self.end) + 1
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

/// Position of one date within the cycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhaseResult {
    pub segment_kind: SegmentKind,
    pub category: Category,
    pub season: Season,
    pub position: Option<TransitPosition>,
    pub week_label: Option<WeekLabel>,
    /// 0-based offset of the query date from `segment_start`.
    pub day_index: i64,
    pub progress_fraction: f64,
    pub segment_start: NaiveDate,
    pub segment_end: NaiveDate,
    pub length_days: i64,
}

impl PhaseResult {
    /// Dashboard heading: `Summer · Pre-Low Week` or `Winter Transit 1`.
    pub fn title(&self) -> String {
        match self.week_label {
            Some(week) => format!("{} · {}", self.season, week.display_name()),
            None => self.segment_kind.display_name().to_string(),
        }
    }
}
