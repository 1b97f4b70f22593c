//! Turns lookup outcomes into what the window shows: summary text, the
//! colored tier label and bar chart series. Nothing here touches widgets.

use chrono::{DateTime, Local};
use egui::Color32;

use crate::{
    classifier::{classify, compare, Influence, Standing},
    fetcher::FetchError,
    record::ScoreRecord,
};

pub const GREEN: Color32 = Color32::from_rgb(0x4C, 0xAF, 0x50);
pub const AMBER: Color32 = Color32::from_rgb(0xFF, 0xC1, 0x07);
pub const RED: Color32 = Color32::from_rgb(0xF4, 0x43, 0x36);
pub const BLUE: Color32 = Color32::from_rgb(0x21, 0x96, 0xF3);
pub const GREY: Color32 = Color32::from_rgb(0x99, 0x99, 0x99);

pub const TOTAL_LABEL: &str = "Total Yaps";
pub const RECENT_LABEL: &str = "Yaps Last 7 Days";

const SINGLE_BAR_WIDTH: f64 = 0.6;
const GROUPED_BAR_WIDTH: f64 = 0.35;

pub fn tier_color(influence: Influence) -> Color32 {
    match influence {
        Influence::High => GREEN,
        Influence::Medium => AMBER,
        Influence::Low => RED,
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BarPoint {
    pub label: &'static str,
    pub x: f64,
    pub value: f64,
}

impl BarPoint {
    /// Text drawn on top of the bar.
    pub fn value_label(&self) -> String {
        format!("{:.1}", self.value)
    }
}

/// One legend entry: a color and the bars drawn in it.
#[derive(Debug, Clone, PartialEq)]
pub struct BarSeries {
    pub name: String,
    pub color: Color32,
    pub width: f64,
    pub bars: Vec<BarPoint>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartData {
    pub title: String,
    pub series: Vec<BarSeries>,
}

impl ChartData {
    /// Two bars, total vs. last 7 days, each in its own color.
    pub fn single(record: &ScoreRecord) -> ChartData {
        let bar = |name: &'static str, color, x, value| BarSeries {
            name: name.to_string(),
            color,
            width: SINGLE_BAR_WIDTH,
            bars: vec![BarPoint { label: name, x, value }],
        };

        ChartData {
            title: format!("Stats for {}", record.username()),
            series: vec![
                bar(TOTAL_LABEL, GREEN, 0.0, record.yaps_all()),
                bar(RECENT_LABEL, BLUE, 1.0, record.yaps_l7d()),
            ],
        }
    }

    /// Four bars grouped by metric, one series per user.
    pub fn comparison(first: (&str, &ScoreRecord), second: (&str, &ScoreRecord)) -> ChartData {
        let offset = GROUPED_BAR_WIDTH / 2.0;
        let series = |name: &str, record: &ScoreRecord, color, shift: f64| BarSeries {
            name: name.to_string(),
            color,
            width: GROUPED_BAR_WIDTH,
            bars: vec![
                BarPoint {
                    label: TOTAL_LABEL,
                    x: shift,
                    value: record.yaps_all(),
                },
                BarPoint {
                    label: RECENT_LABEL,
                    x: 1.0 + shift,
                    value: record.yaps_l7d(),
                },
            ],
        };

        ChartData {
            title: "User Comparison".to_string(),
            series: vec![
                series(first.0, first.1, GREEN, -offset),
                series(second.0, second.1, BLUE, offset),
            ],
        }
    }
}

#[derive(Debug, Clone)]
pub struct SingleReport {
    pub text: String,
    pub label: String,
    pub color: Color32,
    pub chart: Option<ChartData>,
    pub fetched_at: DateTime<Local>,
}

impl SingleReport {
    pub fn build(outcome: Result<ScoreRecord, FetchError>) -> SingleReport {
        let fetched_at = Local::now();

        let record = outcome.ok();
        match (classify(record.as_ref()), record) {
            (Ok(influence), Some(record)) => {
                SingleReport {
                    text: format!(
                        "User: {}\nTotal Yaps: {:.2}\nYaps Last 7 Days: {:.2}\nInfluence Level: {}",
                        record.username(),
                        record.yaps_all(),
                        record.yaps_l7d(),
                        influence
                    ),
                    label: influence.name().to_string(),
                    color: tier_color(influence),
                    chart: Some(ChartData::single(&record)),
                    fetched_at,
                }
            }
            _ => SingleReport {
                text: "Unable to retrieve data.\nCheck username or internet connection."
                    .to_string(),
                label: "No Data".to_string(),
                color: GREY,
                chart: None,
                fetched_at,
            },
        }
    }

    pub fn succeeded(&self) -> bool {
        self.chart.is_some()
    }
}

/// Result of fetching both sides of a comparison.
#[derive(Debug, Clone, PartialEq)]
pub enum PairOutcome {
    Both(ScoreRecord, ScoreRecord),
    OnlyFirst(ScoreRecord),
    OnlySecond(ScoreRecord),
    Neither,
}

impl PairOutcome {
    pub fn new(first: Option<ScoreRecord>, second: Option<ScoreRecord>) -> PairOutcome {
        match (first, second) {
            (Some(a), Some(b)) => PairOutcome::Both(a, b),
            (Some(a), None) => PairOutcome::OnlyFirst(a),
            (None, Some(b)) => PairOutcome::OnlySecond(b),
            (None, None) => PairOutcome::Neither,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ComparisonReport {
    pub text: String,
    pub chart: Option<ChartData>,
    pub fetched_at: DateTime<Local>,
}

impl ComparisonReport {
    /// `first` and `second` are the usernames as typed; the text names users
    /// the way they were asked for.
    pub fn build(first: &str, second: &str, outcome: PairOutcome) -> ComparisonReport {
        let fetched_at = Local::now();

        let (text, chart) = match outcome {
            PairOutcome::Both(a, b) => {
                let verdict = match compare(&a, &b) {
                    Standing::First => format!("Comparison: {} has more influence.", first),
                    Standing::Second => format!("Comparison: {} has more influence.", second),
                    Standing::Tie => {
                        format!("Comparison: {} and {} have equal influence.", first, second)
                    }
                };
                let text = format!(
                    "{}: {:.2} Yaps (7 days: {:.2})\n{}: {:.2} Yaps (7 days: {:.2})\n{}",
                    first,
                    a.yaps_all(),
                    a.yaps_l7d(),
                    second,
                    b.yaps_all(),
                    b.yaps_l7d(),
                    verdict
                );
                (text, Some(ChartData::comparison((first, &a), (second, &b))))
            }
            PairOutcome::OnlyFirst(a) => (partial(first, &a, second), None),
            PairOutcome::OnlySecond(b) => (partial(second, &b, first), None),
            PairOutcome::Neither => ("Unable to retrieve data for both users.".to_string(), None),
        };

        ComparisonReport {
            text,
            chart,
            fetched_at,
        }
    }

    pub fn succeeded(&self) -> bool {
        self.chart.is_some()
    }
}

fn partial(found: &str, record: &ScoreRecord, missing: &str) -> String {
    format!(
        "Data only for {}: {:.2} Yaps.\nData unavailable for {}.",
        found,
        record.yaps_all(),
        missing
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_success_text() {
        let report = SingleReport::build(Ok(ScoreRecord::new("alice", 1500.0, 150.5)));

        assert_eq!(
            report.text,
            "User: alice\nTotal Yaps: 1500.00\nYaps Last 7 Days: 150.50\nInfluence Level: High Influence"
        );
        assert_eq!(report.label, "High Influence");
        assert_eq!(report.color, GREEN);
        assert!(report.succeeded());
    }

    #[test]
    fn single_chart_has_two_bars() {
        let report = SingleReport::build(Ok(ScoreRecord::new("bob", 750.0, 10.0)));
        let chart = report.chart.unwrap();

        assert_eq!(chart.title, "Stats for bob");
        let values: Vec<f64> = chart
            .series
            .iter()
            .flat_map(|s| s.bars.iter().map(|b| b.value))
            .collect();
        assert_eq!(values, vec![750.0, 10.0]);
        assert_eq!(chart.series[0].color, GREEN);
        assert_eq!(chart.series[1].color, BLUE);
    }

    #[test]
    fn single_failure_is_generic() {
        let report = SingleReport::build(Err(FetchError::Status(reqwest::StatusCode::NOT_FOUND)));

        assert_eq!(
            report.text,
            "Unable to retrieve data.\nCheck username or internet connection."
        );
        assert_eq!(report.label, "No Data");
        assert_eq!(report.color, GREY);
        assert!(!report.succeeded());
    }

    #[test]
    fn bar_labels_use_one_decimal() {
        let chart = ChartData::single(&ScoreRecord::new("bob", 1234.56, 7.0));
        let labels: Vec<String> = chart
            .series
            .iter()
            .flat_map(|s| s.bars.iter().map(BarPoint::value_label))
            .collect();
        assert_eq!(labels, vec!["1234.6", "7.0"]);
    }

    #[test]
    fn tier_colors() {
        assert_eq!(tier_color(Influence::Medium), AMBER);
        assert_eq!(tier_color(Influence::Low), RED);
    }

    #[test]
    fn comparison_names_the_leader() {
        let outcome = PairOutcome::new(
            Some(ScoreRecord::new("A", 800.0, 20.0)),
            Some(ScoreRecord::new("B", 300.0, 90.0)),
        );
        let report = ComparisonReport::build("a", "b", outcome);

        assert_eq!(
            report.text,
            "a: 800.00 Yaps (7 days: 20.00)\nb: 300.00 Yaps (7 days: 90.00)\nComparison: a has more influence."
        );
        assert!(report.succeeded());
    }

    #[test]
    fn comparison_second_wins() {
        let outcome = PairOutcome::new(
            Some(ScoreRecord::new("a", 10.0, 0.0)),
            Some(ScoreRecord::new("b", 11.0, 0.0)),
        );
        let report = ComparisonReport::build("a", "b", outcome);
        assert!(report.text.ends_with("Comparison: b has more influence."));
    }

    #[test]
    fn comparison_tie_is_declared() {
        let outcome = PairOutcome::new(
            Some(ScoreRecord::new("a", 600.0, 1.0)),
            Some(ScoreRecord::new("b", 600.0, 2.0)),
        );
        let report = ComparisonReport::build("a", "b", outcome);
        assert!(report.text.ends_with("Comparison: a and b have equal influence."));
    }

    #[test]
    fn comparison_chart_groups_by_metric() {
        let a = ScoreRecord::new("a", 800.0, 20.0);
        let b = ScoreRecord::new("b", 300.0, 90.0);
        let chart = ChartData::comparison(("a", &a), ("b", &b));

        assert_eq!(chart.title, "User Comparison");
        assert_eq!(chart.series.len(), 2);
        assert_eq!(chart.series[0].name, "a");
        assert!(chart.series[0].bars[0].x < chart.series[1].bars[0].x);
        assert!(chart.series[1].bars[0].x < chart.series[0].bars[1].x);
        assert_eq!(chart.series[1].bars[1].value, 90.0);
    }

    #[test]
    fn partial_availability_reports_the_missing_user() {
        let report = ComparisonReport::build(
            "a",
            "b",
            PairOutcome::new(None, Some(ScoreRecord::new("b", 42.0, 0.0))),
        );

        assert_eq!(report.text, "Data only for b: 42.00 Yaps.\nData unavailable for a.");
        assert!(!report.succeeded());
    }

    #[test]
    fn both_missing_is_total_unavailability() {
        let report = ComparisonReport::build("a", "b", PairOutcome::new(None, None));
        assert_eq!(report.text, "Unable to retrieve data for both users.");
        assert!(report.chart.is_none());
    }
}
