use serde::Serialize;

use crate::format;

/// The closed set of metrics the card knows how to display.
///
/// Each variant carries its state key (the suffix appended to the configured
/// prefix), a display label and a display format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    // ── Score rings ───────────────────────────────────────────────────────────
    SleepScore,
    RecoveryIndex,
    MovementIndex,

    // ── Sleep ─────────────────────────────────────────────────────────────────
    TotalSleep,
    SleepEfficiency,
    DeepSleep,
    RemSleep,
    LightSleep,
    RestorativeSleep,
    Spo2,

    // ── Heart ─────────────────────────────────────────────────────────────────
    HeartRate,
    RestingHeartRate,
    Hrv,

    // ── Body & activity ───────────────────────────────────────────────────────
    Steps,
    SkinTemperature,
    Vo2Max,

    // ── Glucose & metabolism ──────────────────────────────────────────────────
    MetabolicScore,
    AverageGlucose,
    GlucoseVariability,
    Hba1c,
    TimeInTarget,
}

/// How a metric's numeric value is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
    /// Value as-is, no suffix.
    Plain,
    /// Value followed by a fixed suffix, e.g. `"%"` or `" bpm"`.
    Suffix(&'static str),
    /// Duration in minutes rendered as `"7h 28m"` / `"45m"`.
    Minutes,
    /// Whole number with thousands separators.
    Count,
    /// One decimal plus `"°C"`.
    Celsius,
}

impl Metric {
    pub const ALL: [Metric; 21] = [
        Metric::SleepScore,
        Metric::RecoveryIndex,
        Metric::MovementIndex,
        Metric::TotalSleep,
        Metric::SleepEfficiency,
        Metric::DeepSleep,
        Metric::RemSleep,
        Metric::LightSleep,
        Metric::RestorativeSleep,
        Metric::Spo2,
        Metric::HeartRate,
        Metric::RestingHeartRate,
        Metric::Hrv,
        Metric::Steps,
        Metric::SkinTemperature,
        Metric::Vo2Max,
        Metric::MetabolicScore,
        Metric::AverageGlucose,
        Metric::GlucoseVariability,
        Metric::Hba1c,
        Metric::TimeInTarget,
    ];

    /// State key within the host namespace; the full entity id is
    /// `"<prefix>_<key>"`.
    pub fn key(self) -> &'static str {
        match self {
            Metric::SleepScore => "sleep_score",
            Metric::RecoveryIndex => "recovery_index",
            Metric::MovementIndex => "movement_index",
            Metric::TotalSleep => "total_sleep",
            Metric::SleepEfficiency => "sleep_efficiency",
            Metric::DeepSleep => "deep_sleep",
            Metric::RemSleep => "rem_sleep",
            Metric::LightSleep => "light_sleep",
            Metric::RestorativeSleep => "restorative_sleep",
            Metric::Spo2 => "spo2",
            Metric::HeartRate => "heart_rate",
            Metric::RestingHeartRate => "resting_heart_rate",
            Metric::Hrv => "hrv",
            Metric::Steps => "steps",
            Metric::SkinTemperature => "skin_temperature",
            Metric::Vo2Max => "vo2_max",
            Metric::MetabolicScore => "metabolic_score",
            Metric::AverageGlucose => "average_glucose",
            Metric::GlucoseVariability => "glucose_variability",
            Metric::Hba1c => "hba1c",
            Metric::TimeInTarget => "time_in_target",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Metric::SleepScore => "Sleep",
            Metric::RecoveryIndex => "Recovery",
            Metric::MovementIndex => "Movement",
            Metric::TotalSleep => "Total Sleep",
            Metric::SleepEfficiency => "Efficiency",
            Metric::DeepSleep => "Deep Sleep",
            Metric::RemSleep => "REM Sleep",
            Metric::LightSleep => "Light Sleep",
            Metric::RestorativeSleep => "Restorative",
            Metric::Spo2 => "SpO2",
            Metric::HeartRate => "Heart Rate",
            Metric::RestingHeartRate => "Resting HR",
            Metric::Hrv => "HRV",
            Metric::Steps => "Steps",
            Metric::SkinTemperature => "Temperature",
            Metric::Vo2Max => "VO2 Max",
            Metric::MetabolicScore => "Metabolic Score",
            Metric::AverageGlucose => "Avg Glucose",
            Metric::GlucoseVariability => "Variability",
            Metric::Hba1c => "HbA1c",
            Metric::TimeInTarget => "In Target",
        }
    }

    fn format(self) -> Format {
        match self {
            Metric::SleepScore
            | Metric::RecoveryIndex
            | Metric::MovementIndex
            | Metric::Vo2Max
            | Metric::MetabolicScore => Format::Plain,
            Metric::TotalSleep | Metric::DeepSleep | Metric::RemSleep | Metric::LightSleep => {
                Format::Minutes
            }
            Metric::SleepEfficiency
            | Metric::RestorativeSleep
            | Metric::Spo2
            | Metric::GlucoseVariability
            | Metric::Hba1c
            | Metric::TimeInTarget => Format::Suffix("%"),
            Metric::HeartRate | Metric::RestingHeartRate => Format::Suffix(" bpm"),
            Metric::Hrv => Format::Suffix(" ms"),
            Metric::Steps => Format::Count,
            Metric::SkinTemperature => Format::Celsius,
            Metric::AverageGlucose => Format::Suffix(" mg/dL"),
        }
    }

    /// Render a value for display; an absent value renders the placeholder.
    pub fn display(self, value: Option<f64>) -> String {
        let Some(value) = value else {
            return "--".to_string();
        };
        match self.format() {
            Format::Plain => format!("{value}"),
            Format::Suffix(suffix) => format!("{value}{suffix}"),
            Format::Minutes => format::format_minutes(value),
            Format::Count => format::group_thousands(value),
            Format::Celsius => format!("{value:.1}°C"),
        }
    }

    /// The three index metrics rendered as score rings rather than rows.
    pub fn is_score(self) -> bool {
        matches!(
            self,
            Metric::SleepScore | Metric::RecoveryIndex | Metric::MovementIndex
        )
    }
}

/// Row groups the card body is organised into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    Sleep,
    Heart,
    Activity,
    Glucose,
}

impl Section {
    pub const ALL: [Section; 4] = [
        Section::Sleep,
        Section::Heart,
        Section::Activity,
        Section::Glucose,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Section::Sleep => "Sleep",
            Section::Heart => "Heart",
            Section::Activity => "Body & Activity",
            Section::Glucose => "Glucose & Metabolism",
        }
    }

    pub fn metrics(self) -> &'static [Metric] {
        match self {
            Section::Sleep => &[
                Metric::TotalSleep,
                Metric::SleepEfficiency,
                Metric::DeepSleep,
                Metric::RemSleep,
                Metric::LightSleep,
                Metric::RestorativeSleep,
                Metric::Spo2,
            ],
            Section::Heart => &[Metric::HeartRate, Metric::RestingHeartRate, Metric::Hrv],
            Section::Activity => &[Metric::Steps, Metric::SkinTemperature, Metric::Vo2Max],
            Section::Glucose => &[
                Metric::MetabolicScore,
                Metric::AverageGlucose,
                Metric::GlucoseVariability,
                Metric::Hba1c,
                Metric::TimeInTarget,
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn keys_are_unique() {
        let keys: HashSet<&str> = Metric::ALL.iter().map(|m| m.key()).collect();
        assert_eq!(keys.len(), Metric::ALL.len());
    }

    #[test]
    fn every_metric_is_a_score_or_in_exactly_one_section() {
        let mut seen: Vec<Metric> = Metric::ALL.iter().copied().filter(|m| m.is_score()).collect();
        for section in Section::ALL {
            seen.extend_from_slice(section.metrics());
        }

        assert_eq!(seen.len(), Metric::ALL.len());
        let unique: HashSet<Metric> = seen.into_iter().collect();
        assert_eq!(unique.len(), Metric::ALL.len());
    }

    #[test]
    fn display_formats_by_kind() {
        assert_eq!(Metric::TotalSleep.display(Some(448.0)), "7h 28m");
        assert_eq!(Metric::SleepEfficiency.display(Some(93.0)), "93%");
        assert_eq!(Metric::HeartRate.display(Some(64.0)), "64 bpm");
        assert_eq!(Metric::Hrv.display(Some(58.5)), "58.5 ms");
        assert_eq!(Metric::Steps.display(Some(12345.4)), "12,345");
        assert_eq!(Metric::SkinTemperature.display(Some(36.72)), "36.7°C");
        assert_eq!(Metric::AverageGlucose.display(Some(98.0)), "98 mg/dL");
        assert_eq!(Metric::Vo2Max.display(Some(47.0)), "47");
    }

    #[test]
    fn absent_value_renders_placeholder() {
        for metric in Metric::ALL {
            assert_eq!(metric.display(None), "--");
        }
    }

    #[test]
    fn serializes_as_snake_case_key() {
        let json = serde_json::to_string(&Metric::RestingHeartRate).unwrap();
        assert_eq!(json, "\"resting_heart_rate\"");
    }
}
