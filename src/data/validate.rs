use std::collections::{BTreeSet, HashMap};
use std::fmt;

use crate::config::VizConfig;
use crate::data::breeds::{read_breed_dataset, retain_established_breeds, MIN_YEARS_PRESENT};
use crate::data::{load_pet_ownership, load_regions};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ValidationSeverity {
    Error,
    Warning,
    Info,
}

impl ValidationSeverity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Info => "info",
        }
    }
}

impl fmt::Display for ValidationSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationDiagnostic {
    pub severity: ValidationSeverity,
    pub context: String,
    pub message: String,
}

impl fmt::Display for ValidationDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}: {}", self.severity, self.context, self.message)
    }
}

#[derive(Debug, Clone, Default)]
pub struct ValidationReport {
    pub diagnostics: Vec<ValidationDiagnostic>,
}

impl ValidationReport {
    pub fn push(
        &mut self,
        severity: ValidationSeverity,
        context: impl Into<String>,
        message: impl Into<String>,
    ) {
        self.diagnostics.push(ValidationDiagnostic {
            severity,
            context: context.into(),
            message: message.into(),
        });
    }

    pub fn has_errors(&self) -> bool {
        self.diagnostics
            .iter()
            .any(|diag| diag.severity == ValidationSeverity::Error)
    }

    pub fn count(&self, severity: ValidationSeverity) -> usize {
        self.diagnostics
            .iter()
            .filter(|diag| diag.severity == severity)
            .count()
    }
}

fn dropped_breed_message(breed: &str) -> String {
    format!("'{breed}' ranked in fewer than {MIN_YEARS_PRESENT} years; left out of the chart")
}

/// Load all three datasets the way the generators do and report problems
/// without writing any output.
pub fn validate_datasets(config: &VizConfig) -> ValidationReport {
    let mut report = ValidationReport::default();

    let ownership_path = config.ownership_input();
    let ownership_ctx = ownership_path.display().to_string();
    match load_pet_ownership(&ownership_path) {
        Ok(records) => report.push(
            ValidationSeverity::Info,
            ownership_ctx,
            format!("{} species", records.len()),
        ),
        Err(err) => report.push(ValidationSeverity::Error, ownership_ctx, err.to_string()),
    }

    let regions_path = config.regions_input();
    let regions_ctx = regions_path.display().to_string();
    match load_regions(&regions_path) {
        Ok(regions) => {
            let mut by_rank: HashMap<u32, Vec<&str>> = HashMap::new();
            for region in regions.records() {
                by_rank.entry(region.rank).or_default().push(&region.id);
            }
            let mut shared: Vec<_> = by_rank
                .into_iter()
                .filter(|(_, ids)| ids.len() > 1)
                .collect();
            shared.sort_by_key(|(rank, _)| *rank);
            for (rank, ids) in shared {
                report.push(
                    ValidationSeverity::Warning,
                    regions_ctx.clone(),
                    format!("rank {rank} shared by {}", ids.join(", ")),
                );
            }
            report.push(
                ValidationSeverity::Info,
                regions_ctx,
                format!("{} regions", regions.len()),
            );
        }
        Err(err) => report.push(ValidationSeverity::Error, regions_ctx, err.to_string()),
    }

    let breeds_path = config.breeds_input();
    let breeds_ctx = breeds_path.display().to_string();
    match read_breed_dataset(&breeds_path) {
        Ok(dataset) => {
            for (breed, year) in &dataset.duplicates {
                report.push(
                    ValidationSeverity::Warning,
                    breeds_ctx.clone(),
                    format!("'{breed}' ranked more than once in {year}; best rank kept"),
                );
            }
            let all: BTreeSet<String> = dataset.rankings.iter().map(|r| r.breed.clone()).collect();
            let retained = retain_established_breeds(dataset.rankings, MIN_YEARS_PRESENT);
            let kept: BTreeSet<String> = retained.into_iter().map(|r| r.breed).collect();
            for dropped in all.difference(&kept) {
                report.push(
                    ValidationSeverity::Info,
                    breeds_ctx.clone(),
                    dropped_breed_message(dropped),
                );
            }
            report.push(
                ValidationSeverity::Info,
                breeds_ctx,
                format!("{} breeds charted", kept.len()),
            );
        }
        Err(err) => report.push(ValidationSeverity::Error, breeds_ctx, err.to_string()),
    }

    report
}
