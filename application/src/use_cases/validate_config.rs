//! Validate configuration use case
//!
//! Validates the selected variant in full, and checks that every other
//! variant at least carries the `production` flag of its name. The second
//! check catches the classic copy-paste of `environment.ts` into
//! `environment.prod.ts` without flipping the flag.

use brewenv_domain::{ConfigIssue, ConfigIssueCode, DeploymentConfiguration, Environment, Severity};
use tracing::{debug, info};

/// Input for the ValidateConfig use case.
#[derive(Debug, Clone)]
pub struct ValidateConfigInput {
    /// Variant the caller is about to use
    pub selected: Environment,
    /// Every variant known to the configuration source
    pub variants: Vec<(Environment, DeploymentConfiguration)>,
}

impl ValidateConfigInput {
    pub fn new(selected: Environment) -> Self {
        Self {
            selected,
            variants: Vec::new(),
        }
    }

    pub fn with_variant(mut self, env: Environment, config: DeploymentConfiguration) -> Self {
        self.variants.push((env, config));
        self
    }
}

/// Issues found for one variant.
#[derive(Debug, Clone)]
pub struct VariantIssues {
    pub variant: Environment,
    pub issues: Vec<ConfigIssue>,
}

/// Result of a validation run.
#[derive(Debug, Clone)]
pub struct ValidationReport {
    pub selected: Environment,
    pub variants: Vec<VariantIssues>,
}

impl ValidationReport {
    /// All issues, across variants.
    pub fn issues(&self) -> impl Iterator<Item = &ConfigIssue> {
        self.variants.iter().flat_map(|v| v.issues.iter())
    }

    pub fn error_count(&self) -> usize {
        self.issues().filter(|i| i.severity == Severity::Error).count()
    }

    pub fn warning_count(&self) -> usize {
        self.issues()
            .filter(|i| i.severity == Severity::Warning)
            .count()
    }

    /// `true` when no issue of [`Severity::Error`] was found.
    pub fn is_ok(&self) -> bool {
        self.error_count() == 0
    }
}

/// Use case for validating deployment records
pub struct ValidateConfigUseCase;

impl ValidateConfigUseCase {
    pub fn execute(input: ValidateConfigInput) -> ValidationReport {
        let mut variants = Vec::with_capacity(input.variants.len());

        for (env, config) in &input.variants {
            let mut issues = config.validate_as(*env);
            if *env != input.selected {
                issues.retain(|i| matches!(i.code, ConfigIssueCode::FlagMismatch { .. }));
            }
            debug!(variant = %env, issues = issues.len(), "validated variant");
            variants.push(VariantIssues {
                variant: *env,
                issues,
            });
        }

        let report = ValidationReport {
            selected: input.selected,
            variants,
        };
        info!(
            selected = %report.selected,
            errors = report.error_count(),
            warnings = report.warning_count(),
            "configuration validated"
        );
        report
    }
}
