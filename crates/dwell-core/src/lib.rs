pub mod app_config;
pub mod catalog;
pub mod center;
pub mod config;
pub mod liveness;
pub mod nav;
pub mod record;
pub mod summary;
pub mod validate;
pub mod wizard;

pub use app_config::{AppConfig, Environment};
pub use catalog::{FieldKind, FieldSpec, WizardKind};
pub use center::{find_center, rank, Center, Coordinates, CENTERS};
pub use config::{load_app_config, load_app_config_from_env};
pub use liveness::Liveness;
pub use nav::{Resolution, Route};
pub use record::{FieldValue, WizardRecord};
pub use summary::{format_dimension, summarize, Summary, SummaryRow};
pub use validate::is_valid;
pub use wizard::{Phase, Wizard};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum WizardError {
    #[error("unknown field \"{field}\" for the {wizard} wizard")]
    UnknownField { wizard: &'static str, field: String },

    #[error("field \"{field}\" expects a {expected:?} value")]
    KindMismatch {
        field: String,
        expected: catalog::FieldKind,
    },

    #[error("cannot jump ahead from step {current} to step {requested}")]
    JumpAhead { current: usize, requested: usize },

    #[error("steps can only change while the wizard is being edited")]
    NotEditing,

    #[error("submission is only allowed from a valid final step")]
    NotReadyToSubmit,

    #[error("no submission is in flight")]
    NotSubmitting,
}
