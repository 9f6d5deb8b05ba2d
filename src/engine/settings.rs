use crate::algebra::{CofactorExpansion, DeterminantSolver, LuDecomposition};
use derive_builder::Builder;
use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
/// Error type returned by settings validation
pub enum SettingsError {
    /// An error attributable to one of the fields
    #[error("Bad value for field \"{0}\"")]
    BadFieldValue(&'static str),
    /// The determinant method string is not one of the supported options
    #[error("Unknown determinant method \"{0}\"")]
    UnknownDeterminantMethod(String),
}

/// Settings for a [`MatrixEngine`](crate::engine::MatrixEngine).

#[derive(Builder, Debug, Clone, PartialEq, Eq)]
#[builder(build_fn(validate = "Self::validate"))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EngineSettings {
    ///verbose printing
    #[builder(default = "false")]
    pub verbose: bool,

    ///determinant method ("cofactor", "lu" or "auto")
    #[builder(default = r#""auto".to_string()"#, setter(into))]
    pub determinant_method: String,

    ///largest dimension for which "auto" uses cofactor expansion
    #[builder(default = "8")]
    pub cofactor_max_dim: usize,
}

impl Default for EngineSettings {
    fn default() -> EngineSettings {
        EngineSettingsBuilder::default().build().unwrap()
    }
}

impl EngineSettings {
    /// Checks that the settings are valid.
    pub fn validate(&self) -> Result<(), SettingsError> {
        validate_determinant_method(&self.determinant_method)?;
        validate_cofactor_max_dim(self.cofactor_max_dim)?;
        Ok(())
    }

    /// Determinant method to be used for an `n × n` matrix.
    pub fn determinant_solver(&self, n: usize) -> DeterminantSolver {
        match self.determinant_method.as_str() {
            "cofactor" => CofactorExpansion.into(),
            "lu" => LuDecomposition.into(),
            _ => {
                if n <= self.cofactor_max_dim {
                    CofactorExpansion.into()
                } else {
                    LuDecomposition.into()
                }
            }
        }
    }
}

// pre build checker (for auto-validation when using the builder)

impl From<SettingsError> for EngineSettingsBuilderError {
    fn from(e: SettingsError) -> Self {
        EngineSettingsBuilderError::ValidationError(e.to_string())
    }
}

/// Automatic pre-build settings validation
impl EngineSettingsBuilder {
    pub fn validate(&self) -> Result<(), SettingsError> {
        if let Some(ref determinant_method) = self.determinant_method {
            validate_determinant_method(determinant_method)?;
        }
        if let Some(cofactor_max_dim) = self.cofactor_max_dim {
            validate_cofactor_max_dim(cofactor_max_dim)?;
        }
        Ok(())
    }
}

// ---------------------------------------------------------
// individual validation functions go here
// ---------------------------------------------------------

fn validate_determinant_method(determinant_method: &str) -> Result<(), SettingsError> {
    match determinant_method {
        "auto" | "cofactor" | "lu" => Ok(()),
        _ => Err(SettingsError::UnknownDeterminantMethod(
            determinant_method.to_string(),
        )),
    }
}

fn validate_cofactor_max_dim(cofactor_max_dim: usize) -> Result<(), SettingsError> {
    if cofactor_max_dim == 0 {
        return Err(SettingsError::BadFieldValue("cofactor_max_dim"));
    }
    Ok(())
}
