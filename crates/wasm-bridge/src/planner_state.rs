use dimension_resolver::{resolve, SystemModel};
use hydro_types::{ParamName, ParameterError, ParameterVector};
use layout_builder::LayoutConfig;
use tracing::debug;

/// Errors raised at the bridge boundary. The core itself never fails.
#[derive(Debug, Clone, thiserror::Error)]
pub enum BridgeError {
    #[error("invalid parameter: {0}")]
    InvalidParameter(#[from] ParameterError),

    #[error("failed to parse message: {message}")]
    Parse { message: String },

    #[error("planner not initialized; call init() first")]
    NotInitialized,
}

impl BridgeError {
    pub fn field(&self) -> Option<ParamName> {
        match self {
            BridgeError::InvalidParameter(ParameterError::NotFinite { name })
            | BridgeError::InvalidParameter(ParameterError::OutOfRange { name, .. }) => Some(*name),
            _ => None,
        }
    }
}

/// Session state: layout config and the last resolved model.
///
/// Resolving is cheap, but a UI sends a request per slider tick and usually
/// only toggles change between them.
#[derive(Debug, Default)]
pub struct PlannerState {
    pub config: LayoutConfig,
    last: Option<(ParameterVector, SystemModel)>,
    resolve_count: usize,
}

impl PlannerState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: LayoutConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Validate, then resolve or reuse the memoized model.
    pub fn model_for(&mut self, params: &ParameterVector) -> Result<SystemModel, BridgeError> {
        params.validate()?;
        if let Some((last_params, model)) = &self.last {
            if last_params == params {
                debug!("reusing resolved model");
                return Ok(model.clone());
            }
        }
        let model = resolve(params);
        self.resolve_count += 1;
        self.last = Some((*params, model.clone()));
        Ok(model)
    }

    /// How many times the resolver actually ran.
    pub fn resolve_count(&self) -> usize {
        self.resolve_count
    }
}
