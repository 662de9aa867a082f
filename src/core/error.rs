use thiserror::Error;

/// Shown while a generate request is in flight.
pub const GENERATING: &str = "Generating...";

/// First line of every generate failure shown to the user.
pub const GENERATE_PREAMBLE: &str = "Error generating chart. Is the server running?";

/// Used when the service fails without a response body.
pub const GENERATE_FALLBACK: &str = "Failed to generate chart.";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Select a scenario first.")]
    NoScenario,
    #[error("Select at least one role.")]
    NoRoles,
}

#[derive(Debug, Error)]
pub enum ChartError {
    /// A reference document answered with a non-success status.
    #[error("Failed to load {url}: {status}")]
    Load { url: String, status: u16 },

    /// The generate endpoint rejected the request.
    #[error("{0}")]
    Generate(String),
}

impl ChartError {
    /// Builds a generate failure from a (possibly empty) response body.
    pub fn generate(body: String) -> Self {
        if body.is_empty() {
            ChartError::Generate(GENERATE_FALLBACK.to_string())
        } else {
            ChartError::Generate(body)
        }
    }
}

pub fn format_load_error(err: &anyhow::Error) -> String {
    format!("Failed to load data: {}", err)
}

pub fn format_generate_error(err: &anyhow::Error) -> String {
    format!("{}\n\n{}", GENERATE_PREAMBLE, err)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(ValidationError::NoScenario.to_string(), "Select a scenario first.");
        assert_eq!(ValidationError::NoRoles.to_string(), "Select at least one role.");

        let err = ChartError::Load { url: "data/roles.json".to_string(), status: 404 };
        assert_eq!(err.to_string(), "Failed to load data/roles.json: 404");
    }

    #[test]
    fn test_generate_error_falls_back_on_empty_body() {
        assert_eq!(ChartError::generate(String::new()).to_string(), "Failed to generate chart.");
        assert_eq!(ChartError::generate("bad scenario".into()).to_string(), "bad scenario");
    }

    #[test]
    fn test_format_generate_error() {
        let err = anyhow::Error::new(ChartError::generate("bad scenario".into()));
        assert_eq!(
            format_generate_error(&err),
            "Error generating chart. Is the server running?\n\nbad scenario"
        );
    }

    #[test]
    fn test_format_load_error() {
        let err = anyhow::Error::new(ChartError::Load { url: "x.json".into(), status: 500 });
        assert_eq!(format_load_error(&err), "Failed to load data: Failed to load x.json: 500");
    }
}
