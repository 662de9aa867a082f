use crate::core::error::{format_generate_error, format_load_error, ValidationError, GENERATING};
use crate::core::model::{GenerateRequest, ReferenceData};
use crate::services::api::ChartApi;
use crate::services::render::{self, ChoiceOption};
use anyhow::Result;
use futures_util::future::try_join;
use log::{info, warn};

/// Fetches both reference documents concurrently.
pub async fn load_reference_data<A: ChartApi + ?Sized>(api: &A) -> Result<ReferenceData> {
    let (scenarios, roles) = try_join(api.fetch_scenarios(), api.fetch_roles()).await?;
    info!(
        "Loaded {} scenarios and {} roles",
        scenarios.scenarios.len(),
        roles.roles.len()
    );
    Ok(ReferenceData::new(scenarios, roles))
}

/// Turns the current widget state into a request, or says what is missing.
pub fn validate_selection(
    scenario_id: Option<&str>,
    roles: Vec<String>,
) -> Result<GenerateRequest, ValidationError> {
    let scenario_id = match scenario_id {
        Some(id) if !id.is_empty() => id.to_string(),
        _ => return Err(ValidationError::NoScenario),
    };
    if roles.is_empty() {
        return Err(ValidationError::NoRoles);
    }
    Ok(GenerateRequest { scenario_id, roles })
}

/// Sends the request and returns the text for the output area.
pub async fn submit<A: ChartApi + ?Sized>(api: &A, request: &GenerateRequest) -> String {
    match api.generate(request).await {
        Ok(chart) => chart,
        Err(e) => {
            warn!("Generate failed: {:#}", e);
            format_generate_error(&e)
        }
    }
}

/// Identifies one submission. Only the latest ticket may write the output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

#[derive(Debug, Default, Clone)]
pub struct RequestTracker {
    latest: u64,
}

impl RequestTracker {
    pub fn issue(&mut self) -> Ticket {
        self.latest += 1;
        Ticket(self.latest)
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        ticket.0 == self.latest
    }
}

/// Output text plus ticket bookkeeping for generate requests. Both the CLI
/// session and the browser UI drive submissions through this.
#[derive(Debug, Default, Clone)]
pub struct GenerateFlow {
    output: String,
    tracker: RequestTracker,
}

impl GenerateFlow {
    pub fn output(&self) -> &str {
        &self.output
    }

    pub fn show(&mut self, text: impl Into<String>) {
        self.output = text.into();
    }

    /// Validates the selection and shows the pending message. Returns
    /// `None` when nothing should be sent.
    pub fn begin(
        &mut self,
        scenario_id: Option<&str>,
        roles: Vec<String>,
    ) -> Option<(Ticket, GenerateRequest)> {
        match validate_selection(scenario_id, roles) {
            Ok(request) => {
                self.output = GENERATING.to_string();
                Some((self.tracker.issue(), request))
            }
            Err(e) => {
                self.output = e.to_string();
                None
            }
        }
    }

    /// Applies a response unless a newer submission superseded it.
    pub fn finish(&mut self, ticket: Ticket, output: String) -> bool {
        if !self.tracker.is_current(ticket) {
            warn!("Discarding stale chart response");
            return false;
        }
        self.output = output;
        true
    }
}

/// Reference data and generate state for one user.
pub struct ChartSession<A: ChartApi> {
    api: A,
    default_role: String,
    data: ReferenceData,
    flow: GenerateFlow,
}

impl<A: ChartApi> ChartSession<A> {
    pub fn new(api: A, default_role: impl Into<String>) -> Self {
        Self {
            api,
            default_role: default_role.into(),
            data: ReferenceData::default(),
            flow: GenerateFlow::default(),
        }
    }

    /// Loads the reference data. On failure the data stays empty and the
    /// output explains why.
    pub async fn init(&mut self) -> bool {
        match load_reference_data(&self.api).await {
            Ok(data) => {
                self.data = data;
                true
            }
            Err(e) => {
                warn!("Reference data load failed: {:#}", e);
                self.flow.show(format_load_error(&e));
                false
            }
        }
    }

    pub fn output(&self) -> &str {
        self.flow.output()
    }

    pub fn scenario_options(&self) -> Vec<ChoiceOption> {
        render::scenario_options(&self.data.scenarios)
    }

    pub fn role_options(&self) -> Vec<ChoiceOption> {
        render::role_options(&self.data.roles, &self.default_role)
    }

    pub async fn generate(&mut self, scenario_id: Option<&str>, roles: Vec<String>) -> &str {
        if let Some((ticket, request)) = self.flow.begin(scenario_id, roles) {
            let output = submit(&self.api, &request).await;
            self.flow.finish(ticket, output);
        }
        self.flow.output()
    }
}
