// frontend_jalsetu/src/pages/report.rs
use gloo::console::log;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::api::report::api_calculate_report;
use crate::components::layout::Layout;
use crate::components::loading::LoadingPanel;
use crate::components::potential_form::{FormVariant, PotentialForm};
use crate::components::report_summary::ReportSummary;
use crate::error::ReportError;
use crate::model::{ReportForm, ReportParams, ReportResult};

/// Exactly one of: nothing yet, waiting on the service, a report, an error.
#[derive(Clone, Debug, PartialEq)]
pub enum ReportState {
    Idle,
    Loading,
    Loaded(ReportResult),
    Failed(String),
}

impl ReportState {
    pub fn is_loading(&self) -> bool {
        matches!(self, ReportState::Loading)
    }

    pub fn error(&self) -> Option<String> {
        match self {
            ReportState::Failed(message) => Some(message.clone()),
            _ => None,
        }
    }

    pub fn report(&self) -> Option<&ReportResult> {
        match self {
            ReportState::Loaded(report) => Some(report),
            _ => None,
        }
    }
}

impl From<ReportError> for ReportState {
    fn from(e: ReportError) -> Self {
        ReportState::Failed(e.to_string())
    }
}

impl From<Result<ReportResult, ReportError>> for ReportState {
    fn from(result: Result<ReportResult, ReportError>) -> Self {
        match result {
            Ok(report) => ReportState::Loaded(report),
            Err(e) => ReportState::from(e),
        }
    }
}

#[function_component(Report)]
pub fn report() -> Html {
    let location = use_location();
    let params = location
        .as_ref()
        .and_then(|l| l.query::<ReportParams>().ok())
        .unwrap_or_default();
    let seed = use_state(ReportForm::default);
    let state = use_state(|| ReportState::Idle);

    let generate = {
        let state = state.clone();
        Callback::from(move |form: ReportForm| match form.validate() {
            Err(e) => state.set(ReportState::from(e)),
            Ok(valid) => {
                state.set(ReportState::Loading);
                let state = state.clone();
                api_calculate_report(valid, move |result| state.set(ReportState::from(result)));
            }
        })
    };

    // Populate the form from the query, and run straight away when it is complete
    {
        let seed = seed.clone();
        let generate = generate.clone();
        use_effect_with(params, move |params| {
            if !params.is_empty() {
                let form = ReportForm::from_params(params);
                seed.set(form.clone());
                if params.is_complete() {
                    log!("report query complete, generating");
                    generate.emit(form);
                }
            }
            || ()
        });
    }

    let on_reset = {
        let state = state.clone();
        Callback::from(move |_: ()| state.set(ReportState::Idle))
    };

    html! {
        <Layout>
            <div class="min-h-screen py-12">
                <div class="max-w-4xl mx-auto">
                    <div class="text-center mb-12">
                        <h1 class="text-4xl font-bold text-gray-800 mb-4">{ "Rainwater Harvesting Report" }</h1>
                        <p class="text-xl text-gray-600">
                            { "Enter your details below to generate a comprehensive feasibility report" }
                        </p>
                    </div>

                    <div class="bg-white rounded-xl shadow-2xl p-8 border border-gray-200">
                        <h3 class="text-2xl font-semibold text-gray-800 mb-6 text-center">{ "Check Potential" }</h3>
                        <PotentialForm
                            variant={FormVariant::Card}
                            initial={(*seed).clone()}
                            onsubmit={generate}
                            loading={state.is_loading()}
                            error={state.error()}
                        />
                    </div>

                    { if state.is_loading() {
                        html! { <LoadingPanel /> }
                    } else if let Some(report) = state.report() {
                        html! { <ReportSummary report={report.clone()} {on_reset} /> }
                    } else {
                        html! {}
                    }}
                </div>
            </div>
        </Layout>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::report::tests::sample;

    #[test]
    fn states_are_exclusive() {
        let states = [
            ReportState::Idle,
            ReportState::Loading,
            ReportState::Loaded(sample()),
            ReportState::Failed("Request failed: offline".into()),
        ];
        for state in &states {
            let shown = [state.is_loading(), state.error().is_some(), state.report().is_some()];
            assert!(shown.iter().filter(|s| **s).count() <= 1, "{state:?}");
        }
        assert!(states[1].is_loading());
        assert!(!states[0].is_loading());
    }

    #[test]
    fn service_result_maps_to_state() {
        let loaded = ReportState::from(Ok::<_, ReportError>(sample()));
        assert_eq!(loaded.report().map(|r| r.household_size), Some(4));

        let failed = ReportState::from(Err::<ReportResult, _>(ReportError::backend(400, "Invalid roof type")));
        assert_eq!(failed.error().as_deref(), Some("Invalid roof type"));
    }

    #[test]
    fn invalid_form_fails_without_loading() {
        let state = ReportState::from(ReportForm::default().validate().unwrap_err());
        assert!(!state.is_loading());
        assert_eq!(
            state.error().as_deref(),
            Some("Please fill in all required fields with valid values")
        );
    }
}
