// frontend_jalsetu/src/components/report_summary.rs
use gloo::console::error;
use yew::prelude::*;

use crate::model::methods::methods_for_location;
use crate::model::ReportResult;

#[derive(Properties, PartialEq)]
pub struct ReportSummaryProps {
    pub report: ReportResult,
    pub on_reset: Callback<()>,
}

fn metric(icon: &'static str, value: String, label: &'static str, color: &'static str) -> Html {
    html! {
        <div class={format!("bg-{color}-50 border border-{color}-200 rounded-lg p-6 text-center")}>
            <div class={format!("text-{color}-600 text-2xl mb-2")}>{ icon }</div>
            <div class={format!("text-2xl font-bold text-{color}-800")}>{ value }</div>
            <div class={format!("text-{color}-600 text-sm")}>{ label }</div>
        </div>
    }
}

fn row(label: &'static str, value: String) -> Html {
    html! {
        <div class="flex justify-between">
            <span class="text-gray-600">{ label }</span>
            <span class="font-medium">{ value }</span>
        </div>
    }
}

fn print_page() {
    if let Some(window) = web_sys::window() {
        if let Err(e) = window.print() {
            error!(format!("print failed: {e:?}"));
        }
    }
}

#[function_component(ReportSummary)]
pub fn report_summary(props: &ReportSummaryProps) -> Html {
    let report = &props.report;
    let feasibility = report.feasibility;
    let regional = methods_for_location(&report.input_parameters.location);

    let on_reset = {
        let on_reset = props.on_reset.clone();
        Callback::from(move |_: MouseEvent| on_reset.emit(()))
    };
    let on_print = Callback::from(|_: MouseEvent| print_page());

    html! {
        <div class="mt-8 bg-white rounded-xl shadow-2xl p-8 border border-gray-200 animate-fade-in">
            <div class="text-center mb-6">
                <h2 class="text-3xl font-bold text-gray-800 mb-2">{ "📊 Rainwater Harvesting Report" }</h2>
                <div class={format!("inline-flex items-center px-4 py-2 rounded-full text-lg font-semibold {}", feasibility.badge_class())}>
                    { format!("{} Feasibility: {}", feasibility.icon(), feasibility.label()) }
                </div>
            </div>

            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-6 mb-8">
                { metric("🌧️", report.rainfall_display(), "Annual Rainfall", "blue") }
                { metric("💧", report.harvested_display(), "Water Harvested/Year", "emerald") }
                { metric("🏠", report.demand_display(), "Annual Demand", "purple") }
                { metric("💰", report.savings_display(), "Annual Savings", "amber") }
            </div>

            <div class="grid grid-cols-1 lg:grid-cols-2 gap-8">
                <div class="bg-gray-50 rounded-lg p-6">
                    <h3 class="text-xl font-semibold text-gray-800 mb-4 flex items-center gap-2">{ "Project Details" }</h3>
                    <div class="space-y-3">
                        { row("📍 Location:", report.input_parameters.location.clone()) }
                        { row("🌐 Coordinates:", format!("{:.4}, {:.4}", report.location.latitude, report.location.longitude)) }
                        { row("🏠 Roof Area:", report.roof_area_display()) }
                        { row("🔨 Roof Type:", report.roof_type.clone()) }
                        { row("👥 Household Size:", format!("{} people", report.household_size)) }
                        { row("⚡ Runoff Coefficient:", report.runoff_display()) }
                    </div>
                </div>

                <div class="bg-gray-50 rounded-lg p-6">
                    <h3 class="text-xl font-semibold text-gray-800 mb-4 flex items-center gap-2">{ "Water Analysis" }</h3>
                    <div class="space-y-3">
                        { row("💧 Harvested Volume:", format!("{:.0} L/year", report.harvested_volume_liters)) }
                        { row("🚰 Daily Demand:", format!("{:.0} L/day", report.daily_demand_liters())) }
                        { row("👤 Per Capita Demand:", format!("{} L/person/day", report.per_capita_demand_lpd)) }
                        { row("📈 Demand Covered:", format!("{:.0}%", report.coverage_percent())) }
                        { row("💸 Water Cost:", format!("₹{}/m³", report.water_cost_rs_per_m3)) }
                        <div class="flex justify-between font-semibold">
                            <span class="text-gray-800">{ "💰 Total Savings:" }</span>
                            <span class="text-emerald-600">{ format!("{}/year", report.savings_display()) }</span>
                        </div>
                    </div>
                </div>
            </div>

            <div class="mt-8 bg-emerald-50 border border-emerald-200 rounded-lg p-6">
                <h3 class="text-xl font-semibold text-gray-800 mb-2">
                    { match regional.region {
                        Some(region) => format!("Traditional methods in {region}"),
                        None => "Recommended harvesting methods".to_owned(),
                    } }
                </h3>
                <ul class="list-disc pl-6 space-y-1 text-gray-700">
                    { for regional.methods.iter().map(|method| html! { <li>{ *method }</li> }) }
                </ul>
            </div>

            <div class="mt-8 flex flex-col sm:flex-row gap-4 justify-center">
                <button
                    class="px-6 py-3 bg-gray-500 hover:bg-gray-600 text-white font-semibold rounded-lg shadow-lg hover:shadow-xl transition-all duration-300"
                    onclick={on_reset}
                >
                    { "Generate New Report" }
                </button>
                <button
                    class="px-6 py-3 bg-emerald-600 hover:bg-emerald-700 text-white font-semibold rounded-lg shadow-lg hover:shadow-xl transition-all duration-300"
                    onclick={on_print}
                >
                    { "Print Report" }
                </button>
            </div>
        </div>
    }
}
