// frontend_jalsetu/src/components/potential_form.rs
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::model::{FormDraft, FormField, ReportForm, RoofType};

/// Glass panel over the hero image, or the white card on the report page
#[derive(Clone, Copy, PartialEq)]
pub enum FormVariant {
    Hero,
    Card,
}

impl FormVariant {
    fn input_class(&self) -> &'static str {
        match self {
            FormVariant::Hero => "w-full px-4 py-3 rounded-full bg-white/20 backdrop-blur-sm border border-white/30 text-white placeholder-white/70 focus:outline-none focus:ring-2 focus:ring-emerald-400 focus:border-transparent transition-all duration-300",
            FormVariant::Card => "w-full px-4 py-3 rounded-lg bg-gray-50 border border-gray-300 text-gray-800 placeholder-gray-500 focus:outline-none focus:ring-2 focus:ring-emerald-500 focus:border-transparent transition-all duration-300",
        }
    }

    fn label_class(&self) -> &'static str {
        match self {
            FormVariant::Hero => "block text-white font-medium mb-2",
            FormVariant::Card => "text-gray-700 font-medium mb-2 flex items-center gap-2",
        }
    }

    fn hint_class(&self) -> &'static str {
        match self {
            FormVariant::Hero => "text-xs text-white/80 mt-1",
            FormVariant::Card => "text-xs text-gray-500 mt-1",
        }
    }

    fn button_class(&self) -> &'static str {
        match self {
            FormVariant::Hero => "w-full bg-emerald-600 hover:bg-emerald-700 text-white px-8 py-4 text-lg font-semibold rounded-full shadow-xl hover:shadow-2xl hover:cursor-pointer hover:-translate-y-0.5 transition-all duration-300 focus:outline-none mt-6",
            FormVariant::Card => "flex-1 bg-emerald-600 hover:bg-emerald-700 disabled:bg-gray-400 disabled:cursor-not-allowed text-white px-8 py-4 text-lg font-semibold rounded-lg shadow-lg hover:shadow-xl hover:cursor-pointer hover:-translate-y-0.5 transition-all duration-300 focus:outline-none",
        }
    }

    fn icon(&self, icon: &'static str) -> Html {
        match self {
            FormVariant::Hero => html! {},
            FormVariant::Card => html! { <span class="text-emerald-600">{ icon }</span> },
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct PotentialFormProps {
    /// Values to start from; the form re-seeds whenever this changes
    #[prop_or_default]
    pub initial: ReportForm,
    pub onsubmit: Callback<ReportForm>,
    #[prop_or_default]
    pub loading: bool,
    #[prop_or(FormVariant::Card)]
    pub variant: FormVariant,
    /// Shown above the fields, e.g. a validation or backend error
    #[prop_or_default]
    pub error: Option<String>,
}

#[function_component(PotentialForm)]
pub fn potential_form(props: &PotentialFormProps) -> Html {
    let draft = use_state(|| FormDraft::from_form(&props.initial));
    let variant = props.variant;

    {
        let draft = draft.clone();
        use_effect_with(props.initial.clone(), move |initial| {
            draft.set(FormDraft::from_form(initial));
            || ()
        });
    }

    let on_input = |field: FormField| {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            let value = e.target_unchecked_into::<HtmlInputElement>().value();
            let mut next = (*draft).clone();
            next.set(field, value);
            draft.set(next);
        })
    };

    let on_roof_type = {
        let draft = draft.clone();
        Callback::from(move |e: Event| {
            let value = e.target_unchecked_into::<HtmlSelectElement>().value();
            let mut next = (*draft).clone();
            next.set(FormField::RoofType, value);
            draft.set(next);
        })
    };

    let onsubmit = {
        let draft = draft.clone();
        let onsubmit = props.onsubmit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            onsubmit.emit(draft.to_form());
        })
    };

    let form = draft.to_form();
    let area_hint = (form.roof_area > 0.0)
        .then(|| format!("≈ {:.1} m²", form.roof_area_m2()));
    let runoff_hint = form
        .roof_type
        .map(|roof| format!("Typical runoff coefficient: {:.0}%", roof.typical_runoff() * 100.0));

    let hint = |text: Option<String>| match text {
        Some(text) => html! { <p class={variant.hint_class()}>{ text }</p> },
        None => html! {},
    };

    let submit_label = match (variant, props.loading) {
        (FormVariant::Hero, _) => "Check Potential",
        (FormVariant::Card, true) => "Generating Report...",
        (FormVariant::Card, false) => "Generate Report",
    };

    let (form_class, grid_class) = match variant {
        FormVariant::Hero => ("space-y-5", "grid grid-cols-2 gap-4"),
        FormVariant::Card => ("space-y-6", "grid grid-cols-1 md:grid-cols-2 gap-6"),
    };

    html! {
        <form class={form_class} {onsubmit}>
            { if let Some(error) = props.error.as_ref() {
                html! {
                    <div class="bg-red-50 border border-red-200 text-red-700 px-4 py-3 rounded-lg">
                        { error }
                    </div>
                }
            } else {
                html! {}
            }}

            <div class={grid_class}>
                <div>
                    <label for="location" class={variant.label_class()}>
                        { variant.icon("📍") }{ "Location" }
                    </label>
                    <input
                        type="text"
                        id="location"
                        name="location"
                        class={variant.input_class()}
                        placeholder="Enter your location"
                        value={draft.location.clone()}
                        oninput={on_input(FormField::Location)}
                        required={true}
                    />
                </div>

                <div>
                    <label for="roofArea" class={variant.label_class()}>
                        { variant.icon("🏠") }{ "Roof Area (sq ft)" }
                    </label>
                    <input
                        type="number"
                        id="roofArea"
                        name="roofArea"
                        class={variant.input_class()}
                        placeholder="Enter roof area"
                        min="1"
                        step="any"
                        value={draft.roof_area.clone()}
                        oninput={on_input(FormField::RoofArea)}
                        required={true}
                    />
                    { hint(area_hint) }
                </div>
            </div>

            <div class={grid_class}>
                <div>
                    <label for="roofType" class={variant.label_class()}>
                        { variant.icon("🔨") }{ "Roof Type" }
                    </label>
                    <select
                        id="roofType"
                        name="roofType"
                        class={variant.input_class()}
                        onchange={on_roof_type}
                        required={true}
                    >
                        <option value="" selected={draft.roof_type.is_empty()}>{ "Select roof type" }</option>
                        { for RoofType::ALL.iter().map(|roof| html! {
                            <option value={roof.label()} selected={draft.roof_type == roof.label()}>
                                { roof.label() }
                            </option>
                        }) }
                    </select>
                    { hint(runoff_hint) }
                </div>

                <div>
                    <label for="dwellers" class={variant.label_class()}>
                        { variant.icon("👥") }{ "Number of Dwellers" }
                    </label>
                    <input
                        type="number"
                        id="dwellers"
                        name="dwellers"
                        class={variant.input_class()}
                        placeholder="Enter number of dwellers"
                        min="1"
                        step="1"
                        value={draft.dwellers.clone()}
                        oninput={on_input(FormField::Dwellers)}
                        required={true}
                    />
                </div>
            </div>

            <div class="flex flex-col sm:flex-row gap-4 pt-4">
                <button type="submit" class={variant.button_class()} disabled={props.loading}>
                    { submit_label }
                </button>
            </div>
        </form>
    }
}
