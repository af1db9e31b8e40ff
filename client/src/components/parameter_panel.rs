//! Sliders for the ten filter parameters.
//!
//! Changing a slider re-uploads the current image with the new values.

use leptos::prelude::*;

use crate::state::params::FilterParameter;
use crate::state::viewer::ViewerState;
use crate::util::flows;

#[component]
pub fn ParameterPanel() -> impl IntoView {
    let viewer = expect_context::<RwSignal<ViewerState>>();

    let rows = FilterParameter::ALL
        .into_iter()
        .map(|param| view! { <ParameterSlider param=param viewer=viewer/> })
        .collect_view();

    view! {
        <section class="parameters">
            <h3>"Filter Parameters"</h3>
            {rows}
        </section>
    }
}

#[component]
fn ParameterSlider(param: FilterParameter, viewer: RwSignal<ViewerState>) -> impl IntoView {
    let range = param.range();
    let value = move || viewer.with(|v| v.parameters.display(param));

    let on_input = move |ev: leptos::ev::Event| {
        let raw = event_target_value(&ev);
        viewer.update(|v| {
            if let Err(err) = v.parameters.set_from_input(param, &raw) {
                log::warn!("{err}");
            }
        });
    };

    let on_change = move |_| flows::regenerate(viewer);

    view! {
        <label class="parameter">
            <span class="parameter__label">{param.label()}</span>
            <input
                type="range"
                name=param.form_field()
                min=range.min.to_string()
                max=range.max.to_string()
                step=range.step.to_string()
                prop:value=value
                on:input=on_input
                on:change=on_change
            />
            <span class="parameter__value">{value}</span>
        </label>
    }
}
