//! Floating "Active Filter" notice.

use leptos::prelude::*;

use crate::state::viewer::ViewerState;

#[component]
pub fn ActiveFilterNotice() -> impl IntoView {
    let viewer = expect_context::<RwSignal<ViewerState>>();
    let text = move || viewer.with(|v| v.notice.text().map(str::to_owned));

    view! {
        <Show when=move || text().is_some()>
            <div class="active-filter-notice">{move || text().unwrap_or_default()}</div>
        </Show>
    }
}
