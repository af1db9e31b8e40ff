//! Root application component and context providers.

use leptos::prelude::*;
use leptos_meta::{Stylesheet, Title, provide_meta_context};

use crate::components::{
    batch_grid::BatchGrid, filter_grid::FilterGrid, notice::ActiveFilterNotice, parameter_panel::ParameterPanel,
    upload_zone::UploadZone, viewer_panel::ViewerPanel,
};
use crate::state::batch::BatchSession;
use crate::state::viewer::ViewerState;

/// Root application component.
///
/// Provides the viewer and batch state to every child component.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let viewer = RwSignal::new(ViewerState::new());
    let batch = RwSignal::new(BatchSession::new());

    provide_context(viewer);
    provide_context(batch);

    view! {
        <Stylesheet id="app" href="/static/css/style.css"/>
        <Title text="Image Filter Studio"/>

        <main class="app">
            <UploadZone/>
            <div class="workspace">
                <ViewerPanel/>
                <ParameterPanel/>
            </div>
            <FilterGrid/>
            <BatchGrid/>
            <ActiveFilterNotice/>
        </main>
    }
}
