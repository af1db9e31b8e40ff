//! Grid of filter variants under the viewer.

use leptos::prelude::*;

use crate::render::TileInstruction;
use crate::state::viewer::ViewerState;
use crate::util::flows;

#[component]
pub fn FilterGrid() -> impl IntoView {
    let viewer = expect_context::<RwSignal<ViewerState>>();
    let tiles = Memo::new(move |_| viewer.with(|v| v.render().tiles));

    view! {
        <section class="filter-grid">
            <For
                each=move || tiles.get()
                key=|tile| (tile.name.clone(), tile.active, tile.src.clone())
                children=move |tile| {
                    view! {
                        <FilterTile
                            tile=tile
                            on_select=Callback::new(move |name: String| flows::select_variant(viewer, &name))
                            on_download=Callback::new(move |name: String| flows::download_variant(viewer, &name))
                        />
                    }
                }
            />
        </section>
    }
}

/// One variant thumbnail with select and download actions. Shared with the batch modal.
#[component]
pub fn FilterTile(tile: TileInstruction, on_select: Callback<String>, on_download: Callback<String>) -> impl IntoView {
    let select_name = tile.name.clone();
    let download_name = tile.name.clone();

    view! {
        <div class="filter-item" class:active=tile.active>
            <img
                src=tile.src
                alt=tile.display_name.clone()
                on:click=move |_| on_select.run(select_name.clone())
            />
            <div class="filter-item__footer">
                <span class="filter-name">{tile.display_name}</span>
                <button
                    class="btn btn--small"
                    title="Download"
                    on:click=move |_| on_download.run(download_name.clone())
                >
                    "Download"
                </button>
            </div>
        </div>
    }
}
