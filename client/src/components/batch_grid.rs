//! Batch results: one card per processed image, plus the filters modal.
//!
//! Opening a card makes its session the viewer's image, so the modal, the
//! main display and the zoomed export all show the same gallery. Closing the
//! modal stores the viewer's selection back into the entry.

use leptos::prelude::*;

use crate::components::filter_grid::FilterTile;
use crate::state::batch::{BatchCard, BatchPhase, BatchSession};
use crate::state::viewer::ViewerState;
use crate::util::{flows, notice_timer};

#[component]
pub fn BatchGrid() -> impl IntoView {
    let viewer = expect_context::<RwSignal<ViewerState>>();
    let batch = expect_context::<RwSignal<BatchSession>>();

    let visible = move || batch.with(|b| b.phase() != BatchPhase::Idle);
    let cards = Memo::new(move |_| batch.with(BatchSession::cards));

    let on_open = Callback::new(move |index: usize| match batch.try_update(|b| b.open(index)) {
        Some(Ok(session)) => {
            notice_timer::cancel();
            viewer.update(|v| v.activate_session(session));
        }
        Some(Err(err)) => log::warn!("open batch entry {index}: {err}"),
        None => {}
    });

    let on_clear = move |_| batch.update(BatchSession::clear);

    view! {
        <Show when=visible>
            <section class="batch">
                <header class="batch__header">
                    <h3>"Batch results"</h3>
                    <button class="btn btn--small" on:click=on_clear>"Clear batch"</button>
                </header>
                <div class="batch-grid">
                    <For
                        each=move || cards.get()
                        key=|card| card.index
                        children=move |card| view! { <BatchCardView card=card on_open=on_open/> }
                    />
                </div>
            </section>
        </Show>
        <BatchModal/>
    }
}

#[component]
fn BatchCardView(card: BatchCard, on_open: Callback<usize>) -> impl IntoView {
    let index = card.index;
    view! {
        <div class="batch-item">
            <img src=card.thumbnail alt=card.name.clone()/>
            <div class="batch-item__footer">
                <span class="batch-item__name">{card.name}</span>
                <button class="btn btn--small" on:click=move |_| on_open.run(index)>"View Filters"</button>
            </div>
        </div>
    }
}

#[component]
fn BatchModal() -> impl IntoView {
    let viewer = expect_context::<RwSignal<ViewerState>>();
    let batch = expect_context::<RwSignal<BatchSession>>();

    let open = move || batch.with(|b| b.focused().is_some());
    let title = move || {
        batch.with(|b| b.focused().and_then(|i| b.entries().get(i)).map(|e| e.name.clone()).unwrap_or_default())
    };
    let main_image = move || viewer.with(|v| v.main_image().to_owned());
    let tiles = Memo::new(move |_| viewer.with(|v| v.render().tiles));

    let close = move || {
        let session = viewer.with_untracked(|v| v.session.clone());
        batch.update(|b| {
            b.close(session.as_ref());
        });
    };

    let on_select = Callback::new(move |name: String| flows::select_variant(viewer, &name));
    let on_download = Callback::new(move |name: String| flows::download_variant(viewer, &name));

    view! {
        <Show when=open>
            <div class="modal-backdrop" on:click=move |_| close()>
                <div class="modal" on:click=|ev| ev.stop_propagation()>
                    <header class="modal__header">
                        <h3>{title}</h3>
                        <button class="btn btn--small" on:click=move |_| close()>"×"</button>
                    </header>
                    <img class="modal__main" src=main_image alt="Selected filter"/>
                    <div class="filter-grid">
                        <For
                            each=move || tiles.get()
                            key=|tile| (tile.name.clone(), tile.active, tile.src.clone())
                            children=move |tile| {
                                view! { <FilterTile tile=tile on_select=on_select on_download=on_download/> }
                            }
                        />
                    </div>
                </div>
            </div>
        </Show>
    }
}
