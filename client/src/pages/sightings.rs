//! Sightings list page: search, table, modal form, and inline delete.
//!
//! SYSTEM CONTEXT
//! ==============
//! The committed search query lives in `?query=`; an effect keyed on that
//! value plus a reload counter fetches the collection through `ListFetch`.
//! Mutations bump the counter once the server has acknowledged them.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::components::sighting_form::SightingFormModal;
use crate::components::sighting_row::SightingRow;
use crate::net::types::Sighting;
use crate::state::form::CREATED_DATE_LABEL;
use crate::state::sightings::{
    ListFetch, ListState, QUERY_PARAM, commit_search, normalize_query, search_href, still_current,
};

#[component]
pub fn SightingsPage() -> impl IntoView {
    let navigate = use_navigate();
    let query_map = use_query_map();
    let query = Memo::new(move |_| normalize_query(query_map.get().get(QUERY_PARAM).as_deref()));

    let draft = RwSignal::new(query.get_untracked().unwrap_or_default());
    let rows = RwSignal::new(Vec::<Sighting>::new());
    let loading = RwSignal::new(true);
    let reload = RwSignal::new(0_u32);
    let list = RwSignal::new(ListState::default());

    // Keep the search box in step with back/forward navigation.
    Effect::new(move || draft.set(query.get().unwrap_or_default()));

    let fetch = StoredValue::new(ListFetch::default());
    Effect::new(move || {
        let query = query.get();
        let reload = reload.get();
        let Some(request) = fetch.try_update_value(|f| f.begin(query.clone(), reload)).flatten() else {
            return;
        };
        loading.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = crate::net::api::list_sightings(query).await;
            if !still_current(fetch, request) {
                return;
            }
            match result {
                Ok(fetched) => rows.set(fetched),
                Err(e) => log::error!("failed to load sightings: {e}"),
            }
            loading.set(false);
        });

        #[cfg(not(feature = "hydrate"))]
        let _ = (query, request);
    });

    let on_search_key = move |ev: leptos::ev::KeyboardEvent| {
        if let Some(committed) = commit_search(&ev.key(), &draft.get_untracked()) {
            navigate(&search_href(&committed), NavigateOptions::default());
        }
    };

    let on_confirm_delete = Callback::new(move |()| {
        let mut target = None;
        list.update(|s| target = s.confirm_delete());
        let Some(id) = target else {
            return;
        };

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::delete_sighting(id).await {
                Ok(()) => reload.update(|n| *n += 1),
                Err(e) => log::error!("failed to delete sighting {id}: {e}"),
            }
        });

        #[cfg(not(feature = "hydrate"))]
        let _ = id;
    });

    let on_close = Callback::new(move |()| list.update(ListState::close_form));
    let on_saved = Callback::new(move |()| {
        list.update(ListState::close_form);
        reload.update(|n| *n += 1);
    });

    view! {
        <div class="sightings-page">
            <div class="sightings-page__header">
                <h1>"Airline Sightings"</h1>
                <input
                    class="sightings-page__search"
                    type="search"
                    placeholder="Search sightings and press Enter"
                    prop:value=move || draft.get()
                    on:input=move |ev| draft.set(event_target_value(&ev))
                    on:keydown=on_search_key
                />
                <button class="btn btn--primary" on:click=move |_| list.update(ListState::open_create)>
                    "Add Sighting"
                </button>
            </div>

            <table class="sightings-table">
                <thead>
                    <tr>
                        <th>"Name"</th>
                        <th>"Short Name"</th>
                        <th>"Airline Code"</th>
                        <th>"Location"</th>
                        <th>{CREATED_DATE_LABEL}</th>
                        <th>"Actions"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        rows.get()
                            .into_iter()
                            .map(|sighting| {
                                view! {
                                    <SightingRow sighting=sighting list=list on_confirm_delete=on_confirm_delete/>
                                }
                            })
                            .collect_view()
                    }}
                </tbody>
            </table>

            <Show when=move || loading.get() && rows.with(Vec::is_empty)>
                <p class="sightings-page__status">"Loading sightings..."</p>
            </Show>
            <Show when=move || !loading.get() && rows.with(Vec::is_empty)>
                <p class="sightings-page__status">"No sightings found."</p>
            </Show>

            <Show when=move || list.with(|s| s.show_form)>
                <SightingFormModal editing=list.get_untracked().editing on_close=on_close on_saved=on_saved/>
            </Show>
        </div>
    }
}
