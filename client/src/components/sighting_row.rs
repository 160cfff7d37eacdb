//! Table row for one sighting with edit, delete, and details actions.

use leptos::prelude::*;

use crate::net::types::Sighting;
use crate::paths;
use crate::state::form::display_local;
use crate::state::sightings::ListState;

/// A sighting row. Delete swaps the action cell for an inline confirmation.
#[component]
pub fn SightingRow(sighting: Sighting, list: RwSignal<ListState>, on_confirm_delete: Callback<()>) -> impl IntoView {
    let id = sighting.id;
    let details_href = paths::sighting_detail(id);
    let created = display_local(&sighting.created_date);
    let confirming = move || list.get().pending_delete == Some(id);
    let record = StoredValue::new(sighting.clone());

    view! {
        <tr class="sighting-row">
            <td>{sighting.name}</td>
            <td>{sighting.short_name}</td>
            <td>{sighting.airline_code}</td>
            <td>{sighting.location}</td>
            <td>{created}</td>
            <td class="sighting-row__actions">
                <Show
                    when=confirming
                    fallback=move || {
                        view! {
                            <button
                                class="btn btn--outline"
                                title="Delete"
                                on:click=move |_| list.update(|s| s.request_delete(id))
                            >
                                "Delete"
                            </button>
                            <button
                                class="btn btn--outline"
                                title="Edit"
                                on:click=move |_| list.update(|s| s.open_edit(record.get_value()))
                            >
                                "Edit"
                            </button>
                        }
                    }
                >
                    <span class="sighting-row__confirm">"Delete this sighting?"</span>
                    <button class="btn btn--danger" on:click=move |_| on_confirm_delete.run(())>
                        "Yes"
                    </button>
                    <button class="btn" on:click=move |_| list.update(ListState::cancel_delete)>
                        "No"
                    </button>
                </Show>
                <a class="btn btn--outline-primary" href=details_href>
                    "Details"
                </a>
            </td>
        </tr>
    }
}
