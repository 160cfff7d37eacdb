//! Read-only view of one sighting, addressed by `/AirlineSightings/:id`.

use leptos::prelude::*;
use leptos_router::hooks::use_params;
use leptos_router::params::Params;

use crate::net::types::Sighting;
use crate::paths;
use crate::state::form::{CREATED_DATE_LABEL, display_local};

#[derive(Params, Clone, Debug, PartialEq, Eq)]
struct SightingParams {
    id: Option<i64>,
}

#[component]
pub fn SightingDetailPage() -> impl IntoView {
    let params = use_params::<SightingParams>();
    let id = Memo::new(move |_| params.with(|p| p.as_ref().ok().and_then(|p| p.id)));
    let sighting = RwSignal::new(None::<Sighting>);

    Effect::new(move || {
        let Some(id) = id.get() else {
            log::warn!("sighting detail route without a numeric id");
            return;
        };
        sighting.set(None);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_sighting(id).await {
                Ok(found) => sighting.set(Some(found)),
                Err(e) => log::error!("failed to load sighting {id}: {e}"),
            }
        });

        #[cfg(not(feature = "hydrate"))]
        let _ = id;
    });

    view! {
        <div class="sighting-detail">
            <Show
                when=move || sighting.with(Option::is_some)
                fallback=|| view! { <p class="sighting-detail__loading">"Loading Sighting Details..."</p> }
            >
                {move || {
                    sighting
                        .get()
                        .map(|s| {
                            view! {
                                <div class="sighting-detail__card">
                                    <h2>{s.name}</h2>
                                    <dl>
                                        <dt>"Short Name"</dt>
                                        <dd>{s.short_name}</dd>
                                        <dt>"Airline Code"</dt>
                                        <dd>{s.airline_code}</dd>
                                        <dt>"Location"</dt>
                                        <dd>{s.location}</dd>
                                        <dt>{CREATED_DATE_LABEL}</dt>
                                        <dd>{display_local(&s.created_date)}</dd>
                                    </dl>
                                </div>
                            }
                        })
                }}
            </Show>
            <a class="btn" href=paths::SIGHTINGS>"Back to Sightings"</a>
        </div>
    }
}
