//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::guards::{ProtectedRoute, RedirectIfAuthenticated};
use crate::components::nav_bar::NavBar;
use crate::pages::{
    login::LoginPage, register::RegisterPage, sighting_detail::SightingDetailPage, sightings::SightingsPage,
};
use crate::state::{auth::AuthState, session};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the auth context and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::restoring());
    provide_context(auth);

    // Browser only: read the persisted token once hydration has finished.
    Effect::new(move || auth.set(AuthState::restored(session::load_token())));

    view! {
        <Title text="Airline Sightings"/>

        <Router>
            <NavBar/>
            <main class="app-main">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route
                        path=StaticSegment("login")
                        view=|| view! { <RedirectIfAuthenticated><LoginPage/></RedirectIfAuthenticated> }
                    />
                    <Route
                        path=StaticSegment("register")
                        view=|| view! { <RedirectIfAuthenticated><RegisterPage/></RedirectIfAuthenticated> }
                    />
                    <Route
                        path=StaticSegment("AirlineSightings")
                        view=|| view! { <ProtectedRoute><SightingsPage/></ProtectedRoute> }
                    />
                    <Route
                        path=(StaticSegment("AirlineSightings"), ParamSegment("id"))
                        view=|| view! { <ProtectedRoute><SightingDetailPage/></ProtectedRoute> }
                    />
                </Routes>
            </main>
        </Router>
    }
}
