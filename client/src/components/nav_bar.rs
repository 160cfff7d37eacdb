//! Top navigation bar with auth links and logout.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::paths;
use crate::state::auth::AuthState;
use crate::state::session;

/// Navigation bar shown above every route.
#[component]
pub fn NavBar() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    let on_logout = Callback::new(move |()| {
        session::clear_token();
        auth.update(AuthState::sign_out);
        navigate(paths::LOGIN, NavigateOptions::default());
    });

    view! {
        <nav class="nav-bar">
            <a class="nav-bar__brand" href=paths::SIGHTINGS>
                "Airline Sightings"
            </a>
            <div class="nav-bar__links">
                <Show
                    when=move || auth.get().is_authenticated()
                    fallback=|| {
                        view! {
                            <a class="nav-bar__link" href=paths::LOGIN>
                                "Login"
                            </a>
                            <a class="nav-bar__link" href=paths::REGISTER>
                                "Register"
                            </a>
                        }
                    }
                >
                    <a class="nav-bar__link" href=paths::SIGHTINGS>
                        "Sightings"
                    </a>
                    <button class="btn nav-bar__logout" on:click=move |_| on_logout.run(())>
                        "Logout"
                    </button>
                </Show>
            </div>
        </nav>
    }
}
