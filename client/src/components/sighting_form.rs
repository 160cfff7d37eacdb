//! Modal form shared by create and update.
//!
//! The modal is mounted fresh each time it opens, so its signals start from
//! the record being edited (or empty) and are dropped when it closes.

use chrono::Utc;
use leptos::prelude::*;

use crate::net::types::Sighting;
use crate::state::form::{FormErrors, SightingForm, plan_submit};
use crate::state::{identity, session};
#[cfg(feature = "hydrate")]
use crate::state::form::SubmitAction;

type FieldGet = fn(&SightingForm) -> String;
type FieldSet = fn(&mut SightingForm, String);
type FieldError = fn(&FormErrors) -> Option<&'static str>;

/// Create/edit dialog. `editing` selects update mode and pre-fills the fields.
#[component]
pub fn SightingFormModal(
    editing: Option<Sighting>,
    on_close: Callback<()>,
    on_saved: Callback<()>,
) -> impl IntoView {
    let is_edit = editing.is_some();
    let form = RwSignal::new(editing.as_ref().map(SightingForm::from_sighting).unwrap_or_default());
    let errors = RwSignal::new(FormErrors::default());
    let busy = RwSignal::new(false);
    let editing = StoredValue::new(editing);

    let cancel = Callback::new(move |()| {
        form.set(SightingForm::default());
        errors.set(FormErrors::default());
        on_close.run(());
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let valid = match form.get_untracked().validate(Utc::now()) {
            Ok(valid) => valid,
            Err(field_errors) => {
                errors.set(field_errors);
                return;
            }
        };
        errors.set(FormErrors::default());

        let user_id = match identity::current_user_id(session::load_token().as_deref()) {
            Ok(user_id) => user_id,
            Err(e) => {
                log::error!("cannot derive user id from session token: {e}");
                return;
            }
        };
        let action = editing.with_value(|original| plan_submit(valid, original.as_ref(), user_id));
        busy.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = match &action {
                SubmitAction::Create(payload) => crate::net::api::create_sighting(payload).await,
                SubmitAction::Update { id, payload } => crate::net::api::update_sighting(*id, payload).await,
            };
            busy.set(false);
            match result {
                Ok(()) => {
                    form.set(SightingForm::default());
                    on_saved.run(());
                }
                Err(e) => log::error!("failed to save airline sighting ({} {}): {e}", action.method(), action.path()),
            }
        });

        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (action, on_saved);
            busy.set(false);
        }
    };

    let title = if is_edit { "Edit Sighting" } else { "Add Sighting" };
    let submit_label = if is_edit { "Update Sighting" } else { "Add Sighting" };

    view! {
        <div class="dialog-backdrop" on:click=move |_| cancel.run(())>
            <div
                class="dialog dialog--sighting"
                on:click=move |ev| ev.stop_propagation()
                on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                    if ev.key() == "Escape" {
                        ev.prevent_default();
                        cancel.run(());
                    }
                }
            >
                <h2>{title}</h2>
                <form class="dialog__form" on:submit=on_submit>
                    {text_field("Name", form, errors, |f| f.name.clone(), |f, v| f.name = v, |e| e.name)}
                    {text_field(
                        "Short Name",
                        form,
                        errors,
                        |f| f.short_name.clone(),
                        |f, v| f.short_name = v,
                        |e| e.short_name,
                    )}
                    {text_field(
                        "Airline Code",
                        form,
                        errors,
                        |f| f.airline_code.clone(),
                        |f, v| f.airline_code = v,
                        |e| e.airline_code,
                    )}
                    {text_field("Location", form, errors, |f| f.location.clone(), |f, v| f.location = v, |e| e.location)}
                    <label class="dialog__label">
                        "Created Date"
                        <input
                            class=move || input_class(errors.get().created_date)
                            type="datetime-local"
                            step="1"
                            prop:value=move || form.get().created_date
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                form.update(|f| f.created_date = value);
                            }
                        />
                        <FieldMessage errors=errors field=|e| e.created_date/>
                    </label>
                    <div class="dialog__actions">
                        <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                            {submit_label}
                        </button>
                        <button class="btn" type="button" on:click=move |_| cancel.run(())>
                            "Cancel"
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}

fn text_field(
    label: &'static str,
    form: RwSignal<SightingForm>,
    errors: RwSignal<FormErrors>,
    get: FieldGet,
    set: FieldSet,
    field: FieldError,
) -> impl IntoView {
    view! {
        <label class="dialog__label">
            {label}
            <input
                class=move || input_class(field(&errors.get()))
                type="text"
                prop:value=move || get(&form.get())
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    form.update(|f| set(f, value));
                }
            />
            <FieldMessage errors=errors field=field/>
        </label>
    }
}

fn input_class(error: Option<&'static str>) -> &'static str {
    if error.is_some() { "dialog__input dialog__input--error" } else { "dialog__input" }
}

/// Inline validation message for one field.
#[component]
fn FieldMessage(errors: RwSignal<FormErrors>, field: FieldError) -> impl IntoView {
    view! {
        <Show when=move || field(&errors.get()).is_some()>
            <span class="dialog__error">{move || field(&errors.get()).unwrap_or_default()}</span>
        </Show>
    }
}
