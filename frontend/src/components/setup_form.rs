use shared::UserField;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use super::alert_banner::AlertBanner;
use super::caregiver_card::CaregiverCard;
use super::medicine_card::MedicineCard;
use crate::hooks::use_setup_form::UseSetupFormActions;
use crate::state::SetupForm;

#[derive(Properties, PartialEq)]
pub struct SetupFormViewProps {
    pub state: SetupForm,
    pub actions: UseSetupFormActions,
}

fn submit_label(is_submitting: bool) -> &'static str {
    if is_submitting {
        "Working.. please wait."
    } else {
        "Save"
    }
}

#[function_component(SetupFormView)]
pub fn setup_form_view(props: &SetupFormViewProps) -> Html {
    let state = &props.state;
    let actions = &props.actions;

    let user_input = |field: UserField, placeholder: &'static str, value: &str| {
        let on_user_change = actions.on_user_change.clone();
        html! {
            <input
                type="text"
                placeholder={placeholder}
                value={value.to_string()}
                oninput={Callback::from(move |e: InputEvent| {
                    let input: HtmlInputElement = e.target_unchecked_into();
                    on_user_change.emit((field, input.value()));
                })}
            />
        }
    };

    let onsubmit = {
        let submit = actions.submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            submit.emit(());
        })
    };

    let on_add_medicine = {
        let add_medicine = actions.add_medicine.clone();
        Callback::from(move |_: MouseEvent| add_medicine.emit(()))
    };

    let on_add_caregiver = {
        let add_caregiver = actions.add_caregiver.clone();
        Callback::from(move |_: MouseEvent| add_caregiver.emit(()))
    };

    html! {
        <div class="setup-page">
            <div class="setup-card">
                <h1>{"Medicine Reminder Setup"}</h1>
                <p class="subtitle">{"Set up your medicine reminders and add optional caregivers"}</p>

                <AlertBanner alert={state.alert().cloned()} />

                <form class="setup-form" {onsubmit}>
                    <section>
                        <h2>{"Your Information"}</h2>
                        <div class="entry-fields">
                            {user_input(UserField::Name, "Your Name", &state.user().name)}
                            {user_input(UserField::Phone, "Phone Number", &state.user().phone)}
                        </div>
                    </section>

                    <section>
                        <h2>{"Medicines"}</h2>
                        {for state.medicines().iter().enumerate().map(|(index, medicine)| html! {
                            <MedicineCard
                                key={index}
                                index={index}
                                medicine={medicine.clone()}
                                can_remove={state.can_remove_medicine()}
                                on_change={actions.on_medicine_change.clone()}
                                on_remove={actions.remove_medicine.clone()}
                            />
                        })}
                        <button type="button" class="btn btn-secondary" onclick={on_add_medicine}>
                            {"Add More Medicine"}
                        </button>
                    </section>

                    <section>
                        <h2>{"Caregivers (Optional)"}</h2>
                        <p class="hint">{"Your caregivers will be notified if you miss several reminders"}</p>
                        {for state.caregivers().iter().enumerate().map(|(index, caregiver)| html! {
                            <CaregiverCard
                                key={index}
                                index={index}
                                caregiver={caregiver.clone()}
                                on_change={actions.on_caregiver_change.clone()}
                                on_remove={actions.remove_caregiver.clone()}
                            />
                        })}
                        <button type="button" class="btn btn-secondary" onclick={on_add_caregiver}>
                            {"Add Caregiver"}
                        </button>
                    </section>

                    <button type="submit" class="btn btn-primary" disabled={state.is_submitting()}>
                        {submit_label(state.is_submitting())}
                    </button>
                </form>
            </div>
        </div>
    }
}
