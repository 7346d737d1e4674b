use shared::{Caregiver, CaregiverField};
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct CaregiverCardProps {
    pub index: usize,
    pub caregiver: Caregiver,
    pub on_change: Callback<(usize, CaregiverField, String)>,
    pub on_remove: Callback<usize>,
}

#[function_component(CaregiverCard)]
pub fn caregiver_card(props: &CaregiverCardProps) -> Html {
    let input_for = |field: CaregiverField, placeholder: &'static str| {
        let index = props.index;
        let on_change = props.on_change.clone();
        html! {
            <input
                type="text"
                placeholder={placeholder}
                value={props.caregiver.get(field).to_string()}
                oninput={Callback::from(move |e: InputEvent| {
                    let input: HtmlInputElement = e.target_unchecked_into();
                    on_change.emit((index, field, input.value()));
                })}
            />
        }
    };

    // Unlike medicines, every caregiver may be removed
    let on_remove = {
        let index = props.index;
        let on_remove = props.on_remove.clone();
        Callback::from(move |_: MouseEvent| on_remove.emit(index))
    };

    html! {
        <div class="entry-card">
            <div class="entry-card-header">
                <span class="entry-label">{format!("Caregiver {}", props.index + 1)}</span>
                <button type="button" class="btn-link" onclick={on_remove}>
                    {"Remove"}
                </button>
            </div>
            <div class="entry-fields">
                {input_for(CaregiverField::Name, "Caregiver Name")}
                {input_for(CaregiverField::Phone, "Caregiver Phone Number")}
            </div>
        </div>
    }
}
