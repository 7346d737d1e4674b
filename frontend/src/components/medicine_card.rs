use shared::{Medicine, MedicineField};
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct MedicineCardProps {
    pub index: usize,
    pub medicine: Medicine,
    /// Hidden while this is the only medicine
    pub can_remove: bool,
    pub on_change: Callback<(usize, MedicineField, String)>,
    pub on_remove: Callback<usize>,
}

#[function_component(MedicineCard)]
pub fn medicine_card(props: &MedicineCardProps) -> Html {
    let input_for = |field: MedicineField, placeholder: &'static str| {
        let index = props.index;
        let on_change = props.on_change.clone();
        html! {
            <input
                type="text"
                placeholder={placeholder}
                value={props.medicine.get(field).to_string()}
                oninput={Callback::from(move |e: InputEvent| {
                    let input: HtmlInputElement = e.target_unchecked_into();
                    on_change.emit((index, field, input.value()));
                })}
            />
        }
    };

    let on_remove = {
        let index = props.index;
        let on_remove = props.on_remove.clone();
        Callback::from(move |_: MouseEvent| on_remove.emit(index))
    };

    html! {
        <div class="entry-card">
            <div class="entry-card-header">
                <span class="entry-label">{format!("Medicine {}", props.index + 1)}</span>
                {if props.can_remove {
                    html! {
                        <button type="button" class="btn-link" onclick={on_remove}>
                            {"Remove"}
                        </button>
                    }
                } else { html! {} }}
            </div>
            <div class="entry-fields">
                {input_for(MedicineField::Name, "Medicine Name")}
                {input_for(MedicineField::Dosage, "Dosage")}
                {input_for(MedicineField::Time, "Time (ex: 8:00 AM, 2:30 PM)")}
            </div>
        </div>
    }
}
