use crate::core::config::Config;
use crate::core::error::format_load_error;
use crate::services::api::HttpChartApi;
use crate::services::render::{checked_values, role_options, scenario_options, ChoiceOption};
use crate::services::session::{load_reference_data, submit, GenerateFlow};
use leptos::*;
use std::cell::RefCell;
use std::rc::Rc;

#[component]
pub fn App() -> impl IntoView {
    let config = Config::default();
    let api = match HttpChartApi::new(&config) {
        Ok(api) => Rc::new(api),
        Err(e) => {
            return view! { <p>"Invalid configuration: " {e.to_string()}</p> }.into_view();
        }
    };

    let scenarios = create_rw_signal(Vec::<ChoiceOption>::new());
    let selected_scenario = create_rw_signal(None::<String>);
    // Role list is set once; checkbox state lives in its own signal.
    let roles = create_rw_signal(Vec::<ChoiceOption>::new());
    let checked = create_rw_signal(Vec::<bool>::new());
    let output = create_rw_signal(String::new());
    let pending = create_rw_signal(false);
    let flow = Rc::new(RefCell::new(GenerateFlow::default()));

    let publish = move |flow: &GenerateFlow| output.set(flow.output().to_string());

    // Initial load
    let loader = api.clone();
    let load_flow = flow.clone();
    let default_role = config.default_role.clone();
    create_effect(move |_| {
        let api = loader.clone();
        let flow = load_flow.clone();
        let default_role = default_role.clone();
        spawn_local(async move {
            match load_reference_data(api.as_ref()).await {
                Ok(data) => {
                    let options = scenario_options(&data.scenarios);
                    selected_scenario.set(
                        options.iter().find(|o| o.selected).map(|o| o.value.clone()),
                    );
                    scenarios.set(options);

                    let options = role_options(&data.roles, &default_role);
                    checked.set(options.iter().map(|o| o.selected).collect());
                    roles.set(options);
                }
                Err(e) => {
                    log::error!("Failed to load reference data: {:#}", e);
                    flow.borrow_mut().show(format_load_error(&e));
                    publish(&flow.borrow());
                }
            }
        });
    });

    let on_generate = move |_| {
        let current: Vec<ChoiceOption> = roles.with_untracked(|roles| {
            checked.with_untracked(|checked| {
                roles
                    .iter()
                    .zip(checked.iter())
                    .map(|(o, c)| ChoiceOption { selected: *c, ..o.clone() })
                    .collect()
            })
        });

        let started = flow
            .borrow_mut()
            .begin(selected_scenario.get_untracked().as_deref(), checked_values(&current));
        publish(&flow.borrow());
        let Some((ticket, request)) = started else {
            return;
        };

        pending.set(true);
        let api = api.clone();
        let flow = flow.clone();
        spawn_local(async move {
            let text = submit(api.as_ref(), &request).await;
            let applied = flow.borrow_mut().finish(ticket, text);
            if applied {
                publish(&flow.borrow());
                pending.set(false);
            }
        });
    };

    view! {
        <div class="app-container">
            <h1>"Dependency Chart"</h1>
            <label>
                "Scenario "
                <select
                    id="scenarioSelect"
                    on:change=move |ev| selected_scenario.set(Some(event_target_value(&ev)))
                    prop:value=move || selected_scenario.get().unwrap_or_default()
                >
                    {move || {
                        scenarios
                            .get()
                            .into_iter()
                            .map(|o| view! { <option value=o.value selected=o.selected>{o.label}</option> })
                            .collect_view()
                    }}
                </select>
            </label>
            <fieldset id="rolesContainer">
                <legend>"Roles"</legend>
                <For
                    each=move || roles.get().into_iter().enumerate()
                    key=|(i, _)| *i
                    children=move |(i, o): (usize, ChoiceOption)| {
                        view! {
                            <label>
                                <input
                                    type="checkbox"
                                    value=o.value
                                    prop:checked=move || {
                                        checked.with(|c| c.get(i).copied().unwrap_or(false))
                                    }
                                    on:change=move |ev| {
                                        let value = event_target_checked(&ev);
                                        checked.update(|c| {
                                            if let Some(slot) = c.get_mut(i) {
                                                *slot = value;
                                            }
                                        });
                                    }
                                />
                                {o.label}
                            </label>
                        }
                    }
                />
            </fieldset>
            <button id="generateButton" on:click=on_generate prop:disabled=move || pending.get()>
                "Generate"
            </button>
            <textarea id="output" rows="20" readonly=true prop:value=move || output.get()></textarea>
        </div>
    }
    .into_view()
}
