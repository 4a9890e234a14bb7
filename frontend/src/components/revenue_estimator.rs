use web_sys::{HtmlElement, HtmlInputElement, KeyboardEvent};
use wasm_bindgen::JsCast;
use yew::prelude::*;

use crate::a11y::keyboard::{handle_arrow_keys, Orientation};
use crate::components::motion::{MotionButton, MotionCard};
use crate::estimator::{
    estimate, format_eur, RevenueEstimatorInput, StationType, HOURS_RANGE, HOURS_STEP,
    SESSIONS_RANGE, STATIONS_RANGE,
};

const STATION_TYPES: [StationType; 2] = [StationType::Standard, StationType::Supercharger];

fn parse_number(e: &InputEvent) -> f64 {
    let input: HtmlInputElement = e.target_unchecked_into();
    input.value().parse::<f64>().unwrap_or(0.0)
}

#[derive(Properties, PartialEq)]
struct SliderFieldProps {
    label: AttrValue,
    id: AttrValue,
    min: f64,
    max: f64,
    step: f64,
    value: f64,
    on_change: Callback<f64>,
}

/// Range slider paired with a number box, both driving the same value.
#[function_component(SliderField)]
fn slider_field(props: &SliderFieldProps) -> Html {
    let on_input = {
        let on_change = props.on_change.clone();
        Callback::from(move |e: InputEvent| on_change.emit(parse_number(&e)))
    };

    html! {
        <div class="estimator-field">
            <label for={props.id.clone()}>{&props.label}</label>
            <div class="estimator-inputs">
                <input
                    type="range"
                    min={props.min.to_string()}
                    max={props.max.to_string()}
                    step={props.step.to_string()}
                    value={props.value.to_string()}
                    oninput={on_input.clone()}
                    aria-label={props.label.clone()}
                />
                <input
                    id={props.id.clone()}
                    type="number"
                    class="estimator-number"
                    min={props.min.to_string()}
                    max={props.max.to_string()}
                    step={props.step.to_string()}
                    value={props.value.to_string()}
                    oninput={on_input}
                />
            </div>
        </div>
    }
}

#[function_component(RevenueEstimator)]
pub fn revenue_estimator() -> Html {
    let input = use_state(RevenueEstimatorInput::default);
    let result = use_memo(|input| estimate(input), *input);
    let type_group = use_node_ref();

    let update = |apply: fn(&mut RevenueEstimatorInput, f64)| {
        let input = input.clone();
        Callback::from(move |value: f64| {
            let mut next = *input;
            apply(&mut next, value);
            input.set(next.clamped());
        })
    };

    let select_type = |station_type: StationType| {
        let input = input.clone();
        Callback::from(move |_: MouseEvent| {
            input.set(RevenueEstimatorInput {
                station_type,
                ..*input
            });
        })
    };

    // Left/Right moves between the two station types like a radio group.
    let on_type_keydown = {
        let input = input.clone();
        let type_group = type_group.clone();
        Callback::from(move |e: KeyboardEvent| {
            let current = STATION_TYPES
                .iter()
                .position(|t| *t == input.station_type)
                .unwrap_or(0);
            let next = handle_arrow_keys(&e, STATION_TYPES.len(), current, Orientation::Horizontal);
            if next == current {
                return;
            }
            input.set(RevenueEstimatorInput {
                station_type: STATION_TYPES[next],
                ..*input
            });
            if let Some(group) = type_group.cast::<HtmlElement>() {
                if let Ok(Some(button)) = group.query_selector(&format!("button:nth-of-type({})", next + 1)) {
                    if let Ok(button) = button.dyn_into::<HtmlElement>() {
                        let _ = button.focus();
                    }
                }
            }
        })
    };

    html! {
        <div class="estimator-grid">
            <MotionCard class="estimator-params" hoverable={false}>
                <div class="card-header">
                    <h3>{"Paramètres"}</h3>
                    <p class="card-description">{"Modifiez les valeurs pour affiner l'estimation *"}</p>
                </div>
                <div class="card-content">
                    <div class="estimator-field">
                        <span class="field-label" id="station-type-label">{"Type de borne"}</span>
                        <div
                            class="station-type-group"
                            role="group"
                            aria-labelledby="station-type-label"
                            ref={type_group}
                            onkeydown={on_type_keydown}
                        >
                            { for STATION_TYPES.iter().map(|t| {
                                let selected = input.station_type == *t;
                                html! {
                                    <MotionButton
                                        class={classes!(if selected { "btn-default" } else { "btn-outline" })}
                                        aria_pressed={Some(selected)}
                                        onclick={select_type(*t)}
                                    >
                                        {t.label()}
                                    </MotionButton>
                                }
                            }) }
                        </div>
                    </div>

                    <SliderField
                        label="Nombre de bornes"
                        id="estimator-stations"
                        min={f64::from(STATIONS_RANGE.0)}
                        max={f64::from(STATIONS_RANGE.1)}
                        step={1.0}
                        value={f64::from(input.station_count)}
                        on_change={update(|i, v| i.station_count = v.max(0.0) as u32)}
                    />
                    <SliderField
                        label="Sessions par jour / borne"
                        id="estimator-sessions"
                        min={f64::from(SESSIONS_RANGE.0)}
                        max={f64::from(SESSIONS_RANGE.1)}
                        step={1.0}
                        value={f64::from(input.sessions_per_day_per_station)}
                        on_change={update(|i, v| i.sessions_per_day_per_station = v.max(0.0) as u32)}
                    />
                    <SliderField
                        label="Durée moyenne d'une session (heures)"
                        id="estimator-hours"
                        min={HOURS_RANGE.0}
                        max={HOURS_RANGE.1}
                        step={HOURS_STEP}
                        value={input.hours_per_session}
                        on_change={update(|i, v| i.hours_per_session = v)}
                    />

                    <p class="estimator-note">
                        <i>
                            {"* ReVOLT prélève "}<span class="font-medium">{"1€ + 12%"}</span>{" par recharge en frais de service."}
                        </i>
                    </p>
                </div>
            </MotionCard>

            <MotionCard class="estimator-results" hoverable={false}>
                <div class="card-header">
                    <h3>{"Résultats"}</h3>
                    <p class="card-description">{"Mise à jour en temps réel selon vos paramètres."}</p>
                </div>
                <dl class="card-content results-list" aria-live="polite">
                    <div class="result-row">
                        <dt>{"Prix final estimé / session"}</dt>
                        <dd>{format_eur(result.per_session_final_price, 2)}</dd>
                    </div>
                    <div class="result-row">
                        <dt>{"Frais service ReVOLT / session"}</dt>
                        <dd>{format_eur(result.per_session_service_fee, 2)}</dd>
                    </div>
                    <div class="result-row">
                        <dt>{"Revenu mensuel brut"}</dt>
                        <dd class="result-gross">{format_eur(result.gross_monthly_revenue, 0)}</dd>
                    </div>
                    <div class="result-row">
                        <dt>{"Revenu mensuel net"}</dt>
                        <dd class="result-net">{format_eur(result.net_monthly_revenue, 0)}</dd>
                    </div>
                    <div class="result-row">
                        <dt>{"Revenu annuel net"}</dt>
                        <dd class="result-gross">{format_eur(result.net_yearly_revenue, 0)}</dd>
                    </div>
                </dl>
            </MotionCard>
        </div>
    }
}
