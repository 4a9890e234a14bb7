use yew::prelude::*;
use yew_hooks::{use_interval, use_mount};

use crate::components::motion::use_motion_config;
use crate::estimator::group_thousands;
use crate::motion::EXPO_OUT;

const FRAME_MS: u32 = 16;

/// Value shown `t` (0..=1) of the way through the count-up.
pub fn value_at(target: u64, t: f64) -> u64 {
    if t >= 1.0 {
        return target;
    }
    (target as f64 * EXPO_OUT.apply(t)).floor() as u64
}

/// Interval period for `use_interval`; 0 stops the timer.
fn tick_ms(running: bool) -> u32 {
    if running {
        FRAME_MS
    } else {
        0
    }
}

#[derive(Properties, PartialEq)]
pub struct AnimatedNumberProps {
    pub to: u64,
    #[prop_or(1_800)]
    pub duration_ms: u32,
    #[prop_or_default]
    pub prefix: AttrValue,
    #[prop_or_default]
    pub suffix: AttrValue,
    #[prop_or_default]
    pub class: Classes,
}

/// Counts from 0 up to `to` once after mounting.
#[function_component(AnimatedNumber)]
pub fn animated_number(props: &AnimatedNumberProps) -> Html {
    let config = use_motion_config();
    let value = use_state(|| 0u64);
    let running = use_state(|| false);
    let elapsed = use_mut_ref(|| 0u32);

    {
        let value = value.clone();
        let running = running.clone();
        let target = props.to;
        let instant = config.reduced || props.duration_ms == 0;
        use_mount(move || {
            if instant {
                value.set(target);
            } else {
                running.set(true);
            }
        });
    }

    {
        let tick = tick_ms(*running);
        let value = value.clone();
        let running = running.clone();
        let elapsed = elapsed.clone();
        let target = props.to;
        let duration = props.duration_ms.max(1);
        use_interval(
            move || {
                let ms = {
                    let mut elapsed = elapsed.borrow_mut();
                    *elapsed += FRAME_MS;
                    *elapsed
                };
                let t = f64::from(ms) / f64::from(duration);
                value.set(value_at(target, t));
                if t >= 1.0 {
                    running.set(false);
                }
            },
            tick,
        );
    }

    html! {
        <span class={props.class.clone()}>
            { format!("{}{}{}", props.prefix, group_thousands(*value), props.suffix) }
        </span>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_from_zero_to_target() {
        assert_eq!(value_at(10_000, 0.0), 0);
        assert_eq!(value_at(10_000, 1.0), 10_000);
        assert_eq!(value_at(95, 2.0), 95);
        assert!(value_at(50_000, 0.5) > 40_000);
    }

    #[test]
    fn timer_only_ticks_while_running() {
        assert_eq!(tick_ms(true), FRAME_MS);
        assert_eq!(tick_ms(false), 0);
    }
}
