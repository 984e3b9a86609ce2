use crate::animation::spec::{AnimationSpec, CssScalar, Millis};

const DEFAULT_DURATION: Millis = Millis(1000.0);
const DEFAULT_TIMING: &str = "ease";
const DEFAULT_DIRECTION: &str = "normal";
const DEFAULT_FILL_MODE: &str = "none";
const DEFAULT_PLAY_STATE: &str = "running";
const DEFAULT_TIMELINE: &str = "auto";
const DEFAULT_RANGE: &str = "normal";

/// `animation-*` longhands for a list of animations, each a comma-joined list aligned by index.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AnimationLonghands {
    /// `animation-name`.
    pub name: String,
    /// `animation-duration`.
    pub duration: String,
    /// `animation-timing-function`.
    pub timing_function: String,
    /// `animation-delay`.
    pub delay: String,
    /// `animation-iteration-count`.
    pub iteration_count: String,
    /// `animation-direction`.
    pub direction: String,
    /// `animation-fill-mode`.
    pub fill_mode: String,
    /// `animation-play-state`.
    pub play_state: String,
    /// `animation-timeline`, only when some item sets one.
    pub timeline: Option<String>,
    /// `animation-range`, only when some item sets one.
    pub range: Option<String>,
}

impl AnimationLonghands {
    /// `(camelCase property, value)` pairs in emission order.
    pub fn properties(&self) -> Vec<(&'static str, String)> {
        let mut out = vec![
            ("animationName", self.name.clone()),
            ("animationDuration", self.duration.clone()),
            ("animationTimingFunction", self.timing_function.clone()),
            ("animationDelay", self.delay.clone()),
            ("animationIterationCount", self.iteration_count.clone()),
            ("animationDirection", self.direction.clone()),
            ("animationFillMode", self.fill_mode.clone()),
            ("animationPlayState", self.play_state.clone()),
        ];
        if let Some(t) = &self.timeline {
            out.push(("animationTimeline", t.clone()));
        }
        if let Some(r) = &self.range {
            out.push(("animationRange", r.clone()));
        }
        out
    }
}

/// Expand animations and their generated names into longhands.
///
/// With `accumulate`, item `i` starts after every earlier item has finished:
/// its delay is its own delay plus the sum of `duration + delay` over all earlier items.
pub fn sequence(specs: &[AnimationSpec], names: &[String], accumulate: bool) -> AnimationLonghands {
    let n = specs.len().min(names.len());
    let specs = &specs[..n];

    let mut durations = Vec::with_capacity(n);
    let mut delays = Vec::with_capacity(n);
    let mut offset = Millis::ZERO;
    for spec in specs {
        let duration = spec.duration.unwrap_or(DEFAULT_DURATION);
        let own_delay = spec.delay.unwrap_or(Millis::ZERO);
        let delay = if accumulate { own_delay + offset } else { own_delay };
        durations.push(duration.to_css());
        delays.push(delay.to_css());
        offset = offset + duration + own_delay;
    }

    let text = |f: fn(&AnimationSpec) -> Option<&String>, default: &str| -> String {
        specs
            .iter()
            .map(|s| f(s).map(|v| v.trim().to_string()).unwrap_or_else(|| default.to_string()))
            .collect::<Vec<_>>()
            .join(", ")
    };
    let optional = |f: fn(&AnimationSpec) -> Option<&String>, default: &str| -> Option<String> {
        specs.iter().any(|s| f(s).is_some()).then(|| text(f, default))
    };

    AnimationLonghands {
        name: names[..n].join(", "),
        duration: durations.join(", "),
        timing_function: text(|s| s.timing_function.as_ref(), DEFAULT_TIMING),
        delay: delays.join(", "),
        iteration_count: specs
            .iter()
            .map(|s| {
                s.iteration_count
                    .as_ref()
                    .map(CssScalar::to_string)
                    .unwrap_or_else(|| "1".to_string())
            })
            .collect::<Vec<_>>()
            .join(", "),
        direction: text(|s| s.direction.as_ref(), DEFAULT_DIRECTION),
        fill_mode: text(|s| s.fill_mode.as_ref(), DEFAULT_FILL_MODE),
        play_state: text(|s| s.play_state.as_ref(), DEFAULT_PLAY_STATE),
        timeline: optional(|s| s.timeline.as_ref(), DEFAULT_TIMELINE),
        range: optional(|s| s.range.as_ref(), DEFAULT_RANGE),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/sequence.rs"]
mod tests;
