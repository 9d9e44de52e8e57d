//! Range-bounded parameter controls.
//!
//! A control is the model behind one on-screen slider: a named parameter with
//! a fixed inclusive range, the value it started at, and its current value.

/// Number of keyboard steps across a control's full range.
pub const STEPS_PER_RANGE: u32 = 100;

/// Static description of one distribution parameter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParamSpec {
    /// Stable identifier used in configuration files
    pub name: &'static str,
    /// Label shown next to the slider
    pub label: &'static str,
    pub min: f64,
    pub max: f64,
    pub default: f64,
}

impl ParamSpec {
    pub const fn new(
        name: &'static str,
        label: &'static str,
        min: f64,
        max: f64,
        default: f64,
    ) -> Self {
        Self {
            name,
            label,
            min,
            max,
            default,
        }
    }

    /// Inclusive range check.
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    /// Width of one keyboard step.
    pub fn step(&self) -> f64 {
        (self.max - self.min) / STEPS_PER_RANGE as f64
    }

    /// Value at tick `ticks` of the step lattice, `0..=STEPS_PER_RANGE`.
    ///
    /// Computed from the range rather than by repeated addition, so the
    /// midpoint of a symmetric range lands on exactly `0.0`.
    fn value_at(&self, ticks: i64) -> f64 {
        self.min + (self.max - self.min) * ticks as f64 / STEPS_PER_RANGE as f64
    }

    fn nearest_tick(&self, value: f64) -> i64 {
        ((value - self.min) / (self.max - self.min) * STEPS_PER_RANGE as f64).round() as i64
    }
}

/// A slider's state: its spec, the value it was created with, and where it is now.
#[derive(Debug, Clone, PartialEq)]
pub struct ParameterControl {
    spec: ParamSpec,
    initial: f64,
    value: f64,
}

impl ParameterControl {
    /// Control starting at the spec's default.
    pub fn new(spec: ParamSpec) -> Self {
        Self::with_initial(spec, spec.default)
    }

    /// Control starting at `initial`, clamped into range.
    pub fn with_initial(spec: ParamSpec, initial: f64) -> Self {
        let initial = if initial.is_nan() {
            spec.default
        } else {
            initial.clamp(spec.min, spec.max)
        };
        Self {
            spec,
            initial,
            value: initial,
        }
    }

    pub fn spec(&self) -> &ParamSpec {
        &self.spec
    }

    pub fn name(&self) -> &'static str {
        self.spec.name
    }

    pub fn label(&self) -> &'static str {
        self.spec.label
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn initial(&self) -> f64 {
        self.initial
    }

    /// Move the slider to `value`, clamped into its range.
    ///
    /// Returns `true` if the value changed. `NaN` is ignored.
    pub fn set(&mut self, value: f64) -> bool {
        if value.is_nan() {
            return false;
        }
        let clamped = value.clamp(self.spec.min, self.spec.max);
        if clamped == self.value {
            return false;
        }
        self.value = clamped;
        true
    }

    /// Move by `steps` keyboard steps, snapping onto the step lattice.
    pub fn nudge(&mut self, steps: i32) -> bool {
        let tick = (self.spec.nearest_tick(self.value) + steps as i64)
            .clamp(0, STEPS_PER_RANGE as i64);
        self.set(self.spec.value_at(tick))
    }

    /// Return to the initial value.
    pub fn reset(&mut self) -> bool {
        self.set(self.initial)
    }

    /// Position of the slider thumb in `[0, 1]`.
    pub fn fraction(&self) -> f64 {
        let width = self.spec.max - self.spec.min;
        if width <= 0.0 {
            return 0.0;
        }
        ((self.value - self.spec.min) / width).clamp(0.0, 1.0)
    }
}

/// Snapshot of every parameter of one distribution, in declaration order.
#[derive(Debug, Clone, PartialEq)]
pub struct ParameterSet {
    names: Vec<&'static str>,
    values: Vec<f64>,
}

impl ParameterSet {
    pub fn from_controls(controls: &[ParameterControl]) -> Self {
        Self {
            names: controls.iter().map(|c| c.name()).collect(),
            values: controls.iter().map(|c| c.value()).collect(),
        }
    }

    pub fn get(&self, name: &str) -> Option<f64> {
        self.names
            .iter()
            .position(|n| *n == name)
            .map(|i| self.values[i])
    }

    /// Replace the value of `name`. Returns `false` if there is no such parameter.
    pub fn set(&mut self, name: &str, value: f64) -> bool {
        match self.names.iter().position(|n| *n == name) {
            Some(i) => {
                self.values[i] = value;
                true
            }
            None => false,
        }
    }

    /// Builder form of [`ParameterSet::set`]; unknown names are ignored.
    pub fn with(mut self, name: &str, value: f64) -> Self {
        self.set(name, value);
        self
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, f64)> + '_ {
        self.names.iter().copied().zip(self.values.iter().copied())
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
