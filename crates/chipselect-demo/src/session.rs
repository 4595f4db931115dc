//! Headless session driving a select through scripted steps.

use crate::catalog::Catalog;
use crate::error::{DemoError, DemoResult};
use crate::script::Step;
use chipselect_core::{MeasureStyle, Modifiers, Select, SelectConfig, SelectEvent, SelectOption};
use serde::Serialize;
use std::task::Poll;

/// State observed after a step.
#[derive(Debug, Clone, Serialize)]
pub struct StepReport {
    pub step: Step,
    pub panel: String,
    pub input: String,
    pub line_break: bool,
    pub suggestions: Vec<String>,
    pub errored: bool,
    pub selected: Vec<String>,
}

/// Everything a session did.
#[derive(Debug, Clone, Serialize)]
pub struct Transcript {
    pub steps: Vec<StepReport>,
    pub selected: Vec<SelectOption<String>>,
}

/// Half an em per character.
fn char_width(text: &str, style: &MeasureStyle) -> f64 {
    text.chars().count() as f64 * style.font_size * 0.5
}

/// A select plus the selection its owner keeps.
pub struct Session {
    select: Select<String>,
    value: Vec<SelectOption<String>>,
    container_width: f64,
}

impl Session {
    pub fn new(catalog: &Catalog, config: SelectConfig, container_width: f64) -> Self {
        let mut session = Self {
            select: Select::new(config, catalog.source()),
            value: Vec::new(),
            container_width,
        };
        session.settle(false);
        session
    }

    /// Run `steps` in order, stopping at the first one that can't be applied.
    pub fn run(mut self, steps: &[Step]) -> DemoResult<Transcript> {
        let mut reports = Vec::with_capacity(steps.len());
        for step in steps {
            self.apply(step)?;
            reports.push(self.report(step));
        }
        Ok(Transcript {
            steps: reports,
            selected: std::mem::take(&mut self.value),
        })
    }

    pub fn apply(&mut self, step: &Step) -> DemoResult<()> {
        log::debug!("Step {:?}", step);
        match step {
            Step::Focus => self.select.focus_gained(),
            Step::Blur => {
                self.select.focus_lost();
                self.commit_events();
                return Ok(());
            }
            Step::Type { text } => {
                self.select
                    .input_changed(text, &self.value, self.container_width, &char_width)
            }
            Step::Click { label, shift } => {
                let option = self
                    .select
                    .suggestions()
                    .iter()
                    .find(|o| o.label == *label)
                    .cloned()
                    .ok_or_else(|| DemoError::NotSuggested(label.clone()))?;
                let modifiers = Modifiers {
                    shift: *shift,
                    ..Modifiers::NONE
                };
                self.select.toggle(&option, modifiers, &self.value);
            }
            Step::Remove { label } => {
                let option = self
                    .value
                    .iter()
                    .find(|o| o.label == *label)
                    .cloned()
                    .ok_or_else(|| DemoError::NotSelected(label.clone()))?;
                self.select.remove_chip(&option, &self.value);
            }
            Step::Refresh => {
                self.commit_events();
                self.settle(true);
                return Ok(());
            }
            Step::Tick => {}
        }
        self.commit_events();
        self.settle(false);
        Ok(())
    }

    /// Run updates until no lookup is in flight.
    fn settle(&mut self, force_update: bool) {
        let Self { select, value, .. } = self;
        pollster::block_on(std::future::poll_fn(|cx| {
            select.update(cx, value, force_update);
            if select.in_flight() == 0 {
                Poll::Ready(())
            } else {
                Poll::Pending
            }
        }));
    }

    fn commit_events(&mut self) {
        for event in self.select.take_events() {
            match event {
                SelectEvent::Changed(next) => {
                    log::info!(
                        "Selection: [{}]",
                        next.iter()
                            .map(|o| o.label.as_str())
                            .collect::<Vec<_>>()
                            .join(", ")
                    );
                    self.value = next;
                }
                SelectEvent::Focused => log::debug!("Focused"),
                SelectEvent::Blurred => log::debug!("Blurred"),
            }
        }
    }

    fn report(&self, step: &Step) -> StepReport {
        StepReport {
            step: step.clone(),
            panel: format!("{:?}", self.select.panel_state()),
            input: self.select.input_value().to_string(),
            line_break: self.select.line_break(),
            suggestions: self
                .select
                .suggestions()
                .iter()
                .map(|o| o.label.clone())
                .collect(),
            errored: self.select.is_errored(),
            selected: self.value.iter().map(|o| o.label.clone()).collect(),
        }
    }

    pub fn select(&self) -> &Select<String> {
        &self.select
    }

    pub fn value(&self) -> &[SelectOption<String>] {
        &self.value
    }
}
