//! The chip multi-select widget.

use std::hash::Hash;
use std::task::Context;

use chipselect_core::{Modifiers, PanelContent, PanelPlacement, Select, SelectEvent, SelectOption};
use egui::{FontId, Id, Order, Response, TextEdit, Ui};

use crate::chip::chip;
use crate::layout::{field_label, hint_label};
use crate::measure::{EguiMeasurer, repaint_waker};
use crate::menu::{input_frame, panel_frame, panel_message, suggestion_row};
use crate::sizing;

/// Response from showing a [`SelectWidget`].
pub struct SelectResponse<T> {
    /// Response of the field (chips and input)
    pub response: Response,
    /// New selection, if the user changed it this frame
    pub changed: Option<Vec<SelectOption<T>>>,
    /// Whether the input gained focus this frame
    pub focused: bool,
    /// Whether the input lost focus this frame
    pub blurred: bool,
}

/// Draws a [`Select`] as a field of chips followed by a text input, with
/// the suggestion panel below it.
///
/// The selection is passed in every frame and changes come back in
/// [`SelectResponse::changed`]:
///
/// ```ignore
/// let response = SelectWidget::new(&mut select, &subjects).label("Subjects").show(ui);
/// if let Some(next) = response.changed {
///     subjects = next;
/// }
/// ```
pub struct SelectWidget<'a, T> {
    select: &'a mut Select<T>,
    value: &'a [SelectOption<T>],
    id_salt: Id,
    label: Option<&'a str>,
    force_update_suggestions: bool,
}

impl<'a, T: Clone + PartialEq + 'static> SelectWidget<'a, T> {
    pub fn new(select: &'a mut Select<T>, value: &'a [SelectOption<T>]) -> Self {
        Self {
            select,
            value,
            id_salt: Id::new("chipselect"),
            label: None,
            force_update_suggestions: false,
        }
    }

    /// Distinguish several selects in the same `Ui`.
    pub fn id_salt(mut self, id_salt: impl Hash) -> Self {
        self.id_salt = Id::new(id_salt);
        self
    }

    /// Label drawn above the field.
    pub fn label(mut self, label: &'a str) -> Self {
        self.label = Some(label);
        self
    }

    /// Re-run the last query when this turns on.
    pub fn force_update_suggestions(mut self, force: bool) -> Self {
        self.force_update_suggestions = force;
        self
    }

    pub fn show(self, ui: &mut Ui) -> SelectResponse<T> {
        let Self {
            select,
            value,
            id_salt,
            label,
            force_update_suggestions,
        } = self;
        let id = ui.make_persistent_id(id_salt);
        let text_id = id.with("input");
        let focus_id = id.with("had_focus");
        let panel_id = id.with("panel_rect");

        let waker = repaint_waker(ui.ctx());
        let mut cx = Context::from_waker(&waker);
        select.update(&mut cx, value, force_update_suggestions);

        if let Some(label) = label {
            field_label(ui, label);
        }

        let style = select.measure_style();
        let font_id = if style.monospace {
            FontId::monospace(style.font_size as f32)
        } else {
            FontId::proportional(style.font_size as f32)
        };
        let single_line = select.config().single_line;
        let had_focus = ui.data(|d| d.get_temp::<bool>(focus_id)).unwrap_or(false);

        let field = input_frame(had_focus).show(ui, |ui| {
            ui.horizontal_wrapped(|ui| {
                let mut removed = None;
                for (index, option) in value.iter().enumerate() {
                    if chip(ui, id.with(("chip", index)), &option.label).removed {
                        removed = Some(option.clone());
                    }
                }
                if select.line_break() {
                    ui.end_row();
                }

                let container_width = ui.available_width();
                let width = match select.input_width() {
                    Some(width) if single_line => width as f32,
                    _ => container_width.max(sizing::MIN_INPUT_WIDTH),
                };
                let mut buffer = select.input_value().to_owned();
                let text = ui.add(
                    TextEdit::singleline(&mut buffer)
                        .id(text_id)
                        .frame(false)
                        .font(font_id.clone())
                        .desired_width(width),
                );
                (removed, text, buffer, container_width)
            })
            .inner
        });
        let mut response = field.response;
        let (removed, text, buffer, container_width) = field.inner;

        if let Some(option) = removed {
            select.remove_chip(&option, value);
        }
        if text.changed() {
            let measurer = EguiMeasurer::new(ui.painter().clone());
            select.input_changed(&buffer, value, container_width as f64, &measurer);
        }

        let mut anchor_rect = response.rect;
        if select.is_panel_open() {
            if let Some(hint) = &select.config().hint {
                anchor_rect = anchor_rect.union(hint_label(ui, hint).rect);
            }
        }
        select.revalidate_anchor(to_kurbo(anchor_rect));

        if select.is_panel_open() {
            let width = response.rect.width();
            let (clicked, panel_rect) = match (select.placement(), select.anchor().origin()) {
                (PanelPlacement::Portal, Some(origin)) => {
                    egui::Area::new(id.with("panel"))
                        .order(Order::Foreground)
                        .fixed_pos(egui::pos2(origin.x as f32, origin.y as f32))
                        .show(ui.ctx(), |ui| show_panel(ui, &*select, value, width))
                        .inner
                }
                _ => show_panel(ui, &*select, value, width),
            };
            ui.data_mut(|d| d.insert_temp(panel_id, panel_rect));

            if let Some(option) = clicked {
                let modifiers = ui.input(|i| to_modifiers(i.modifiers));
                select.toggle(&option, modifiers, value);
            }
        } else {
            ui.data_mut(|d| d.remove::<egui::Rect>(panel_id));
        }

        // Runs after the panel so a row that grabbed focus this frame is seen.
        let has_focus = ui.memory(|m| m.has_focus(text_id));
        if has_focus && !had_focus {
            select.focus_gained();
        } else if !has_focus && had_focus {
            select.focus_lost();
            // Clicking the open panel takes focus from the input; take it back.
            // Focus drops on release, when the press origin is already cleared.
            let panel_rect = ui.data(|d| d.get_temp::<egui::Rect>(panel_id));
            let on_panel = ui
                .input(|i| i.pointer.interact_pos().or(i.pointer.latest_pos()))
                .zip(panel_rect)
                .is_some_and(|(pos, rect)| rect.contains(pos));
            if on_panel && select.is_panel_open() {
                log::trace!("Click on suggestion panel, keeping focus");
                ui.memory_mut(|m| m.request_focus(text_id));
                select.focus_gained();
            }
        }
        let focused_now = ui.memory(|m| m.has_focus(text_id));
        ui.data_mut(|d| d.insert_temp(focus_id, focused_now));
        if select.wants_focus() && !focused_now {
            ui.memory_mut(|m| m.request_focus(text_id));
        }
        if select.is_panel_open() && ui.data(|d| d.get_temp::<egui::Rect>(panel_id)).is_none() {
            ui.ctx().request_repaint();
        }

        let mut changed = None;
        let mut focused = false;
        let mut blurred = false;
        for event in select.take_events() {
            match event {
                SelectEvent::Changed(next) => changed = Some(next),
                SelectEvent::Focused => focused = true,
                SelectEvent::Blurred => blurred = true,
            }
        }
        if changed.is_some() {
            response.mark_changed();
            ui.ctx().request_repaint();
        }

        SelectResponse {
            response,
            changed,
            focused,
            blurred,
        }
    }
}

fn show_panel<T: Clone + PartialEq + 'static>(
    ui: &mut Ui,
    select: &Select<T>,
    value: &[SelectOption<T>],
    width: f32,
) -> (Option<SelectOption<T>>, egui::Rect) {
    let frame = panel_frame().show(ui, |ui| {
        ui.set_min_width(width);
        match select.panel_content(value) {
            PanelContent::Suggestions(rows) => {
                let mut clicked = None;
                for row in rows {
                    if suggestion_row(ui, &row.option.label, row.checked) {
                        clicked = Some(row.option.clone());
                    }
                }
                clicked
            }
            PanelContent::Errored(message) => {
                panel_message(ui, message, true);
                None
            }
            PanelContent::NoResults(message) => {
                panel_message(ui, message, false);
                None
            }
        }
    });
    (frame.inner, frame.response.rect)
}

fn to_modifiers(modifiers: egui::Modifiers) -> Modifiers {
    Modifiers {
        shift: modifiers.shift,
        ctrl: modifiers.ctrl,
        alt: modifiers.alt,
        meta: modifiers.mac_cmd,
    }
}

fn to_kurbo(rect: egui::Rect) -> kurbo::Rect {
    kurbo::Rect::new(
        rect.min.x as f64,
        rect.min.y as f64,
        rect.max.x as f64,
        rect.max.y as f64,
    )
}
